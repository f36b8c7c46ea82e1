const MODULUS: u32 = 11;
const DIGIT_COUNT: usize = 6;

/// Maps a prefix letter to its checksum value (`A` = 1 .. `Z` = 26).
pub fn letter_value(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(u32::from(upper) - u32::from('A') + 1)
    } else {
        None
    }
}

/// Computes the numeric check value (0..=10) for `prefix` + `digits`.
///
/// Returns `None` unless `prefix` is one or two ASCII letters and `digits` is
/// exactly six ASCII digits.
pub fn check_value(prefix: &str, digits: &str) -> Option<u32> {
    if !(1..=2).contains(&prefix.len()) || digits.len() != DIGIT_COUNT {
        return None;
    }

    let mut components = Vec::with_capacity(prefix.len() + DIGIT_COUNT);
    for c in prefix.chars() {
        components.push(letter_value(c)?);
    }
    for c in digits.chars() {
        components.push(c.to_digit(10)?);
    }

    let count = components.len() as u32;
    let total: u32 = components
        .iter()
        .enumerate()
        .map(|(index, value)| value * (count + 1 - index as u32))
        .sum();

    Some((MODULUS - total % MODULUS) % MODULUS)
}

/// Computes the expected check character (`'0'..='9'` or `'A'`).
pub fn check_character(prefix: &str, digits: &str) -> Option<char> {
    match check_value(prefix, digits)? {
        10 => Some('A'),
        value => char::from_digit(value, 10),
    }
}
