use regex::Regex;
use std::sync::LazyLock;

/// Character classes are ASCII ranges, never `(?i)` or `\d`.
static HKID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{1,2})([0-9]{6})\(?([0-9Aa])\)?").expect("invalid regex")
});

/// The three structural parts of an HKID, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Components {
    /// One or two uppercase ASCII letters.
    pub prefix: String,
    /// Exactly six ASCII digits.
    pub digits: String,
    /// `'0'..='9'` or `'A'`.
    pub check_character: char,
}

/// Finds the first HKID-shaped substring of `raw`.
///
/// Returns `None` when nothing in `raw` matches the structural pattern.
pub fn extract(raw: &str) -> Option<Components> {
    let caps = HKID_PATTERN.captures(raw)?;
    let prefix = caps.get(1)?.as_str().to_ascii_uppercase();
    let digits = caps.get(2)?.as_str().to_string();
    let check_character = caps.get(3)?.as_str().chars().next()?.to_ascii_uppercase();
    Some(Components {
        prefix,
        digits,
        check_character,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> Option<(String, String, char)> {
        extract(raw).map(|c| (c.prefix, c.digits, c.check_character))
    }

    #[test]
    fn extracts_bracketed_form() {
        assert_eq!(
            parts("A123456(3)"),
            Some(("A".into(), "123456".into(), '3'))
        );
    }

    #[test]
    fn extracts_two_letter_prefix() {
        assert_eq!(
            parts("AB000013(A)"),
            Some(("AB".into(), "000013".into(), 'A'))
        );
    }

    #[test]
    fn brackets_are_independently_optional() {
        for raw in ["A1234563", "A123456(3", "A1234563)", "A123456(3)"] {
            assert_eq!(
                parts(raw),
                Some(("A".into(), "123456".into(), '3')),
                "input {raw}"
            );
        }
    }

    #[test]
    fn normalizes_case() {
        assert_eq!(
            parts("ab000013(a)"),
            Some(("AB".into(), "000013".into(), 'A'))
        );
    }

    #[test]
    fn tolerates_surrounding_text() {
        assert_eq!(
            parts("  HKID: z000001(a) issued 1990"),
            Some(("Z".into(), "000001".into(), 'A'))
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            parts("A123456(3) B987654(1)"),
            Some(("A".into(), "123456".into(), '3'))
        );
    }

    #[test]
    fn five_digits_do_not_match() {
        assert_eq!(parts("A12345(3)"), None);
        assert_eq!(parts("12345"), None);
    }

    #[test]
    fn seventh_digit_is_read_as_the_check_character() {
        // Only six digits are consumed; an unbracketed seventh digit is the check character.
        assert_eq!(
            parts("A1234567"),
            Some(("A".into(), "123456".into(), '7'))
        );
        assert_eq!(
            parts("A1234567(8)"),
            Some(("A".into(), "123456".into(), '7'))
        );
    }

    #[test]
    fn three_letters_use_the_last_two() {
        assert_eq!(
            parts("XAB000013A"),
            Some(("AB".into(), "000013".into(), 'A'))
        );
    }

    #[test]
    fn rejects_other_check_letters() {
        assert_eq!(parts("A123456(B)"), None);
    }

    #[test]
    fn rejects_whitespace_inside_the_shape() {
        assert_eq!(parts("A 123456(3)"), None);
        assert_eq!(parts("A123456 (3)"), None);
    }

    #[test]
    fn rejects_non_ascii_digits_and_letters() {
        assert_eq!(parts("A１２３４５６(3)"), None);
        assert_eq!(parts("\u{212A}123456(3)"), None);
        assert_eq!(parts(""), None);
    }
}
