use hkid::IdentityCard;

fn main() {
    env_logger::init();

    let candidates: Vec<String> = std::env::args().skip(1).collect();
    if candidates.is_empty() {
        eprintln!("usage: check <HKID>...");
        std::process::exit(2);
    }

    let mut all_valid = true;
    for raw in &candidates {
        let card = IdentityCard::from(raw.as_str());
        match card.as_string() {
            Some(canonical) => println!("{:<20} valid   {}", raw, canonical),
            None => {
                all_valid = false;
                println!("{:<20} invalid", raw);
            }
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
}
