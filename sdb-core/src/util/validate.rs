use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digits with the usual separators, e.g. "415-567-1234" or "+49 30 1234567".
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 /().-]{1,24}$").unwrap();
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
