// common checks for the forms
use regex::Regex;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// University Serial Number: letters and digits only.
pub fn valid_usn(usn: &str) -> bool {
    Regex::new(r"^[a-zA-Z0-9]+$").is_ok_and(|re| re.is_match(usn))
}
