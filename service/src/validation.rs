use std::sync::OnceLock;

use regex::Regex;
use tc_error::{Error, Result};

// `-u` keeps case folding ASCII-only, so `[a-z]` never matches letters such
// as U+212A KELVIN SIGN that fold to `k` under Unicode rules.
const EMAIL_PATTERN: &str = r"(?i-u)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,6}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tc_log::error(
                    None,
                    format!("[TutorService] Email pattern does not compile: {err}"),
                );
                None
            }
        })
        .as_ref()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when any of the five required tutor fields is blank.
pub fn invalid_tutor_info(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
    password: &str,
) -> bool {
    [first_name, last_name, email, phone_number, password]
        .into_iter()
        .any(is_blank)
}

pub fn regex_email(email: &str) -> Result<()> {
    match email_regex() {
        Some(regex) if regex.is_match(email) => Ok(()),
        _ => Err(Error::InvalidFormat("invalid email style".to_owned())),
    }
}
