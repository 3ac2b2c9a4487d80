use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::{AppError, Result};

static E164_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("valid phone regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

/// Strip spaces, dashes and brackets users type between digit groups
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

pub fn is_valid_phone(input: &str) -> bool {
    E164_PHONE.is_match(&normalize_phone(input))
}

pub fn validate_phone(input: &str) -> Result<String> {
    let phone = normalize_phone(input);
    if E164_PHONE.is_match(&phone) {
        Ok(phone)
    } else {
        Err(AppError::validation(
            "Please enter a valid phone number in international format, e.g. +447700900123",
        ))
    }
}

pub fn validate_email(input: &str) -> Result<String> {
    let email = input.trim();
    if EMAIL.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(AppError::validation("Please enter a valid email address"))
    }
}

pub fn validate_password(input: &str) -> Result<()> {
    if input.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_e164() {
        assert!(is_valid_phone("+447700900123"));
        assert!(is_valid_phone("+44 7700 900123"));
        assert!(is_valid_phone("+1 (415) 555-2671"));
    }

    #[test]
    fn test_phone_rejects_local_formats() {
        assert!(!is_valid_phone("07700900123"));
        assert!(!is_valid_phone("+0123456789"));
        assert!(!is_valid_phone("+44"));
        assert!(!is_valid_phone("+4477009001234567"));
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_validate_phone_normalizes() {
        assert_eq!(validate_phone("+44 7700-900 123").unwrap(), "+447700900123");
    }

    #[test]
    fn test_email_and_password() {
        assert_eq!(validate_email(" sam@uni.ac.uk ").unwrap(), "sam@uni.ac.uk");
        assert!(validate_email("sam@uni").is_err());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
