//! Field validators for the contact-form schema
//!
//! Each validator checks one field's trimmed value and reports the exact
//! message the form surfaces to users. Validators are pure and never
//! short-circuit each other; the schema collects every violation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Email shape: one '@' separating a non-empty local part from a
    /// domain containing at least one '.', with no embedded whitespace.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum length for the name field
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum length for the name field
pub const NAME_MAX_LENGTH: usize = 100;
/// Minimum length for the company field
pub const COMPANY_MIN_LENGTH: usize = 2;
/// Maximum length for the company field
pub const COMPANY_MAX_LENGTH: usize = 100;
/// Minimum length for the message field
pub const MESSAGE_MIN_LENGTH: usize = 10;
/// Maximum length for the message field
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// Validate a bounded free-text field, naming the field in the message.
/// Lengths are counted in characters on the trimmed value.
pub fn validate_bounded_text(
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(format!("{} must be at least {} characters", label, min));
    }
    if len > max {
        return Err(format!("{} must be at most {} characters", label, max));
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), String> {
    validate_bounded_text(value, NAME_MIN_LENGTH, NAME_MAX_LENGTH, "Name")
}

pub fn validate_company(value: &str) -> Result<(), String> {
    validate_bounded_text(value, COMPANY_MIN_LENGTH, COMPANY_MAX_LENGTH, "Company name")
}

pub fn validate_message(value: &str) -> Result<(), String> {
    validate_bounded_text(value, MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH, "Message")
}

/// Validate the email shape. An empty string fails the same check as a
/// malformed address; empty is not a distinct error.
pub fn validate_email(value: &str) -> Result<(), String> {
    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Validate the project type: any non-empty string is accepted. The nine
/// published categories are advisory only, not enforced here.
pub fn validate_project_type(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Please select a project type".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name("John Doe").is_ok());

        let err = validate_name("A").unwrap_err();
        assert_eq!(err, "Name must be at least 2 characters");

        let err = validate_name(&"x".repeat(101)).unwrap_err();
        assert_eq!(err, "Name must be at most 100 characters");

        // Length is measured after trimming
        assert!(validate_name("  A  ").is_err());
        assert!(validate_name("  Jo  ").is_ok());
    }

    #[test]
    fn test_validate_name_counts_chars_not_bytes() {
        // Two chars, six bytes
        assert!(validate_name("李明").is_ok());
    }

    #[test]
    fn test_validate_company_message_text() {
        let err = validate_company("A").unwrap_err();
        assert_eq!(err, "Company name must be at least 2 characters");

        let err = validate_message("too short").unwrap_err();
        assert_eq!(err, "Message must be at least 10 characters");

        let err = validate_message(&"m".repeat(1001)).unwrap_err();
        assert_eq!(err, "Message must be at most 1000 characters");

        assert!(validate_message("long enough message").is_ok());
    }

    #[test]
    fn test_validate_email_shapes() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("user.name@sub.domain.co.uk").is_ok());
        assert!(validate_email("  john@example.com  ").is_ok());

        for bad in [
            "",
            "invalid-email",
            "@domain.com",
            "user@",
            "user@domain",
            "two@@example.com",
            "spaced name@example.com",
            "plaintext",
        ] {
            let err = validate_email(bad).unwrap_err();
            assert_eq!(err, "Please enter a valid email address", "input: {:?}", bad);
        }
    }

    #[test]
    fn test_validate_project_type() {
        assert!(validate_project_type("Web Applications").is_ok());
        // Free text is accepted; the nine categories are not enforced
        assert!(validate_project_type("something else entirely").is_ok());

        let err = validate_project_type("   ").unwrap_err();
        assert_eq!(err, "Please select a project type");
    }
}
