//! Input sanitization for accepted submissions
//!
//! Sanitization runs only on records that already passed validation. It
//! neutralizes markup/script injection before the record reaches the
//! recording sink. SQL-looking text is deliberately left untouched: a
//! sink must use parameterized access, so plain text resembling SQL is
//! ordinary message content here.

use crate::models::ContactSubmission;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Pattern to match tag-delimited markup
    static ref MARKUP_TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip all tag-delimited markup from a string, leaving surrounding
/// plain text intact.
pub fn strip_markup(value: &str) -> String {
    MARKUP_TAG_PATTERN.replace_all(value, "").to_string()
}

/// Sanitize a free-text field: strip markup, then trim. Stripping runs
/// first so whitespace exposed by a removed edge tag is trimmed too,
/// keeping the function idempotent.
pub fn sanitize_text(value: &str) -> String {
    strip_markup(value).trim().to_string()
}

/// Sanitize an email address: markup stripped, trimmed, lower-cased.
pub fn sanitize_email(value: &str) -> String {
    sanitize_text(value).to_lowercase()
}

/// Sanitize every field of a validated submission.
pub fn sanitize(submission: &ContactSubmission) -> ContactSubmission {
    ContactSubmission {
        name: sanitize_text(&submission.name),
        email: sanitize_email(&submission.email),
        company: sanitize_text(&submission.company),
        project_type: sanitize_text(&submission.project_type),
        message: sanitize_text(&submission.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<b>bold</b>"), "bold");
        assert_eq!(strip_markup("<script>alert('xss')</script>"), "alert('xss')");
        assert_eq!(strip_markup("no tags here"), "no tags here");
        assert_eq!(strip_markup("<p>paragraph</p><br/>more"), "paragraphmore");
        // A lone '<' without a closing '>' is plain text
        assert_eq!(strip_markup("a < b"), "a < b");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("  John <b>Doe</b>  "), "John Doe");
        assert_eq!(
            sanitize_text("John<script>alert('xss')</script>Doe"),
            "Johnalert('xss')Doe"
        );
        // Edge tags may expose whitespace; the result is still trimmed
        assert_eq!(sanitize_text("<p> hello</p>"), "hello");
    }

    #[test]
    fn test_sanitize_email_lowercases() {
        assert_eq!(sanitize_email("  John@Example.COM  "), "john@example.com");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let submission = ContactSubmission {
            name: "  Mary<img src=x onerror=alert(1)>Smith  ".to_string(),
            email: "  JOHN@Example.com ".to_string(),
            company: "Tech<script>alert('hack')</script>Corp".to_string(),
            project_type: " Web Applications ".to_string(),
            message: "<p> We need help with our project </p>".to_string(),
        };

        let once = sanitize(&submission);
        let twice = sanitize(&once);
        assert_eq!(once, twice);

        assert_eq!(once.name, "Maryalert(1)Smith");
        assert_eq!(once.email, "john@example.com");
        assert_eq!(once.company, "Techalert('hack')Corp");
        assert_eq!(once.message, "We need help with our project");
    }

    #[test]
    fn test_sanitized_fields_contain_no_tag_delimiters() {
        let submission = ContactSubmission {
            name: "Bob<svg onload=alert(1)>Wilson".to_string(),
            email: "bob@example.com".to_string(),
            company: "Cloud<iframe src=javascript:alert(1)>Services".to_string(),
            project_type: "Cloud Infrastructure".to_string(),
            message: "Interested in <embed src=x> your services here".to_string(),
        };

        let sanitized = sanitize(&submission);
        for value in [
            &sanitized.name,
            &sanitized.company,
            &sanitized.message,
        ] {
            assert!(!value.contains('<') && !value.contains('>'), "value: {}", value);
        }
        assert!(sanitized.name.contains("Bob") && sanitized.name.contains("Wilson"));
    }

    #[test]
    fn test_sql_like_text_passes_through() {
        let message = "Please help; also '; DROP TABLE users; -- is in our logs";
        assert_eq!(sanitize_text(message), message);
    }
}
