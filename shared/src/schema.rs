//! Declarative contact-form schema
//!
//! The schema classifies an arbitrary input record as valid or invalid
//! and enumerates every violated constraint per field. It is shared by
//! the server handler and the client form so both sides apply identical
//! rules; the server still re-validates unconditionally.

use serde_json::Value;

use crate::models::{ContactSubmission, FieldErrors};
use crate::validators::{
    validate_company, validate_email, validate_message, validate_name, validate_project_type,
};

/// The five wire field names, in form order.
pub const FIELD_NAMES: [&str; 5] = ["name", "email", "company", "projectType", "message"];

/// Outcome of applying the schema to one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ContactSubmission),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Field errors when invalid, `None` when valid.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }
}

/// Accumulates per-field messages without short-circuiting.
#[derive(Debug, Default)]
struct FieldErrorsBuilder {
    errors: FieldErrors,
}

impl FieldErrorsBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn check<F>(&mut self, field: &str, validator: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if let Err(message) = validator() {
            self.errors.entry(field.to_string()).or_default().push(message);
        }
        self
    }

    fn build(self) -> Option<FieldErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors)
        }
    }
}

/// Apply the schema to a typed record. Every field is evaluated on every
/// call; the result carries an entry for each failing field, not just
/// the first one encountered. Pure function of input to result.
pub fn validate_submission(submission: &ContactSubmission) -> ValidationResult {
    let mut builder = FieldErrorsBuilder::new();

    builder
        .check("name", || validate_name(&submission.name))
        .check("email", || validate_email(&submission.email))
        .check("company", || validate_company(&submission.company))
        .check("projectType", || validate_project_type(&submission.project_type))
        .check("message", || validate_message(&submission.message));

    match builder.build() {
        None => ValidationResult::Valid(submission.clone()),
        Some(errors) => ValidationResult::Invalid(errors),
    }
}

/// Apply the schema to arbitrary JSON. A missing field, a non-string
/// value, or a non-object input reads as the empty string for that
/// field, which the field's own rule then rejects.
pub fn validate_value(body: &Value) -> ValidationResult {
    let submission = ContactSubmission {
        name: text_field(body, "name"),
        email: text_field(body, "email"),
        company: text_field(body, "company"),
        project_type: text_field(body, "projectType"),
        message: text_field(body, "message"),
    };
    validate_submission(&submission)
}

fn text_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
