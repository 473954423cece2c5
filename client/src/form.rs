//! Contact form state machine
//!
//! Mirrors the form component driving the submission endpoint:
//! `Idle → Submitting → (Success | Error)`, with `Success` and `Error`
//! returning to `Idle` on the next edit. Local validation uses the same
//! shared schema the server applies; passing it locally only saves a
//! round-trip, the server re-validates unconditionally.

use std::collections::BTreeMap;

use shared::{schema, ContactSubmission, ValidationResult};

use crate::api::{ClientError, ContactApiClient};

/// Fallback shown when the transport itself failed and no server
/// message is available.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unable to submit form. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    ProjectType,
    Message,
}

impl FormField {
    /// Wire name for the field, matching the schema's error keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::ProjectType => "projectType",
            FormField::Message => "message",
        }
    }
}

/// One contact form: draft values, status, and per-field errors.
pub struct ContactForm {
    data: ContactSubmission,
    status: FormStatus,
    message: Option<String>,
    errors: BTreeMap<&'static str, String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            data: ContactSubmission::empty(),
            status: FormStatus::Idle,
            message: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Status banner text: confirmation after success, error message
    /// after a failed submit.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> &ContactSubmission {
        &self.data
    }

    /// Inline error for one field, if any.
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field.as_str()).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Update one field. Clears only that field's error, and returns the
    /// form to `Idle` from a terminal state.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.errors.remove(field.as_str());
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
            self.message = None;
        }

        let value = value.into();
        match field {
            FormField::Name => self.data.name = value,
            FormField::Email => self.data.email = value,
            FormField::Company => self.data.company = value,
            FormField::ProjectType => self.data.project_type = value,
            FormField::Message => self.data.message = value,
        }
    }

    /// Re-apply the shared schema locally. On failure the first message
    /// per field becomes that field's inline error.
    fn validate(&mut self) -> bool {
        match schema::validate_submission(&self.data) {
            ValidationResult::Valid(_) => {
                self.errors.clear();
                true
            }
            ValidationResult::Invalid(field_errors) => {
                self.errors.clear();
                for field in [
                    FormField::Name,
                    FormField::Email,
                    FormField::Company,
                    FormField::ProjectType,
                    FormField::Message,
                ] {
                    if let Some(message) = field_errors
                        .get(field.as_str())
                        .and_then(|messages| messages.first())
                    {
                        self.errors.insert(field.as_str(), message.clone());
                    }
                }
                false
            }
        }
    }

    /// Drive one submission attempt through the API client.
    ///
    /// A second submit while one is in flight is suppressed. A locally
    /// invalid form stays `Idle` with inline errors and never touches
    /// the network. On success all fields reset; on failure the entered
    /// values are preserved for correction.
    pub async fn submit(&mut self, api: &ContactApiClient) -> FormStatus {
        if self.status == FormStatus::Submitting {
            return self.status;
        }

        if !self.validate() {
            self.status = FormStatus::Idle;
            return self.status;
        }

        self.status = FormStatus::Submitting;
        self.message = None;

        let outcome = api.submit(&self.data).await;
        match outcome {
            Ok(ack) => {
                self.status = FormStatus::Success;
                self.message = Some(ack.message);
                self.data = ContactSubmission::empty();
                self.errors.clear();
            }
            Err(err) => {
                self.status = FormStatus::Error;
                self.message = Some(match err {
                    ClientError::Rejected { message, .. } => message,
                    _ => TRANSPORT_FAILURE_MESSAGE.to_string(),
                });
            }
        }

        self.status
    }

    #[cfg(test)]
    pub(crate) fn force_status(&mut self, status: FormStatus) {
        self.status = status;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "John Doe");
        form.set_field(FormField::Email, "john@example.com");
        form.set_field(FormField::Company, "Acme Corp");
        form.set_field(FormField::ProjectType, "Web Applications");
        form.set_field(
            FormField::Message,
            "I need help building a web application for my business.",
        );
        form
    }

    #[tokio::test]
    async fn test_locally_invalid_form_stays_idle_without_network() {
        let mut form = filled_form();
        form.set_field(FormField::Name, "A");
        form.set_field(FormField::Message, "too short");

        // Endpoint is never contacted: a bogus address would fail loudly
        let api = ContactApiClient::new("http://127.0.0.1:1");
        let status = form.submit(&api).await;

        assert_eq!(status, FormStatus::Idle);
        assert_eq!(
            form.field_error(FormField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            form.field_error(FormField::Message),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(form.field_error(FormField::Email), None);
        // Entered values survive a local rejection
        assert_eq!(form.data().name, "A");
    }

    #[tokio::test]
    async fn test_double_submit_is_suppressed_while_submitting() {
        let mut form = filled_form();
        form.force_status(FormStatus::Submitting);

        let api = ContactApiClient::new("http://127.0.0.1:1");
        let status = form.submit(&api).await;

        // The in-flight submission is left alone
        assert_eq!(status, FormStatus::Submitting);
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut form = filled_form();
        form.set_field(FormField::Name, "A");
        form.set_field(FormField::Message, "too short");
        assert!(!form.validate());
        assert!(form.field_error(FormField::Name).is_some());
        assert!(form.field_error(FormField::Message).is_some());

        form.set_field(FormField::Name, "John Doe");

        assert_eq!(form.field_error(FormField::Name), None);
        // The message error is untouched until that field is edited
        assert!(form.field_error(FormField::Message).is_some());
    }

    #[test]
    fn test_edit_returns_terminal_states_to_idle() {
        let mut form = filled_form();
        form.force_status(FormStatus::Error);
        form.set_field(FormField::Name, "Jane Doe");
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), None);

        form.force_status(FormStatus::Success);
        form.set_field(FormField::Company, "Other Corp");
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_validate_takes_first_message_per_field() {
        let mut form = ContactForm::new();
        assert!(!form.validate());

        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Company,
            FormField::ProjectType,
            FormField::Message,
        ] {
            assert!(form.field_error(field).is_some(), "field {:?}", field);
        }
    }
}
