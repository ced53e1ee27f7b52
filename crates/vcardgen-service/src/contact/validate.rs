//! Field validation checkpoints.

use email_address::{EmailAddress, Options};
use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;

use super::submission::{ContactField, ContactSubmission};
use crate::error::{ServiceError, ServiceResult};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// ## Summary
/// Field-level validation failures, keyed by field.
///
/// Keeps insertion order and serializes as a JSON object
/// (`{"email": "Invalid primary email address"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: Vec<FieldError>,
}

impl ValidationErrorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure; a second failure for the same field replaces the first.
    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = self.errors.iter_mut().find(|e| e.field == field) {
            existing.message = message;
        } else {
            self.errors.push(FieldError { field, message });
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Serialize for ValidationErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(error.field.as_str(), &error.message)?;
        }
        map.end()
    }
}

/// A validation stage. Stages run in order and the first one that reports
/// anything ends validation.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pub name: &'static str,
    pub check: fn(&ContactSubmission) -> ValidationErrorSet,
}

/// Emails are checked before URLs, so an invalid email hides an invalid URL
/// in the same submission.
pub const CHECKPOINTS: [Checkpoint; 2] = [
    Checkpoint {
        name: "emails",
        check: check_emails,
    },
    Checkpoint {
        name: "urls",
        check: check_urls,
    },
];

const EMAIL_FIELDS: [(ContactField, &str); 2] = [
    (ContactField::Email, "Invalid primary email address"),
    (ContactField::AdditionalEmail, "Invalid additional email address"),
];

const URL_FIELDS: [(ContactField, &str); 2] = [
    (ContactField::Website, "Invalid website URL"),
    (ContactField::Linkedin, "Invalid LinkedIn URL"),
];

/// Returns whether the value is a bare addr-spec with a dotted domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .with_minimum_sub_domains(2_usize);
    EmailAddress::parse_with_options(value, options).is_ok()
}

/// Returns whether the value is an absolute URL with a host.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

fn check_fields(
    submission: &ContactSubmission,
    fields: &[(ContactField, &str)],
    is_valid: fn(&str) -> bool,
) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();
    for (field, message) in fields {
        if let Some(value) = submission.value(*field)
            && !is_valid(value)
        {
            errors.insert(*field, *message);
        }
    }
    errors
}

fn check_emails(submission: &ContactSubmission) -> ValidationErrorSet {
    check_fields(submission, &EMAIL_FIELDS, is_valid_email)
}

fn check_urls(submission: &ContactSubmission) -> ValidationErrorSet {
    check_fields(submission, &URL_FIELDS, is_valid_url)
}

/// ## Summary
/// Runs the checkpoints in order. Missing and blank fields are skipped.
///
/// Each value is checked after trimming surrounding whitespace and before
/// any other normalization, so `" jane@example.com "` is accepted. The
/// value that reaches the card is trimmed the same way.
///
/// ## Errors
/// Returns `ServiceError::Validation` with the errors of the first checkpoint
/// that found any; later checkpoints are not run.
#[tracing::instrument(skip(submission))]
pub fn validate_submission(submission: &ContactSubmission) -> ServiceResult<()> {
    for checkpoint in &CHECKPOINTS {
        let errors = (checkpoint.check)(submission);
        if !errors.is_empty() {
            tracing::info!(
                checkpoint = checkpoint.name,
                count = errors.len(),
                "Validation checkpoint failed"
            );
            return Err(ServiceError::Validation(errors));
        }
    }
    Ok(())
}
