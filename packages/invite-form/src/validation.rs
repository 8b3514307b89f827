//! Field validation for the invite form.
//!
//! Deliberately permissive: the email check is a shape check
//! (`something@something.something`), not RFC validation, and the datetime
//! check is presence-only. The picker is what keeps datetime well-formed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::ui::Field;

lazy_static! {
    // One-or-more non-whitespace-non-@, "@", same, ".", same.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
}

/// A single field failure from one validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl ValidationError {
    /// The message shown next to the field.
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (Field::SenderEmail, ErrorKind::Required) => "Your email is required",
            (Field::RecipientEmail, ErrorKind::Required) => "Recipient email is required",
            (Field::Datetime, ErrorKind::Required) => "Meeting date and time is required",
            (_, ErrorKind::InvalidFormat) => "Please enter a valid email address",
            (_, ErrorKind::Required) => "This field is required",
        }
    }
}

/// Shape check for email fields.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check the three validated fields in a single pass.
///
/// Every failing field contributes its own error; there is no
/// short-circuiting. Email values are trimmed before checking (the
/// submitted values are not — see the controller). The datetime value is
/// used as-is.
pub fn check_fields(
    sender_email: &str,
    recipient_email: &str,
    datetime: &str,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let sender = sender_email.trim();
    if sender.is_empty() {
        errors.push(ValidationError {
            field: Field::SenderEmail,
            kind: ErrorKind::Required,
        });
    } else if !is_email_shaped(sender) {
        errors.push(ValidationError {
            field: Field::SenderEmail,
            kind: ErrorKind::InvalidFormat,
        });
    }

    let recipient = recipient_email.trim();
    if recipient.is_empty() {
        errors.push(ValidationError {
            field: Field::RecipientEmail,
            kind: ErrorKind::Required,
        });
    } else if !is_email_shaped(recipient) {
        errors.push(ValidationError {
            field: Field::RecipientEmail,
            kind: ErrorKind::InvalidFormat,
        });
    }

    if datetime.is_empty() {
        errors.push(ValidationError {
            field: Field::Datetime,
            kind: ErrorKind::Required,
        });
    }

    errors
}
