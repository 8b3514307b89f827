//! UI-adapter seam between the controller and its hosting environment.
//!
//! The controller never touches a DOM (or any widget toolkit) directly; the
//! host hands it a [`FormUi`] implementation and invokes
//! [`crate::InviteFormController::submit`] when the user triggers the form.

use chrono::Local;

/// The seven form fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    SenderName,
    SenderEmail,
    RecipientEmail,
    Title,
    Datetime,
    MeetingLink,
    Message,
}

impl Field {
    /// Wire/form name; matches the JSON keys of the invite request.
    pub fn name(&self) -> &'static str {
        match self {
            Field::SenderName => "sender_name",
            Field::SenderEmail => "sender_email",
            Field::RecipientEmail => "recipient_email",
            Field::Title => "title",
            Field::Datetime => "datetime",
            Field::MeetingLink => "meeting_link",
            Field::Message => "message",
        }
    }

    /// Id of the field's error container in the hosting page, following
    /// its camelCase-plus-`Error` convention.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::SenderName => "senderNameError",
            Field::SenderEmail => "senderEmailError",
            Field::RecipientEmail => "recipientEmailError",
            Field::Title => "titleError",
            Field::Datetime => "datetimeError",
            Field::MeetingLink => "meetingLinkError",
            Field::Message => "messageError",
        }
    }

    pub fn variants() -> &'static [Field] {
        &[
            Field::SenderName,
            Field::SenderEmail,
            Field::RecipientEmail,
            Field::Title,
            Field::Datetime,
            Field::MeetingLink,
            Field::Message,
        ]
    }
}

/// Styling of the status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Green banner.
    Success,
    /// Red banner.
    Error,
}

/// Host-provided rendering surface for the invite form.
///
/// All operations are synchronous; every mutation happens on the host's
/// single UI thread of execution.
pub trait FormUi {
    /// Current raw value of a field. Blank or absent fields read as `""`.
    fn field_value(&self, field: Field) -> String;

    /// Show (`Some`) or clear (`None`) the inline error for a field.
    fn set_field_error(&mut self, field: Field, message: Option<&str>);

    /// Enable/disable the submit control and set its label.
    fn set_submit_button(&mut self, enabled: bool, label: &str);

    /// Replace the status banner content.
    fn show_status(&mut self, message: &str, kind: StatusKind);

    /// Remove and hide the status banner.
    fn hide_status(&mut self);

    /// Reset every field to its blank default.
    fn reset_fields(&mut self);
}

/// The form-submission event, as seen by the controller.
///
/// Browser shells wrap their native submit event; test harnesses use a
/// recording stub.
pub trait SubmitTrigger {
    /// Suppress the host's default submission behavior (e.g. page
    /// navigation in a browser).
    fn prevent_default(&mut self);
}

/// Current local time formatted for a `datetime-local` picker's `min`
/// attribute. Presentation hint only; nothing server-side enforces it.
pub fn min_datetime_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}
