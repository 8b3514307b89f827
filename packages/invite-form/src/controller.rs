//! The invite form controller.
//!
//! Owns the submission state machine and drives the host's [`FormUi`]
//! adapter: validate on every attempt, POST when valid, and render the
//! outcome. Every failure is absorbed into UI state; nothing escapes
//! [`InviteFormController::submit`].

use invite_client::{ClientError, InviteClient, InviteRequest};
use tracing::debug;

use crate::ui::{Field, FormUi, StatusKind, SubmitTrigger};
use crate::validation;

const LABEL_IDLE: &str = "Send Invite";
const LABEL_SENDING: &str = "Sending...";
const STATUS_SENT: &str = "Meeting invite sent successfully! \u{1F389}";

/// Whether a submission is currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
}

/// Form controller for the meeting-invite page.
pub struct InviteFormController {
    client: InviteClient,
    state: SubmissionState,
}

impl InviteFormController {
    pub fn new(client: InviteClient) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Run one validation pass over the three required fields.
    ///
    /// Clears every previously shown field error first, then shows a
    /// message next to each failing field. All fields are checked in the
    /// same pass, so simultaneous failures all become visible at once.
    pub fn validate(&self, ui: &mut impl FormUi) -> bool {
        for field in Field::variants() {
            ui.set_field_error(*field, None);
        }

        let errors = validation::check_fields(
            &ui.field_value(Field::SenderEmail),
            &ui.field_value(Field::RecipientEmail),
            &ui.field_value(Field::Datetime),
        );

        for error in &errors {
            ui.set_field_error(error.field, Some(error.message()));
        }

        errors.is_empty()
    }

    /// Handle one form-submission attempt end to end.
    ///
    /// Invalid input stops before any network traffic. Otherwise the
    /// submit control is disabled for the duration of the single POST, and
    /// re-enabled on every outcome: success (banner + field reset), server
    /// rejection (banner with the response text), or network failure
    /// (banner with the error description).
    pub async fn submit(&mut self, trigger: &mut impl SubmitTrigger, ui: &mut impl FormUi) {
        trigger.prevent_default();

        // The disabled button already prevents re-entry from the form
        // itself; this guard covers hosts that call in directly.
        if self.state == SubmissionState::Sending {
            return;
        }

        ui.hide_status();

        if !self.validate(ui) {
            debug!("invite form failed validation");
            return;
        }

        self.state = SubmissionState::Sending;
        ui.set_submit_button(false, LABEL_SENDING);

        // Values are read raw here: validation trims emails before
        // checking, but the transmitted values are exactly what the form
        // holds.
        let invite = read_invite(ui);

        match self.client.send(&invite).await {
            Ok(()) => {
                ui.show_status(STATUS_SENT, StatusKind::Success);
                ui.reset_fields();
            }
            Err(ClientError::Rejected { body, .. }) => {
                let detail = if body.is_empty() {
                    "Server error"
                } else {
                    body.as_str()
                };
                ui.show_status(&format!("Failed to send invite: {detail}"), StatusKind::Error);
            }
            Err(err @ ClientError::Network(_)) => {
                // ClientError::Network displays as "Network error: ...".
                ui.show_status(&err.to_string(), StatusKind::Error);
            }
        }

        // Unconditional: runs after every arm above.
        self.state = SubmissionState::Idle;
        ui.set_submit_button(true, LABEL_IDLE);
    }
}

fn read_invite(ui: &impl FormUi) -> InviteRequest {
    InviteRequest {
        sender_name: ui.field_value(Field::SenderName),
        sender_email: ui.field_value(Field::SenderEmail),
        recipient_email: ui.field_value(Field::RecipientEmail),
        title: ui.field_value(Field::Title),
        datetime: ui.field_value(Field::Datetime),
        meeting_link: ui.field_value(Field::MeetingLink),
        message: ui.field_value(Field::Message),
    }
}
