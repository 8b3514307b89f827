//! Request models for the invite API
//!
//! Field names mirror the JSON body the API expects.

use serde::{Deserialize, Serialize};

/// A meeting invite as submitted by the form.
///
/// Constructed fresh for every submission attempt and discarded once the
/// request settles. Optional fields default to the empty string rather than
/// `None` because that is what the API receives for blank inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    /// Display name of the person sending the invite (optional).
    pub sender_name: String,
    /// Email address of the sender (required, email-shaped).
    pub sender_email: String,
    /// Email address of the recipient (required, email-shaped).
    pub recipient_email: String,
    /// Meeting title (optional).
    pub title: String,
    /// ISO-8601 local date-time of the meeting (required, non-empty).
    pub datetime: String,
    /// Video-call or meeting-room link (optional).
    pub meeting_link: String,
    /// Free-form message to the recipient (optional).
    pub message: String,
}
