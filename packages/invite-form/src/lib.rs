//! Meeting-invite form controller
//!
//! Validates the invite form, POSTs it to the invite API via
//! [`invite_client::InviteClient`], and renders the outcome through a
//! host-provided [`FormUi`] adapter. The hosting environment (a browser
//! shell, a desktop shell, or a test harness) owns the widgets and the
//! event loop; it hands the controller a `FormUi` and calls
//! [`InviteFormController::submit`] when the user submits the form.
//!
//! # Example
//!
//! ```rust,ignore
//! use invite_form::{InviteClient, InviteFormController};
//!
//! let mut controller = InviteFormController::new(InviteClient::from_env());
//! // on user submit:
//! controller.submit(&mut event, &mut ui).await;
//! ```

pub mod controller;
pub mod ui;
pub mod validation;

pub use controller::{InviteFormController, SubmissionState};
pub use invite_client::{ClientError, InviteClient, InviteRequest};
pub use ui::{min_datetime_now, Field, FormUi, StatusKind, SubmitTrigger};
pub use validation::{ErrorKind, ValidationError};
