//! Shared test harness: a recording UI adapter, a submit-event stub, and a
//! throwaway invite API built on axum.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{extract::Json, http::StatusCode, routing::post, Router};
use invite_form::{Field, FormUi, StatusKind, SubmitTrigger};
use serde_json::Value;

/// Recording implementation of [`FormUi`].
#[derive(Debug, Default)]
pub struct MockUi {
    pub values: HashMap<Field, String>,
    pub field_errors: HashMap<Field, String>,
    pub button_enabled: bool,
    pub button_label: String,
    /// Every `(enabled, label)` pair the controller pushed, in order.
    pub button_events: Vec<(bool, String)>,
    pub status: Option<(String, StatusKind)>,
    pub reset_count: usize,
}

impl MockUi {
    pub fn new() -> Self {
        Self {
            button_enabled: true,
            button_label: "Send Invite".to_string(),
            ..Default::default()
        }
    }

    /// A form filled in with values that pass validation.
    pub fn valid() -> Self {
        let mut ui = Self::new();
        ui.set(Field::SenderName, "Ada Lovelace");
        ui.set(Field::SenderEmail, "ada@example.org");
        ui.set(Field::RecipientEmail, "grace@example.org");
        ui.set(Field::Title, "Quarterly sync");
        ui.set(Field::Datetime, "2026-09-01T10:00");
        ui.set(Field::MeetingLink, "https://meet.example.org/sync");
        ui.set(Field::Message, "Agenda attached");
        ui
    }

    pub fn set(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }
}

impl FormUi for MockUi {
    fn field_value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_error(&mut self, field: Field, message: Option<&str>) {
        match message {
            Some(message) => {
                self.field_errors.insert(field, message.to_string());
            }
            None => {
                self.field_errors.remove(&field);
            }
        }
    }

    fn set_submit_button(&mut self, enabled: bool, label: &str) {
        self.button_enabled = enabled;
        self.button_label = label.to_string();
        self.button_events.push((enabled, label.to_string()));
    }

    fn show_status(&mut self, message: &str, kind: StatusKind) {
        self.status = Some((message.to_string(), kind));
    }

    fn hide_status(&mut self) {
        self.status = None;
    }

    fn reset_fields(&mut self) {
        self.values.clear();
        self.reset_count += 1;
    }
}

/// Recording implementation of [`SubmitTrigger`].
#[derive(Debug, Default)]
pub struct MockTrigger {
    pub prevented: bool,
}

impl SubmitTrigger for MockTrigger {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}

pub type ReceivedInvites = Arc<Mutex<Vec<Value>>>;

/// Spawn a single-route invite API on an ephemeral port that answers every
/// POST with the given status and body, recording each JSON payload it
/// receives. Returns the base URL and the payload log.
pub async fn spawn_invite_api(status: StatusCode, body: &'static str) -> (String, ReceivedInvites) {
    let received: ReceivedInvites = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();

    let app = Router::new().route(
        "/api/invite",
        post(move |Json(payload): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().expect("payload log poisoned").push(payload);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test invite API");
    });

    (format!("http://{addr}"), received)
}

/// A base URL that refuses connections: bind an ephemeral port, then drop
/// the listener before anyone connects.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway listener addr");
    drop(listener);
    format!("http://{addr}")
}
