//! Delete and toggle actions against the web application
//!
//! Each action is a single best-effort POST with a JSON body carrying one
//! identifier. Destructive actions are gated on an explicit confirmation;
//! a declined confirmation issues no network call. There is no retry and
//! no backoff; every failure is terminal for that invocation.

use crate::client::ApiClient;
use crate::ui::Ui;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    DeleteCase,
    DeleteCourt,
    DeleteNote,
    ToggleUserStatus,
    DeleteUser,
}

/// Fixed description of one endpoint: path, body key, confirmation prompt
/// for destructive actions, default failure message, and the view to show
/// after success.
#[derive(Debug)]
pub struct ActionSpec {
    pub path: &'static str,
    pub body_key: &'static str,
    pub confirm: Option<&'static str>,
    pub failure: &'static str,
    pub destination: &'static str,
}

const DELETE_CASE: ActionSpec = ActionSpec {
    path: "/delete-case",
    body_key: "case_id",
    confirm: Some("Are you sure you want to delete this case?"),
    failure: "Failed to delete the case.",
    destination: crate::views::CASES,
};

const DELETE_COURT: ActionSpec = ActionSpec {
    path: "/delete-court",
    body_key: "court_id",
    confirm: Some("Are you sure you want to delete this court?"),
    failure: "Failed to delete the court.",
    destination: crate::views::COURTS,
};

const DELETE_NOTE: ActionSpec = ActionSpec {
    path: "/delete-note",
    body_key: "id",
    confirm: Some("Are you sure you want to delete this note?"),
    failure: "Failed to delete the note.",
    destination: crate::views::COURTS,
};

const TOGGLE_USER_STATUS: ActionSpec = ActionSpec {
    path: "/toggle-user-status",
    body_key: "user_id",
    confirm: None,
    failure: "Failed to update the user.",
    destination: crate::views::USERS,
};

const DELETE_USER: ActionSpec = ActionSpec {
    path: "/delete-user",
    body_key: "user_id",
    confirm: Some("Are you sure you want to delete this user?"),
    failure: "Failed to delete the user.",
    destination: crate::views::USERS,
};

impl ActionKind {
    pub fn spec(self) -> &'static ActionSpec {
        match self {
            ActionKind::DeleteCase => &DELETE_CASE,
            ActionKind::DeleteCourt => &DELETE_COURT,
            ActionKind::DeleteNote => &DELETE_NOTE,
            ActionKind::ToggleUserStatus => &TOGGLE_USER_STATUS,
            ActionKind::DeleteUser => &DELETE_USER,
        }
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    /// The server rejected the request; the message is the response body's
    /// error field, or the action's default failure message.
    #[error("{message}")]
    Server { message: String },
    /// The request never completed. The underlying error goes to the log
    /// only; the user sees the default failure message.
    #[error("{fallback}")]
    Transport { fallback: &'static str },
}

/// Success and error body shapes the application responds with, parsed
/// leniently.
#[derive(Debug, Deserialize, Default)]
struct ActionResponse {
    message: Option<String>,
    error: Option<String>,
    is_active: Option<bool>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation prompt; nothing was sent.
    Cancelled,
    /// The server accepted the request.
    Completed { destination: &'static str, message: Option<String> },
}

pub async fn run_action(
    client: &ApiClient,
    ui: &dyn Ui,
    kind: ActionKind,
    id: &str,
) -> Result<ActionOutcome> {
    let spec = kind.spec();

    if let Some(prompt) = spec.confirm {
        if !ui.confirm(prompt)? {
            log::info!("{} cancelled by user", spec.path);
            return Ok(ActionOutcome::Cancelled);
        }
    }

    let mut body = serde_json::Map::new();
    body.insert(spec.body_key.to_string(), serde_json::Value::String(id.to_string()));
    let body = serde_json::Value::Object(body);

    let response = match client.post_json(spec.path, &body).await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("{} request failed: {:?}", spec.path, err);
            return Err(anyhow!(ActionError::Transport { fallback: spec.failure }));
        }
    };

    let status = response.status();
    let parsed: ActionResponse = response.json().await.unwrap_or_default();

    if status.is_success() {
        let message = match kind {
            ActionKind::ToggleUserStatus => match parsed.is_active {
                Some(true) => Some("User activated.".to_string()),
                Some(false) => Some("User deactivated.".to_string()),
                None => parsed.message,
            },
            _ => parsed.message,
        };
        log::info!("{} succeeded", spec.path);
        return Ok(ActionOutcome::Completed { destination: spec.destination, message });
    }

    let message = parsed.error.unwrap_or_else(|| spec.failure.to_string());
    log::warn!("{} returned {}: {}", spec.path, status, message);
    Err(anyhow!(ActionError::Server { message }))
}
