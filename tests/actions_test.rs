//! Action handler tests against a loopback stub of the web application.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use docket::actions::{run_action, ActionKind, ActionOutcome};
use docket::client::ApiClient;
use docket::config::ServerConfig;
use docket::ui::ScriptedUi;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorded {
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl Recorded {
    fn record(&self, body: Value) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body);
    }

    fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ServerConfig { base_url: base_url.to_string(), session_cookie: None })
        .unwrap()
}

#[tokio::test]
async fn confirmed_delete_posts_the_identifier_and_reports_destination() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/delete-case",
            post(|State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                recorded.record(body);
                Json(json!({"message": "Case deleted successfully"}))
            }),
        )
        .with_state(recorded.clone());
    let base = serve(router).await;

    let ui = ScriptedUi::answering([true]);
    let outcome = run_action(&client_for(&base), &ui, ActionKind::DeleteCase, "3").await.unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::Completed {
            destination: "/view-cases",
            message: Some("Case deleted successfully".to_string()),
        }
    );
    assert_eq!(recorded.hit_count(), 1);
    assert_eq!(
        recorded.last_body.lock().unwrap().take(),
        Some(json!({"case_id": "3"}))
    );
    assert_eq!(ui.prompts(), vec!["Are you sure you want to delete this case?".to_string()]);
}

#[tokio::test]
async fn declined_confirmation_issues_no_network_call() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/delete-court",
            post(|State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                recorded.record(body);
                Json(json!({}))
            }),
        )
        .with_state(recorded.clone());
    let base = serve(router).await;

    let ui = ScriptedUi::answering([false]);
    let outcome =
        run_action(&client_for(&base), &ui, ActionKind::DeleteCourt, "7").await.unwrap();

    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(recorded.hit_count(), 0);
}

#[tokio::test]
async fn server_error_body_supplies_the_message() {
    let router = Router::new().route(
        "/delete-user",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "You cannot delete your own account"})),
            )
        }),
    );
    let base = serve(router).await;

    let ui = ScriptedUi::answering([true]);
    let err =
        run_action(&client_for(&base), &ui, ActionKind::DeleteUser, "1").await.unwrap_err();
    assert_eq!(err.to_string(), "You cannot delete your own account");
}

#[tokio::test]
async fn error_without_body_falls_back_to_default_message() {
    let router = Router::new()
        .route("/delete-note", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = serve(router).await;

    let ui = ScriptedUi::answering([true]);
    let err =
        run_action(&client_for(&base), &ui, ActionKind::DeleteNote, "5").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete the note.");
}

#[tokio::test]
async fn toggle_needs_no_confirmation_and_reports_the_returned_flag() {
    let router = Router::new().route(
        "/toggle-user-status",
        post(|| async {
            Json(json!({"message": "User deactivated successfully", "is_active": false}))
        }),
    );
    let base = serve(router).await;

    let ui = ScriptedUi::default();
    let outcome =
        run_action(&client_for(&base), &ui, ActionKind::ToggleUserStatus, "2").await.unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::Completed {
            destination: "/view-users",
            message: Some("User deactivated.".to_string()),
        }
    );
    assert!(ui.prompts().is_empty());
}

#[tokio::test]
async fn transport_failure_surfaces_the_default_message() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ui = ScriptedUi::answering([true]);
    let client = client_for(&format!("http://{}/", addr));
    let err = run_action(&client, &ui, ActionKind::DeleteCase, "9").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete the case.");
}
