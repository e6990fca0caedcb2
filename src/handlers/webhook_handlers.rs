use crate::app_state::AppState;
use crate::sweep::process_webhook;
use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::StatusCode;
use tracing::error;

/// Monzo webhook bodies are tiny, anything bigger is not ours.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Always answers 200: the sender doesn't care what we do with the payload, and an error status
/// would only make it retry. The actual work runs after the response is sent.
pub async fn webhook_handler(State(app_state): State<AppState>, body: Body) -> StatusCode {
    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            error!("failed to read webhook body: {}", e);
            return StatusCode::OK;
        }
    };

    let sweep_tasks = app_state.sweep_tasks.clone();
    sweep_tasks.spawn(async move {
        process_webhook(&app_state, &body).await;
    });

    StatusCode::OK
}
