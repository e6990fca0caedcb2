mod webhook_handlers;

pub use self::webhook_handlers::*;

use crate::app_state::AppState;
use axum::{routing::any, Router};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // any method on `/` goes to the webhook handler, health checks included
        .route("/", any(webhook_handler))
        .with_state(app_state)
        .layer((
            TraceLayer::new_for_http(),
            // Graceful shutdown will wait for outstanding requests to complete. Add a timeout so
            // requests don't hang forever.
            TimeoutLayer::new(Duration::from_secs(10)),
        ))
}
