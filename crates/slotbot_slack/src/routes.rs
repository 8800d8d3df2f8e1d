// --- File: crates/slotbot_slack/src/routes.rs ---

use crate::auth::{verify_slack_signature, SlackAuthState};
use crate::handlers::{book_handler, bookings_handler, next_handler, SlackState};
use axum::{middleware, routing::post, Router};
use std::sync::Arc;

/// Slash command routes. Every request is checked against the signing secret before
/// its body reaches a handler.
pub fn routes(state: Arc<SlackState>, auth: Arc<SlackAuthState>) -> Router {
    Router::new()
        .route("/slack/book", post(book_handler))
        .route("/slack/next", post(next_handler))
        .route("/slack/bookings", post(bookings_handler))
        .route_layer(middleware::from_fn_with_state(auth, verify_slack_signature))
        .with_state(state)
}
