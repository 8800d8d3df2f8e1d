// --- File: crates/services/slotbot_backend/src/app.rs ---
use axum::{routing::get, Router};
use http::HeaderName;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::app_state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

async fn health() -> &'static str {
    "OK"
}

/// The full application router with its middleware stack.
///
/// Layers run outside-in: request id, access log, panic recovery.
pub fn build_router(state: &AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .merge(slotbot_slack::routes(state.slack.clone(), state.auth.clone()))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
