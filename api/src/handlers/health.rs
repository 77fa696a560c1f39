use crate::State;
use axum::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are reachable", body = &str),
        (status = 500, description = "The content store cannot be reached", body = &str),
    )
)]
pub async fn check(Extension(state): Extension<State>) -> Response {
    match state.store.ping().await {
        Ok(()) => format!("I'm good: {}", env!("CARGO_PKG_VERSION")).into_response(),
        Err(err) => {
            warn!("Health check failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "content store unreachable").into_response()
        }
    }
}
