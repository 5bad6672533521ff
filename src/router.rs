use axum::{routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
