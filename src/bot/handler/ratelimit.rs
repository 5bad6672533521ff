use serenity::all::{LightMethod, RatelimitInfo};

/// Logs a Discord HTTP rate limit hit with its route, wait and bucket limit.
pub fn handle_ratelimit(data: RatelimitInfo) {
    tracing::warn!(
        route = %route(data.method, &data.path),
        timeout_ms = data.timeout.as_millis() as u64,
        limit = data.limit,
        global = data.global,
        "Hit Discord rate limit"
    );
}

/// `METHOD path` for the rate limited request.
pub fn route(method: LightMethod, path: &str) -> String {
    format!("{} {}", method.reqwest_method(), path)
}
