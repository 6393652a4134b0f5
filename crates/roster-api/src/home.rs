//! Store-independent endpoints: the greeting and the liveness probe.

/// Body served at `/`.
pub const GREETING: &str = "Hello World from API!";

/// `GET /`
pub async fn index() -> &'static str { GREETING }

/// `GET /health`: answers as long as the process can serve HTTP.
pub async fn health() -> &'static str { "ok" }
