//! Client configuration.

/// Environment variable naming the explorer API server.
pub const BACKEND_URL_VAR: &str = "EXPLORER_BACKEND_URL";

/// Configuration for the browsing client.
///
/// There is deliberately no default backend URL: a missing value is a
/// configuration error, and silently pointing at a guessed host would
/// hide it. The misconfiguration surfaces as a failed detail fetch on
/// the first selection instead (see
/// [`crate::backend::HttpDetailClient`]).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the explorer API server, e.g. `http://localhost:3000`.
    /// `None` when `EXPLORER_BACKEND_URL` is unset or blank.
    pub backend_base_url: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `EXPLORER_BACKEND_URL` | none -- required |
    pub fn from_env() -> Self {
        let backend_base_url = std::env::var(BACKEND_URL_VAR)
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        if backend_base_url.is_none() {
            tracing::warn!(
                var = BACKEND_URL_VAR,
                "Backend base URL not configured; detail lookups will fail",
            );
        }

        Self { backend_base_url }
    }
}
