//! Typed failures from the upstream catalog boundary.

/// Errors from a single catalog request.
///
/// Every failure is typed and returned to the caller; this layer never
/// swallows one. A single attempt per call, no retries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upstream reported that the requested resource does not exist.
    #[error("resource not found upstream")]
    NotFound,

    /// The HTTP request itself failed (network, DNS, timeout) or the
    /// response body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-success status with no meaningful
    /// not-found semantics.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}
