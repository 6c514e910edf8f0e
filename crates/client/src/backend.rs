//! Remote backends used by the orchestrators.
//!
//! Search goes straight to the upstream catalog (the search surface
//! needs nothing the aggregator adds); detail goes through the explorer
//! API server, which performs the two-hop aggregation. Both sit behind
//! traits so the controller can be driven with in-memory fakes.

use async_trait::async_trait;
use reqwest::StatusCode;

use mortydex_catalog::{Catalog, CatalogClient, CatalogError};
use mortydex_core::character::{CharacterDetail, CharacterSummary};

use crate::config::ClientConfig;

/// Errors from a client-side remote call.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// No backend base URL is configured; nothing was sent.
    #[error("backend URL is not configured")]
    NotConfigured,

    /// The server reported that the requested resource does not exist.
    #[error("character not found")]
    NotFound,

    /// The HTTP request itself failed (network, DNS, timeout) or the
    /// response body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-success status.
    #[error("backend returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

impl From<CatalogError> for BackendError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => BackendError::NotFound,
            CatalogError::Request(e) => BackendError::Request(e),
            CatalogError::Status { status } => BackendError::Status { status },
        }
    }
}

/// Name-substring search against the catalog.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<CharacterSummary>, BackendError>;
}

/// Aggregated detail lookup for one character id.
#[async_trait]
pub trait DetailBackend: Send + Sync {
    async fn fetch_detail(&self, id: i64) -> Result<CharacterDetail, BackendError>;
}

/// The production search backend is the catalog client itself: empty
/// queries short-circuit and an upstream 404 is zero matches, exactly
/// the semantics the search box needs.
#[async_trait]
impl SearchBackend for CatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<CharacterSummary>, BackendError> {
        Ok(self.search_characters(query).await?)
    }
}

/// HTTP client for the explorer API server's detail endpoint.
pub struct HttpDetailClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpDetailClient {
    /// Create a detail client from configuration.
    ///
    /// An unconfigured base URL is carried as-is: every fetch fails
    /// with [`BackendError::NotConfigured`] before any request is
    /// issued, which the selection flow surfaces to the user.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.backend_base_url.clone(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DetailBackend for HttpDetailClient {
    async fn fetch_detail(&self, id: i64) -> Result<CharacterDetail, BackendError> {
        let base = self.base_url.as_deref().ok_or(BackendError::NotConfigured)?;

        let response = self
            .client
            .get(format!("{base}/character/{id}"))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound);
        }
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<CharacterDetail>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
