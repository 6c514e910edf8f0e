//! HTTP client for the external character catalog.
//!
//! Wraps the catalog's REST API (fetch-by-id, name-substring search,
//! location fetch) using [`reqwest`]. The client holds no session state
//! and may be shared across concurrent aggregations.

use async_trait::async_trait;
use reqwest::StatusCode;

use mortydex_core::character::CharacterSummary;
use mortydex_core::query::normalize_query;

use crate::error::CatalogError;
use crate::records::{CharacterRecord, LocationRecord, SearchPage};

/// Base URL of the public character catalog.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Read-only access to the upstream catalog.
///
/// Implemented by [`CatalogClient`] for production; tests substitute
/// in-memory fakes to assert call counts and failure handling.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a single character record by id.
    ///
    /// Fails with [`CatalogError::NotFound`] if the upstream reports no
    /// such id, and with a transport-class error for anything else.
    async fn fetch_character(&self, id: i64) -> Result<CharacterRecord, CatalogError>;

    /// Search characters by name substring.
    ///
    /// An empty or whitespace-only query returns an empty list without
    /// calling upstream. An upstream 404 means "zero matches", not an
    /// error, and also yields an empty list.
    async fn search_characters(&self, name: &str) -> Result<Vec<CharacterSummary>, CatalogError>;

    /// Fetch a location record via a reference taken off a character
    /// record.
    ///
    /// References come straight from upstream data, so a 404 here
    /// indicates upstream inconsistency and is surfaced as a
    /// transport-class failure rather than [`CatalogError::NotFound`].
    async fn fetch_location(&self, reference: &str) -> Result<LocationRecord, CatalogError>;
}

/// HTTP client for one catalog instance.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client for the catalog at `base_url`.
    ///
    /// * `base_url` - e.g. `https://rickandmortyapi.com/api`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling with other outbound calls).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn fetch_character(&self, id: i64) -> Result<CharacterRecord, CatalogError> {
        let response = self
            .client
            .get(format!("{}/character/{id}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<CharacterRecord>().await?)
    }

    async fn search_characters(&self, name: &str) -> Result<Vec<CharacterSummary>, CatalogError> {
        // Empty queries short-circuit: the upstream conflates "no query"
        // with "no results", and the round trip buys nothing.
        let Some(query) = normalize_query(name) else {
            return Ok(Vec::new());
        };

        let response = self
            .client
            .get(format!("{}/character/", self.base_url))
            .query(&[("name", query)])
            .send()
            .await?;

        // For a search, upstream 404 means zero matches.
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let page = response.json::<SearchPage>().await?;
        Ok(page.results)
    }

    async fn fetch_location(&self, reference: &str) -> Result<LocationRecord, CatalogError> {
        let response = self.client.get(reference).send().await?;

        // 404 included: a dangling location reference is upstream
        // inconsistency, not a user-facing not-found.
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<LocationRecord>().await?)
    }
}
