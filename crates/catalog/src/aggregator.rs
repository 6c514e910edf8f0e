//! Two-hop detail aggregation.
//!
//! [`DetailAggregator::get_detail`] fetches a character, conditionally
//! resolves its origin location via a second upstream call, and merges
//! the two into one [`CharacterDetail`]. The aggregator is stateless:
//! it holds only a shared catalog handle and recomputes every result
//! from scratch, so concurrent invocations need no locking.

use std::sync::Arc;

use mortydex_core::character::{CharacterDetail, LocationInfo, OriginInfo};

use crate::client::Catalog;
use crate::error::CatalogError;

/// Failures surfaced to the aggregator's caller.
///
/// The only failure class this layer swallows is a failed origin
/// location lookup: the requested resource (the character) resolved
/// successfully, and a secondary enrichment failure must not mask that.
#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    /// The character id does not exist upstream.
    #[error("character not found")]
    NotFound,

    /// The upstream catalog could not be consulted.
    #[error("character catalog unavailable: {0}")]
    Unavailable(#[source] CatalogError),
}

/// Composes character and location lookups into a denormalized detail.
pub struct DetailAggregator {
    catalog: Arc<dyn Catalog>,
}

impl DetailAggregator {
    /// Create an aggregator over a shared catalog handle.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Fetch and compose the detail record for one character id.
    ///
    /// A blank or missing origin reference (including the upstream's
    /// "unknown" sentinel) skips the location hop entirely. A failed
    /// location lookup degrades `origin.location` to `None` instead of
    /// failing the aggregation; the degradation is logged, not
    /// propagated.
    pub async fn get_detail(&self, id: i64) -> Result<CharacterDetail, DetailError> {
        let record = self.catalog.fetch_character(id).await.map_err(|e| match e {
            CatalogError::NotFound => DetailError::NotFound,
            other => DetailError::Unavailable(other),
        })?;

        let location = match record.resolvable_origin() {
            None => None,
            Some(reference) => match self.catalog.fetch_location(reference).await {
                Ok(loc) => Some(LocationInfo {
                    name: loc.name,
                    kind: loc.kind,
                    dimension: loc.dimension,
                }),
                Err(e) => {
                    tracing::warn!(
                        character_id = id,
                        error = %e,
                        "Origin location lookup failed, composing detail without it",
                    );
                    None
                }
            },
        };

        let origin_name = record.origin_name();

        Ok(CharacterDetail {
            id: record.id,
            name: record.name,
            status: record.status,
            species: record.species,
            kind: record.kind,
            gender: record.gender,
            image: record.image,
            origin: OriginInfo {
                name: origin_name,
                location,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
