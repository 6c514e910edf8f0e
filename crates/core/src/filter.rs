//! Local status filtering over search results.
//!
//! Filtering is a pure, synchronous, order-preserving predicate over an
//! already-fetched result list. It never triggers a remote call and
//! never mutates the underlying list.

use serde::{Deserialize, Serialize};

use crate::character::{CharacterSummary, LifeStatus};

/// User-selected status filter applied to a search result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Alive,
    Dead,
    Unknown,
}

impl StatusFilter {
    /// Whether a character with the given status passes this filter.
    pub fn matches(self, status: LifeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Alive => status == LifeStatus::Alive,
            StatusFilter::Dead => status == LifeStatus::Dead,
            StatusFilter::Unknown => status == LifeStatus::Unknown,
        }
    }
}

/// Apply a status filter to a result list, preserving order.
///
/// Returns borrowed entries; the underlying fetched list is unchanged.
pub fn apply_status_filter(
    filter: StatusFilter,
    results: &[CharacterSummary],
) -> Vec<&CharacterSummary> {
    results.iter().filter(|c| filter.matches(c.status)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
