//! Character and location domain types.
//!
//! Field names and casing follow the wire format of the upstream catalog
//! (`status` values are `"Alive"`, `"Dead"`, `"unknown"`; the `type`
//! field is mapped to `kind` because `type` is a keyword).

use serde::{Deserialize, Serialize};

/// Life status of a character, as reported by the upstream catalog.
///
/// The upstream uses a closed set of string values; deserialization
/// fails on anything outside it rather than falling back silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

/// One entry in a name-search result list.
///
/// Transient: a new search discards the previous list wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: i64,
    pub name: String,
    pub status: LifeStatus,
}

/// Snapshot of a location record at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
}

/// A character's origin: always a name, optionally a resolved location.
///
/// `location` is `None` when the character record carried no resolvable
/// origin reference or when the location lookup failed. The two cases
/// are not distinguished here; callers see the same degraded shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginInfo {
    pub name: String,
    pub location: Option<LocationInfo>,
}

/// Denormalized character detail composed from two upstream records.
///
/// Immutable once constructed; scoped to a single aggregation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: i64,
    pub name: String,
    pub status: LifeStatus,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub image: String,
    pub origin: OriginInfo,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
