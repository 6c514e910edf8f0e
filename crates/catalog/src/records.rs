//! Raw wire records returned by the upstream catalog.
//!
//! These mirror the upstream JSON verbatim and never leave this crate's
//! boundary un-mapped: the aggregator and search paths translate them
//! into `mortydex_core` domain types.

use serde::Deserialize;

use mortydex_core::character::{CharacterSummary, LifeStatus};

/// A named reference to another catalog resource.
///
/// The upstream's "unknown" origin sentinel is `{name: "unknown",
/// url: ""}` -- a blank `url` means there is nothing to look up.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// A full character record as returned by `GET /character/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    pub status: LifeStatus,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub image: String,
    #[serde(default)]
    pub origin: Option<ResourceRef>,
}

impl CharacterRecord {
    /// The origin reference to resolve, if there is one.
    ///
    /// Returns `None` for a missing origin and for the blank-url
    /// "unknown" sentinel, so callers can skip the location lookup
    /// without issuing a wasted request.
    pub fn resolvable_origin(&self) -> Option<&str> {
        let reference = self.origin.as_ref()?.url.trim();
        if reference.is_empty() {
            None
        } else {
            Some(reference)
        }
    }

    /// The origin name, defaulting to the literal `"unknown"` when the
    /// record carries no origin at all.
    pub fn origin_name(&self) -> String {
        self.origin
            .as_ref()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// A location record as returned by a location fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
}

/// Response envelope of the upstream name search.
///
/// Only `results` is consumed; pagination metadata is ignored.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub results: Vec<CharacterSummary>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_origin(origin: Option<ResourceRef>) -> CharacterRecord {
        CharacterRecord {
            id: 1,
            name: "Rick Sanchez".into(),
            status: LifeStatus::Alive,
            species: "Human".into(),
            kind: String::new(),
            gender: "Male".into(),
            image: "https://example.test/1.jpeg".into(),
            origin,
        }
    }

    #[test]
    fn resolvable_origin_returns_trimmed_url() {
        let record = record_with_origin(Some(ResourceRef {
            name: "Earth (C-137)".into(),
            url: " https://example.test/location/1 ".into(),
        }));
        assert_eq!(
            record.resolvable_origin(),
            Some("https://example.test/location/1")
        );
    }

    #[test]
    fn blank_url_sentinel_is_not_resolvable() {
        let record = record_with_origin(Some(ResourceRef {
            name: "unknown".into(),
            url: String::new(),
        }));
        assert_eq!(record.resolvable_origin(), None);
        assert_eq!(record.origin_name(), "unknown");
    }

    #[test]
    fn missing_origin_defaults_name_to_unknown() {
        let record = record_with_origin(None);
        assert_eq!(record.resolvable_origin(), None);
        assert_eq!(record.origin_name(), "unknown");
    }

    #[test]
    fn search_page_ignores_pagination_metadata() {
        let json = serde_json::json!({
            "info": { "count": 1, "pages": 1 },
            "results": [
                { "id": 1, "name": "Rick Sanchez", "status": "Alive",
                  "species": "Human", "gender": "Male" }
            ]
        });

        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Rick Sanchez");
    }
}
