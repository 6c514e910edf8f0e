//! Remote catalog access and detail aggregation.
//!
//! [`client::CatalogClient`] speaks to the external character catalog
//! over HTTP (fetch-by-id, name-substring search, location fetch).
//! [`aggregator::DetailAggregator`] composes the two-hop lookup into one
//! denormalized [`mortydex_core::character::CharacterDetail`].

pub mod aggregator;
pub mod client;
pub mod error;
pub mod records;

pub use aggregator::{DetailAggregator, DetailError};
pub use client::{Catalog, CatalogClient, DEFAULT_BASE_URL};
pub use error::CatalogError;
