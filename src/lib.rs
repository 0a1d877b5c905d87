//! Artspace Core - Identifiers and Catalog Queries
//!
//! # The Ground Rules
//! 1. Identifiers Round-Trip
//! 2. Validation Is Strict, Parsing Is Forgiving
//! 3. Queries Never Mutate The Catalog
//! 4. Sorting Is Stable
//! 5. User Input Never Crashes Browsing

pub mod entity;
pub mod identifier;
pub mod catalog;
pub mod query;
pub mod hashing;

pub use entity::{EntityType, EntityConfig};
pub use identifier::{
    format_id, extract_numeric_id, get_entity_type, validate, parse_search_query,
    EntityId, IdentifierError, NumericInput, SearchQuery,
};
pub use catalog::{Artwork, ArtworkSize, ArtworkStatus, Catalog, CatalogError, PriceRange};
pub use query::{filter_artworks, rejected_by, sort_artworks, CatalogQuery, FilterCriteria, SortKey};
pub use hashing::{canonical_json, compute_query_fingerprint};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
