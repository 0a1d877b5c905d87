//! Catalog - Artwork Records and Lookup Tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::entity::EntityType;
use crate::identifier::parse_search_query;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArtworkSize {
    S,
    M,
    L,
    XL,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    Available,
    Displayed,
    Rented,
    Sold,
}

/// A sellable piece. Never mutated by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub size: ArtworkSize,
    /// Smallest currency unit
    pub price: u64,
    /// Display name from the technique vocabulary
    pub technique: String,
    /// Hex triplet, e.g. `#2C2C2C`
    pub dominant_color: String,
    pub status: ArtworkStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub popularity: f64,
}

/// Half-open price bucket `[min, max)`; `max: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub id: &'static str,
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && self.max.map_or(true, |max| price < max)
    }
}

pub static PRICE_RANGES: [PriceRange; 5] = [
    PriceRange { id: "0-1", label: "Under ¥10,000", min: 0, max: Some(10_000) },
    PriceRange { id: "1-5", label: "¥10,000 - ¥50,000", min: 10_000, max: Some(50_000) },
    PriceRange { id: "5-10", label: "¥50,000 - ¥100,000", min: 50_000, max: Some(100_000) },
    PriceRange { id: "10-30", label: "¥100,000 - ¥300,000", min: 100_000, max: Some(300_000) },
    PriceRange { id: "30+", label: "¥300,000 and up", min: 300_000, max: None },
];

pub fn price_range(id: &str) -> Option<&'static PriceRange> {
    PRICE_RANGES.iter().find(|r| r.id == id)
}

/// Technique id to the display name stored on artworks
pub static TECHNIQUES: [(&str, &str); 8] = [
    ("oil", "Oil Painting"),
    ("watercolor", "Watercolor"),
    ("acrylic", "Acrylic"),
    ("ink", "Ink"),
    ("print", "Printmaking"),
    ("photo", "Photography"),
    ("mixed", "Mixed Media"),
    ("digital", "Digital"),
];

pub fn technique_name(id: &str) -> Option<&'static str> {
    TECHNIQUES.iter()
        .find(|(tid, _)| *tid == id)
        .map(|(_, name)| *name)
}

/// Read-only catalog snapshot handed to each query
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    /// Load a JSON array of artworks
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let artworks: Vec<Artwork> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} artworks from {}", artworks.len(), path.display());
        Ok(Self::new(artworks))
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Resolve search text that names an artwork identifier
    pub fn lookup(&self, query: &str) -> Option<&Artwork> {
        let id = parse_search_query(query).as_entity_id()?;
        if id.entity != EntityType::Artwork {
            return None;
        }
        let canonical = id.to_string();
        self.artworks.iter().find(|a| a.id == canonical)
    }
}
