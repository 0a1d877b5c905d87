//! Catalog Query Engine - Facets Then Sort
//!
//! OR within a facet, AND across facets. An empty facet imposes nothing.
//! Unknown ids and sort keys degrade quietly instead of failing the query.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::{price_range, technique_name, Artwork, ArtworkSize, Catalog};
use crate::hashing::compute_query_fingerprint;

/// Live filter selections. Every facet is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub selected_colors: Vec<String>,
    #[serde(default)]
    pub selected_sizes: Vec<ArtworkSize>,
    #[serde(default)]
    pub selected_price_ranges: Vec<String>,
    #[serde(default)]
    pub selected_techniques: Vec<String>,
    /// Collected by the UI; not a facet
    #[serde(default)]
    pub selected_styles: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortKey {
    Newest,
    Popular,
    PriceLow,
    PriceHigh,
    #[default]
    Recommended,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Recommended => "recommended",
        }
    }

    /// Unrecognized keys fall back to `Recommended`
    pub fn parse(key: &str) -> Self {
        match key {
            "newest" => SortKey::Newest,
            "popular" => SortKey::Popular,
            "price_low" => SortKey::PriceLow,
            "price_high" => SortKey::PriceHigh,
            "recommended" => SortKey::Recommended,
            other => {
                tracing::warn!("Unknown sort key {:?}, using recommended", other);
                SortKey::Recommended
            }
        }
    }

    fn compare(self, a: &Artwork, b: &Artwork) -> Ordering {
        match self {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Popular | SortKey::Recommended => b.popularity.total_cmp(&a.popularity),
        }
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        SortKey::parse(&key)
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        SortKey::parse(key)
    }
}

/// One independent filter dimension
pub trait Facet {
    fn name(&self) -> &'static str;
    /// `true` when the facet has no selection or the artwork matches one of them
    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool;
}

// --- Concrete Facets ---

pub struct SearchFacet;

impl Facet for SearchFacet {
    fn name(&self) -> &'static str { "search" }

    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool {
        if criteria.search_query.is_empty() {
            return true;
        }
        let needle = criteria.search_query.to_lowercase();
        artwork.title.to_lowercase().contains(&needle)
            || artwork.artist.to_lowercase().contains(&needle)
    }
}

pub struct ColorFacet;

impl Facet for ColorFacet {
    fn name(&self) -> &'static str { "color" }

    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool {
        criteria.selected_colors.is_empty()
            || criteria.selected_colors.iter().any(|c| *c == artwork.dominant_color)
    }
}

pub struct SizeFacet;

impl Facet for SizeFacet {
    fn name(&self) -> &'static str { "size" }

    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool {
        criteria.selected_sizes.is_empty() || criteria.selected_sizes.contains(&artwork.size)
    }
}

pub struct PriceFacet;

impl Facet for PriceFacet {
    fn name(&self) -> &'static str { "price" }

    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool {
        if criteria.selected_price_ranges.is_empty() {
            return true;
        }
        criteria.selected_price_ranges.iter().any(|id| {
            price_range(id).is_some_and(|range| range.contains(artwork.price))
        })
    }
}

pub struct TechniqueFacet;

impl Facet for TechniqueFacet {
    fn name(&self) -> &'static str { "technique" }

    fn matches(&self, artwork: &Artwork, criteria: &FilterCriteria) -> bool {
        if criteria.selected_techniques.is_empty() {
            return true;
        }
        criteria.selected_techniques.iter().any(|id| {
            technique_name(id).is_some_and(|name| name == artwork.technique)
        })
    }
}

fn facets() -> [&'static dyn Facet; 5] {
    [&SearchFacet, &ColorFacet, &SizeFacet, &PriceFacet, &TechniqueFacet]
}

fn warn_unknown_ids(criteria: &FilterCriteria) {
    for id in &criteria.selected_price_ranges {
        if price_range(id).is_none() {
            tracing::warn!("Ignoring unknown price range {:?}", id);
        }
    }
    for id in &criteria.selected_techniques {
        if technique_name(id).is_none() {
            tracing::warn!("Ignoring unknown technique {:?}", id);
        }
    }
}

/// Retain artworks that pass every facet, in catalog order
pub fn filter_artworks(artworks: &[Artwork], criteria: &FilterCriteria) -> Vec<Artwork> {
    warn_unknown_ids(criteria);

    let mut rejections: BTreeMap<&'static str, usize> = BTreeMap::new();
    let retained: Vec<Artwork> = artworks.iter()
        .filter(|artwork| match rejected_by(artwork, criteria) {
            Some(facet) => {
                *rejections.entry(facet).or_default() += 1;
                false
            }
            None => true,
        })
        .cloned()
        .collect();

    tracing::debug!(
        "Filter retained {} of {} artworks, rejected by facet: {:?}",
        retained.len(),
        artworks.len(),
        rejections
    );
    retained
}

/// Name of the first facet that excludes the artwork, if any
pub fn rejected_by(artwork: &Artwork, criteria: &FilterCriteria) -> Option<&'static str> {
    facets().iter()
        .find(|facet| !facet.matches(artwork, criteria))
        .map(|facet| facet.name())
}

/// Stable sort: equal keys keep their input order
pub fn sort_artworks(artworks: &[Artwork], sort: impl Into<SortKey>) -> Vec<Artwork> {
    let key = sort.into();
    tracing::debug!("Sorting {} artworks by {}", artworks.len(), key.as_str());
    let mut sorted = artworks.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// A complete query request: criteria plus the active sort key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn new(criteria: FilterCriteria, sort: impl Into<SortKey>) -> Self {
        Self { criteria, sort: sort.into() }
    }

    /// `sort_artworks(filter_artworks(catalog, criteria), sort)`
    pub fn run(&self, catalog: &Catalog) -> Vec<Artwork> {
        let filtered = filter_artworks(catalog.artworks(), &self.criteria);
        sort_artworks(&filtered, self.sort)
    }

    /// Stable cache key for memoizing identical requests
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        compute_query_fingerprint(self)
    }
}
