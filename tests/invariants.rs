//! Contract Invariant Tests
//!
//! These tests verify the guarantees the storefront relies on.

use std::io::Write;

use artspace_core::{
    extract_numeric_id, filter_artworks, format_id, get_entity_type, parse_search_query,
    sort_artworks, validate, Artwork, ArtworkSize, ArtworkStatus, Catalog, CatalogError,
    CatalogQuery, EntityType, FilterCriteria, SortKey,
};
use chrono::{TimeZone, Utc};

fn create_artwork(id: u64, price: u64, size: ArtworkSize, color: &str, popularity: f64) -> Artwork {
    Artwork {
        id: format_id(EntityType::Artwork, id),
        title: format!("Study No. {}", id),
        artist: "Aiko Tanaka".to_string(),
        size,
        price,
        technique: "Oil Painting".to_string(),
        dominant_color: color.to_string(),
        status: ArtworkStatus::Available,
        created_at: Utc.with_ymd_and_hms(2024, 5, id as u32, 12, 0, 0).unwrap(),
        popularity,
    }
}

fn create_catalog() -> Vec<Artwork> {
    vec![
        create_artwork(1, 180_000, ArtworkSize::XL, "#2C2C2C", 40.0),
        create_artwork(2, 85_000, ArtworkSize::M, "#FFFFFF", 75.0),
        create_artwork(3, 120_000, ArtworkSize::L, "#C0392B", 75.0),
        create_artwork(4, 45_000, ArtworkSize::M, "#2C2C2C", 10.0),
    ]
}

fn ids(artworks: &[Artwork]) -> Vec<&str> {
    artworks.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn invariant_identifier_round_trip() {
    for entity in EntityType::ALL {
        for n in 0..=99_999u64 {
            let formatted = format_id(entity, n);
            assert_eq!(extract_numeric_id(&formatted), Ok(Some(n)));
            assert_eq!(get_entity_type(&formatted), Some(entity));
            assert!(validate(&formatted));
        }
    }
}

#[test]
fn invariant_validate_rejects_oversized_format() {
    // format pads to at least five digits; validate demands exactly five
    assert_eq!(format_id(EntityType::Artwork, 5u64), "AW-00005");
    assert!(validate(&format_id(EntityType::Artwork, 5u64)));

    let oversized = format_id(EntityType::Artwork, 123_456u64);
    assert_eq!(oversized, "AW-123456");
    assert!(!validate(&oversized));
    assert_eq!(extract_numeric_id(&oversized), Ok(Some(123_456)));
    assert!(!parse_search_query(&oversized).is_id);
}

#[test]
fn invariant_search_query_tolerates_case_and_whitespace() {
    let q = parse_search_query("  aw-00042 ");
    assert!(q.is_id);
    assert_eq!(q.entity, Some(EntityType::Artwork));
    assert_eq!(q.numeric_id, Some(42));
}

#[test]
fn invariant_only_shape_errors_are_raised() {
    // Two segments with a non-numeric tail is a soft failure
    for input in ["AW-abcde", "AW-12abc", "AW-"] {
        assert_eq!(extract_numeric_id(input), Ok(None), "{input:?}");
        assert!(!parse_search_query(input).is_id);
    }
    assert!(extract_numeric_id("AW-00-01").is_err());
    assert!(extract_numeric_id("AW00001").is_err());
}

#[test]
fn invariant_unknown_prefix_is_not_found() {
    assert_eq!(get_entity_type("ZZ-00001"), None);
    assert!(!validate("ZZ-00001"));
}

#[test]
fn invariant_facets_are_independent() {
    let catalog = create_catalog();

    let criteria = FilterCriteria {
        selected_sizes: vec![ArtworkSize::M],
        ..Default::default()
    };
    assert_eq!(ids(&filter_artworks(&catalog, &criteria)), ["AW-00002", "AW-00004"]);

    let criteria = FilterCriteria {
        selected_colors: vec!["#2C2C2C".to_string(), "#FFFFFF".to_string()],
        ..Default::default()
    };
    assert_eq!(
        ids(&filter_artworks(&catalog, &criteria)),
        ["AW-00001", "AW-00002", "AW-00004"]
    );

    let criteria = FilterCriteria {
        selected_sizes: vec![ArtworkSize::M],
        selected_colors: vec!["#FFFFFF".to_string()],
        ..Default::default()
    };
    assert_eq!(ids(&filter_artworks(&catalog, &criteria)), ["AW-00002"]);
}

#[test]
fn invariant_sort_fallback_matches_recommended() {
    let catalog = create_catalog();
    assert_eq!(
        sort_artworks(&catalog, "bogus-key"),
        sort_artworks(&catalog, "recommended")
    );
    // Ties on popularity keep catalog order
    assert_eq!(
        ids(&sort_artworks(&catalog, SortKey::Recommended)),
        ["AW-00002", "AW-00003", "AW-00001", "AW-00004"]
    );
}

#[test]
fn invariant_filter_is_idempotent() {
    let catalog = create_catalog();
    let criteria = FilterCriteria {
        search_query: "study".to_string(),
        selected_price_ranges: vec!["5-10".to_string(), "10-30".to_string()],
        ..Default::default()
    };
    let once = filter_artworks(&catalog, &criteria);
    let twice = filter_artworks(&once, &criteria);
    assert_eq!(once, twice);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn invariant_price_ranges_end_to_end() {
    let catalog = Catalog::new(create_catalog());
    let criteria = FilterCriteria {
        selected_price_ranges: vec!["1-5".to_string(), "5-10".to_string()],
        ..Default::default()
    };
    let results = CatalogQuery::new(criteria, SortKey::PriceLow).run(&catalog);

    let prices: Vec<u64> = results.iter().map(|a| a.price).collect();
    assert_eq!(prices, [45_000, 85_000]);
}

#[test]
fn invariant_fingerprint_stable() {
    let criteria = FilterCriteria {
        selected_sizes: vec![ArtworkSize::S],
        ..Default::default()
    };
    let q1 = CatalogQuery::new(criteria.clone(), "newest");
    let q2 = CatalogQuery::new(criteria, SortKey::Newest);
    assert_eq!(q1.fingerprint().unwrap(), q2.fingerprint().unwrap());

    let q3 = CatalogQuery::new(FilterCriteria::default(), SortKey::Newest);
    assert_ne!(q1.fingerprint().unwrap(), q3.fingerprint().unwrap());
}

#[test]
fn invariant_catalog_loads_and_resolves_identifiers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&create_catalog()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let catalog = Catalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 4);

    assert_eq!(catalog.lookup(" aw-00003").map(|a| a.price), Some(120_000));
    assert!(catalog.lookup("AW-00099").is_none());
    assert!(catalog.lookup("AR-00003").is_none());
    assert!(catalog.lookup("study").is_none());
}

#[test]
fn invariant_catalog_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = Catalog::load_from_file(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(CatalogError::Io(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"id\": 1}]").unwrap();
    let bad = Catalog::load_from_file(file.path());
    assert!(matches!(bad, Err(CatalogError::Json(_))));
}
