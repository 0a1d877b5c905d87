//! Artspace CLI - Bridge interface for the storefront
//!
//! Commands: entities, format, parse, validate, price-ranges, techniques, query, lookup
//! Outputs JSON to stdout, logs to stderr
//! Returns non-zero on failure

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::Level;

use artspace_core::{
    catalog::{PRICE_RANGES, TECHNIQUES},
    entity::entity_configs,
    extract_numeric_id, format_id, get_entity_type, parse_search_query, validate,
    Catalog, CatalogQuery, EntityType, FilterCriteria, SortKey,
};

#[derive(Parser)]
#[command(name = "artspace-cli")]
#[command(about = "Artspace CLI - Identifiers and Catalog Queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to catalog JSON (array of artworks)
    #[arg(short, long, default_value = "catalog.json")]
    catalog: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityArg {
    Artist,
    Artwork,
    Corporate,
    Space,
    Delivery,
}

impl From<EntityArg> for EntityType {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::Artist => EntityType::Artist,
            EntityArg::Artwork => EntityType::Artwork,
            EntityArg::Corporate => EntityType::Corporate,
            EntityArg::Space => EntityType::Space,
            EntityArg::Delivery => EntityType::Delivery,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List entity types and their prefixes
    Entities,

    /// Format a numeric id as PREFIX-NNNNN
    Format {
        #[arg(short, long, value_enum)]
        entity: EntityArg,

        /// Integer or numeric text
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Decompose a formatted identifier
    Parse {
        id: String,
    },

    /// Check an identifier is canonical
    Validate {
        id: String,
    },

    /// List price-range buckets
    PriceRanges,

    /// List technique ids and names
    Techniques,

    /// Filter and sort the catalog
    Query {
        /// JSON payload (FilterCriteria)
        #[arg(short = 'f', long, default_value = "{}")]
        criteria: String,

        /// Sort key
        #[arg(short, long, default_value = "recommended")]
        sort: String,
    },

    /// Resolve search text to an artwork by identifier
    Lookup {
        query: String,
    },
}

fn init_tracing() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| Level::from_str(&l).ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(r#"{{"error": "Failed to encode output: {}"}}"#, e);
            ExitCode::FAILURE
        }
    }
}

fn load_catalog(cli: &Cli) -> Result<Catalog, ExitCode> {
    Catalog::load_from_file(&cli.catalog).map_err(|e| {
        let output = serde_json::json!({ "success": false, "error": e.to_string() });
        println!("{}", output);
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Entities => print_json(&serde_json::json!(entity_configs())),

        Commands::Format { entity, value } => {
            let entity = EntityType::from(*entity);
            let formatted = format_id(entity, value.as_str());
            print_json(&serde_json::json!({
                "id": formatted,
                "label": entity.label(),
                "valid": validate(&formatted),
            }))
        }

        Commands::Parse { id } => match extract_numeric_id(id) {
            Ok(numeric_id) => print_json(&serde_json::json!({
                "type": get_entity_type(id),
                "label": get_entity_type(id).map(EntityType::label),
                "numericId": numeric_id,
                "valid": validate(id),
                "search": parse_search_query(id),
            })),
            Err(e) => {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
                ExitCode::FAILURE
            }
        },

        Commands::Validate { id } => {
            let valid = validate(id);
            println!("{}", serde_json::json!({ "id": id, "valid": valid }));
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Not canonical
            }
        }

        Commands::PriceRanges => print_json(&serde_json::json!(PRICE_RANGES)),

        Commands::Techniques => {
            let techniques: Vec<_> = TECHNIQUES.iter()
                .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
                .collect();
            print_json(&serde_json::json!(techniques))
        }

        Commands::Query { criteria, sort } => {
            let criteria: FilterCriteria = match serde_json::from_str(criteria) {
                Ok(c) => c,
                Err(e) => {
                    let output = serde_json::json!({
                        "success": false,
                        "error": format!("Invalid criteria: {}", e),
                    });
                    println!("{}", output);
                    return ExitCode::FAILURE;
                }
            };
            let catalog = match load_catalog(&cli) {
                Ok(c) => c,
                Err(code) => return code,
            };

            let query = CatalogQuery::new(criteria, SortKey::parse(sort));
            let results = query.run(&catalog);
            let fingerprint = query.fingerprint().unwrap_or_default();

            print_json(&serde_json::json!({
                "success": true,
                "sort": query.sort,
                "fingerprint": fingerprint,
                "total": catalog.len(),
                "count": results.len(),
                "artworks": results,
            }))
        }

        Commands::Lookup { query } => {
            let catalog = match load_catalog(&cli) {
                Ok(c) => c,
                Err(code) => return code,
            };

            match catalog.lookup(query) {
                Some(artwork) => print_json(&serde_json::json!({ "found": true, "artwork": artwork })),
                None => {
                    println!("{}", serde_json::json!({ "found": false, "search": parse_search_query(query) }));
                    ExitCode::from(2)  // No match
                }
            }
        }
    }
}
