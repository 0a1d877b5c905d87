//! Entity Types - Static Identifier Configuration
//!
//! The table is closed: every entity type has exactly one entry and
//! prefixes never collide.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Artist,
    Artwork,
    Corporate,
    Space,
    Delivery,
}

/// Display configuration for one entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityConfig {
    pub entity: EntityType,
    pub prefix: &'static str,
    pub label: &'static str,
    pub display_hint: &'static str,
}

static ENTITY_CONFIGS: [EntityConfig; 5] = [
    EntityConfig {
        entity: EntityType::Artist,
        prefix: "AR",
        label: "Artist",
        display_hint: "bg-purple-100 text-purple-800",
    },
    EntityConfig {
        entity: EntityType::Artwork,
        prefix: "AW",
        label: "Artwork",
        display_hint: "bg-blue-100 text-blue-800",
    },
    EntityConfig {
        entity: EntityType::Corporate,
        prefix: "CO",
        label: "Corporate",
        display_hint: "bg-green-100 text-green-800",
    },
    EntityConfig {
        entity: EntityType::Space,
        prefix: "SP",
        label: "Space",
        display_hint: "bg-yellow-100 text-yellow-800",
    },
    EntityConfig {
        entity: EntityType::Delivery,
        prefix: "DL",
        label: "Delivery",
        display_hint: "bg-orange-100 text-orange-800",
    },
];

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Artist,
        EntityType::Artwork,
        EntityType::Corporate,
        EntityType::Space,
        EntityType::Delivery,
    ];

    pub fn config(self) -> &'static EntityConfig {
        // Table order matches declaration order
        &ENTITY_CONFIGS[self as usize]
    }

    pub fn prefix(self) -> &'static str {
        self.config().prefix
    }

    pub fn label(self) -> &'static str {
        self.config().label
    }

    /// Exact, case-sensitive prefix lookup
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        ENTITY_CONFIGS.iter()
            .find(|c| c.prefix == prefix)
            .map(|c| c.entity)
    }
}

/// All configurations in declaration order
pub fn entity_configs() -> &'static [EntityConfig] {
    &ENTITY_CONFIGS
}
