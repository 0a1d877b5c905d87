//! Identifier Codec - `PREFIX-NNNNN`
//!
//! Formatting pads to a minimum of five digits and never truncates.
//! Validation demands exactly five. Values of 100000 and above therefore
//! format fine but never validate; callers depend on that asymmetry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::EntityType;

pub const ID_DIGITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Malformed identifier: expected 2 hyphen-separated segments, found {found}")]
    SegmentCount { found: usize },

    #[error("Not a canonical identifier: {0:?}")]
    NotCanonical(String),
}

/// Anything the presentation layer may hand to `format_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl NumericInput {
    /// Decimal digits of the absolute value; unparseable text passes through trimmed
    fn digits(&self) -> String {
        match self {
            NumericInput::Signed(n) => n.unsigned_abs().to_string(),
            NumericInput::Unsigned(n) => n.to_string(),
            NumericInput::Text(s) => {
                let t = s.trim();
                if let Ok(n) = t.parse::<i64>() {
                    n.unsigned_abs().to_string()
                } else if let Ok(n) = t.parse::<u64>() {
                    n.to_string()
                } else {
                    t.to_string()
                }
            }
        }
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self { NumericInput::Signed(n) }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self { NumericInput::Signed(n.into()) }
}

impl From<u64> for NumericInput {
    fn from(n: u64) -> Self { NumericInput::Unsigned(n) }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self { NumericInput::Unsigned(n.into()) }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self { NumericInput::Text(s.to_string()) }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self { NumericInput::Text(s) }
}

/// Render `PREFIX-NNNNN`. Total: every input produces a string.
pub fn format_id(entity: EntityType, value: impl Into<NumericInput>) -> String {
    format!("{}-{:0>width$}", entity.prefix(), value.into().digits(), width = ID_DIGITS)
}

/// Numeric value of an identifier with padding removed.
///
/// Only the shape is an error. A numeric segment that is not base-10
/// (`"AW-abcde"`, `"AW-"`) yields `Ok(None)`.
pub fn extract_numeric_id(formatted: &str) -> Result<Option<u64>, IdentifierError> {
    let segments: Vec<&str> = formatted.split('-').collect();
    if segments.len() != 2 {
        return Err(IdentifierError::SegmentCount { found: segments.len() });
    }
    Ok(segments[1].parse::<u64>().ok())
}

/// Entity type named by the text before the first hyphen
pub fn get_entity_type(formatted: &str) -> Option<EntityType> {
    let prefix = formatted.split('-').next().unwrap_or_default();
    EntityType::from_prefix(prefix)
}

/// Exactly: known prefix, hyphen, five ASCII digits
pub fn validate(formatted: &str) -> bool {
    let Some((prefix, digits)) = formatted.split_once('-') else {
        return false;
    };
    EntityType::from_prefix(prefix).is_some()
        && digits.len() == ID_DIGITS
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Outcome of classifying free-text search input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(rename = "isID")]
    pub is_id: bool,
    #[serde(rename = "type")]
    pub entity: Option<EntityType>,
    pub numeric_id: Option<u64>,
}

impl SearchQuery {
    pub fn not_an_id() -> Self {
        Self { is_id: false, entity: None, numeric_id: None }
    }

    pub fn as_entity_id(&self) -> Option<EntityId> {
        match (self.is_id, self.entity, self.numeric_id) {
            (true, Some(entity), Some(numeric_id)) => Some(EntityId { entity, numeric_id }),
            _ => None,
        }
    }
}

/// Never fails: anything that is not a canonical identifier is `not_an_id`
pub fn parse_search_query(query: &str) -> SearchQuery {
    let normalized = query.trim().to_uppercase();
    if !validate(&normalized) {
        return SearchQuery::not_an_id();
    }

    match (get_entity_type(&normalized), extract_numeric_id(&normalized)) {
        (Some(entity), Ok(Some(numeric_id))) => SearchQuery {
            is_id: true,
            entity: Some(entity),
            numeric_id: Some(numeric_id),
        },
        _ => SearchQuery::not_an_id(),
    }
}

/// Typed form of a formatted identifier.
///
/// `Display` is `format_id`. `FromStr` only accepts what `validate` accepts,
/// so an id of 100000 or more can be displayed but not parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    pub entity: EntityType,
    pub numeric_id: u64,
}

impl EntityId {
    pub fn new(entity: EntityType, numeric_id: u64) -> Self {
        Self { entity, numeric_id }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_id(self.entity, self.numeric_id))
    }
}

impl FromStr for EntityId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !validate(s) {
            return Err(IdentifierError::NotCanonical(s.to_string()));
        }
        let entity = get_entity_type(s)
            .ok_or_else(|| IdentifierError::NotCanonical(s.to_string()))?;
        let numeric_id = extract_numeric_id(s)?
            .ok_or_else(|| IdentifierError::NotCanonical(s.to_string()))?;
        Ok(Self { entity, numeric_id })
    }
}

impl TryFrom<String> for EntityId {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_string()
    }
}
