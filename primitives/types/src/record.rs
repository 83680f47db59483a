use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field;

/// Raw metadata mapping as returned by a metadata source.
pub type Metadata = serde_json::Map<String, Value>;

/// Placeholder written for a project whose metadata carries no supply.
pub const UNKNOWN_SUPPLY: &str = "Unknown";

/// One successfully fetched project.
///
/// Field order matches the instructor key layout, which is produced by
/// flattening this struct behind the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Free-text project description; never blank
    pub description: String,
    /// Project name as listed in its category
    pub project_name: String,
    /// Label of the category the project was collected under
    pub category: String,
    /// Declared token supply
    #[serde(
        default,
        serialize_with = "field::unknown_if_none",
        deserialize_with = "field::none_if_unknown"
    )]
    pub total_supply: Option<String>,
    /// Contract address
    #[serde(
        default,
        serialize_with = "field::empty_if_none",
        deserialize_with = "field::none_if_empty"
    )]
    pub contract_address: Option<String>,
    /// Project homepage
    #[serde(
        default,
        serialize_with = "field::empty_if_none",
        deserialize_with = "field::none_if_empty"
    )]
    pub official_url: Option<String>,
    /// OpenSea collection page; left out of the key when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "field::none_if_empty"
    )]
    pub opensea_url: Option<String>,
}

impl ProjectRecord {
    /// Distill a record from a metadata mapping.
    ///
    /// Returns `None` when the mapping has no usable description: the key is
    /// missing, is not a string, or holds only whitespace. The description is
    /// kept exactly as published.
    pub fn from_metadata(project_name: &str, category: &str, metadata: &Metadata) -> Option<Self> {
        let description = match metadata.get("description") {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            _ => return None,
        };

        Some(Self {
            description,
            project_name: project_name.to_string(),
            category: category.to_string(),
            total_supply: supply_field(metadata),
            contract_address: text_field(metadata, "contract_address"),
            official_url: text_field(metadata, "official_url"),
            opensea_url: text_field(metadata, "opensea_url"),
        })
    }

    /// Description length in characters.
    pub fn description_len(&self) -> usize { self.description.chars().count() }
}

/// A record paired with its anonymization code.
///
/// The ordered list of these is the instructor key: the only place a code
/// can be traced back to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizedEntry {
    /// Generated anonymization code
    pub code: String,
    /// The project behind the code
    #[serde(flatten)]
    pub record: ProjectRecord,
}

impl AnonymizedEntry {
    /// Pair a code with a record.
    pub fn new(code: impl Into<String>, record: ProjectRecord) -> Self {
        Self { code: code.into(), record }
    }
}

/// Read `total_supply`, keeping a published empty string.
///
/// Only an absent or `null` supply becomes `None` (written as `"Unknown"`).
fn supply_field(metadata: &Metadata) -> Option<String> {
    match metadata.get("total_supply")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Read a scalar metadata field as text.
///
/// Strings are taken as-is, other non-null values use their JSON rendering
/// (dashboards publish `total_supply` as a number as often as a string).
fn text_field(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
