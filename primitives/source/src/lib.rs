#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `axial-source`: Metadata Source Abstraction
//!
//! This crate defines the **core fetch abstraction** used by the collection
//! pipeline.
//!
//! A collection run resolves every listed project name to the metadata
//! mapping published in the dataset's `metadata_dashboard.json`. How that
//! mapping is obtained is a backend concern: `axial-http` downloads it from
//! the dataset hub (either by direct path or through a fuzzy name query),
//! `axial-local` reads it from a local clone. The pipeline only sees the
//! [`MetadataSource`] trait.
//!
//! ## Core Concepts
//!
//! ### `MetadataSource` Trait
//! Fetches the metadata mapping for a project name, lists the project names
//! the source knows about, and describes itself for the collection log.
//!
//! ### `SourceError`
//! Enumerates the failure classes a fetch can hit. Every one of them is
//! terminal for the single project being fetched and nothing more.
//!
//! ### `DynSource`
//! A type-erased (`Arc<dyn MetadataSource>`) handle so the pipeline and the
//! CLI can pick a backend at runtime.
//!
//! ## Example
//! ```no_run
//! use source::{DynSource, SourceError};
//!
//! async fn demo(source: DynSource) -> Result<(), SourceError> {
//!     let metadata = source.fetch("Azuki").await?;
//!     println!("description = {}", metadata["description"]);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
pub use types::Metadata;

/// Dataset layout conventions shared by every backend.
pub mod layout;
/// Bearer-token discovery.
pub mod auth;

/// Type alias for structured error handling in fetch operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Canonical error type for all metadata sources.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Connection-level failure or an unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The project's metadata file does not exist.
    #[error("Metadata not found: {0}")]
    NotFound(String),

    /// The source refused access (missing token, gated dataset, file permissions).
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// A fuzzy lookup found no project with the requested name.
    #[error("{}", ambiguous_message(.query, .suggestions))]
    Ambiguous {
        /// The name that was asked for
        query: String,
        /// Closest known names, best first
        suggestions: Vec<String>,
    },

    /// The payload was not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The payload was valid JSON but not shaped like a metadata mapping.
    #[error("Invalid metadata format: {0}")]
    InvalidFormat(String),

    /// Local filesystem failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Any other error not covered by the specific variants above.
    #[error("Other error: {0}")]
    Other(String),
}

impl SourceError {
    /// Near-match suggestions carried by an [`SourceError::Ambiguous`] error.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            SourceError::Ambiguous { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

fn ambiguous_message(query: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("No project named '{}'", query)
    } else {
        format!("No project named '{}', do you mean {}?", query, suggestions.join(", "))
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self { SourceError::Serialization(err.to_string()) }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(err.to_string()),
            std::io::ErrorKind::PermissionDenied => SourceError::AccessDenied(err.to_string()),
            _ => SourceError::Io(err.to_string()),
        }
    }
}

/// A provider of per-project metadata.
///
/// Implementations perform one lookup per call and never retry; the caller
/// decides what a failure means for the run.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch the metadata mapping published for `project`.
    async fn fetch(&self, project: &str) -> Result<Metadata>;

    /// List the project names this source can serve, in the source's order.
    async fn list_projects(&self) -> Result<Vec<String>>;

    /// Human-readable identifier written into the collection log.
    fn describe(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched metadata source.
///
/// ```
/// use source::DynSource;
///
/// fn report(source: DynSource) {
///     println!("Using source: {}", source.describe());
/// }
/// ```
pub type DynSource = Arc<dyn MetadataSource>;

/// Parse a metadata payload, requiring a top-level JSON object.
pub fn parse_metadata(text: &str) -> Result<Metadata> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(SourceError::InvalidFormat(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
