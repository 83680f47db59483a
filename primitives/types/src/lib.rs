#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core data model for Axial
//!
//! This crate defines the records that flow through a collection run: the
//! named project categories that drive fetching, the per-project record
//! distilled from a dataset's `metadata_dashboard.json`, and the anonymized
//! entry that pairs a record with its generated code.
//!
//! Everything here is plain data. Fetching lives in the `source` crate and its
//! backends; code generation and report writing live in the pipeline.

/// Named, ordered project lists.
pub mod category;
/// Project records and their anonymized form.
pub mod record;

mod field;

pub use category::Category;
pub use record::{AnonymizedEntry, Metadata, ProjectRecord, UNKNOWN_SUPPLY};
