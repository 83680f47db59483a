#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Axial collection pipeline
//!
//! One run walks the configured categories in order, fetches every listed
//! project through a [`source::MetadataSource`], keeps the projects with a
//! usable description, tags each with a deterministic anonymization code and
//! writes three reports:
//!
//! - the student file: codes and descriptions only
//! - the instructor key: every entry as JSON, the only way back from code to project
//! - the collection log: counts, description statistics and the code listing
//!
//! Fetching is strictly sequential. A failed project is reported on the
//! console and skipped; a run that collects nothing writes nothing.

/// Anonymization codes.
pub mod codes;
/// Sequential fetch-and-filter over the categories.
pub mod collect;
/// Pipeline error types.
pub mod error;
/// First-N description dump from a local dataset clone.
pub mod extract;
/// Report rendering and writing.
pub mod report;
/// End-to-end collection run.
pub mod run;
/// Metadata source construction from configuration.
pub mod sources;
/// Description length statistics.
pub mod stats;

pub use codes::generate_code;
pub use collect::{collect, CategoryCount, Collection, SkipReason, Skipped};
pub use error::{PipelineError, ReportError};
pub use run::{run_collection, ReportPaths, RunSummary};
pub use sources::build_source;
pub use stats::DescriptionStats;

/// Width of the `=` and `-` rules used in console output and reports.
pub const RULE_WIDTH: usize = 80;
