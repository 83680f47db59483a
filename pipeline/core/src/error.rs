use std::path::PathBuf;

use config::ConfigError;
use source::SourceError;
use thiserror::Error;

/// Errors that end a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Not a single project yielded a usable description.
    #[error(
        "No descriptions were fetched. Check your dataset authentication, access permissions, \
         and whether project names have changed."
    )]
    NothingCollected,
    /// The metadata source could not be set up.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The configuration cannot drive a run.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// Console output failed.
    #[error("Console output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing a single report file.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The file (or its directory) could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Entries could not be serialized as JSON.
    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        /// Target file
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },
    /// The report text could not be formatted.
    #[error("Failed to render {}: {source}", .path.display())]
    Render {
        /// Target file
        path: PathBuf,
        /// Underlying formatter error
        source: std::fmt::Error,
    },
}

impl ReportError {
    /// File the failed write was aimed at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReportError::Write { path, .. }
            | ReportError::Serialize { path, .. }
            | ReportError::Render { path, .. } => path,
        }
    }
}
