#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Shared pieces of the `axial-coding` command line.

use std::path::PathBuf;

use config::{Config, ConfigError, SourceKind};
use logging::LoggingError;
use pipeline::PipelineError;
use source::SourceError;
use thiserror::Error;

/// Errors that end an `axial-coding` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The collection or extraction pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// The metadata source could not be opened or queried.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The log subscriber could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// Console or filesystem failure outside the pipeline.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// `init-config` refused to replace an existing file.
    #[error("{} already exists (pass --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),
    /// Some reports were not written.
    #[error("{0} of 3 output files could not be written")]
    IncompleteReports(usize),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--source`
    pub source: Option<SourceKind>,
    /// `--dataset-dir`
    pub dataset_dir: Option<PathBuf>,
    /// `--output-dir`
    pub output_dir: Option<PathBuf>,
    /// `--log-level`
    pub log_level: Option<String>,
}

impl Overrides {
    /// Apply the overrides to `config`.
    ///
    /// A dataset directory without an explicit source selects the local one.
    pub fn apply(self, config: &mut Config) {
        if let Some(dir) = self.dataset_dir {
            config.source.dataset_dir = Some(dir);
            if self.source.is_none() {
                config.source.kind = SourceKind::Local;
            }
        }
        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(dir) = self.output_dir {
            config.output.dir = dir;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

/// Load the configuration for a run, apply `overrides` and validate it.
pub fn resolve_config(explicit: Option<&std::path::Path>, overrides: Overrides) -> Result<Config> {
    let mut config = Config::load(explicit)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
