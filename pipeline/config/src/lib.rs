#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Axial Configuration
//!
//! This crate provides configuration management for Axial.
//! It handles loading, saving, and validating configuration files that specify:
//! - Which metadata source to use and how to reach it
//! - Where the three report files are written
//! - Logging configuration
//! - The named project categories to collect
//!
//! Configuration is stored in TOML format. Every section is optional; missing
//! sections and keys fall back to the built-in defaults, which reproduce the
//! classroom setup (two categories, hub download, current directory).

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use http::HubSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::Category;

/// Built-in project lists.
pub mod categories;

pub use categories::default_categories;

/// Errors that can occur when loading, saving or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// The configuration parsed but cannot drive a run
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata source settings
    pub source: SourceConfig,
    /// Report file locations
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Project categories, in collection order
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            categories: default_categories(),
        }
    }
}

/// Which [`source::MetadataSource`] implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Direct download of each project's metadata file
    #[default]
    File,
    /// Fuzzy name query against the dataset listing
    Query,
    /// Local clone of the dataset
    Local,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::File => "file",
            SourceKind::Query => "query",
            SourceKind::Local => "local",
        })
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(SourceKind::File),
            "query" => Ok(SourceKind::Query),
            "local" => Ok(SourceKind::Local),
            other => Err(format!("unknown source '{}' (expected file, query or local)", other)),
        }
    }
}

/// Metadata source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source implementation
    pub kind: SourceKind,
    /// Hub base URL
    pub endpoint: String,
    /// Dataset repository (`owner/name`)
    pub repo_id: String,
    /// Dataset revision
    pub revision: String,
    /// Dataset root directory holding one folder per project
    pub root: String,
    /// Local dataset clone, required by the `local` source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_dir: Option<PathBuf>,
    /// Access token; when unset the token environment variables are consulted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let hub = HubSettings::default();
        Self {
            kind: SourceKind::default(),
            endpoint: hub.endpoint,
            repo_id: hub.repo_id,
            revision: hub.revision,
            root: hub.root,
            dataset_dir: None,
            token: None,
            timeout_secs: hub.timeout.as_secs(),
        }
    }
}

impl SourceConfig {
    /// Hub settings for the HTTP sources.
    ///
    /// A token in the file wins over the environment.
    pub fn hub_settings(&self) -> HubSettings {
        let token = self
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(source::auth::token_from_env);
        HubSettings {
            endpoint: self.endpoint.clone(),
            repo_id: self.repo_id.clone(),
            revision: self.revision.clone(),
            root: self.root.clone(),
            token,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Report file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the reports are written to
    pub dir: PathBuf,
    /// Student-facing anonymized descriptions
    pub student_file: String,
    /// Instructor key (JSON)
    pub key_file: String,
    /// Collection log
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            student_file: "student_descriptions.txt".to_string(),
            key_file: "instructor_key.json".to_string(),
            log_file: "collection_metadata.txt".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the student file.
    pub fn student_path(&self) -> PathBuf { self.dir.join(&self.student_file) }

    /// Full path of the instructor key.
    pub fn key_path(&self) -> PathBuf { self.dir.join(&self.key_file) }

    /// Full path of the collection log.
    pub fn log_path(&self) -> PathBuf { self.dir.join(&self.log_file) }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string() } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/axial/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("axial");
        Ok(config_dir.join("config.toml"))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when a file is present there, and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_internal(explicit, Self::default_path().ok())
    }

    /// Internal function for testing - allows injection of the default path
    fn load_internal(
        explicit: Option<&Path>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        match default_path {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check that the configuration can drive a collection run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid("no categories configured".to_string()));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::Invalid("category with an empty name".to_string()));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' is listed more than once",
                    category.name
                )));
            }
        }

        for (key, value) in [
            ("student_file", &self.output.student_file),
            ("key_file", &self.output.key_file),
            ("log_file", &self.output.log_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("output.{} is empty", key)));
            }
        }

        if self.source.kind == SourceKind::Local && self.source.dataset_dir.is_none() {
            return Err(ConfigError::Invalid(
                "the local source needs source.dataset_dir (or --dataset-dir)".to_string(),
            ));
        }

        Ok(())
    }
}
