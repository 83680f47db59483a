#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `axial-local`: Local Dataset Backend for Axial
//!
//! Reads project metadata from a local clone (or partial download) of the
//! dataset, using the same `<root>/<project>/metadata_dashboard.json` layout
//! the hub serves.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use source::layout::{self, METADATA_FILE};
use source::{Metadata, MetadataSource, SourceError};

/// Metadata source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalDatasetSource {
    root: PathBuf,
    label: String,
}

impl LocalDatasetSource {
    /// Open `<dataset_dir>/<root>`.
    ///
    /// # Errors
    /// Returns [`SourceError::NotFound`] if the directory does not exist, so a
    /// mistyped path fails before any project is attempted.
    pub fn open(dataset_dir: impl AsRef<Path>, root: &str) -> Result<Self, SourceError> {
        let root_dir = dataset_dir.as_ref().join(root);
        if !root_dir.is_dir() {
            return Err(SourceError::NotFound(format!(
                "dataset directory {} does not exist",
                root_dir.display()
            )));
        }

        let label = format!("Local dataset - {}", root_dir.display());
        logging::trace("LOCAL", &format!("→ opened dataset at {}", root_dir.display()));
        Ok(Self { root: root_dir, label })
    }

    /// Directory holding one folder per project.
    pub fn root(&self) -> &Path { &self.root }

    /// Path of a project's metadata file.
    pub fn metadata_file(&self, project: &str) -> PathBuf {
        self.root.join(project).join(METADATA_FILE)
    }
}

#[async_trait]
impl MetadataSource for LocalDatasetSource {
    async fn fetch(&self, project: &str) -> Result<Metadata, SourceError> {
        let path = self.metadata_file(project);
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                let root = self.root.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                SourceError::NotFound(layout::metadata_path(root, project))
            }
            _ => SourceError::from(e),
        })?;
        source::parse_metadata(&text)
    }

    /// Project directories sorted by name.
    async fn list_projects(&self) -> Result<Vec<String>, SourceError> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> &str { &self.label }
}
