use async_trait::async_trait;
use source::{Metadata, MetadataSource, SourceError};
use tokio::sync::OnceCell;

use crate::fuzzy::{self, Resolution};
use crate::{HubClient, HubSettings};

/// Name-query lookup against the dataset listing.
///
/// The listing is downloaded on first use and kept for the life of the
/// source. Requested names are resolved exactly, then case- and
/// punctuation-insensitively; misses come back as
/// [`SourceError::Ambiguous`] with the closest listed names.
pub struct HubQuerySource {
    hub: HubClient,
    label: String,
    names: OnceCell<Vec<String>>,
}

impl HubQuerySource {
    /// Build a source for `settings`.
    pub fn new(settings: HubSettings) -> Result<Self, SourceError> {
        Ok(Self::from_client(HubClient::new(settings)?))
    }

    /// Wrap an existing client.
    pub fn from_client(hub: HubClient) -> Self {
        let settings = hub.settings();
        let label = format!("Hugging Face - {} ({}, name query)", settings.repo_id, settings.root);
        Self { hub, label, names: OnceCell::new() }
    }

    async fn names(&self) -> Result<&[String], SourceError> {
        let names = self.names.get_or_try_init(|| self.hub.list_directories()).await?;
        Ok(names.as_slice())
    }
}

#[async_trait]
impl MetadataSource for HubQuerySource {
    async fn fetch(&self, project: &str) -> Result<Metadata, SourceError> {
        let names = self.names().await?;
        let resolved = match fuzzy::resolve(names, project) {
            Resolution::Exact(name) => name,
            Resolution::Normalized(name) => {
                tracing::info!(requested = project, resolved = %name, "resolved project name");
                name
            }
            Resolution::Unknown(suggestions) =>
                return Err(SourceError::Ambiguous { query: project.to_string(), suggestions }),
        };
        self.hub.fetch_metadata(&resolved).await
    }

    async fn list_projects(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.names().await?.to_vec())
    }

    fn describe(&self) -> &str { &self.label }
}
