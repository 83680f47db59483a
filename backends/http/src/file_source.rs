use async_trait::async_trait;
use source::{Metadata, MetadataSource, SourceError};

use crate::{HubClient, HubSettings};

/// Direct keyed download of a project's metadata file.
///
/// The project name is used verbatim as the directory name; a name that does
/// not match the dataset exactly surfaces as [`SourceError::NotFound`].
#[derive(Clone)]
pub struct HubFileSource {
    hub: HubClient,
    label: String,
}

impl HubFileSource {
    /// Build a source for `settings`.
    pub fn new(settings: HubSettings) -> Result<Self, SourceError> {
        Ok(Self::from_client(HubClient::new(settings)?))
    }

    /// Wrap an existing client.
    pub fn from_client(hub: HubClient) -> Self {
        let label = hub.settings().dataset_label();
        Self { hub, label }
    }
}

#[async_trait]
impl MetadataSource for HubFileSource {
    async fn fetch(&self, project: &str) -> Result<Metadata, SourceError> {
        self.hub.fetch_metadata(project).await
    }

    async fn list_projects(&self) -> Result<Vec<String>, SourceError> {
        self.hub.list_directories().await
    }

    fn describe(&self) -> &str { &self.label }
}
