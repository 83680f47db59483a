use std::sync::Arc;

use config::{ConfigError, SourceConfig, SourceKind};
use http::{HubFileSource, HubQuerySource};
use local::LocalDatasetSource;
use source::DynSource;

use crate::error::PipelineError;

/// Build the metadata source selected by `config`.
///
/// # Errors
/// Fails when the hub endpoint is unusable, the HTTP client cannot be built,
/// or the local dataset directory is missing.
pub fn build_source(config: &SourceConfig) -> Result<DynSource, PipelineError> {
    let source: DynSource = match config.kind {
        SourceKind::File => Arc::new(HubFileSource::new(config.hub_settings())?),
        SourceKind::Query => Arc::new(HubQuerySource::new(config.hub_settings())?),
        SourceKind::Local => {
            let dir = config.dataset_dir.as_ref().ok_or_else(|| {
                ConfigError::Invalid("the local source needs a dataset directory".to_string())
            })?;
            Arc::new(LocalDatasetSource::open(dir, &config.root)?)
        }
    };
    tracing::info!(kind = %config.kind, source = source.describe(), "metadata source ready");
    Ok(source)
}
