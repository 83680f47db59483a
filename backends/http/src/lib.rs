#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `axial-http`: Dataset Hub Backend for Axial
//!
//! This crate provides the HTTP implementations of the
//! [`source::MetadataSource`] trait, reading project metadata straight from
//! the dataset hub that hosts `NFT1000`.
//!
//! ## Overview
//!
//! - [`HubClient`] is a thin wrapper over [`reqwest::Client`] that knows the
//!   hub's addressing scheme and attaches the optional bearer token
//! - [`HubFileSource`] downloads `NFT1000/<project>/metadata_dashboard.json`
//!   by direct path
//! - [`HubQuerySource`] lists the dataset first and resolves names fuzzily,
//!   answering misses with near-match suggestions
//!
//! ## Example
//! ```no_run
//! use axial_http::{HubFileSource, HubSettings};
//! use source::MetadataSource;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let settings = HubSettings::default().with_token(source::auth::token_from_env());
//! let hub = HubFileSource::new(settings).unwrap();
//!
//! let metadata = hub.fetch("Azuki").await.unwrap();
//! println!("{:#?}", metadata);
//! # });
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, LINK};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use source::layout::{self, DEFAULT_DATASET_ROOT};
use source::{Metadata, SourceError};

/// Name resolution and suggestions for fuzzy queries.
pub mod fuzzy;

mod file_source;
mod query_source;

pub use file_source::HubFileSource;
pub use query_source::HubQuerySource;

/// Default hub endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";
/// Default dataset repository.
pub const DEFAULT_REPO_ID: &str = "shuxunoo/NFT-Net";
/// Default dataset revision.
pub const DEFAULT_REVISION: &str = "main";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the dataset lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSettings {
    /// Hub base URL (e.g. `https://huggingface.co`)
    pub endpoint: String,
    /// Dataset repository in `owner/name` form
    pub repo_id: String,
    /// Branch, tag or commit to read from
    pub revision: String,
    /// Directory inside the dataset holding one folder per project
    pub root: String,
    /// Optional bearer token
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            repo_id: DEFAULT_REPO_ID.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            root: DEFAULT_DATASET_ROOT.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HubSettings {
    /// Default settings pointed at another endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }

    /// Replace the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Identifier written into the collection log.
    pub fn dataset_label(&self) -> String {
        format!("Hugging Face - {} ({})", self.repo_id, self.root)
    }
}

/// HTTP access to one dataset on the hub.
///
/// Errors at any stage (connection, status, body, JSON) are normalized into
/// [`SourceError`] variants so the pipeline can report them uniformly.
#[derive(Clone)]
pub struct HubClient {
    client: reqwest::Client,
    base: Url,
    settings: HubSettings,
}

impl HubClient {
    /// Build a client for `settings`.
    ///
    /// # Errors
    /// Returns [`SourceError::Other`] if the endpoint is not a usable base URL
    /// or the underlying HTTP client cannot be constructed.
    pub fn new(settings: HubSettings) -> Result<Self, SourceError> {
        let base = Url::parse(&settings.endpoint).map_err(|e| {
            SourceError::Other(format!("invalid hub endpoint '{}': {}", settings.endpoint, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(SourceError::Other(format!(
                "hub endpoint '{}' cannot be used as a base URL",
                settings.endpoint
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("axial/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Other(format!("failed to build HTTP client: {}", e)))?;

        logging::trace("HTTP", &format!("→ initializing hub client for {}", settings.endpoint));
        Ok(Self { client, base, settings })
    }

    /// The settings this client was built from.
    pub fn settings(&self) -> &HubSettings { &self.settings }

    /// URL of a project's metadata file.
    pub fn metadata_url(&self, project: &str) -> Result<Url, SourceError> {
        let mut segments = vec!["datasets"];
        segments.extend(self.settings.repo_id.split('/'));
        segments.extend(["resolve", self.settings.revision.as_str()]);
        segments.extend(layout::metadata_segments(&self.settings.root, project));
        self.join(segments)
    }

    /// URL of the dataset-root listing.
    pub fn tree_url(&self) -> Result<Url, SourceError> {
        let mut segments = vec!["api", "datasets"];
        segments.extend(self.settings.repo_id.split('/'));
        segments.extend(["tree", self.settings.revision.as_str(), self.settings.root.as_str()]);
        self.join(segments)
    }

    fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, SourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Other(format!("cannot extend endpoint {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Download and parse a project's metadata file.
    pub async fn fetch_metadata(&self, project: &str) -> Result<Metadata, SourceError> {
        let url = self.metadata_url(project)?;
        let what = layout::metadata_path(&self.settings.root, project);
        let resp = self.get(url, &what).await?;

        let text = resp.text().await.map_err(|e| {
            tracing::error!("Hub - failed to read body for {}: {}", what, e);
            SourceError::Http(e.to_string())
        })?;
        source::parse_metadata(&text)
    }

    /// Names of the project directories under the dataset root, following
    /// paginated listings to the end.
    pub async fn list_directories(&self) -> Result<Vec<String>, SourceError> {
        let mut names = Vec::new();
        let mut next = Some(self.tree_url()?);

        while let Some(url) = next.take() {
            let resp = self.get(url, &self.settings.root).await?;
            next = next_link(resp.headers());

            let text = resp.text().await.map_err(|e| SourceError::Http(e.to_string()))?;
            let entries: Vec<TreeEntry> = serde_json::from_str(&text)
                .map_err(|e| SourceError::Serialization(format!("{} (listing body: {})", e, text)))?;

            names.extend(
                entries
                    .into_iter()
                    .filter(|entry| entry.kind == "directory")
                    .filter_map(|entry| entry.path.rsplit('/').next().map(str::to_string)),
            );
        }

        tracing::debug!(count = names.len(), "listed dataset projects");
        Ok(names)
    }

    async fn get(&self, url: Url, what: &str) -> Result<Response, SourceError> {
        logging::trace("HTTP", &format!("→ GET {}", url));
        let mut req = self.client.get(url);
        if let Some(token) = &self.settings.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Hub - request failed: {}", e);
            SourceError::Http(e.to_string())
        })?;
        check_status(resp, what)
    }
}

fn check_status(resp: Response, what: &str) -> Result<Response, SourceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN =>
            Err(SourceError::AccessDenied(format!("{} for {}", status, what))),
        StatusCode::NOT_FOUND => Err(SourceError::NotFound(what.to_string())),
        _ => Err(SourceError::Http(format!("{} for {}", status, what))),
    }
}

/// Extract the `rel="next"` target from a `Link` header.
fn next_link(headers: &HeaderMap) -> Option<Url> {
    let value = headers.get(LINK)?.to_str().ok()?;
    value
        .split(',')
        .find_map(|part| {
            let (target, params) = part.split_once(';')?;
            params
                .contains(r#"rel="next""#)
                .then(|| target.trim().trim_start_matches('<').trim_end_matches('>'))
        })
        .and_then(|target| Url::parse(target).ok())
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    #[serde(rename = "type")]
    kind: String,
    path: String,
}
