//! First-N dump of a dataset clone.
//!
//! Walks the dataset's project directories in name order, takes the first
//! `max_projects`, and writes their metadata essentials as JSON plus a
//! readable text report. Unlike a collection run nothing is anonymized and a
//! missing description is kept with a placeholder.

use std::fmt::{self, Write as _};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use source::{Metadata, MetadataSource, SourceError};

use crate::error::{PipelineError, ReportError};
use crate::report::write_text;
use crate::RULE_WIDTH;

/// Placeholder for a project whose metadata has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// One project's metadata essentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProject {
    /// 1-based position in the sorted directory listing
    pub rank: usize,
    /// Directory name
    pub project_name: String,
    /// Description, or [`NO_DESCRIPTION`]
    pub description: String,
    /// Contract address
    pub contract_address: String,
    /// Declared supply
    pub total_supply: String,
    /// Project homepage
    pub official_url: String,
    /// OpenSea collection page
    pub opensea_url: String,
}

impl ExtractedProject {
    fn from_metadata(rank: usize, project_name: &str, metadata: &Metadata) -> Self {
        let field = |key: &str| match metadata.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self {
            rank,
            project_name: project_name.to_string(),
            description: field("description").unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            contract_address: field("contract_address").unwrap_or_default(),
            total_supply: field("total_supply").unwrap_or_default(),
            official_url: field("official_url").unwrap_or_default(),
            opensea_url: field("opensea_url").unwrap_or_default(),
        }
    }
}

/// File names used for a first-`max_projects` dump: `(json, text)`.
pub fn output_file_names(max_projects: usize) -> (String, String) {
    (
        format!("nft1000_first{}_descriptions.json", max_projects),
        format!("nft1000_first{}_descriptions.txt", max_projects),
    )
}

/// Read the first `max_projects` projects listed by `source`.
///
/// Projects whose metadata is missing or unreadable are reported on `out`
/// and left out; their rank is not reused.
pub async fn extract_projects(
    source: &dyn MetadataSource,
    max_projects: usize,
    out: &mut dyn Write,
) -> Result<Vec<ExtractedProject>, PipelineError> {
    let names = source.list_projects().await?;
    writeln!(out, "Found {} projects in {}", names.len(), source.describe())?;
    writeln!(out, "Extracting descriptions for first {} projects...\n", max_projects)?;

    let mut projects = Vec::new();
    for (rank, name) in names.iter().take(max_projects).enumerate().map(|(i, n)| (i + 1, n)) {
        match source.fetch(name).await {
            Ok(metadata) => {
                projects.push(ExtractedProject::from_metadata(rank, name, &metadata));
                writeln!(out, "{}. {}", rank, name)?;
            }
            Err(SourceError::NotFound(_)) =>
                writeln!(out, "Warning: No metadata_dashboard.json found for {}", name)?,
            Err(err) => writeln!(out, "Error reading metadata for {}: {}", name, err)?,
        }
    }
    Ok(projects)
}

/// Readable text version of an extraction.
pub fn render_extract_report(
    projects: &[ExtractedProject],
    max_projects: usize,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "NFT1000 DATASET - FIRST {} PROJECTS", max_projects)?;
    write!(out, "{}\n\n", "=".repeat(RULE_WIDTH))?;

    for project in projects {
        writeln!(out, "{}. {}", project.rank, project.project_name)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(out, "Description: {}", project.description)?;
        for (label, value) in [
            ("Total Supply", &project.total_supply),
            ("Official URL", &project.official_url),
            ("OpenSea", &project.opensea_url),
            ("Contract", &project.contract_address),
        ] {
            if !value.is_empty() {
                writeln!(out, "{}: {}", label, value)?;
            }
        }
        out.push_str("\n\n");
    }
    Ok(out)
}

/// Files produced by [`run_extract`].
#[derive(Debug)]
pub struct ExtractSummary {
    /// Extracted projects
    pub projects: Vec<ExtractedProject>,
    /// JSON dump
    pub json_path: PathBuf,
    /// Text report, absent when nothing was extracted
    pub report_path: Option<PathBuf>,
}

/// Extract and write both files into `dir`.
pub async fn run_extract(
    source: &dyn MetadataSource,
    max_projects: usize,
    dir: &Path,
    out: &mut dyn Write,
) -> Result<ExtractSummary, PipelineError> {
    let projects = extract_projects(source, max_projects, out).await?;
    let (json_name, text_name) = output_file_names(max_projects);

    let json_path = dir.join(json_name);
    let json = serde_json::to_string_pretty(&projects)
        .map_err(|source| ReportError::Serialize { path: json_path.clone(), source })?;
    write_text(&json_path, &json)?;
    writeln!(out, "\n✓ Extracted descriptions for {} projects", projects.len())?;
    writeln!(out, "✓ Saved to: {}", json_path.display())?;

    let report_path = if projects.is_empty() {
        None
    } else {
        let path = dir.join(text_name);
        let text = render_extract_report(&projects, max_projects)
            .map_err(|source| ReportError::Render { path: path.clone(), source })?;
        write_text(&path, &text)?;
        writeln!(out, "✓ Created readable report: {}", path.display())?;
        Some(path)
    };

    Ok(ExtractSummary { projects, json_path, report_path })
}
