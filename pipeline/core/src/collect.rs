use std::io::Write;

use source::{MetadataSource, SourceError};
use types::{AnonymizedEntry, Category, ProjectRecord};

use crate::codes::generate_code;
use crate::error::PipelineError;

const BANNER_WIDTH: usize = 60;

/// Why a listed project did not make it into the outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Metadata was retrieved but held no usable description.
    NoDescription,
    /// The source did not know the name; near matches for manual correction.
    Ambiguous(Vec<String>),
    /// Any other fetch failure.
    Failed(SourceError),
}

/// A project that was listed but not collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Category label
    pub category: String,
    /// 1-based position within the category
    pub index: usize,
    /// Project name as listed
    pub project: String,
    /// What went wrong
    pub reason: SkipReason,
}

/// Per-category tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label
    pub name: String,
    /// Projects listed
    pub listed: usize,
    /// Projects collected
    pub collected: usize,
}

/// Everything a collection pass produced.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Collected entries: each category in full, in configured order
    pub entries: Vec<AnonymizedEntry>,
    /// One tally per configured category, including empty ones
    pub counts: Vec<CategoryCount>,
    /// Projects that were skipped
    pub skipped: Vec<Skipped>,
}

impl Collection {
    /// Whether no project was collected.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Fetch every project of every category, in order, one at a time.
///
/// Progress lines go to `out`: `✓` for a collected project, `✗` for a
/// missing description or a fetch error, `?` when the source offers
/// suggestions for a name it does not know. Failures never abort the pass.
pub async fn collect(
    source: &dyn MetadataSource,
    categories: &[Category],
    out: &mut dyn Write,
) -> Result<Collection, PipelineError> {
    let mut collection = Collection::default();

    for category in categories {
        writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out, "Fetching {} projects...", category.name)?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

        let before = collection.entries.len();
        for (index, project) in category.indexed() {
            match fetch_entry(source, &category.name, index, project).await {
                Ok(entry) => {
                    writeln!(
                        out,
                        "✓ {:2}. {:40} [{:4} chars]",
                        index,
                        project,
                        entry.record.description_len()
                    )?;
                    collection.entries.push(entry);
                }
                Err(reason) => {
                    write_skip_line(out, index, project, &reason)?;
                    tracing::debug!(category = %category.name, project, ?reason, "skipped project");
                    collection.skipped.push(Skipped {
                        category: category.name.clone(),
                        index,
                        project: project.to_string(),
                        reason,
                    });
                }
            }
        }

        collection.counts.push(CategoryCount {
            name: category.name.clone(),
            listed: category.len(),
            collected: collection.entries.len() - before,
        });
    }

    Ok(collection)
}

/// Fetch one project and turn it into an anonymized entry.
pub async fn fetch_entry(
    source: &dyn MetadataSource,
    category: &str,
    index: usize,
    project: &str,
) -> Result<AnonymizedEntry, SkipReason> {
    let metadata = source.fetch(project).await.map_err(|err| match err {
        SourceError::Ambiguous { suggestions, .. } if !suggestions.is_empty() =>
            SkipReason::Ambiguous(suggestions),
        other => SkipReason::Failed(other),
    })?;

    let record = ProjectRecord::from_metadata(project, category, &metadata)
        .ok_or(SkipReason::NoDescription)?;
    Ok(AnonymizedEntry::new(generate_code(project, index), record))
}

fn write_skip_line(
    out: &mut dyn Write,
    index: usize,
    project: &str,
    reason: &SkipReason,
) -> std::io::Result<()> {
    match reason {
        SkipReason::NoDescription => writeln!(out, "✗ {:2}. {:40} [NO DESCRIPTION]", index, project),
        SkipReason::Ambiguous(suggestions) => writeln!(
            out,
            "? {:2}. {:40} [SUGGESTIONS: {}]",
            index,
            project,
            suggestions.join(", ")
        ),
        SkipReason::Failed(err) => writeln!(out, "✗ {:2}. {:40} [ERROR: {}]", index, project, err),
    }
}
