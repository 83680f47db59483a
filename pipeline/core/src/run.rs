use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use config::OutputConfig;
use source::MetadataSource;
use types::Category;

use crate::collect::{collect, Collection};
use crate::error::{PipelineError, ReportError};
use crate::report::{self, LogContext};

/// Where the three reports go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Student file
    pub student: PathBuf,
    /// Instructor key
    pub key: PathBuf,
    /// Collection log
    pub log: PathBuf,
}

impl From<&OutputConfig> for ReportPaths {
    fn from(output: &OutputConfig) -> Self {
        Self { student: output.student_path(), key: output.key_path(), log: output.log_path() }
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// What was collected and skipped
    pub collection: Collection,
    /// Reports written successfully, in write order
    pub written: Vec<PathBuf>,
    /// Reports that failed to write
    pub failures: Vec<ReportError>,
}

impl RunSummary {
    /// Whether every report was written.
    pub fn is_complete(&self) -> bool { self.failures.is_empty() }
}

/// Collect every category and write the three reports.
///
/// Aborts with [`PipelineError::NothingCollected`] before touching the
/// filesystem when no project yields a description. Otherwise each report is
/// attempted regardless of whether an earlier one failed.
pub async fn run_collection(
    source: &dyn MetadataSource,
    categories: &[Category],
    paths: &ReportPaths,
    collected_at: NaiveDateTime,
    out: &mut dyn Write,
) -> Result<RunSummary, PipelineError> {
    let collection = collect(source, categories, out).await?;

    if collection.is_empty() {
        writeln!(out, "\n❌ No descriptions were fetched!")?;
        writeln!(out, "\nPossible issues:")?;
        writeln!(out, "- Check your Hugging Face authentication")?;
        writeln!(out, "- Verify dataset access permissions")?;
        writeln!(out, "- Some project names might have changed")?;
        return Err(PipelineError::NothingCollected);
    }

    let rule = "=".repeat(60);
    writeln!(out, "\n{}\nCOLLECTION SUMMARY\n{}", rule, rule)?;
    writeln!(out, "Total descriptions: {}", collection.entries.len())?;
    for count in &collection.counts {
        writeln!(out, "  {}: {} of {}", count.name, count.collected, count.listed)?;
    }
    if !collection.skipped.is_empty() {
        writeln!(out, "Skipped: {}", collection.skipped.len())?;
    }

    writeln!(out, "\n{}\nCreating output files...\n{}", rule, rule)?;

    let entries = &collection.entries;
    let ctx = LogContext { collected_at, source: source.describe(), counts: &collection.counts };
    let attempts = [
        ("student file", paths.student.clone(), report::write_student_file(&paths.student, entries)),
        ("instructor key", paths.key.clone(), report::write_instructor_key(&paths.key, entries)),
        ("metadata log", paths.log.clone(), report::write_metadata_log(&paths.log, entries, &ctx)),
    ];

    let mut written = Vec::new();
    let mut failures = Vec::new();
    for (label, path, result) in attempts {
        match result {
            Ok(()) => {
                writeln!(out, "✓ Created {}: {}", label, path.display())?;
                written.push(path);
            }
            Err(err) => {
                writeln!(out, "✗ Could not create {}: {}", label, err)?;
                tracing::error!(report = label, "{}", err);
                failures.push(err);
            }
        }
    }

    Ok(RunSummary { collection, written, failures })
}
