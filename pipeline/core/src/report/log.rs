use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::NaiveDateTime;
use types::AnonymizedEntry;

use super::write_text;
use crate::collect::CategoryCount;
use crate::error::ReportError;
use crate::stats::{format_thousands, DescriptionStats, CHARS_PER_PAGE};
use crate::RULE_WIDTH;

/// Run facts recorded in the collection log besides the entries.
#[derive(Debug, Clone, Copy)]
pub struct LogContext<'a> {
    /// When the collection ran (local time)
    pub collected_at: NaiveDateTime,
    /// Source identifier
    pub source: &'a str,
    /// Per-category tallies, in configured order
    pub counts: &'a [CategoryCount],
}

/// Collection log text.
pub fn render_metadata_log(
    entries: &[AnonymizedEntry],
    ctx: &LogContext<'_>,
) -> Result<String, fmt::Error> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    writeln!(out, "DATA COLLECTION LOG")?;
    write!(out, "{}\n\n", heavy)?;

    writeln!(out, "Collection Date: {}", ctx.collected_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Dataset Source: {}", ctx.source)?;
    write!(out, "Total Descriptions Collected: {}\n\n", entries.len())?;

    writeln!(out, "CATEGORY BREAKDOWN:")?;
    writeln!(out, "{}", light)?;
    for count in ctx.counts {
        writeln!(out, "{}: {} descriptions", count.name, count.collected)?;
    }

    write!(out, "\n\nDESCRIPTION STATISTICS:\n")?;
    writeln!(out, "{}", light)?;
    match DescriptionStats::from_entries(entries) {
        Some(stats) => {
            writeln!(out, "Total characters: {}", format_thousands(stats.total))?;
            writeln!(out, "Average length: {} characters", format_thousands(stats.average))?;
            writeln!(out, "Shortest: {} characters", format_thousands(stats.shortest))?;
            writeln!(out, "Longest: {} characters", format_thousands(stats.longest))?;
            writeln!(
                out,
                "\nEstimated pages ({} chars/page): {:.1} pages",
                CHARS_PER_PAGE,
                stats.estimated_pages()
            )?;
        }
        None => {
            writeln!(out, "No descriptions collected.")?;
        }
    }

    write!(out, "\n\nPROJECTS COLLECTED:\n")?;
    writeln!(out, "{}", light)?;
    for count in ctx.counts {
        write!(out, "\n{}:\n", count.name)?;
        for entry in entries.iter().filter(|e| e.record.category == count.name) {
            writeln!(out, "  - {}: {}", entry.code, entry.record.project_name)?;
        }
    }
    Ok(out)
}

/// Write the collection log.
pub fn write_metadata_log(
    path: &Path,
    entries: &[AnonymizedEntry],
    ctx: &LogContext<'_>,
) -> Result<(), ReportError> {
    let text = render_metadata_log(entries, ctx)
        .map_err(|source| ReportError::Render { path: path.to_path_buf(), source })?;
    write_text(path, &text)
}
