use std::fmt::{self, Write as _};
use std::path::Path;

use types::AnonymizedEntry;

use super::write_text;
use crate::error::ReportError;
use crate::RULE_WIDTH;

const INSTRUCTIONS: [&str; 4] = [
    "Instructions:",
    "Read through these descriptions and perform axial coding.",
    "Each description has a unique code (e.g., NFT12ABC345).",
    "Use these codes when referring to specific items.",
];

/// Student-facing text: header, then one `CODE:` block per entry.
pub fn render_student_file(entries: &[AnonymizedEntry]) -> Result<String, fmt::Error> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str("NFT PROJECT DESCRIPTIONS - AXIAL CODING CHALLENGE\n");
    write!(out, "{}\n\n", heavy)?;
    for line in INSTRUCTIONS {
        out.push_str(line);
        out.push('\n');
    }
    write!(out, "\n{}\n\n", heavy)?;

    for entry in entries {
        writeln!(out, "CODE: {}", entry.code)?;
        writeln!(out, "{}", light)?;
        writeln!(out, "{}", entry.record.description)?;
        write!(out, "\n{}\n\n", heavy)?;
    }
    Ok(out)
}

/// Write the student file.
pub fn write_student_file(path: &Path, entries: &[AnonymizedEntry]) -> Result<(), ReportError> {
    let text = render_student_file(entries)
        .map_err(|source| ReportError::Render { path: path.to_path_buf(), source })?;
    write_text(path, &text)
}
