//! The three collection reports.
//!
//! Each report has a pure `render_*` function and a `write_*` wrapper. Writes
//! are independent: a failure in one never stops the others.

use std::path::Path;

use crate::error::ReportError;

mod key;
mod log;
mod student;

pub use key::{render_instructor_key, write_instructor_key};
pub use log::{render_metadata_log, write_metadata_log, LogContext};
pub use student::{render_student_file, write_student_file};

/// Write `contents` to `path`, creating missing parent directories.
pub(crate) fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    };
    write().map_err(|source| ReportError::Write { path: path.to_path_buf(), source })
}
