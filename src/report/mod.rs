//! Summary reports: table formatting and file writing.
//!
//! We keep formatting code in one place so:
//! - the kinetics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use std::path::Path;

use crate::error::AppError;

/// Write a summary report, overwriting any previous run's file.
pub fn write_report(path: &Path, contents: &str) -> Result<(), AppError> {
    std::fs::write(path, contents).map_err(|e| {
        AppError::new(5, format!("Failed to write report '{}': {e}", path.display()))
    })
}
