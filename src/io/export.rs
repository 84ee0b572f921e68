//! Read/write Avrami fit JSON files.
//!
//! The fit JSON is the "portable" representation of a finished analysis:
//! - fitted parameters (slope = Avrami exponent, intercept, R²)
//! - the transformed value tables the fit was computed from
//! - the precomputed fit line for quick replotting
//!
//! Useful for comparing runs across lab sessions without re-reading the raw
//! DTA files.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AvramiData;
use crate::error::AppError;

/// On-disk schema of an exported fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub subject: String,
    #[serde(flatten)]
    pub data: AvramiData,
}

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, subject: &str, data: &AvramiData) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(5, format!("Failed to create fit JSON '{}': {e}", path.display()))
    })?;

    let export = FitFile {
        tool: "dta".to_string(),
        subject: subject.to_string(),
        data: data.clone(),
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::new(5, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open fit JSON '{}': {e}", path.display()))
    })?;
    let fit: FitFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid fit JSON: {e}")))?;
    Ok(fit)
}
