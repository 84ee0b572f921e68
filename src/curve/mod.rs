//! Single-temperature analyzer.
//!
//! This is the unit of work the whole pipeline is built from: one
//! `(subject, temperature)` DTA file in, one trimmed crystallinity series and
//! one characteristic-time table out. Plot rendering stays in the app layer
//! so this module is testable without touching the drawing backend.

pub mod series;

pub use series::{
    COMPLETION_THRESHOLD, ONSET_THRESHOLD, crystallinity_points, first_time_above,
    trim_to_transformation,
};

use crate::domain::{AnalysisConfig, CrystallinitySeries, ThresholdEntry, ThresholdTable};
use crate::error::AppError;
use crate::io::ingest;
use crate::math::round_dp;

/// Analyze one temperature: load, normalize, trim, and read off the first
/// time each requested crystallinity threshold is exceeded.
///
/// Times in the returned table are re-zeroed seconds rounded to 2 decimal
/// places. A threshold the trimmed series never reaches is a data error that
/// names the threshold and the file, not a silent gap in the table.
pub fn analyze_temperature(
    config: &AnalysisConfig,
    temperature: i32,
    thresholds: &[f64],
) -> Result<(CrystallinitySeries, ThresholdTable), AppError> {
    let path = config.data_file(temperature);
    let samples = ingest::load_raw_samples(&path)?;

    let points = crystallinity_points(&samples, config.time_scale)?;
    let points = trim_to_transformation(points)?;

    let mut entries = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let time = first_time_above(&points, threshold).ok_or_else(|| {
            AppError::new(
                3,
                format!(
                    "Crystallinity never exceeds {threshold} at {temperature} °C ('{}').",
                    path.display()
                ),
            )
        })?;
        entries.push(ThresholdEntry {
            threshold,
            time: round_dp(time, 2),
        });
    }

    Ok((
        CrystallinitySeries {
            temperature,
            points,
        },
        ThresholdTable {
            temperature,
            entries,
        },
    ))
}
