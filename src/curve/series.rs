//! Crystallinity normalization and transformation-window trimming.
//!
//! The DTA intensity is monotonically related to the transformed fraction, so
//! the crystallinity at each sample is a min-max normalization over the whole
//! series (global extrema, not windowed):
//!
//! ```text
//! X(t) = 1 - (I_max - I(t)) / (I_max - I_min)
//! ```
//!
//! Samples before onset (X ≤ 0.01) and after completion (X > 0.99) are
//! instrument noise for kinetics purposes and are trimmed away before any
//! characteristic time is read off.

use crate::domain::{CrystallinityPoint, RawSample};
use crate::error::AppError;

/// Crystallinity below which the transformation has not started.
pub const ONSET_THRESHOLD: f64 = 0.01;

/// Crystallinity above which the transformation is complete.
pub const COMPLETION_THRESHOLD: f64 = 0.99;

/// Convert raw samples into `(time, crystallinity)` points.
///
/// Time is multiplied by `time_scale` (instrument units to seconds). A flat
/// intensity trace has no transformation to normalize against and is a data
/// error.
pub fn crystallinity_points(
    samples: &[RawSample],
    time_scale: f64,
) -> Result<Vec<CrystallinityPoint>, AppError> {
    if samples.is_empty() {
        return Err(AppError::new(3, "Cannot normalize an empty sample series."));
    }

    let mut i_min = f64::INFINITY;
    let mut i_max = f64::NEG_INFINITY;
    for s in samples {
        i_min = i_min.min(s.intensity);
        i_max = i_max.max(s.intensity);
    }

    if i_max <= i_min {
        return Err(AppError::new(
            3,
            "Flat intensity signal: global min equals global max, no transformation to analyze.",
        ));
    }

    let range = i_max - i_min;
    Ok(samples
        .iter()
        .map(|s| CrystallinityPoint {
            time: s.time * time_scale,
            crystallinity: 1.0 - (i_max - s.intensity) / range,
        })
        .collect())
}

/// Trim a series to its transformation window and re-zero the time axis.
///
/// The retained slice is `[onset, completion)` where onset is the first index
/// with crystallinity above [`ONSET_THRESHOLD`] and completion is the first
/// index above [`COMPLETION_THRESHOLD`]; the completion row itself is
/// excluded. Retained times are shifted so the minimum retained time is 0.
///
/// Both bounds must exist; a series that never starts or never finishes its
/// transformation aborts the run.
pub fn trim_to_transformation(
    points: Vec<CrystallinityPoint>,
) -> Result<Vec<CrystallinityPoint>, AppError> {
    let onset = points
        .iter()
        .position(|p| p.crystallinity > ONSET_THRESHOLD)
        .ok_or_else(|| {
            AppError::new(
                3,
                format!("Crystallinity never exceeds the onset threshold {ONSET_THRESHOLD}."),
            )
        })?;

    let completion = points
        .iter()
        .position(|p| p.crystallinity > COMPLETION_THRESHOLD)
        .ok_or_else(|| {
            AppError::new(
                3,
                format!(
                    "Crystallinity never exceeds the completion threshold {COMPLETION_THRESHOLD}."
                ),
            )
        })?;

    // A single jump straight past 0.99 leaves no window at all.
    if completion <= onset {
        return Err(AppError::new(
            3,
            "Transformation window is empty (onset and completion coincide).",
        ));
    }

    let mut trimmed: Vec<CrystallinityPoint> = points[onset..completion].to_vec();

    let t0 = trimmed
        .iter()
        .map(|p| p.time)
        .fold(f64::INFINITY, f64::min);
    for p in &mut trimmed {
        p.time -= t0;
    }

    Ok(trimmed)
}

/// Time of the first point whose crystallinity strictly exceeds `threshold`.
///
/// Linear scan in series order; `None` when the threshold is never reached.
pub fn first_time_above(points: &[CrystallinityPoint], threshold: f64) -> Option<f64> {
    points
        .iter()
        .find(|p| p.crystallinity > threshold)
        .map(|p| p.time)
}
