//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable where it
//! matters so they can be:
//!
//! - used in-memory during the analysis
//! - exported to JSON (Avrami fit)
//! - reloaded later for comparisons across lab sessions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One row of a raw DTA file, before any normalization.
///
/// The time axis is in instrument units; `AnalysisConfig::time_scale` converts
/// it to seconds. The heating-rate column is carried through ingest but not
/// used by the crystallinity computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    pub time: f64,
    pub rate: f64,
    pub intensity: f64,
}

/// One `(time, crystallinity)` pair of a normalized series.
///
/// `crystallinity` is in `[0, 1]` by construction (min-max normalization of
/// the intensity over the whole series). Time is in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystallinityPoint {
    pub time: f64,
    pub crystallinity: f64,
}

/// A trimmed, re-zeroed crystallinity series for one temperature.
#[derive(Debug, Clone)]
pub struct CrystallinitySeries {
    /// Isothermal crystallization temperature in degrees Celsius.
    pub temperature: i32,
    pub points: Vec<CrystallinityPoint>,
}

/// One `(threshold, time)` entry of a characteristic-time table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdEntry {
    pub threshold: f64,
    /// First re-zeroed time (seconds) at which `threshold` is exceeded,
    /// rounded to 2 decimal places.
    pub time: f64,
}

/// Characteristic times for one temperature, in threshold input order.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    pub temperature: i32,
    pub entries: Vec<ThresholdEntry>,
}

impl ThresholdTable {
    /// Look up the time for a given threshold, if present in the table.
    pub fn time_at(&self, threshold: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| (e.threshold - threshold).abs() < 1e-9)
            .map(|e| e.time)
    }
}

/// Crystallization half-time for one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfTimePoint {
    pub temperature: i32,
    /// Time (seconds) to reach 50% crystallinity.
    pub half_time: f64,
    /// `1 / half_time`, rounded to 2 decimal places for reporting.
    pub reciprocal: f64,
}

/// Parameters of the fitted Avrami double-log line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvramiFit {
    /// Avrami exponent `n`.
    pub slope: f64,
    /// `log10(K)` up to the log-base conversion.
    pub intercept: f64,
    pub r_squared: f64,
}

/// Transformed Avrami data and the fitted line for one reference temperature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvramiData {
    pub temperature: i32,
    /// `x = log10(t)` per Avrami threshold, in threshold order.
    pub log_time: Vec<f64>,
    /// `y = log10(-ln(1 - crystallinity))` per Avrami threshold.
    pub log_log_crystallinity: Vec<f64>,
    pub fit: AvramiFit,
    /// 1000 evenly spaced `(x, slope·x + intercept)` points spanning the
    /// observed x range, for the overlay plot.
    pub fit_line: Vec<(f64, f64)>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Subject identifier used in input file names.
    pub subject: String,
    /// Temperatures (degrees Celsius) to analyze, in report order.
    pub temps: Vec<i32>,
    /// Crystallinity thresholds for the characteristic-time table.
    pub thresholds: Vec<f64>,
    /// Reference temperature for the Avrami fit.
    ///
    /// Deliberately decoupled from `temps`, matching the lab procedure: the
    /// double-log fit is always done at one fixed temperature even when the
    /// part-1 sweep covers a different set.
    pub reference_temp: i32,
    /// Multiplier converting instrument time units to seconds.
    pub time_scale: f64,
    /// Directory containing the raw DTA files.
    pub data_dir: PathBuf,
    /// Directory receiving summary tables and plots.
    pub out_dir: PathBuf,
    /// Whether to render SVG plots.
    pub plots: bool,
    /// Optional JSON export path for the Avrami fit.
    pub export_fit: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Input file path for one temperature: `<subject>-<temp>-1_DTA.txt`.
    pub fn data_file(&self, temperature: i32) -> PathBuf {
        self.data_dir
            .join(format!("{}-{}-1_DTA.txt", self.subject, temperature))
    }

    /// Output path under `out_dir`.
    pub fn out_file(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}

/// Default temperature sweep (degrees Celsius), in report order.
pub const DEFAULT_TEMPS: [i32; 5] = [120, 110, 100, 90, 80];

/// Default characteristic-time thresholds. Must contain 0.5 so the
/// half-time table can be derived.
pub const DEFAULT_THRESHOLDS: [f64; 10] = [0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
