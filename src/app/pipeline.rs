//! The full analysis pipeline behind `dta analyze`.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! per-temperature curves -> half-time aggregation -> Avrami fit -> reports/plots
//!
//! The CLI layer can then focus on argument handling and terminal output.
//!
//! Failure semantics are fail loud, fail whole-run: any missing input file,
//! unreachable threshold, or degenerate regression aborts with a nonzero
//! exit code. No partial results are written after the failing step.

use crate::curve;
use crate::domain::{AnalysisConfig, AvramiData, AvramiFit, HalfTimePoint, ThresholdTable};
use crate::error::AppError;
use crate::io::export;
use crate::math::{linear_fit, round_dp};
use crate::plot;
use crate::report;

/// Crystallinity thresholds used for the Avrami double-log fit.
///
/// Fixed by the thermodynamic model: 0.1–0.9 in steps of 0.1, regardless of
/// the characteristic-time threshold list.
pub const AVRAMI_THRESHOLDS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// All computed outputs of a single `dta analyze` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Characteristic-time tables, one per temperature, in input order.
    pub tables: Vec<ThresholdTable>,
    /// Half-times per temperature, in input order.
    pub half_times: Vec<HalfTimePoint>,
    /// Avrami fit at the reference temperature.
    pub avrami: AvramiData,
}

/// Execute the full analysis and write all reports, plots, and exports.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    let mut tables = Vec::with_capacity(config.temps.len());
    let mut half_times = Vec::with_capacity(config.temps.len());

    // 1) Per-temperature curves and characteristic times.
    for &temperature in &config.temps {
        let (series, table) = curve::analyze_temperature(config, temperature, &config.thresholds)?;

        if config.plots {
            let path = config.out_file(&format!("part1_{temperature}_degree_celsius.svg"));
            plot::crystallinity_scatter(&series, &path)?;
        }

        let half_time = table.time_at(0.5).ok_or_else(|| {
            AppError::new(
                3,
                "Threshold list must include 0.5 to derive crystallization half-times.",
            )
        })?;
        if half_time <= 0.0 {
            return Err(AppError::new(
                3,
                format!("Non-positive half-time at {temperature} °C; cannot take its reciprocal."),
            ));
        }

        half_times.push(HalfTimePoint {
            temperature,
            half_time,
            reciprocal: round_dp(1.0 / half_time, 2),
        });
        tables.push(table);
    }

    report::write_report(
        &config.out_file("part1_summary.txt"),
        &report::format_part1(&config.thresholds, &tables),
    )?;

    // 2) Half-time aggregation across temperatures.
    report::write_report(
        &config.out_file("part2_summary.txt"),
        &report::format_part2(&half_times),
    )?;
    if config.plots {
        plot::reciprocal_half_time_scatter(&half_times, &config.out_file("part2.svg"))?;
    }

    // 3) Avrami fit at the reference temperature.
    let avrami = fit_avrami(config)?;

    report::write_report(
        &config.out_file("part3_summary.txt"),
        &report::format_part3(&avrami),
    )?;
    if config.plots {
        plot::avrami_plot(&avrami, &config.out_file("part3.svg"))?;
    }

    if let Some(path) = &config.export_fit {
        export::write_fit_json(path, &config.subject, &avrami)?;
    }

    Ok(RunOutput {
        tables,
        half_times,
        avrami,
    })
}

/// Fit the Avrami double-log line at the configured reference temperature.
///
/// Re-runs the single-temperature analyzer with the fixed
/// [`AVRAMI_THRESHOLDS`] set, transforms each `(threshold, time)` entry to
/// `(log10 t, log10(-ln(1 - threshold)))`, and fits an ordinary
/// least-squares line through the transformed points.
pub fn fit_avrami(config: &AnalysisConfig) -> Result<AvramiData, AppError> {
    let (_, table) = curve::analyze_temperature(config, config.reference_temp, &AVRAMI_THRESHOLDS)?;

    let mut log_time = Vec::with_capacity(table.entries.len());
    let mut log_log = Vec::with_capacity(table.entries.len());
    for entry in &table.entries {
        let x = entry.time.log10();
        let y = (-(1.0 - entry.threshold).ln()).log10();
        if !x.is_finite() || !y.is_finite() {
            return Err(AppError::new(
                4,
                format!(
                    "Non-finite Avrami transform at threshold {} (time {} s).",
                    entry.threshold, entry.time
                ),
            ));
        }
        log_time.push(x);
        log_log.push(y);
    }

    let fit = linear_fit(&log_time, &log_log)?;

    // 1000 evenly spaced x values spanning the observed range, for the
    // overlay line.
    let x0 = log_time[0];
    let x1 = log_time[log_time.len() - 1];
    let fit_line: Vec<(f64, f64)> = (0..1000)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f64 / 999.0;
            (x, fit.slope * x + fit.intercept)
        })
        .collect();

    Ok(AvramiData {
        temperature: config.reference_temp,
        log_time,
        log_log_crystallinity: log_log,
        fit: AvramiFit {
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: fit.r_squared,
        },
        fit_line,
    })
}
