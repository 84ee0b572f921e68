//! Formatting of the three summary tables and the terminal run summary.
//!
//! The part1/part2/part3 layouts follow the lab's hand-in convention:
//! banner line, tab-separated value rows, values pre-rounded by the
//! analysis (2 decimals for times, 3 for Avrami transforms).

use crate::domain::{AnalysisConfig, AvramiData, HalfTimePoint, ThresholdTable};
use crate::math::round_dp;

/// Part 1: one header row of thresholds, one row of times per temperature.
pub fn format_part1(thresholds: &[f64], tables: &[ThresholdTable]) -> String {
    let mut out = String::new();
    out.push_str("------------------part1------------------\n");

    out.push_str("crystallinity");
    for threshold in thresholds {
        out.push_str(&format!("\t   {threshold}"));
    }
    out.push_str("\ntime / s\ntemperature\n");

    for table in tables {
        out.push_str(&format!("{}", table.temperature));
        for entry in &table.entries {
            out.push_str(&format!("\t   {}", entry.time));
        }
        out.push('\n');
    }

    out
}

/// Part 2: temperature row, half-time row, reciprocal half-time row.
pub fn format_part2(half_times: &[HalfTimePoint]) -> String {
    let mut out = String::new();
    out.push_str("------------------part2------------------\n");

    out.push_str("temperature / degree celsius");
    for h in half_times {
        out.push_str(&format!("\t   {}", h.temperature));
    }

    out.push_str("\nt_1/2 / s");
    for h in half_times {
        out.push_str(&format!("\t   {}", h.half_time));
    }

    out.push_str("\n1/t_1/2 / s^-1");
    for h in half_times {
        out.push_str(&format!("\t   {}", h.reciprocal));
    }
    out.push('\n');

    out
}

/// Part 3: transformed value tables plus the fitted line parameters.
pub fn format_part3(data: &AvramiData) -> String {
    let mut out = String::new();
    out.push_str("------------------part3------------------\n");

    out.push_str("log(-ln(1 - crystallinity))");
    for &y in &data.log_log_crystallinity {
        out.push_str(&format!("\t   {}", round_dp(y, 3)));
    }

    out.push_str("\nlog(t)");
    for &x in &data.log_time {
        out.push_str(&format!("\t   {}", round_dp(x, 3)));
    }

    out.push_str("\n\nlinear fitting:\n");
    out.push_str(&format!("slope = {}\n", round_dp(data.fit.slope, 2)));
    out.push_str(&format!("intercept = {}\n", round_dp(data.fit.intercept, 2)));
    out.push_str(&format!("R^2 = {}\n", round_dp(data.fit.r_squared, 5)));

    out
}

/// Terminal summary printed after a full `dta analyze` run.
pub fn format_run_summary(
    config: &AnalysisConfig,
    half_times: &[HalfTimePoint],
    avrami: &AvramiData,
) -> String {
    let mut out = String::new();

    out.push_str("=== dta - DTA crystallization kinetics ===\n");
    out.push_str(&format!("Subject: {}\n", config.subject));
    out.push_str(&format!(
        "Temperatures: {}\n",
        config
            .temps
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    out.push_str("\nHalf-times:\n");
    for h in half_times {
        out.push_str(&format!(
            "- {} °C: t_1/2 = {} s (1/t_1/2 = {})\n",
            h.temperature, h.half_time, h.reciprocal
        ));
    }

    out.push_str(&format!("\nAvrami fit at {} °C:\n", avrami.temperature));
    out.push_str(&format!("- n (slope) = {}\n", round_dp(avrami.fit.slope, 2)));
    out.push_str(&format!("- intercept = {}\n", round_dp(avrami.fit.intercept, 2)));
    out.push_str(&format!("- R^2       = {}\n", round_dp(avrami.fit.r_squared, 5)));

    out.push_str(&format!("\nOutputs written to '{}'.\n", config.out_dir.display()));

    out
}

/// Threshold table for `dta curve` stdout.
pub fn format_threshold_table(table: &ThresholdTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Characteristic times at {} °C:\n",
        table.temperature
    ));
    out.push_str(&format!("{:<16} {:>12}\n", "crystallinity", "time / s"));
    for entry in &table.entries {
        out.push_str(&format!("{:<16} {:>12}\n", entry.threshold, entry.time));
    }
    out
}
