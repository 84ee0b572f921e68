//! Command-line parsing for the DTA kinetics analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the analysis/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_TEMPS, DEFAULT_THRESHOLDS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dta", version, about = "DTA crystallization kinetics analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full analysis: per-temperature curves, half-time table, Avrami fit.
    Analyze(AnalyzeArgs),
    /// Analyze a single temperature and print its characteristic-time table.
    ///
    /// Uses the same analyzer as `dta analyze`, but writes no summary files;
    /// useful for checking one run before a full sweep.
    Curve(CurveArgs),
    /// Re-render the Avrami plot from a previously exported fit JSON.
    ///
    /// Works from `dta analyze --export-fit` output without re-reading the
    /// raw DTA files.
    Replot(ReplotArgs),
}

/// Options for the full analysis.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Subject identifier used in input file names (`<subject>-<temp>-1_DTA.txt`).
    pub subject: String,

    /// Temperatures (°C) to analyze, in report order.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TEMPS)]
    pub temps: Vec<i32>,

    /// Crystallinity thresholds for the characteristic-time table (must include 0.5).
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_THRESHOLDS)]
    pub thresholds: Vec<f64>,

    /// Reference temperature (°C) for the Avrami fit.
    ///
    /// Independent of --temps, matching the lab procedure: the double-log fit
    /// is always done at one fixed temperature.
    #[arg(long, default_value_t = 120)]
    pub reference_temp: i32,

    /// Multiplier converting instrument time units to seconds.
    #[arg(long, default_value_t = 10.0)]
    pub time_scale: f64,

    /// Directory containing the raw DTA files.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory for summary tables and plots.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip SVG plot rendering.
    #[arg(long)]
    pub no_plots: bool,

    /// Export the Avrami fit (parameters + transformed tables) to JSON.
    #[arg(long = "export-fit")]
    pub export_fit: Option<PathBuf>,
}

/// Options for a single-temperature run.
#[derive(Debug, Parser, Clone)]
pub struct CurveArgs {
    /// Subject identifier used in input file names.
    pub subject: String,

    /// Temperature (°C) to analyze.
    pub temperature: i32,

    /// Crystallinity thresholds for the characteristic-time table.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_THRESHOLDS)]
    pub thresholds: Vec<f64>,

    /// Multiplier converting instrument time units to seconds.
    #[arg(long, default_value_t = 10.0)]
    pub time_scale: f64,

    /// Directory containing the raw DTA files.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory for the crystallinity plot.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip SVG plot rendering.
    #[arg(long)]
    pub no_plots: bool,
}

/// Options for replotting an exported fit.
#[derive(Debug, Parser, Clone)]
pub struct ReplotArgs {
    /// Fit JSON written by `dta analyze --export-fit`.
    pub fit: PathBuf,

    /// Output SVG path.
    #[arg(long, default_value = "part3.svg")]
    pub out: PathBuf,
}
