//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - validates them into an `AnalysisConfig`
//! - runs the analysis pipeline
//! - prints the terminal summary

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command, CurveArgs, ReplotArgs};
use crate::domain::AnalysisConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `dta` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Curve(args) => handle_curve(args),
        Command::Replot(args) => handle_replot(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args)?;
    let run = pipeline::run_analysis(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.half_times, &run.avrami)
    );

    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    validate_thresholds(&args.thresholds)?;

    let config = AnalysisConfig {
        subject: args.subject,
        temps: vec![args.temperature],
        thresholds: args.thresholds,
        reference_temp: args.temperature,
        time_scale: args.time_scale,
        data_dir: args.data_dir,
        out_dir: args.out_dir,
        plots: !args.no_plots,
        export_fit: None,
    };

    let (series, table) =
        crate::curve::analyze_temperature(&config, args.temperature, &config.thresholds)?;

    if config.plots {
        let path = config.out_file(&format!(
            "part1_{}_degree_celsius.svg",
            args.temperature
        ));
        crate::plot::crystallinity_scatter(&series, &path)?;
    }

    println!("{}", crate::report::format_threshold_table(&table));

    Ok(())
}

fn handle_replot(args: ReplotArgs) -> Result<(), AppError> {
    let fit = crate::io::export::read_fit_json(&args.fit)?;
    crate::plot::avrami_plot(&fit.data, &args.out)?;

    println!(
        "Rendered Avrami plot for subject {} ({} °C) to '{}'.",
        fit.subject,
        fit.data.temperature,
        args.out.display()
    );

    Ok(())
}

fn analysis_config_from_args(args: &AnalyzeArgs) -> Result<AnalysisConfig, AppError> {
    if args.temps.is_empty() {
        return Err(AppError::new(2, "At least one temperature is required."));
    }
    validate_thresholds(&args.thresholds)?;

    Ok(AnalysisConfig {
        subject: args.subject.clone(),
        temps: args.temps.clone(),
        thresholds: args.thresholds.clone(),
        reference_temp: args.reference_temp,
        time_scale: args.time_scale,
        data_dir: args.data_dir.clone(),
        out_dir: args.out_dir.clone(),
        plots: !args.no_plots,
        export_fit: args.export_fit.clone(),
    })
}

fn validate_thresholds(thresholds: &[f64]) -> Result<(), AppError> {
    if thresholds.is_empty() {
        return Err(AppError::new(2, "At least one crystallinity threshold is required."));
    }
    for &t in thresholds {
        if !(0.0 < t && t < 1.0) {
            return Err(AppError::new(
                2,
                format!("Crystallinity threshold {t} is outside the open interval (0, 1)."),
            ));
        }
    }
    Ok(())
}
