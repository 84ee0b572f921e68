use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Intensity rising linearly from 0 to 100 over 200 samples, unit time step
/// before scaling: crystallinity at sample k is k/199.
fn write_linear_ramp(dir: &Path, subject: &str, temperature: i32) {
    let mut contents = String::new();
    for k in 0..200 {
        let intensity = k as f64 * 100.0 / 199.0;
        contents.push_str(&format!("{k},5.0,{intensity}\n"));
    }
    fs::write(
        dir.join(format!("{subject}-{temperature}-1_DTA.txt")),
        contents,
    )
    .unwrap();
}

fn run_analyze(data: &TempDir, out: &TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args([
        "analyze",
        "S1",
        "--temps",
        "100",
        "--reference-temp",
        "100",
        "--data-dir",
        data.path().to_str().unwrap(),
        "--out-dir",
        out.path().to_str().unwrap(),
    ]);
    cmd.args(extra);
    cmd.assert()
}

#[test]
fn analyze_writes_summaries_and_plots() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_linear_ramp(data.path(), "S1", 100);

    run_analyze(&data, &out, &[]).success();

    // Part 1: threshold header row plus the characteristic times. The first
    // sample above 0.5 crystallinity is k = 100, whose rescaled time (1000s)
    // re-zeroed by the onset sample (k = 2, 20s) is 980s.
    let part1 = fs::read_to_string(out.path().join("part1_summary.txt")).unwrap();
    assert!(part1.contains("crystallinity\t   0.05\t   0.1\t   0.2"));
    assert!(part1.contains("100\t   80\t   180\t   380\t   580\t   780\t   980\t   1180\t   1380\t   1580\t   1780"));

    // Part 2: half-time and its reciprocal, rounded to 2 decimals.
    let part2 = fs::read_to_string(out.path().join("part2_summary.txt")).unwrap();
    assert!(part2.contains("temperature / degree celsius\t   100"));
    assert!(part2.contains("t_1/2 / s\t   980"));
    assert!(part2.contains("1/t_1/2 / s^-1\t   0"));

    // Part 3: transformed tables plus the fitted parameters.
    let part3 = fs::read_to_string(out.path().join("part3_summary.txt")).unwrap();
    assert!(part3.contains("log(-ln(1 - crystallinity))"));
    assert!(part3.contains("slope = "));
    assert!(part3.contains("R^2 = "));

    // Vector plots, one per temperature plus the two aggregate charts.
    assert!(out.path().join("part1_100_degree_celsius.svg").exists());
    assert!(out.path().join("part2.svg").exists());
    assert!(out.path().join("part3.svg").exists());
}

#[test]
fn analyze_no_plots_skips_svg_output() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_linear_ramp(data.path(), "S1", 100);

    run_analyze(&data, &out, &["--no-plots"]).success();

    assert!(out.path().join("part1_summary.txt").exists());
    assert!(!out.path().join("part1_100_degree_celsius.svg").exists());
    assert!(!out.path().join("part2.svg").exists());
}

#[test]
fn analyze_exports_fit_json() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_linear_ramp(data.path(), "S1", 100);

    let export = out.path().join("fit.json");
    run_analyze(&data, &out, &["--export-fit", export.to_str().unwrap()]).success();

    let v: serde_json::Value = serde_json::from_slice(&fs::read(&export).unwrap()).unwrap();
    assert_eq!(v["tool"], "dta");
    assert_eq!(v["subject"], "S1");
    assert_eq!(v["temperature"], 100);
    assert!(v["fit"]["slope"].is_number());
    assert_eq!(v["log_time"].as_array().unwrap().len(), 9);
}

#[test]
fn replot_renders_from_exported_fit() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_linear_ramp(data.path(), "S1", 100);

    let export = out.path().join("fit.json");
    run_analyze(&data, &out, &["--export-fit", export.to_str().unwrap()]).success();

    let replotted = out.path().join("avrami_replot.svg");
    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args([
        "replot",
        export.to_str().unwrap(),
        "--out",
        replotted.to_str().unwrap(),
    ]);
    cmd.assert().success();

    let svg = fs::read_to_string(&replotted).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn replot_missing_fit_json_is_an_input_error() {
    let out = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args(["replot", out.path().join("absent.json").to_str().unwrap()]);
    cmd.assert().failure().code(2);
}

#[test]
fn missing_input_file_fails_the_whole_run() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    // Only 100 exists; the sweep asks for 100 and 90.
    write_linear_ramp(data.path(), "S1", 100);

    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args([
        "analyze",
        "S1",
        "--temps",
        "100,90",
        "--reference-temp",
        "100",
        "--data-dir",
        data.path().to_str().unwrap(),
        "--out-dir",
        out.path().to_str().unwrap(),
    ]);
    cmd.assert().failure().code(2);
}

#[test]
fn curve_prints_threshold_table() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_linear_ramp(data.path(), "S1", 100);

    let mut cmd = Command::cargo_bin("dta").unwrap();
    cmd.args([
        "curve",
        "S1",
        "100",
        "--data-dir",
        data.path().to_str().unwrap(),
        "--out-dir",
        out.path().to_str().unwrap(),
        "--no-plots",
    ]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Characteristic times at 100 °C"));
    assert!(stdout.contains("980"));
}
