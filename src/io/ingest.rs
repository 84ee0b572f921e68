//! Raw DTA file ingest.
//!
//! One file per `(subject, temperature)` pair, named
//! `<subject>-<temperature>-1_DTA.txt`: comma-delimited text with exactly
//! three numeric columns (time, heating rate, intensity) and no header.
//!
//! Design goals:
//! - **Strict schema**: every row must yield three finite numbers; a
//!   malformed row aborts the run with its line number (exit code 2)
//! - **Deterministic behavior**: rows are kept in file order, untouched
//! - **Separation of concerns**: no normalization or kinetics here

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::RawSample;
use crate::error::AppError;

/// Load the raw `(time, rate, intensity)` triples from one DTA file.
pub fn load_raw_samples(path: &Path) -> Result<Vec<RawSample>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open DTA file '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut samples = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // DTA files have no header, so records() line numbers are 1-based.
        let line = idx + 1;

        let record = result.map_err(|e| {
            AppError::new(
                2,
                format!("Parse error in '{}' line {line}: {e}", path.display()),
            )
        })?;

        samples.push(parse_row(&record, line, path)?);
    }

    if samples.is_empty() {
        return Err(AppError::new(
            3,
            format!("DTA file '{}' contains no samples.", path.display()),
        ));
    }

    Ok(samples)
}

fn parse_row(record: &StringRecord, line: usize, path: &Path) -> Result<RawSample, AppError> {
    if record.len() != 3 {
        return Err(AppError::new(
            2,
            format!(
                "Expected 3 columns (time, rate, intensity) in '{}' line {line}, found {}.",
                path.display(),
                record.len()
            ),
        ));
    }

    let time = parse_field(record, 0, "time", line, path)?;
    let rate = parse_field(record, 1, "rate", line, path)?;
    let intensity = parse_field(record, 2, "intensity", line, path)?;

    Ok(RawSample {
        time,
        rate,
        intensity,
    })
}

fn parse_field(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: usize,
    path: &Path,
) -> Result<f64, AppError> {
    let raw = record.get(index).unwrap_or("");
    let value: f64 = raw.parse().map_err(|_| {
        AppError::new(
            2,
            format!(
                "Invalid `{name}` value '{raw}' in '{}' line {line}.",
                path.display()
            ),
        )
    })?;
    if !value.is_finite() {
        return Err(AppError::new(
            2,
            format!(
                "Non-finite `{name}` value in '{}' line {line}.",
                path.display()
            ),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_three_column_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "S1-100-1_DTA.txt", "0,5,1.25\n1, 5, 2.5\n2,5,4.0\n");

        let samples = load_raw_samples(&path).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], RawSample { time: 0.0, rate: 5.0, intensity: 1.25 });
        assert_eq!(samples[1].intensity, 2.5);
        assert_eq!(samples[2].time, 2.0);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raw_samples(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_row_reports_its_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.txt", "0,5,1.0\n1,5,not_a_number\n");

        let err = load_raw_samples(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn empty_file_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.txt", "");

        let err = load_raw_samples(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
