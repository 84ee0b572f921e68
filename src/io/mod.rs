//! File input/output: DTA ingest and fit export.

pub mod export;
pub mod ingest;
