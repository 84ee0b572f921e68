//! Domain types shared across ingest, analysis, reporting, and plotting.

pub mod types;

pub use types::*;
