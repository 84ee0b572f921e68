//! `dta-kinetics` library crate.
//!
//! The binary (`dta`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., batch reprocessing of archived lab runs)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
