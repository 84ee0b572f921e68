//! Run-terminating errors.
//!
//! The analyzer deliberately has no recovery paths: a missing input file, a
//! threshold the data never reaches, or a degenerate regression aborts the
//! whole run with a nonzero exit code. `AppError` carries the exit code and a
//! human-readable message for the terminal.
//!
//! Exit code conventions:
//!
//! - `2` — input problems (missing DTA file, malformed row, bad arguments)
//! - `3` — data-shape problems (empty series, flat intensity, unreachable
//!   crystallinity threshold)
//! - `4` — degenerate Avrami regression
//! - `5` — output problems (report write or plot render failures)
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
