pub mod config;
pub mod english;
pub mod rank;
pub mod scorer;
pub mod shift;
// cmd and reports are binary modules (in main.rs), not part of the library
// surface; everything they need is re-exported from the modules above.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid shift {0}: must be in the range 0..26")]
    InvalidShift(u8),

    #[error("Invalid top-k {0}: must be at least 1")]
    InvalidTopK(usize),
}

pub type SbResult<T> = Result<T, ShiftBreakError>;
