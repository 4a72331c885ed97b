//! Centralised error type used across the crate.

use std::{error::Error, fmt, io};

/// Error kinds surfaced by the core.
#[derive(Debug)]
pub enum CanvasError {
    /// Allocation failure during creation, resize, or sequence-buffer growth.
    OutOfMemory,
    /// The sink rejected a write, returned short, or a terminal attribute
    /// query/update failed.
    Io(io::Error),
    /// `trace_poly` was called with a non-convex vertex list, or
    /// `print_text` with an out-of-range cell.
    InvalidArgument(&'static str),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::Io(e) => write!(f, "{e}"),
            Self::InvalidArgument(why) => write!(f, "invalid argument: {why}"),
        }
    }
}
impl Error for CanvasError {}

impl From<io::Error> for CanvasError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, CanvasError>;
