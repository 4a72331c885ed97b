//! Aggregates small, dependency-free building blocks shared by the raster
//! and canvas layers.

pub mod color;
pub mod constants;
pub mod error;

pub use color::Color;
pub use constants::{CELL_XDOTS, CELL_YDOTS, internal_to_braille};
pub use error::{CanvasError, Result};
