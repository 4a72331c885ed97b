//! Braille-packed, double-buffered 2D rasterizer for text terminals.
//!
//! A [`Canvas`] owns a terminal sink and a pair of stencil buffers. Host
//! code rasterizes dots, lines, and convex polygons into the back buffer,
//! then calls [`Canvas::swap_buffers`] to diff against what is currently
//! displayed and write the minimal escape-sequence stream to realize the
//! new frame.

pub mod canvas;
pub mod core;
pub mod raster;
pub mod term;

pub use canvas::{Canvas, Sink};
pub use core::{CanvasError, Color, Result};
pub use raster::{render_dot, scan_line, trace_poly, StencilBuffer, Vertex};
