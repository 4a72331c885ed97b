//! Stencil storage, rasterization kernels, and the frame differ.

pub mod differ;
pub mod kernel;
pub mod stencil;

pub use differ::{build_diff, SeqBuffer};
pub use kernel::{render_dot, scan_line, trace_poly, Vertex};
pub use stencil::StencilBuffer;
