//! Terminal-facing concerns kept separate from rasterization: raw mode,
//! control sequences, and geometry queries.

pub mod raw;
