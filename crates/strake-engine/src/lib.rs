//! Strake engine crate.
//!
//! 2D polygon geometry for strip-based rendering: fill meshes, miter-join
//! stroke ribbons, shape merging, and per-frame batching into a single
//! draw call. Windowing, input and GPU device ownership stay host-side.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod poly;
pub mod render;
