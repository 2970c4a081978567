//! Rendering subsystem.
//!
//! Two paths out of the polygon core:
//! - immediate: per-shape triangle-fan drawing through the [`Canvas2D`]
//!   trait (the host owns the rasterizer)
//! - batched: every visible shape's fill/stroke is accumulated into a
//!   [`FrameBatch`] and flushed by [`StripRenderer`] as one indexed
//!   triangle-strip draw call per frame
//!
//! Convention (shared with the shader): CPU geometry is in logical pixels,
//! top-left origin, +Y down; the vertex shader converts to NDC using a
//! viewport uniform. The host owns the wgpu device, surface and encoder and
//! lends them per frame via [`RenderCtx`] / [`RenderTarget`].

mod batch;
mod ctx;
mod immediate;
mod strip;

pub use batch::{BatchConfig, FrameBatch, VERTEX_STRIDE};
pub use ctx::{RenderCtx, RenderTarget};
pub use immediate::{Canvas2D, render_immediate};
pub use strip::StripRenderer;
