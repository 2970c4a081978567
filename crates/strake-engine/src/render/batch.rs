use crate::coords::{Transform2, Vec2};
use crate::paint::Rgb;
use crate::poly::Polygon;

/// Floats per batched vertex: `x, y, r, g, b, a`.
pub const VERTEX_STRIDE: usize = 6;

/// Batch sizing hints.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Expected triangle ceiling per frame; used to pre-allocate the CPU
    /// buffers. Exceeding it grows the buffers, never truncates.
    pub max_triangles: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_triangles: 1000 }
    }
}

/// Per-frame batch context: one shared vertex stream and one shared strip
/// index stream for all shapes submitted this frame.
///
/// The host resets it at frame start ([`begin_frame`](Self::begin_frame)),
/// passes it by reference into each shape submission, then hands it to
/// [`StripRenderer`](super::StripRenderer) for the single draw call.
/// Buffers are rebuilt wholesale every frame; allocations are reused.
#[derive(Debug, Default)]
pub struct FrameBatch {
    vertex_data: Vec<f32>,
    indices: Vec<u32>,
    warned_overflow: bool,
    configured_indices: usize,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates for `config.max_triangles`.
    pub fn with_config(config: &BatchConfig) -> Self {
        // A strip triangle costs ~1 index amortized plus bridges; 3 per
        // triangle is a comfortable ceiling.
        let index_ceiling = config.max_triangles * 3;
        Self {
            vertex_data: Vec::with_capacity(index_ceiling * VERTEX_STRIDE),
            indices: Vec::with_capacity(index_ceiling),
            warned_overflow: false,
            configured_indices: index_ceiling,
        }
    }

    /// Clears both streams for a new frame. Keeps allocated capacity.
    pub fn begin_frame(&mut self) {
        self.vertex_data.clear();
        self.indices.clear();
    }

    /// Interleaved `(x, y, r, g, b, a)` stream.
    #[inline]
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    /// Shared strip index stream.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / VERTEX_STRIDE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Submits a polygon's visible geometry: fill first, then stroke, each
    /// as an independent splice into the shared strip.
    pub fn submit(&mut self, poly: &Polygon) {
        if !poly.visible || poly.alpha <= 0.0 {
            return;
        }

        let matrix = poly.matrix();
        let anchor = poly.anchor();

        if poly.draw_fill && poly.indices().len() > 2 {
            self.push_geometry(
                &matrix,
                anchor,
                poly.indices(),
                poly.vertices(),
                poly.color,
                poly.alpha,
            );
        }
        if poly.draw_stroke && poly.stroke_indices().len() > 2 {
            self.push_geometry(
                &matrix,
                anchor,
                poly.stroke_indices(),
                poly.stroke_vertices(),
                poly.stroke_color,
                poly.alpha,
            );
        }
    }

    /// Appends one geometry pair to the shared buffers.
    ///
    /// Vertices are transformed by `matrix` about `anchor` and interleaved
    /// with color and alpha. Indices are spliced with the same bridging
    /// rule as polygon merging: repeat the previous last index, plus a
    /// second connector when the pre-append vertex count is even (a strip
    /// resumed on an even offset comes back with flipped winding).
    pub fn push_geometry(
        &mut self,
        matrix: &Transform2,
        anchor: Vec2,
        indices: &[u32],
        vertices: &[Vec2],
        color: Rgb,
        alpha: f32,
    ) {
        if indices.is_empty() {
            return;
        }

        let index_offset = self.vertex_count() as u32;

        for &v in vertices {
            let p = matrix.transform_point(v - anchor);
            self.vertex_data
                .extend_from_slice(&[p.x, p.y, color.r, color.g, color.b, alpha]);
        }

        if let Some(&last) = self.indices.last() {
            self.indices.push(last);
        }
        if index_offset % 2 == 0 {
            self.indices.push(indices[0] + index_offset);
        }
        self.indices
            .extend(indices.iter().map(|&i| i + index_offset));

        if self.configured_indices != 0
            && self.indices.len() > self.configured_indices
            && !self.warned_overflow
        {
            log::debug!(
                "batch exceeded configured capacity ({} indices); growing",
                self.configured_indices
            );
            self.warned_overflow = true;
        }
    }
}
