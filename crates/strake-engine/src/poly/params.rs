use crate::paint::Rgb;

use super::Placement;

/// Construction parameters for a [`Polygon`](super::Polygon).
///
/// Every field is optional in the sense that the default produces a valid
/// (empty) shape. `vertices` is the point pool; `indices` references it as a
/// triangle strip for the fill; `stroke_indices` references it as an ordered
/// point-connection list for the stroke ribbon.
///
/// Two polygons built from one `PolygonParams` value (via `clone`) never
/// share geometry storage; parsing always copies.
#[derive(Debug, Clone)]
pub struct PolygonParams {
    /// XY coordinate pairs, the vertex pool.
    pub vertices: Vec<[f32; 2]>,
    /// Triangle-strip references into `vertices` (fill geometry).
    pub indices: Vec<u32>,
    /// Ordered point-connection references into `vertices` (stroke polyline).
    pub stroke_indices: Vec<u32>,
    pub color: Rgb,
    pub stroke_color: Rgb,
    pub draw_fill: bool,
    pub draw_stroke: bool,
    /// Stroke ribbon width in pixels; scales with the shape's scale.
    pub stroke_width: f32,
    /// Entity opacity in `[0, 1]`; `0` skips submission entirely.
    pub alpha: f32,
    pub visible: bool,
    pub placement: Placement,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            stroke_indices: Vec::new(),
            color: Rgb::GRAY,
            stroke_color: Rgb::BLACK,
            draw_fill: true,
            draw_stroke: true,
            stroke_width: 1.0,
            alpha: 1.0,
            visible: true,
            placement: Placement::default(),
        }
    }
}
