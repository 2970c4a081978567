use crate::coords::{Transform2, Vec2};
use crate::paint::Rgb;
use crate::poly::Polygon;

/// Canvas-style drawing surface for the immediate path.
///
/// The rasterizer is a host collaborator; this trait is the seam. Calls
/// arrive bracketed by `save`/`restore`, with the shape's transform and
/// global alpha applied once up front, then one `begin_path` → `move_to`/
/// `line_to`* → `fill` sequence per geometry pair.
pub trait Canvas2D {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_global_alpha(&mut self, alpha: f32);
    /// Applies the shape's local-to-world transform to subsequent path
    /// coordinates.
    fn apply_transform(&mut self, transform: Transform2);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Closes the current path and fills it with `color`.
    fn fill(&mut self, color: Rgb);
}

/// Draws one polygon immediately: fill strip first, then stroke ribbon,
/// each as a run of triangle outlines filled in one path.
///
/// Shapes that are invisible or fully transparent are skipped.
pub fn render_immediate(poly: &Polygon, canvas: &mut dyn Canvas2D) {
    if !poly.visible || poly.alpha <= 0.0 {
        return;
    }

    canvas.save();
    canvas.set_global_alpha(poly.alpha.min(1.0));
    canvas.apply_transform(poly.matrix());

    let anchor = poly.anchor();

    if poly.draw_fill {
        trace_strip(canvas, poly.vertices(), poly.indices(), anchor, poly.color);
    }
    if poly.draw_stroke {
        trace_strip(
            canvas,
            poly.stroke_vertices(),
            poly.stroke_indices(),
            anchor,
            poly.stroke_color,
        );
    }

    canvas.restore();
}

/// Walks a triangle strip, emitting each addressable triangle as a
/// move/line/line run; degenerate triangles collapse to zero-area subpaths
/// and stay invisible.
fn trace_strip(
    canvas: &mut dyn Canvas2D,
    vertices: &[Vec2],
    indices: &[u32],
    anchor: Vec2,
    color: Rgb,
) {
    if indices.len() < 3 {
        return;
    }

    canvas.begin_path();

    let mut p1 = vertices[indices[1] as usize] - anchor;
    let mut p2 = vertices[indices[0] as usize] - anchor;

    for &ix in &indices[2..] {
        let p0 = vertices[ix as usize] - anchor;

        canvas.move_to(p0);
        canvas.line_to(p1);
        canvas.line_to(p2);

        // Slide the two-vertex window along the strip.
        p2 = p1;
        p1 = p0;
    }

    canvas.fill(color);
}
