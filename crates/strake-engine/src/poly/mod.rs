//! Polygon core: shape state, parsing/validation, stroke derivation,
//! merging and shattering.
//!
//! A polygon owns two independent geometry pairs:
//! - fill: `vertices` + `indices` (triangle strip)
//! - stroke: derived ribbon mesh built from `stroke_path` (an ordered
//!   point-connection list into `vertices`) by the miter stroke builder
//!
//! Geometry is fixed at parse time. There are no incremental edits: callers
//! wanting a different shape re-supply complete geometry via [`Polygon::parse`].

mod generators;
mod params;
mod placement;
mod stroke;

pub use generators::{EllipseOptions, RectangleOptions, StarOptions};
pub use params::PolygonParams;
pub use placement::Placement;

use crate::coords::{Bounds, Transform2, Vec2};
use crate::paint::Rgb;

/// A 2D polygon shape: strip-encoded fill, derived stroke ribbon, style and
/// placement.
///
/// Construction always deep-copies the supplied arrays; two polygons never
/// alias geometry storage, even when built from identical literals.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    indices: Vec<u32>,
    stroke_path: Vec<u32>,
    stroke_vertices: Vec<Vec2>,
    stroke_indices: Vec<u32>,
    stroke_width: f32,
    bounds: Bounds,

    pub color: Rgb,
    pub stroke_color: Rgb,
    pub draw_fill: bool,
    pub draw_stroke: bool,
    pub alpha: f32,
    pub visible: bool,
    pub placement: Placement,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            stroke_path: Vec::new(),
            stroke_vertices: Vec::new(),
            stroke_indices: Vec::new(),
            stroke_width: 1.0,
            bounds: Bounds::default(),
            color: Rgb::GRAY,
            stroke_color: Rgb::BLACK,
            draw_fill: true,
            draw_stroke: true,
            alpha: 1.0,
            visible: true,
            placement: Placement::default(),
        }
    }
}

impl Polygon {
    /// Builds a polygon from `params`.
    ///
    /// Invalid params are reported through the log and leave the polygon in
    /// its default (empty, valid) state; hosts that need to distinguish can
    /// construct via `Polygon::default()` + [`parse`](Self::parse).
    pub fn new(params: PolygonParams) -> Polygon {
        let mut poly = Polygon::default();
        poly.parse(params);
        poly
    }

    /// Replaces the entire shape from `params`.
    ///
    /// Validation runs before any assignment: on failure this returns
    /// `false` and the polygon keeps its previous geometry and style
    /// wholesale. On success every array is copied in, the stroke ribbon is
    /// rebuilt, and bounds/anchor are recomputed.
    pub fn parse(&mut self, params: PolygonParams) -> bool {
        if !validate(&params) {
            return false;
        }

        self.color = params.color.clamped();
        self.stroke_color = params.stroke_color.clamped();
        self.draw_fill = params.draw_fill;
        self.draw_stroke = params.draw_stroke;
        self.stroke_width = params.stroke_width;
        self.alpha = params.alpha;
        self.visible = params.visible;
        self.placement = params.placement;

        self.vertices = params.vertices.iter().map(|&p| Vec2::from(p)).collect();

        // A strip needs at least 3 indices to address a triangle.
        self.indices = if params.indices.len() > 2 {
            params.indices
        } else {
            Vec::new()
        };

        // A polyline needs at least 2 points to have an edge.
        self.stroke_path = if params.stroke_indices.len() > 1 {
            params.stroke_indices
        } else {
            Vec::new()
        };

        self.rebuild_bounds();
        self.create_stroke();

        true
    }

    // ── geometry access ───────────────────────────────────────────────────

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Fill triangle-strip indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Authored stroke point-connection list (references into `vertices`).
    #[inline]
    pub fn stroke_path(&self) -> &[u32] {
        &self.stroke_path
    }

    /// Derived stroke ribbon vertices.
    #[inline]
    pub fn stroke_vertices(&self) -> &[Vec2] {
        &self.stroke_vertices
    }

    /// Derived stroke ribbon strip indices (into `stroke_vertices`).
    #[inline]
    pub fn stroke_indices(&self) -> &[u32] {
        &self.stroke_indices
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Number of addressable fill triangles (degenerate ones included).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len().saturating_sub(2)
    }

    // ── copy-semantics setters ────────────────────────────────────────────

    /// Replaces the vertex pool with a copy of `vertices`.
    ///
    /// Rejects non-finite coordinates, and rejects pools too small for the
    /// currently assigned fill/stroke references (indices must stay valid).
    pub fn set_vertices(&mut self, vertices: &[[f32; 2]]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            if !(v[0].is_finite() && v[1].is_finite()) {
                log::warn!("polygon: vertex {i} is not finite");
                return false;
            }
        }
        let len = vertices.len() as u32;
        if self.indices.iter().chain(&self.stroke_path).any(|&i| i >= len) {
            log::warn!("polygon: vertex pool of {len} would orphan assigned indices");
            return false;
        }

        self.vertices = vertices.iter().map(|&p| Vec2::from(p)).collect();
        self.rebuild_bounds();
        true
    }

    /// Replaces the fill strip with a copy of `indices`.
    ///
    /// Fewer than 3 entries produce an empty fill (structural no-op); any
    /// out-of-range reference is rejected.
    pub fn set_indices(&mut self, indices: &[u32]) -> bool {
        if !check_references(indices, self.vertices.len(), "index") {
            return false;
        }
        self.indices = if indices.len() > 2 {
            indices.to_vec()
        } else {
            Vec::new()
        };
        true
    }

    /// Replaces the stroke polyline with a copy of `path` and rebuilds the
    /// ribbon mesh.
    ///
    /// Fewer than 2 entries clear the stroke (structural no-op); any
    /// out-of-range reference is rejected.
    pub fn set_stroke_path(&mut self, path: &[u32]) -> bool {
        if !check_references(path, self.vertices.len(), "stroke index") {
            return false;
        }
        self.stroke_path = if path.len() > 1 {
            path.to_vec()
        } else {
            Vec::new()
        };
        self.create_stroke();
        true
    }

    /// Sets the stroke width and rebuilds the ribbon mesh.
    ///
    /// NaN widths are rejected.
    pub fn set_stroke_width(&mut self, width: f32) -> bool {
        if width.is_nan() {
            log::warn!("polygon: stroke width is not a number");
            return false;
        }
        self.stroke_width = width;
        self.create_stroke();
        true
    }

    // ── bounds and anchor ─────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// The transform pivot: the explicit override if set, otherwise the
    /// bounding-box center of the fill vertices.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.placement.anchor.unwrap_or_else(|| self.bounds.center())
    }

    /// Local-to-world matrix for the current placement.
    #[inline]
    pub fn matrix(&self) -> Transform2 {
        self.placement.matrix()
    }

    // ── merge ─────────────────────────────────────────────────────────────

    /// Appends `other`'s fill and stroke geometry onto this polygon.
    ///
    /// Each pair is spliced with degenerate bridging triangles and the
    /// winding-parity connector, and `other`'s vertices are mapped through
    /// `self.matrix()⁻¹ ∘ other.matrix()` about the respective anchors, so
    /// the merged copy lands where `other` appeared in world space while
    /// this polygon is at rest.
    ///
    /// A pair contributing fewer than 3 strip indices is skipped. `other`
    /// is untouched; use [`absorb`](Self::absorb) for the discarding form.
    pub fn combine(&mut self, other: &Polygon) {
        let dest_inverse = self.matrix().invert().unwrap_or_else(|| {
            log::warn!("polygon: singular transform during combine; treating as identity");
            Transform2::IDENTITY
        });
        let src_matrix = other.matrix();
        let dest_anchor = self.anchor();
        let src_anchor = other.anchor();

        if other.indices.len() > 2 {
            append_geometry(
                &mut self.vertices,
                &mut self.indices,
                &other.vertices,
                &other.indices,
                &src_matrix,
                &dest_inverse,
                src_anchor,
                dest_anchor,
            );
        }

        if other.stroke_indices.len() > 2 {
            append_geometry(
                &mut self.stroke_vertices,
                &mut self.stroke_indices,
                &other.stroke_vertices,
                &other.stroke_indices,
                &src_matrix,
                &dest_inverse,
                src_anchor,
                dest_anchor,
            );
        }
    }

    /// Combines `other` into this polygon, consuming it.
    #[inline]
    pub fn absorb(&mut self, other: Polygon) {
        self.combine(&other);
    }

    // ── shatter ───────────────────────────────────────────────────────────

    /// Decomposes the fill strip into independent single-triangle polygons,
    /// dropping degenerate triangles.
    ///
    /// Each output triangle carries this polygon's fill color and placement
    /// (including the resolved anchor). The polygon itself is consumed —
    /// the group replaces it.
    pub fn shatter(self) -> Vec<Polygon> {
        let mut group = Vec::new();

        for i in 0..self.indices.len().saturating_sub(2) {
            let v1 = self.vertices[self.indices[i] as usize];
            let v2 = self.vertices[self.indices[i + 1] as usize];
            let v3 = self.vertices[self.indices[i + 2] as usize];

            // Coincident corners mean zero area: a strip bridge, not a
            // visible triangle.
            if v1.distance_to(v2) == 0.0
                || v1.distance_to(v3) == 0.0
                || v2.distance_to(v3) == 0.0
            {
                continue;
            }

            group.push(Polygon::new(PolygonParams {
                vertices: vec![[v1.x, v1.y], [v2.x, v2.y], [v3.x, v3.y]],
                indices: vec![0, 1, 2],
                color: self.color,
                placement: Placement {
                    anchor: Some(self.anchor()),
                    ..self.placement
                },
                ..PolygonParams::default()
            }));
        }

        group
    }

    fn create_stroke(&mut self) {
        match stroke::build_stroke(&self.stroke_path, &self.vertices, self.stroke_width) {
            Some(mesh) => {
                self.stroke_vertices = mesh.vertices;
                self.stroke_indices = mesh.indices;
            }
            None => {
                self.stroke_vertices = Vec::new();
                self.stroke_indices = Vec::new();
            }
        }
    }

    fn rebuild_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.vertices);
    }
}

/// Appends one strip-encoded geometry pair onto another.
///
/// Bridging: one repeat of the destination's last index when it already has
/// a strip, plus a second connector (the source's first index, shifted) when
/// the destination vertex count is even — a strip resumed on an even vertex
/// offset comes back with flipped winding, and the extra degenerate triangle
/// realigns it.
#[allow(clippy::too_many_arguments)]
fn append_geometry(
    dest_vertices: &mut Vec<Vec2>,
    dest_indices: &mut Vec<u32>,
    src_vertices: &[Vec2],
    src_indices: &[u32],
    src_matrix: &Transform2,
    dest_inverse: &Transform2,
    src_anchor: Vec2,
    dest_anchor: Vec2,
) {
    let index_offset = dest_vertices.len() as u32;

    if let Some(&last) = dest_indices.last() {
        dest_indices.push(last);
    }
    if index_offset % 2 == 0 {
        dest_indices.push(src_indices[0] + index_offset);
    }

    dest_indices.extend(src_indices.iter().map(|&i| i + index_offset));

    for &v in src_vertices {
        let p = src_matrix.transform_point(v - src_anchor);
        let p = dest_inverse.transform_point(p);
        dest_vertices.push(p + dest_anchor);
    }
}

fn validate(params: &PolygonParams) -> bool {
    if params.stroke_width.is_nan() {
        log::warn!("polygon: stroke width is not a number");
        return false;
    }

    for (i, v) in params.vertices.iter().enumerate() {
        if !(v[0].is_finite() && v[1].is_finite()) {
            log::warn!("polygon: vertex {i} is not finite");
            return false;
        }
    }

    check_references(&params.indices, params.vertices.len(), "index")
        && check_references(&params.stroke_indices, params.vertices.len(), "stroke index")
}

fn check_references(indices: &[u32], vertex_count: usize, what: &str) -> bool {
    for (i, &idx) in indices.iter().enumerate() {
        if idx as usize >= vertex_count {
            log::warn!("polygon: {what} {i} ({idx}) is out of range for {vertex_count} vertices");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PolygonParams {
        PolygonParams {
            vertices: vec![[0.0, 0.0], [0.0, 8.0], [8.0, 0.0]],
            indices: vec![0, 1, 2],
            ..PolygonParams::default()
        }
    }

    fn quad() -> PolygonParams {
        PolygonParams {
            vertices: vec![[0.0, 0.0], [8.0, 0.0], [0.0, 8.0], [8.0, 8.0]],
            indices: vec![0, 1, 2, 3],
            ..PolygonParams::default()
        }
    }

    // ── independence ──────────────────────────────────────────────────────

    #[test]
    fn polygons_from_identical_params_do_not_alias() {
        let params = triangle();
        let a = Polygon::new(params.clone());
        let mut b = Polygon::new(params);

        assert!(b.set_vertices(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]));
        assert_eq!(a.vertices()[0], Vec2::zero());
        assert_eq!(b.vertices()[0], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn clone_is_deep() {
        let a = Polygon::new(triangle());
        let mut b = a.clone();
        assert!(b.set_vertices(&[[9.0, 9.0], [9.0, 10.0], [10.0, 9.0]]));
        assert_eq!(a.vertices()[0], Vec2::zero());
    }

    // ── parse and validation ──────────────────────────────────────────────

    #[test]
    fn parse_rejects_nan_stroke_width_and_keeps_prior_state() {
        let mut poly = Polygon::new(triangle());
        let ok = poly.parse(PolygonParams {
            stroke_width: f32::NAN,
            ..quad()
        });
        assert!(!ok);
        // Prior geometry survives untouched.
        assert_eq!(poly.vertices().len(), 3);
        assert_eq!(poly.indices(), &[0, 1, 2]);
    }

    #[test]
    fn parse_rejects_out_of_range_index() {
        let mut poly = Polygon::default();
        let ok = poly.parse(PolygonParams {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            indices: vec![0, 1, 2],
            ..PolygonParams::default()
        });
        assert!(!ok);
        assert!(poly.indices().is_empty());
    }

    #[test]
    fn parse_rejects_out_of_range_stroke_index() {
        let mut poly = Polygon::default();
        let ok = poly.parse(PolygonParams {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            stroke_indices: vec![0, 5],
            ..PolygonParams::default()
        });
        assert!(!ok);
    }

    #[test]
    fn parse_rejects_non_finite_vertex() {
        let mut poly = Polygon::default();
        let ok = poly.parse(PolygonParams {
            vertices: vec![[0.0, f32::INFINITY]],
            ..PolygonParams::default()
        });
        assert!(!ok);
        assert!(poly.vertices().is_empty());
    }

    #[test]
    fn short_index_list_renders_no_fill() {
        let poly = Polygon::new(PolygonParams {
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            indices: vec![0, 1],
            ..PolygonParams::default()
        });
        assert!(poly.indices().is_empty());
        assert_eq!(poly.triangle_count(), 0);
    }

    #[test]
    fn short_stroke_path_builds_no_ribbon() {
        let poly = Polygon::new(PolygonParams {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            stroke_indices: vec![0],
            ..PolygonParams::default()
        });
        assert!(poly.stroke_vertices().is_empty());
        assert!(poly.stroke_indices().is_empty());
    }

    #[test]
    fn strip_addresses_n_minus_2_triangles() {
        let poly = Polygon::new(quad());
        assert_eq!(poly.triangle_count(), 2);
    }

    // ── stroke derivation ─────────────────────────────────────────────────

    #[test]
    fn parse_builds_stroke_ribbon() {
        let poly = Polygon::new(PolygonParams {
            stroke_indices: vec![0, 1, 2, 0],
            ..triangle()
        });
        // 4 path points -> 8 ribbon vertices, 16 strip indices.
        assert_eq!(poly.stroke_vertices().len(), 8);
        assert_eq!(poly.stroke_indices().len(), 16);
    }

    #[test]
    fn set_stroke_width_rebuilds_ribbon() {
        let mut poly = Polygon::new(PolygonParams {
            vertices: vec![[0.0, 0.0], [100.0, 0.0]],
            stroke_indices: vec![0, 1],
            stroke_width: 2.0,
            ..PolygonParams::default()
        });
        let thin = poly.stroke_vertices()[0];
        assert!(poly.set_stroke_width(10.0));
        let thick = poly.stroke_vertices()[0];
        assert!((thin.y.abs() - 1.0).abs() < 1e-4);
        assert!((thick.y.abs() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn set_stroke_path_rebuilds_and_clears() {
        let mut poly = Polygon::new(triangle());
        assert!(poly.set_stroke_path(&[0, 1, 2]));
        assert_eq!(poly.stroke_vertices().len(), 6);

        // A degenerate path clears the ribbon instead of leaving it stale.
        assert!(poly.set_stroke_path(&[0]));
        assert!(poly.stroke_vertices().is_empty());
    }

    #[test]
    fn set_stroke_width_rejects_nan() {
        let mut poly = Polygon::new(triangle());
        assert!(!poly.set_stroke_width(f32::NAN));
        assert_eq!(poly.stroke_width(), 1.0);
    }

    // ── setters ───────────────────────────────────────────────────────────

    #[test]
    fn set_indices_validates_range() {
        let mut poly = Polygon::new(triangle());
        assert!(!poly.set_indices(&[0, 1, 7]));
        assert_eq!(poly.indices(), &[0, 1, 2]);
    }

    #[test]
    fn set_vertices_rejects_pool_that_orphans_indices() {
        let mut poly = Polygon::new(triangle());
        assert!(!poly.set_vertices(&[[0.0, 0.0]]));
        assert_eq!(poly.vertices().len(), 3);
    }

    // ── anchor and bounds ─────────────────────────────────────────────────

    #[test]
    fn default_anchor_is_bounds_center() {
        let poly = Polygon::new(quad());
        assert_eq!(poly.anchor(), Vec2::new(4.0, 4.0));
        assert_eq!(poly.width(), 8.0);
        assert_eq!(poly.height(), 8.0);
    }

    #[test]
    fn anchor_override_wins() {
        let poly = Polygon::new(PolygonParams {
            placement: Placement {
                anchor: Some(Vec2::new(1.0, 2.0)),
                ..Placement::default()
            },
            ..quad()
        });
        assert_eq!(poly.anchor(), Vec2::new(1.0, 2.0));
    }

    // ── combine ───────────────────────────────────────────────────────────

    #[test]
    fn combine_bridges_by_vertex_parity() {
        // 3 vertices (odd) -> one connector.
        let mut dest = Polygon::new(triangle());
        dest.combine(&Polygon::new(triangle()));
        assert_eq!(dest.indices().len(), 3 + 1 + 3);
        assert_eq!(dest.vertices().len(), 6);
        assert_eq!(dest.indices(), &[0, 1, 2, 2, 3, 4, 5]);

        // 6 vertices (even) -> two connectors.
        dest.combine(&Polygon::new(triangle()));
        assert_eq!(dest.indices().len(), 7 + 2 + 3);
        assert_eq!(dest.indices()[7..], [5, 6, 6, 7, 8]);
    }

    #[test]
    fn combine_transforms_source_into_destination_space() {
        let mut dest = Polygon::new(triangle());
        let mut src = Polygon::new(triangle());
        src.placement.x = 100.0;
        dest.combine(&src);

        // Destination is at rest, so the source lands offset by its own
        // translation (anchors are identical and cancel).
        let first_appended = dest.vertices()[3];
        assert!((first_appended.x - 100.0).abs() < 1e-3);
        assert!(first_appended.y.abs() < 1e-3);
    }

    #[test]
    fn combine_appends_stroke_pair_independently() {
        let params = PolygonParams {
            stroke_indices: vec![0, 1, 2, 0],
            ..triangle()
        };
        let mut dest = Polygon::new(params.clone());
        let src = Polygon::new(params);

        let fill_before = dest.indices().len();
        let stroke_before = dest.stroke_indices().len(); // 16, 8 vertices (even)
        dest.combine(&src);

        assert_eq!(dest.indices().len(), fill_before + 1 + 3);
        // Even stroke vertex count -> two connectors.
        assert_eq!(dest.stroke_indices().len(), stroke_before + 2 + 16);
        assert_eq!(dest.stroke_vertices().len(), 16);
    }

    #[test]
    fn combine_into_empty_copies_geometry() {
        let mut dest = Polygon::default();
        dest.combine(&Polygon::new(triangle()));
        assert_eq!(dest.vertices().len(), 3);
        // Offset 0 is even: the parity connector fires even without a
        // pre-existing strip, duplicating the leading index.
        assert_eq!(dest.indices(), &[0, 0, 1, 2]);
    }

    #[test]
    fn absorb_consumes_source() {
        let mut dest = Polygon::new(triangle());
        dest.absorb(Polygon::new(triangle()));
        assert_eq!(dest.vertices().len(), 6);
    }

    #[test]
    fn combine_skips_fill_short_of_a_triangle() {
        let mut dest = Polygon::new(triangle());
        let src = Polygon::new(PolygonParams {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            indices: vec![0, 1],
            ..PolygonParams::default()
        });
        dest.combine(&src);
        assert_eq!(dest.indices().len(), 3);
        assert_eq!(dest.vertices().len(), 3);
    }

    // ── shatter ───────────────────────────────────────────────────────────

    #[test]
    fn shatter_splits_strip_into_triangles() {
        let group = Polygon::new(quad()).shatter();
        assert_eq!(group.len(), 2);
        for tri in &group {
            assert_eq!(tri.vertices().len(), 3);
            assert_eq!(tri.indices(), &[0, 1, 2]);
        }
    }

    #[test]
    fn shatter_drops_degenerate_triangles() {
        // Strip [0,1,2,2,3] has 3 addressable triangles; the middle two are
        // degenerate bridges.
        let poly = Polygon::new(PolygonParams {
            vertices: vec![[0.0, 0.0], [8.0, 0.0], [0.0, 8.0], [8.0, 8.0]],
            indices: vec![0, 1, 2, 2, 3],
            ..PolygonParams::default()
        });
        let group = poly.shatter();
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn shatter_carries_style_and_placement() {
        let mut poly = Polygon::new(quad());
        poly.color = Rgb::new(0.9, 0.3, 0.7);
        poly.placement.x = 50.0;
        poly.placement.rotation = 1.0;
        let anchor = poly.anchor();

        let group = poly.shatter();
        for tri in &group {
            assert_eq!(tri.color, Rgb::new(0.9, 0.3, 0.7));
            assert_eq!(tri.placement.x, 50.0);
            assert_eq!(tri.placement.rotation, 1.0);
            assert_eq!(tri.anchor(), anchor);
        }
    }

    #[test]
    fn combine_then_shatter_preserves_triangle_count() {
        // Even destination vertex count: both connectors are degenerate, so
        // the splice adds no visible area and the count round-trips.
        let a = Polygon::new(quad());
        let mut b = Polygon::new(triangle());
        b.placement.x = 30.0;

        let separate = Polygon::new(quad()).shatter().len()
            + Polygon::new(triangle()).shatter().len();

        let mut combined = a;
        combined.combine(&b);
        assert_eq!(combined.shatter().len(), separate);
    }
}
