//! Shape-specific geometry generators.
//!
//! Each generator is a pure function from shape parameters to
//! `(vertices, indices, stroke_indices)`, surfaced as constructors on
//! [`PolygonParams`]. There is no shape subclassing: an ellipse, a star and
//! a line are all plain polygons with generated geometry.

use core::f32::consts::TAU;

use super::PolygonParams;

const DEFAULT_DIMENSION: f32 = 8.0;

// ── ellipse ───────────────────────────────────────────────────────────────

/// Ellipse parameters.
///
/// Low segment counts draw regular polygons (6 segments = hexagon).
#[derive(Debug, Clone)]
pub struct EllipseOptions {
    pub width: f32,
    pub height: f32,
    /// Circle radius; overrides `width` and `height` when set.
    pub radius: Option<f32>,
    /// Number of radial segments (detail).
    pub segments: u32,
    /// If true the ellipse is centered on the transform; if false its
    /// top-left corner sits on the transform.
    pub center_on_transform: bool,
    /// Draw a spoke from the center to the rim, useful for eyeballing
    /// rotation on circles.
    pub radius_pointer: bool,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            radius: None,
            segments: 32,
            center_on_transform: false,
            radius_pointer: false,
        }
    }
}

// ── rectangle ─────────────────────────────────────────────────────────────

/// Rectangle parameters.
#[derive(Debug, Clone)]
pub struct RectangleOptions {
    pub width: f32,
    pub height: f32,
    /// If true the rectangle is centered on the transform; if false its
    /// top-left corner sits on the transform.
    pub center_on_transform: bool,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            center_on_transform: true,
        }
    }
}

// ── star ──────────────────────────────────────────────────────────────────

/// Star parameters.
#[derive(Debug, Clone)]
pub struct StarOptions {
    pub width: f32,
    pub height: f32,
    /// Radius; overrides `width` and `height` when set.
    pub radius: Option<f32>,
    /// Number of spikes.
    pub segments: u32,
    /// Spike length relative to the radius.
    pub spike_length: f32,
    /// Spike length jitter: `0` is regular, `1` lets a spike grow up to
    /// twice its base length. There is no cap.
    pub spike_random: f32,
    /// Seed for the spike jitter; equal seeds give equal geometry.
    pub seed: u64,
    pub center_on_transform: bool,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            radius: None,
            segments: 32,
            spike_length: 1.0,
            spike_random: 0.0,
            seed: 0,
            center_on_transform: false,
        }
    }
}

impl PolygonParams {
    /// Elliptical fan: `segments` rim vertices plus a central vertex, filled
    /// as strip-encoded wedges, with the stroke tracing the rim.
    pub fn ellipse(opts: &EllipseOptions) -> PolygonParams {
        let mut params = PolygonParams::default();
        let segments = opts.segments.max(3);

        let (width, height) = match opts.radius {
            Some(r) => (r * 2.0, r * 2.0),
            None => (opts.width, opts.height),
        };
        let (offset_x, offset_y) = if opts.center_on_transform {
            (0.0, 0.0)
        } else {
            (width * 0.5, height * 0.5)
        };

        for i in 0..segments {
            // Each wedge runs rim → center → next rim; the shared center
            // vertex is index `segments`.
            params.indices.push(i);
            params.indices.push(segments);
            params.indices.push((i + 1) % segments);

            let angle = TAU * i as f32 / segments as f32;
            params.vertices.push([
                width * 0.5 * angle.cos() + offset_x,
                height * 0.5 * angle.sin() + offset_y,
            ]);

            params.stroke_indices.push(i);
        }

        // Central vertex.
        params.vertices.push([offset_x, offset_y]);

        // Close the rim.
        params.stroke_indices.push(0);

        if opts.radius_pointer {
            params.stroke_indices.push(segments);
        }

        params
    }

    /// Axis-aligned rectangle: a 4-vertex strip, stroke around the border.
    pub fn rectangle(opts: &RectangleOptions) -> PolygonParams {
        let mut params = PolygonParams::default();
        let (w, h) = (opts.width, opts.height);

        params.indices = vec![0, 1, 2, 3];
        params.stroke_indices = vec![0, 1, 3, 2, 0];
        params.vertices = if opts.center_on_transform {
            vec![
                [-w * 0.5, -h * 0.5],
                [w * 0.5, -h * 0.5],
                [-w * 0.5, h * 0.5],
                [w * 0.5, h * 0.5],
            ]
        } else {
            vec![[0.0, 0.0], [w, 0.0], [0.0, h], [w, h]]
        };

        params
    }

    /// Single triangle from three corner points.
    pub fn triangle(points: Option<[[f32; 2]; 3]>) -> PolygonParams {
        let mut params = PolygonParams::default();

        params.indices = vec![0, 1, 2];
        params.stroke_indices = vec![0, 1, 2, 0];
        params.vertices = match points {
            Some(p) => p.to_vec(),
            None => vec![
                [0.0, 0.0],
                [0.0, DEFAULT_DIMENSION],
                [DEFAULT_DIMENSION, 0.0],
            ],
        };

        params
    }

    /// Star: `segments` spikes fanned about a central vertex, rim vertices
    /// alternating between the base radius and the spike tips.
    pub fn star(opts: &StarOptions) -> PolygonParams {
        let mut params = PolygonParams::default();
        let segments = opts.segments.max(2);
        let rim = segments * 2;

        let (width, height) = match opts.radius {
            Some(r) => (r * 2.0, r * 2.0),
            None => (opts.width, opts.height),
        };
        let (offset_x, offset_y) = if opts.center_on_transform {
            (0.0, 0.0)
        } else {
            (width * 0.5, height * 0.5)
        };

        let mut rng = SplitMix64::new(opts.seed);

        for i in 0..rim {
            params.indices.push(i);
            params.indices.push(rim);
            params.indices.push((i + 1) % rim);

            let angle = TAU * i as f32 / rim as f32;
            let reach = if i % 2 == 0 {
                // Spike tip; jitter can stretch the spike, never shrink it.
                1.0 + opts.spike_length * (1.0 + opts.spike_random * rng.next_f32())
            } else {
                1.0
            };
            params.vertices.push([
                width * 0.5 * reach * angle.cos() + offset_x,
                height * 0.5 * reach * angle.sin() + offset_y,
            ]);

            params.stroke_indices.push(i);
        }

        params.vertices.push([offset_x, offset_y]);
        params.stroke_indices.push(0);

        params
    }

    /// Polyline: stroke-only, connecting `points` in order.
    pub fn line(points: &[[f32; 2]]) -> PolygonParams {
        let mut params = PolygonParams::default();
        params.draw_fill = false;
        params.draw_stroke = true;

        for (i, p) in points.iter().enumerate() {
            params.vertices.push(*p);
            params.stroke_indices.push(i as u32);
        }

        params
    }
}

/// Deterministic 64-bit mix generator for spike jitter.
///
/// Geometry generation must stay reproducible, so star jitter comes from a
/// caller-supplied seed instead of ambient randomness.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ellipse ───────────────────────────────────────────────────────────

    #[test]
    fn ellipse_vertex_and_index_counts() {
        let p = PolygonParams::ellipse(&EllipseOptions { segments: 16, ..Default::default() });
        assert_eq!(p.vertices.len(), 17); // rim + center
        assert_eq!(p.indices.len(), 48); // 3 per wedge
        assert_eq!(p.stroke_indices.len(), 17); // rim + closing point
    }

    #[test]
    fn ellipse_radius_overrides_dimensions() {
        let p = PolygonParams::ellipse(&EllipseOptions {
            radius: Some(10.0),
            width: 2.0,
            height: 2.0,
            segments: 8,
            center_on_transform: true,
            ..Default::default()
        });
        // First rim vertex at angle 0: (radius, 0).
        assert_eq!(p.vertices[0], [10.0, 0.0]);
    }

    #[test]
    fn ellipse_corner_mode_offsets_into_positive_space() {
        let p = PolygonParams::ellipse(&EllipseOptions {
            width: 10.0,
            height: 10.0,
            segments: 8,
            center_on_transform: false,
            ..Default::default()
        });
        for v in &p.vertices {
            assert!(v[0] >= -1e-4 && v[1] >= -1e-4, "vertex {v:?} left the box");
        }
    }

    #[test]
    fn ellipse_radius_pointer_appends_center_spoke() {
        let without = PolygonParams::ellipse(&EllipseOptions { segments: 8, ..Default::default() });
        let with = PolygonParams::ellipse(&EllipseOptions {
            segments: 8,
            radius_pointer: true,
            ..Default::default()
        });
        assert_eq!(with.stroke_indices.len(), without.stroke_indices.len() + 1);
        assert_eq!(*with.stroke_indices.last().unwrap(), 8); // center vertex
    }

    // ── rectangle ─────────────────────────────────────────────────────────

    #[test]
    fn rectangle_is_a_four_vertex_strip() {
        let p = PolygonParams::rectangle(&RectangleOptions::default());
        assert_eq!(p.vertices.len(), 4);
        assert_eq!(p.indices, vec![0, 1, 2, 3]);
        assert_eq!(p.stroke_indices, vec![0, 1, 3, 2, 0]);
    }

    #[test]
    fn rectangle_centered_spans_half_extents() {
        let p = PolygonParams::rectangle(&RectangleOptions {
            width: 20.0,
            height: 10.0,
            center_on_transform: true,
        });
        assert_eq!(p.vertices[0], [-10.0, -5.0]);
        assert_eq!(p.vertices[3], [10.0, 5.0]);
    }

    // ── triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_defaults_when_no_points_given() {
        let p = PolygonParams::triangle(None);
        assert_eq!(p.vertices, vec![[0.0, 0.0], [0.0, 8.0], [8.0, 0.0]]);
        assert_eq!(p.indices, vec![0, 1, 2]);
    }

    // ── star ──────────────────────────────────────────────────────────────

    #[test]
    fn star_rim_alternates_tip_and_base() {
        let p = PolygonParams::star(&StarOptions {
            radius: Some(10.0),
            segments: 5,
            spike_length: 1.0,
            center_on_transform: true,
            ..Default::default()
        });
        assert_eq!(p.vertices.len(), 11); // 2 * segments rim + center
        // Even rim vertices reach further out than odd ones.
        let r0 = (p.vertices[0][0].powi(2) + p.vertices[0][1].powi(2)).sqrt();
        let r1 = (p.vertices[1][0].powi(2) + p.vertices[1][1].powi(2)).sqrt();
        assert!((r0 - 20.0).abs() < 1e-3);
        assert!((r1 - 10.0).abs() < 1e-3);
    }

    #[test]
    fn star_jitter_is_seed_deterministic() {
        let opts = StarOptions {
            segments: 6,
            spike_random: 1.0,
            seed: 42,
            ..Default::default()
        };
        let a = PolygonParams::star(&opts);
        let b = PolygonParams::star(&opts);
        assert_eq!(a.vertices, b.vertices);

        let c = PolygonParams::star(&StarOptions { seed: 43, ..opts });
        assert_ne!(a.vertices, c.vertices);
    }

    // ── line ──────────────────────────────────────────────────────────────

    #[test]
    fn line_is_stroke_only() {
        let p = PolygonParams::line(&[[0.0, 0.0], [100.0, 100.0], [200.0, 0.0]]);
        assert!(!p.draw_fill);
        assert!(p.draw_stroke);
        assert!(p.indices.is_empty());
        assert_eq!(p.stroke_indices, vec![0, 1, 2]);
        assert_eq!(p.vertices.len(), 3);
    }
}
