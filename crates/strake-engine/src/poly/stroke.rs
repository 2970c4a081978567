//! Miter-join stroke construction.
//!
//! Turns an ordered polyline into a closed ribbon mesh: each joint
//! contributes two vertices (the miter points either side of the path) and
//! four strip indices, so the whole polyline becomes one continuous
//! triangle strip. End caps are flat: the first and last joints are mitered
//! against their own edge.

use core::f32::consts::{PI, TAU};

use crate::coords::Vec2;

/// Derived ribbon mesh for one polyline.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct StrokeMesh {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Builds the stroke ribbon for `path` (ordered references into `vertices`).
///
/// Returns `None` for a polyline of fewer than 2 points — a structural
/// no-op, not an error. For `k` points the mesh has exactly `2k` vertices
/// and `4k` indices.
///
/// Callers must have validated `path` against `vertices` beforehand; the
/// builder indexes directly.
pub(super) fn build_stroke(path: &[u32], vertices: &[Vec2], width: f32) -> Option<StrokeMesh> {
    if path.len() < 2 {
        return None;
    }

    let point = |i: usize| vertices[path[i] as usize];

    let mut mesh = StrokeMesh {
        vertices: Vec::with_capacity(path.len() * 2),
        indices: Vec::with_capacity(path.len() * 4),
    };
    let mut offset = 0u32;

    // Head cap: miter the first edge against itself.
    let first = [point(0), point(1)];
    push_joint(&mut mesh, &mut offset, build_miter(first, first, width));

    // Interior joints.
    for i in 1..path.len() - 1 {
        let prev = [point(i - 1), point(i)];
        let next = [point(i), point(i + 1)];
        push_joint(&mut mesh, &mut offset, build_miter(prev, next, width));
    }

    // Tail cap: extend the last segment past its endpoint to get a cap
    // direction. The extension point never enters the mesh.
    let end = path.len() - 1;
    let last = point(end);
    let extension = last + (last - point(end - 1));
    push_joint(
        &mut mesh,
        &mut offset,
        build_miter([last, extension], [last, extension], width),
    );

    Some(mesh)
}

fn push_joint(mesh: &mut StrokeMesh, offset: &mut u32, joint: [Vec2; 2]) {
    // Each joint is a two-vertex strip slice: [0, 1, 0, 1] plus the running
    // offset. The repeats keep adjacent joints stitched into one strip.
    mesh.indices
        .extend_from_slice(&[*offset, *offset + 1, *offset, *offset + 1]);
    mesh.vertices.extend_from_slice(&joint);
    *offset += 2;
}

/// Computes the two miter points for the joint where `line1` meets `line2`.
///
/// `line2[0]` is the joint position. Passing the same edge for both lines
/// produces a flat perpendicular cap.
fn build_miter(line1: [Vec2; 2], line2: [Vec2; 2], width: f32) -> [Vec2; 2] {
    let joint = line2[0];

    let line1_len = line1[0].distance_to(line1[1]);
    let line2_len = line2[0].distance_to(line2[1]);
    let line_min_len = line1_len.min(line2_len);

    let mut line1_angle =
        normalize_angle((line1[1].y - line1[0].y).atan2(line1[1].x - line1[0].x));
    let mut line2_angle =
        normalize_angle((line2[1].y - line2[0].y).atan2(line2[1].x - line2[0].x));

    // Half the angle between the edges, wrapped into (−π, π] before halving.
    let mut angle_diff_half = line2_angle - line1_angle;
    if angle_diff_half > PI {
        angle_diff_half = TAU - angle_diff_half;
    } else if angle_diff_half < -PI {
        angle_diff_half = -TAU - angle_diff_half;
    }
    angle_diff_half *= 0.5;

    // Bisector: lift the smaller angle by a full turn when the two edge
    // angles straddle the 0/2π seam, otherwise the average lands on the
    // wrong side of the joint.
    if (line1_angle - line2_angle).abs() > PI {
        if line1_angle < line2_angle {
            line1_angle += TAU;
        } else {
            line2_angle += TAU;
        }
    }
    let angle = normalize_angle((line1_angle + line2_angle) * 0.5);

    let dx = angle.cos();
    let dy = -angle.sin();

    // Distance from the joint to each miter point. Clamped to the shorter
    // adjacent segment so a near-reversal cannot spike past the geometry.
    let mut inner_dist = width / (2.0 * angle_diff_half.cos());
    if inner_dist > line_min_len {
        inner_dist = line_min_len;
    }

    [
        Vec2::new(joint.x + dy * inner_dist, joint.y + dx * inner_dist),
        Vec2::new(joint.x - dy * inner_dist, joint.y - dx * inner_dist),
    ]
}

/// Wraps an angle into `[0, 2π)`.
#[inline]
fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}
