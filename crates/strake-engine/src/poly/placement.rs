use crate::coords::{Transform2, Vec2};

/// Local placement of a shape: translation, rotation and per-axis scale,
/// applied about the anchor point.
///
/// This is the slice of the host's transform system the geometry core
/// consumes. Parent/child composition happens host-side; the core only ever
/// asks for the resulting affine matrix and the anchor offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Anchor override in local coordinates.
    ///
    /// `None` means "derive from geometry": the bounding-box center of the
    /// fill vertices, resolved by the owning shape.
    pub anchor: Option<Vec2>,
}

impl Placement {
    /// Local-to-world affine matrix for this placement.
    #[inline]
    pub fn matrix(&self) -> Transform2 {
        Transform2::from_srt(
            Vec2::new(self.x, self.y),
            self.rotation,
            Vec2::new(self.scale_x, self.scale_y),
        )
    }

    /// Sets a uniform scale on both axes.
    #[inline]
    pub fn set_scale(&mut self, scale: f32) {
        self.scale_x = scale;
        self.scale_y = scale;
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            anchor: None,
        }
    }
}
