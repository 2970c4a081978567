use super::Vec2;

/// Axis-aligned bounding box of a vertex set.
///
/// Used to derive a shape's default anchor point (box center) and its
/// logical width/height. Empty vertex sets produce a zero box at the origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Bounds::default();
        };

        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Bounds { min, max }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.min.x + 0.5 * self.width(),
            self.min.y + 0.5 * self.height(),
        )
    }
}
