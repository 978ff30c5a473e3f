use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
///
/// Used for atlas regions and for the world-space footprints the coverage
/// checks reason about.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    /// Whether `self` lies entirely inside `outer` (touching edges allowed).
    #[inline]
    pub fn within(self, outer: Rect) -> bool {
        self.origin.x >= outer.origin.x
            && self.origin.y >= outer.origin.y
            && self.max().x <= outer.max().x
            && self.max().y <= outer.max().y
    }
}
