//! Transforms between grid pixel space and screen space.

use crate::math::Vec2;

/// A uniform scale followed by a translation. Grid space and screen space
/// both have y pointing down, so no axis is ever flipped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    scale: f32,
    offset: Vec2,
}

impl Transform {
    pub fn new(scale: f32, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Creates a `Transform` that fits the rect `(src_min, src_max)` inside
    /// `(dst_min, dst_max)`, centered, preserving its aspect ratio. The
    /// leftover space on the looser axis becomes letterboxing.
    pub fn new_letterboxed(
        src_min: Vec2,
        src_max: Vec2,
        dst_min: Vec2,
        dst_max: Vec2,
    ) -> Self {
        let src_size = src_max - src_min;
        let dst_size = dst_max - dst_min;
        // Whichever axis is tighter decides the scale
        let scale = (dst_size.x / src_size.x).min(dst_size.y / src_size.y);
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let src_middle = (src_min + src_max) * 0.5;
        let dst_middle = (dst_min + dst_max) * 0.5;
        Self::new(scale, dst_middle - src_middle * scale)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the inverse `Transform`.
    /// Panics if the scale is zero.
    pub fn inverse(&self) -> Self {
        assert!(self.scale != 0.0, "transform with zero scale is not invertible");
        Self::new(self.scale.recip(), self.offset * -self.scale.recip())
    }

    /// Applies the transformation to a point.
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    /// Scales a distance, such as a radius or line width
    pub fn map_dist(&self, d: f32) -> f32 {
        d * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_letterbox_wide_destination() {
        // 10x10 source into 200x100: height decides, scale 10, centered
        let t = Transform::new_letterboxed(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 100.0),
        );
        assert_approx_eq!(t.scale(), 10.0);
        let top_left = t.map_point(Vec2::new(0.0, 0.0));
        assert_approx_eq!(top_left.x, 50.0);
        assert_approx_eq!(top_left.y, 0.0);
        let bottom_right = t.map_point(Vec2::new(10.0, 10.0));
        assert_approx_eq!(bottom_right.x, 150.0);
        assert_approx_eq!(bottom_right.y, 100.0);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::new(2.5, Vec2::new(-3.0, 7.0));
        let p = Vec2::new(12.0, -4.0);
        let back = t.inverse().map_point(t.map_point(p));
        assert_approx_eq!(back.x, p.x, 1e-5);
        assert_approx_eq!(back.y, p.y, 1e-5);
        assert_approx_eq!(t.map_dist(2.0), 5.0);
    }

    #[test]
    fn test_degenerate_source() {
        let t = Transform::new_letterboxed(
            Vec2::ZERO,
            Vec2::ZERO,
            Vec2::ZERO,
            Vec2::new(100.0, 100.0),
        );
        assert_eq!(t.scale(), 1.0);
    }
}
