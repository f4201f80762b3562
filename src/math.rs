//! Plain 2D vector math used by the hexagon geometry. Everything here is a
//! pure function of its inputs; non-finite inputs propagate per IEEE-754.

use derive_more::{Add, Display, Mul, Sub};
use std::f32::consts::PI;

/// A point or vector in surface space (pixels, y pointing down). Values are
/// immutable, every operation returns a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, Sub, Mul, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

/// Componentwise sum `a + b`.
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Scalar multiple `k * v`.
pub fn scale(k: f32, v: Vec2) -> Vec2 {
    v * k
}

pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// The unit vector at angle `phi` (radians) from the positive x axis.
pub fn from_angle(phi: f32) -> Vec2 {
    Vec2::new(phi.cos(), phi.sin())
}

/// Convert degrees to radians. The input is first reduced modulo 360 with
/// a truncating remainder, so the sign of `degrees` is kept.
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * PI / 180.0
}

/// The point at `angle` (radians) on the circle of `radius` around `center`.
pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    add(center, scale(radius, from_angle(angle)))
}
