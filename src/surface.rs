//! The drawing surface that hexagons and grids render onto. The shape of this
//! trait follows a 2D canvas context: build a path, then stroke and/or fill
//! it with the current style.

use crate::{color::Color, math::Vec2};

pub trait Surface {
    /// Discard the current path and start a new one
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Connect the last point of the current path back to its first point
    fn close_path(&mut self);
    /// Outline the current path with the current stroke color and width
    fn stroke(&mut self);
    /// Fill the current path with the current fill color
    fn fill(&mut self);

    fn line_width(&self) -> f32;
    fn set_line_width(&mut self, width: f32);
    fn stroke_color(&self) -> Color;
    fn set_stroke_color(&mut self, color: Color);
    fn fill_color(&self) -> Color;
    fn set_fill_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle whose top-left corner is `origin`
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    /// Outline an axis-aligned rectangle whose top-left corner is `origin`
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2);
    /// Add a circular arc to the current path, angles in radians
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);

    /// Draw `text` with its baseline starting at `origin`
    fn fill_text(&mut self, text: &str, origin: Vec2);
    /// Width in surface units that `text` occupies when drawn
    fn measure_text(&self, text: &str) -> f32;
}
