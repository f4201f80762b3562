//! [Surface] implementation on top of an egui [Painter].

use crate::{
    color::Color,
    math::{point_on_circle, Vec2},
    surface::Surface,
    util::transforms::Transform,
};
use egui::{epaint::Shape, pos2, Align2, FontId, Painter, Pos2, Rect, Rounding, Stroke};
use std::f32::consts::TAU;

/// Segments used for a full circle; partial arcs get a proportional share
const CIRCLE_SEGMENTS: f32 = 48.0;

pub fn to_pos(v: Vec2) -> Pos2 {
    pos2(v.x, v.y)
}

pub fn from_pos(p: Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Draws through an egui painter. Coordinates given to the surface are in
/// grid space and go through `transform` on their way to the screen.
///
/// Paths hold a single subpath: `move_to` discards any points already in the
/// path.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    transform: Transform,
    path: Vec<Pos2>,
    closed: bool,
    line_width: f32,
    stroke_color: Color,
    fill_color: Color,
    font_size: f32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, transform: Transform, font_size: f32) -> Self {
        Self {
            painter,
            transform,
            path: Vec::new(),
            closed: false,
            line_width: 1.0,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            font_size,
        }
    }

    fn map(&self, p: Vec2) -> Pos2 {
        to_pos(self.transform.map_point(p))
    }

    fn stroke_style(&self) -> Stroke {
        Stroke::new(
            self.transform.map_dist(self.line_width),
            self.stroke_color,
        )
    }

    fn font(&self) -> FontId {
        FontId::proportional(self.transform.map_dist(self.font_size))
    }

    fn rect(&self, origin: Vec2, size: Vec2) -> Rect {
        Rect::from_two_pos(self.map(origin), self.map(origin + size))
    }
}

impl Surface for EguiSurface<'_> {
    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, p: Vec2) {
        let p = self.map(p);
        self.path.clear();
        self.closed = false;
        self.path.push(p);
    }

    fn line_to(&mut self, p: Vec2) {
        let p = self.map(p);
        self.path.push(p);
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let points = self.path.clone();
        let stroke = self.stroke_style();
        self.painter.add(if self.closed {
            Shape::closed_line(points, stroke)
        } else {
            Shape::line(points, stroke)
        });
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        self.painter.add(Shape::convex_polygon(
            self.path.clone(),
            self.fill_color,
            Stroke::NONE,
        ));
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.painter
            .rect_filled(self.rect(origin, size), Rounding::ZERO, self.fill_color);
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2) {
        self.painter
            .rect_stroke(self.rect(origin, size), Rounding::ZERO, self.stroke_style());
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        let sweep = end_angle - start_angle;
        let segments = (CIRCLE_SEGMENTS * sweep.abs() / TAU).ceil().max(1.0) as usize;
        for i in 0..=segments {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            let p = self.map(point_on_circle(center, radius, angle));
            self.path.push(p);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Vec2) {
        self.painter.text(
            self.map(origin),
            Align2::LEFT_BOTTOM,
            text,
            self.font(),
            self.fill_color.into(),
        );
    }

    fn measure_text(&self, text: &str) -> f32 {
        let galley =
            self.painter
                .layout_no_wrap(text.to_owned(), self.font(), self.fill_color.into());
        // Back into grid units, to match every other coordinate
        galley.size().x / self.transform.scale()
    }
}
