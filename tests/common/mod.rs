#![allow(dead_code)]

use hexgrid::{Color, Surface, Vec2};
use std::cell::Cell;

/// Everything a [RecordingSurface] was asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Stroke { color: Color, width: f32 },
    Fill { color: Color },
    FillRect { origin: Vec2, size: Vec2, color: Color },
    StrokeRect { origin: Vec2, size: Vec2, color: Color },
    Arc { center: Vec2, radius: f32 },
    FillText { text: String, origin: Vec2 },
}

/// A surface that draws nothing and records every call. Text is measured
/// as a fixed width per character.
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    /// Number of times text was measured
    pub measured: Cell<usize>,
    line_width: f32,
    stroke_color: Color,
    fill_color: Color,
}

pub const CHAR_WIDTH: f32 = 6.0;

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            measured: Cell::new(0),
            line_width: 1.0,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.calls.push(Call::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.calls.push(Call::LineTo(p));
    }

    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke {
            color: self.stroke_color,
            width: self.line_width,
        });
    }

    fn fill(&mut self) {
        self.calls.push(Call::Fill {
            color: self.fill_color,
        });
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
        self.calls.push(Call::FillRect {
            origin,
            size,
            color: self.fill_color,
        });
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2) {
        self.calls.push(Call::StrokeRect {
            origin,
            size,
            color: self.stroke_color,
        });
    }

    fn arc(&mut self, center: Vec2, radius: f32, _start: f32, _end: f32) {
        self.calls.push(Call::Arc { center, radius });
    }

    fn fill_text(&mut self, text: &str, origin: Vec2) {
        self.calls.push(Call::FillText {
            text: text.to_owned(),
            origin,
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.measured.set(self.measured.get() + 1);
        text.chars().count() as f32 * CHAR_WIDTH
    }
}
