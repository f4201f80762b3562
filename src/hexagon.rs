use crate::{
    color::Color,
    error::GeometryError,
    math::{deg_to_rad, point_on_circle, Vec2},
    surface::Surface,
};
use std::{cell::OnceCell, f32::consts::PI};

/// Hexagons have 60° rotational symmetry, so every rotation is stored as an
/// equivalent angle in `[0°, 60°)`.
const SYMMETRY_DEGREES: f32 = 60.0;

/// A regular hexagon described by its circumscribed circle. The first vertex
/// sits at `rotation` radians on that circle and the other five follow at 60°
/// steps. At rotation 0 the hexagon is flat-topped.
///
/// `width` and `height` are the extents of the vertex bounding box. They are
/// computed once at construction, and since the geometry is immutable they
/// never go stale.
#[derive(Clone, Debug)]
pub struct Hexagon {
    center: Vec2,
    radius: f32,
    rotation: f32,
    width: f32,
    height: f32,
    label: String,
    fill_color: Option<Color>,
    /// Measured lazily, the first time the label is drawn
    label_width: OnceCell<f32>,
}

impl Hexagon {
    /// Create a new hexagon. `rotation_degrees` may be any finite angle; it is
    /// reduced to `[0°, 60°)` before use.
    pub fn new(
        center: Vec2,
        radius: f32,
        rotation_degrees: f32,
        label: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !rotation_degrees.is_finite() {
            return Err(GeometryError::NonFiniteRotation(rotation_degrees));
        }

        let mut normalized = rotation_degrees.rem_euclid(SYMMETRY_DEGREES);
        // rem_euclid can round tiny negative inputs up to exactly 60
        if normalized >= SYMMETRY_DEGREES {
            normalized = 0.0;
        }
        let rotation = deg_to_rad(normalized);
        let sixty = deg_to_rad(SYMMETRY_DEGREES);

        // The vertex nearest the x axis is either the first one or the one
        // 60° behind it, whichever is closer.
        let width = 2.0 * radius * rotation.min(sixty - rotation).cos();
        let height = 2.0 * radius * (sixty + rotation).sin();

        Ok(Self {
            center,
            radius,
            rotation,
            width,
            height,
            label: label.into(),
            fill_color: None,
            label_width: OnceCell::new(),
        })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Rotation in radians, always in `[0, π/3)`
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// The six vertices, in order of increasing angle. The iterator is a pure
    /// function of the hexagon, so it can be cloned and replayed freely.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vec2> + Clone {
        let (center, radius, rotation) = (self.center, self.radius, self.rotation);
        (0..6u8).map(move |i| {
            point_on_circle(center, radius, rotation + f32::from(i) * PI / 3.0)
        })
    }

    /// Width of the label text, measured with `measure` on the first call and
    /// cached for the life of the hexagon.
    pub fn label_width(&self, measure: impl FnOnce(&str) -> f32) -> f32 {
        *self.label_width.get_or_init(|| measure(&self.label))
    }

    /// Draw the outline, plus the fill color if one is set. The surface's
    /// fill color is restored afterwards.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        let mut vertices = self.vertices();
        if let Some(first) = vertices.next() {
            surface.move_to(first);
        }
        for vertex in vertices {
            surface.line_to(vertex);
        }
        surface.close_path();

        if let Some(color) = self.fill_color {
            let previous = surface.fill_color();
            surface.set_fill_color(color);
            surface.fill();
            surface.set_fill_color(previous);
        }
        surface.stroke();
    }

    /// Draw the label centered horizontally on the hexagon's center, with
    /// its baseline through the center. Empty labels draw nothing.
    pub fn draw_label<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.label.is_empty() {
            return;
        }
        let width = self.label_width(|text| surface.measure_text(text));
        surface.fill_text(
            &self.label,
            Vec2::new(self.center.x - width / 2.0, self.center.y),
        );
    }

    /// Debug overlay: the circumscribed circle in red and the width × height
    /// bounding box in green. Stroke style is restored afterwards.
    pub fn draw_bounds<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (previous_color, previous_width) =
            (surface.stroke_color(), surface.line_width());

        surface.begin_path();
        surface.arc(self.center, self.radius, 0.0, 2.0 * PI);
        surface.set_stroke_color(Color::RED);
        surface.stroke();

        let half = Vec2::new(self.width / 2.0, self.height / 2.0);
        surface.set_stroke_color(Color::GREEN);
        surface.stroke_rect(self.center - half, Vec2::new(self.width, self.height));

        surface.set_stroke_color(previous_color);
        surface.set_line_width(previous_width);
    }
}
