mod common;

use assert_approx_eq::assert_approx_eq;
use common::{Call, RecordingSurface, CHAR_WIDTH};
use hexgrid::{
    Color, DrawStyle, GridPosition, GridViewState, HexGrid, Hexagon, Surface, Vec2,
};

fn is_path_point(call: &Call) -> bool {
    matches!(call, Call::MoveTo(_) | Call::LineTo(_))
}

#[test]
fn test_hexagon_path() {
    let hexagon = Hexagon::new(Vec2::new(100.0, 100.0), 100.0, 0.0, "").unwrap();
    let mut surface = RecordingSurface::new();
    hexagon.draw(&mut surface);

    assert_eq!(surface.calls.first(), Some(&Call::BeginPath));
    assert_eq!(surface.count(|c| matches!(c, Call::MoveTo(_))), 1);
    assert_eq!(surface.count(|c| matches!(c, Call::LineTo(_))), 5);
    assert_eq!(surface.count(|c| matches!(c, Call::Fill { .. })), 0);
    assert_eq!(
        surface.calls.last(),
        Some(&Call::Stroke {
            color: Color::BLACK,
            width: 1.0
        })
    );
    match surface.calls[1] {
        Call::MoveTo(p) => {
            assert_approx_eq!(p.x, 200.0, 1e-3);
            assert_approx_eq!(p.y, 100.0, 1e-3);
        }
        ref other => panic!("expected move_to, got {:?}", other),
    }
}

#[test]
fn test_filled_hexagon_restores_fill() {
    let mut hexagon = Hexagon::new(Vec2::ZERO, 10.0, 0.0, "").unwrap();
    hexagon.set_fill_color(Some(Color::HIGHLIGHT));
    let mut surface = RecordingSurface::new();
    surface.set_fill_color(Color::GREEN);
    hexagon.draw(&mut surface);

    let fill = surface
        .calls
        .iter()
        .position(|c| matches!(c, Call::Fill { .. }))
        .unwrap();
    let stroke = surface
        .calls
        .iter()
        .position(|c| matches!(c, Call::Stroke { .. }))
        .unwrap();
    assert!(fill < stroke, "fill should come before the outline");
    assert_eq!(
        surface.calls[fill],
        Call::Fill {
            color: Color::HIGHLIGHT
        }
    );
    assert_eq!(surface.fill_color(), Color::GREEN);
}

#[test]
fn test_label_is_centered_and_measured_once() {
    let hexagon = Hexagon::new(Vec2::new(50.0, 40.0), 30.0, 60.0, "(4,2)").unwrap();
    let mut surface = RecordingSurface::new();
    hexagon.draw_label(&mut surface);
    hexagon.draw_label(&mut surface);

    let expected = Call::FillText {
        text: "(4,2)".into(),
        origin: Vec2::new(50.0 - 5.0 * CHAR_WIDTH / 2.0, 40.0),
    };
    assert_eq!(surface.calls, vec![expected.clone(), expected]);
    assert_eq!(surface.measured.get(), 1);
}

#[test]
fn test_empty_label_draws_nothing() {
    let hexagon = Hexagon::new(Vec2::ZERO, 30.0, 0.0, "").unwrap();
    let mut surface = RecordingSurface::new();
    hexagon.draw_label(&mut surface);
    assert!(surface.calls.is_empty());
}

#[test]
fn test_bounds_overlay() {
    let hexagon = Hexagon::new(Vec2::new(10.0, 20.0), 30.0, 0.0, "").unwrap();
    let mut surface = RecordingSurface::new();
    surface.set_stroke_color(Color::WHITE);
    surface.set_line_width(2.0);
    hexagon.draw_bounds(&mut surface);

    assert!(surface.calls.contains(&Call::Arc {
        center: Vec2::new(10.0, 20.0),
        radius: 30.0
    }));
    assert!(surface.calls.contains(&Call::Stroke {
        color: Color::RED,
        width: 2.0
    }));
    let rect = surface
        .calls
        .iter()
        .find_map(|c| match c {
            Call::StrokeRect {
                origin,
                size,
                color,
            } => Some((*origin, *size, *color)),
            _ => None,
        })
        .unwrap();
    assert_eq!(rect.2, Color::GREEN);
    assert_approx_eq!(rect.1.x, hexagon.width(), 1e-4);
    assert_approx_eq!(rect.1.y, hexagon.height(), 1e-4);
    assert_approx_eq!(rect.0.x, 10.0 - hexagon.width() / 2.0, 1e-4);

    assert_eq!(surface.stroke_color(), Color::WHITE);
    assert_eq!(surface.line_width(), 2.0);
}

#[test]
fn test_grid_draw_order_and_style() {
    let grid = HexGrid::new(30.0, 3, 2).unwrap();
    let mut surface = RecordingSurface::new();
    grid.draw(&mut surface);

    assert_eq!(surface.count(is_path_point), 6 * 6);
    assert_eq!(surface.count(|c| matches!(c, Call::BeginPath)), 6);
    assert_eq!(
        surface.count(|c| matches!(c, Call::Stroke { width, .. } if *width == 0.5)),
        6
    );
    let labels: Vec<&str> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["(0,0)", "(0,1)", "(1,0)", "(1,1)", "(2,0)", "(2,1)"]);
    assert_eq!(surface.line_width(), 1.0);
}

#[test]
fn test_grid_without_labels() {
    let grid = HexGrid::new(30.0, 2, 2).unwrap();
    let mut surface = RecordingSurface::new();
    let style = DrawStyle {
        labels: false,
        bounds: true,
        ..DrawStyle::default()
    };
    grid.draw_styled(&mut surface, &style);
    assert_eq!(surface.count(|c| matches!(c, Call::FillText { .. })), 0);
    assert_eq!(surface.count(|c| matches!(c, Call::Arc { .. })), 4);
    assert_eq!(surface.count(|c| matches!(c, Call::StrokeRect { .. })), 4);
}

#[test]
fn test_render_highlights_selection() {
    let grid = HexGrid::new(30.0, 14, 9).unwrap();
    let bounds = grid.bounds().unwrap();
    let mut state =
        GridViewState::with_selection(grid, GridPosition::new(4, 2), Color::HIGHLIGHT)
            .unwrap()
            .with_colors(Color::BLACK, Some(Color::WHITE));
    let mut surface = RecordingSurface::new();
    state.render(&mut surface);

    assert_eq!(
        surface.calls[0],
        Call::FillRect {
            origin: bounds.0,
            size: bounds.1 - bounds.0,
            color: Color::WHITE
        }
    );
    assert_eq!(
        surface.count(|c| *c == Call::Fill { color: Color::HIGHLIGHT }),
        1
    );

    // Moving the selection moves the single highlight with it
    state.handle_key('w');
    let mut surface = RecordingSurface::new();
    state.render(&mut surface);
    assert_eq!(surface.count(|c| matches!(c, Call::Fill { .. })), 1);
    assert_eq!(surface.fill_color(), Color::BLACK);
    assert_eq!(surface.stroke_color(), Color::BLACK);
}
