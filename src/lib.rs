//! Hexagonal tile grids on a 2D drawing surface: hexagon geometry, offset
//! coordinate layout, neighbor movement with wraparound, and a view state
//! that highlights one tile and moves it in response to keyboard or analog
//! stick input.
//!
//! ```
//! use hexgrid::{GridPosition, GridViewState, HexDirection, HexGrid, Color};
//!
//! let grid = HexGrid::new(30.0, 14, 9).unwrap();
//! let mut state =
//!     GridViewState::with_selection(grid, GridPosition::new(4, 2), Color::HIGHLIGHT)
//!         .unwrap();
//! state.move_selection(HexDirection::North);
//! assert_eq!(state.selection().unwrap().position, GridPosition::new(4, 1));
//! ```

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
#[cfg(feature = "gamepad")]
pub mod gamepad;
pub mod grid;
pub mod hexagon;
pub mod input;
pub mod math;
pub mod painter;
pub mod state;
pub mod surface;
pub mod util;

pub use crate::{
    color::Color,
    config::AppConfig,
    direction::{DirectionMask, GridPosition, HexDirection},
    error::{ColorParseError, ConfigError, GeometryError, GridError},
    grid::{DrawStyle, GridLayout, HexGrid},
    hexagon::Hexagon,
    input::{stick_direction, AnalogStick, StickAxes, StickPoller},
    math::Vec2,
    state::{GridViewState, Selection},
    surface::Surface,
};
