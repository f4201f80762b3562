use crate::{
    direction::{GridPosition, HexDirection},
    error::GridError,
    hexagon::Hexagon,
    math::Vec2,
    surface::Surface,
};
use hex2d::Coordinate;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Every tile in a grid is built with this rotation, which normalizes to 0°
/// (flat-topped).
pub const TILE_ROTATION_DEGREES: f32 = 60.0;

/// The order that tiles are generated (and stored) in. Both layouts put a
/// given grid position at the same pixel center: columns are spaced three
/// quarters of a tile width apart, and odd columns are pushed down half a
/// tile height so neighboring columns interlock.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GridLayout {
    /// Column-major: every row of column 0, then every row of column 1, ...
    #[default]
    ColumnOffset,
    /// Row-major, walking each row two columns at a time and emitting the
    /// even/odd pair together. Requires an even number of columns.
    PairedColumns,
}

/// Line width used for tile outlines, unless a [DrawStyle] says otherwise
pub const DEFAULT_LINE_WIDTH: f32 = 0.5;

/// Options for [HexGrid::draw_styled]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawStyle {
    pub line_width: f32,
    pub labels: bool,
    pub bounds: bool,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            labels: true,
            bounds: false,
        }
    }
}

/// A rectangular grid of flat-topped hexagons addressed by (column, row).
/// Tiles are generated once, and every in-bounds position maps to exactly
/// one of them.
#[derive(Clone, Debug)]
pub struct HexGrid {
    radius: f32,
    columns: usize,
    rows: usize,
    layout: GridLayout,
    /// A tile at the origin, used for its dimensions
    seed: Hexagon,
    tiles: Vec<Hexagon>,
}

impl HexGrid {
    /// Build a grid using the default [GridLayout::ColumnOffset] layout
    pub fn new(
        radius: f32,
        columns: usize,
        rows: usize,
    ) -> Result<Self, GridError> {
        Self::with_layout(radius, columns, rows, GridLayout::default())
    }

    pub fn with_layout(
        radius: f32,
        columns: usize,
        rows: usize,
        layout: GridLayout,
    ) -> Result<Self, GridError> {
        let seed = Hexagon::new(Vec2::ZERO, radius, TILE_ROTATION_DEGREES, "")?;
        let (sx, sy) = (seed.width(), seed.height());
        let tile = |column: usize, row: usize, center: Vec2| {
            Hexagon::new(
                center,
                radius,
                TILE_ROTATION_DEGREES,
                format!("({},{})", column, row),
            )
        };

        let mut tiles = Vec::with_capacity(columns * rows);
        match layout {
            GridLayout::ColumnOffset => {
                for x in 0..columns {
                    let y_offset = (x % 2) as f32 * 0.5;
                    for y in 0..rows {
                        let center = Vec2::new(
                            x as f32 * 0.75 * sx,
                            (y as f32 + y_offset) * sy,
                        );
                        tiles.push(tile(x, y, center)?);
                    }
                }
            }
            GridLayout::PairedColumns => {
                if columns % 2 != 0 {
                    return Err(GridError::OddColumnCount(columns));
                }
                for y in 0..rows {
                    for x in (0..columns).step_by(2) {
                        let top = y as f32 * sy;
                        let even = Vec2::new(x as f32 * 0.75 * sx, top);
                        let odd =
                            Vec2::new((x + 1) as f32 * 0.75 * sx, top + sy / 2.0);
                        tiles.push(tile(x, y, even)?);
                        tiles.push(tile(x + 1, y, odd)?);
                    }
                }
            }
        }

        debug!(
            "Generated {} tiles for {}x{} grid (radius {}, {} layout)",
            tiles.len(),
            columns,
            rows,
            radius,
            layout
        );
        Ok(Self {
            radius,
            columns,
            rows,
            layout,
            seed,
            tiles,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Width of a single tile
    pub fn tile_width(&self) -> f32 {
        self.seed.width()
    }

    /// Height of a single tile
    pub fn tile_height(&self) -> f32 {
        self.seed.height()
    }

    /// All tiles, in generation order
    pub fn tiles(&self) -> &[Hexagon] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index into [Self::tiles] of the tile at `position`, or `None` if the
    /// position is outside the grid.
    pub fn index_of(&self, position: GridPosition) -> Option<usize> {
        if !position.in_bounds(self.columns, self.rows) {
            return None;
        }
        let (column, row) = (position.column as usize, position.row as usize);
        Some(match self.layout {
            GridLayout::ColumnOffset => column * self.rows + row,
            GridLayout::PairedColumns => row * self.columns + column,
        })
    }

    /// Inverse of [Self::index_of]
    pub fn position_of(&self, index: usize) -> Option<GridPosition> {
        if index >= self.tiles.len() {
            return None;
        }
        let (column, row) = match self.layout {
            GridLayout::ColumnOffset => (index / self.rows, index % self.rows),
            GridLayout::PairedColumns => {
                (index % self.columns, index / self.columns)
            }
        };
        Some(GridPosition::new(column as i32, row as i32))
    }

    pub fn tile(&self, position: GridPosition) -> Option<&Hexagon> {
        self.index_of(position).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, position: GridPosition) -> Option<&mut Hexagon> {
        self.index_of(position).map(move |i| &mut self.tiles[i])
    }

    /// Like [Self::tile], but an out-of-bounds position is an error
    pub fn get(&self, position: GridPosition) -> Result<&Hexagon, GridError> {
        self.tile(position).ok_or(GridError::OutOfBounds {
            column: position.column,
            row: position.row,
        })
    }

    /// Pixel center of the tile at `position`. Also defined for positions
    /// outside the grid, where it extends the same pattern.
    pub fn center_of(&self, position: GridPosition) -> Vec2 {
        let y_offset = position.column.rem_euclid(2) as f32 * 0.5;
        Vec2::new(
            position.column as f32 * 0.75 * self.tile_width(),
            (position.row as f32 + y_offset) * self.tile_height(),
        )
    }

    /// Wrap a position back into the grid. See [GridPosition::wrap].
    pub fn wrap(&self, position: GridPosition) -> GridPosition {
        position.wrap(self.columns, self.rows)
    }

    /// The neighbor of `position` in `direction`, wrapping around the edges
    pub fn neighbor(
        &self,
        position: GridPosition,
        direction: HexDirection,
    ) -> GridPosition {
        self.wrap(position.step(direction))
    }

    /// Find the tile containing a pixel-space point, if any
    pub fn pick(&self, point: Vec2) -> Option<GridPosition> {
        // Tiles tessellate, so the tile containing a point is the one with
        // the nearest center. Only the 3x3 block around the estimate can win.
        let column = (point.x / (0.75 * self.tile_width())).round() as i32;
        let nearest = (column - 1..=column + 1)
            .flat_map(|c| {
                let y_offset = c.rem_euclid(2) as f32 * 0.5;
                let row = (point.y / self.tile_height() - y_offset).round() as i32;
                (row - 1..=row + 1).map(move |r| GridPosition::new(c, r))
            })
            .min_by(|a, b| {
                let da = self.center_of(*a).distance(point);
                let db = self.center_of(*b).distance(point);
                da.total_cmp(&db)
            })?;
        nearest.in_bounds(self.columns, self.rows).then_some(nearest)
    }

    /// Number of steps between two tiles, ignoring wraparound
    pub fn distance(&self, a: GridPosition, b: GridPosition) -> u32 {
        to_cube(a).distance(to_cube(b)).unsigned_abs()
    }

    /// Top-left and bottom-right corners of the box containing every tile,
    /// or `None` for an empty grid.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let half = Vec2::new(self.tile_width() / 2.0, self.tile_height() / 2.0);
        self.tiles
            .iter()
            .map(Hexagon::center)
            .fold(None, |acc, c| {
                let (min, max) = acc.unwrap_or((c, c));
                Some((
                    Vec2::new(min.x.min(c.x), min.y.min(c.y)),
                    Vec2::new(max.x.max(c.x), max.y.max(c.y)),
                ))
            })
            .map(|(min, max)| (min - half, max + half))
    }

    /// Draw every tile, in tile order, with the default style
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.draw_styled(surface, &DrawStyle::default());
    }

    /// Draw every tile, in tile order. The surface's line width is restored
    /// afterwards.
    pub fn draw_styled<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        style: &DrawStyle,
    ) {
        let line_width = surface.line_width();
        surface.set_line_width(style.line_width);
        for tile in &self.tiles {
            tile.draw(surface);
            if style.labels {
                tile.draw_label(surface);
            }
            if style.bounds {
                tile.draw_bounds(surface);
            }
        }
        surface.set_line_width(line_width);
    }
}

/// Convert offset coordinates (odd columns shifted down) to cube coordinates
fn to_cube(position: GridPosition) -> Coordinate {
    let q = position.column;
    let r = position.row - (q - q.rem_euclid(2)) / 2;
    Coordinate::new(q, r)
}
