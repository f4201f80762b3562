use crate::{
    color::Color,
    direction::{GridPosition, HexDirection},
    error::GridError,
    grid::{DrawStyle, HexGrid},
    hexagon::Hexagon,
    input::direction_for_key,
    surface::Surface,
};
use log::debug;

/// The highlighted tile. The grid owns the tile; the selection only
/// remembers where it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub position: GridPosition,
    /// Index of the tile in [HexGrid::tiles]
    pub index: usize,
}

/// Everything needed to draw the grid and react to input. Owned by whoever
/// runs the frame loop and passed into [Self::render] and the input
/// handlers.
#[derive(Clone, Debug)]
pub struct GridViewState {
    grid: HexGrid,
    selection: Option<Selection>,
    highlight: Color,
    style: DrawStyle,
    stroke_color: Color,
    background: Option<Color>,
}

impl GridViewState {
    /// Create a view with nothing selected
    pub fn new(grid: HexGrid) -> Self {
        Self {
            grid,
            selection: None,
            highlight: Color::HIGHLIGHT,
            style: DrawStyle::default(),
            stroke_color: Color::BLACK,
            background: None,
        }
    }

    /// Create a view with the tile at `start` highlighted in `highlight`.
    /// `start` wraps into the grid like any other selection; only an empty
    /// grid is an error.
    pub fn with_selection(
        grid: HexGrid,
        start: GridPosition,
        highlight: Color,
    ) -> Result<Self, GridError> {
        let mut state = Self::new(grid);
        state.highlight = highlight;
        state.select(start).ok_or(GridError::Empty)?;
        Ok(state)
    }

    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_colors(mut self, stroke: Color, background: Option<Color>) -> Self {
        self.stroke_color = stroke;
        self.background = background;
        self
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_tile(&self) -> Option<&Hexagon> {
        self.selection.map(|s| &self.grid.tiles()[s.index])
    }

    /// Highlight the tile at `position`, wrapping it into the grid first.
    /// The old highlight is always cleared before the new one is set, so at
    /// most one tile is ever marked. Returns the wrapped position, or `None`
    /// if the grid has no tiles.
    pub fn select(&mut self, position: GridPosition) -> Option<GridPosition> {
        if self.grid.is_empty() {
            return None;
        }
        let position = self.grid.wrap(position);
        let index = self.grid.index_of(position)?;

        let previous = self.clear_selection();
        if let Some(tile) = self.grid.tile_mut(position) {
            tile.set_fill_color(Some(self.highlight));
        }
        self.selection = Some(Selection { position, index });
        debug!(
            "Selection {} -> {}",
            previous.map_or_else(|| "none".to_owned(), |p| p.to_string()),
            position
        );
        Some(position)
    }

    /// Remove the highlight, returning where it was
    pub fn clear_selection(&mut self) -> Option<GridPosition> {
        let selection = self.selection.take()?;
        if let Some(tile) = self.grid.tile_mut(selection.position) {
            tile.set_fill_color(None);
        }
        Some(selection.position)
    }

    /// Move the highlight one tile, wrapping around the grid edges. Does
    /// nothing if no tile is selected.
    pub fn move_selection(&mut self, direction: HexDirection) -> Option<GridPosition> {
        let current = self.selection?.position;
        self.select(self.grid.neighbor(current, direction))
    }

    /// Handle a key press. Returns `true` if the key moved the selection.
    pub fn handle_key(&mut self, key: char) -> bool {
        match direction_for_key(key) {
            Some(direction) => self.move_selection(direction).is_some(),
            None => false,
        }
    }

    /// Draw the whole view. The surface's stroke color is restored
    /// afterwards.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let (Some(background), Some((min, max))) =
            (self.background, self.grid.bounds())
        {
            let previous = surface.fill_color();
            surface.set_fill_color(background);
            surface.fill_rect(min, max - min);
            surface.set_fill_color(previous);
        }

        let previous = surface.stroke_color();
        surface.set_stroke_color(self.stroke_color);
        self.grid.draw_styled(surface, &self.style);
        surface.set_stroke_color(previous);
    }
}
