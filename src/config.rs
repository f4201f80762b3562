use crate::{
    color::Color,
    direction::GridPosition,
    error::{ConfigError, GridError},
    grid::{DrawStyle, GridLayout, HexGrid, DEFAULT_LINE_WIDTH},
    input::{StickPoller, DEFAULT_DEAD_ZONE},
    state::GridViewState,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

/// Application config, read from a TOML file. Every field has a default, so
/// a config file only needs to list what it changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub selection: SelectionConfig,
    pub view: ViewConfig,
    pub stick: StickConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Circumscribed radius of each tile, in pixels
    pub radius: f32,
    pub columns: usize,
    pub rows: usize,
    pub layout: GridLayout,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            columns: 14,
            rows: 9,
            layout: GridLayout::ColumnOffset,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub start_column: i32,
    pub start_row: i32,
    pub highlight_color: Color,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            start_column: 4,
            start_row: 2,
            highlight_color: Color::HIGHLIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub line_width: f32,
    /// Delay between redraws
    pub redraw_interval_ms: u64,
    /// Draw each tile's "(column,row)" label
    pub show_labels: bool,
    /// Draw each tile's circumscribed circle and bounding box
    pub show_bounds: bool,
    pub font_size: f32,
    pub stroke_color: Color,
    pub background_color: Color,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            redraw_interval_ms: 10,
            show_labels: true,
            show_bounds: false,
            font_size: 10.0,
            stroke_color: Color::BLACK,
            background_color: Color::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickConfig {
    /// Readings at or below this magnitude are ignored
    pub dead_zone: f32,
    pub poll_interval_ms: u64,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            poll_interval_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load config from a file. A missing file isn't an error, it just means
    /// the defaults are used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate config from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridConfig {
            radius,
            columns,
            rows,
            layout,
        } = self.grid;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "grid.radius must be positive, got {}",
                radius
            )));
        }
        if layout == GridLayout::PairedColumns && columns % 2 != 0 {
            return Err(GridError::OddColumnCount(columns).into());
        }
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty.into());
        }
        if !(0.0..1.0).contains(&self.stick.dead_zone) {
            return Err(ConfigError::Invalid(format!(
                "stick.dead_zone must be in [0, 1), got {}",
                self.stick.dead_zone
            )));
        }
        let positive = |x: f32| x.is_finite() && x > 0.0;
        if !positive(self.view.line_width) || !positive(self.view.font_size) {
            return Err(ConfigError::Invalid(
                "view.line_width and view.font_size must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn start(&self) -> GridPosition {
        GridPosition::new(self.selection.start_column, self.selection.start_row)
    }

    pub fn redraw_interval(&self) -> Duration {
        Duration::from_millis(self.view.redraw_interval_ms)
    }

    pub fn build_grid(&self) -> Result<HexGrid, GridError> {
        HexGrid::with_layout(
            self.grid.radius,
            self.grid.columns,
            self.grid.rows,
            self.grid.layout,
        )
    }

    /// Build the grid and view state described by this config, with the
    /// start tile selected.
    pub fn build_state(&self) -> Result<GridViewState, GridError> {
        let style = DrawStyle {
            line_width: self.view.line_width,
            labels: self.view.show_labels,
            bounds: self.view.show_bounds,
        };
        Ok(GridViewState::with_selection(
            self.build_grid()?,
            self.start(),
            self.selection.highlight_color,
        )?
        .with_style(style)
        .with_colors(self.view.stroke_color, Some(self.view.background_color)))
    }

    pub fn stick_poller(&self) -> StickPoller {
        StickPoller::new(
            Duration::from_millis(self.stick.poll_interval_ms),
            self.stick.dead_zone,
        )
    }
}
