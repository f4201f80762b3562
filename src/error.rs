use thiserror::Error;

/// Invalid input to hexagon construction.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("hexagon radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("hexagon rotation must be finite, got {0}")]
    NonFiniteRotation(f32),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The paired-column layout emits two tiles per step, so it needs an
    /// even number of columns.
    #[error("paired-column layout needs an even column count, got {0}")]
    OddColumnCount(usize),
    #[error("grid position ({column}, {row}) is outside the grid")]
    OutOfBounds { column: i32, row: i32 },
    #[error("grid has no tiles to select")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected a color of the form #rrggbb, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

/// Failure to load or validate an [AppConfig](crate::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file {path:?}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}
