use super::Coord;
use thiserror::Error;

/// Reasons a [`GameConfig`](super::GameConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroCols,
    #[error("initial lit probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Errors surfaced by board and game operations.
///
/// A failing operation never alters existing state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("coordinate {coord} is outside the {rows}x{cols} board")]
    InvalidCoordinate { coord: Coord, rows: usize, cols: usize },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },
}
