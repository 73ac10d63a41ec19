mod config;
mod coord;
mod error;
mod generator;
mod grid;
mod solver;

pub use config::GameConfig;
pub use coord::Coord;
pub use error::{ConfigError, GameError};
pub use generator::{GenerationPolicy, generate};
pub use grid::Grid;
pub use solver::solve;
