// Domain layer - board, toggle rule, generation, solver
pub mod domain;

// Application layer - game session and screen layout
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Coord, GameConfig, GameError, GenerationPolicy, Grid};
pub use application::{Game, Session};
