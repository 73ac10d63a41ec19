//! Initial board generation.
//!
//! Two policies are supported and the one in force is always named by
//! the [`GameConfig`]. They are never mixed.

use rand::Rng;

use super::{ConfigError, Coord, GameConfig, Grid};

/// How a fresh board is lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPolicy {
    /// Start dark and apply `moves` random toggles. Always solvable.
    /// Ignores `initial_lit_probability`.
    Scramble { moves: u32 },
    /// Light each cell independently with `initial_lit_probability`.
    /// May produce unsolvable boards.
    Independent,
}

impl GenerationPolicy {
    pub const SCRAMBLE_MOVES: u32 = 100;

    /// Policies offered in the UI, in cycling order
    pub fn all() -> Vec<GenerationPolicy> {
        vec![GenerationPolicy::default(), GenerationPolicy::Independent]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            GenerationPolicy::Scramble { .. } => "Scramble",
            GenerationPolicy::Independent => "Random",
        }
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        GenerationPolicy::Scramble {
            moves: Self::SCRAMBLE_MOVES,
        }
    }
}

/// Generate the initial board for `config`, drawing from `rng`.
pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Grid, ConfigError> {
    config.validate()?;
    let (rows, cols) = (config.rows, config.cols);

    let grid = match config.policy {
        GenerationPolicy::Scramble { moves } => {
            let mut grid = Grid::new(rows, cols);
            for _ in 0..moves {
                let coord = Coord::new(
                    rng.random_range(0..rows) as i32,
                    rng.random_range(0..cols) as i32,
                );
                // in bounds by construction
                let _ = grid.flip_around(coord);
            }
            grid
        }
        GenerationPolicy::Independent => {
            Grid::from_fn(rows, cols, |_| rng.random_bool(config.initial_lit_probability))
        }
    };

    Ok(grid)
}
