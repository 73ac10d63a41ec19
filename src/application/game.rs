use log::{debug, info, warn};
use rand::Rng;

use crate::domain::{Coord, GameConfig, GameError, Grid, generate, solve};

/// Game owns the live board and applies player moves to it.
/// Every move swaps in a fresh grid snapshot; the stored grid is only
/// ever handed out by shared reference.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    moves: u32,
}

impl Game {
    /// Start a game with a board generated from the thread-local RNG
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Start a game drawing the initial board from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let grid = generate(&config, rng)?;
        info!(
            "New {}x{} game ({}), {} lights on",
            config.rows,
            config.cols,
            config.policy.name(),
            grid.lit_count()
        );
        Ok(Self { config, grid, moves: 0 })
    }

    /// Start a game on a fixed board
    pub fn from_grid(grid: Grid) -> Result<Self, GameError> {
        let (rows, cols) = grid.dimensions();
        let config = GameConfig::new(rows, cols);
        config.validate()?;
        Ok(Self { config, grid, moves: 0 })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the current board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn has_won(&self) -> bool {
        self.grid.has_won()
    }

    /// Successful activations since the board was generated
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Toggle `coord` and its neighbors. On error the board is unchanged.
    pub fn activate(&mut self, coord: Coord) -> Result<(), GameError> {
        let next = self
            .grid
            .toggled_around(coord)
            .inspect_err(|err| warn!("Rejected activation: {err}"))?;

        self.grid = next;
        self.moves += 1;
        debug!("Activated {coord} (move {})\n{}", self.moves, self.grid);

        if self.grid.has_won() {
            info!("Board cleared in {} moves", self.moves);
        }
        Ok(())
    }

    /// Discard the board and deal a new one with the same config.
    /// On error nothing changes.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.reconfigure(self.config, rng)
    }

    /// Switch to `config` and deal a new board. On error nothing changes.
    pub fn reconfigure<R: Rng + ?Sized>(
        &mut self,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<(), GameError> {
        *self = Self::with_rng(config, rng)?;
        Ok(())
    }

    /// First press of a solution, or None if won or unsolvable
    pub fn hint(&self) -> Option<Coord> {
        if self.has_won() {
            return None;
        }
        solve(&self.grid)?.into_iter().next()
    }
}
