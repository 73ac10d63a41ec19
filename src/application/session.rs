use log::info;
use rand::Rng;

use crate::domain::{Coord, GameConfig, GameError, GenerationPolicy};
use super::Game;

/// Board sizes offered in the UI (square boards)
pub const BOARD_SIZES: &[usize] = &[3, 4, 5, 6, 7];

/// Commands from the control panel and keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    NewGame,
    CycleSize,
    CycleSetup,
    Hint,
}

/// Session ties a game to the UI's current selections.
pub struct Session {
    pub game: Game,
    size_index: usize,
    /// Cell highlighted by the last hint request, cleared on any move
    pub hint: Option<Coord>,
}

impl Session {
    pub fn new() -> Result<Self, GameError> {
        Self::with_rng(&mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let config = GameConfig::default();
        let size_index = BOARD_SIZES
            .iter()
            .position(|&size| size == config.rows)
            .unwrap_or(0);
        Ok(Self {
            game: Game::with_rng(config, rng)?,
            size_index,
            hint: None,
        })
    }

    pub fn board_size(&self) -> usize {
        BOARD_SIZES[self.size_index]
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.game.config().policy
    }

    /// Player pressed a light
    pub fn activate(&mut self, coord: Coord) -> Result<(), GameError> {
        self.game.activate(coord)?;
        self.hint = None;
        Ok(())
    }

    pub fn apply(&mut self, action: ControlAction) -> Result<(), GameError> {
        self.apply_with_rng(action, &mut rand::rng())
    }

    pub fn apply_with_rng<R: Rng + ?Sized>(
        &mut self,
        action: ControlAction,
        rng: &mut R,
    ) -> Result<(), GameError> {
        match action {
            ControlAction::NewGame => {
                self.game.restart(rng)?;
                self.hint = None;
            }
            ControlAction::CycleSize => {
                let next = (self.size_index + 1) % BOARD_SIZES.len();
                let size = BOARD_SIZES[next];
                let config = GameConfig { rows: size, cols: size, ..*self.game.config() };
                self.game.reconfigure(config, rng)?;
                self.size_index = next;
                self.hint = None;
            }
            ControlAction::CycleSetup => {
                let policies = GenerationPolicy::all();
                let current = policies.iter().position(|&p| p == self.policy()).unwrap_or(0);
                let policy = policies[(current + 1) % policies.len()];
                let config = self.game.config().with_policy(policy);
                self.game.reconfigure(config, rng)?;
                self.hint = None;
            }
            ControlAction::Hint => {
                self.hint = self.game.hint();
                match self.hint {
                    Some(coord) => info!("Hint: press {coord}"),
                    None => info!("No hint available"),
                }
            }
        }
        Ok(())
    }
}
