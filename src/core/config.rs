//! Game configuration.
//!
//! - `NO_REGISTERS` / `NO_CARDS`: fixed sizes of a player's program and hand
//! - `WinCondition`: goal cell and checkpoint total for one board layout
//! - `GameConfig`: win conditions keyed by board name, plus the dealing seed
//!
//! Defaults match the two shipped layouts (`basic` and `advanced`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of program registers per player.
pub const NO_REGISTERS: usize = 5;

/// Number of hand fields per player.
pub const NO_CARDS: usize = 8;

/// Name of the 8×8 layout.
pub const BASIC_BOARD: &str = "basic";

/// Name of the 15×8 layout.
pub const ADVANCED_BOARD: &str = "advanced";

/// What a robot has to achieve to win on a given layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCondition {
    /// Cell the winning robot must stand on.
    pub goal: Position,
    /// Checkpoints the winning robot must have collected.
    pub required_checkpoints: u32,
}

impl WinCondition {
    #[must_use]
    pub const fn new(goal: Position, required_checkpoints: u32) -> Self {
        Self {
            goal,
            required_checkpoints,
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default card dealer.
    pub seed: u64,

    /// Win condition per board name. Boards without an entry cannot be won.
    pub win_conditions: FxHashMap<String, WinCondition>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
            .with_win_condition(BASIC_BOARD, WinCondition::new(Position::new(7, 3), 2))
            .with_win_condition(ADVANCED_BOARD, WinCondition::new(Position::new(11, 6), 3))
    }
}

impl GameConfig {
    /// An empty configuration with seed 42 and no win conditions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: 42,
            win_conditions: FxHashMap::default(),
        }
    }

    /// Set the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Add or replace the win condition for `board_name`.
    #[must_use]
    pub fn with_win_condition(mut self, board_name: impl Into<String>, condition: WinCondition) -> Self {
        self.win_conditions.insert(board_name.into(), condition);
        self
    }

    /// Win condition for a board layout.
    #[must_use]
    pub fn win_condition(&self, board_name: &str) -> Option<WinCondition> {
        self.win_conditions.get(board_name).copied()
    }
}
