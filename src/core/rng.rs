//! Deterministic randomness for card dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore for save games
//! - **Injectable**: The controller deals through the [`CardDealer`] trait,
//!   so tests can supply a fixed command sequence instead of an RNG
//!
//! ```
//! use roborally::core::{CardDealer, GameRng};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.deal(), b.deal());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Command, CommandCard};

/// Source of freshly dealt command cards.
pub trait CardDealer {
    /// Produce the next card to put into a hand field.
    fn deal(&mut self) -> CommandCard;
}

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl CardDealer for GameRng {
    /// Every command is equally likely.
    fn deal(&mut self) -> CommandCard {
        let index = self.gen_range_usize(0..Command::ALL.len());
        CommandCard::new(Command::ALL[index])
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture cost does not depend on
/// how many cards have been dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Deals a fixed command sequence, repeating it forever.
#[derive(Clone, Debug)]
pub struct ScriptedDealer {
    commands: Vec<Command>,
    next: usize,
}

impl ScriptedDealer {
    /// Create a dealer cycling through `commands`.
    ///
    /// Panics if `commands` is empty.
    pub fn new(commands: impl Into<Vec<Command>>) -> Self {
        let commands = commands.into();
        assert!(!commands.is_empty(), "ScriptedDealer needs at least one command");
        Self { commands, next: 0 }
    }
}

impl CardDealer for ScriptedDealer {
    fn deal(&mut self) -> CommandCard {
        let command = self.commands[self.next];
        self.next = (self.next + 1) % self.commands.len();
        CommandCard::new(command)
    }
}
