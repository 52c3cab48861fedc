//! Board grid, spaces and the game phase.
//!
//! - `Board`: toroidal grid, registered players, phase and round counters
//! - `Space`: one cell with walls, field actions and an optional occupant
//! - `BoardFactory`: builds the named layouts
//!
//! ## Phases
//!
//! ```text
//! Initialisation → Programming → Activation ⇄ PlayerInteraction
//!                      ↑              │
//!                      └──────────────┘ (round complete)
//! any → Finished (terminal)
//! ```

mod factory;
mod grid;
mod space;

pub use factory::BoardFactory;
pub use grid::{Board, DEFAULT_BOARD_NAME};
pub use space::Space;

use serde::{Deserialize, Serialize};

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Initialisation,
    /// Players fill their registers from their hands.
    Programming,
    /// Registers are executed one step at a time.
    Activation,
    /// Execution is suspended until a player resolves an interactive card.
    PlayerInteraction,
    /// A robot has won. No further transitions.
    Finished,
}
