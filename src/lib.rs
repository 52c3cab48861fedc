//! # roborally
//!
//! Turn and phase engine for the RoboRally board game.
//!
//! Players program their robots with command cards; the engine executes the
//! programs register by register against a board of walls, conveyor belts
//! and checkpoints.
//!
//! ## Round structure
//!
//! 1. **Programming**: every hand is dealt fresh cards, registers are empty.
//! 2. **Activation**: register 0 of every player in turn order, then
//!    register 1, and so on. Moving robots push robots in their way.
//!    An interactive card suspends activation until the player chooses.
//! 3. **Field actions**: after the last register, conveyor belts move robots,
//!    then checkpoints credit them. A new programming phase begins.
//!
//! A robot standing on its board's goal cell with all checkpoints collected
//! wins and finishes the game.
//!
//! ## Modules
//!
//! - `core`: headings, positions, players, RNG, configuration, events, errors
//! - `cards`: commands, cards and card fields
//! - `board`: the grid, spaces, phases and named layouts
//! - `actions`: conveyor belts and checkpoints
//! - `movement`: push chains and turning
//! - `controller`: the phase state machine
//! - `persistence`: save and load
//!
//! ## Example
//!
//! ```
//! use roborally::{BoardFactory, FieldRef, GameController, Phase, Player, Position};
//!
//! let mut board = BoardFactory::new().create_board("basic");
//! let ada = board.add_player(Player::new("Ada", None));
//! board.place_player(ada, Some(Position::new(2, 2)));
//!
//! let mut game = GameController::new(board);
//! game.start_programming_phase();
//! for register in 0..roborally::NO_REGISTERS {
//!     game.move_cards(FieldRef::hand(ada, register), FieldRef::program(ada, register));
//! }
//! game.finish_programming_phase();
//! assert_eq!(game.board().phase(), Phase::Activation);
//! ```

pub mod actions;
pub mod board;
pub mod cards;
pub mod controller;
pub mod core;
pub mod movement;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    BoardEvent, CardDealer, GameConfig, GameError, GameRng, GameRngState, Heading, Player,
    PlayerId, Position, ScriptedDealer, SubscriptionId, WinCondition, NO_CARDS, NO_REGISTERS,
};

pub use crate::cards::{Command, CommandCard, CommandCardField, FieldKind, FieldRef, TurnChoice};

pub use crate::board::{Board, BoardFactory, Phase, Space};

pub use crate::actions::{FieldAction, FieldActionKind};

pub use crate::controller::GameController;

pub use crate::persistence::GameSnapshot;
