//! Core engine types: headings, positions, players, RNG, configuration,
//! change events and errors.
//!
//! These are the leaf building blocks; the board, movement and controller
//! modules are built on top of them.

pub mod config;
pub mod error;
pub mod events;
pub mod heading;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{GameConfig, WinCondition, ADVANCED_BOARD, BASIC_BOARD, NO_CARDS, NO_REGISTERS};
pub use error::GameError;
pub use events::{BoardEvent, Observers, SubscriptionId};
pub use heading::Heading;
pub use player::{Player, PlayerId};
pub use position::Position;
pub use rng::{CardDealer, GameRng, GameRngState, ScriptedDealer};
