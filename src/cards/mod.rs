//! Command cards and the fields that hold them.
//!
//! - `Command`: the closed set of robot instructions
//! - `CommandCard`: an immutable card carrying one command
//! - `CommandCardField`: a register or hand slot holding at most one card
//!
//! Cards do not survive a programming phase: registers are cleared and the
//! hand is dealt fresh cards every round.

mod command;
mod field;

pub use command::{Command, CommandCard, TurnChoice};
pub use field::{CommandCardField, FieldKind, FieldRef};
