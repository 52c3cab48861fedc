//! Program commands and the cards that carry them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// A robot program command.
///
/// The set is closed: every card in the game carries exactly one of these.
/// `LeftOrRight` is the only interactive command; the owning player picks
/// one of its [`options`](Command::options) when it is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Right,
    Left,
    FastForward,
    UTurn,
    Backward,
    LeftOrRight,
}

impl Command {
    /// Every command, in dealing order.
    pub const ALL: [Command; 7] = [
        Command::Forward,
        Command::Right,
        Command::Left,
        Command::FastForward,
        Command::UTurn,
        Command::Backward,
        Command::LeftOrRight,
    ];

    /// Name shown on the card face.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Command::Forward => "Fwd",
            Command::Right => "Turn Right",
            Command::Left => "Turn Left",
            Command::FastForward => "Fast Fwd",
            Command::UTurn => "U-Turn",
            Command::Backward => "Back",
            Command::LeftOrRight => "Left OR Right",
        }
    }

    /// Commands a player may choose between when this command executes.
    ///
    /// Empty for non-interactive commands.
    #[must_use]
    pub const fn options(self) -> &'static [Command] {
        match self {
            Command::LeftOrRight => &[Command::Left, Command::Right],
            _ => &[],
        }
    }

    /// Whether executing this command needs a choice from the player.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !self.options().is_empty()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An immutable card holding one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandCard {
    pub command: Command,
}

impl CommandCard {
    /// Create a card for the given command.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command }
    }

    /// Name shown on the card face.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.command.display_name()
    }
}

/// Direction picked by a player resolving a `LeftOrRight` card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnChoice {
    Left,
    Right,
}

impl TurnChoice {
    /// The plain turn command this choice stands for.
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            TurnChoice::Left => Command::Left,
            TurnChoice::Right => Command::Right,
        }
    }
}

impl FromStr for TurnChoice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TurnChoice::Left),
            "right" => Ok(TurnChoice::Right),
            _ => Err(GameError::InvalidTurnChoice(s.to_string())),
        }
    }
}
