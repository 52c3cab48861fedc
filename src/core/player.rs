//! Players and their robots.
//!
//! ## PlayerId
//!
//! Index of a player in the board's registration order. Registration order
//! is turn order.
//!
//! ## Player
//!
//! Robot state: position, heading, program registers, hand and checkpoint
//! progress. A `Player` does not own the space it stands on; the board keeps
//! space occupancy and player positions consistent.

use serde::{Deserialize, Serialize};

use super::config::{NO_CARDS, NO_REGISTERS};
use super::heading::Heading;
use super::position::Position;
use crate::cards::CommandCardField;

/// Player identifier, 0-based in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use roborally::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player and their robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Option<String>,
    heading: Heading,
    position: Option<Position>,
    program: Vec<CommandCardField>,
    cards: Vec<CommandCardField>,
    checkpoints: u32,
}

impl Player {
    /// Create a player facing south, not yet placed on the board.
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            color,
            heading: Heading::South,
            position: None,
            program: vec![CommandCardField::new(); NO_REGISTERS],
            cards: vec![CommandCardField::new(); NO_CARDS],
            checkpoints: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// The space this robot stands on, if it is on the board.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Only the board may move robots; it also updates space occupancy.
    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    // === Cards ===

    /// A program register, or `None` if `index` is out of range.
    #[must_use]
    pub fn program_field(&self, index: usize) -> Option<&CommandCardField> {
        self.program.get(index)
    }

    pub fn program_field_mut(&mut self, index: usize) -> Option<&mut CommandCardField> {
        self.program.get_mut(index)
    }

    /// A hand field, or `None` if `index` is out of range.
    #[must_use]
    pub fn card_field(&self, index: usize) -> Option<&CommandCardField> {
        self.cards.get(index)
    }

    pub fn card_field_mut(&mut self, index: usize) -> Option<&mut CommandCardField> {
        self.cards.get_mut(index)
    }

    pub fn program_fields(&self) -> &[CommandCardField] {
        &self.program
    }

    pub fn card_fields(&self) -> &[CommandCardField] {
        &self.cards
    }

    // === Checkpoints ===

    /// Number of the highest checkpoint reached so far.
    #[must_use]
    pub fn collected_checkpoints(&self) -> u32 {
        self.checkpoints
    }

    /// Register a visit to checkpoint `number`.
    ///
    /// Checkpoints count only in strict sequence: `number` must be exactly
    /// one more than the highest collected so far. Anything else is ignored.
    /// Returns whether progress was made.
    pub fn pass_checkpoint(&mut self, number: u32) -> bool {
        if number == self.checkpoints + 1 {
            self.checkpoints = number;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_new_player_fields() {
        let player = Player::new("Alice", Some("red".to_string()));

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.color(), Some("red"));
        assert_eq!(player.heading(), Heading::South);
        assert_eq!(player.position(), None);
        assert_eq!(player.program_fields().len(), NO_REGISTERS);
        assert_eq!(player.card_fields().len(), NO_CARDS);
        assert!(player.program_field(NO_REGISTERS).is_none());
        assert!(player.card_field(NO_CARDS).is_none());
    }

    #[test]
    fn test_checkpoints_in_sequence() {
        let mut player = Player::new("Bob", None);

        assert!(player.pass_checkpoint(1));
        assert!(player.pass_checkpoint(2));
        assert_eq!(player.collected_checkpoints(), 2);

        // Skipping 3 is rejected
        assert!(!player.pass_checkpoint(4));
        assert_eq!(player.collected_checkpoints(), 2);

        assert!(player.pass_checkpoint(3));
        assert!(player.pass_checkpoint(4));
        assert_eq!(player.collected_checkpoints(), 4);
    }

    #[test]
    fn test_checkpoint_revisit_is_ignored() {
        let mut player = Player::new("Carol", None);

        assert!(player.pass_checkpoint(1));
        assert!(!player.pass_checkpoint(1));
        assert!(!player.pass_checkpoint(0));
        assert_eq!(player.collected_checkpoints(), 1);
    }
}
