//! Card slots: program registers and hand fields.

use serde::{Deserialize, Serialize};

use super::CommandCard;
use crate::core::PlayerId;

/// A slot that may hold one command card.
///
/// Fields never move cards themselves; the controller moves cards between
/// fields (see `GameController::move_cards`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCardField {
    card: Option<CommandCard>,
    visible: bool,
}

impl Default for CommandCardField {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCardField {
    /// Create an empty, visible field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            card: None,
            visible: true,
        }
    }

    /// The card currently in this field.
    #[must_use]
    pub fn card(&self) -> Option<CommandCard> {
        self.card
    }

    /// Put a card into (or clear) this field.
    pub fn set_card(&mut self, card: Option<CommandCard>) {
        self.card = card;
    }

    /// Remove and return the card in this field.
    pub fn take_card(&mut self) -> Option<CommandCard> {
        self.card.take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    /// Whether the presentation layer should show this field's card.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Which of a player's field rows a [`FieldRef`] points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Program registers, executed in order during activation.
    Program,
    /// Cards dealt during programming.
    Hand,
}

/// Address of one card field on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub player: PlayerId,
    pub kind: FieldKind,
    pub index: usize,
}

impl FieldRef {
    /// A program register of `player`.
    #[must_use]
    pub const fn program(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            kind: FieldKind::Program,
            index,
        }
    }

    /// A hand field of `player`.
    #[must_use]
    pub const fn hand(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            kind: FieldKind::Hand,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Command;

    #[test]
    fn test_new_field_is_empty_and_visible() {
        let field = CommandCardField::new();
        assert!(field.is_empty());
        assert!(field.is_visible());
    }

    #[test]
    fn test_take_card() {
        let mut field = CommandCardField::new();
        field.set_card(Some(CommandCard::new(Command::Forward)));
        assert!(!field.is_empty());

        assert_eq!(field.take_card(), Some(CommandCard::new(Command::Forward)));
        assert!(field.is_empty());
        assert_eq!(field.take_card(), None);
    }
}
