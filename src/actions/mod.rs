//! Field actions: per-space effects applied at the end of a round.
//!
//! A space holds any number of actions, applied in list order. The set of
//! action kinds is closed:
//!
//! - **Conveyor belt**: carries the robot on the space one step in the belt's
//!   heading, if the destination is free. It never pushes other robots.
//! - **Checkpoint**: credits the robot on the space with the checkpoint's
//!   number, if that is the next one it needs.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::core::{Heading, Position};

/// Kind selector used by the end-of-round sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldActionKind {
    ConveyorBelt,
    Checkpoint,
}

/// An effect attached to a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldAction {
    ConveyorBelt { heading: Heading },
    Checkpoint { number: u32 },
}

impl FieldAction {
    #[must_use]
    pub const fn conveyor_belt(heading: Heading) -> Self {
        FieldAction::ConveyorBelt { heading }
    }

    #[must_use]
    pub const fn checkpoint(number: u32) -> Self {
        FieldAction::Checkpoint { number }
    }

    #[must_use]
    pub const fn kind(&self) -> FieldActionKind {
        match self {
            FieldAction::ConveyorBelt { .. } => FieldActionKind::ConveyorBelt,
            FieldAction::Checkpoint { .. } => FieldActionKind::Checkpoint,
        }
    }

    /// Apply this action to the space at `position`.
    ///
    /// Returns true if a robot was moved. Checkpoint visits only update
    /// progress and always return false.
    pub fn activate(&self, board: &mut Board, position: Position) -> bool {
        let Some(player) = board.space_at(position).and_then(|s| s.player()) else {
            return false;
        };

        match *self {
            FieldAction::ConveyorBelt { heading } => {
                // Walls are not checked for belts.
                let target = match board.neighbour(position, heading) {
                    Some(next) if next.is_free() => next.position(),
                    _ => return false,
                };
                trace!(player = %player, from = %position, to = %target, "conveyor belt");
                board.place_player(player, Some(target))
            }
            FieldAction::Checkpoint { number } => {
                board.pass_checkpoint(player, number);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerId};

    fn board_with(positions: &[(usize, usize)]) -> Board {
        let mut board = Board::with_size(4, 4);
        for (i, &(x, y)) in positions.iter().enumerate() {
            let id = board.add_player(Player::new(format!("P{i}"), None));
            board.place_player(id, Some(Position::new(x, y)));
        }
        board
    }

    #[test]
    fn test_conveyor_moves_occupant() {
        let mut board = board_with(&[(1, 1)]);
        let belt = FieldAction::conveyor_belt(Heading::East);

        assert!(belt.activate(&mut board, Position::new(1, 1)));
        assert_eq!(board.space(2, 1).unwrap().player(), Some(PlayerId::new(0)));
        assert!(board.space(1, 1).unwrap().is_free());
    }

    #[test]
    fn test_conveyor_wraps() {
        let mut board = board_with(&[(0, 2)]);
        let belt = FieldAction::conveyor_belt(Heading::West);

        assert!(belt.activate(&mut board, Position::new(0, 2)));
        assert_eq!(board.space(3, 2).unwrap().player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_conveyor_blocked_by_occupant() {
        let mut board = board_with(&[(1, 1), (1, 2)]);
        let belt = FieldAction::conveyor_belt(Heading::South);

        assert!(!belt.activate(&mut board, Position::new(1, 1)));
        assert_eq!(board.space(1, 1).unwrap().player(), Some(PlayerId::new(0)));
        assert_eq!(board.space(1, 2).unwrap().player(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_conveyor_on_empty_space() {
        let mut board = board_with(&[]);
        let belt = FieldAction::conveyor_belt(Heading::North);
        assert!(!belt.activate(&mut board, Position::new(2, 2)));
    }

    #[test]
    fn test_checkpoint_updates_progress_only() {
        let mut board = board_with(&[(3, 3)]);
        let first = FieldAction::checkpoint(1);
        let third = FieldAction::checkpoint(3);

        assert!(!third.activate(&mut board, Position::new(3, 3)));
        assert_eq!(board.player(PlayerId::new(0)).unwrap().collected_checkpoints(), 0);

        assert!(!first.activate(&mut board, Position::new(3, 3)));
        assert_eq!(board.player(PlayerId::new(0)).unwrap().collected_checkpoints(), 1);
        assert_eq!(board.space(3, 3).unwrap().player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(FieldAction::conveyor_belt(Heading::East).kind(), FieldActionKind::ConveyorBelt);
        assert_eq!(FieldAction::checkpoint(2).kind(), FieldActionKind::Checkpoint);
    }
}
