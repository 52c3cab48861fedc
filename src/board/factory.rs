//! Named board layouts.

use tracing::info;

use super::Board;
use crate::actions::FieldAction;
use crate::core::{Heading, ADVANCED_BOARD, BASIC_BOARD};

/// Builds boards by layout name.
///
/// `"advanced"` gives the 15×8 layout; any other name gives the 8×8
/// `basic` layout. Both share the same walls and conveyor belts in the
/// north-west corner and differ in their checkpoint tracks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardFactory;

/// Wall side and belt heading for each belt space shared by all layouts.
const BELTS: [((usize, usize), Option<Heading>, Heading); 6] = [
    ((0, 0), Some(Heading::South), Heading::West),
    ((1, 0), Some(Heading::North), Heading::West),
    ((1, 1), Some(Heading::West), Heading::North),
    ((5, 5), Some(Heading::South), Heading::West),
    ((6, 5), None, Heading::West),
    ((7, 5), None, Heading::West),
];

/// Checkpoint cells in collection order; the last one is the goal.
const BASIC_CHECKPOINTS: [(usize, usize); 2] = [(3, 6), (7, 3)];
const ADVANCED_CHECKPOINTS: [(usize, usize); 3] = [(4, 2), (9, 1), (11, 6)];

impl BoardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a fresh board for the given layout name.
    pub fn create_board(&self, name: &str) -> Board {
        let (mut board, checkpoints): (Board, &[(usize, usize)]) = if name == ADVANCED_BOARD {
            (Board::new(15, 8, ADVANCED_BOARD), &ADVANCED_CHECKPOINTS[..])
        } else {
            (Board::new(8, 8, BASIC_BOARD), &BASIC_CHECKPOINTS[..])
        };
        info!(requested = name, layout = board.name(), width = board.width(), height = board.height(), "creating board");

        for ((x, y), wall, belt) in BELTS {
            if let Some(space) = board.space_mut(x, y) {
                if let Some(wall) = wall {
                    space.add_wall(wall);
                }
                space.add_action(FieldAction::conveyor_belt(belt));
            }
        }

        for (number, &(x, y)) in (1..).zip(checkpoints) {
            if let Some(space) = board.space_mut(x, y) {
                space.add_action(FieldAction::checkpoint(number));
            }
        }

        board
    }
}
