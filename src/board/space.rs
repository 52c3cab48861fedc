//! A single cell of the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::actions::FieldAction;
use crate::core::{Heading, PlayerId, Position};

/// One grid cell: walls, field actions and at most one robot.
///
/// Coordinates are fixed at construction. The occupant is a reference by id;
/// the space does not own the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    position: Position,
    walls: SmallVec<[Heading; 4]>,
    actions: SmallVec<[FieldAction; 2]>,
    player: Option<PlayerId>,
}

impl Space {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            walls: SmallVec::new(),
            actions: SmallVec::new(),
            player: None,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn x(&self) -> usize {
        self.position.x
    }

    #[must_use]
    pub const fn y(&self) -> usize {
        self.position.y
    }

    // === Walls ===

    pub fn walls(&self) -> &[Heading] {
        &self.walls
    }

    #[must_use]
    pub fn has_wall(&self, heading: Heading) -> bool {
        self.walls.contains(&heading)
    }

    /// Add a wall on the given side. Adding an existing wall is a no-op.
    pub fn add_wall(&mut self, heading: Heading) {
        if !self.has_wall(heading) {
            self.walls.push(heading);
        }
    }

    // === Field actions ===

    /// Field actions in activation order.
    pub fn actions(&self) -> &[FieldAction] {
        &self.actions
    }

    pub fn add_action(&mut self, action: FieldAction) {
        self.actions.push(action);
    }

    // === Occupant ===

    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.player.is_none()
    }

    /// Occupancy is kept in sync with player positions by the board.
    pub(crate) fn set_player(&mut self, player: Option<PlayerId>) {
        self.player = player;
    }
}
