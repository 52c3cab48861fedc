//! The game board: grid, players, phase and round counters.
//!
//! ## Occupancy
//!
//! Spaces record their occupant by `PlayerId`, players record their
//! `Position`. Both sides are only ever changed together by
//! [`Board::place_player`], which clears the source space before filling the
//! destination, so a robot is never on two spaces and a space never holds two
//! robots.
//!
//! ## Notifications
//!
//! Every setter that changes observable state emits one [`BoardEvent`] after
//! the change is committed. Setters that would not change anything emit
//! nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::space::Space;
use super::Phase;
use crate::cards::{CommandCard, CommandCardField, FieldKind, FieldRef};
use crate::core::{
    BoardEvent, GameError, Heading, Observers, Player, PlayerId, Position, SubscriptionId, NO_REGISTERS,
};

/// Board name used when no layout name is given.
pub const DEFAULT_BOARD_NAME: &str = "defaultboard";

/// A RoboRally board: a fixed-size toroidal grid of spaces plus the game
/// state that lives alongside it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    name: String,
    game_id: Option<u32>,

    /// Column-major: the space at `(x, y)` is `spaces[x * height + y]`.
    spaces: Vec<Space>,

    /// Registration order is turn order.
    players: Vec<Player>,
    current: Option<PlayerId>,

    phase: Phase,
    step: usize,
    step_mode: bool,
    moves: u32,

    #[serde(skip)]
    observers: Observers,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize, name: impl Into<String>) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be non-zero");

        let mut spaces = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                spaces.push(Space::new(Position::new(x, y)));
            }
        }

        Self {
            width,
            height,
            name: name.into(),
            game_id: None,
            spaces,
            players: Vec::new(),
            current: None,
            phase: Phase::Initialisation,
            step: 0,
            step_mode: false,
            moves: 0,
            observers: Observers::new(),
        }
    }

    /// Create an empty board named [`DEFAULT_BOARD_NAME`].
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height, DEFAULT_BOARD_NAME)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Layout name; selects the win condition.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Game id ===

    #[must_use]
    pub fn game_id(&self) -> Option<u32> {
        self.game_id
    }

    /// Assign the persistent game id.
    ///
    /// The first assignment sticks. Repeating it is accepted, a different id
    /// is rejected.
    pub fn set_game_id(&mut self, id: u32) -> Result<(), GameError> {
        match self.game_id {
            None => {
                self.game_id = Some(id);
                self.notify(BoardEvent::GameIdAssigned(id));
                Ok(())
            }
            Some(current) if current == id => Ok(()),
            Some(current) => Err(GameError::GameIdReassigned {
                current,
                requested: id,
            }),
        }
    }

    // === Spaces ===

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// The space at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn space(&self, x: usize, y: usize) -> Option<&Space> {
        self.index(x, y).map(|i| &self.spaces[i])
    }

    #[must_use]
    pub fn space_at(&self, position: Position) -> Option<&Space> {
        self.space(position.x, position.y)
    }

    /// Mutable access for layout setup (walls, field actions).
    pub fn space_mut(&mut self, x: usize, y: usize) -> Option<&mut Space> {
        self.index(x, y).map(|i| &mut self.spaces[i])
    }

    /// All positions, outer loop over `x`, inner over `y`.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Position::new(x, y)))
    }

    /// The space one step from `position` in `heading`.
    ///
    /// The board wraps around at every edge. Walls are not considered here;
    /// movement rules check them separately.
    #[must_use]
    pub fn neighbour(&self, position: Position, heading: Heading) -> Option<&Space> {
        if self.index(position.x, position.y).is_none() {
            return None;
        }
        let Position { x, y } = position;
        let (x, y) = match heading {
            Heading::South => (x, (y + 1) % self.height),
            Heading::West => ((x + self.width - 1) % self.width, y),
            Heading::North => (x, (y + self.height - 1) % self.height),
            Heading::East => ((x + 1) % self.width, y),
        };
        self.space(x, y)
    }

    // === Players ===

    /// Register a player. Registration order is turn order.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        assert!(self.players.len() < 255, "At most 255 players supported");

        let id = PlayerId::new(self.players.len() as u8);
        debug!(player = %id, name = player.name(), "player added");
        self.players.push(player);
        self.notify(BoardEvent::PlayerAdded(id));
        id
    }

    #[must_use]
    pub fn players_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate over registered player ids in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// A player by id, or `None` if not registered.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Mutations through this handle do not notify observers.
    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Turn-order index of a registered player.
    #[must_use]
    pub fn player_number(&self, id: PlayerId) -> Option<usize> {
        self.contains_player(id).then(|| id.index())
    }

    #[must_use]
    pub fn contains_player(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Make `id` the current player.
    ///
    /// No-op if `id` is already current or is not registered.
    pub fn set_current_player(&mut self, id: PlayerId) {
        if self.current != Some(id) && self.contains_player(id) {
            self.current = Some(id);
            self.notify(BoardEvent::CurrentPlayerChanged(id));
        }
    }

    /// The player after the current one in turn order, wrapping around.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        let current = self.current?;
        let next = (current.index() + 1) % self.players.len();
        Some(PlayerId::new(next as u8))
    }

    /// Move a robot to `target`, or take it off the board with `None`.
    ///
    /// Fails without side effects if the player is unknown, the target is
    /// outside the board, or the target holds another robot.
    pub fn place_player(&mut self, id: PlayerId, target: Option<Position>) -> bool {
        let Some(player) = self.player(id) else {
            return false;
        };
        let source = player.position();
        if source == target {
            return true;
        }

        let target_index = match target {
            Some(pos) => match self.index(pos.x, pos.y) {
                Some(i) if self.spaces[i].is_free() => Some(i),
                _ => return false,
            },
            None => None,
        };

        if let Some(from) = source {
            if let Some(i) = self.index(from.x, from.y) {
                self.spaces[i].set_player(None);
            }
        }
        if let Some(i) = target_index {
            self.spaces[i].set_player(Some(id));
        }
        if let Some(player) = self.player_mut(id) {
            player.set_position(target);
        }
        trace!(player = %id, ?source, ?target, "robot placed");

        if let Some(from) = source {
            self.notify(BoardEvent::SpaceChanged(from));
        }
        if let Some(to) = target {
            self.notify(BoardEvent::SpaceChanged(to));
        }
        true
    }

    /// Turn a robot to face `heading`.
    pub fn set_heading(&mut self, id: PlayerId, heading: Heading) {
        let Some(player) = self.player_mut(id) else {
            return;
        };
        if player.heading() != heading {
            player.set_heading(heading);
            self.notify(BoardEvent::HeadingChanged { player: id, heading });
        }
    }

    /// Record a checkpoint visit. See [`Player::pass_checkpoint`].
    pub fn pass_checkpoint(&mut self, id: PlayerId, number: u32) -> bool {
        let Some(player) = self.player_mut(id) else {
            return false;
        };
        let reached = player.pass_checkpoint(number);
        if reached {
            debug!(player = %id, number, "checkpoint reached");
            self.notify(BoardEvent::CheckpointReached { player: id, number });
        } else {
            trace!(player = %id, number, "checkpoint out of order, ignored");
        }
        reached
    }

    // === Card fields ===

    /// The field addressed by `field`, or `None` if out of range.
    #[must_use]
    pub fn field(&self, field: FieldRef) -> Option<&CommandCardField> {
        let player = self.player(field.player)?;
        match field.kind {
            FieldKind::Program => player.program_field(field.index),
            FieldKind::Hand => player.card_field(field.index),
        }
    }

    fn field_mut(&mut self, field: FieldRef) -> Option<&mut CommandCardField> {
        let player = self.player_mut(field.player)?;
        match field.kind {
            FieldKind::Program => player.program_field_mut(field.index),
            FieldKind::Hand => player.card_field_mut(field.index),
        }
    }

    /// Put a card into (or clear) a field. Returns false if the field does
    /// not exist.
    pub fn set_field_card(&mut self, field: FieldRef, card: Option<CommandCard>) -> bool {
        let Some(slot) = self.field_mut(field) else {
            return false;
        };
        if slot.card() != card {
            slot.set_card(card);
            self.notify(BoardEvent::FieldChanged(field));
        }
        true
    }

    pub fn set_field_visible(&mut self, field: FieldRef, visible: bool) -> bool {
        let Some(slot) = self.field_mut(field) else {
            return false;
        };
        if slot.is_visible() != visible {
            slot.set_visible(visible);
            self.notify(BoardEvent::FieldChanged(field));
        }
        true
    }

    // === Phase and counters ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Change the phase. `Finished` is terminal and cannot be left.
    pub fn set_phase(&mut self, phase: Phase) {
        if phase == self.phase {
            return;
        }
        if self.phase == Phase::Finished {
            trace!(requested = ?phase, "game finished, phase change ignored");
            return;
        }
        debug!(from = ?self.phase, to = ?phase, "phase changed");
        self.phase = phase;
        self.notify(BoardEvent::PhaseChanged(phase));
    }

    /// Current register during activation.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn set_step(&mut self, step: usize) {
        if step != self.step {
            self.step = step;
            self.notify(BoardEvent::StepChanged(step));
        }
    }

    #[must_use]
    pub fn is_step_mode(&self) -> bool {
        self.step_mode
    }

    pub fn set_step_mode(&mut self, step_mode: bool) {
        if step_mode != self.step_mode {
            self.step_mode = step_mode;
            self.notify(BoardEvent::StepModeChanged(step_mode));
        }
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
        self.notify(BoardEvent::MovesChanged(moves));
    }

    pub fn increment_moves(&mut self) {
        self.set_moves(self.moves + 1);
    }

    pub fn decrement_moves(&mut self) {
        self.set_moves(self.moves.saturating_sub(1));
    }

    // === Observers ===

    /// Listen to every subsequent change on this board.
    pub fn subscribe(&mut self, listener: impl FnMut(&BoardEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self, event: BoardEvent) {
        self.observers.emit(&event);
    }

    // === Consistency ===

    /// Check the invariants a board built through its own API always holds.
    ///
    /// Used on boards that did not come from [`Board::new`], such as decoded
    /// save games:
    /// - the grid has `width * height` spaces, each at its own coordinates
    /// - `current` and every occupant are registered players
    /// - a space names a player exactly when that player stands on it
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |message: String| Err(GameError::Decode(message));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("board size {}x{} is empty", self.width, self.height));
        }
        if self.width.checked_mul(self.height) != Some(self.spaces.len()) {
            return invalid(format!(
                "{} spaces for a {}x{} board",
                self.spaces.len(),
                self.width,
                self.height
            ));
        }
        if self.players.len() > usize::from(u8::MAX) {
            return invalid(format!("{} players registered", self.players.len()));
        }
        if self.step >= NO_REGISTERS {
            return invalid(format!("step {} out of range", self.step));
        }
        if let Some(id) = self.current.filter(|&id| !self.contains_player(id)) {
            return invalid(format!("current player {id} is not registered"));
        }

        for (expected, space) in self.positions().zip(&self.spaces) {
            if space.position() != expected {
                return invalid(format!("space {} stored at {expected}", space.position()));
            }
            let Some(id) = space.player() else {
                continue;
            };
            match self.player(id) {
                None => return invalid(format!("space {expected} holds unregistered {id}")),
                Some(player) if player.position() != Some(expected) => {
                    return invalid(format!("space {expected} holds {id}, who is elsewhere"));
                }
                Some(_) => {}
            }
        }

        for (id, player) in self.player_ids().zip(&self.players) {
            let Some(position) = player.position() else {
                continue;
            };
            let occupant = self.space_at(position).and_then(Space::player);
            if occupant != Some(id) {
                return invalid(format!("{id} stands on {position}, which does not hold them"));
            }
        }
        Ok(())
    }

    // === Status ===

    /// One-line status for the presentation layer.
    #[must_use]
    pub fn status_message(&self) -> String {
        let player = self
            .current
            .and_then(|id| self.player(id))
            .map_or("-", Player::name);
        format!(
            "Phase = {:?}. Player = {}. Step = {}. Moves = {}",
            self.phase, player, self.step, self.moves
        )
    }

    /// Checkpoint progress of the current player.
    #[must_use]
    pub fn checkpoints_message(&self) -> String {
        match self.current.and_then(|id| self.player(id)) {
            Some(player) => format!(
                "Player = {} Checkpoints = {}",
                player.name(),
                player.collected_checkpoints()
            ),
            None => "No current player".to_string(),
        }
    }
}
