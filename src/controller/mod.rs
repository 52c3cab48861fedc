//! Game controller: the phase state machine.
//!
//! The controller owns the [`Board`] and drives it through the phases:
//!
//! 1. **Programming**: registers are cleared and every hand field gets a
//!    freshly dealt card. Players move cards into their registers with
//!    [`GameController::move_cards`].
//! 2. **Activation**: registers are executed step by step. Within a step
//!    every player runs the card in that register, in turn order. When the
//!    last register of the last player has run, conveyor belts and then
//!    checkpoints are swept and a new programming phase starts.
//! 3. **Player interaction**: executing an interactive card suspends
//!    activation until [`GameController::lor`] supplies the choice.
//!
//! Calling the step machinery outside activation, or with no current
//! player, is a bug in the caller and panics.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::actions::{FieldAction, FieldActionKind};
use crate::board::{Board, Phase};
use crate::cards::{Command, FieldRef, TurnChoice};
use crate::core::{CardDealer, GameConfig, GameRng, PlayerId, Position, NO_CARDS, NO_REGISTERS};
use crate::movement;

/// Drives a game on one board.
///
/// `D` is the card source for programming phases; it defaults to a seeded
/// [`GameRng`].
#[derive(Debug)]
pub struct GameController<D = GameRng> {
    board: Board,
    config: GameConfig,
    dealer: D,
}

impl GameController<GameRng> {
    /// Controller with the default configuration.
    pub fn new(board: Board) -> Self {
        Self::with_config(board, GameConfig::default())
    }

    /// Controller dealing from a `GameRng` seeded with `config.seed`.
    pub fn with_config(board: Board, config: GameConfig) -> Self {
        let dealer = GameRng::new(config.seed);
        Self::with_dealer(board, config, dealer)
    }
}

impl<D: CardDealer> GameController<D> {
    /// Controller with an explicit card source.
    pub fn with_dealer(board: Board, config: GameConfig, dealer: D) -> Self {
        Self {
            board,
            config,
            dealer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dealer(&self) -> &D {
        &self.dealer
    }

    /// Take the board and dealer back out of the controller.
    pub fn into_parts(self) -> (Board, D) {
        (self.board, self.dealer)
    }

    /// Move the current player straight to `target` and pass the turn.
    ///
    /// Ignored if the target is occupied or there is no current player.
    pub fn move_current_player_to_space(&mut self, target: Position) -> bool {
        let Some(current) = self.board.current_player() else {
            return false;
        };
        if !self.board.space_at(target).is_some_and(|s| s.is_free()) {
            return false;
        }
        if !self.board.place_player(current, Some(target)) {
            return false;
        }
        self.board.increment_moves();
        if let Some(next) = self.board.next_player() {
            self.board.set_current_player(next);
        }
        true
    }

    // === Programming ===

    /// Clear all registers and deal a fresh hand to every player.
    pub fn start_programming_phase(&mut self) {
        if self.board.phase() == Phase::Finished {
            return;
        }
        self.board.set_phase(Phase::Programming);
        self.board.set_current_player(PlayerId::new(0));
        self.board.set_step(0);

        let players: Vec<PlayerId> = self.board.player_ids().collect();
        for player in players {
            for register in 0..NO_REGISTERS {
                let field = FieldRef::program(player, register);
                self.board.set_field_card(field, None);
                self.board.set_field_visible(field, true);
            }
            for slot in 0..NO_CARDS {
                let field = FieldRef::hand(player, slot);
                let card = self.dealer.deal();
                self.board.set_field_card(field, Some(card));
                self.board.set_field_visible(field, true);
            }
        }
        debug!(players = self.board.players_count(), "programming phase started");
    }

    /// End programming: hide every register but the first and start
    /// activation with the first player.
    pub fn finish_programming_phase(&mut self) {
        self.make_program_fields_invisible();
        self.make_program_fields_visible(0);
        self.board.set_phase(Phase::Activation);
        self.board.set_current_player(PlayerId::new(0));
        self.board.set_step(0);
    }

    /// Move a card from `source` into the empty field `target`.
    ///
    /// Returns false, changing nothing, unless `source` holds a card and
    /// `target` exists and is empty.
    pub fn move_cards(&mut self, source: FieldRef, target: FieldRef) -> bool {
        let Some(card) = self.board.field(source).and_then(|f| f.card()) else {
            return false;
        };
        if !self.board.field(target).is_some_and(|f| f.is_empty()) {
            return false;
        }
        self.board.set_field_card(target, Some(card));
        self.board.set_field_card(source, None);
        true
    }

    fn make_program_fields_visible(&mut self, register: usize) {
        if register >= NO_REGISTERS {
            return;
        }
        let players: Vec<PlayerId> = self.board.player_ids().collect();
        for player in players {
            self.board.set_field_visible(FieldRef::program(player, register), true);
        }
    }

    fn make_program_fields_invisible(&mut self) {
        let players: Vec<PlayerId> = self.board.player_ids().collect();
        for player in players {
            for register in 0..NO_REGISTERS {
                self.board.set_field_visible(FieldRef::program(player, register), false);
            }
        }
    }

    // === Activation ===

    /// Run programs until activation pauses for input or the round ends,
    /// then check for a winner.
    pub fn execute_programs(&mut self) -> Option<String> {
        self.board.set_step_mode(false);
        self.continue_programs();
        self.finish_game_phase()
    }

    /// Execute exactly one player's card, then check for a winner.
    pub fn execute_step(&mut self) -> Option<String> {
        self.board.set_step_mode(true);
        self.execute_next_step(false);
        self.finish_game_phase()
    }

    fn continue_programs(&mut self) {
        loop {
            self.execute_next_step(false);
            if self.board.phase() != Phase::Activation || self.board.is_step_mode() {
                break;
            }
        }
    }

    /// Execute the current player's card for the current step and advance.
    ///
    /// With `resolved` set the card's choice has already been applied by
    /// [`lor`](Self::lor), so the card is not executed again.
    fn execute_next_step(&mut self, resolved: bool) {
        assert!(
            self.board.phase() == Phase::Activation,
            "Cannot execute a step in phase {:?}",
            self.board.phase()
        );
        let Some(player) = self.board.current_player() else {
            panic!("Cannot execute a step without a current player");
        };
        let step = self.board.step();
        assert!(step < NO_REGISTERS, "Step {step} out of range");

        let card = self
            .board
            .field(FieldRef::program(player, step))
            .and_then(|f| f.card());
        if let Some(card) = card {
            if card.command.is_interactive() && !resolved {
                debug!(player = %player, step, "waiting for player interaction");
                self.board.set_phase(Phase::PlayerInteraction);
                return;
            }
            if !resolved {
                trace!(player = %player, step, command = ?card.command, "executing card");
                self.execute_command(player, card.command);
            }
        }

        self.advance(player, step);
    }

    fn advance(&mut self, player: PlayerId, step: usize) {
        let next = player.index() + 1;
        if next < self.board.players_count() {
            self.board.set_current_player(PlayerId::new(next as u8));
            return;
        }

        let step = step + 1;
        if step < NO_REGISTERS {
            self.make_program_fields_visible(step);
            self.board.set_step(step);
            self.board.set_current_player(PlayerId::new(0));
        } else {
            let moved = self.activate_conveyor_belts();
            self.activate_checkpoints();
            debug!(moved, "round complete");
            self.start_programming_phase();
        }
    }

    /// Resolve a "left or right" choice for `player`.
    ///
    /// If activation is waiting on this player, the turn is applied and
    /// execution resumes; unless step mode is on it then runs on until the
    /// next pause. Outside an interaction the player is simply turned.
    pub fn lor(&mut self, player: PlayerId, choice: TurnChoice) -> Option<String> {
        if self.board.phase() != Phase::PlayerInteraction {
            self.execute_command(player, choice.command());
            return None;
        }
        if self.board.current_player() != Some(player) {
            warn!(player = %player, current = ?self.board.current_player(), "choice from a player who is not waiting");
            return None;
        }

        self.execute_command(player, choice.command());
        self.board.set_phase(Phase::Activation);
        self.execute_next_step(true);
        if self.board.phase() == Phase::Activation && !self.board.is_step_mode() {
            self.continue_programs();
        }
        self.finish_game_phase()
    }

    /// Apply a command's effect to `player`.
    ///
    /// Interactive commands have no direct effect; they are resolved through
    /// [`lor`](Self::lor).
    pub fn execute_command(&mut self, player: PlayerId, command: Command) {
        if !self.board.contains_player(player) {
            return;
        }
        match command {
            Command::Forward => {
                self.move_forward(player);
            }
            Command::FastForward => {
                self.fast_forward(player);
            }
            Command::Backward => {
                self.move_backward(player);
            }
            Command::Right => self.turn_right(player),
            Command::Left => self.turn_left(player),
            Command::UTurn => self.u_turn(player),
            Command::LeftOrRight => {}
        }
    }

    // === Movement ===

    pub fn move_forward(&mut self, player: PlayerId) -> bool {
        movement::move_forward(&mut self.board, player)
    }

    pub fn fast_forward(&mut self, player: PlayerId) -> bool {
        movement::fast_forward(&mut self.board, player)
    }

    pub fn move_backward(&mut self, player: PlayerId) -> bool {
        movement::move_backward(&mut self.board, player)
    }

    pub fn turn_right(&mut self, player: PlayerId) {
        movement::turn_right(&mut self.board, player);
    }

    pub fn turn_left(&mut self, player: PlayerId) {
        movement::turn_left(&mut self.board, player);
    }

    pub fn u_turn(&mut self, player: PlayerId) {
        movement::u_turn(&mut self.board, player);
    }

    // === Field actions ===

    /// Sweep all conveyor belts. Returns how many robots were moved.
    pub fn activate_conveyor_belts(&mut self) -> usize {
        self.activate_field_actions(FieldActionKind::ConveyorBelt)
    }

    /// Sweep all checkpoints.
    pub fn activate_checkpoints(&mut self) {
        self.activate_field_actions(FieldActionKind::Checkpoint);
    }

    /// Apply every action of `kind`, outer loop over columns, inner over rows.
    fn activate_field_actions(&mut self, kind: FieldActionKind) -> usize {
        let positions: Vec<Position> = self.board.positions().collect();
        let mut acted = 0;
        for position in positions {
            let actions: SmallVec<[FieldAction; 2]> = match self.board.space_at(position) {
                Some(space) => SmallVec::from_slice(space.actions()),
                None => continue,
            };
            for action in actions.iter().filter(|a| a.kind() == kind) {
                if action.activate(&mut self.board, position) {
                    acted += 1;
                }
            }
        }
        acted
    }

    // === Winning ===

    /// Check the board's win condition.
    ///
    /// If a robot stands on the goal cell with exactly the required number
    /// of checkpoints, the game is finished and the winner's name returned.
    pub fn finish_game_phase(&mut self) -> Option<String> {
        let win = self.config.win_condition(self.board.name())?;
        let occupant = self.board.space_at(win.goal)?.player()?;
        let player = self.board.player(occupant)?;
        if player.collected_checkpoints() != win.required_checkpoints {
            return None;
        }

        let name = player.name().to_string();
        if self.board.phase() != Phase::Finished {
            info!(winner = %name, board = self.board.name(), "game won");
        }
        self.board.set_phase(Phase::Finished);
        Some(name)
    }
}
