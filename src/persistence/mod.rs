//! Save and load a running game.
//!
//! A snapshot holds the board (spaces, players, registers, hands, phase,
//! step, checkpoint progress), the configuration and the dealer's RNG
//! position, so a restored game deals the same cards as the original would
//! have. Observers are not saved; the host re-subscribes after loading.
//!
//! Two encodings are offered: compact `bincode` bytes and readable JSON.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::controller::GameController;
use crate::core::{GameConfig, GameError, GameRng, GameRngState};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    board: &'a Board,
    config: &'a GameConfig,
    rng: GameRngState,
}

/// A decoded save game.
///
/// The decoders check [`Board::validate`] before handing out a controller;
/// a snapshot deserialized by other means should be checked the same way.
#[derive(Debug, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub config: GameConfig,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Rebuild a controller from this snapshot.
    pub fn into_controller(self) -> GameController<GameRng> {
        let dealer = GameRng::from_state(&self.rng);
        GameController::with_dealer(self.board, self.config, dealer)
    }
}

fn snapshot(controller: &GameController<GameRng>) -> SnapshotRef<'_> {
    SnapshotRef {
        board: controller.board(),
        config: controller.config(),
        rng: controller.dealer().state(),
    }
}

/// Encode a game as `bincode` bytes.
pub fn to_bytes(controller: &GameController<GameRng>) -> Result<Vec<u8>, GameError> {
    Ok(bincode::serialize(&snapshot(controller))?)
}

/// Decode a game saved with [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<GameController<GameRng>, GameError> {
    restore(bincode::deserialize(bytes)?)
}

/// Encode a game as pretty-printed JSON.
pub fn to_json(controller: &GameController<GameRng>) -> Result<String, GameError> {
    Ok(serde_json::to_string_pretty(&snapshot(controller))?)
}

/// Decode a game saved with [`to_json`].
pub fn from_json(json: &str) -> Result<GameController<GameRng>, GameError> {
    restore(serde_json::from_str(json)?)
}

fn restore(snapshot: GameSnapshot) -> Result<GameController<GameRng>, GameError> {
    snapshot.board.validate()?;
    Ok(snapshot.into_controller())
}
