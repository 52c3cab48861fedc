//! Recoverable engine errors.
//!
//! Blocked moves and out-of-order checkpoints are not errors; they are
//! reported as `false`. Engine misuse (stepping outside activation) panics.

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game id is already {current}, cannot reassign it to {requested}")]
    GameIdReassigned { current: u32, requested: u32 },

    #[error("invalid turn choice '{0}', expected 'left' or 'right'")]
    InvalidTurnChoice(String),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The snapshot parsed but does not describe a consistent board.
    #[error("inconsistent game snapshot: {0}")]
    Decode(String),
}
