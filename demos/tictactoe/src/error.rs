//! Error types for the game.

use thiserror::Error;

/// Errors from game navigation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Jump target past the end of the history
    #[error("cannot jump to move {target}: history has {len} snapshots")]
    JumpOutOfRange {
        /// Requested snapshot index
        target: usize,
        /// Number of snapshots in the history
        len: usize,
    },
}

/// Why a move was not applied
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The cursor is not on the latest snapshot
    #[error("cannot move while viewing snapshot {cursor} of {len}")]
    StaleCursor {
        /// Current cursor
        cursor: usize,
        /// Number of snapshots in the history
        len: usize,
    },

    /// Position outside the board
    #[error("square {0} is off the board")]
    OutOfRange(usize),

    /// Square already taken
    #[error("square {0} is already taken")]
    Occupied(usize),

    /// The game already has a winner
    #[error("game already won by {0}")]
    GameOver(crate::board::Mark),
}

/// Unknown mark name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mark `{0}` (expected X or O)")]
pub struct ParseMarkError(pub String);

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that does not parse
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// What was expected
        reason: String,
    },
}
