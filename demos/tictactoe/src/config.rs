//! Game configuration.
//!
//! Loads from environment variables with defaults matching the classic game:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `TICTACTOE_FIRST_MARK` | `X`, `O` | `O` |
//! | `TICTACTOE_POST_WIN_MOVES` | `reject`, `allow` | `reject` |
//! | `TICTACTOE_PAST_SNAPSHOT_MOVES` | `branch`, `ignore` | `branch` |

use crate::board::Mark;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable for the starting mark
pub const FIRST_MARK_VAR: &str = "TICTACTOE_FIRST_MARK";
/// Environment variable for the post-win policy
pub const POST_WIN_MOVES_VAR: &str = "TICTACTOE_POST_WIN_MOVES";
/// Environment variable for the past-snapshot policy
pub const PAST_SNAPSHOT_MOVES_VAR: &str = "TICTACTOE_PAST_SNAPSHOT_MOVES";

/// What happens to moves once a snapshot has a winner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostWinMoves {
    /// Moves after a win are illegal
    #[default]
    Reject,
    /// Only occupancy is checked; play continues on a won board
    Allow,
}

/// What happens to moves made while viewing an earlier snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastSnapshotMoves {
    /// Drop later snapshots and play from the viewed one
    #[default]
    Branch,
    /// Only the latest snapshot accepts moves
    Ignore,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark that plays first
    pub first_mark: Mark,
    /// Post-win move policy
    pub post_win_moves: PostWinMoves,
    /// Past-snapshot move policy
    pub past_snapshot_moves: PastSnapshotMoves,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mark: Mark::O,
            post_win_moves: PostWinMoves::Reject,
            past_snapshot_moves: PastSnapshotMoves::Branch,
        }
    }
}

impl GameConfig {
    /// Set the mark that plays first
    #[must_use]
    pub const fn with_first_mark(mut self, mark: Mark) -> Self {
        self.first_mark = mark;
        self
    }

    /// Set the post-win move policy
    #[must_use]
    pub const fn with_post_win_moves(mut self, policy: PostWinMoves) -> Self {
        self.post_win_moves = policy;
        self
    }

    /// Set the past-snapshot move policy
    #[must_use]
    pub const fn with_past_snapshot_moves(mut self, policy: PastSnapshotMoves) -> Self {
        self.past_snapshot_moves = policy;
        self
    }

    /// Load configuration from the process environment
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to something
    /// that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(FIRST_MARK_VAR) {
            config.first_mark = value.parse().map_err(|e: crate::error::ParseMarkError| {
                ConfigError::InvalidValue {
                    key: FIRST_MARK_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(POST_WIN_MOVES_VAR) {
            config.post_win_moves = match value.trim().to_ascii_lowercase().as_str() {
                "reject" => PostWinMoves::Reject,
                "allow" => PostWinMoves::Allow,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: POST_WIN_MOVES_VAR,
                        value,
                        reason: "expected `reject` or `allow`".to_string(),
                    });
                },
            };
        }

        if let Some(value) = lookup(PAST_SNAPSHOT_MOVES_VAR) {
            config.past_snapshot_moves = match value.trim().to_ascii_lowercase().as_str() {
                "branch" => PastSnapshotMoves::Branch,
                "ignore" => PastSnapshotMoves::Ignore,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: PAST_SNAPSHOT_MOVES_VAR,
                        value,
                        reason: "expected `branch` or `ignore`".to_string(),
                    });
                },
            };
        }

        tracing::debug!(?config, "Loaded game configuration");
        Ok(config)
    }
}
