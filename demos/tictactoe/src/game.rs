//! Game history, time travel and move application.
//!
//! A [`Game`] keeps every board it has been through as a [`Snapshot`], plus a
//! cursor naming the snapshot currently shown. Playing from an earlier
//! snapshot drops every snapshot after the cursor before appending the new
//! one, unless [`PastSnapshotMoves::Ignore`] is configured, in which case
//! only the latest snapshot accepts moves.

use crate::board::{is_full, is_legal_move, winner, Mark, Squares, BOARD_SIZE};
use crate::config::{GameConfig, PastSnapshotMoves, PostWinMoves};
use crate::error::{GameError, MoveError};
use serde::{Deserialize, Serialize};

/// One board in the history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The nine squares
    pub squares: Squares,
    /// Mark that plays next from this board
    pub next_mark: Mark,
    /// Winner on this board, if any
    pub winner: Option<Mark>,
}

impl Snapshot {
    /// The empty board with `first_mark` to play
    #[must_use]
    pub const fn empty(first_mark: Mark) -> Self {
        Self {
            squares: [None; BOARD_SIZE],
            next_mark: first_mark,
            winner: None,
        }
    }

    /// Board after `next_mark` plays `position`. Legality is not checked.
    fn play(&self, position: usize) -> Self {
        let mut squares = self.squares;
        squares[position] = Some(self.next_mark);
        Self {
            squares,
            next_mark: self.next_mark.opponent(),
            winner: winner(&squares),
        }
    }

    /// Derived status of this board
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if is_full(&self.squares) => GameStatus::Drawn,
            None => GameStatus::InProgress { next: self.next_mark },
        }
    }
}

/// Status of a board, derived from its squares
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and squares left
    InProgress {
        /// Mark to play
        next: Mark,
    },
    /// A line was completed
    Won(Mark),
    /// Every square taken, no line
    Drawn,
}

/// Check a move against the snapshot at `cursor` and build the next one.
fn next_snapshot(
    history: &[Snapshot],
    cursor: usize,
    position: usize,
    config: &GameConfig,
) -> Result<Snapshot, MoveError> {
    let len = history.len();
    let stale = MoveError::StaleCursor { cursor, len };
    let Some(current) = history.get(cursor) else {
        return Err(stale);
    };
    if cursor + 1 != len && config.past_snapshot_moves == PastSnapshotMoves::Ignore {
        return Err(stale);
    }

    if position >= BOARD_SIZE {
        return Err(MoveError::OutOfRange(position));
    }
    if !is_legal_move(&current.squares, position) {
        return Err(MoveError::Occupied(position));
    }
    if let (Some(mark), PostWinMoves::Reject) = (current.winner, config.post_win_moves) {
        return Err(MoveError::GameOver(mark));
    }

    Ok(current.play(position))
}

/// Apply a move to an owned history under the default rules
///
/// Returns the new history and cursor, or the inputs unchanged when the move
/// is not allowed. See [`apply_move_with`].
#[must_use]
pub fn apply_move(history: Vec<Snapshot>, cursor: usize, position: usize) -> (Vec<Snapshot>, usize) {
    apply_move_with(history, cursor, position, &GameConfig::default())
}

/// Apply a move to an owned history under `config`
///
/// The move is applied only if `position` is an empty square of
/// `history[cursor]` and the configured policies allow it. Snapshots after
/// `cursor` are dropped before the new one is appended.
#[must_use]
pub fn apply_move_with(
    mut history: Vec<Snapshot>,
    cursor: usize,
    position: usize,
    config: &GameConfig,
) -> (Vec<Snapshot>, usize) {
    match next_snapshot(&history, cursor, position, config) {
        Ok(next) => {
            history.truncate(cursor + 1);
            history.push(next);
            let cursor = history.len() - 1;
            (history, cursor)
        },
        Err(reason) => {
            tracing::debug!(%reason, position, "Move rejected");
            (history, cursor)
        },
    }
}

/// Validate a jump target against a history length
///
/// # Errors
///
/// Returns [`GameError::JumpOutOfRange`] if `target >= history_len`.
pub const fn jump_to(history_len: usize, target: usize) -> Result<usize, GameError> {
    if target < history_len {
        Ok(target)
    } else {
        Err(GameError::JumpOutOfRange {
            target,
            len: history_len,
        })
    }
}

/// A game: its full history and the snapshot being viewed
///
/// # Example
///
/// ```
/// use tictactoe::{Game, GameStatus, Mark};
///
/// let mut game = Game::new();
/// for position in [0, 3, 1, 4, 2] {
///     assert!(game.apply_move(position));
/// }
/// assert_eq!(game.status(), GameStatus::Won(Mark::O));
/// assert_eq!(game.status_line(), "Winner: O");
///
/// game.jump_to(2).unwrap();
/// assert_eq!(game.status_line(), "Next move: O");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    history: Vec<Snapshot>,
    cursor: usize,
    config: GameConfig,
}

impl Game {
    /// A new game with the default configuration (`O` starts)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A new game with `config`
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            history: vec![Snapshot::empty(config.first_mark)],
            cursor: 0,
            config,
        }
    }

    /// Every snapshot, oldest first
    #[must_use]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the viewed snapshot
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The configuration this game was created with
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The viewed snapshot
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        // cursor < history.len() and history is never empty
        &self.history[self.cursor]
    }

    /// Status of the viewed snapshot
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.current().status()
    }

    /// Whether the viewed snapshot is the latest one
    #[must_use]
    pub fn at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Play `position` for the mark to move
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing why the move was refused. The game
    /// is unchanged in that case.
    pub fn try_apply_move(&mut self, position: usize) -> Result<(), MoveError> {
        let next = next_snapshot(&self.history, self.cursor, position, &self.config)?;
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        tracing::trace!(position, cursor = self.cursor, "Move applied");
        Ok(())
    }

    /// Play `position` for the mark to move
    ///
    /// Returns `false`, leaving the game unchanged, if the move is refused.
    pub fn apply_move(&mut self, position: usize) -> bool {
        match self.try_apply_move(position) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(%reason, position, "Move rejected");
                false
            },
        }
    }

    /// View snapshot `target`
    ///
    /// History is kept until the next move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::JumpOutOfRange`] if there is no such snapshot; the
    /// cursor is unchanged.
    pub fn jump_to(&mut self, target: usize) -> Result<(), GameError> {
        self.cursor = jump_to(self.history.len(), target)?;
        Ok(())
    }

    /// Drop every snapshot after the cursor, making the viewed one the latest
    pub fn branch_here(&mut self) {
        self.history.truncate(self.cursor + 1);
    }

    /// One label per snapshot: `Go to game start`, then `Go to move #n`
    #[must_use]
    pub fn move_descriptions(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|index| {
                if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                }
            })
            .collect()
    }

    /// `Winner: X`, `Draw` or `Next move: O` for the viewed snapshot
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(mark) => format!("Winner: {mark}"),
            GameStatus::Drawn => "Draw".to_string(),
            GameStatus::InProgress { next } => format!("Next move: {next}"),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
