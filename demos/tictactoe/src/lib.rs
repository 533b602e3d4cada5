//! Tic-tac-toe with full move history and time travel.
//!
//! - [`board`]: marks, legality and win detection on a single board
//! - [`game`]: the history of snapshots and the cursor over it
//! - [`config`]: starting mark and move policies, loadable from the environment
//! - [`reducer`]: [`GameReducer`], so a [`Store`](statecraft_runtime::Store)
//!   can hold a game
//!
//! ```
//! use tictactoe::{GameAction, GameReducer};
//! use statecraft_runtime::Store;
//!
//! let store = Store::new(GameReducer::default());
//! store.dispatch(GameAction::Play(4));
//! store.dispatch(GameAction::Play(4));
//!
//! let game = store.get_state();
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.status_line(), "Next move: X");
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod reducer;

pub use board::{is_legal_move, winner, Board, Cell, Mark, Squares, BOARD_SIZE, LINES};
pub use config::{GameConfig, PastSnapshotMoves, PostWinMoves};
pub use error::{ConfigError, GameError, MoveError, ParseMarkError};
pub use game::{apply_move, apply_move_with, jump_to, Game, GameStatus, Snapshot};
pub use reducer::{GameAction, GameReducer};
