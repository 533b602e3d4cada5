//! Marks, squares and the rules that only look at one board.

use crate::error::ParseMarkError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl Mark {
    /// The other player's mark
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Single-letter name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Self::X),
            "O" | "o" => Ok(Self::O),
            other => Err(ParseMarkError(other.to_string())),
        }
    }
}

/// One square: empty or marked
pub type Cell = Option<Mark>;

/// The nine squares, row by row
pub type Squares = [Cell; 9];

/// Number of squares on the board
pub const BOARD_SIZE: usize = 9;

/// Every winning line, checked in this order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Whether `position` names an empty square
#[must_use]
pub fn is_legal_move(squares: &Squares, position: usize) -> bool {
    squares.get(position).is_some_and(Option::is_none)
}

/// The mark occupying a full line, if any
///
/// Lines are checked in [`LINES`] order and the first full one wins.
#[must_use]
pub fn winner(squares: &Squares) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match (squares[a], squares[b], squares[c]) {
        (Some(x), Some(y), Some(z)) if x == y && y == z => Some(x),
        _ => None,
    })
}

/// Whether every square is taken
#[must_use]
pub fn is_full(squares: &Squares) -> bool {
    squares.iter().all(Option::is_some)
}

/// Display adapter drawing squares as a 3×3 grid
///
/// ```
/// use tictactoe::{Board, Mark};
///
/// let mut squares = [None; 9];
/// squares[4] = Some(Mark::X);
/// assert_eq!(Board(&squares).to_string(), " . | . | . \n---+---+---\n . | X | . \n---+---+---\n . | . | . ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Board<'a>(pub &'a Squares);

impl std::fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.0.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n---+---+---\n")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                write!(f, " {} ", cell.map_or(".", Mark::as_str))?;
            }
        }
        Ok(())
    }
}
