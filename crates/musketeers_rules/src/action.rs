//! First-class move types for Three Musketeers.
//!
//! A move travels through three shapes: a raw [`MoveRequest`] as typed by a
//! player, a typed [`Move`] once its source and direction are known to make
//! sense, and a [`ValidatedMove`] once the board has confirmed it is legal.

use super::position::{Direction, Position};
use super::types::Side;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An unchecked proposal: raw indices and a raw direction letter.
///
/// Indices are signed because the input layer maps whatever the player
/// typed straight onto them; range checks happen during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row index (0 = `A`).
    pub row: i32,
    /// Column index (0 = `1`).
    pub col: i32,
    /// Direction letter as typed.
    pub direction: char,
}

impl MoveRequest {
    /// Creates a new request.
    pub fn new(row: i32, col: i32, direction: char) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mov: Move) -> Self {
        Self {
            row: mov.from.row() as i32,
            col: mov.from.col() as i32,
            direction: mov.direction.letter(),
        }
    }
}

/// A move with an on-board source and a real direction, not yet checked
/// against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the piece starts on.
    pub from: Position,
    /// Direction of the single step.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Position, direction: Direction) -> Self {
        Self { from, direction }
    }
}

impl TryFrom<MoveRequest> for Move {
    type Error = MoveError;

    /// Source bounds first, then the direction letter.
    fn try_from(request: MoveRequest) -> Result<Self, Self::Error> {
        let from = Position::from_signed(request.row, request.col).ok_or(MoveError::OutOfBounds)?;
        let direction =
            Direction::from_char(request.direction).ok_or(MoveError::InvalidDirection(request.direction))?;
        Ok(Self { from, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.direction)
    }
}

/// A move the board has accepted, with its destination resolved.
///
/// Serializable for logs and replays, but never deserialized: only the
/// validator hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct ValidatedMove {
    /// Side that made the move.
    side: Side,
    /// Source cell.
    from: Position,
    /// Destination cell.
    to: Position,
}

impl ValidatedMove {
    pub(crate) fn new(side: Side, from: Position, to: Position) -> Self {
        Self { side, from, to }
    }

    /// True for a Musketeer move, which always takes an enemy.
    pub fn is_capture(&self) -> bool {
        self.side == Side::Musketeers
    }
}

impl std::fmt::Display for ValidatedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.is_capture() { "takes" } else { "to" };
        write!(f, "{}: {} {} {}", self.side, self.from, verb, self.to)
    }
}

/// Why a move was refused.
///
/// None of these are fatal: the side to move simply tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source or the destination is off the board.
    #[display("This move gets out of the board")]
    OutOfBounds,

    /// The direction letter is not one of `U`, `D`, `L`, `R`.
    #[display("Invalid direction '{}'. Use L/l, R/r, U/u, or D/d", _0)]
    InvalidDirection(char),

    /// The source does not hold the mover's own piece.
    #[display("{} have no piece at {}", _0, _1)]
    NoPieceAtSource(Side, Position),

    /// The destination does not hold what this side must move onto.
    #[display("{} cannot move onto {}", _0, _1)]
    IllegalTarget(Side, Position),

    /// A winner has already been decided.
    #[display("The game is already over")]
    GameOver,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(&'static str),
}

impl std::error::Error for MoveError {}
