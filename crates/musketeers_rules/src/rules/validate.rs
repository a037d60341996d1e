//! Move legality.

use super::super::action::{Move, MoveError, MoveRequest, ValidatedMove};
use super::super::{Board, Side};
use tracing::{debug, instrument};

/// Checks a raw request from start to finish.
///
/// Order matters and follows the player's view of the move: source on the
/// board, a real direction, destination on the board, then the occupancy
/// rule for the side to move.
///
/// # Errors
///
/// Returns the first [`MoveError`] the request runs into.
#[instrument(skip(board))]
pub fn validate_request(
    board: &Board,
    side: Side,
    request: MoveRequest,
) -> Result<ValidatedMove, MoveError> {
    let mov = Move::try_from(request)?;
    validate(board, side, mov)
}

/// Checks a typed move against the board for `side`.
///
/// Musketeers must land on an enemy (a capture); enemies must land on an
/// empty cell. The destination is resolved before either cell is read.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if the step leaves the board
/// - [`MoveError::NoPieceAtSource`] if the source is not `side`'s piece
/// - [`MoveError::IllegalTarget`] if the destination breaks the side's rule
#[instrument(skip(board), fields(from = %mov.from, direction = ?mov.direction))]
pub fn validate(board: &Board, side: Side, mov: Move) -> Result<ValidatedMove, MoveError> {
    let to = mov.from.step(mov.direction).ok_or(MoveError::OutOfBounds)?;

    if board.get(mov.from) != side.piece() {
        debug!(found = ?board.get(mov.from), "Source does not hold the mover's piece");
        return Err(MoveError::NoPieceAtSource(side, mov.from));
    }

    if board.get(to) != side.required_target() {
        debug!(%to, found = ?board.get(to), "Destination breaks the occupancy rule");
        return Err(MoveError::IllegalTarget(side, to));
    }

    Ok(ValidatedMove::new(side, mov.from, to))
}

/// Every legal move for `side`, in row-major source order and
/// `Up, Down, Left, Right` within a source.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, side: Side) -> Vec<ValidatedMove> {
    board
        .positions_of(side.piece())
        .flat_map(move |from| {
            crate::Direction::ALL
                .into_iter()
                .filter_map(move |direction| validate(board, side, Move::new(from, direction)).ok())
        })
        .collect()
}
