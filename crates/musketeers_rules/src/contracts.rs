//! Contract-based checks around applying a move.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} apply {Q}.

use super::action::{MoveError, ValidatedMove};
use super::invariants::{BoardInvariants, InvariantSet};
use super::{Board, Cell};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), MoveError>;
}

/// Precondition: the validated move still matches the board it is applied to.
pub struct MoveFitsBoard;

impl MoveFitsBoard {
    /// A validated move carries no reference to its board, so the cells are
    /// read again here.
    #[instrument(skip(board))]
    pub fn check(mov: &ValidatedMove, board: &Board) -> Result<(), MoveError> {
        let side = *mov.side();
        if board.get(*mov.from()) != side.piece() {
            return Err(MoveError::NoPieceAtSource(side, *mov.from()));
        }
        if board.get(*mov.to()) != side.required_target() {
            return Err(MoveError::IllegalTarget(side, *mov.to()));
        }
        Ok(())
    }
}

/// Postcondition: a capture removes exactly one enemy, a step removes none,
/// and the Musketeers stay at three.
pub struct PiecesAccountedFor;

impl PiecesAccountedFor {
    /// Compares piece counts across the move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Board, after: &Board, mov: &ValidatedMove) -> bool {
        let captured = usize::from(mov.is_capture());
        let enemies_before = before.enemy_count();
        let enemies_after = after.enemy_count();

        let valid = enemies_after + captured == enemies_before
            && after.count(Cell::Musketeer) == before.count(Cell::Musketeer);
        if !valid {
            warn!(enemies_before, enemies_after, "Piece accounting violated");
        }
        valid
    }
}

/// Contract for applying a move.
///
/// Preconditions:
/// - The source holds the mover's piece
/// - The destination holds what the mover's side must move onto
///
/// Postconditions:
/// - Piece counts change only by the capture, if any
/// - Every board invariant still holds
pub struct MoveContract;

impl Contract<Board, ValidatedMove> for MoveContract {
    fn pre(board: &Board, mov: &ValidatedMove) -> Result<(), MoveError> {
        MoveFitsBoard::check(mov, board)
    }

    fn post(before: &Board, after: &Board, mov: &ValidatedMove) -> Result<(), MoveError> {
        if !PiecesAccountedFor::holds(before, after, mov) {
            return Err(MoveError::InvariantViolation(
                "Pieces changed other than by capture",
            ));
        }
        BoardInvariants::check_all(after).map_err(|violation| {
            warn!(%violation, "Board invariant broken by move");
            MoveError::InvariantViolation(violation.rule)
        })
    }
}
