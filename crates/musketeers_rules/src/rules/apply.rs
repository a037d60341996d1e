//! Carrying out a validated move.

use super::super::action::ValidatedMove;
use super::super::Board;
use tracing::{debug, instrument};

/// Moves the piece for an already-validated move.
///
/// The source is cleared and the mover's piece is written to the
/// destination. On a Musketeer move the destination held an enemy, which is
/// overwritten and so captured.
#[instrument(skip(board, mov), fields(mov = %mov))]
pub fn apply(board: &mut Board, mov: &ValidatedMove) {
    board.apply_move(*mov.from(), *mov.to(), mov.side().piece());
    debug!(enemies = board.enemy_count(), "Move applied");
}
