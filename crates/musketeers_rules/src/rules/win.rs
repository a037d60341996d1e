//! Win detection for Three Musketeers.

use super::super::phases::GameOutcome;
use super::super::types::{BOARD_SIZE, MUSKETEER_COUNT};
use super::super::{Board, Cell};
use tracing::instrument;

/// Counts enemy neighbours over all Musketeers.
///
/// An enemy touching two Musketeers is counted once per Musketeer.
pub fn musketeer_exposure(board: &Board) -> usize {
    board
        .positions_of(Cell::Musketeer)
        .map(|m| m.neighbors().filter(|n| board.get(*n) == Cell::Enemy).count())
        .sum()
}

/// The Musketeers win when none of them has an orthogonally adjacent enemy.
///
/// This looks only at adjacency and ignores whose turn it is. It does not
/// ask whether the Musketeers could still move elsewhere: with captures as
/// their only move, no adjacent enemy and no Musketeer move are the same
/// thing.
#[instrument(skip(board))]
pub fn musketeers_win(board: &Board) -> bool {
    musketeer_exposure(board) == 0
}

/// The enemies win when all three Musketeers share a row or a column.
#[instrument(skip(board))]
pub fn enemies_win(board: &Board) -> bool {
    let rows = board.rows();
    let same_row = (0..BOARD_SIZE).any(|r| {
        rows[r].iter().filter(|c| **c == Cell::Musketeer).count() == MUSKETEER_COUNT
    });
    let same_col = (0..BOARD_SIZE).any(|c| {
        (0..BOARD_SIZE).filter(|r| rows[*r][c] == Cell::Musketeer).count() == MUSKETEER_COUNT
    });
    same_row || same_col
}

/// Derives the outcome from the board alone.
///
/// The Musketeers' condition is checked first, so a board satisfying both
/// conditions (not reachable by legal play) counts as a Musketeer win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if musketeers_win(board) {
        GameOutcome::MusketeersWin
    } else if enemies_win(board) {
        GameOutcome::EnemiesWin
    } else {
        GameOutcome::InProgress
    }
}

/// True when either side has won.
pub fn is_game_won(board: &Board) -> bool {
    evaluate(board).is_finished()
}
