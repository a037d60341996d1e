//! Piece-count invariants: three Musketeers, never more than eight enemies.

use super::{Invariant, InvariantViolation};
use crate::types::{MAX_ENEMIES, MUSKETEER_COUNT};
use crate::{Board, Cell};

/// Exactly three Musketeers are on the board.
///
/// Musketeers are never captured, so the count set at load time survives
/// every move.
pub struct MusketeerCountInvariant;

impl Invariant<Board> for MusketeerCountInvariant {
    fn check(board: &Board) -> Result<(), InvariantViolation> {
        let found = board.count(Cell::Musketeer);
        if found == MUSKETEER_COUNT {
            Ok(())
        } else {
            Err(InvariantViolation {
                rule: "Exactly three Musketeers are on the board",
                found,
            })
        }
    }
}

/// At most eight enemies are on the board.
pub struct EnemyLimitInvariant;

impl Invariant<Board> for EnemyLimitInvariant {
    fn check(board: &Board) -> Result<(), InvariantViolation> {
        let found = board.enemy_count();
        if found <= MAX_ENEMIES {
            Ok(())
        } else {
            Err(InvariantViolation {
                rule: "At most eight enemies are on the board",
                found,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_musketeer_violates() {
        let board = Board::from_rows_unchecked(["M....", ".....", "..M..", ".....", "oooo."]);
        assert_eq!(MusketeerCountInvariant::check(&board).unwrap_err().found, 2);
        assert!(EnemyLimitInvariant::check(&board).is_ok());
    }

    #[test]
    fn test_ninth_enemy_violates() {
        let board = Board::from_rows_unchecked(["M...M", "ooooo", "oooo.", ".....", "....M"]);
        assert!(MusketeerCountInvariant::check(&board).is_ok());
        assert_eq!(EnemyLimitInvariant::check(&board).unwrap_err().found, 9);
    }

    #[test]
    fn test_no_enemies_left_holds() {
        let board = Board::from_rows_unchecked(["M...M", ".....", ".....", ".....", "....M"]);
        assert!(EnemyLimitInvariant::check(&board).is_ok());
    }
}
