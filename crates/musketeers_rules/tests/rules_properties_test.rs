//! Board-wide properties of the move rules and win conditions.

use musketeers_rules::rules::{apply, enemies_win, legal_moves, musketeers_win, validate};
use musketeers_rules::{Board, Cell, Direction, Move, MoveError, Position, Side};
use proptest::prelude::*;

/// Boards with three Musketeers and zero to eight enemies on random cells.
fn arb_board() -> impl Strategy<Value = Board> {
    let cells: Vec<usize> = (0..25).collect();
    (Just(cells).prop_shuffle(), 0usize..=8).prop_map(|(order, enemies)| {
        let mut grid = [[Cell::Empty; 5]; 5];
        for (i, idx) in order.iter().take(3 + enemies).enumerate() {
            grid[idx / 5][idx % 5] = if i < 3 { Cell::Musketeer } else { Cell::Enemy };
        }
        Board::from_cells(grid).expect("generated board is valid")
    })
}

proptest! {
    #[test]
    fn musketeers_only_move_onto_enemies(board in arb_board()) {
        for from in board.positions_of(Cell::Musketeer) {
            for direction in Direction::ALL {
                let result = validate(&board, Side::Musketeers, Move::new(from, direction));
                match from.step(direction) {
                    None => prop_assert_eq!(result, Err(MoveError::OutOfBounds)),
                    Some(to) if board.get(to) != Cell::Enemy => {
                        prop_assert_eq!(result, Err(MoveError::IllegalTarget(Side::Musketeers, to)));
                    }
                    Some(_) => prop_assert!(result.is_ok()),
                }
            }
        }
    }

    #[test]
    fn enemies_only_move_into_empty_cells(board in arb_board()) {
        for from in board.positions_of(Cell::Enemy) {
            for direction in Direction::ALL {
                let result = validate(&board, Side::Enemies, Move::new(from, direction));
                match from.step(direction) {
                    None => prop_assert_eq!(result, Err(MoveError::OutOfBounds)),
                    Some(to) if board.get(to) != Cell::Empty => {
                        prop_assert_eq!(result, Err(MoveError::IllegalTarget(Side::Enemies, to)));
                    }
                    Some(_) => prop_assert!(result.is_ok()),
                }
            }
        }
    }

    #[test]
    fn capture_removes_exactly_one_enemy(board in arb_board()) {
        for mov in legal_moves(&board, Side::Musketeers) {
            let mut after = board.clone();
            apply(&mut after, &mov);
            prop_assert_eq!(after.enemy_count() + 1, board.enemy_count());
            prop_assert_eq!(after.count(Cell::Musketeer), 3);
        }
    }

    #[test]
    fn enemy_step_keeps_counts(board in arb_board()) {
        for mov in legal_moves(&board, Side::Enemies) {
            let mut after = board.clone();
            apply(&mut after, &mov);
            prop_assert_eq!(after.enemy_count(), board.enemy_count());
            prop_assert_eq!(after.count(Cell::Musketeer), 3);
            prop_assert_eq!(after.get(*mov.from()), Cell::Empty);
        }
    }

    #[test]
    fn enemies_win_iff_musketeers_aligned(board in arb_board()) {
        let musketeers = board.musketeers();
        let same_row = musketeers.iter().all(|p| p.row() == musketeers[0].row());
        let same_col = musketeers.iter().all(|p| p.col() == musketeers[0].col());
        prop_assert_eq!(enemies_win(&board), same_row || same_col);
    }

    #[test]
    fn musketeers_win_iff_no_enemy_adjacent(board in arb_board()) {
        let exposed = board
            .musketeers()
            .iter()
            .any(|m| m.neighbors().any(|n| board.get(n) == Cell::Enemy));
        prop_assert_eq!(musketeers_win(&board), !exposed);
        prop_assert_eq!(musketeers_win(&board), legal_moves(&board, Side::Musketeers).is_empty());
    }
}

#[test]
fn test_capture_to_the_right_from_a1() {
    let mut grid = [[Cell::Empty; 5]; 5];
    grid[0][0] = Cell::Musketeer;
    grid[0][1] = Cell::Enemy;
    grid[0][4] = Cell::Enemy;
    grid[2][2] = Cell::Musketeer;
    grid[4][4] = Cell::Musketeer;
    let mut board = Board::from_cells(grid).unwrap();

    let a1 = Position::new(0, 0).unwrap();
    let a2 = Position::new(0, 1).unwrap();
    let mov = validate(&board, Side::Musketeers, Move::new(a1, Direction::Right)).unwrap();
    apply(&mut board, &mov);

    assert_eq!(board.get(a1), Cell::Empty);
    assert_eq!(board.get(a2), Cell::Musketeer);
    assert_eq!(board.enemy_count(), 1);
}

#[test]
fn test_no_capture_without_adjacent_enemy() {
    let mut grid = [[Cell::Empty; 5]; 5];
    grid[0][0] = Cell::Musketeer;
    grid[0][3] = Cell::Enemy;
    grid[0][4] = Cell::Enemy;
    grid[2][2] = Cell::Musketeer;
    grid[4][4] = Cell::Musketeer;
    let board = Board::from_cells(grid).unwrap();

    let a1 = Position::new(0, 0).unwrap();
    assert!(matches!(
        validate(&board, Side::Musketeers, Move::new(a1, Direction::Right)),
        Err(MoveError::IllegalTarget(Side::Musketeers, _))
    ));
}

#[test]
fn test_first_row_alignment_wins_for_enemies() {
    let mut grid = [[Cell::Enemy; 5]; 5];
    for row in grid.iter_mut().skip(2) {
        *row = [Cell::Empty; 5];
    }
    grid[0] = [Cell::Musketeer, Cell::Musketeer, Cell::Musketeer, Cell::Empty, Cell::Empty];
    grid[1] = [Cell::Enemy, Cell::Empty, Cell::Enemy, Cell::Empty, Cell::Enemy];
    let board = Board::from_cells(grid).unwrap();

    assert!(enemies_win(&board));
}

#[test]
fn test_surrounded_by_empty_cells_wins_for_musketeers() {
    let mut grid = [[Cell::Empty; 5]; 5];
    grid[2][2] = Cell::Musketeer;
    grid[0][0] = Cell::Musketeer;
    grid[4][4] = Cell::Musketeer;
    grid[0][4] = Cell::Enemy;
    grid[4][0] = Cell::Enemy;
    let board = Board::from_cells(grid).unwrap();

    let c3 = Position::new(2, 2).unwrap();
    assert!(c3.neighbors().all(|n| board.get(n) == Cell::Empty));
    assert!(musketeers_win(&board));
}
