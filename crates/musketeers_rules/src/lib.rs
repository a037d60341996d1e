//! Pure Three Musketeers game logic.
//!
//! Three Musketeers face eight of Cardinal Richelieu's men on a 5x5 board.
//! Musketeers move only by capturing an orthogonally adjacent enemy; enemies
//! move only by stepping into an orthogonally adjacent empty cell. The
//! Musketeers win when no enemy touches any of them; the enemies win when
//! all three Musketeers end up in one row or one column.
//!
//! # Architecture
//!
//! - **Board**: grid state and piece-count checks ([`Board`])
//! - **Validator**: legality of a proposed move ([`rules::validate`])
//! - **Applicator**: board mutation for a validated move ([`rules::apply`])
//! - **Evaluator**: win detection ([`rules::evaluate`])
//! - **Controller**: turn alternation around all of the above ([`TurnController`])
//!
//! # Example
//!
//! ```
//! use musketeers_rules::{Board, Cell, GameOutcome, MoveRequest, TurnController};
//!
//! let mut cells = [[Cell::Empty; 5]; 5];
//! cells[0][0] = Cell::Musketeer;
//! cells[0][1] = Cell::Enemy;
//! cells[2][2] = Cell::Musketeer;
//! cells[4][4] = Cell::Musketeer;
//! let board = Board::from_cells(cells).unwrap();
//!
//! let mut game = TurnController::new(board);
//! let report = game.submit(MoveRequest::new(0, 0, 'r')).unwrap();
//! assert_eq!(*report.outcome(), GameOutcome::MusketeersWin);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod invariants;
mod phases;
mod position;
mod types;

pub mod rules;

pub use action::{Move, MoveError, MoveRequest, ValidatedMove};
pub use contracts::{Contract, MoveContract, MoveFitsBoard, PiecesAccountedFor};
pub use controller::{Turn, TurnController, TurnReport};
pub use invariants::{
    BoardInvariants, EnemyLimitInvariant, Invariant, InvariantSet, InvariantViolation,
    MusketeerCountInvariant,
};
pub use phases::GameOutcome;
pub use position::{Direction, Position};
pub use types::{BOARD_SIZE, Board, BoardError, Cell, Grid, MAX_ENEMIES, MUSKETEER_COUNT, Side};
