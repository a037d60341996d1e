//! Turn controller: owns the board and alternates the sides.

use super::action::{Move, MoveError, MoveRequest, ValidatedMove};
use super::contracts::{Contract, MoveContract};
use super::phases::GameOutcome;
use super::{Board, Side, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The Musketeers are to move.
    MusketeersTurn,
    /// The enemies are to move.
    EnemiesTurn,
}

impl Turn {
    /// The side that moves in this state.
    pub fn side(self) -> Side {
        match self {
            Turn::MusketeersTurn => Side::Musketeers,
            Turn::EnemiesTurn => Side::Enemies,
        }
    }

    /// The state after a move has been made.
    pub fn next(self) -> Self {
        match self {
            Turn::MusketeersTurn => Turn::EnemiesTurn,
            Turn::EnemiesTurn => Turn::MusketeersTurn,
        }
    }
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::Musketeers => Turn::MusketeersTurn,
            Side::Enemies => Turn::EnemiesTurn,
        }
    }
}

/// What happened on an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// The move as applied.
    applied: ValidatedMove,
    /// Outcome evaluated on the new board.
    outcome: GameOutcome,
    /// Enemies left after the move.
    enemies_left: usize,
}

/// Drives a single game: validate, apply, evaluate, then hand over the turn.
///
/// The board is owned here for the whole session. Rejected moves change
/// nothing; once the board shows a winner every further move is refused.
/// The outcome is never stored, only read off the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    board: Board,
    turn: Turn,
}

impl TurnController {
    /// Starts a game with the Musketeers to move.
    ///
    /// A board that is already decided yields a finished controller.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self::resume(board, Turn::MusketeersTurn)
    }

    /// Starts from an arbitrary turn.
    #[instrument(skip(board))]
    pub fn resume(board: Board, turn: Turn) -> Self {
        info!(?turn, outcome = %rules::evaluate(&board), "Game started");
        Self { board, turn }
    }

    /// Submits a raw request for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after the game has been decided, or
    /// whatever the validator rejects the request for. The turn does not
    /// change on error.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn submit(&mut self, request: MoveRequest) -> Result<TurnReport, MoveError> {
        self.ensure_in_progress()?;
        let mov = rules::validate_request(&self.board, self.turn.side(), request)?;
        self.commit(mov)
    }

    /// Plays an already-typed move for the side to move.
    ///
    /// # Errors
    ///
    /// As for [`TurnController::submit`].
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn play(&mut self, mov: Move) -> Result<TurnReport, MoveError> {
        self.ensure_in_progress()?;
        let mov = rules::validate(&self.board, self.turn.side(), mov)?;
        self.commit(mov)
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        let outcome = self.outcome();
        if outcome.is_finished() {
            debug!(%outcome, "Move refused after game end");
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn commit(&mut self, mov: ValidatedMove) -> Result<TurnReport, MoveError> {
        MoveContract::pre(&self.board, &mov)?;

        let before = self.board.clone();
        rules::apply(&mut self.board, &mov);

        if let Err(err) = MoveContract::post(&before, &self.board, &mov) {
            self.board = before;
            return Err(err);
        }

        let outcome = self.outcome();
        if outcome.is_finished() {
            info!(%outcome, "Game over");
        } else {
            self.turn = self.turn.next();
        }

        Ok(TurnReport {
            applied: mov,
            outcome,
            enemies_left: self.board.enemy_count(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move it is (or was, once the game is over).
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate(&self.board)
    }

    /// Returns true once a winner is decided.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Gives the board back, ending the session.
    pub fn into_board(self) -> Board {
        self.board
    }
}
