//! Interactive game session over a line-based console.

use crate::board_file::{self, SaveError};
use crate::input::{self, Command};
use crate::render::render;
use derive_more::{Display, Error, From};
use musketeers_rules::{Board, GameOutcome, Turn, TurnController};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Banner printed before the first move.
pub const INSTRUCTIONS: &str = "\
*** The Three Musketeers Game ***
To make a move, enter the location of the piece you want to move,
and the direction you want it to move. Locations are indicated as
a letter (A, B, C, D, E) followed by a number (1, 2, 3, 4, or 5).
Directions are indicated as left, right, up, down (L/l, R/r, U/u, D/d).
For example, to move the Musketeer from the top right-hand corner
to the row below, enter 'A,5 = D' or 'a,5=d' (without quotes).
Enter '0,0=E' to stop and save the board for later.
";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player interrupted, or input ran out.
    Interrupted,
    /// A side won.
    Finished(GameOutcome),
}

/// Errors that stop a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The console could not be read or written.
    #[display("Console error: {}", _0)]
    Console(std::io::Error),
    /// The board could not be saved.
    #[display("{}", _0)]
    Save(SaveError),
}

/// One game, from the loaded board to the saved one.
pub struct GameSession<R, W> {
    controller: TurnController,
    input: R,
    output: W,
    save_path: PathBuf,
    show_instructions: bool,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session that saves to `save_path` when it ends.
    pub fn new(board: Board, input: R, output: W, save_path: impl Into<PathBuf>) -> Self {
        Self {
            controller: TurnController::new(board),
            input,
            output,
            save_path: save_path.into(),
            show_instructions: true,
        }
    }

    /// Sets whether the banner is printed.
    pub fn with_instructions(mut self, show: bool) -> Self {
        self.show_instructions = show;
        self
    }

    /// Returns the controller, for inspecting the board after a run.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Returns the save destination.
    pub fn save_path(&self) -> &std::path::Path {
        &self.save_path
    }

    /// Plays until a side wins or the player interrupts, then saves.
    ///
    /// Rejected moves and malformed lines print a reason and prompt the
    /// same side again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the console fails or the board cannot be saved.
    #[instrument(skip(self), fields(save_path = %self.save_path.display()))]
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        if self.show_instructions {
            write!(self.output, "{INSTRUCTIONS}")?;
        }
        write!(self.output, "{}", render(self.controller.board()))?;

        while !self.controller.is_finished() {
            let prompt = match self.controller.turn() {
                Turn::MusketeersTurn => "Give the Musketeer's move",
                Turn::EnemiesTurn => "Give the enemy's move",
            };
            write!(self.output, "\n{prompt}\n>")?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                info!("Input closed");
                return self.interrupt();
            }
            // Bytes that are not UTF-8 become U+FFFD and fail to parse.
            let line = String::from_utf8_lossy(&raw);

            match input::parse_command(&line) {
                Ok(Command::Interrupt) => return self.interrupt(),
                Ok(Command::Move(request)) => match self.controller.submit(request) {
                    Ok(report) => {
                        info!(applied = %report.applied(), enemies_left = report.enemies_left(), "Move accepted");
                        write!(self.output, "{}", render(self.controller.board()))?;
                    }
                    Err(err) => {
                        warn!(%err, "Move rejected");
                        writeln!(self.output, "\n{err}.")?;
                    }
                },
                Err(err) => {
                    warn!(%err, "Malformed input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }

        let outcome = self.controller.outcome();
        writeln!(self.output, "\n{outcome}\n")?;
        self.save()?;
        Ok(SessionEnd::Finished(outcome))
    }

    fn interrupt(&mut self) -> Result<SessionEnd, SessionError> {
        writeln!(self.output, "\nGame interrupted. Exiting...")?;
        self.save()?;
        Ok(SessionEnd::Interrupted)
    }

    fn save(&mut self) -> Result<(), SessionError> {
        if let Err(err) = board_file::save(&self.save_path, self.controller.board()) {
            writeln!(self.output, "Failed to save the game state.")?;
            return Err(err.into());
        }
        writeln!(
            self.output,
            "Saving {}...Done.\nAu revoir!\n",
            self.save_path.display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(board: &str, moves: &str) -> (SessionEnd, String, Board) {
        run_session_bytes(board, moves.as_bytes())
    }

    fn run_session_bytes(board: &str, moves: &[u8]) -> (SessionEnd, String, Board) {
        let dir = tempfile::tempdir().unwrap();
        let save_path = dir.path().join("out-board.txt");
        let board = board_file::parse(board).unwrap();
        let mut session = GameSession::new(board, Cursor::new(moves.to_vec()), Vec::new(), &save_path)
            .with_instructions(false);

        let end = session.run().unwrap();
        let output = String::from_utf8(session.output.clone()).unwrap();
        let saved = board_file::load(&save_path).unwrap();
        assert_eq!(&saved, session.controller().board());
        (end, output, saved)
    }

    #[test]
    fn test_interrupt_saves_current_board() {
        let (end, output, saved) = run_session("ooooM\no....\no.M.o\n....o\nM....\n", "a,5=l\n0,0=e\n");
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(output.contains("Give the enemy's move"));
        assert!(output.contains("Game interrupted. Exiting..."));
        assert!(output.contains("Au revoir!"));
        assert_eq!(saved.enemy_count(), 7);
    }

    #[test]
    fn test_rejection_reprompts_same_side() {
        let (end, output, saved) = run_session("ooooM\no....\no.M.o\n....o\nM....\n", "c,3=u\nx,9=z\n0,0=E\n");
        assert_eq!(end, SessionEnd::Interrupted);
        assert_eq!(output.matches("Give the Musketeer's move").count(), 3);
        assert!(!output.contains("Give the enemy's move"));
        assert!(output.contains("Musketeers cannot move onto B3."));
        assert!(output.contains("Invalid input format"));
        assert_eq!(saved.enemy_count(), 8);
    }

    #[test]
    fn test_win_prints_outcome_and_saves() {
        let (end, output, _) = run_session("M....\n.....\n..Mo.\n.....\no...M\n", "c,3=r\n");
        assert_eq!(end, SessionEnd::Finished(GameOutcome::MusketeersWin));
        assert!(output.contains("The Musketeers win!"));
        assert!(output.contains("Saving "));
    }

    #[test]
    fn test_non_utf8_line_is_malformed_and_game_still_saves() {
        let (end, output, saved) = run_session_bytes(
            "ooooM\no....\no.M.o\n....o\nM....\n",
            b"a,5=l\n\xff\xfe\n0,0=e\n",
        );
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(output.contains("Invalid input format"));
        assert_eq!(output.matches("Give the enemy's move").count(), 2);
        assert!(output.contains("Au revoir!"));
        assert_eq!(saved.enemy_count(), 7);
    }

    #[test]
    fn test_end_of_input_interrupts() {
        let (end, output, _) = run_session("ooooM\no....\no.M.o\n....o\nM....\n", "");
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(output.contains("Game interrupted. Exiting..."));
    }

    #[test]
    fn test_unwritable_save_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let save_path = dir.path().join("missing").join("out-board.txt");
        let board = board_file::parse("ooooM\no....\no.M.o\n....o\nM....\n").unwrap();
        let mut session = GameSession::new(board, Cursor::new("0,0=e\n"), Vec::new(), save_path)
            .with_instructions(false);

        assert!(matches!(session.run(), Err(SessionError::Save(_))));
        let output = String::from_utf8(session.output.clone()).unwrap();
        assert!(output.contains("Failed to save the game state."));
    }
}
