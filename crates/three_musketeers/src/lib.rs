//! Three Musketeers in the terminal.
//!
//! The rules live in [`musketeers_rules`]; this crate is the I/O around
//! them: board files, the ASCII board, move input, and the session loop.
//!
//! # Example
//!
//! ```no_run
//! use three_musketeers::{GameSession, board_file};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = board_file::load("start.txt")?;
//! let stdin = std::io::stdin();
//! let mut session = GameSession::new(board, stdin.lock(), std::io::stdout(), "out-start.txt");
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board_file;
mod cli;
mod config;
mod input;
mod render;
mod session;

pub use board_file::{LoadError, LoadErrorKind, SaveError};
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use input::{Command as InputCommand, MalformedInput, parse_command};
pub use render::render;
pub use session::{GameSession, INSTRUCTIONS, SessionEnd, SessionError};
