//! Parsing one line of player input.

use derive_more::{Display, Error};
use musketeers_rules::MoveRequest;
use tracing::{debug, instrument};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move to hand to the rules engine.
    Move(MoveRequest),
    /// Stop now and save the board (`0,0=E`).
    Interrupt,
}

/// Input that is not `<row>,<column>=<direction>`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid input format {:?}. Use i,j=value (e.g., A,5=L)", input)]
pub struct MalformedInput {
    /// The line as typed, without its line ending.
    pub input: String,
}

/// Parses `<row-letter>,<col-digit>=<direction-letter>`, ignoring case and
/// whitespace.
///
/// The row must be `A`-`E`. The column may be any digit and the direction
/// any letter: an off-board column or an unknown direction is a move the
/// validator refuses, not a typing error.
///
/// # Errors
///
/// Returns [`MalformedInput`] when the line does not have that shape.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, MalformedInput> {
    let compact: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    let malformed = || MalformedInput {
        input: line.trim_end_matches(['\r', '\n']).to_string(),
    };

    let [row, ',', col, '=', direction] = compact[..] else {
        debug!("Input does not match row,col=direction");
        return Err(malformed());
    };

    if row == '0' && col == '0' && direction.eq_ignore_ascii_case(&'e') {
        return Ok(Command::Interrupt);
    }

    let row = match row.to_ascii_uppercase() {
        r @ 'A'..='E' => r as i32 - 'A' as i32,
        _ => return Err(malformed()),
    };
    let col = col.to_digit(10).ok_or_else(malformed)? as i32 - 1;
    if !direction.is_ascii_alphabetic() {
        return Err(malformed());
    }

    Ok(Command::Move(MoveRequest::new(row, col, direction)))
}
