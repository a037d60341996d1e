//! ASCII rendering of the board.

use musketeers_rules::{BOARD_SIZE, Board};
use std::fmt::Write;

const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E'];
const SEPARATOR: &str = "  +---+---+---+---+---+";

/// Draws the board with columns `1`-`5` across the top and rows `A`-`E`
/// down the side.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("\n    1   2   3   4   5\n");
    out.push_str(SEPARATOR);
    out.push('\n');
    for (label, row) in ROW_LABELS.iter().zip(board.rows()) {
        out.push(*label);
        out.push_str(" |");
        for cell in row {
            // Writing to a String cannot fail.
            let _ = write!(out, " {} |", cell.symbol());
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}
