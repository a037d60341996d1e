//! Board coordinates and the four orthogonal directions.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Row labels, top to bottom.
const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E'];

/// A cell coordinate that is always on the board.
///
/// Construction goes through [`Position::new`] or [`Position::step`], both of
/// which refuse anything outside `[0, 5) x [0, 5)`, so indexing the board with
/// a `Position` never needs another bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a position from signed indices, as produced by parsing user
    /// input that may point anywhere.
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Row index (0 = `A`).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = `1`).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Human-readable label such as `A1` or `E5`.
    pub fn label(self) -> String {
        format!("{}{}", ROW_LABELS[self.row()], self.col() + 1)
    }

    /// The neighbouring position one step in `direction`, or `None` when
    /// that step leaves the board.
    #[instrument(level = "trace")]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::from_signed(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// All on-board orthogonal neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// All 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One orthogonal step. There are no diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Towards row `A`.
    Up,
    /// Towards row `E`.
    Down,
    /// Towards column `1`.
    Left,
    /// Towards column `5`.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parses a direction letter (`U`, `D`, `L`, `R`, any case).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The letter used on the command line.
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Row and column offsets of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Position::new(4, 4).is_some());
        assert!(Position::new(5, 0).is_none());
        assert!(Position::new(0, 5).is_none());
        assert!(Position::from_signed(-1, 2).is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::new(0, 0).unwrap().label(), "A1");
        assert_eq!(Position::new(2, 3).unwrap().label(), "C4");
        assert_eq!(Position::new(4, 4).unwrap().to_string(), "E5");
    }

    #[test]
    fn test_step_off_every_edge() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Right), Position::new(0, 1));
        assert_eq!(corner.step(Direction::Down), Position::new(1, 0));

        let far = Position::new(4, 4).unwrap();
        assert_eq!(far.step(Direction::Down), None);
        assert_eq!(far.step(Direction::Right), None);
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(Position::new(0, 0).unwrap().neighbors().count(), 2);
        assert_eq!(Position::new(0, 2).unwrap().neighbors().count(), 3);
        assert_eq!(Position::new(2, 2).unwrap().neighbors().count(), 4);
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[6], Position::new(1, 1).unwrap());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_direction_letters() {
        for direction in <Direction as strum::IntoEnumIterator>::iter() {
            assert_eq!(Direction::from_char(direction.letter()), Some(direction));
            assert_eq!(
                Direction::from_char(direction.letter().to_ascii_lowercase()),
                Some(direction)
            );
        }
        assert_eq!(Direction::from_char('x'), None);
        assert_eq!(Direction::from_char('E'), None);
    }
}
