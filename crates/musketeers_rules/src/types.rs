//! Core domain types for Three Musketeers.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Number of Musketeers on every legal board.
pub const MUSKETEER_COUNT: usize = 3;

/// Upper bound on enemies; captures only ever lower the count.
pub const MAX_ENEMIES: usize = 8;

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// The three Musketeers (move first).
    #[display("Musketeers")]
    Musketeers,
    /// Cardinal Richelieu's men.
    #[display("Enemies")]
    Enemies,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Musketeers => Side::Enemies,
            Side::Enemies => Side::Musketeers,
        }
    }

    /// The piece this side moves.
    pub fn piece(self) -> Cell {
        match self {
            Side::Musketeers => Cell::Musketeer,
            Side::Enemies => Cell::Enemy,
        }
    }

    /// What the destination must hold for this side's move to be legal.
    ///
    /// Musketeers only ever capture; enemies only ever step into empty space.
    pub fn required_target(self) -> Cell {
        match self {
            Side::Musketeers => Cell::Enemy,
            Side::Enemies => Cell::Empty,
        }
    }
}

/// Contents of a single cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// One of the three Musketeers.
    Musketeer,
    /// One of Cardinal Richelieu's men.
    Enemy,
    /// Nothing here.
    #[default]
    Empty,
}

impl Cell {
    /// Symbol used by the board file format and the renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Musketeer => 'M',
            Cell::Enemy => 'o',
            Cell::Empty => '.',
        }
    }

    /// Parses a board symbol. Symbols are case-sensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Cell::Musketeer),
            'o' => Some(Cell::Enemy),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reasons a grid is refused as a starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The grid does not hold exactly three Musketeers.
    #[display("board must hold exactly 3 Musketeers, found {_0}")]
    MusketeerCount(#[error(not(source))] usize),
    /// The grid holds more enemies than the game starts with.
    #[display("board may hold at most 8 enemies, found {_0}")]
    TooManyEnemies(#[error(not(source))] usize),
}

/// Raw cell grid, row by row.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// 5x5 Three Musketeers board.
///
/// Rows are indexed top to bottom (`A`..`E`), columns left to right
/// (`1`..`5`). Serializes as the bare grid; deserializing runs the same
/// count checks as [`Board::from_cells`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Grid", into = "Grid")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Accepts a grid as a board after checking the piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the grid does not hold exactly three
    /// Musketeers or holds more than eight enemies.
    #[instrument(skip(cells))]
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let board = Self { cells };

        let musketeers = board.count(Cell::Musketeer);
        if musketeers != MUSKETEER_COUNT {
            warn!(musketeers, "Rejecting board with wrong Musketeer count");
            return Err(BoardError::MusketeerCount(musketeers));
        }

        let enemies = board.count(Cell::Enemy);
        if enemies > MAX_ENEMIES {
            warn!(enemies, "Rejecting board with too many enemies");
            return Err(BoardError::TooManyEnemies(enemies));
        }

        Ok(board)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Moves the occupant of `src` to `dst` as `content`, leaving `src` empty.
    ///
    /// Trusts its caller: legality is the validator's job. Whatever `dst`
    /// held is overwritten, which is how a capture removes the enemy.
    pub fn apply_move(&mut self, src: Position, dst: Position, content: Cell) {
        self.cells[src.row()][src.col()] = Cell::Empty;
        self.cells[dst.row()][dst.col()] = content;
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Number of enemies still on the board.
    pub fn enemy_count(&self) -> usize {
        self.count(Cell::Enemy)
    }

    /// Positions holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |pos| self.get(*pos) == cell)
    }

    /// Positions of the Musketeers, in row-major order.
    pub fn musketeers(&self) -> Vec<Position> {
        self.positions_of(Cell::Musketeer).collect()
    }

    /// Read-only snapshot of all 25 cells, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Builds a board from compact rows such as `"M..oo"`, skipping the
    /// count checks so tests can stage unreachable positions.
    #[cfg(test)]
    pub(crate) fn from_rows_unchecked(rows: [&str; BOARD_SIZE]) -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, symbol) in row.chars().enumerate() {
                cells[r][c] = Cell::from_symbol(symbol).expect("valid test symbol");
            }
        }
        Self { cells }
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    fn try_from(cells: Grid) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.cells
    }
}
