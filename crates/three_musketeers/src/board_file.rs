//! Board files: the plain-text layout a game is loaded from and saved to.
//!
//! One row per line, five symbols per row (`M`, `o`, `.`). Symbols may be
//! separated by spaces; blank lines are ignored. Saved files always use the
//! spaced form, which loads back to the same board.

use derive_more::{Display, Error};
use musketeers_rules::{BOARD_SIZE, Board, BoardError, Cell};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// What went wrong while loading a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadErrorKind {
    /// The file could not be read.
    #[display("Error opening the file {}: {}", _0, _1)]
    Unreadable(String, String),
    /// A character other than `M`, `o`, `.` or whitespace.
    #[display("Invalid character '{}' in the input file at row {}, column {}", symbol, row, col)]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// 1-based row among non-blank lines.
        row: usize,
        /// 1-based symbol index within the row.
        col: usize,
    },
    /// A row without exactly five symbols.
    #[display("Row {} has {} cells, expected 5", row, found)]
    RowWidth {
        /// 1-based row among non-blank lines.
        row: usize,
        /// Symbols found on that row.
        found: usize,
    },
    /// Not exactly five non-blank lines.
    #[display("Expected 5 rows, found {}", _0)]
    RowCount(usize),
    /// The grid parsed but is not an acceptable starting board.
    #[display("{}", _0)]
    Board(BoardError),
}

/// Board loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Load error: {} at {}:{}", kind, file, line)]
pub struct LoadError {
    /// What went wrong.
    pub kind: LoadErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LoadError {
    /// Creates a new load error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: LoadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for LoadError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(LoadErrorKind::Board(err))
    }
}

/// Board saving error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Failed to save the game state to {}: {} at {}:{}", path, message, file, line)]
pub struct SaveError {
    /// Destination that could not be written.
    pub path: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.display().to_string(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a board from its text form.
///
/// # Errors
///
/// Returns [`LoadError`] for a bad symbol, a row that is not five wide,
/// a grid that is not five tall, or a grid the core refuses.
#[instrument(skip(text))]
pub fn parse(text: &str) -> Result<Board, LoadError> {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    let mut rows = 0;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        rows += 1;
        let mut width = 0;
        for symbol in line.chars().filter(|c| !c.is_whitespace()) {
            width += 1;
            let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                LoadError::new(LoadErrorKind::InvalidSymbol {
                    symbol,
                    row: rows,
                    col: width,
                })
            })?;
            if rows <= BOARD_SIZE && width <= BOARD_SIZE {
                cells[rows - 1][width - 1] = cell;
            }
        }
        if width != BOARD_SIZE {
            return Err(LoadError::new(LoadErrorKind::RowWidth {
                row: rows,
                found: width,
            }));
        }
    }

    if rows != BOARD_SIZE {
        return Err(LoadError::new(LoadErrorKind::RowCount(rows)));
    }

    Ok(Board::from_cells(cells)?)
}

/// Reads and parses a board file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or does not parse.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    debug!("Loading board");
    let text = std::fs::read_to_string(path).map_err(|e| {
        warn!(error = %e, "Board file unreadable");
        LoadError::new(LoadErrorKind::Unreadable(
            path.display().to_string(),
            e.to_string(),
        ))
    })?;
    let board = parse(&text)?;
    info!(enemies = board.enemy_count(), "Board loaded");
    Ok(board)
}

/// Text form of a board: five lines of space-separated symbols.
pub fn to_text(board: &Board) -> String {
    let mut text = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2));
    for row in board.rows() {
        let symbols: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
        text.push_str(&symbols.join(" "));
        text.push('\n');
    }
    text
}

/// Writes a board file, replacing any existing file.
///
/// # Errors
///
/// Returns [`SaveError`] if the file cannot be written.
#[instrument(skip(path, board), fields(path = %path.as_ref().display()))]
pub fn save(path: impl AsRef<Path>, board: &Board) -> Result<(), SaveError> {
    let path = path.as_ref();
    std::fs::write(path, to_text(board)).map_err(|e| {
        warn!(error = %e, "Board file not written");
        SaveError::new(path, e.to_string())
    })?;
    info!("Board saved");
    Ok(())
}

/// Where a game loaded from `input` is saved: a sibling file whose name is
/// the input's name with `prefix` in front.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}
