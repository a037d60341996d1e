//! Game outcome.

use super::types::Side;
use serde::{Deserialize, Serialize};

/// Where the game stands, always derived fresh from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won yet.
    InProgress,
    /// No Musketeer can be reached by an enemy.
    MusketeersWin,
    /// All three Musketeers stand in one row or one column.
    EnemiesWin,
}

impl GameOutcome {
    /// Returns the winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::MusketeersWin => Some(Side::Musketeers),
            GameOutcome::EnemiesWin => Some(Side::Enemies),
        }
    }

    /// Returns true once either side has won.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::MusketeersWin => write!(f, "The Musketeers win!"),
            GameOutcome::EnemiesWin => write!(f, "Cardinal Richelieu's men win!"),
        }
    }
}
