//! Game rules for Three Musketeers.
//!
//! Pure functions over a borrowed [`Board`](super::Board): deciding whether a
//! move is legal, carrying it out, and deciding whether anyone has won.
//! Only [`apply`] needs mutable access.

pub mod apply;
pub mod validate;
pub mod win;

pub use apply::apply;
pub use validate::{legal_moves, validate, validate_request};
pub use win::{enemies_win, evaluate, is_game_won, musketeer_exposure, musketeers_win};
