//! Move-selection strategies
//!
//! Each strategy is a pure function of a read-only engine view and the
//! acting player: no mutation, no randomness, no state between calls. The
//! engine performs no retries of its own; all searching over candidate
//! moves lives here.

pub mod fill_first;
pub mod maximize_row_score;
pub mod minimize_opponent_score;

pub use fill_first::FillFirst;
pub use maximize_row_score::MaximizeRowScore;
pub use minimize_opponent_score::MinimizeOpponentScore;

use crate::core::PlayerColor;
use crate::game::GameView;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate action: hand index plus board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card_index: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(card_index: usize, row: usize, col: usize) -> Self {
        Move {
            card_index,
            row,
            col,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "card {} at ({}, {})",
            self.card_index, self.row, self.col
        )
    }
}

/// A move-selection policy.
pub trait MoveStrategy {
    /// Choose a move for `player`, or `None` if this strategy finds no move
    /// worth making.
    fn choose_move(&self, view: &GameView, player: PlayerColor) -> Option<Move>;
}
