//! Read-only view of the engine
//!
//! Strategies and renderers consume this narrow query-only type instead of
//! the engine itself; the mutation surface stays with the turn-dispatching
//! driver. While a `GameView` is alive it borrows the engine immutably, so
//! no mutation can slip in between a strategy's read and its decision, and
//! the owned values it returns (hands, board snapshots, cards) never observe
//! later engine mutation.

use crate::core::{Board, Card, CellContent, PlayerColor};
use crate::game::GameEngine;
use crate::Result;

/// Query-only window onto a [`GameEngine`].
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    engine: &'a GameEngine,
}

impl<'a> GameView<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        GameView { engine }
    }

    pub fn current_player(&self) -> PlayerColor {
        self.engine.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    pub fn winner(&self) -> Option<PlayerColor> {
        self.engine.winner()
    }

    pub fn rows(&self) -> usize {
        self.engine.rows()
    }

    pub fn cols(&self) -> usize {
        self.engine.cols()
    }

    pub fn row_score(&self, row: usize, color: PlayerColor) -> u32 {
        self.engine.row_score(row, color)
    }

    pub fn total_score(&self, color: PlayerColor) -> u32 {
        self.engine.total_score(color)
    }

    pub fn cell_content(&self, row: usize, col: usize) -> Result<CellContent> {
        self.engine.cell_content(row, col)
    }

    pub fn owner_of(&self, row: usize, col: usize) -> Result<Option<PlayerColor>> {
        self.engine.owner_of(row, col)
    }

    pub fn pawn_count(&self, row: usize, col: usize) -> Result<u8> {
        self.engine.pawn_count(row, col)
    }

    pub fn card_at(&self, row: usize, col: usize) -> Result<Option<Card>> {
        self.engine.card_at(row, col)
    }

    /// Defensive copy of `color`'s hand.
    pub fn hand(&self, color: PlayerColor) -> Vec<Card> {
        self.engine.hand(color)
    }

    pub fn hand_size(&self, color: PlayerColor) -> usize {
        self.engine.hand_size(color)
    }

    /// Legality of a candidate move for the *current* player.
    pub fn is_legal_move(&self, card_index: usize, row: usize, col: usize) -> bool {
        self.engine.is_legal_move(card_index, row, col)
    }

    /// Independent deep snapshot of the board.
    pub fn board_snapshot(&self) -> Board {
        self.engine.board_snapshot()
    }
}
