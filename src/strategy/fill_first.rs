//! First-legal-move strategy

use crate::core::PlayerColor;
use crate::game::GameView;
use crate::strategy::{Move, MoveStrategy};

/// Chooses the first legal placement found, scanning the hand in index
/// order and the board top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillFirst;

impl MoveStrategy for FillFirst {
    fn choose_move(&self, view: &GameView, player: PlayerColor) -> Option<Move> {
        if view.is_game_over() {
            return None;
        }
        let hand_size = view.hand_size(player);
        for card_index in 0..hand_size {
            for row in 0..view.rows() {
                for col in 0..view.cols() {
                    if view.is_legal_move(card_index, row, col) {
                        return Some(Move::new(card_index, row, col));
                    }
                }
            }
        }
        None
    }
}
