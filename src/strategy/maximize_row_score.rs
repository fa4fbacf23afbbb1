//! Row-winning strategy

use crate::core::PlayerColor;
use crate::game::GameView;
use crate::strategy::{Move, MoveStrategy};

/// Visits rows top to bottom and tries to flip the first row the player is
/// losing or tying: it returns the first legal placement whose card value,
/// added to the player's current row score, strictly beats the opponent's
/// current row score. Rows already strictly won are skipped. `None` when no
/// row can be won this way.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizeRowScore;

impl MaximizeRowScore {
    fn find_winning_move(
        view: &GameView,
        player: PlayerColor,
        row: usize,
        hand_size: usize,
    ) -> Option<Move> {
        let opponent_score = view.row_score(row, player.opposite());
        let hand = view.hand(player);

        for card_index in 0..hand_size {
            let card = hand.get(card_index)?;
            for col in 0..view.cols() {
                if view.is_legal_move(card_index, row, col)
                    && view.row_score(row, player) + card.value() > opponent_score
                {
                    return Some(Move::new(card_index, row, col));
                }
            }
        }
        None
    }
}

impl MoveStrategy for MaximizeRowScore {
    fn choose_move(&self, view: &GameView, player: PlayerColor) -> Option<Move> {
        if view.is_game_over() {
            return None;
        }
        let hand_size = view.hand_size(player);
        for row in 0..view.rows() {
            if view.row_score(row, player) <= view.row_score(row, player.opposite()) {
                if let Some(mv) = Self::find_winning_move(view, player, row, hand_size) {
                    return Some(mv);
                }
            }
        }
        None
    }
}
