//! Opponent-denial strategy

use crate::core::PlayerColor;
use crate::game::GameView;
use crate::strategy::{Move, MoveStrategy};
use smallvec::SmallVec;

/// Evaluates every legal placement and picks the one leaving the opponent
/// the lowest score in the target row.
///
/// The evaluation is deliberately shallow: it sums the opponent's card
/// scores over the row's *other* columns (the candidate's own column is
/// excluded) and does not simulate the influence the candidate move itself
/// would cause. Ties keep the earliest candidate in enumeration order
/// (card ascending, then row, then column).
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeOpponentScore;

impl MinimizeOpponentScore {
    /// Opponent's projected score in `row` if we occupy `col`.
    fn opponent_row_score_excluding(
        view: &GameView,
        row: usize,
        col: usize,
        opponent: PlayerColor,
    ) -> u32 {
        let mut score = 0;
        for c in 0..view.cols() {
            if c == col {
                continue;
            }
            // In-bounds by construction; a query failure means no score.
            if view.owner_of(row, c).ok().flatten() != Some(opponent) {
                continue;
            }
            if let Ok(Some(card)) = view.card_at(row, c) {
                let pawns = view.pawn_count(row, c).unwrap_or(0);
                score += card.value() * (1 + u32::from(pawns));
            }
        }
        score
    }
}

impl MoveStrategy for MinimizeOpponentScore {
    fn choose_move(&self, view: &GameView, player: PlayerColor) -> Option<Move> {
        if view.hand_size(player) == 0 {
            return None;
        }
        let opponent = player.opposite();

        let mut candidates: SmallVec<[(Move, u32); 16]> = SmallVec::new();
        for card_index in 0..view.hand_size(player) {
            for row in 0..view.rows() {
                for col in 0..view.cols() {
                    if view.is_legal_move(card_index, row, col) {
                        let score =
                            Self::opponent_row_score_excluding(view, row, col, opponent);
                        candidates.push((Move::new(card_index, row, col), score));
                    }
                }
            }
        }

        // Strictly-lower wins; the first candidate keeps ties.
        let mut best: Option<(Move, u32)> = None;
        for (mv, score) in candidates {
            match best {
                Some((_, lowest)) if score >= lowest => {}
                _ => best = Some((mv, score)),
            }
        }
        best.map(|(mv, _)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;
    use crate::strategy::test_support::{plain_card, plain_deck, standard_engine};

    #[test]
    fn test_prefers_row_denying_opponent() {
        let mut blue_deck = plain_deck(15);
        blue_deck[0] = plain_card("Big", 1, 5);
        let mut engine = GameEngine::new(3, 5, plain_deck(15), blue_deck, 5).unwrap();

        engine.pass(); // red passes
        assert!(engine.place_card(0, 1, 4)); // blue: 5 points at (1,4)

        // Every red candidate in rows 0 and 2 leaves the opponent 0 there;
        // a row-1 candidate leaves 5. The earliest zero-cost candidate is
        // (card 0, row 0, col 0).
        let mv = MinimizeOpponentScore.choose_move(&engine.view(), PlayerColor::Red);
        assert_eq!(mv, Some(Move::new(0, 0, 0)));
    }

    #[test]
    fn test_excludes_candidate_column_from_simulation() {
        // Blue's only card sits exactly where red can't place, but in a
        // 1-row board the exclusion is visible: red's candidate at the
        // opponent's column is not legal, so the sum runs over (0,0)'s
        // alternatives only.
        let mut blue_deck = plain_deck(5);
        blue_deck[0] = plain_card("Big", 1, 5);
        let mut engine = GameEngine::new(1, 3, plain_deck(5), blue_deck, 1).unwrap();

        engine.pass();
        assert!(engine.place_card(0, 0, 2)); // blue's 5 points at (0,2)

        // Red's only legal cell is (0,0); its simulated opponent score is 5
        // (column 2 counted, column 0 excluded). Still the best (only)
        // candidate.
        let mv = MinimizeOpponentScore.choose_move(&engine.view(), PlayerColor::Red);
        assert_eq!(mv, Some(Move::new(0, 0, 0)));
    }

    #[test]
    fn test_tie_keeps_enumeration_order() {
        let engine = standard_engine();
        // Fresh board: every candidate scores 0; the first enumerated legal
        // move (card 0, row 0, col 0) must win the tie.
        let mv = MinimizeOpponentScore.choose_move(&engine.view(), PlayerColor::Red);
        assert_eq!(mv, Some(Move::new(0, 0, 0)));
    }

    #[test]
    fn test_none_when_no_legal_moves() {
        // 1x3 board, deck of 3, hand 1.
        let mut engine = GameEngine::new(1, 3, plain_deck(3), plain_deck(3), 1).unwrap();
        assert!(engine.place_card(0, 0, 0)); // red plays, draws (pile 2 -> 1)
        assert!(engine.place_card(0, 0, 2)); // blue plays
        // Red still has cards but no legal cell; legality filtering yields
        // no candidates.
        assert_eq!(
            MinimizeOpponentScore.choose_move(&engine.view(), PlayerColor::Red),
            None
        );
    }
}
