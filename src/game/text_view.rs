//! Textual board rendering
//!
//! Renders one line per row: the red row score, the row's cell symbols, and
//! the blue row score. Cell symbols are `_` for empty, the pawn count digit
//! for pawns, and `R`/`B` for a placed card's owner.

use crate::core::PlayerColor;
use crate::game::GameView;
use std::fmt::Write;

/// Render the whole board with per-row scores.
///
/// ```text
/// 0 1___1 0
/// 2 R___1 0
/// 0 1___1 0
/// ```
pub fn render(view: &GameView) -> String {
    let mut out = String::new();
    let board = view.board_snapshot();
    for row in 0..board.rows() {
        let red = view.row_score(row, PlayerColor::Red);
        let blue = view.row_score(row, PlayerColor::Blue);
        let _ = write!(out, "{red} ");
        for cell in board.row(row) {
            out.push(cell.symbol());
        }
        let _ = writeln!(out, " {blue}");
    }
    out
}

/// One-line game status: whose turn, or the outcome once over.
pub fn render_status(view: &GameView) -> String {
    if view.is_game_over() {
        match view.winner() {
            Some(winner) => format!(
                "Game over: {winner} wins {} - {}",
                view.total_score(winner),
                view.total_score(winner.opposite())
            ),
            None => format!(
                "Game over: tie {} - {}",
                view.total_score(PlayerColor::Red),
                view.total_score(PlayerColor::Blue)
            ),
        }
    } else {
        format!("{} to move", view.current_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Influence};
    use crate::game::GameEngine;
    use similar_asserts::assert_eq;

    fn plain_deck(size: usize) -> Vec<Card> {
        (0..size)
            .map(|i| Card::new(format!("c{i}"), 1, 1, Influence::empty()).unwrap())
            .collect()
    }

    #[test]
    fn test_render_starting_board() {
        let engine = GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 5).unwrap();
        let text = render(&engine.view());
        assert_eq!(text, "0 1___1 0\n0 1___1 0\n0 1___1 0\n");
    }

    #[test]
    fn test_render_after_placement() {
        let mut engine = GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 5).unwrap();
        assert!(engine.place_card(0, 1, 0));
        let text = render(&engine.view());
        // Row 1 now holds a red card worth 1 x (1 + 0) = 1.
        assert_eq!(text, "0 1___1 0\n1 R___1 0\n0 1___1 0\n");
    }

    #[test]
    fn test_render_status() {
        let mut engine = GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 5).unwrap();
        assert_eq!(render_status(&engine.view()), "Red to move");
        engine.pass();
        assert_eq!(render_status(&engine.view()), "Blue to move");
        engine.pass();
        assert_eq!(render_status(&engine.view()), "Game over: tie 0 - 0");
    }
}
