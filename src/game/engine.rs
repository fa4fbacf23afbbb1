//! The turn/placement/scoring state machine
//!
//! `GameEngine` owns the board, both hands, both draw piles, the
//! current-player pointer, the per-player pass flags, and the game-over
//! flag. It is mutated only through `place_card` and `pass`; everything else
//! is a read-only query. Routine illegal actions (wrong cell, bad index,
//! acting after game over) report failure as a plain `false` or no-op so
//! that automated actors can probe candidate moves without special-casing
//! errors; only construction problems and out-of-bounds queries are `Err`.

use crate::core::{
    Board, Card, Cell, CellContent, Influence, PerPlayer, PlayerColor, INFLUENCE_CENTER,
    INFLUENCE_SIZE,
};
use crate::game::GameView;
use crate::{EngineError, Result};
use std::collections::VecDeque;

/// Observer for engine status changes.
///
/// Callbacks are delivered synchronously, in registration order, before the
/// triggering `place_card`/`pass`/`start_game` call returns. A callback may
/// register further listeners; those join the list after the in-progress
/// dispatch completes.
pub trait StatusListener {
    /// It is now `color`'s turn.
    fn on_turn_start(&mut self, color: PlayerColor);

    /// The game ended. `winner` is `None` on a tie; `winning_score` is the
    /// winner's total score, or 0 on a tie.
    fn on_game_over(&mut self, winner: Option<PlayerColor>, winning_score: u32);
}

/// The rule engine for one game.
pub struct GameEngine {
    board: Board,
    hands: PerPlayer<Vec<Card>>,
    piles: PerPlayer<VecDeque<Card>>,
    current_player: PlayerColor,
    passed: PerPlayer<bool>,
    game_over: bool,
    listeners: Vec<Box<dyn StatusListener>>,
}

impl GameEngine {
    /// Create an engine with a fresh board and deal both opening hands.
    ///
    /// The first `hand_size` cards of each deck (front = index 0) go to that
    /// player's hand immediately; the rest form the draw pile in order.
    ///
    /// Fails if the board dimensions are invalid, a hand would exceed a
    /// third of its deck, or a deck is smaller than the board.
    pub fn new(
        rows: usize,
        cols: usize,
        red_deck: Vec<Card>,
        blue_deck: Vec<Card>,
        hand_size: usize,
    ) -> Result<Self> {
        if hand_size > red_deck.len() / 3 || hand_size > blue_deck.len() / 3 {
            return Err(EngineError::InvalidDeck(format!(
                "hand size {hand_size} exceeds a third of a deck ({} red / {} blue cards)",
                red_deck.len(),
                blue_deck.len()
            )));
        }
        if red_deck.len() < rows * cols || blue_deck.len() < rows * cols {
            return Err(EngineError::InvalidDeck(format!(
                "decks must hold at least rows x cols = {} cards",
                rows * cols
            )));
        }
        let board = Board::new(rows, cols)?;

        let mut red_pile: VecDeque<Card> = red_deck.into();
        let mut blue_pile: VecDeque<Card> = blue_deck.into();
        let mut red_hand = Vec::with_capacity(hand_size);
        let mut blue_hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            // Sizes were validated above; the piles cannot run dry here.
            red_hand.extend(red_pile.pop_front());
            blue_hand.extend(blue_pile.pop_front());
        }

        Ok(GameEngine {
            board,
            hands: PerPlayer::new(red_hand, blue_hand),
            piles: PerPlayer::new(red_pile, blue_pile),
            current_player: PlayerColor::Red,
            passed: PerPlayer::new(false, false),
            game_over: false,
            listeners: Vec::new(),
        })
    }

    /// Announce the first turn. Call once, after all listeners are
    /// registered and before any placement or pass.
    pub fn start_game(&mut self) {
        self.notify_turn_start(self.current_player);
    }

    /// Register a status listener. Listeners are notified in registration
    /// order.
    pub fn add_status_listener(&mut self, listener: Box<dyn StatusListener>) {
        self.listeners.push(listener);
    }

    // ------------------------------------------------------------------
    // Mutation surface
    // ------------------------------------------------------------------

    /// Attempt to place the current player's hand card `card_index` at
    /// (row, col).
    ///
    /// Returns `false` with no state change if the game is over, the index
    /// is out of hand range, the target is out of bounds or not pawns, the
    /// pawns belong to the opponent, or there are fewer pawns than the
    /// card's cost.
    ///
    /// On success: the card leaves the hand and lands on the cell, its
    /// influence propagates, the acting player's own pass flag clears, one
    /// replacement card is drawn if the pile is non-empty, and either the
    /// game ends (a player with empty hand and pile) or the turn passes to
    /// the opponent.
    pub fn place_card(&mut self, card_index: usize, row: usize, col: usize) -> bool {
        if !self.is_legal_move(card_index, row, col) {
            return false;
        }
        let actor = self.current_player;
        let card = self.hands.get_mut(actor).remove(card_index);

        // Blue sees every pattern mirrored; this is the game's sole
        // asymmetry mechanism.
        let pattern = match actor {
            PlayerColor::Red => *card.influence(),
            PlayerColor::Blue => card.mirrored_influence(),
        };

        if let Ok(cell) = self.board.get_mut(row, col) {
            cell.place_card(actor, card);
        }
        self.apply_influence(&pattern, row, col);

        // A move resets the acting player's own pass status, not the
        // opponent's. This asymmetry materially changes end-of-game timing.
        *self.passed.get_mut(actor) = false;

        self.draw_card(actor);

        if self.decks_exhausted() {
            self.game_over = true;
            self.notify_game_over();
        } else {
            self.switch_player();
        }
        true
    }

    /// The current player passes. No-op after game over.
    ///
    /// Sets the current player's pass flag; if both flags are now set the
    /// game ends with no draw and no turn switch. Otherwise the player
    /// draws (if possible) and the turn passes. Passing never clears the
    /// opponent's flag.
    pub fn pass(&mut self) {
        if self.game_over {
            return;
        }
        let actor = self.current_player;
        *self.passed.get_mut(actor) = true;

        if self.passed.red && self.passed.blue {
            self.game_over = true;
            self.notify_game_over();
            return;
        }

        self.draw_card(actor);
        self.switch_player();
    }

    // ------------------------------------------------------------------
    // Query surface
    // ------------------------------------------------------------------

    /// A read-only view of this engine for strategies and renderers.
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self)
    }

    pub fn current_player(&self) -> PlayerColor {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, defined only once the game is over. `None` while the
    /// game is running and on a tie (including 0-0).
    pub fn winner(&self) -> Option<PlayerColor> {
        if !self.game_over {
            return None;
        }
        let red = self.total_score(PlayerColor::Red);
        let blue = self.total_score(PlayerColor::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(PlayerColor::Red),
            std::cmp::Ordering::Less => Some(PlayerColor::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Would `place_card(card_index, row, col)` succeed right now?
    pub fn is_legal_move(&self, card_index: usize, row: usize, col: usize) -> bool {
        if self.game_over {
            return false;
        }
        let hand = self.hands.get(self.current_player);
        let Some(card) = hand.get(card_index) else {
            return false;
        };
        let Ok(cell) = self.board.get(row, col) else {
            return false;
        };
        self.is_legal_placement(card, cell)
    }

    /// Placement legality for one card on one cell: the cell must hold
    /// pawns owned by the current player, at least as many as the cost.
    fn is_legal_placement(&self, card: &Card, cell: &Cell) -> bool {
        cell.content() == CellContent::Pawns
            && cell.is_owned_by(self.current_player)
            && cell.pawn_count() >= card.cost()
    }

    /// `color`'s score in one row: sum of value x (1 + pawn count) over the
    /// row's cells holding that player's cards. A card-holding cell always
    /// reports 0 pawns today; the pawn term is kept for compatibility with
    /// any future cell state where it is nonzero.
    ///
    /// Panics if `row >= rows()` (programmer error; row indices come from
    /// iterating `0..rows()`).
    pub fn row_score(&self, row: usize, color: PlayerColor) -> u32 {
        self.board
            .row(row)
            .iter()
            .filter(|cell| cell.has_card() && cell.is_owned_by(color))
            .map(|cell| cell.card_value() * (1 + u32::from(cell.pawn_count())))
            .sum()
    }

    /// `color`'s total: the sum of their row scores over rows they strictly
    /// win. Tied rows award nobody.
    pub fn total_score(&self, color: PlayerColor) -> u32 {
        let mut total = 0;
        for row in 0..self.board.rows() {
            let mine = self.row_score(row, color);
            let theirs = self.row_score(row, color.opposite());
            if mine > theirs {
                total += mine;
            }
        }
        total
    }

    pub fn cell_content(&self, row: usize, col: usize) -> Result<CellContent> {
        Ok(self.board.get(row, col)?.content())
    }

    pub fn owner_of(&self, row: usize, col: usize) -> Result<Option<PlayerColor>> {
        Ok(self.board.get(row, col)?.owner())
    }

    pub fn pawn_count(&self, row: usize, col: usize) -> Result<u8> {
        Ok(self.board.get(row, col)?.pawn_count())
    }

    /// The card at (row, col), cloned so the caller never observes engine
    /// mutation.
    pub fn card_at(&self, row: usize, col: usize) -> Result<Option<Card>> {
        Ok(self.board.get(row, col)?.card().cloned())
    }

    /// Defensive copy of a player's hand (front = index 0 = oldest).
    pub fn hand(&self, color: PlayerColor) -> Vec<Card> {
        self.hands.get(color).clone()
    }

    pub fn hand_size(&self, color: PlayerColor) -> usize {
        self.hands.get(color).len()
    }

    pub fn pile_size(&self, color: PlayerColor) -> usize {
        self.piles.get(color).len()
    }

    /// Independent deep snapshot of the board.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Project `pattern` onto the board around the placement square.
    ///
    /// The center is never a target; out-of-bounds targets are skipped
    /// silently (edge placements simply affect fewer cells). Each pattern
    /// cell maps to a distinct board cell, so iteration order cannot change
    /// the final state.
    fn apply_influence(&mut self, pattern: &Influence, card_row: usize, card_col: usize) {
        let center = INFLUENCE_CENTER as isize;
        for r in 0..INFLUENCE_SIZE {
            for c in 0..INFLUENCE_SIZE {
                if !pattern.at(r, c) || (r == INFLUENCE_CENTER && c == INFLUENCE_CENTER) {
                    continue;
                }
                let target_row = card_row as isize + (r as isize - center);
                let target_col = card_col as isize + (c as isize - center);
                if target_row < 0 || target_col < 0 {
                    continue;
                }
                let (target_row, target_col) = (target_row as usize, target_col as usize);
                if self.board.in_bounds(target_row, target_col) {
                    self.influence_cell(target_row, target_col);
                }
            }
        }
    }

    /// One influenced cell: cards are untouched; empty cells gain a single
    /// pawn for the actor; friendly pawns grow by one (capped); enemy pawns
    /// change ownership with their count intact.
    fn influence_cell(&mut self, row: usize, col: usize) {
        let actor = self.current_player;
        let Ok(cell) = self.board.get_mut(row, col) else {
            return;
        };
        match cell.content() {
            CellContent::Card => {}
            CellContent::Empty => {
                // A single pawn is always a valid count.
                cell.init_pawns(actor, 1).ok();
            }
            CellContent::Pawns => {
                if cell.is_owned_by(actor) {
                    cell.add_pawn();
                } else {
                    cell.convert_pawns(actor);
                }
            }
        }
    }

    /// Move one card from `color`'s pile to their hand; no-op on an empty
    /// pile.
    fn draw_card(&mut self, color: PlayerColor) {
        if let Some(card) = self.piles.get_mut(color).pop_front() {
            self.hands.get_mut(color).push(card);
        }
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
        self.notify_turn_start(self.current_player);
    }

    /// The game ends as soon as either player has nothing left to play or
    /// draw.
    fn decks_exhausted(&self) -> bool {
        let red = self.hands.red.is_empty() && self.piles.red.is_empty();
        let blue = self.hands.blue.is_empty() && self.piles.blue.is_empty();
        red || blue
    }

    /// Dispatch to every listener, in registration order.
    ///
    /// The list is swapped out for the duration of the loop so a callback
    /// that registers a new listener cannot corrupt the in-progress
    /// iteration; newcomers are appended afterwards.
    fn notify_turn_start(&mut self, color: PlayerColor) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener.on_turn_start(color);
        }
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }

    fn notify_game_over(&mut self) {
        let winner = self.winner();
        let winning_score = winner.map(|w| self.total_score(w)).unwrap_or(0);
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener.on_game_over(winner, winning_score);
        }
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("passed", &self.passed)
            .field("game_over", &self.game_over)
            .field("red_hand", &self.hands.red.len())
            .field("blue_hand", &self.hands.blue.len())
            .field("red_pile", &self.piles.red.len())
            .field("blue_pile", &self.piles.blue.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Influence;

    fn plain_card(name: &str) -> Card {
        Card::new(name, 1, 1, Influence::empty()).unwrap()
    }

    fn plain_deck(size: usize) -> Vec<Card> {
        (0..size).map(|i| plain_card(&format!("c{i}"))).collect()
    }

    fn small_engine() -> GameEngine {
        GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 5).unwrap()
    }

    #[test]
    fn test_construction_deals_hands() {
        let engine = small_engine();
        assert_eq!(engine.hand_size(PlayerColor::Red), 5);
        assert_eq!(engine.hand_size(PlayerColor::Blue), 5);
        assert_eq!(engine.pile_size(PlayerColor::Red), 10);
        assert_eq!(engine.pile_size(PlayerColor::Blue), 10);
        assert_eq!(engine.current_player(), PlayerColor::Red);
        assert!(!engine.is_game_over());
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_deal_order_is_deck_order() {
        let engine = small_engine();
        let hand = engine.hand(PlayerColor::Red);
        let names: Vec<&str> = hand.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["c0", "c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_oversized_hand_rejected() {
        // 6 > 15 / 3
        assert!(GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 6).is_err());
    }

    #[test]
    fn test_undersized_deck_rejected() {
        // 3x5 board needs 15 cards per deck
        assert!(GameEngine::new(3, 5, plain_deck(14), plain_deck(15), 4).is_err());
    }

    #[test]
    fn test_invalid_board_rejected() {
        assert!(GameEngine::new(0, 5, plain_deck(15), plain_deck(15), 5).is_err());
        assert!(GameEngine::new(3, 4, plain_deck(15), plain_deck(15), 4).is_err());
    }

    #[test]
    fn test_placement_moves_card_and_draws() {
        let mut engine = small_engine();
        assert!(engine.place_card(0, 0, 0));

        // Card 0 left the hand, one replacement drawn
        assert_eq!(engine.hand_size(PlayerColor::Red), 5);
        assert_eq!(engine.pile_size(PlayerColor::Red), 9);
        assert_eq!(
            engine.cell_content(0, 0).unwrap(),
            CellContent::Card
        );
        assert_eq!(engine.current_player(), PlayerColor::Blue);
    }

    #[test]
    fn test_hand_pile_conservation() {
        let mut engine = small_engine();
        for _ in 0..6 {
            let color = engine.current_player();
            let before = engine.hand_size(color) + engine.pile_size(color);
            let row = 0;
            let moved = (0..engine.cols()).any(|col| engine.place_card(0, row, col));
            if !moved {
                engine.pass();
            }
            // One card is now on the board per placement; hand + pile only
            // ever shrinks by what was placed.
            assert!(engine.hand_size(color) + engine.pile_size(color) <= before);
        }
    }

    #[test]
    fn test_rejected_placements_change_nothing() {
        let mut engine = small_engine();
        let board_before = engine.board_snapshot();
        let hand_before = engine.hand(PlayerColor::Red);

        assert!(!engine.place_card(99, 0, 0)); // bad index
        assert!(!engine.place_card(0, 9, 0)); // out of bounds
        assert!(!engine.place_card(0, 0, 1)); // empty cell
        assert!(!engine.place_card(0, 0, 4)); // blue's pawns

        assert_eq!(engine.board_snapshot(), board_before);
        assert_eq!(engine.hand(PlayerColor::Red), hand_before);
        assert_eq!(engine.current_player(), PlayerColor::Red);
        assert_eq!(engine.pile_size(PlayerColor::Red), 10);
    }

    #[test]
    fn test_cost_exceeds_pawns_rejected() {
        let costly = Card::new("Heavy", 2, 5, Influence::empty()).unwrap();
        let mut red_deck = plain_deck(15);
        red_deck[0] = costly;
        let mut engine = GameEngine::new(3, 5, red_deck, plain_deck(15), 5).unwrap();

        // Column 0 starts with a single pawn; cost 2 cannot be paid.
        assert!(!engine.is_legal_move(0, 0, 0));
        assert!(!engine.place_card(0, 0, 0));
        // Cost-1 card from the same hand is fine.
        assert!(engine.place_card(1, 0, 0));
    }

    #[test]
    fn test_double_pass_ends_game() {
        let mut engine = small_engine();
        engine.pass();
        assert!(!engine.is_game_over());
        assert_eq!(engine.current_player(), PlayerColor::Blue);
        engine.pass();
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_actions_after_game_over_are_noops() {
        let mut engine = small_engine();
        engine.pass();
        engine.pass();
        assert!(engine.is_game_over());

        let board_before = engine.board_snapshot();
        assert!(!engine.place_card(0, 0, 0));
        engine.pass();
        assert_eq!(engine.board_snapshot(), board_before);
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_placement_clears_own_pass_flag_only() {
        // Red passes, Blue places, Red passes again: Red's flag was set the
        // whole time, but Blue's placement cleared only Blue's own flag, so
        // a single set flag never ends the game.
        let mut engine = small_engine();
        engine.pass(); // red passes, turn to blue
        assert!(engine.place_card(0, 0, 4)); // blue places on its column
        engine.pass(); // red passes again
        assert!(!engine.is_game_over());

        engine.pass(); // blue passes: both flags set now
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_pass_then_place_resets_end_timing() {
        // Pass, opponent places, original passer places (clearing their own
        // flag), opponent passes: still not over, because the earlier pass
        // no longer counts.
        let mut engine = small_engine();
        engine.pass(); // red pass
        assert!(engine.place_card(0, 0, 4)); // blue place
        assert!(engine.place_card(0, 0, 0)); // red place clears red's flag
        engine.pass(); // blue pass
        assert!(!engine.is_game_over());

        engine.pass(); // red pass: now both are set
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_winner_requires_strictly_greater_total() {
        let mut engine = small_engine();
        engine.pass();
        engine.pass();
        assert!(engine.is_game_over());
        // Nothing placed: 0-0 is a tie even though the game is over.
        assert_eq!(engine.winner(), None);
    }
}
