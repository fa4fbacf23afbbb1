//! Player actors: the things that produce actions on their turn
//!
//! The engine never asks anyone for input; the game loop polls the actor
//! whose turn it is with a read-only view and applies whatever it returns.
//! Strategy-backed actors wrap a pure [`MoveStrategy`]; the interactive
//! actor reads moves from stdin.

use crate::core::PlayerColor;
use crate::game::GameView;
use crate::strategy::{Move, MoveStrategy};
use std::io::{BufRead, Write};

/// What an actor wants to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a hand card at a board position.
    Place(Move),
    /// Pass the turn.
    Pass,
}

/// A source of actions for one side.
pub trait PlayerActor {
    /// The side this actor plays.
    fn color(&self) -> PlayerColor;

    /// Decide this turn's action. Called only when it is this actor's turn.
    fn choose_action(&mut self, view: &GameView) -> Action;
}

/// An automated actor driven by a move strategy; passes when the strategy
/// finds no move.
pub struct StrategyActor {
    color: PlayerColor,
    strategy: Box<dyn MoveStrategy>,
}

impl StrategyActor {
    pub fn new(color: PlayerColor, strategy: Box<dyn MoveStrategy>) -> Self {
        StrategyActor { color, strategy }
    }
}

impl PlayerActor for StrategyActor {
    fn color(&self) -> PlayerColor {
        self.color
    }

    fn choose_action(&mut self, view: &GameView) -> Action {
        match self.strategy.choose_move(view, self.color) {
            Some(mv) => Action::Place(mv),
            None => Action::Pass,
        }
    }
}

/// A human actor reading moves from stdin.
///
/// Accepts `pass` or `CARD ROW COL` (zero-based). Re-prompts on malformed
/// or illegal input until something playable arrives.
pub struct InteractiveActor {
    color: PlayerColor,
}

impl InteractiveActor {
    pub fn new(color: PlayerColor) -> Self {
        InteractiveActor { color }
    }

    fn parse_line(line: &str) -> Option<Action> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("pass") {
            return Some(Action::Pass);
        }
        let mut parts = line.split_whitespace();
        let card_index = parts.next()?.parse().ok()?;
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Action::Place(Move::new(card_index, row, col)))
    }
}

impl PlayerActor for InteractiveActor {
    fn color(&self) -> PlayerColor {
        self.color
    }

    fn choose_action(&mut self, view: &GameView) -> Action {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{} move (CARD ROW COL | pass): ", self.color);
            let _ = std::io::stdout().flush();
            let Some(Ok(line)) = lines.next() else {
                // stdin closed: nothing more to play
                return Action::Pass;
            };
            match Self::parse_line(&line) {
                Some(Action::Place(mv)) if !view.is_legal_move(mv.card_index, mv.row, mv.col) => {
                    println!("illegal move, try again");
                }
                Some(action) => return action,
                None => println!("could not parse that, try again"),
            }
        }
    }
}
