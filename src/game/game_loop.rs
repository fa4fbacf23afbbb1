//! Game loop implementation
//!
//! Drives a game to completion by polling the actor whose turn it is and
//! applying its action to the engine. The loop owns all retry/driver
//! concerns; the engine only validates and applies.

use crate::core::PlayerColor;
use crate::game::actors::{Action, PlayerActor};
use crate::game::{text_view, GameEngine, GameLogger, VerbosityLevel};
use serde::Serialize;

/// Result of running a game to completion
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    /// Winner of the game (None on a tie or an aborted game)
    pub winner: Option<PlayerColor>,
    /// Final total score per side (red, blue)
    pub red_score: u32,
    pub blue_score: u32,
    /// Successful placements made by both sides
    pub moves_played: u32,
    /// Reason the game ended
    pub end_reason: GameEndReason,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEndReason {
    /// Both players passed consecutively
    BothPassed,
    /// A player ran out of cards in hand and pile
    CardsExhausted,
    /// The action safety limit was reached before the game ended
    ActionLimit,
}

/// Turn-dispatching driver for one game.
pub struct GameLoop<'a> {
    engine: &'a mut GameEngine,
    logger: GameLogger,
    /// Safety valve against actors that never end the game.
    max_actions: u32,
}

impl<'a> GameLoop<'a> {
    pub fn new(engine: &'a mut GameEngine) -> Self {
        GameLoop {
            engine,
            logger: GameLogger::default(),
            max_actions: 10_000,
        }
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger = GameLogger::new(verbosity);
        self
    }

    pub fn with_max_actions(mut self, max_actions: u32) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Run until the engine reports game over (or the action limit trips).
    ///
    /// An actor that returns an illegal placement forfeits its turn as a
    /// pass; all searching for alternatives belongs to the actor, not here.
    pub fn run(
        &mut self,
        red: &mut dyn PlayerActor,
        blue: &mut dyn PlayerActor,
    ) -> GameResult {
        self.engine.start_game();
        self.logger.verbose(&text_view::render(&self.engine.view()));

        let mut moves_played = 0u32;
        let mut last_was_placement = false;

        for _ in 0..self.max_actions {
            if self.engine.is_game_over() {
                break;
            }
            let color = self.engine.current_player();
            let action = {
                let view = self.engine.view();
                match color {
                    PlayerColor::Red => red.choose_action(&view),
                    PlayerColor::Blue => blue.choose_action(&view),
                }
            };

            match action {
                Action::Place(mv) => {
                    if self.engine.place_card(mv.card_index, mv.row, mv.col) {
                        moves_played += 1;
                        last_was_placement = true;
                        self.logger.normal(&format!(
                            "{color} places card {} at ({}, {})",
                            mv.card_index, mv.row, mv.col
                        ));
                    } else {
                        // Actors are expected to vet their moves; a bad one
                        // costs the turn.
                        self.logger
                            .normal(&format!("{color} attempted an illegal move, passing"));
                        last_was_placement = false;
                        self.engine.pass();
                    }
                }
                Action::Pass => {
                    self.logger.normal(&format!("{color} passes"));
                    last_was_placement = false;
                    self.engine.pass();
                }
            }
            self.logger.verbose(&text_view::render(&self.engine.view()));
        }

        let end_reason = if !self.engine.is_game_over() {
            GameEndReason::ActionLimit
        } else if last_was_placement {
            GameEndReason::CardsExhausted
        } else {
            GameEndReason::BothPassed
        };

        let result = GameResult {
            winner: self.engine.winner(),
            red_score: self.engine.total_score(PlayerColor::Red),
            blue_score: self.engine.total_score(PlayerColor::Blue),
            moves_played,
            end_reason,
        };
        self.logger
            .minimal(&text_view::render_status(&self.engine.view()));
        result
    }
}
