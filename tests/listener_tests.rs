//! Status listener tests
//!
//! Notifications are synchronous, delivered in registration order, and
//! carry the winner and winning score on game over.

use pawnstorm::core::{Card, Influence, PlayerColor};
use pawnstorm::game::{GameEngine, StatusListener};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    TurnStart(&'static str, PlayerColor),
    GameOver(&'static str, Option<PlayerColor>, u32),
}

struct Recorder {
    tag: &'static str,
    log: Rc<RefCell<Vec<Event>>>,
}

impl StatusListener for Recorder {
    fn on_turn_start(&mut self, color: PlayerColor) {
        self.log.borrow_mut().push(Event::TurnStart(self.tag, color));
    }

    fn on_game_over(&mut self, winner: Option<PlayerColor>, winning_score: u32) {
        self.log
            .borrow_mut()
            .push(Event::GameOver(self.tag, winner, winning_score));
    }
}

fn plain_deck(size: usize) -> Vec<Card> {
    (0..size)
        .map(|i| Card::new(format!("c{i}"), 1, 1, Influence::empty()).unwrap())
        .collect()
}

fn engine_with_recorders(log: &Rc<RefCell<Vec<Event>>>, tags: &[&'static str]) -> GameEngine {
    let mut engine = GameEngine::new(3, 5, plain_deck(15), plain_deck(15), 5).unwrap();
    for &tag in tags {
        engine.add_status_listener(Box::new(Recorder {
            tag,
            log: Rc::clone(log),
        }));
    }
    engine
}

#[test]
fn start_game_announces_first_turn() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_recorders(&log, &["a"]);

    assert!(log.borrow().is_empty());
    engine.start_game();
    assert_eq!(
        *log.borrow(),
        vec![Event::TurnStart("a", PlayerColor::Red)]
    );
}

#[test]
fn listeners_fire_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_recorders(&log, &["first", "second"]);

    engine.start_game();
    assert_eq!(
        *log.borrow(),
        vec![
            Event::TurnStart("first", PlayerColor::Red),
            Event::TurnStart("second", PlayerColor::Red),
        ]
    );
}

#[test]
fn placement_and_pass_notify_next_turn() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_recorders(&log, &["a"]);

    assert!(engine.place_card(0, 0, 0));
    assert_eq!(
        log.borrow().last(),
        Some(&Event::TurnStart("a", PlayerColor::Blue))
    );

    engine.pass();
    assert_eq!(
        log.borrow().last(),
        Some(&Event::TurnStart("a", PlayerColor::Red))
    );
}

#[test]
fn game_over_reports_winner_and_score() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_recorders(&log, &["a"]);

    assert!(engine.place_card(0, 0, 0)); // red scores 1 in row 0
    engine.pass(); // blue
    engine.pass(); // red: both flags set
    assert!(engine.is_game_over());

    assert_eq!(
        log.borrow().last(),
        Some(&Event::GameOver("a", Some(PlayerColor::Red), 1))
    );
}

#[test]
fn tie_reports_no_winner_and_zero_score() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine_with_recorders(&log, &["a"]);

    engine.pass();
    engine.pass();
    assert_eq!(log.borrow().last(), Some(&Event::GameOver("a", None, 0)));
}
