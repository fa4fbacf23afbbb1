//! Pawnstorm - a two-player card-and-pawns board game engine
//!
//! Players alternate spending pawns to place cards on a grid; each card
//! projects a 5x5 influence pattern onto neighboring cells, and the game is
//! scored per row once both players pass or either runs out of cards.
//!
//! The crate is split into the rule engine (`core` + `game::engine`), a
//! read-only view consumed by pluggable move strategies (`strategy`), and a
//! thin driver layer (game loop, actors, text rendering, deck loading, CLI).

pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod strategy;

pub use error::{EngineError, Result};
