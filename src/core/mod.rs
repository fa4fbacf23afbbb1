//! Core game types: colors, cards, cells, and the board

pub mod board;
pub mod card;
pub mod cell;
pub mod color;

pub use board::Board;
pub use card::{Card, Influence, INFLUENCE_CENTER, INFLUENCE_SIZE};
pub use cell::{Cell, CellContent, MAX_PAWNS};
pub use color::{PerPlayer, PlayerColor};
