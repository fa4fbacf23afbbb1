//! Board cells
//!
//! A cell is in exactly one of three states: empty, holding pawns, or
//! holding a placed card. Mutators that don't apply to the current state are
//! silent no-ops rather than errors, which keeps influence propagation
//! branch-free per cell. Placement legality is the engine's responsibility,
//! not the cell's.

use crate::core::{Card, PlayerColor};
use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Maximum pawns a single cell can hold.
pub const MAX_PAWNS: u8 = 3;

/// Coarse tag for what a cell currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Pawns,
    Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum CellState {
    Empty,
    Pawns { owner: PlayerColor, count: u8 },
    Card { owner: PlayerColor, card: Card },
}

/// A single board slot.
///
/// `Clone` produces a fully independent deep copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    /// A new empty cell.
    pub fn new() -> Self {
        Cell {
            state: CellState::Empty,
        }
    }

    /// Put `count` pawns owned by `owner` on this cell, overwriting any
    /// prior state. Count must be 1-3.
    pub fn init_pawns(&mut self, owner: PlayerColor, count: u8) -> Result<()> {
        if !(1..=MAX_PAWNS).contains(&count) {
            return Err(EngineError::InvalidPawnCount(count));
        }
        self.state = CellState::Pawns { owner, count };
        Ok(())
    }

    /// Place a card for `owner`, replacing whatever was here.
    ///
    /// Unconditional: the engine checks legality before calling this.
    pub fn place_card(&mut self, owner: PlayerColor, card: Card) {
        self.state = CellState::Card { owner, card };
    }

    /// Add one pawn if this cell holds pawns below the cap; otherwise no-op.
    pub fn add_pawn(&mut self) {
        if let CellState::Pawns { count, .. } = &mut self.state {
            if *count < MAX_PAWNS {
                *count += 1;
            }
        }
    }

    /// Hand ownership of any pawns here to `new_owner`; no-op unless this
    /// cell holds pawns (cards are never reassigned by influence).
    pub fn convert_pawns(&mut self, new_owner: PlayerColor) {
        if let CellState::Pawns { owner, .. } = &mut self.state {
            *owner = new_owner;
        }
    }

    pub fn content(&self) -> CellContent {
        match self.state {
            CellState::Empty => CellContent::Empty,
            CellState::Pawns { .. } => CellContent::Pawns,
            CellState::Card { .. } => CellContent::Card,
        }
    }

    /// Owner of the pawns or card here, if any.
    pub fn owner(&self) -> Option<PlayerColor> {
        match self.state {
            CellState::Empty => None,
            CellState::Pawns { owner, .. } | CellState::Card { owner, .. } => Some(owner),
        }
    }

    /// Number of pawns here (0 unless in the pawns state; a card-holding
    /// cell always reports 0).
    pub fn pawn_count(&self) -> u8 {
        match self.state {
            CellState::Pawns { count, .. } => count,
            _ => 0,
        }
    }

    /// The placed card, if any.
    pub fn card(&self) -> Option<&Card> {
        match &self.state {
            CellState::Card { card, .. } => Some(card),
            _ => None,
        }
    }

    /// Value of the placed card, or 0 if no card.
    pub fn card_value(&self) -> u32 {
        self.card().map(Card::value).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, CellState::Empty)
    }

    pub fn has_pawns(&self) -> bool {
        matches!(self.state, CellState::Pawns { .. })
    }

    pub fn has_card(&self) -> bool {
        matches!(self.state, CellState::Card { .. })
    }

    /// True if this cell holds pawns or a card belonging to `color`.
    pub fn is_owned_by(&self, color: PlayerColor) -> bool {
        self.owner() == Some(color)
    }

    /// One-character symbol for textual rendering: `_` empty, pawn count
    /// digit, `R`/`B` for a card's owner.
    pub fn symbol(&self) -> char {
        match &self.state {
            CellState::Empty => '_',
            CellState::Pawns { count, .. } => char::from(b'0' + count),
            CellState::Card { owner, .. } => match owner {
                PlayerColor::Red => 'R',
                PlayerColor::Blue => 'B',
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new()
    }
}
