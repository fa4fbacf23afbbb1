//! Card definitions and influence patterns

use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of every influence pattern.
pub const INFLUENCE_SIZE: usize = 5;

/// Row/col of the placement square within the pattern.
pub const INFLUENCE_CENTER: usize = 2;

/// A card's 5x5 influence pattern.
///
/// The center square (2, 2) stands for the cell the card is placed on and is
/// never itself an influence target, even if marked. Blue applies a
/// horizontally mirrored view of the same pattern, so one card definition
/// serves both sides symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influence {
    grid: [[bool; INFLUENCE_SIZE]; INFLUENCE_SIZE],
}

impl Influence {
    /// Build a pattern from a raw 5x5 grid.
    pub fn new(grid: [[bool; INFLUENCE_SIZE]; INFLUENCE_SIZE]) -> Self {
        Influence { grid }
    }

    /// A pattern with no influenced cells at all.
    pub fn empty() -> Self {
        Influence {
            grid: [[false; INFLUENCE_SIZE]; INFLUENCE_SIZE],
        }
    }

    /// Build a pattern from rows of `bool`s, validating the 5x5 shape.
    ///
    /// Accepts any nested-slice input (e.g. parsed file data); returns
    /// `Err` unless it is exactly 5 rows of 5.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        if rows.len() != INFLUENCE_SIZE || rows.iter().any(|r| r.len() != INFLUENCE_SIZE) {
            return Err(EngineError::InvalidCard(
                "influence pattern must be exactly 5x5".to_string(),
            ));
        }
        let mut grid = [[false; INFLUENCE_SIZE]; INFLUENCE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v;
            }
        }
        Ok(Influence { grid })
    }

    /// Does this pattern influence position (row, col)?
    ///
    /// Positions outside the 5x5 grid are simply not influenced.
    pub fn at(&self, row: usize, col: usize) -> bool {
        row < INFLUENCE_SIZE && col < INFLUENCE_SIZE && self.grid[row][col]
    }

    /// The pattern as seen by the second player: columns reversed.
    ///
    /// Pure column reversal (c -> 4 - c); applying it twice returns the
    /// original pattern.
    pub fn mirrored(&self) -> Influence {
        let mut grid = [[false; INFLUENCE_SIZE]; INFLUENCE_SIZE];
        for r in 0..INFLUENCE_SIZE {
            for c in 0..INFLUENCE_SIZE {
                grid[r][c] = self.grid[r][INFLUENCE_SIZE - 1 - c];
            }
        }
        Influence { grid }
    }

    /// Copy of the raw grid.
    pub fn grid(&self) -> [[bool; INFLUENCE_SIZE]; INFLUENCE_SIZE] {
        self.grid
    }
}

/// An immutable card definition: name, pawn cost, scoring value, and the
/// influence pattern projected when the card is placed.
///
/// Two cards are equal iff all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    cost: u8,
    value: u32,
    influence: Influence,
}

impl Card {
    /// Create a card, validating cost (1-3), value (>= 1), and name.
    pub fn new(name: impl Into<String>, cost: u8, value: u32, influence: Influence) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(EngineError::InvalidCard("name must be non-empty".to_string()));
        }
        if !(1..=3).contains(&cost) {
            return Err(EngineError::InvalidCard(format!(
                "cost must be between 1 and 3, got {cost}"
            )));
        }
        if value == 0 {
            return Err(EngineError::InvalidCard("value must be positive".to_string()));
        }
        Ok(Card {
            name,
            cost,
            value,
            influence,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawns required on the target cell to place this card.
    pub fn cost(&self) -> u8 {
        self.cost
    }

    /// Scoring value used in row scores.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The influence pattern from the first player's perspective.
    pub fn influence(&self) -> &Influence {
        &self.influence
    }

    /// The influence pattern from the second player's perspective.
    pub fn mirrored_influence(&self) -> Influence {
        self.influence.mirrored()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {}, value {})", self.name, self.cost, self.value)
    }
}
