//! Deck file parser
//!
//! A deck file is a sequence of card blocks. Each block is a header line
//! `NAME COST VALUE` followed by five 5-character rows describing the
//! influence pattern: `I` influenced, `X` not influenced, `C` the card's own
//! square at the center. `C` is recorded as influence-true, but the engine
//! never targets the center, so it is purely notational.
//!
//! ```text
//! Lance 1 2
//! XXXXX
//! XXIXX
//! XXCIX
//! XXXXX
//! XXXXX
//! ```

use crate::core::{Card, Influence};
use crate::{EngineError, Result};
use std::path::Path;

/// Deck loader for the plain-text card format.
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck from a file.
    pub fn load_from_file(path: &Path) -> Result<Vec<Card>> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a deck from its text content.
    pub fn parse(content: &str) -> Result<Vec<Card>> {
        let mut deck = Vec::new();
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        while let Some(header) = lines.next() {
            let parts: Vec<&str> = header.split_whitespace().collect();
            let [name, cost, value] = parts.as_slice() else {
                return Err(EngineError::InvalidDeckFormat(format!(
                    "invalid card header: {header}"
                )));
            };
            let cost: u8 = cost.parse().map_err(|_| {
                EngineError::InvalidDeckFormat(format!("invalid cost in header: {header}"))
            })?;
            let value: u32 = value.parse().map_err(|_| {
                EngineError::InvalidDeckFormat(format!("invalid value in header: {header}"))
            })?;

            let influence = Self::parse_influence(&mut lines, name)?;
            deck.push(Card::new(*name, cost, value, influence)?);
        }
        Ok(deck)
    }

    fn parse_influence<'a>(
        lines: &mut impl Iterator<Item = &'a str>,
        card_name: &str,
    ) -> Result<Influence> {
        let mut rows = Vec::with_capacity(5);
        for _ in 0..5 {
            let line = lines.next().ok_or_else(|| {
                EngineError::InvalidDeckFormat(format!(
                    "incomplete influence grid for card {card_name}"
                ))
            })?;
            if line.len() != 5 {
                return Err(EngineError::InvalidDeckFormat(format!(
                    "invalid grid row for card {card_name}: {line}"
                )));
            }
            let mut row = Vec::with_capacity(5);
            for ch in line.chars() {
                match ch {
                    'I' | 'C' => row.push(true),
                    'X' => row.push(false),
                    _ => {
                        return Err(EngineError::InvalidDeckFormat(format!(
                            "invalid character '{ch}' in grid for card {card_name}"
                        )))
                    }
                }
            }
            rows.push(row);
        }
        Influence::from_rows(&rows)
    }
}
