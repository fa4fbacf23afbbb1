//! Error types for the pawnstorm engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid board dimensions: {rows} rows x {cols} cols")]
    InvalidBoard { rows: usize, cols: usize },

    #[error("Invalid pawn count: {0} (must be 1-3)")]
    InvalidPawnCount(u8),

    #[error("Cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Invalid deck format: {0}")]
    InvalidDeckFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
