//! Verbosity-gated logging for the driver layer
//!
//! The engine itself stays pure; the game loop and CLI route their output
//! through this logger so games can run silent (benchmarks, tests) or
//! chatty (interactive play) without touching engine code.

use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns and moves (default)
    #[default]
    Normal = 2,
    /// Verbose - moves plus a board render every turn
    Verbose = 3,
}

/// Stdout logger gated by a verbosity level.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
}

impl GameLogger {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        GameLogger { verbosity }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Log at Minimal and above.
    pub fn minimal(&self, message: &str) {
        if self.verbosity >= VerbosityLevel::Minimal {
            println!("{message}");
        }
    }

    /// Log at Normal and above.
    pub fn normal(&self, message: &str) {
        if self.verbosity >= VerbosityLevel::Normal {
            println!("{message}");
        }
    }

    /// Log at Verbose only.
    pub fn verbose(&self, message: &str) {
        if self.verbosity >= VerbosityLevel::Verbose {
            println!("{message}");
        }
    }
}
