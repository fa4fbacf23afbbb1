//! Player colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides of a game. Red always moves first and owns the left
/// starting column; Blue owns the right starting column and sees every
/// card's influence pattern mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// The other player.
    pub fn opposite(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Stable index for per-player storage (Red = 0, Blue = 1).
    pub fn index(self) -> usize {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Blue => 1,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// A pair of values indexed by player color.
///
/// Used for hands, draw piles, and pass flags so engine code can say
/// `self.hands.get(color)` instead of branching on Red/Blue everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    pub red: T,
    pub blue: T,
}

impl<T> PerPlayer<T> {
    pub fn new(red: T, blue: T) -> Self {
        PerPlayer { red, blue }
    }

    pub fn get(&self, color: PlayerColor) -> &T {
        match color {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }

    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        match color {
            PlayerColor::Red => &mut self.red,
            PlayerColor::Blue => &mut self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(PlayerColor::Red.opposite(), PlayerColor::Blue);
        assert_eq!(PlayerColor::Blue.opposite(), PlayerColor::Red);
        assert_eq!(PlayerColor::Red.opposite().opposite(), PlayerColor::Red);
    }

    #[test]
    fn test_per_player_access() {
        let mut pair = PerPlayer::new(1, 2);
        assert_eq!(*pair.get(PlayerColor::Red), 1);
        assert_eq!(*pair.get(PlayerColor::Blue), 2);

        *pair.get_mut(PlayerColor::Blue) = 7;
        assert_eq!(*pair.get(PlayerColor::Blue), 7);
    }
}
