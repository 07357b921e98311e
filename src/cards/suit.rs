//! Card suits.

use serde::{Deserialize, Serialize};

use crate::core::TrackerError;

/// One of the five card categories.
///
/// The declaration order (red, green, blue, yellow, rocket) is the
/// canonical order: decks are built in it and suit rows render in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Red,
    Green,
    Blue,
    Yellow,
    Rocket,
}

impl Suit {
    /// All suits in canonical order.
    pub const fn all() -> [Suit; 5] {
        [Suit::Red, Suit::Green, Suit::Blue, Suit::Yellow, Suit::Rocket]
    }

    /// Highest card number in the standard deck.
    ///
    /// Rocket cards run 1 to 4, every colored suit 1 to 9.
    #[must_use]
    pub const fn max_number(self) -> u8 {
        match self {
            Suit::Rocket => 4,
            _ => 9,
        }
    }

    /// Lowercase name, also used as the suit's styling hook.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Red => "red",
            Suit::Green => "green",
            Suit::Blue => "blue",
            Suit::Yellow => "yellow",
            Suit::Rocket => "rocket",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suit {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::all()
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| TrackerError::UnknownSuit(s.to_string()))
    }
}
