//! Card identifiers and card values.
//!
//! A card's identifier is never stored: it is always derived from the
//! card's suit and number, so the two cannot drift apart.

use serde::{Deserialize, Serialize};

use super::suit::Suit;
use crate::core::TrackerError;

/// Identifier of a card, rendered as `"<suit>_<number>"`.
///
/// Ordered by suit (canonical order) then number, which is the order a
/// deck iterates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CardId {
    pub suit: Suit,
    pub number: u8,
}

impl CardId {
    /// Create a card identifier.
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.suit, self.number)
    }
}

impl std::str::FromStr for CardId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidCardId(s.to_string());
        let (suit, number) = s.split_once('_').ok_or_else(invalid)?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
        // Only the canonical form: no sign, no leading zeros.
        if number.is_empty() || number.starts_with('0') || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = number.parse::<u8>().map_err(|_| invalid())?;
        Ok(Self::new(suit, number))
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CardId {
    type Error = TrackerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One card and whether it has been played.
///
/// Cards are values: a state change produces a new card
/// (see [`Card::toggled`]) rather than mutating one in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub number: u8,
    pub was_played: bool,
}

impl Card {
    /// Create an unplayed card.
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number, was_played: false }
    }

    /// The card's identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.suit, self.number)
    }

    /// A copy of this card with the played flag inverted.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { was_played: !self.was_played, ..self }
    }

    /// A copy of this card with the played flag set.
    #[must_use]
    pub const fn with_played(self, was_played: bool) -> Self {
        Self { was_played, ..self }
    }
}
