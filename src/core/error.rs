//! Errors raised at the tracker's external boundaries.
//!
//! Internal call sites cannot fail: suits, colors and button styles are
//! closed enums. Errors only arise when text coming from outside the crate
//! (a DOM attribute, a host-supplied configuration) is turned into typed
//! values.

use crate::cards::Suit;

/// Failure to parse or validate input from outside the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerError {
    /// Text is not one of the five suit names.
    UnknownSuit(String),

    /// Text is not a `<suit>_<number>` card identifier.
    InvalidCardId(String),

    /// Text is not one of the circle button colors.
    UnknownColor(String),

    /// Text is not an encoded message.
    InvalidMessage(String),

    /// The deck layout has no suits.
    EmptyDeck,

    /// A suit appears more than once in the deck layout.
    DuplicateSuit(Suit),

    /// A suit's highest number is zero or above `MAX_CARD_NUMBER`.
    InvalidMaxNumber { suit: Suit, max_number: u8 },
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::UnknownSuit(s) => write!(f, "unknown suit: {s:?}"),
            TrackerError::InvalidCardId(s) => write!(f, "invalid card id: {s:?}"),
            TrackerError::UnknownColor(s) => write!(f, "unknown circle color: {s:?}"),
            TrackerError::InvalidMessage(s) => write!(f, "invalid message: {s:?}"),
            TrackerError::EmptyDeck => write!(f, "deck layout has no suits"),
            TrackerError::DuplicateSuit(suit) => {
                write!(f, "suit {suit} appears more than once in the deck layout")
            }
            TrackerError::InvalidMaxNumber { suit, max_number } => {
                write!(f, "suit {suit} has invalid max number {max_number}")
            }
        }
    }
}

impl std::error::Error for TrackerError {}
