//! Tracker configuration types.
//!
//! Hosts configure the tracker at mount time by providing:
//! - `SuitLayout`: One suit and the highest number it runs to
//! - `DeckConfig`: The suits making up the deck
//! - `TrackerConfig`: Combines the deck layout with display options
//!
//! All types deserialize from JSON so a host page can pass a configuration
//! string. Deserialized values must go through `validate()` before use.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::TrackerError;
use crate::cards::Suit;

/// Highest number a suit may run to.
pub const MAX_CARD_NUMBER: u8 = 9;

/// Label of the reset button unless configured otherwise.
pub const DEFAULT_RESET_LABEL: &str = "Reset Cards";

/// One suit of the deck and the numbers it covers (`1..=max_number`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitLayout {
    pub suit: Suit,
    pub max_number: u8,
}

impl SuitLayout {
    /// Create a suit layout.
    #[must_use]
    pub const fn new(suit: Suit, max_number: u8) -> Self {
        Self { suit, max_number }
    }

    /// The suit's layout in the standard deck.
    #[must_use]
    pub const fn standard(suit: Suit) -> Self {
        Self::new(suit, suit.max_number())
    }
}

/// Which cards make up a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub suits: Vec<SuitLayout>,
}

impl DeckConfig {
    /// An empty layout. Add suits with `with_suit`.
    #[must_use]
    pub fn new() -> Self {
        Self { suits: Vec::new() }
    }

    /// The standard 40-card deck: four colored suits of 1-9 and rockets 1-4.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            suits: Suit::all().into_iter().map(SuitLayout::standard).collect(),
        }
    }

    /// Add a suit.
    #[must_use]
    pub fn with_suit(mut self, suit: Suit, max_number: u8) -> Self {
        self.suits.push(SuitLayout::new(suit, max_number));
        self
    }

    /// Total number of cards the layout produces.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suits.iter().map(|layout| layout.max_number as usize).sum()
    }

    /// Check the layout describes a usable deck.
    ///
    /// Rejects an empty layout, a suit listed twice, and a suit whose
    /// highest number is zero or above `MAX_CARD_NUMBER`.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.suits.is_empty() {
            return Err(TrackerError::EmptyDeck);
        }
        let mut seen = FxHashSet::default();
        for layout in &self.suits {
            if !seen.insert(layout.suit) {
                return Err(TrackerError::DuplicateSuit(layout.suit));
            }
            if layout.max_number == 0 || layout.max_number > MAX_CARD_NUMBER {
                return Err(TrackerError::InvalidMaxNumber {
                    suit: layout.suit,
                    max_number: layout.max_number,
                });
            }
        }
        Ok(())
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete tracker configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Deck layout used at start and on every reset.
    pub deck: DeckConfig,

    /// Text of the reset button.
    pub reset_label: String,
}

impl TrackerConfig {
    /// Create the default configuration (standard deck).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck layout.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Set the reset button label.
    #[must_use]
    pub fn with_reset_label(mut self, label: impl Into<String>) -> Self {
        self.reset_label = label.into();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), TrackerError> {
        self.deck.validate()
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            deck: DeckConfig::standard(),
            reset_label: DEFAULT_RESET_LABEL.to_string(),
        }
    }
}
