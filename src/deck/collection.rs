//! The deck: every card keyed by its identifier.
//!
//! Backed by `im::OrdMap`, so replacing one card yields a new deck that
//! shares structure with the old one. Decks are never edited in place and
//! cards are never added or removed after construction.

use im::OrdMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, Suit};
use crate::core::DeckConfig;

/// Distinct suits of a deck, in first-occurrence order.
pub type Suits = SmallVec<[Suit; 5]>;

/// Mapping from card identifier to card.
///
/// Iterates in identifier order: canonical suit order, then number.
///
/// ## Usage
///
/// ```
/// use crew_tracker::cards::{CardId, Suit};
/// use crew_tracker::deck::Deck;
///
/// let deck = Deck::initial();
/// assert_eq!(deck.len(), 40);
///
/// let id = CardId::new(Suit::Red, 3);
/// let card = deck.get(id).unwrap().toggled();
/// let updated = deck.with_card(card).unwrap();
///
/// assert!(updated.get(id).unwrap().was_played);
/// assert!(!deck.get(id).unwrap().was_played);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: OrdMap<CardId, Card>,
}

impl Deck {
    /// The standard 40-card deck, nothing played.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_config(&DeckConfig::standard())
    }

    /// Build a fresh deck, nothing played, from a layout.
    ///
    /// The layout is expected to have passed `DeckConfig::validate`.
    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Self {
        let cards = config
            .suits
            .iter()
            .flat_map(|layout| (1..=layout.max_number).map(move |n| Card::new(layout.suit, n)))
            .map(|card| (card.id(), card))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if the deck holds a card with this identifier.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// All cards in identifier order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards of one suit, ascending by number.
    pub fn cards_of_suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards().filter(move |card| card.suit == suit)
    }

    /// Number of cards currently marked played.
    #[must_use]
    pub fn played_count(&self) -> usize {
        self.cards().filter(|card| card.was_played).count()
    }

    /// A new deck with the entry for `card`'s identifier replaced by `card`.
    ///
    /// Returns `None` if the deck has no such card; cards are never added.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Option<Self> {
        let id = card.id();
        if !self.contains(id) {
            return None;
        }
        Some(Self { cards: self.cards.update(id, card) })
    }

    /// Distinct suits present, in the order they are first met while
    /// iterating the deck.
    #[must_use]
    pub fn suits(&self) -> Suits {
        let mut seen = FxHashSet::default();
        self.cards()
            .map(|card| card.suit)
            .filter(|suit| seen.insert(*suit))
            .collect()
    }
}
