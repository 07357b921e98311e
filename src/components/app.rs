//! Application root: owns the deck and renders the whole tracker.
//!
//! ## State
//!
//! The only state is the deck. Two transitions change it:
//! - `set_card_state`: replace one card
//! - `reset`: replace the whole deck with a fresh one
//!
//! Both go through `dispatch`, which notifies every subscriber once the
//! new deck is in place. A listener therefore always sees the latest
//! completed transition.
//!
//! ## Derived Values
//!
//! Suits and reset enablement are recomputed on every render, never cached.

use log::{debug, warn};

use super::button::NiceButton;
use super::suit::suit_view;
use crate::cards::Card;
use crate::core::{Msg, TrackerConfig, TrackerError};
use crate::deck::{Deck, Suits};
use crate::view::{ClassList, Element, Node};

/// Handle returned by `App::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Deck)>;

/// The tracker application.
///
/// ```
/// use crew_tracker::cards::{CardId, Suit};
/// use crew_tracker::components::App;
/// use crew_tracker::core::Msg;
///
/// let mut app = App::new();
/// let card = *app.deck().get(CardId::new(Suit::Red, 3)).unwrap();
///
/// app.dispatch(Msg::SetCardState(card.toggled()));
/// assert!(!app.is_pristine());
///
/// app.dispatch(Msg::Reset);
/// assert!(app.is_pristine());
/// ```
pub struct App {
    config: TrackerConfig,
    deck: Deck,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl App {
    /// Create an app with the standard deck.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(TrackerConfig::default())
    }

    /// Create an app from a configuration, validating it first.
    pub fn with_config(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TrackerConfig) -> Self {
        let deck = Deck::from_config(&config.deck);
        Self {
            config,
            deck,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Configuration the tracker was built with; resets rebuild from it.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// A deck as it was before any card was toggled.
    #[must_use]
    pub fn fresh_deck(&self) -> Deck {
        Deck::from_config(&self.config.deck)
    }

    /// Check the deck equals a fresh one. The reset button is disabled
    /// exactly when this holds.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.deck == self.fresh_deck()
    }

    /// Distinct suits of the current deck, in first-occurrence order.
    #[must_use]
    pub fn suits(&self) -> Suits {
        self.deck.suits()
    }

    /// Apply a message and notify subscribers.
    pub fn dispatch(&mut self, msg: Msg) {
        match msg {
            Msg::SetCardState(card) => self.set_card_state(card),
            Msg::Reset => self.reset(),
        }
    }

    /// Store `card` under its identifier, leaving every other card as is.
    ///
    /// Cards the deck does not hold are ignored.
    pub fn set_card_state(&mut self, card: Card) {
        match self.deck.with_card(card) {
            Some(deck) => {
                debug!("card {} played={}", card.id(), card.was_played);
                self.replace_deck(deck);
            }
            None => warn!("ignoring update for unknown card {}", card.id()),
        }
    }

    /// Replace the deck with a fresh one.
    pub fn reset(&mut self) {
        debug!("reset deck ({} cards were played)", self.deck.played_count());
        let deck = self.fresh_deck();
        self.replace_deck(deck);
    }

    fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
        for (_, listener) in &mut self.listeners {
            listener(&self.deck);
        }
    }

    /// Register a listener called with the new deck after every transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&Deck) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Render `div.App`: one suit row per suit, then the reset button row.
    #[must_use]
    pub fn render(&self) -> Element<Msg> {
        let rows = self
            .suits()
            .into_iter()
            .map(|suit| Node::from(suit_view(self.deck.cards_of_suit(suit))));

        let reset = NiceButton::new()
            .primary()
            .on_click(Msg::Reset)
            .disabled(self.is_pristine())
            .label(self.config.reset_label.clone())
            .render();

        Element::div(ClassList::new("App"))
            .children(rows)
            .child(Element::div(ClassList::new("button-row")).child(reset))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("deck", &self.deck)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
