//! # crew-tracker
//!
//! A card tracker for The Crew, mountable into a web page.
//!
//! The deck holds four colored suits numbered 1-9 and rockets numbered
//! 1-4. Clicking a card moves it between its suit's "available" and
//! "played" piles; a reset button restores the initial deck.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: The application root owns the deck. Views borrow
//!    it and answer clicks with messages, never with writes.
//!
//! 2. **Whole-Value Updates**: A transition builds a new deck (`im`
//!    persistent map) instead of editing the old one in place.
//!
//! 3. **Views Are Data**: Components return an element tree carrying class
//!    names only. Appearance belongs to an external stylesheet.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, messages
//! - `cards`: Suits, card identifiers, cards
//! - `deck`: The deck and its per-suit piles
//! - `view`: Element tree, class lists, HTML serialization
//! - `components`: Card, suit and button views and the application root
//! - `web`: Browser mounting (feature `web`)

pub mod core;
pub mod cards;
pub mod deck;
pub mod view;
pub mod components;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{DeckConfig, Msg, SuitLayout, TrackerConfig, TrackerError};

pub use crate::cards::{Card, CardId, Suit};

pub use crate::deck::{Deck, SuitPiles};

pub use crate::view::{ClassList, Element, Node};

pub use crate::components::{
    card_view, suit_view,
    App, SubscriptionId,
    ButtonStyle, CircleButton, CircleColor, LinkButton, NiceButton,
};
