//! Core tracker types: errors, configuration, messages.
//!
//! These are the building blocks the deck, views and bindings share.

pub mod config;
pub mod error;
pub mod msg;

pub use config::{DeckConfig, SuitLayout, TrackerConfig, DEFAULT_RESET_LABEL, MAX_CARD_NUMBER};
pub use error::TrackerError;
pub use msg::Msg;
