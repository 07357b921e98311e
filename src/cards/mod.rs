//! Card system: suits, identifiers and card values.
//!
//! ## Key Types
//!
//! - `Suit`: The five fixed card categories
//! - `CardId`: Derived `"<suit>_<number>"` identifier
//! - `Card`: A card and its played flag

pub mod card;
pub mod suit;

pub use card::{Card, CardId};
pub use suit::Suit;
