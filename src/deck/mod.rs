//! Deck state and its per-suit derivations.
//!
//! ## Key Types
//!
//! - `Deck`: Persistent map from card identifier to card
//! - `SuitPiles`: One suit's cards split into available and played piles

pub mod collection;
pub mod piles;

pub use collection::{Deck, Suits};
pub use piles::{Pile, SuitPiles};
