//! UI components.
//!
//! - `card_view`: one card
//! - `suit_view`: one suit's available and played piles
//! - `App`: the application root and its state
//! - `NiceButton`, `CircleButton`, `LinkButton`: reusable buttons

pub mod app;
pub mod button;
pub mod card;
pub mod suit;

pub use app::{App, SubscriptionId};
pub use button::{ButtonStyle, CircleButton, CircleColor, LinkButton, NiceButton};
pub use card::card_view;
pub use suit::suit_view;
