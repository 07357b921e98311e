//! Messages: requested state transitions.
//!
//! Views never change state themselves. A clickable element carries a
//! `Msg`, and the application root applies it when the element is clicked.
//!
//! ## Text Encoding
//!
//! Messages travel through the DOM as a `data-action` attribute:
//!
//! - `SetCardState` of a played card: `set-card:red_3:played`
//! - `SetCardState` of an unplayed card: `set-card:red_3:available`
//! - `Reset`: `reset`

use serde::{Deserialize, Serialize};

use super::TrackerError;
use crate::cards::{Card, CardId};

const SET_CARD: &str = "set-card";
const RESET: &str = "reset";
const PLAYED: &str = "played";
const AVAILABLE: &str = "available";

/// A requested state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    /// Replace the deck entry for this card's identifier with this card.
    SetCardState(Card),
    /// Replace the whole deck with a fresh one.
    Reset,
}

impl std::fmt::Display for Msg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Msg::SetCardState(card) => {
                let pile = if card.was_played { PLAYED } else { AVAILABLE };
                write!(f, "{SET_CARD}:{}:{pile}", card.id())
            }
            Msg::Reset => f.write_str(RESET),
        }
    }
}

impl std::str::FromStr for Msg {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidMessage(s.to_string());
        if s == RESET {
            return Ok(Msg::Reset);
        }
        let mut parts = s.split(':');
        let (Some(SET_CARD), Some(id), Some(pile), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let id = id.parse::<CardId>().map_err(|_| invalid())?;
        let was_played = match pile {
            PLAYED => true,
            AVAILABLE => false,
            _ => return Err(invalid()),
        };
        Ok(Msg::SetCardState(Card::new(id.suit, id.number).with_played(was_played)))
    }
}
