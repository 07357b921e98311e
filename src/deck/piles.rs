//! Per-suit piles: available and played.

use smallvec::SmallVec;

use crate::cards::Card;

/// A pile of one suit's cards. A standard suit has at most nine.
pub type Pile = SmallVec<[Card; 9]>;

/// One suit's cards split by played flag, each pile ascending by number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuitPiles {
    /// Cards not yet played.
    pub available: Pile,
    /// Cards already played.
    pub played: Pile,
}

impl SuitPiles {
    /// Split cards by played flag and sort each pile by number.
    ///
    /// The sort is stable: cards with equal numbers keep their input order.
    pub fn partition<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut piles = Self::default();
        for card in cards {
            if card.was_played {
                piles.played.push(*card);
            } else {
                piles.available.push(*card);
            }
        }
        piles.available.sort_by_key(|card| card.number);
        piles.played.sort_by_key(|card| card.number);
        piles
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len() + self.played.len()
    }

    /// Check if both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.played.is_empty()
    }
}
