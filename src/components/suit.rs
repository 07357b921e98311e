//! Suit group view: one row per suit.

use super::card::card_view;
use crate::cards::Card;
use crate::core::Msg;
use crate::deck::SuitPiles;
use crate::view::{ClassList, Element, Node};

/// Render one suit's cards as
/// `div.suit > (div.suit-available, div.vertical-bar, div.suit-played)`.
///
/// Each pile is sorted ascending by number.
#[must_use]
pub fn suit_view<'a, I>(cards: I) -> Element<Msg>
where
    I: IntoIterator<Item = &'a Card>,
{
    let piles = SuitPiles::partition(cards);
    let pile = |class: &str, cards: &[Card]| {
        Element::div(ClassList::new(class))
            .children(cards.iter().map(|card| Node::from(card_view(card))))
    };

    Element::div(ClassList::new("suit"))
        .child(pile("suit-available", &piles.available))
        .child(Element::div(ClassList::new("vertical-bar")))
        .child(pile("suit-played", &piles.played))
}
