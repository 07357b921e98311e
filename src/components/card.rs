//! Card view.

use crate::cards::Card;
use crate::core::Msg;
use crate::view::{ClassList, Element};

/// Render one card: `div.card.<suit>[.was-played] > div.card-inner`.
///
/// Clicking asks the root to store the card with its played flag inverted.
#[must_use]
pub fn card_view(card: &Card) -> Element<Msg> {
    let classes = ClassList::new("card")
        .with(card.suit.name())
        .with_if("was-played", card.was_played);

    Element::div(classes)
        .on_click(Msg::SetCardState(card.toggled()))
        .child(Element::div(ClassList::new("card-inner")).text(card.number.to_string()))
}
