//! Deck property tests.
//!
//! These drive the application through random sequences of toggles and
//! resets and check the deck and per-suit piles after every step.

use proptest::prelude::*;

use crew_tracker::cards::{Card, CardId, Suit};
use crew_tracker::components::App;
use crew_tracker::core::Msg;
use crew_tracker::deck::{Deck, SuitPiles};

#[derive(Clone, Copy, Debug)]
enum Op {
    /// Click the card at this position in deck order.
    Toggle(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..40).prop_map(Op::Toggle),
        1 => Just(Op::Reset),
    ]
}

fn nth_card(app: &App, index: usize) -> Card {
    *app.deck().cards().nth(index).expect("index within deck")
}

fn apply(app: &mut App, op: Op) {
    match op {
        Op::Toggle(index) => {
            let card = nth_card(app, index);
            app.dispatch(Msg::SetCardState(card.toggled()));
        }
        Op::Reset => app.dispatch(Msg::Reset),
    }
}

fn run(ops: &[Op]) -> App {
    let mut app = App::new();
    for op in ops {
        apply(&mut app, *op);
    }
    app
}

// =============================================================================
// Deck initializer
// =============================================================================

#[test]
fn test_initial_deck_has_forty_cards() {
    assert_eq!(Deck::initial().len(), 40);
}

#[test]
fn test_initial_deck_ids_match_cards() {
    for card in Deck::initial().cards() {
        let id = card.id();
        assert_eq!(id.to_string(), format!("{}_{}", card.suit, card.number));
        assert_eq!(id.to_string().parse::<CardId>(), Ok(id));
    }
}

#[test]
fn test_initial_deck_number_ranges() {
    for card in Deck::initial().cards() {
        let max = if card.suit == Suit::Rocket { 4 } else { 9 };
        assert!((1..=max).contains(&card.number), "{} out of range", card.id());
        assert!(!card.was_played);
    }
}

#[test]
fn test_initial_deck_is_value_equal_across_calls() {
    assert_eq!(Deck::initial(), Deck::initial());
}

#[test]
fn test_reset_of_untouched_deck_is_noop() {
    let mut app = App::new();
    let before = app.deck().clone();
    app.reset();
    assert_eq!(app.deck(), &before);
}

#[test]
fn test_every_card_message_round_trips() {
    for card in Deck::initial().cards() {
        for msg in [Msg::SetCardState(*card), Msg::SetCardState(card.toggled())] {
            assert_eq!(msg.to_string().parse::<Msg>(), Ok(msg));
        }
    }
}

// =============================================================================
// Properties over random histories
// =============================================================================

proptest! {
    #[test]
    fn toggling_twice_restores_the_deck(ops in prop::collection::vec(op(), 0..30), index in 0usize..40) {
        let mut app = run(&ops);
        let before = app.deck().clone();

        apply(&mut app, Op::Toggle(index));
        prop_assert_ne!(app.deck(), &before);
        apply(&mut app, Op::Toggle(index));

        prop_assert_eq!(app.deck(), &before);
    }

    #[test]
    fn toggling_changes_only_one_card(ops in prop::collection::vec(op(), 0..30), index in 0usize..40) {
        let mut app = run(&ops);
        let before = app.deck().clone();
        let target = nth_card(&app, index).id();

        apply(&mut app, Op::Toggle(index));

        prop_assert_eq!(app.deck().len(), before.len());
        for card in before.cards() {
            let after = app.deck().get(card.id()).unwrap();
            if card.id() == target {
                prop_assert_eq!(after.was_played, !card.was_played);
            } else {
                prop_assert_eq!(after, card);
            }
        }
    }

    #[test]
    fn piles_partition_each_suit(ops in prop::collection::vec(op(), 0..40)) {
        let app = run(&ops);
        for suit in app.suits() {
            let input: Vec<Card> = app.deck().cards_of_suit(suit).copied().collect();
            let piles = SuitPiles::partition(&input);

            prop_assert_eq!(piles.available.len() + piles.played.len(), input.len());
            prop_assert!(piles.available.iter().all(|c| !c.was_played));
            prop_assert!(piles.played.iter().all(|c| c.was_played));

            let mut union: Vec<CardId> = piles
                .available
                .iter()
                .chain(piles.played.iter())
                .map(Card::id)
                .collect();
            union.sort();
            let mut expected: Vec<CardId> = input.iter().map(Card::id).collect();
            expected.sort();
            prop_assert_eq!(union, expected);
        }
    }

    #[test]
    fn piles_are_sorted_by_number(ops in prop::collection::vec(op(), 0..40)) {
        let app = run(&ops);
        for suit in app.suits() {
            let piles = SuitPiles::partition(app.deck().cards_of_suit(suit));
            prop_assert!(piles.available.windows(2).all(|w| w[0].number <= w[1].number));
            prop_assert!(piles.played.windows(2).all(|w| w[0].number <= w[1].number));
        }
    }

    #[test]
    fn reset_disabled_iff_deck_is_fresh(ops in prop::collection::vec(op(), 0..30)) {
        let app = run(&ops);
        let fresh = app.deck() == &Deck::initial();

        prop_assert_eq!(app.is_pristine(), fresh);
        prop_assert_eq!(fresh, app.deck().played_count() == 0);

        let el = app.render();
        let button = el.find("nice-button").unwrap();
        prop_assert_eq!(button.disabled, fresh);
    }

    #[test]
    fn reset_restores_initial_deck(ops in prop::collection::vec(op(), 0..30)) {
        let mut app = run(&ops);
        app.dispatch(Msg::Reset);
        prop_assert_eq!(app.deck(), &Deck::initial());
        prop_assert!(app.is_pristine());
    }
}
