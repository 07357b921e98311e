//! Browser tests for the `web` binding.
//!
//! Run with `wasm-pack test --headless --firefox -- --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use crew_tracker::web::{mount, mount_with_config, MOUNTED_ATTR};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================================
// Helpers
// =============================================================================

/// Append an empty `div` with the given id to the page body.
fn host(id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn first(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector:?}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn card_count(root: &Element) -> usize {
    root.inner_html().matches("class=\"card ").count()
}

fn played_card_count(root: &Element) -> usize {
    root.inner_html().matches("was-played\"").count()
}

// =============================================================================
// Mounting
// =============================================================================

#[wasm_bindgen_test]
fn test_mount_renders_standard_deck() {
    let root = host("mount-standard");
    let tracker = mount("mount-standard").unwrap();

    assert!(root.has_attribute(MOUNTED_ATTR));
    assert!(root.inner_html().starts_with("<div class=\"App\">"));
    assert_eq!(card_count(&root), 40);
    assert_eq!(played_card_count(&root), 0);
    assert!(tracker.is_pristine());
    assert_eq!(tracker.played_count(), 0);
}

#[wasm_bindgen_test]
fn test_mount_missing_element_fails() {
    assert!(mount("no-such-element").is_err());
}

#[wasm_bindgen_test]
fn test_mount_with_config_uses_layout_and_label() {
    let root = host("mount-config");
    let tracker = mount_with_config(
        "mount-config",
        r#"{"deck": {"suits": [{"suit": "rocket", "max_number": 4}]}, "reset_label": "Again"}"#,
    )
    .unwrap();

    assert_eq!(card_count(&root), 4);
    assert!(root.inner_html().contains(">Again<"));
    assert_eq!(tracker.deck_json().unwrap().matches("rocket_").count(), 4);
}

#[wasm_bindgen_test]
fn test_mount_with_bad_config_fails() {
    let root = host("mount-bad-config");

    assert!(mount_with_config("mount-bad-config", "{not json").is_err());
    assert!(mount_with_config("mount-bad-config", r#"{"deck": {"suits": []}}"#).is_err());
    assert!(mount_with_config(
        "mount-bad-config",
        r#"{"deck": {"suits": [{"suit": "red", "max_number": 10}]}}"#
    )
    .is_err());

    // Nothing was mounted, so nothing was drawn and the element stays free.
    assert!(!root.has_attribute(MOUNTED_ATTR));
    assert_eq!(root.inner_html(), "");
    assert!(mount("mount-bad-config").is_ok());
}

#[wasm_bindgen_test]
fn test_second_mount_on_same_element_fails() {
    let root = host("mount-twice");
    let tracker = mount("mount-twice").unwrap();
    assert!(mount("mount-twice").is_err());

    // One click still means one toggle: no second listener was attached.
    first(&root, ".card.red").click();
    assert_eq!(tracker.played_count(), 1);
    assert_eq!(played_card_count(&root), 1);
}

// =============================================================================
// Click routing
// =============================================================================

#[wasm_bindgen_test]
fn test_click_on_card_toggles_and_redraws() {
    let root = host("click-card");
    let tracker = mount("click-card").unwrap();

    first(&root, ".card.red").click();
    assert_eq!(tracker.played_count(), 1);
    assert!(!tracker.is_pristine());
    assert!(root.inner_html().contains("class=\"card red was-played\""));
    assert!(tracker.deck_json().unwrap().contains(r#""red_1":{"suit":"red","number":1,"was_played":true}"#));

    // Clicking the played card puts it back.
    first(&root, ".card.was-played").click();
    assert_eq!(tracker.played_count(), 0);
    assert!(tracker.is_pristine());
}

#[wasm_bindgen_test]
fn test_click_inside_card_routes_to_card() {
    let root = host("click-inner");
    let tracker = mount("click-inner").unwrap();

    first(&root, ".card.blue .card-inner").click();
    assert_eq!(tracker.played_count(), 1);
    assert!(root.inner_html().contains("class=\"card blue was-played\""));
}

#[wasm_bindgen_test]
fn test_click_on_reset_button() {
    let root = host("click-reset");
    let tracker = mount("click-reset").unwrap();

    first(&root, ".card.green").click();
    first(&root, ".card.rocket").click();
    assert_eq!(tracker.played_count(), 2);

    first(&root, "[data-action=\"reset\"]").click();
    assert_eq!(tracker.played_count(), 0);
    assert_eq!(played_card_count(&root), 0);
}

#[wasm_bindgen_test]
fn test_disabled_elements_are_skipped() {
    let root = host("click-disabled");
    let tracker = mount("click-disabled").unwrap();

    // Fresh deck: the reset button is rendered disabled.
    let reset = first(&root, "[data-action=\"reset\"]");
    assert!(reset.has_attribute("disabled"));

    // A disabled card is not routed.
    let card = first(&root, ".card.yellow");
    card.set_attribute("disabled", "").unwrap();
    card.click();
    assert_eq!(tracker.played_count(), 0);

    // Neither is a reset button that was disabled after a play.
    first(&root, ".card.red").click();
    assert_eq!(tracker.played_count(), 1);
    let reset = first(&root, "[data-action=\"reset\"]");
    assert!(!reset.has_attribute("disabled"));
    reset.set_attribute("disabled", "").unwrap();
    reset.click();
    assert_eq!(tracker.played_count(), 1);
}

#[wasm_bindgen_test]
fn test_unknown_action_is_ignored() {
    let root = host("click-unknown");
    let tracker = mount("click-unknown").unwrap();

    let card = first(&root, ".card.red");
    card.set_attribute("data-action", "set-card:purple_1:played").unwrap();
    card.click();
    assert_eq!(tracker.played_count(), 0);
    assert_eq!(card_count(&root), 40);
}

#[wasm_bindgen_test]
fn test_reset_from_handle() {
    let root = host("handle-reset");
    let tracker = mount("handle-reset").unwrap();

    first(&root, ".card.red").click();
    first(&root, ".card.blue").click();
    tracker.reset();

    assert!(tracker.is_pristine());
    assert_eq!(played_card_count(&root), 0);
}

// =============================================================================
// Teardown
// =============================================================================

#[wasm_bindgen_test]
fn test_dropped_tracker_detaches_listener() {
    let root = host("teardown");
    let tracker = mount("teardown").unwrap();
    first(&root, ".card.red").click();
    drop(tracker);

    // The markup stays, but clicks no longer reach anything.
    assert!(!root.has_attribute(MOUNTED_ATTR));
    let markup = root.inner_html();
    first(&root, ".card.green").click();
    assert_eq!(root.inner_html(), markup);

    // The element can host a new tracker, driven by one listener only.
    let tracker = mount("teardown").unwrap();
    assert!(tracker.is_pristine());
    assert_eq!(played_card_count(&root), 0);
    first(&root, ".card.green").click();
    assert_eq!(tracker.played_count(), 1);
}
