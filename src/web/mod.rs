//! Browser bindings for the tracker.
//!
//! This module mounts the application into a host page with wasm-bindgen.
//!
//! # Quick Start
//!
//! ```javascript
//! import init, { mount, mount_with_config } from "./crew_tracker.js";
//!
//! await init();
//!
//! // Standard deck
//! const tracker = mount("tracker");
//!
//! // Custom layout
//! const small = mount_with_config("small", JSON.stringify({
//!   deck: { suits: [{ suit: "rocket", max_number: 4 }] },
//!   reset_label: "Again",
//! }));
//! ```
//!
//! The whole tree is re-serialized into the host element after every
//! transition. Clicks are routed by one listener on the host element,
//! which reads the `data-action` attribute of the nearest clickable
//! ancestor of the click target.
//!
//! An element hosts at most one tracker at a time. Freeing the handle
//! (`tracker.free()`) detaches the listener and releases the element for
//! a new mount; the last rendered markup stays in place.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::components::App;
use crate::core::{Msg, TrackerConfig};
use crate::view::ACTION_ATTR;

/// Attribute marking a host element that currently has a tracker mounted.
pub const MOUNTED_ATTR: &str = "data-tracker-mounted";

/// A tracker mounted into a host element.
///
/// The click listener lives exactly as long as this handle.
#[wasm_bindgen]
pub struct Tracker {
    app: Rc<RefCell<App>>,
    root: web_sys::Element,
    on_click: Closure<dyn FnMut(Event)>,
}

/// Mount a standard-deck tracker into the element with id `root_id`.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<Tracker, JsValue> {
    Tracker::mount(root_id, App::new())
}

/// Mount a tracker configured by a JSON `TrackerConfig`.
#[wasm_bindgen]
pub fn mount_with_config(root_id: &str, config_json: &str) -> Result<Tracker, JsValue> {
    let config: TrackerConfig =
        serde_json::from_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let app = App::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Tracker::mount(root_id, app)
}

impl Tracker {
    fn mount(root_id: &str, app: App) -> Result<Self, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {root_id:?}")))?;
        if root.has_attribute(MOUNTED_ATTR) {
            return Err(JsValue::from_str(&format!(
                "element {root_id:?} already hosts a tracker"
            )));
        }

        let app = Rc::new(RefCell::new(app));
        redraw(&root, &app.borrow());

        let on_click = {
            let app = Rc::clone(&app);
            let root = root.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(msg) = action_of(&event) else {
                    return;
                };
                app.borrow_mut().dispatch(msg);
                redraw(&root, &app.borrow());
            })
        };
        // From here on, `Drop` undoes a partial mount.
        let tracker = Self { app, root, on_click };
        tracker.root.set_attribute(MOUNTED_ATTR, "")?;
        tracker
            .root
            .add_event_listener_with_callback("click", tracker.on_click.as_ref().unchecked_ref())?;

        info!("mounted tracker into #{root_id}");
        Ok(tracker)
    }

    fn apply(&self, msg: Msg) {
        self.app.borrow_mut().dispatch(msg);
        redraw(&self.root, &self.app.borrow());
    }
}

#[wasm_bindgen]
impl Tracker {
    /// Put every card back into its available pile.
    pub fn reset(&self) {
        self.apply(Msg::Reset);
    }

    /// Number of cards currently played.
    #[wasm_bindgen(js_name = playedCount)]
    pub fn played_count(&self) -> usize {
        self.app.borrow().deck().played_count()
    }

    /// Whether no card differs from a fresh deck.
    #[wasm_bindgen(js_name = isPristine)]
    pub fn is_pristine(&self) -> bool {
        self.app.borrow().is_pristine()
    }

    /// Current deck as JSON, keyed by card id.
    #[wasm_bindgen(js_name = deckJson)]
    pub fn deck_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.app.borrow().deck()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        let detached = self
            .root
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
            .and_then(|()| self.root.remove_attribute(MOUNTED_ATTR));
        if let Err(err) = detached {
            warn!("failed to detach tracker: {err:?}");
        }
    }
}

fn redraw(root: &web_sys::Element, app: &App) {
    root.set_inner_html(&app.render().to_html());
}

/// Message of the nearest enabled clickable element around the click target.
fn action_of(event: &Event) -> Option<Msg> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let source = target.closest(&format!("[{ACTION_ATTR}]")).ok()??;
    if source.has_attribute("disabled") {
        return None;
    }
    let action = source.get_attribute(ACTION_ATTR)?;
    match action.parse() {
        Ok(msg) => Some(msg),
        Err(err) => {
            warn!("{err}");
            None
        }
    }
}
