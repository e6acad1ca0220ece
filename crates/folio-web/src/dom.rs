// File: src/dom.rs
// Purpose: Element lookup, listener registration and embedded config

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

use folio_core::SiteConfig;

/// `<script type="application/toml" id="site-config">` holding overrides
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for the lifetime of the page
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to attach {} listener: {:?}", event, err);
    }
    closure.forget();
}

/// Same as [`on`] with `{ passive: true }`
pub fn on_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        tracing::warn!("Failed to attach {} listener: {:?}", event, err);
    }
    closure.forget();
}

/// Whether the host exposes `IntersectionObserver`
pub fn has_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Read the embedded configuration, falling back to defaults
pub fn read_config(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    match SiteConfig::from_toml_str(&text) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Ignoring embedded site configuration: {:#}", err);
            SiteConfig::default()
        }
    }
}
