//! Theme toggle with a persisted preference

use web_sys::{Document, Storage, Window};

use folio_core::config::ThemeConfig;
use folio_core::Theme;

use crate::dom;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn init(window: &Window, document: &Document, config: &ThemeConfig) {
    let Some(toggle) = document.get_element_by_id("theme-toggle") else {
        return;
    };

    // Private browsing can deny storage; the toggle still works for the page
    let storage = window.local_storage().ok().flatten();
    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(&config.storage_key).ok().flatten());
    let prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);

    let initial = Theme::initial(stored.as_deref(), prefers_dark);
    tracing::debug!(theme = %initial, "initial theme");
    apply(document, storage.as_ref(), &config.storage_key, initial);

    let document = document.clone();
    let storage_key = config.storage_key.clone();
    dom::on(&toggle, "click", move |_| {
        let current = document
            .document_element()
            .and_then(|root| root.get_attribute("data-theme"));
        let next = Theme::toggled_from(current.as_deref());
        apply(&document, storage.as_ref(), &storage_key, next);
    });
}

fn apply(document: &Document, storage: Option<&Storage>, key: &str, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force("dark", theme.is_dark());
    }
    if let Some(storage) = storage {
        let _ = storage.set_item(key, theme.as_str());
    }
}
