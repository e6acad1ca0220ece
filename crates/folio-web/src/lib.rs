//! Folio Web
//!
//! WebAssembly entry point for the folio site. Looks up the page's elements
//! once, attaches the behaviors, and exposes the sanitizer and validators to
//! JavaScript so hand-written scripts can share the same rules.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use folio_core::{FieldKey, FieldState};

mod back_to_top;
mod contact;
mod dom;
mod footer;
mod nav;
mod reveal;
mod theme;
mod typing;

/// Attach every behavior once the document has been parsed
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Already initialized when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        dom::on(&document, "DOMContentLoaded", move |_| attach(&window));
    } else {
        attach(&window);
    }
}

fn attach(window: &web_sys::Window) {
    let Some(document) = window.document() else {
        return;
    };
    let config = dom::read_config(&document);

    theme::init(window, &document, &config.theme);
    nav::init(&document);
    typing::init(&document, &config.typing);
    reveal::init_sections(window, &document, &config.reveal);
    back_to_top::init(window, &document, &config.back_to_top);
    reveal::init_skills(window, &document, &config.skills);
    contact::init(&document, &config.form);
    footer::init_year(&document);

    tracing::info!("page behaviors attached");
}

/// Result of checking one value, returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldReport {
    pub field: FieldKey,
    pub sanitized: String,
    pub valid: bool,
    pub message: String,
}

impl From<FieldState> for FieldReport {
    fn from(state: FieldState) -> Self {
        Self {
            field: state.key,
            valid: state.is_valid(),
            message: state.error_message(),
            sanitized: state.sanitized,
        }
    }
}

/// Strip script blocks and inline handlers from `raw`
#[wasm_bindgen(js_name = sanitize)]
pub fn sanitize_js(raw: &str) -> String {
    folio_core::sanitize(raw)
}

/// Sanitize and validate a value for one contact-form field
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateValue('email', 'user@example.com');
/// // { field: 'email', sanitized: 'user@example.com', valid: true, message: '' }
/// ```
#[wasm_bindgen(js_name = validateValue)]
pub fn validate_value(field: &str, value: &str) -> Result<JsValue, JsValue> {
    let key = FieldKey::parse(field)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown field: {}", field)))?;
    let report = FieldReport::from(FieldState::evaluate(key, value));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    folio_core::is_valid_email(email)
}
