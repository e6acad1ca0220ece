//! Typewriter text in `#typing-text`

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use folio_core::config::TypingConfig;
use folio_core::Typewriter;

pub fn init(document: &Document, config: &TypingConfig) {
    let Some(target) = document.get_element_by_id("typing-text") else {
        return;
    };
    let Some(typewriter) = Typewriter::new(config) else {
        return;
    };
    tick(target, typewriter);
}

fn tick(target: Element, mut typewriter: Typewriter) {
    let frame = typewriter.tick();
    target.set_text_content(Some(&frame.text));

    let millis = u32::try_from(frame.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || tick(target, typewriter)).forget();
}
