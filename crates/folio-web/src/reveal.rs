// File: src/reveal.rs
// Purpose: Intersection-driven reveals: sections fade in, skill bars fill

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use folio_core::config::{RevealConfig, SkillsConfig};
use folio_core::scroll::RevealTracker;
use folio_core::skills;

const VISIBLE: &str = "visible";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observer(callback: &ObserverCallback, threshold: f64) -> Result<IntersectionObserver, JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
}

fn reveal_all(sections: &[Element]) {
    for section in sections {
        let _ = section.class_list().add_1(VISIBLE);
    }
}

/// `.section-reveal` elements get `visible` the first time they scroll in
pub fn init_sections(window: &Window, document: &Document, config: &RevealConfig) {
    let sections = crate::dom::query_all(document, ".section-reveal");
    if sections.is_empty() {
        return;
    }
    if !crate::dom::has_intersection_observer(window) {
        reveal_all(&sections);
        return;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(sections.len())));
    let targets = sections.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let mut tracker = tracker.borrow_mut();
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = targets.iter().position(|section| *section == target) else {
                continue;
            };
            if tracker.observe(index, entry.is_intersecting()) {
                let _ = target.class_list().add_1(VISIBLE);
                observer.unobserve(&target);
            }
        }
        if tracker.is_done() {
            observer.disconnect();
        }
    });

    match observer(&callback, config.threshold) {
        Ok(observer) => {
            for section in &sections {
                observer.observe(section);
            }
        }
        Err(err) => {
            tracing::warn!("IntersectionObserver unavailable, revealing all sections: {:?}", err);
            reveal_all(&sections);
        }
    }
    callback.forget();
}

fn fill_bars(bars: &[Element]) {
    for bar in bars {
        let Some(width) = skills::fill_width(bar.get_attribute("data-level").as_deref()) else {
            continue;
        };
        let Ok(Some(fill)) = bar.query_selector(".skill-bar-fill") else {
            continue;
        };
        if let Ok(fill) = fill.dyn_into::<HtmlElement>() {
            let _ = fill.style().set_property("width", &width);
        }
    }
}

/// Fill `.skill-bar`s once `#skills` comes into view
pub fn init_skills(window: &Window, document: &Document, config: &SkillsConfig) {
    let bars = crate::dom::query_all(document, ".skill-bar");
    if bars.is_empty() {
        return;
    }
    if !crate::dom::has_intersection_observer(window) {
        fill_bars(&bars);
        return;
    }
    let Some(section) = document.get_element_by_id("skills") else {
        fill_bars(&bars);
        return;
    };

    let observed = bars.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let in_view = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if in_view {
            fill_bars(&observed);
            observer.disconnect();
        }
    });

    match observer(&callback, config.threshold) {
        Ok(observer) => observer.observe(&section),
        Err(err) => {
            tracing::warn!("IntersectionObserver unavailable, filling skill bars now: {:?}", err);
            fill_bars(&bars);
        }
    }
    callback.forget();
}
