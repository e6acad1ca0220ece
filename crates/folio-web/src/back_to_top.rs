//! Floating "back to top" button

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use folio_core::config::BackToTopConfig;
use folio_core::scroll::back_to_top_visible;

use crate::dom;

const VISIBLE: &str = "visible";

pub fn init(window: &Window, document: &Document, config: &BackToTopConfig) {
    let Some(button) = document.get_element_by_id("back-to-top") else {
        return;
    };
    let threshold = config.threshold_px;

    let (scroll_source, tracked) = (window.clone(), button.clone());
    dom::on_passive(window, "scroll", move |_| {
        sync_visibility(&scroll_source, &tracked, threshold);
    });

    let scroll_window = window.clone();
    dom::on(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        scroll_window.scroll_to_with_scroll_to_options(&options);
    });

    sync_visibility(window, &button, threshold);
}

fn sync_visibility(window: &Window, button: &Element, threshold: f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let classes = button.class_list();
    let _ = if back_to_top_visible(scroll_y, threshold) {
        classes.add_1(VISIBLE)
    } else {
        classes.remove_1(VISIBLE)
    };
}
