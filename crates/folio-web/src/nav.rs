//! Mobile navigation drawer

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use folio_core::scroll::NavDrawer;

use crate::dom;

const OPEN: &str = "open";

pub fn init(document: &Document) {
    let (Some(toggle), Some(drawer)) = (
        document.get_element_by_id("nav-toggle"),
        document.get_element_by_id("nav-drawer"),
    ) else {
        return;
    };

    let state = Rc::new(Cell::new(NavDrawer::default()));

    {
        let (toggle_el, drawer, state) = (toggle.clone(), drawer.clone(), Rc::clone(&state));
        dom::on(&toggle, "click", move |_| {
            let mut current = state.get();
            current.set(drawer.class_list().contains(OPEN));
            let open = current.toggle();
            state.set(current);
            render(&toggle_el, &drawer, open);
        });
    }

    for link in dom::query_all(document, "#nav-drawer .nav-link") {
        let (toggle, drawer, state) = (toggle.clone(), drawer.clone(), Rc::clone(&state));
        dom::on(&link, "click", move |_| {
            let mut current = state.get();
            current.close();
            state.set(current);
            render(&toggle, &drawer, current.is_open());
        });
    }
}

fn render(toggle: &Element, drawer: &Element, open: bool) {
    let _ = drawer.class_list().toggle_with_force(OPEN, open);
    let _ = toggle.class_list().toggle_with_force(OPEN, open);
}
