// File: src/contact.rs
// Purpose: DOM adapter for the contact form

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use folio_core::config::FormConfig;
use folio_core::{ContactFields, FieldKey, FieldView, FormValidator, StatusState, StatusView};

use crate::dom;

const FORM_ID: &str = "contact-form";
const STATUS_ID: &str = "form-status";

/// The name and email fields are `<input>`s; the message is a `<textarea>`
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Control::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(Control::TextArea),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Control::Input(input) => input,
            Control::TextArea(area) => area,
        }
    }
}

/// An input and its error region
pub struct DomField {
    control: Control,
    error: Element,
}

impl FieldView for DomField {
    fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::TextArea(area) => area.value(),
        }
    }

    fn set_value(&mut self, value: &str) {
        match &self.control {
            Control::Input(input) => input.set_value(value),
            Control::TextArea(area) => area.set_value(value),
        }
    }

    fn set_error(&mut self, message: &str) {
        self.error.set_text_content(Some(message));
    }

    fn set_invalid(&mut self, invalid: bool) {
        let element = self.control.element();
        let _ = if invalid {
            element.set_attribute("aria-invalid", "true")
        } else {
            element.remove_attribute("aria-invalid")
        };
    }
}

pub struct DomStatus {
    element: Element,
}

impl StatusView for DomStatus {
    fn clear(&mut self) {
        let classes = self.element.class_list();
        for state in StatusState::ALL {
            let _ = classes.remove_1(state.css_class());
        }
        self.element.set_text_content(Some(""));
    }

    fn show(&mut self, state: StatusState, message: &str) {
        let _ = self.element.class_list().add_1(state.css_class());
        self.element.set_text_content(Some(message));
    }
}

fn lookup_field(document: &Document, key: FieldKey) -> Option<DomField> {
    let control = Control::from_element(document.get_element_by_id(key.input_id())?)?;
    let error = document.get_element_by_id(key.error_id())?;
    Some(DomField { control, error })
}

/// Wire blur and submit handlers; inert without `#contact-form`
pub fn init(document: &Document, config: &FormConfig) {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, FORM_ID) else {
        return;
    };

    let fields = ContactFields::from_fn(|key| lookup_field(document, key));
    let status = document
        .get_element_by_id(STATUS_ID)
        .map(|element| DomStatus { element });
    let validator = Rc::new(RefCell::new(FormValidator::new(
        fields,
        status,
        config.clone(),
    )));

    for key in FieldKey::ALL {
        let Some(target) = validator
            .borrow()
            .fields()
            .get(key)
            .map(|field| field.control.element().clone())
        else {
            tracing::debug!(field = %key, "contact field missing, skipping");
            continue;
        };
        let validator = Rc::clone(&validator);
        dom::on(&target, "blur", move |_| {
            validator.borrow_mut().on_blur(key);
        });
    }

    dom::on(&form, "submit", move |event: Event| {
        event.prevent_default();
        validator.borrow_mut().on_submit();
    });
}
