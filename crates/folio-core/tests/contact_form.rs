/// End-to-end behavior of the contact form through in-memory views
///
/// Covers:
/// 1. Successful submission clears every field and reports success
/// 2. Failed submission leaves values alone and marks only failing fields
/// 3. Re-validating one field after a fix touches only that field
use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::FormConfig;
use folio_core::{
    ContactFields, FieldKey, FieldView, FormValidator, StatusState, StatusView,
};
use pretty_assertions::assert_eq;

/// Every write any view receives, in order
type Log = Rc<RefCell<Vec<String>>>;

struct MemoryField {
    key: FieldKey,
    value: String,
    error: String,
    invalid: bool,
    log: Log,
}

impl FieldView for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.log.borrow_mut().push(format!("{}.value={}", self.key, value));
        self.value = value.to_string();
    }

    fn set_error(&mut self, message: &str) {
        self.log.borrow_mut().push(format!("{}.error={}", self.key, message));
        self.error = message.to_string();
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }
}

#[derive(Default)]
struct MemoryStatus {
    state: Option<StatusState>,
    text: String,
}

impl StatusView for MemoryStatus {
    fn clear(&mut self) {
        self.state = None;
        self.text.clear();
    }

    fn show(&mut self, state: StatusState, message: &str) {
        self.state = Some(state);
        self.text = message.to_string();
    }
}

fn build(name: &str, email: &str, message: &str) -> (FormValidator<MemoryField, MemoryStatus>, Log) {
    let log: Log = Rc::default();
    let values = [name, email, message];
    let fields = ContactFields::from_fn(|key| {
        let index = FieldKey::ALL.iter().position(|k| *k == key)?;
        Some(MemoryField {
            key,
            value: values[index].to_string(),
            error: String::new(),
            invalid: false,
            log: Rc::clone(&log),
        })
    });
    let form = FormValidator::new(fields, Some(MemoryStatus::default()), FormConfig::default());
    (form, log)
}

fn field<'a>(form: &'a FormValidator<MemoryField, MemoryStatus>, key: FieldKey) -> &'a MemoryField {
    form.fields().get(key).unwrap()
}

#[test]
fn test_valid_submission_succeeds_and_resets() {
    let (mut form, _) = build("Grace Hopper", "grace@navy.mil", "Let's talk about compilers.");

    let result = form.on_submit();

    assert!(result.ok);
    assert_eq!(
        result.message,
        "Message validated locally. Plug this form into your backend or a service to receive emails."
    );
    let status = form.status().unwrap();
    assert_eq!(status.state, Some(StatusState::Success));
    for key in FieldKey::ALL {
        let f = field(&form, key);
        assert_eq!(f.value, "", "{key} should be cleared");
        assert_eq!(f.error, "");
        assert!(!f.invalid);
    }
}

#[test]
fn test_invalid_submission_keeps_values_and_marks_failing_fields() {
    let (mut form, _) = build("Grace Hopper", "not-an-email", "short");

    let result = form.on_submit();

    assert!(!result.ok);
    assert_eq!(result.message, "Please fix the highlighted fields and try again.");
    let status = form.status().unwrap();
    assert_eq!(status.state, Some(StatusState::Error));
    assert_eq!(status.text, "Please fix the highlighted fields and try again.");

    let name = field(&form, FieldKey::Name);
    assert_eq!(name.value, "Grace Hopper");
    assert_eq!(name.error, "");
    assert!(!name.invalid);

    let email = field(&form, FieldKey::Email);
    assert_eq!(email.value, "not-an-email");
    assert_eq!(email.error, "Please enter a valid email address.");
    assert!(email.invalid);

    let message = field(&form, FieldKey::Message);
    assert_eq!(message.value, "short");
    assert_eq!(message.error, "Message should be at least 10 characters.");
    assert!(message.invalid);
}

#[test]
fn test_all_fields_refreshed_even_after_first_failure() {
    let (mut form, log) = build("", "", "");

    form.on_submit();

    let log = log.borrow();
    assert_eq!(
        *log,
        vec![
            "name.error=Please enter your name.".to_string(),
            "email.error=Please enter your email address.".to_string(),
            "message.error=Please write a short message.".to_string(),
        ]
    );
}

#[test]
fn test_fixing_one_field_updates_only_that_field() {
    let (mut form, log) = build("A", "a@b.co", "too short");
    assert!(!form.on_submit().ok);
    log.borrow_mut().clear();

    type_into(&mut form, FieldKey::Name, "Ada");
    assert!(form.on_blur(FieldKey::Name));

    assert_eq!(*log.borrow(), vec!["name.error=".to_string()]);
    assert_eq!(field(&form, FieldKey::Name).error, "");
    assert!(!field(&form, FieldKey::Name).invalid);
    assert_eq!(
        field(&form, FieldKey::Message).error,
        "Message should be at least 10 characters."
    );
}

#[test]
fn test_injected_markup_is_stripped_from_the_input() {
    let (mut form, _) = build(
        "Eve<script>document.cookie</script>",
        r#"eve@example.com"#,
        r#"<a onclick="x()">hello there friend</a>"#,
    );

    assert!(form.validate_field(FieldKey::Name));
    assert_eq!(field(&form, FieldKey::Name).value, "Eve");

    assert!(form.validate_field(FieldKey::Message));
    assert_eq!(field(&form, FieldKey::Message).value, "<a >hello there friend</a>");
}

#[test]
fn test_blur_validates_a_single_field() {
    let (mut form, log) = build("", "", "");

    assert!(!form.on_blur(FieldKey::Email));

    assert_eq!(
        *log.borrow(),
        vec!["email.error=Please enter your email address.".to_string()]
    );
    assert_eq!(form.status().unwrap().state, None);
}

/// Simulates the user typing; bypasses the write log
fn type_into(form: &mut FormValidator<MemoryField, MemoryStatus>, key: FieldKey, value: &str) {
    form.fields_mut().get_mut(key).unwrap().value = value.to_string();
}
