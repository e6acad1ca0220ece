// File: src/form.rs
// Purpose: Contact-form orchestration over host-provided views

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::field::{FieldKey, FieldState};

/// One input plus the error region rendered next to it
pub trait FieldView {
    /// Current text of the input
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Show `message` in the error region; an empty string clears it
    fn set_error(&mut self, message: &str);

    /// Toggle the invalid marker (`aria-invalid`) on the input
    fn set_invalid(&mut self, invalid: bool);
}

/// The single form-level status region
pub trait StatusView {
    /// Drop both state markers and the text
    fn clear(&mut self);

    fn show(&mut self, state: StatusState, message: &str);
}

/// Mutually exclusive marker on the status region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Success,
    Error,
}

impl StatusState {
    pub const ALL: [StatusState; 2] = [StatusState::Success, StatusState::Error];

    pub fn css_class(self) -> &'static str {
        match self {
            StatusState::Success => "success",
            StatusState::Error => "error",
        }
    }
}

/// Outcome of a submit attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub ok: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn state(&self) -> StatusState {
        if self.ok {
            StatusState::Success
        } else {
            StatusState::Error
        }
    }
}

/// Views for the three fields. A missing view makes that field inert.
#[derive(Debug)]
pub struct ContactFields<F> {
    pub name: Option<F>,
    pub email: Option<F>,
    pub message: Option<F>,
}

impl<F> ContactFields<F> {
    pub fn new(name: Option<F>, email: Option<F>, message: Option<F>) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    /// Build from a lookup, called once per key
    pub fn from_fn(mut lookup: impl FnMut(FieldKey) -> Option<F>) -> Self {
        Self {
            name: lookup(FieldKey::Name),
            email: lookup(FieldKey::Email),
            message: lookup(FieldKey::Message),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&F> {
        match key {
            FieldKey::Name => self.name.as_ref(),
            FieldKey::Email => self.email.as_ref(),
            FieldKey::Message => self.message.as_ref(),
        }
    }

    pub fn get_mut(&mut self, key: FieldKey) -> Option<&mut F> {
        match key {
            FieldKey::Name => self.name.as_mut(),
            FieldKey::Email => self.email.as_mut(),
            FieldKey::Message => self.message.as_mut(),
        }
    }
}

/// Sanitizes, validates and gates submission of one contact form.
///
/// Holds the element handles built at start-up; every trigger reads the
/// current input values fresh, so nothing is cached between events.
#[derive(Debug)]
pub struct FormValidator<F, S> {
    fields: ContactFields<F>,
    status: Option<S>,
    config: FormConfig,
}

impl<F: FieldView, S: StatusView> FormValidator<F, S> {
    pub fn new(fields: ContactFields<F>, status: Option<S>, config: FormConfig) -> Self {
        Self {
            fields,
            status,
            config,
        }
    }

    pub fn fields(&self) -> &ContactFields<F> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields<F> {
        &mut self.fields
    }

    pub fn status(&self) -> Option<&S> {
        self.status.as_ref()
    }

    /// Sanitize and validate `key`, then refresh its error region.
    ///
    /// Writes the sanitized text back into the input when it differs from
    /// what was typed. Returns `true` when the field is valid or absent.
    pub fn validate_field(&mut self, key: FieldKey) -> bool {
        let Some(field) = self.fields.get_mut(key) else {
            return true;
        };

        let state = FieldState::evaluate(key, field.value());
        if state.was_rewritten() {
            tracing::debug!(field = %key, "input rewritten by sanitizer");
            field.set_value(&state.sanitized);
        }

        field.set_error(&state.error_message());
        field.set_invalid(state.invalid_flag());
        tracing::debug!(field = %key, valid = state.is_valid(), "field validated");
        state.is_valid()
    }

    /// Blur handler: validates `key` alone
    pub fn on_blur(&mut self, key: FieldKey) -> bool {
        self.validate_field(key)
    }

    /// Submit handler. The caller is responsible for suppressing the host's
    /// default submission before calling this.
    pub fn on_submit(&mut self) -> SubmissionResult {
        if let Some(status) = self.status.as_mut() {
            status.clear();
        }

        // Every field is refreshed, even after an earlier one failed.
        let results = FieldKey::ALL.map(|key| self.validate_field(key));
        let ok = results.iter().all(|valid| *valid);

        let message = if ok {
            self.config.success_status.clone()
        } else {
            self.config.error_status.clone()
        };
        let result = SubmissionResult { ok, message };

        if let Some(status) = self.status.as_mut() {
            status.show(result.state(), &result.message);
        }

        if ok {
            self.reset();
        }

        tracing::info!(ok, "contact form submitted");
        result
    }

    /// Clear every value and error region
    pub fn reset(&mut self) {
        for key in FieldKey::ALL {
            if let Some(field) = self.fields.get_mut(key) {
                field.set_value("");
                field.set_error("");
                field.set_invalid(false);
            }
        }
    }
}
