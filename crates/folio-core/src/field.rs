// File: src/field.rs
// Purpose: Field identities and the per-field validation record

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::{self, FieldError};
use crate::sanitize::sanitize;

/// One of the three monitored contact-form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Email,
    Message,
}

impl FieldKey {
    /// All keys in the order they appear on the form
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Email, FieldKey::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Message => "message",
        }
    }

    /// Parse a key from its lowercase name (`"name"`, `"email"`, `"message"`)
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Element id of the input for this field
    pub fn input_id(self) -> &'static str {
        self.as_str()
    }

    /// Element id of the error region next to the input
    pub fn error_id(self) -> &'static str {
        match self {
            FieldKey::Name => "name-error",
            FieldKey::Email => "email-error",
            FieldKey::Message => "message-error",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one field after a validation pass.
///
/// Always recomputed from `raw`; nothing here outlives the trigger that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub key: FieldKey,
    pub raw: String,
    pub sanitized: String,
    pub error: Option<FieldError>,
}

impl FieldState {
    /// Sanitize `raw` and run the field's rules against the result
    pub fn evaluate(key: FieldKey, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let sanitized = sanitize(&raw);
        let error = rules::validate(key, &sanitized).err();
        Self {
            key,
            raw,
            sanitized,
            error,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Mirrors a non-empty error message; drives `aria-invalid`
    pub fn invalid_flag(&self) -> bool {
        !self.is_valid()
    }

    /// Error text, or an empty string when the field is valid
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Whether sanitizing changed what the user typed
    pub fn was_rewritten(&self) -> bool {
        self.sanitized != self.raw
    }
}
