//! Per-field validation rules.
//!
//! Each field has an ordered list of checks; the first one that fails
//! decides the message. Rules are pure and see the already-sanitized value.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::field::FieldKey;
use crate::sanitize::trim;

// Unicode letters and digits, whitespace (BOM included), `.`, `'` and `-`
static NAME_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}\s\x{FEFF}.'-]+$").unwrap());

// Deliberately loose: something@something.something with no spaces
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap());

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// A failed rule. `Display` is the text shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    NameMissing,
    #[error("Name should be at least 2 characters.")]
    NameTooShort,
    #[error("Name contains invalid characters.")]
    NameInvalidCharacters,
    #[error("Please enter your email address.")]
    EmailMissing,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please write a short message.")]
    MessageMissing,
    #[error("Message should be at least 10 characters.")]
    MessageTooShort,
}

/// Run the rules for `key` against `value`, stopping at the first failure
pub fn validate(key: FieldKey, value: &str) -> Result<(), FieldError> {
    match key {
        FieldKey::Name => validate_name(value),
        FieldKey::Email => validate_email(value),
        FieldKey::Message => validate_message(value),
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let trimmed = trim(value);
    if trimmed.is_empty() {
        return Err(FieldError::NameMissing);
    }
    if utf16_len(trimmed) < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    // Checked against the untrimmed value; sanitized input is already trimmed.
    if !NAME_CHARSET.is_match(value) {
        return Err(FieldError::NameInvalidCharacters);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let trimmed = trim(value);
    if trimmed.is_empty() {
        return Err(FieldError::EmailMissing);
    }
    if !is_valid_email(trimmed) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let trimmed = trim(value);
    if trimmed.is_empty() {
        return Err(FieldError::MessageMissing);
    }
    if utf16_len(trimmed) < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Loose email shape check.
///
/// Accepts things like `a@b..c`; tightening it would reject input users can
/// submit today.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

// Lengths are counted in UTF-16 units, as the browser reports them
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
