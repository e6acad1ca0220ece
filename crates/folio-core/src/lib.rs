//! Folio Core
//!
//! Host-independent logic for the folio site: best-effort input sanitization,
//! contact-form validation, and the small state machines behind the page
//! behaviors. Nothing in here touches the DOM; `folio-web` adapts these types
//! to a live document.

pub mod config;
pub mod field;
pub mod form;
pub mod rules;
pub mod sanitize;
pub mod scroll;
pub mod skills;
pub mod theme;
pub mod typing;

pub use config::SiteConfig;
pub use field::{FieldKey, FieldState};
pub use form::{ContactFields, FieldView, FormValidator, StatusState, StatusView, SubmissionResult};
pub use rules::{is_valid_email, validate, FieldError};
pub use sanitize::sanitize;
pub use theme::Theme;
pub use typing::{Frame, Typewriter};
