//! Error types for the page decorator.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type alias using `DecorateError`.
pub type Result<T> = std::result::Result<T, DecorateError>;

/// Errors raised while decorating a page.
///
/// Expected absences (no search box, no selection, no scroll button) are not
/// errors; they are skipped by the passes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecorateError {
    /// A browser global is not available (no `window`, `document` or `body`).
    #[error("Missing global: {0}")]
    MissingGlobal(&'static str),

    /// A DOM call threw.
    #[error("DOM error during {operation}: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },

    /// Invalid or undeserializable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard capability missing or failing.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The page has already been decorated.
    #[error("Page is already decorated")]
    AlreadyDecorated,
}

impl DecorateError {
    /// Create a DOM error from a thrown JS value.
    pub fn dom(operation: &'static str, value: &JsValue) -> Self {
        Self::Dom {
            operation,
            message: js_message(value),
        }
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new clipboard error.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }
}

impl From<DecorateError> for JsValue {
    fn from(err: DecorateError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Maps `Result<T, JsValue>` from `web-sys` calls into `DecorateError::Dom`.
pub trait DomResultExt<T> {
    /// Tag the failure with the DOM operation that produced it.
    fn dom_op(self, operation: &'static str) -> Result<T>;
}

impl<T> DomResultExt<T> for std::result::Result<T, JsValue> {
    fn dom_op(self, operation: &'static str) -> Result<T> {
        self.map_err(|value| DecorateError::dom(operation, &value))
    }
}

/// Render a thrown JS value as a readable message.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
