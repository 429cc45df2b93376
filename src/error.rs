//! Error types for binding code blocks
//!
//! Only setup can fail. Once handlers are attached, clicks never surface errors.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// No global `window` (not running in a browser main thread)
    NoWindow,
    /// Window has no document attached
    NoDocument,
    /// The host rejected a CSS selector
    InvalidSelector { selector: String, message: String },
    /// addEventListener / removeEventListener failed
    Listener(String),
    /// Init options could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window available"),
            Self::NoDocument => write!(f, "No document available"),
            Self::InvalidSelector { selector, message } => {
                write!(f, "Invalid selector '{}': {}", selector, message)
            }
            Self::Listener(msg) => write!(f, "Failed to attach click listener: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid options: {}", msg),
        }
    }
}

impl std::error::Error for BindError {}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type alias for binder setup
pub type BindResult<T> = Result<T, BindError>;
