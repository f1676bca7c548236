use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwaError {
    JsError(String),
    Unavailable { message: &'static str },
    Configuration { message: String },
}

impl PwaError {
    /// The message without the variant prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            PwaError::JsError(msg) => msg,
            PwaError::Unavailable { message } => message,
            PwaError::Configuration { message } => message,
        }
    }
}

impl fmt::Display for PwaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwaError::JsError(msg) => write!(f, "JavaScript Error: {}", msg),
            PwaError::Unavailable { message } => write!(f, "Unavailable: {}", message),
            PwaError::Configuration { message } => write!(f, "Configuration Error: {}", message),
        }
    }
}

impl std::error::Error for PwaError {}

impl From<JsValue> for PwaError {
    fn from(err: JsValue) -> Self {
        // Registration rejections are usually DOMException/TypeError objects, not strings.
        if let Some(error) = err.dyn_ref::<js_sys::Error>() {
            return PwaError::JsError(String::from(error.message()));
        }

        PwaError::JsError(
            err.as_string()
                .unwrap_or_else(|| "Unknown JS error".to_string()),
        )
    }
}

impl From<PwaError> for JsValue {
    fn from(error: PwaError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
