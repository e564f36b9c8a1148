use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures when touching the browser environment. None of them are fatal;
/// callers log and carry on.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown service option `{0}`")]
pub struct ParseServiceError(pub String);
