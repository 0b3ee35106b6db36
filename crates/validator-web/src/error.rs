//! Errors raised while talking to the browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// DOM and Web API failures.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Document not available
    #[error("Document not available")]
    NoDocument,
    /// Created element had an unexpected type
    #[error("unexpected element type for <{0}>")]
    UnexpectedElement(String),
    /// Export input could not be read as rows
    #[error("invalid export data: {0}")]
    InvalidRows(String),
    /// A browser call threw
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
