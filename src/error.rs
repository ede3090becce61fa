// Crate-wide error type, bridged to JsValue at the wasm boundary

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value or argument (zero-sized viewport, inverted bounds, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A DOM element the page needs at startup is not present.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A global the page needs (window, document, Leaflet's `L`) is not defined.
    #[error("missing global: {0}")]
    MissingGlobal(&'static str),

    #[error("webgl: {0}")]
    WebGl(String),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// Exception thrown by a browser API.
    #[error("js: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Error::Js(s),
            None => Error::Js(format!("{:?}", value)),
        }
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
