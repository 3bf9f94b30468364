//! Bridging serde types and `JsValue` without pulling a JSON crate
//! into the binary. Request and response bodies go through the
//! browser's own `JSON.stringify` / `JSON.parse`.

use js_sys::wasm_bindgen::JsValue;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug)]
pub enum Error {
    SerdeWasmBindgen(serde_wasm_bindgen::Error),
    JsSys(JsValue),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SerdeWasmBindgen(e) => write!(f, "serde error: {}", e),
            Error::JsSys(v) => write!(f, "JS error: {:?}", v),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Error::SerdeWasmBindgen(e)
    }
}

/// Serialize a Rust value into a `JsValue` that `JSON.stringify`
/// handles cleanly (no BigInt, maps as plain objects).
pub fn to_value<T: Serialize>(value: &T) -> Result<JsValue, Error> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(Error::from)
}

/// Deserialize a `JsValue` into a Rust value.
pub fn from_value<T: DeserializeOwned>(value: JsValue) -> Result<T, Error> {
    serde_wasm_bindgen::from_value(value).map_err(Error::from)
}

/// Render a Rust value as a JSON string for a request body.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, Error> {
    let js_val = to_value(value)?;
    let json_str = js_sys::JSON::stringify(&js_val)
        .map_err(Error::JsSys)?
        .as_string()
        .ok_or_else(|| Error::JsSys(JsValue::from_str("JSON.stringify returned non-string")))?;
    Ok(json_str)
}

/// Parse a JSON response body into a Rust value.
pub fn from_json_string<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    let js_val = js_sys::JSON::parse(s).map_err(Error::JsSys)?;
    from_value(js_val)
}
