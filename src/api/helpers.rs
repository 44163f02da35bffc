//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization, and error handling
//! across all API operations. Failures are logged to the console and
//! converted to `JsValue` so the JS caller sees a thrown value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dom::DomError;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert a DOM-layer error to a JsValue thrown to the caller
pub fn dom_error(err: DomError) -> JsValue {
    let msg = err.to_string();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
