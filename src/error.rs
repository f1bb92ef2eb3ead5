//! API Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a call to the item service failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// fetch rejected, or no browser window to fetch from
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Wrap a rejected JS promise or a thrown JS exception.
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Transport(js_message(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(503).to_string(), "server responded with status 503");
        assert_eq!(
            ApiError::Transport("Failed to fetch".to_string()).to_string(),
            "transport error: Failed to fetch"
        );
    }

    #[test]
    fn test_json_error_maps_to_encode() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Encode(_)));
    }
}
