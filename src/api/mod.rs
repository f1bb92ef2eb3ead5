//! Item Service Client
//!
//! Frontend bindings to the remote item service, organized by domain.
//! Every call goes through `fetch` and resolves to `Result<_, ApiError>`.

mod item;
mod selection;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{js_message, ApiError};

/// Handle on one item service deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    async fn send(&self, method: &str, path_and_query: &str, body: Option<String>) -> Result<Response, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no browser window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(method);
        let has_body = body.is_some();
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let url = self.url(path_and_query);
        let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::from_js)?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::from_js)?;
        }

        log::debug!(target: "api", "{} {}", method, url);
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?;
        let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let response = self.send("GET", path_and_query, None).await?;
        let promise = response.json().map_err(|e| ApiError::Decode(js_message(&e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Decode(js_message(&e)))?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// POST a JSON body; only the status matters.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = serde_json::to_string(body)?;
        self.send("POST", path, Some(body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("https://list-blue-xi.vercel.app/");
        assert_eq!(client.url("/selected"), "https://list-blue-xi.vercel.app/selected");
    }
}
