//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ListConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<ListConfig>,
}

impl ListContext {
    pub fn new(config: ListConfig) -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(config.base_url.clone())),
            config: StoredValue::new(config),
        }
    }

    /// Client for the item service; cheap to clone into a task
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> ListConfig {
        self.config.get_value()
    }
}

pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
