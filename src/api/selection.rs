//! Selection Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{IdArgs, SelectionChange};

impl ApiClient {
    /// Ids currently marked selected on the server
    pub async fn fetch_selected(&self) -> Result<Vec<i64>, ApiError> {
        self.get_json("/selected").await
    }

    pub async fn select(&self, id: i64) -> Result<(), ApiError> {
        self.post_json("/select", &IdArgs { id }).await
    }

    pub async fn deselect(&self, id: i64) -> Result<(), ApiError> {
        self.post_json("/deselect", &IdArgs { id }).await
    }

    pub async fn apply_selection(&self, change: SelectionChange) -> Result<(), ApiError> {
        match change {
            SelectionChange::Select(id) => self.select(id).await,
            SelectionChange::Deselect(id) => self.deselect(id).await,
        }
    }
}
