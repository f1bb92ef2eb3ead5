//! Item Endpoints
//!
//! Paging, search and reorder.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Item, MoveArgs, PageRequest};

// ========================
// Paths
// ========================

pub(crate) fn items_path(offset: usize, limit: usize) -> String {
    format!("/items?offset={}&limit={}", offset, limit)
}

pub(crate) fn search_path(query: &str, offset: usize, limit: usize) -> String {
    format!(
        "/search?q={}&offset={}&limit={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC),
        offset,
        limit
    )
}

/// Search when the request carries a filter, plain listing otherwise
pub(crate) fn page_path(request: &PageRequest) -> String {
    match request.query.as_deref() {
        Some(q) => search_path(q, request.offset, request.limit),
        None => items_path(request.offset, request.limit),
    }
}

// ========================
// Commands
// ========================

impl ApiClient {
    /// `/items` or `/search`, depending on the request's filter
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Item>, ApiError> {
        self.get_json(&page_path(request)).await
    }

    /// Persist a reorder by old/new index
    pub async fn move_item(&self, args: MoveArgs) -> Result<(), ApiError> {
        self.post_json("/move", &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Option<&str>, offset: usize) -> PageRequest {
        PageRequest {
            generation: 1,
            query: query.map(str::to_string),
            offset,
            limit: 20,
        }
    }

    #[test]
    fn test_items_path() {
        assert_eq!(items_path(40, 20), "/items?offset=40&limit=20");
    }

    #[test]
    fn test_search_path_encodes_query() {
        assert_eq!(search_path("red car", 0, 20), "/search?q=red%20car&offset=0&limit=20");
        assert_eq!(search_path("a&b=c", 20, 20), "/search?q=a%26b%3Dc&offset=20&limit=20");
        assert_eq!(search_path("é", 0, 20), "/search?q=%C3%A9&offset=0&limit=20");
    }

    #[test]
    fn test_page_path_picks_endpoint() {
        assert_eq!(page_path(&request(None, 0)), "/items?offset=0&limit=20");
        assert_eq!(page_path(&request(Some("abc"), 20)), "/search?q=abc&offset=20&limit=20");
    }
}
