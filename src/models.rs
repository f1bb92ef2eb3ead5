//! Frontend Models
//!
//! Data structures matching the remote item service.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub value: String,
}

/// Body of `/select` and `/deselect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdArgs {
    pub id: i64,
}

/// Body of `/move`: positions in the currently loaded list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveArgs {
    pub from: usize,
    pub to: usize,
}

/// A selection toggle to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Select(i64),
    Deselect(i64),
}

/// One page fetch, tagged with the list generation it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    /// `None` lists everything, `Some` goes through search
    pub query: Option<String>,
    pub offset: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_service_json() {
        let items: Vec<Item> = serde_json::from_str(r#"[{"id":1,"value":"a"},{"id":2,"value":"b"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item { id: 1, value: "a".to_string() });
        assert_eq!(items[1].value, "b");
    }

    #[test]
    fn test_item_id_is_any_integer() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"id":-3,"value":"neg"},{"id":9007199254740991,"value":"big"}]"#).unwrap();
        assert_eq!(items[0].id, -3);
        assert_eq!(items[1].id, 9_007_199_254_740_991);
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(serde_json::to_string(&IdArgs { id: 7 }).unwrap(), r#"{"id":7}"#);
        assert_eq!(serde_json::to_string(&MoveArgs { from: 2, to: 0 }).unwrap(), r#"{"from":2,"to":0}"#);
    }
}
