//! UI Components
//!
//! Leptos components for the item picker.

mod item_row;
mod list_view;
mod search_bar;

pub use item_row::ItemRow;
pub use list_view::ListView;
pub use search_bar::SearchBar;
