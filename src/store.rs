//! List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//!
//! `ListState` is a plain state machine: every transition mutates local
//! state first and hands back the request the view must send. Nothing here
//! touches the network, so optimistic updates hold whatever the server says.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ListConfig;
use crate::models::{Item, MoveArgs, PageRequest, SelectionChange};

/// List view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Loaded items in server order, locally reordered on drag
    pub items: Vec<Item>,
    /// Selected ids, loaded or not
    pub selected: BTreeSet<i64>,
    /// Current filter; empty lists everything
    pub search: String,
    /// Count of items already loaded
    pub offset: usize,
    pub page_size: usize,
    pub prefetch_threshold: usize,
    /// Bumped on every reset; pages from older generations are dropped
    pub generation: u64,
    /// The last visible row is inside the prefetch threshold and this
    /// crossing has already requested its page
    pub crossed: bool,
    /// A page request is outstanding
    pub loading: bool,
    /// The server returned a short page
    pub exhausted: bool,
}

impl ListState {
    pub fn new(page_size: usize, prefetch_threshold: usize) -> Self {
        Self {
            page_size,
            prefetch_threshold,
            ..Default::default()
        }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(config.page_size, config.prefetch_threshold)
    }

    fn page_request(&self, offset: usize) -> PageRequest {
        PageRequest {
            generation: self.generation,
            query: (!self.search.is_empty()).then(|| self.search.clone()),
            offset,
            limit: self.page_size,
        }
    }

    fn reset(&mut self) -> PageRequest {
        self.items.clear();
        self.offset = 0;
        self.generation += 1;
        self.exhausted = false;
        self.crossed = false;
        self.loading = true;
        self.page_request(0)
    }

    /// First page on mount, under the current filter
    pub fn initial_page(&mut self) -> PageRequest {
        self.reset()
    }

    /// New filter: drop everything loaded and start over at offset 0
    pub fn set_search(&mut self, text: impl Into<String>) -> PageRequest {
        self.search = text.into();
        self.reset()
    }

    fn near_end(&self, last_visible: usize) -> bool {
        last_visible + self.prefetch_threshold >= self.items.len()
    }

    /// Whether `rows_rendered(last_visible)` would change anything.
    ///
    /// Lets the view skip taking a write guard on every scroll frame.
    pub fn threshold_changed(&self, last_visible: usize) -> bool {
        // Offset zero belongs to the mount/search reset
        if self.items.is_empty() || self.exhausted {
            return false;
        }
        if self.near_end(last_visible) {
            !self.crossed && !self.loading
        } else {
            self.crossed
        }
    }

    /// Called with the last visible row index after each render.
    ///
    /// Requests the next page once per threshold crossing. Leaving the
    /// threshold re-arms it, so a failed page is fetched again only when the
    /// user scrolls back in.
    pub fn rows_rendered(&mut self, last_visible: usize) -> Option<PageRequest> {
        if !self.threshold_changed(last_visible) {
            return None;
        }
        if !self.near_end(last_visible) {
            self.crossed = false;
            return None;
        }
        self.crossed = true;
        self.loading = true;
        Some(self.page_request(self.offset))
    }

    /// Append a page. Returns false when the page no longer applies.
    pub fn apply_page(&mut self, request: &PageRequest, page: Vec<Item>) -> bool {
        if request.generation != self.generation || request.offset != self.offset {
            return false;
        }
        if page.len() < request.limit {
            self.exhausted = true;
        }
        self.items.extend(page);
        self.offset = self.items.len();
        self.loading = false;
        // The end moved; the next approach is a new crossing
        self.crossed = false;
        true
    }

    pub fn page_failed(&mut self, request: &PageRequest) {
        if request.generation == self.generation {
            self.loading = false;
        }
    }

    pub fn toggle_selection(&mut self, id: i64) -> SelectionChange {
        toggle_id(&mut self.selected, id)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Option<MoveArgs> {
        move_item_at(&mut self.items, from, to)
    }
}

// ========================
// Field-level Helpers
// ========================

/// Flip membership of `id` and return the change to persist
pub fn toggle_id(selected: &mut BTreeSet<i64>, id: i64) -> SelectionChange {
    if selected.remove(&id) {
        SelectionChange::Deselect(id)
    } else {
        selected.insert(id);
        SelectionChange::Select(id)
    }
}

/// Move the row at `from` to `to`. `None` when nothing moves.
pub fn move_item_at(items: &mut Vec<Item>, from: usize, to: usize) -> Option<MoveArgs> {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return None;
    }
    let item = items.remove(from);
    items.insert(to, item);
    Some(MoveArgs { from, to })
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}
