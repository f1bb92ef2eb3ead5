//! Virtual Window Utilities
//!
//! Helpers between the `virtualizer` engine and the list view.

use virtualizer::{VirtualItem, Virtualizer, VirtualizerOptions};

use crate::config::ListConfig;

/// What the list view renders for one scroll position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleWindow {
    /// Rows to mount, overscan included
    pub rows: Vec<VirtualItem>,
    /// Last row actually on screen
    pub last_visible: Option<usize>,
    /// Height of the scrollable content in pixels
    pub total_height: u64,
}

/// Fixed-height virtualizer for the configured row height and overscan
pub fn new_virtualizer(config: &ListConfig) -> Virtualizer {
    let row_height = config.row_height;
    let mut options = VirtualizerOptions::new(0, move |_| row_height);
    options.overscan = config.overscan;
    Virtualizer::new(options)
}

/// Sync the engine with the loaded length and scroll position, then read off the window
pub fn update_window(v: &mut Virtualizer, count: usize, viewport_height: u32, scroll_top: u64) -> VisibleWindow {
    v.set_count(count);
    v.set_viewport_and_scroll_clamped(viewport_height, scroll_top);

    let mut rows = Vec::new();
    v.collect_virtual_items(&mut rows);
    let visible = v.visible_range();
    VisibleWindow {
        rows,
        last_visible: (!visible.is_empty()).then(|| visible.end_index - 1),
        total_height: v.total_size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ListConfig {
        ListConfig {
            row_height: 40,
            viewport_height: 400,
            overscan: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list() {
        let mut v = new_virtualizer(&config());
        let window = update_window(&mut v, 0, 400, 0);
        assert!(window.rows.is_empty());
        assert_eq!(window.last_visible, None);
        assert_eq!(window.total_height, 0);
    }

    #[test]
    fn test_first_screen() {
        let mut v = new_virtualizer(&config());
        let window = update_window(&mut v, 100, 400, 0);
        // 400px / 40px = rows 0..=9 on screen
        assert_eq!(window.last_visible, Some(9));
        assert_eq!(window.total_height, 4000);
        assert_eq!(window.rows.first().map(|r| r.index), Some(0));
        assert_eq!(window.rows.first().map(|r| r.start), Some(0));
        // overscan past the fold
        assert!(window.rows.last().map(|r| r.index).unwrap() > 9);
    }

    #[test]
    fn test_scrolled_to_end_reports_last_row() {
        let mut v = new_virtualizer(&config());
        let window = update_window(&mut v, 20, 400, 400);
        assert_eq!(window.last_visible, Some(19));
        let row = window.rows.iter().find(|r| r.index == 19).unwrap();
        assert_eq!(row.start, 760);
        assert_eq!(row.size, 40);
    }

    #[test]
    fn test_scroll_clamped_after_shrink() {
        let mut v = new_virtualizer(&config());
        update_window(&mut v, 100, 400, 3000);
        // A new search leaves three rows
        let window = update_window(&mut v, 3, 400, 3000);
        assert_eq!(window.last_visible, Some(2));
        assert_eq!(window.rows.len(), 3);
    }
}
