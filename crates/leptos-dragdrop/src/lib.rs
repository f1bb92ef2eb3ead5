//! Leptos DragDrop Utilities
//!
//! Reorder drag-and-drop for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Rows are addressed by their index in the rendered list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index the dragged row would land on
    pub drop_index_read: ReadSignal<Option<usize>>,
    pub drop_index_write: WriteSignal<Option<usize>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_index_read, drop_index_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_index_read,
        drop_index_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has travelled far enough from `start` to count as a drag.
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Resolve a finished gesture into a `(from, to)` move.
///
/// Returns `None` for clicks (no drag started), drops outside any row and
/// drops back onto the origin row.
pub fn resolve_drop(dragging: Option<usize>, drop_index: Option<usize>) -> Option<(usize, usize)> {
    match (dragging, drop_index) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_index_write.set(None);
    dnd.pending_write.set(None);
}

/// Inputs, buttons and labels keep their own pointer semantics.
fn is_interactive_target(target: &web_sys::EventTarget) -> bool {
    target
        .dyn_ref::<web_sys::Element>()
        .is_some_and(|el| is_interactive_tag(&el.tag_name()))
}

/// Presses on form controls belong to the control, not the drag
pub fn is_interactive_tag(tag_name: &str) -> bool {
    ["input", "button", "label"]
        .iter()
        .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if is_interactive_target(&target) {
                return;
            }
        }
        // Keep text selection from fighting the drag
        ev.prevent_default();
        dnd.pending_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind mousemove on document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_none() || dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            log::debug!(target: "dnd", "drag start index={:?}", pending);
            dnd.dragging_write.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop position)
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_index_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_index_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop(from, to)` runs only for real moves; see [`resolve_drop`].
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_index = dnd.drop_index_read.get_untracked();

        if dragging.is_none() {
            // Plain click: clear pending and let the click event fire
            dnd.pending_write.set(None);
            return;
        }

        end_drag(&dnd);
        match resolve_drop(dragging, drop_index) {
            Some((from, to)) => {
                log::debug!(target: "dnd", "drop from={} to={}", from, to);
                on_drop(from, to);
            }
            None => log::debug!(target: "dnd", "drop cancelled"),
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_needs_more_than_five_pixels() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }

    #[test]
    fn test_form_controls_never_start_a_drag() {
        assert!(is_interactive_tag("INPUT"));
        assert!(is_interactive_tag("input"));
        assert!(is_interactive_tag("BUTTON"));
        assert!(is_interactive_tag("LABEL"));
        assert!(!is_interactive_tag("DIV"));
        assert!(!is_interactive_tag("SPAN"));
        assert!(!is_interactive_tag("INPUTS"));
    }

    #[test]
    fn test_resolve_drop() {
        assert_eq!(resolve_drop(Some(2), Some(0)), Some((2, 0)));
        assert_eq!(resolve_drop(Some(0), Some(4)), Some((0, 4)));
    }

    #[test]
    fn test_resolve_drop_ignores_noop_gestures() {
        assert_eq!(resolve_drop(None, None), None);
        assert_eq!(resolve_drop(None, Some(3)), None);
        assert_eq!(resolve_drop(Some(3), None), None);
        assert_eq!(resolve_drop(Some(3), Some(3)), None);
    }
}
