//! Item Row Component
//!
//! One checkable row. Dragging is wired up by the list around it.

use leptos::prelude::*;

use crate::models::Item;

/// A single item row
#[component]
pub fn ItemRow(
    item: Item,
    selected: Signal<bool>,
    on_toggle: Callback<i64>,
) -> impl IntoView {
    let id = item.id;

    view! {
        <div class=move || if selected.get() { "item-row selected" } else { "item-row" }>
            // A press on the checkbox must never start a drag
            <input
                type="checkbox"
                prop:checked=move || selected.get()
                on:mousedown=|ev| ev.stop_propagation()
                on:change=move |_| on_toggle.run(id)
            />
            <span class="item-value">{item.value}</span>
        </div>
    }
}
