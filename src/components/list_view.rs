//! List View Component
//!
//! Virtualized, searchable, infinitely scrolling list with selection and
//! drag-and-drop reordering. State transitions live in `ListState`; this
//! component executes the requests they return and logs failures.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::components::{ItemRow, SearchBar};
use crate::context::use_list_context;
use crate::models::PageRequest;
use crate::store::{move_item_at, toggle_id, use_list_store, ListStateStoreFields};
use crate::window::{new_virtualizer, update_window};

#[component]
pub fn ListView() -> impl IntoView {
    let ctx = use_list_context();
    let store = use_list_store();
    let config = ctx.config();
    let viewport_height = config.viewport_height;

    let viewport_ref = NodeRef::<leptos::html::Div>::new();
    let (scroll_top, set_scroll_top) = signal(0u64);
    let virt = StoredValue::new_local(new_virtualizer(&config));

    // Fetch one page and hand it back to the store
    let load_page = move |request: PageRequest| {
        let api = ctx.api();
        spawn_local(async move {
            match api.fetch_page(&request).await {
                Ok(page) => {
                    let count = page.len();
                    if store.write().apply_page(&request, page) {
                        log::debug!(target: "list_view", "page offset={} got {} items", request.offset, count);
                    } else {
                        log::debug!(target: "list_view", "dropped stale page offset={} gen={}", request.offset, request.generation);
                    }
                }
                Err(e) => {
                    log::error!(target: "list_view", "loading page offset={} failed: {}", request.offset, e);
                    store.write().page_failed(&request);
                }
            }
        });
    };

    // Selection and first page on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.fetch_selected().await {
                Ok(ids) => {
                    log::debug!(target: "list_view", "{} ids selected on server", ids.len());
                    store.selected().set(ids.into_iter().collect());
                }
                Err(e) => log::error!(target: "list_view", "loading selection failed: {}", e),
            }
        });
        let request = store.write().initial_page();
        load_page(request);
    });

    let on_search = Callback::new(move |text: String| {
        if store.search().with_untracked(|current| *current == text) {
            return;
        }
        if let Some(el) = viewport_ref.get_untracked() {
            el.set_scroll_top(0);
        }
        set_scroll_top.set(0);
        let request = store.write().set_search(text);
        load_page(request);
    });

    let on_toggle = Callback::new(move |id: i64| {
        let change = toggle_id(&mut store.selected().write(), id);
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.apply_selection(change).await {
                log::error!(target: "list_view", "{:?} failed: {}", change, e);
            }
        });
    });

    // DnD: reorder locally, then tell the server
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |from, to| {
        let Some(args) = move_item_at(&mut store.items().write(), from, to) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.move_item(args).await {
                log::error!(target: "list_view", "move {} -> {} failed: {}", args.from, args.to, e);
            }
        });
    });

    let window = Memo::new(move |_| {
        let count = store.items().with(|items| items.len());
        let top = scroll_top.get();
        virt.try_update_value(|v| update_window(v, count, viewport_height, top))
            .unwrap_or_default()
    });

    // Next page when the last visible row comes within the threshold
    Effect::new(move |_| {
        let Some(last) = window.with(|w| w.last_visible) else {
            return;
        };
        // Most scroll frames change nothing; only those take the write guard
        if !store.with_untracked(|s| s.threshold_changed(last)) {
            return;
        }
        if let Some(request) = store.write().rows_rendered(last) {
            log::debug!(target: "list_view", "row {} near end, requesting offset={}", last, request.offset);
            load_page(request);
        }
    });

    let on_scroll = move |ev: web_sys::Event| {
        let el = event_target::<web_sys::HtmlElement>(&ev);
        set_scroll_top.set(el.scroll_top().max(0) as u64);
    };

    let rows = move || {
        let window = window.get();
        store.items().with(|items| {
            window
                .rows
                .iter()
                .filter_map(|row| items.get(row.index).map(|item| (*row, item.clone())))
                .collect::<Vec<_>>()
        })
    };

    let status = move || {
        let loaded = store.items().with(|items| items.len());
        let selected = store.selected().with(|ids| ids.len());
        let mut text = format!("{} loaded, {} selected", loaded, selected);
        if store.loading().get() {
            text.push_str(" · loading…");
        }
        text
    };

    view! {
        <div class="list-view">
            <SearchBar search=Signal::derive(move || store.search().get()) on_search=on_search />

            <div
                class="list-viewport"
                node_ref=viewport_ref
                style=format!("height: {}px; overflow-y: auto; position: relative;", viewport_height)
                on:scroll=on_scroll
            >
                <div
                    class="list-spacer"
                    style=move || format!("height: {}px; position: relative;", window.with(|w| w.total_height))
                >
                    <For
                        each=rows
                        key=|(row, item)| (item.id, row.index, row.start)
                        children=move |(row, item)| {
                            let index = row.index;
                            let id = item.id;
                            let selected = Signal::derive(move || store.selected().with(|ids| ids.contains(&id)));

                            let on_mousedown = make_on_mousedown(dnd, index);
                            let on_mouseenter = make_on_row_mouseenter(dnd, index);
                            let on_mouseleave = make_on_mouseleave(dnd);

                            // Visual state
                            let is_dragging = move || dnd.dragging_read.get() == Some(index);
                            let is_drop_target = move || {
                                dnd.drop_index_read.get() == Some(index) && !is_dragging()
                            };
                            let row_class = move || {
                                let mut c = String::from("row-wrapper");
                                if is_dragging() { c.push_str(" dragging"); }
                                if is_drop_target() { c.push_str(" drop-target"); }
                                c
                            };

                            view! {
                                <div
                                    class=row_class
                                    style=format!(
                                        "position: absolute; top: {}px; left: 0; right: 0; height: {}px;",
                                        row.start,
                                        row.size,
                                    )
                                    on:mousedown=on_mousedown
                                    on:mouseenter=on_mouseenter
                                    on:mouseleave=on_mouseleave
                                >
                                    <ItemRow item=item selected=selected on_toggle=on_toggle />
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <p class="list-status">{status}</p>
        </div>
    }
}

