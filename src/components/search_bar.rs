//! Search Bar Component
//!
//! Filter input above the list.

use leptos::prelude::*;

/// Search input; every edit is reported through `on_search`
#[component]
pub fn SearchBar(
    search: Signal<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <form class="search-bar" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <input
                type="search"
                placeholder="Search items..."
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <button
                type="button"
                class="search-clear"
                disabled=move || search.with(|s| s.is_empty())
                on:click=move |_| on_search.run(String::new())
            >
                "×"
            </button>
        </form>
    }
}
