//! Item Picker App
//!
//! Root component: provides the list store and service handles.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ListView;
use crate::config::ListConfig;
use crate::context::ListContext;
use crate::store::ListState;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    // Provide store and context to all children
    provide_context(Store::new(ListState::from_config(&config)));
    provide_context(ListContext::new(config));

    view! {
        <main class="picker">
            <h1>"Items"</h1>
            <ListView />
        </main>
    }
}
