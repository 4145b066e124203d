//! Todo App
//!
//! Root component: owns the store and lays out input, list and filters.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, TodoInput, VirtualList};
use crate::config::{EMPTY_MESSAGE, HEADER_TEXT};
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());
    let ctx = TodoContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    let filtered = Signal::derive(move || ctx.filtered());

    view! {
        <h1 class="app-title">{HEADER_TEXT}</h1>

        <div class="container">
            <TodoInput />

            <Show
                when=move || ctx.has_visible()
                fallback=|| view! { <h1 class="empty-state">{EMPTY_MESSAGE}</h1> }
            >
                <VirtualList items=filtered />
            </Show>
        </div>

        <FilterBar />
    }
}
