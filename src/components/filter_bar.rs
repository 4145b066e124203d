//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::filter::Filter;

/// One button per filter; each click recomputes the view once
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_todo_context();

    Filter::BUTTONS
        .into_iter()
        .map(|filter| {
            view! {
                <button class=filter.class() on:click=move |_| ctx.apply_filter(filter)>
                    {filter.label()}
                </button>
            }
        })
        .collect_view()
}
