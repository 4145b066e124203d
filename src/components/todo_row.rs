//! Todo Row Component
//!
//! One absolutely positioned row of the windowed list.

use leptos::prelude::*;

use crate::config::toggle_testid;
use crate::context::use_todo_context;
use crate::models::Todo;

#[component]
pub fn TodoRow(todo: Todo, top: u32, height: u32) -> impl IntoView {
    let ctx = use_todo_context();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <div
            class="todo-row"
            style=format!("position: absolute; left: 0; top: {}px; height: {}px; width: 100%;", top, height)
        >
            <input
                type="checkbox"
                class="todo-check"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id)
                data-testid=toggle_testid(id)
            />
            <span class={if completed { "line-through" } else { "" }}>{todo.text}</span>
        </div>
    }
}
