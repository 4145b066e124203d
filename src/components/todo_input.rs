//! Todo Input Component
//!
//! Auto-growing textarea plus the submit button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{INPUT_PLACEHOLDER, SUBMIT_LABEL};
use crate::context::use_todo_context;

#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <textarea
            class="todo-input"
            placeholder=INPUT_PLACEHOLDER
            style=move || ctx.input_style().unwrap_or_default()
            prop:value=move || ctx.input_text()
            on:input=move |ev| {
                let Some(textarea) = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                else {
                    return;
                };
                ctx.change_input(textarea.value(), textarea.scroll_height());
            }
        />
        <button class="add-btn" on:click=move |_| ctx.submit()>
            {SUBMIT_LABEL}
        </button>
    }
}
