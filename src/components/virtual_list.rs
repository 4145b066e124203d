//! Virtual List Component
//!
//! Fixed-height scroll viewport that only mounts the rows intersecting it
//! (plus overscan). Row placement comes from `ListWindow`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TodoRow;
use crate::models::Todo;
use crate::windowing::ListWindow;

#[component]
pub fn VirtualList(
    items: Signal<Vec<Todo>>,
    /// Viewport geometry, defaults to the 400x400 list with 50px rows
    #[prop(optional)]
    window: ListWindow,
) -> impl IntoView {
    let (scroll_top, set_scroll_top) = signal(0u32);

    let visible_rows = move || {
        let offset = scroll_top.get();
        items.with(|todos| {
            window
                .render_range(todos.len(), offset)
                .map(|index| (index, todos[index].clone()))
                .collect::<Vec<_>>()
        })
    };

    let content_height = move || items.with(|todos| window.total_height(todos.len()));

    view! {
        <div
            class="virtual-list"
            style=format!(
                "position: relative; height: {}px; width: {}px; overflow: auto;",
                window.height,
                window.width,
            )
            on:scroll=move |ev| {
                let Some(viewport) = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                set_scroll_top.set(viewport.scroll_top().max(0) as u32);
            }
        >
            <div
                class="virtual-list-inner"
                style=move || format!("position: relative; width: 100%; height: {}px;", content_height())
            >
                <For
                    each=visible_rows
                    // Index is part of the key: rows are positioned by it
                    key=|(index, todo)| (*index, todo.id, todo.completed)
                    children=move |(index, todo)| {
                        view! {
                            <TodoRow todo=todo top=window.row_top(index) height=window.row_height />
                        }
                    }
                />
            </div>
        </div>
    }
}
