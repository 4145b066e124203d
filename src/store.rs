//! Todo Store
//!
//! Canonical todo list, the filtered copy the list renders, and the pending
//! textarea input. Every change goes through a `store_*` helper: dispatches
//! reset the filtered copy to the whole list, filter clicks narrow it once.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::Filter;
use crate::input::InputState;
use crate::models::Todo;
use crate::reducer::{reduce, TodoAction};

/// Todo widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Canonical list, append-only order
    pub todos: Vec<Todo>,
    /// Derived view shown by the list, an independent copy
    pub filtered: Vec<Todo>,
    /// Pending textarea input
    pub input: InputState,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an action to the canonical list, then mirror it into the view.
///
/// The mirror always shows every item; a previously chosen filter is not
/// re-applied.
pub fn store_dispatch(store: &TodoStore, action: TodoAction) {
    match serde_json::to_string(&action) {
        Ok(json) => tracing::debug!("[STORE] dispatch {}", json),
        Err(e) => tracing::warn!("[STORE] dispatch {:?} (unserializable: {})", action, e),
    }
    reduce(&mut store.todos().write(), action);
    let mirrored = store.todos().get_untracked();
    store.filtered().set(mirrored);
}

/// Recompute the view once from the current list
pub fn store_apply_filter(store: &TodoStore, filter: Filter) {
    let view = store.todos().with_untracked(|todos| filter.apply(todos));
    tracing::debug!("[FILTER] {} -> {} items", filter.label(), view.len());
    store.filtered().set(view);
}

/// Record a textarea change
pub fn store_change_input(store: &TodoStore, text: String, scroll_height: i32) {
    store.input().write().change(text, scroll_height);
}

/// Submit the pending input; blank input is silently ignored.
///
/// Returns the created todo.
pub fn store_submit(store: &TodoStore) -> Option<Todo> {
    let next_id = store.todos().with_untracked(|todos| todos.len() as u32 + 1);
    let Some(todo) = store.input().write().take_submission(next_id) else {
        tracing::debug!("[INPUT] blank submit ignored");
        return None;
    };
    store_dispatch(store, TodoAction::AddTodo(todo.clone()));
    Some(todo)
}

pub fn store_toggle(store: &TodoStore, id: u32) {
    store_dispatch(store, TodoAction::ToggleTodo(id));
}
