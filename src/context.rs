//! Application Context
//!
//! The todo store provided to every component via the Leptos Context API.

use leptos::prelude::*;

use crate::filter::Filter;
use crate::models::Todo;
use crate::store::{self, TodoStateStoreFields, TodoStore};

/// Handle to the widget state, `Copy` so event closures can capture it
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: TodoStore,
}

impl TodoContext {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Items the list should render
    pub fn filtered(&self) -> Vec<Todo> {
        self.store.filtered().get()
    }

    pub fn has_visible(&self) -> bool {
        self.store.filtered().with(|todos| !todos.is_empty())
    }

    pub fn input_text(&self) -> String {
        self.store.input().with(|input| input.text.clone())
    }

    pub fn input_style(&self) -> Option<String> {
        self.store.input().with(|input| input.height_style())
    }

    pub fn change_input(&self, text: String, scroll_height: i32) {
        store::store_change_input(&self.store, text, scroll_height);
    }

    pub fn submit(&self) {
        if let Some(todo) = store::store_submit(&self.store) {
            tracing::info!("[INPUT] added todo #{}", todo.id);
        }
    }

    pub fn toggle(&self, id: u32) {
        store::store_toggle(&self.store, id);
    }

    pub fn apply_filter(&self, filter: Filter) {
        store::store_apply_filter(&self.store, filter);
    }
}

/// Get the todo context provided by `App`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::store::TodoState;

    fn with_context(test: impl FnOnce(TodoContext)) {
        let owner = Owner::new();
        owner.set();
        test(TodoContext::new(Store::new(TodoState::default())));
    }

    fn type_and_submit(ctx: &TodoContext, text: &str) {
        ctx.change_input(text.to_string(), 36);
        ctx.submit();
    }

    #[test]
    fn test_fresh_widget_shows_empty_state() {
        with_context(|ctx| {
            assert!(!ctx.has_visible());
            assert!(ctx.filtered().is_empty());
            assert_eq!(ctx.input_text(), "");
            assert_eq!(ctx.input_style(), None);
        });
    }

    #[test]
    fn test_blank_submit_keeps_empty_state() {
        with_context(|ctx| {
            type_and_submit(&ctx, "");
            assert!(!ctx.has_visible());
            type_and_submit(&ctx, "  \t\n");
            assert!(!ctx.has_visible());
            // Rejected text stays in the textarea
            assert_eq!(ctx.input_text(), "  \t\n");
        });
    }

    #[test]
    fn test_submit_shows_new_task() {
        with_context(|ctx| {
            ctx.change_input("New Task".to_string(), 36);
            assert_eq!(ctx.input_style().as_deref(), Some("height: 36px;"));

            ctx.submit();
            assert!(ctx.has_visible());
            assert_eq!(ctx.filtered(), vec![Todo::new(1, "New Task")]);
            assert_eq!(ctx.input_text(), "");
            assert_eq!(ctx.input_style(), None);
        });
    }

    #[test]
    fn test_checkbox_toggles_back_and_forth() {
        with_context(|ctx| {
            type_and_submit(&ctx, "New Task");

            ctx.toggle(1);
            assert!(ctx.filtered()[0].completed);

            ctx.toggle(1);
            assert!(!ctx.filtered()[0].completed);
        });
    }

    #[test]
    fn test_filter_to_nothing_shows_empty_state() {
        with_context(|ctx| {
            type_and_submit(&ctx, "Pending only");

            ctx.apply_filter(Filter::Completed);
            assert!(!ctx.has_visible());

            ctx.apply_filter(Filter::All);
            assert!(ctx.has_visible());
        });
    }
}
