//! Todo Reducer
//!
//! Actions accepted by the todo store and the function applying them.
//! Actions keep the `{ "type", "payload" }` shape so they read the same in
//! the debug log as they would on any external dispatch surface.

use serde::{Deserialize, Serialize};

use crate::models::Todo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "RawAction"
)]
pub enum TodoAction {
    /// Append an already validated item
    AddTodo(Todo),
    /// Flip `completed` on the item with this id
    ToggleTodo(u32),
    /// Any action kind this store does not know about
    Unknown,
}

/// Wire shape accepted on decode, before the tag is matched
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl TryFrom<RawAction> for TodoAction {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "ADD_TODO" => serde_json::from_value(raw.payload).map(TodoAction::AddTodo),
            "TOGGLE_TODO" => serde_json::from_value(raw.payload).map(TodoAction::ToggleTodo),
            // Unknown kinds decode whatever their payload
            _ => Ok(TodoAction::Unknown),
        }
    }
}

/// Apply `action` to `todos` in place.
///
/// Add never validates; callers reject blank text before dispatching.
/// Toggle of a missing id and unknown actions leave `todos` untouched.
pub fn reduce(todos: &mut Vec<Todo>, action: TodoAction) {
    match action {
        TodoAction::AddTodo(todo) => todos.push(todo),
        TodoAction::ToggleTodo(id) => {
            if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
                todo.completed = !todo.completed;
            }
        }
        TodoAction::Unknown => {}
    }
}
