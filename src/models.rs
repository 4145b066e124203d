//! Frontend Models
//!
//! Data structures held by the todo store.

use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the list, assigned as `len + 1` at creation
    pub id: u32,
    /// Raw input text (validated non-blank, stored untrimmed)
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_pending() {
        let todo = Todo::new(1, "  Buy milk ");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "  Buy milk ");
        assert!(!todo.completed);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Todo::new(3, "Walk dog")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "text": "Walk dog", "completed": false }));
    }
}
