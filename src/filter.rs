//! Filter Predicates
//!
//! The three filter buttons and the view each one derives from the store.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Button order in the filter bar
    pub const BUTTONS: [Filter; 3] = [Filter::Completed, Filter::Pending, Filter::All];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "pending",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Filter::All => "filter-btn filter-all",
            Filter::Completed => "filter-btn filter-completed",
            Filter::Pending => "filter-btn filter-pending",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => todo.completed,
            Filter::Pending => !todo.completed,
        }
    }

    /// Derive an independent copy of the matching items, in store order
    pub fn apply(self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|todo| self.matches(todo)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            completed,
            ..Todo::new(id, format!("Todo {}", id))
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, true),
            make_todo(2, false),
            make_todo(3, true),
            make_todo(4, false),
        ]
    }

    #[test]
    fn test_all_mirrors_store() {
        let todos = sample();
        assert_eq!(Filter::All.apply(&todos), todos);
    }

    #[test]
    fn test_completed_only_completed() {
        let todos = sample();
        let view = Filter::Completed.apply(&todos);
        assert!(view.iter().all(|t| t.completed));
        assert_eq!(view.len(), todos.iter().filter(|t| t.completed).count());
        assert_eq!(view.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_pending_only_pending() {
        let view = Filter::Pending.apply(&sample());
        assert_eq!(view.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_empty_store() {
        for filter in Filter::BUTTONS {
            assert!(filter.apply(&[]).is_empty());
        }
    }

    #[test]
    fn test_button_labels() {
        let labels: Vec<_> = Filter::BUTTONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Completed", "pending", "All"]);
    }
}
