//! UI Components
//!
//! Leptos components of the todo widget.

mod todo_input;
mod filter_bar;
mod todo_row;
mod virtual_list;

pub use todo_input::TodoInput;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
pub use virtual_list::VirtualList;
