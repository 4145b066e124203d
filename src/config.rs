//! UI Constants
//!
//! Labels and list geometry shared by the components.

pub const HEADER_TEXT: &str = "Todo App";
pub const INPUT_PLACEHOLDER: &str = "Add new task...";
pub const SUBMIT_LABEL: &str = "Add Todo";
pub const EMPTY_MESSAGE: &str = "No todos Exist!";

/// Row checkbox test id is this prefix followed by the todo id
pub const TOGGLE_TESTID_PREFIX: &str = "toggle-todo-";

/// Viewport of the windowed list, in px
pub const LIST_HEIGHT: u32 = 400;
pub const LIST_WIDTH: u32 = 400;
pub const ROW_HEIGHT: u32 = 50;
/// Rows rendered beyond each edge of the viewport
pub const LIST_OVERSCAN: usize = 2;

/// Log lines kept in memory by the logger
pub const LOG_CAPACITY: usize = 200;

pub fn toggle_testid(id: u32) -> String {
    format!("{}{}", TOGGLE_TESTID_PREFIX, id)
}

pub fn log_level() -> tracing::level_filters::LevelFilter {
    if cfg!(debug_assertions) {
        tracing::level_filters::LevelFilter::DEBUG
    } else {
        tracing::level_filters::LevelFilter::INFO
    }
}
