//! Input Controller
//!
//! Pending textarea contents and the height hint used to auto-grow it.

use crate::models::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub text: String,
    /// Last observed `scrollHeight` in px, 0 = natural height
    pub height: i32,
}

impl InputState {
    pub fn change(&mut self, text: String, scroll_height: i32) {
        self.text = text;
        self.height = scroll_height;
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Turn the pending text into a new todo and reset.
    ///
    /// Returns `None` (and keeps the pending text) when it is blank.
    pub fn take_submission(&mut self, next_id: u32) -> Option<Todo> {
        if self.is_blank() {
            return None;
        }
        let text = std::mem::take(&mut self.text);
        self.height = 0;
        Some(Todo::new(next_id, text))
    }

    /// Inline style for the textarea, if an explicit height applies
    pub fn height_style(&self) -> Option<String> {
        (self.height > 0).then(|| format!("height: {}px;", self.height))
    }
}
