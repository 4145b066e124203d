//! List Windowing
//!
//! Pure geometry for the virtualized list: which rows intersect the
//! viewport for a given scroll offset, and where each row is placed.

use std::ops::Range;

use crate::config::{LIST_HEIGHT, LIST_OVERSCAN, LIST_WIDTH, ROW_HEIGHT};

/// Fixed-size list viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    pub height: u32,
    pub width: u32,
    pub row_height: u32,
    pub overscan: usize,
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            height: LIST_HEIGHT,
            width: LIST_WIDTH,
            row_height: ROW_HEIGHT,
            overscan: LIST_OVERSCAN,
        }
    }
}

impl ListWindow {
    /// Height of the scrollable content
    pub fn total_height(&self, count: usize) -> u32 {
        self.row_height.saturating_mul(count as u32)
    }

    /// Top of row `index` inside the content
    pub fn row_top(&self, index: usize) -> u32 {
        self.row_height.saturating_mul(index as u32)
    }

    /// Largest meaningful scroll offset for `count` rows
    pub fn max_offset(&self, count: usize) -> u32 {
        self.total_height(count).saturating_sub(self.height)
    }

    /// Rows intersecting the viewport at `scroll_offset`
    pub fn visible_range(&self, count: usize, scroll_offset: u32) -> Range<usize> {
        if count == 0 || self.row_height == 0 || self.height == 0 {
            return 0..0;
        }
        let offset = scroll_offset.min(self.max_offset(count));
        let start = ((offset / self.row_height) as usize).min(count - 1);
        let end = (offset + self.height).div_ceil(self.row_height) as usize;
        start..end.min(count)
    }

    /// Visible rows widened by the overscan on both sides
    pub fn render_range(&self, count: usize, scroll_offset: u32) -> Range<usize> {
        let visible = self.visible_range(count, scroll_offset);
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(count);
        start..end
    }
}
