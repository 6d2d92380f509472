//! Scroll position of the receipt list, in rows.

use crate::model::KeyAction;

/// Lines taken by one receipt row.
pub const ROW_HEIGHT: u16 = 2;
/// Lines taken by the separator between two rows.
pub const SEPARATOR_HEIGHT: u16 = 1;
/// Distance between the tops of consecutive rows.
pub const ROW_STRIDE: u16 = ROW_HEIGHT + SEPARATOR_HEIGHT;

/// Rows that fit entirely in `height` lines.
pub fn rows_fully_visible(height: u16) -> usize {
    if height < ROW_HEIGHT {
        return 0;
    }
    usize::from((height - ROW_HEIGHT) / ROW_STRIDE) + 1
}

/// Index of the first visible row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScroll {
    offset: usize,
}

impl ListScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest offset that still keeps the last row fully in view.
    pub fn max_offset(total: usize, height: u16) -> usize {
        total.saturating_sub(rows_fully_visible(height).max(1))
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn clamp(&mut self, total: usize, height: u16) {
        self.offset = self.offset.min(Self::max_offset(total, height));
    }

    /// Apply a scroll action. Returns whether the offset moved.
    pub fn apply(&mut self, action: KeyAction, total: usize, height: u16) -> bool {
        let max = Self::max_offset(total, height);
        let page = rows_fully_visible(height).max(1);
        let before = self.offset;

        self.offset = match action {
            KeyAction::ScrollDown => self.offset.saturating_add(1),
            KeyAction::ScrollUp => self.offset.saturating_sub(1),
            KeyAction::PageDown => self.offset.saturating_add(page),
            KeyAction::PageUp => self.offset.saturating_sub(page),
            KeyAction::ScrollToTop => 0,
            KeyAction::ScrollToBottom => max,
            _ => self.offset,
        }
        .min(max);

        self.offset != before
    }
}
