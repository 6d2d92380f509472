//! Virtualized list of read receipts.
//!
//! Each receipt is a two-line row:
//!
//! ```text
//!  AL  Alice                         6:13 AM
//!      @alice
//! ─────────────────────────────────────────
//! ```
//!
//! Only rows whose first line falls inside the viewport are laid out.

use super::avatar::{AVATAR_WIDTH, Avatar, initials};
use super::styles::{ColorConfig, ReceiptStyles};
use crate::model::ReadReceipt;
use crate::state::ListScroll;
use crate::state::list_scroll::{ROW_HEIGHT, ROW_STRIDE};
use crate::time_format::TimeFormatter;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Gap between the avatar and the text column.
const TEXT_INDENT: u16 = AVATAR_WIDTH + 1;

/// Indices of the rows starting inside a viewport of `height` lines.
pub fn visible_rows(total: usize, offset: usize, height: u16) -> Range<usize> {
    let start = offset.min(total);
    let count = usize::from(height).div_ceil(usize::from(ROW_STRIDE));
    start..start.saturating_add(count).min(total)
}

/// The strings shown for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub initials: String,
    pub label: String,
    pub time: String,
    pub handle: String,
}

impl RowText {
    pub fn new(receipt: &ReadReceipt, formatter: &TimeFormatter) -> Self {
        Self {
            initials: initials(&receipt.user.username),
            label: receipt.label().to_string(),
            time: formatter.format(receipt.timestamp),
            handle: receipt.handle(),
        }
    }
}

pub struct ReceiptList<'a> {
    receipts: &'a [ReadReceipt],
    formatter: &'a TimeFormatter,
    styles: ReceiptStyles,
    colors: ColorConfig,
}

impl<'a> ReceiptList<'a> {
    pub fn new(
        receipts: &'a [ReadReceipt],
        formatter: &'a TimeFormatter,
        styles: ReceiptStyles,
        colors: ColorConfig,
    ) -> Self {
        Self {
            receipts,
            formatter,
            styles,
            colors,
        }
    }

    fn render_row(&self, receipt: &ReadReceipt, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.row);

        let avatar_area = Rect {
            width: AVATAR_WIDTH.min(area.width),
            ..area
        };
        Avatar::new(&receipt.user.username, self.colors).render(avatar_area, buf);

        if area.width <= TEXT_INDENT {
            return;
        }
        let text_x = area.x + TEXT_INDENT;
        let text_width = usize::from(area.width - TEXT_INDENT);
        let row = RowText::new(receipt, self.formatter);

        // Time is right-aligned; the name gets what is left.
        let time_width = row.time.width();
        let name_width = if time_width + 1 < text_width {
            let time_x = area.right() - time_width as u16;
            buf.set_stringn(time_x, area.y, &row.time, time_width, self.styles.auxiliary);
            text_width - time_width - 1
        } else {
            text_width
        };
        buf.set_stringn(text_x, area.y, &row.label, name_width, self.styles.name);

        if area.height > 1 {
            buf.set_stringn(
                text_x,
                area.y + 1,
                &row.handle,
                text_width,
                self.styles.auxiliary,
            );
        }
    }

    fn render_separator(&self, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let line = "─".repeat(usize::from(width));
        buf.set_stringn(x, y, line, usize::from(width), self.styles.separator);
    }
}

impl StatefulWidget for ReceiptList<'_> {
    type State = ListScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ListScroll) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.styles.body);
        scroll.clamp(self.receipts.len(), area.height);

        let window = visible_rows(self.receipts.len(), scroll.offset(), area.height);
        for (slot, index) in window.enumerate() {
            let y = area.y + slot as u16 * ROW_STRIDE;
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: ROW_HEIGHT.min(area.bottom() - y),
            };
            self.render_row(&self.receipts[index], row_area, buf);

            let separator_y = y + ROW_HEIGHT;
            if index + 1 < self.receipts.len() && separator_y < area.bottom() {
                self.render_separator(area.x, separator_y, area.width, buf);
            }
        }
    }
}
