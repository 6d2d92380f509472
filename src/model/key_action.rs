//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the receipt list up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the receipt list down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first receipt. Default: g/Home
    ScrollToTop,
    /// Jump to the last receipt. Default: G/End
    ScrollToBottom,

    // Screen
    /// Request the receipts again. Ignored while a fetch is in flight. Default: r
    Reload,
    /// Switch to the next theme. Default: t
    CycleTheme,

    // Application
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action only moves the list viewport.
    ///
    /// Scroll actions repaint unconditionally; they never touch the view state.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_classified_as_scroll() {
        for action in [
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::PageUp,
            KeyAction::PageDown,
            KeyAction::ScrollToTop,
            KeyAction::ScrollToBottom,
        ] {
            assert!(action.is_scroll(), "{:?} should be a scroll action", action);
        }
    }

    #[test]
    fn screen_actions_are_not_scroll() {
        assert!(!KeyAction::Reload.is_scroll());
        assert!(!KeyAction::CycleTheme.is_scroll());
        assert!(!KeyAction::Quit.is_scroll());
    }
}
