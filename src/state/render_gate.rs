//! Redraw suppression.
//!
//! A redraw is skipped only when theme, loading flag and receipts all match
//! the last drawn snapshot. The gate decides when a frame is recomputed,
//! never what it contains.

use super::ViewState;
use crate::model::ReadReceipt;
use crate::theme::ThemeName;
use std::rc::Rc;

/// The render-relevant inputs of one frame.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub theme: ThemeName,
    pub loading: bool,
    pub receipts: Rc<[ReadReceipt]>,
}

impl RenderSnapshot {
    pub fn new(theme: ThemeName, state: &ViewState) -> Self {
        Self {
            theme,
            loading: state.loading(),
            receipts: state.shared_receipts(),
        }
    }
}

/// True unless all three inputs are unchanged.
///
/// Receipts compare deeply and in order; a shared allocation is equal
/// without walking it.
pub fn needs_rerender(prev: &RenderSnapshot, next: &RenderSnapshot) -> bool {
    if prev.theme != next.theme || prev.loading != next.loading {
        return true;
    }
    !(Rc::ptr_eq(&prev.receipts, &next.receipts) || prev.receipts == next.receipts)
}

/// Remembers the last drawn snapshot.
#[derive(Debug)]
pub struct RenderGate {
    enabled: bool,
    last: Option<RenderSnapshot>,
    skipped: u64,
}

impl RenderGate {
    /// A disabled gate lets every redraw through.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
            skipped: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Redraws suppressed so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Decide whether `next` must be drawn, recording it if so.
    pub fn should_render(&mut self, next: RenderSnapshot) -> bool {
        let render = match (&self.last, self.enabled) {
            (Some(prev), true) => needs_rerender(prev, &next),
            _ => true,
        };
        if render {
            self.last = Some(next);
        } else {
            self.skipped += 1;
        }
        render
    }

    /// Forget the last snapshot so the next check draws.
    ///
    /// Used when something outside the snapshot changed the frame (scroll, resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
