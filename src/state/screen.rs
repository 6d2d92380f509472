//! The read receipt screen instance.
//!
//! Owns the [`ViewState`] and its [`LoadController`]. Dropping the screen is
//! the unmount: any fetch still running finishes on its worker and its
//! result is discarded.

use super::{
    LoadController, LoadRequest, LogicalFailurePolicy, RenderState, ViewState,
    derive_render_state,
};
use crate::fetch::ReceiptFetcher;
use crate::logging::DiagnosticSink;
use crate::model::MessageId;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct ReceiptScreen {
    state: ViewState,
    controller: LoadController,
    mounted: bool,
}

impl ReceiptScreen {
    /// Create an unmounted screen for `message_id`. No request is made yet.
    pub fn new(
        message_id: MessageId,
        fetcher: Arc<dyn ReceiptFetcher>,
        diagnostics: Rc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            state: ViewState::new(),
            controller: LoadController::new(message_id, fetcher, diagnostics),
            mounted: false,
        }
    }

    pub fn with_policy(mut self, policy: LogicalFailurePolicy) -> Self {
        self.controller = self.controller.with_policy(policy);
        self
    }

    /// Mount the screen, starting the initial load.
    ///
    /// Only the first call has an effect; returns whether this was it.
    pub fn on_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.load();
        true
    }

    /// Guarded reload.
    pub fn load(&mut self) -> LoadRequest {
        self.controller.load(&mut self.state)
    }

    /// Apply a finished fetch, if any. Never blocks.
    pub fn poll(&mut self) -> bool {
        self.controller.poll(&mut self.state)
    }

    /// Wait up to `timeout` for the in-flight fetch.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        self.controller.settle(&mut self.state, timeout)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn render_state(&self) -> RenderState {
        derive_render_state(&self.state)
    }

    pub fn message_id(&self) -> &MessageId {
        self.controller.message_id()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_in_flight(&self) -> bool {
        self.controller.is_in_flight()
    }

    pub fn requests_issued(&self) -> u64 {
        self.controller.requests_issued()
    }
}
