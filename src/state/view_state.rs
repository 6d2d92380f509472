//! Screen-owned view state.

use crate::model::ReadReceipt;
use std::rc::Rc;

/// Loading flag and receipts of one screen instance.
///
/// Only the [`LoadController`](super::LoadController) mutates this. Receipts
/// are shared behind an `Rc` so render snapshots can hold them without
/// cloning, and are always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    loading: bool,
    receipts: Rc<[ReadReceipt]>,
}

impl ViewState {
    /// Initial state: not loading, no receipts.
    pub fn new() -> Self {
        Self::from_parts(false, Vec::new())
    }

    pub fn from_parts(loading: bool, receipts: Vec<ReadReceipt>) -> Self {
        Self {
            loading,
            receipts: receipts.into(),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Receipts in server order.
    pub fn receipts(&self) -> &[ReadReceipt] {
        &self.receipts
    }

    /// Shared handle to the current receipts.
    pub fn shared_receipts(&self) -> Rc<[ReadReceipt]> {
        Rc::clone(&self.receipts)
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Clear the loading flag and, if given, replace the receipts in the same step.
    pub(crate) fn finish_loading(&mut self, replacement: Option<Vec<ReadReceipt>>) {
        if let Some(receipts) = replacement {
            self.receipts = receipts.into();
        }
        self.loading = false;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
