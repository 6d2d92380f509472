//! Diagnostic channel for failed fetches.
//!
//! Reports are fire-and-forget: the caller never waits for or inspects the
//! result of reporting.

use crate::model::MessageId;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

/// Default number of diagnostics retained by [`DiagnosticLog`].
pub const DEFAULT_CAPACITY: usize = 64;

/// A failure worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The request itself failed (transport, decode).
    FetchFailed {
        message_id: MessageId,
        error: String,
    },
    /// The server answered, but with `success: false`.
    FetchRejected {
        message_id: MessageId,
        reason: Option<String>,
    },
}

impl Diagnostic {
    /// Stable code for log filtering.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::FetchFailed { .. } => "err_fetch_read_receipts",
            Diagnostic::FetchRejected { .. } => "warn_read_receipts_rejected",
        }
    }

    pub fn message_id(&self) -> &MessageId {
        match self {
            Diagnostic::FetchFailed { message_id, .. }
            | Diagnostic::FetchRejected { message_id, .. } => message_id,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FetchFailed { message_id, error } => {
                write!(f, "{} (message {}): {}", self.code(), message_id, error)
            }
            Diagnostic::FetchRejected { message_id, reason } => write!(
                f,
                "{} (message {}): {}",
                self.code(),
                message_id,
                reason.as_deref().unwrap_or("unspecified")
            ),
        }
    }
}

/// Receiver of diagnostic reports.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that emits each report as a tracing event and keeps the most recent
/// ones in memory.
#[derive(Debug)]
pub struct DiagnosticLog {
    entries: RefCell<VecDeque<Diagnostic>>,
    capacity: usize,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A capacity of zero keeps nothing in memory; events are still traced.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Retained diagnostics, oldest first.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::FetchFailed { message_id, error } => {
                tracing::error!(
                    code = diagnostic.code(),
                    message_id = %message_id,
                    error = %error,
                    "Failed to fetch read receipts"
                );
            }
            Diagnostic::FetchRejected { message_id, reason } => {
                tracing::warn!(
                    code = diagnostic.code(),
                    message_id = %message_id,
                    reason = reason.as_deref().unwrap_or("unspecified"),
                    "Server rejected read receipts request"
                );
            }
        }

        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(diagnostic);
    }
}
