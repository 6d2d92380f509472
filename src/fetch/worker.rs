//! Background fetch worker.
//!
//! Each fetch runs on its own named thread and delivers exactly one
//! [`FetchOutcome`] over a channel. The UI thread polls without blocking.
//! Dropping the [`PendingFetch`] drops the receiver, so a late result is
//! discarded by the worker instead of reaching a screen that no longer
//! exists.

use super::{FetchOutcome, ReceiptFetcher};
use crate::model::{FetchError, MessageId};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Handle to an in-flight fetch.
#[derive(Debug)]
pub struct PendingFetch {
    message_id: MessageId,
    started: Instant,
    rx: Receiver<FetchOutcome>,
}

impl PendingFetch {
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Take the outcome if the worker has finished. Never blocks.
    ///
    /// A worker that died without sending (for instance a panicking fetcher)
    /// resolves as [`FetchError::WorkerLost`].
    pub fn try_take(&self) -> Option<FetchOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(FetchOutcome::TransportFailure(FetchError::WorkerLost))
            }
        }
    }

    /// Block up to `timeout` for the outcome.
    pub fn wait(&self, timeout: Duration) -> Option<FetchOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                Some(FetchOutcome::TransportFailure(FetchError::WorkerLost))
            }
        }
    }
}

/// Start fetching receipts for `message_id` on a background thread.
///
/// # Errors
///
/// Returns [`FetchError::Spawn`] if the thread could not be created.
pub fn spawn_fetch(
    fetcher: Arc<dyn ReceiptFetcher>,
    message_id: MessageId,
) -> Result<PendingFetch, FetchError> {
    let (tx, rx) = mpsc::channel();
    let worker_id = message_id.clone();

    std::thread::Builder::new()
        .name("rrview-fetch".into())
        .spawn(move || {
            let outcome = FetchOutcome::from(fetcher.get_read_receipts(&worker_id));
            let kind = outcome.kind();
            if tx.send(outcome).is_err() {
                debug!(message_id = %worker_id, outcome = kind, "Screen gone, dropping fetch result");
            }
        })
        .map_err(FetchError::Spawn)?;

    Ok(PendingFetch {
        message_id,
        started: Instant::now(),
        rx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchResponse;
    use std::sync::Mutex;
    use std::sync::mpsc::Sender;

    struct Immediate(bool);

    impl ReceiptFetcher for Immediate {
        fn get_read_receipts(&self, _: &MessageId) -> Result<FetchResponse, FetchError> {
            if self.0 {
                Ok(FetchResponse::success(Vec::new()))
            } else {
                Err(FetchError::MissingCredentials("user id"))
            }
        }
    }

    struct Panicking;

    impl ReceiptFetcher for Panicking {
        fn get_read_receipts(&self, _: &MessageId) -> Result<FetchResponse, FetchError> {
            panic!("fetcher exploded");
        }
    }

    /// Blocks until released, then reports whether its result was delivered.
    struct Gated {
        release: Mutex<Receiver<()>>,
        finished: Mutex<Sender<()>>,
    }

    impl ReceiptFetcher for Gated {
        fn get_read_receipts(&self, _: &MessageId) -> Result<FetchResponse, FetchError> {
            let _ = self.release.lock().unwrap().recv();
            let _ = self.finished.lock().unwrap().send(());
            Ok(FetchResponse::success(Vec::new()))
        }
    }

    fn id() -> MessageId {
        MessageId::new("m1").unwrap()
    }

    #[test]
    fn delivers_success() {
        let pending = spawn_fetch(Arc::new(Immediate(true)), id()).unwrap();
        let outcome = pending.wait(Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome, FetchOutcome::Success(_)));
        assert_eq!(pending.message_id().as_str(), "m1");
    }

    #[test]
    fn delivers_transport_failure() {
        let pending = spawn_fetch(Arc::new(Immediate(false)), id()).unwrap();
        let outcome = pending.wait(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            outcome,
            FetchOutcome::TransportFailure(FetchError::MissingCredentials(_))
        ));
    }

    #[test]
    fn panicking_fetcher_resolves_as_worker_lost() {
        let pending = spawn_fetch(Arc::new(Panicking), id()).unwrap();
        let outcome = pending.wait(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            outcome,
            FetchOutcome::TransportFailure(FetchError::WorkerLost)
        ));
    }

    #[test]
    fn try_take_is_empty_while_in_flight() {
        let (release_tx, release_rx) = mpsc::channel();
        let (finished_tx, _finished_rx) = mpsc::channel();
        let fetcher = Gated {
            release: Mutex::new(release_rx),
            finished: Mutex::new(finished_tx),
        };
        let pending = spawn_fetch(Arc::new(fetcher), id()).unwrap();

        assert!(pending.try_take().is_none());

        release_tx.send(()).unwrap();
        assert!(pending.wait(Duration::from_secs(5)).is_some());
    }

    #[test]
    fn dropped_handle_discards_result_quietly() {
        let (release_tx, release_rx) = mpsc::channel();
        let (finished_tx, finished_rx) = mpsc::channel();
        let fetcher = Gated {
            release: Mutex::new(release_rx),
            finished: Mutex::new(finished_tx),
        };
        let pending = spawn_fetch(Arc::new(fetcher), id()).unwrap();
        drop(pending);

        release_tx.send(()).unwrap();
        // The worker ran to completion without panicking on the closed channel.
        assert!(finished_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }
}
