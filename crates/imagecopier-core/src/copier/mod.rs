/// Copier module — runs the copy worker on a background thread.
///
/// The worker is the single producer on a bounded FIFO channel of
/// [`CopyEvent`]s; the consumer (GUI frame loop, CLI, or test) drains it
/// without blocking and owns the [`CancelToken`]. Cancellation is
/// cooperative: it is observed before each source folder and before each
/// file, never in the middle of a file copy.
pub mod cancel;
pub mod events;
pub mod worker;

pub use cancel::CancelToken;
pub use events::{
    CompletionEvent, CopyEvent, LogEvent, Outcome, ProgressEvent, ProgressMode, Severity,
};
pub use worker::run_copy;

use crate::error::CopierError;
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Maximum number of events that may queue up in the channel.
///
/// The GUI drains a few hundred events per frame. If it falls behind, the
/// worker stalls on `send` rather than growing the queue without bound.
pub const EVENT_CHANNEL_CAPACITY: usize = 4_096;

/// Cadence at which a consumer is expected to poll the channel.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long shutdown waits for an active run to notice cancellation.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Inputs for one run. Taken by value; the worker never mutates them.
#[derive(Debug, Clone, Default)]
pub struct CopyRequest {
    pub source_folders: Vec<PathBuf>,
    pub destination_folder: Option<PathBuf>,
    /// Session log file announced at the start of the run, if any.
    pub session_log: Option<PathBuf>,
}

/// Handle to a running or completed copy run.
pub struct CopyHandle {
    /// Receiver for events from the worker thread.
    pub events_rx: Receiver<CopyEvent>,
    cancel: CancelToken,
    thread: Option<thread::JoinHandle<()>>,
}

impl CopyHandle {
    /// Request the run to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// `true` once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }

    /// Cancel the run and wait up to `timeout` for the worker to exit.
    ///
    /// Returns `true` if the worker exited in time. Otherwise the thread is
    /// detached and left to finish on its own; a file being copied at that
    /// moment may be left partially written.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.cancel();
        let Some(thread) = self.thread.take() else {
            return true;
        };

        let deadline = Instant::now() + timeout;
        while !thread.is_finished() {
            if Instant::now() >= deadline {
                warn!(
                    "Copy worker did not stop within {:?}; abandoning it",
                    timeout
                );
                return false;
            }
            // The worker may be blocked on a full channel; keep draining.
            while self.events_rx.try_recv().is_ok() {}
            thread::sleep(Duration::from_millis(10));
        }
        if thread.join().is_err() {
            warn!("Copy worker panicked during shutdown");
        }
        true
    }
}

/// Start a copy run on a background thread.
///
/// Returns a [`CopyHandle`] for receiving events and requesting
/// cancellation.
pub fn start_copy(request: CopyRequest) -> Result<CopyHandle, CopierError> {
    let (events_tx, events_rx) = crossbeam_channel::bounded::<CopyEvent>(EVENT_CHANNEL_CAPACITY);
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::Builder::new()
        .name("imagecopier-worker".into())
        .spawn(move || {
            info!(
                "Starting copy of {} source folder(s)",
                request.source_folders.len()
            );
            let done = run_copy(&request, &events_tx, &worker_cancel);
            info!(
                "Copy run ended: {:?} ({} copied, {} skipped)",
                done.outcome, done.copied, done.skipped
            );
        })
        .map_err(CopierError::Spawn)?;

    Ok(CopyHandle {
        events_rx,
        cancel,
        thread: Some(thread),
    })
}
