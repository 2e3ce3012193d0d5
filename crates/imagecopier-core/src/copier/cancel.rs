/// Cooperative cancellation flag shared between the consumer and the worker.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cheap-to-clone handle on a shared cancellation flag.
///
/// The consumer calls [`CancelToken::cancel`]; the worker polls
/// [`CancelToken::is_cancelled`] before each source folder and before each
/// file. Once set it stays set for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
