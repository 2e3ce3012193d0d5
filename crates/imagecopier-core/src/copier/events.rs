/// Event protocol between the copy worker and its consumer.
///
/// The worker is the only producer; the consumer drains the channel in
/// FIFO order. Every run ends with exactly one [`CopyEvent::Finished`].
use crossbeam_channel::Sender;
use tracing::{error, info, warn};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Which phase a progress report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Enumerating source folders; total unknown.
    Scanning,
    /// Copying candidates; total fixed.
    Copying,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    CompletedWithErrors,
    Cancelled,
    Error,
    Warning,
}

impl Outcome {
    /// Title for the completion summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Process Complete",
            Self::CompletedWithErrors => "Process Complete with Errors",
            Self::Cancelled => "Process Cancelled",
            Self::Error => "Process Failed",
            Self::Warning => "Nothing To Copy",
        }
    }

    /// Short text for the status bar.
    pub fn status_text(self) -> &'static str {
        match self {
            Self::Completed => "Process complete!",
            Self::CompletedWithErrors => "Process complete with errors.",
            Self::Cancelled => "Process cancelled.",
            Self::Error => "Process failed.",
            Self::Warning => "Nothing to copy.",
        }
    }
}

/// One human-readable line for the log view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub severity: Severity,
    pub text: String,
}

/// Progress counters. `total == 0` with [`ProgressMode::Scanning`] means
/// indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current: u64,
    pub total: u64,
    pub mode: ProgressMode,
}

impl ProgressEvent {
    pub fn is_indeterminate(&self) -> bool {
        self.mode == ProgressMode::Scanning
    }

    /// Fraction in `0.0..=1.0`, `None` while indeterminate.
    pub fn fraction(&self) -> Option<f32> {
        if self.is_indeterminate() {
            return None;
        }
        if self.total == 0 {
            return Some(1.0);
        }
        Some((self.current as f32 / self.total as f32).clamp(0.0, 1.0))
    }
}

/// The single terminal event of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEvent {
    pub outcome: Outcome,
    pub copied: u64,
    pub skipped: u64,
    /// Candidates found during enumeration; 0 if the run never got there.
    pub total: u64,
    pub bytes_copied: u64,
}

impl CompletionEvent {
    /// A terminal event for a run that stopped before copying anything.
    pub fn empty(outcome: Outcome) -> Self {
        Self {
            outcome,
            copied: 0,
            skipped: 0,
            total: 0,
            bytes_copied: 0,
        }
    }
}

/// Messages sent from the worker thread to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    Log(LogEvent),
    Progress(ProgressEvent),
    Finished(CompletionEvent),
}

/// Producer side of the channel, used only by the worker.
///
/// Every log line is mirrored to `tracing` at the matching level so the
/// session log file sees exactly what the consumer sees. Send errors mean
/// the consumer went away; the run carries on regardless.
pub(crate) struct EventReporter<'a> {
    tx: &'a Sender<CopyEvent>,
}

impl<'a> EventReporter<'a> {
    pub(crate) fn new(tx: &'a Sender<CopyEvent>) -> Self {
        Self { tx }
    }

    pub(crate) fn log(&self, severity: Severity, text: impl Into<String>) {
        let text = text.into();
        match severity {
            Severity::Info => info!("{text}"),
            Severity::Warning => warn!("{text}"),
            Severity::Error => error!("{text}"),
        }
        let _ = self.tx.send(CopyEvent::Log(LogEvent { severity, text }));
    }

    pub(crate) fn info(&self, text: impl Into<String>) {
        self.log(Severity::Info, text);
    }

    pub(crate) fn warning(&self, text: impl Into<String>) {
        self.log(Severity::Warning, text);
    }

    pub(crate) fn error(&self, text: impl Into<String>) {
        self.log(Severity::Error, text);
    }

    pub(crate) fn progress(&self, current: u64, total: u64, mode: ProgressMode) {
        let _ = self.tx.send(CopyEvent::Progress(ProgressEvent {
            current,
            total,
            mode,
        }));
    }

    /// Send the terminal event and hand it back to the caller.
    pub(crate) fn finish(self, completion: CompletionEvent) -> CompletionEvent {
        let _ = self.tx.send(CopyEvent::Finished(completion));
        completion
    }
}
