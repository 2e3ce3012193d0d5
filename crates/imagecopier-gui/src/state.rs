/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The copy
/// worker communicates via a channel; state updates happen in
/// `process_copy_messages()` which runs once per frame and never blocks.
use chrono::{DateTime, Local};
use imagecopier_core::copier::{
    self, CompletionEvent, CopyEvent, CopyHandle, CopyRequest, Outcome, ProgressEvent,
    ProgressMode, Severity, SHUTDOWN_TIMEOUT,
};
use imagecopier_core::model::format::{format_count, format_size};
use imagecopier_core::settings::{Settings, SettingsStore};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No run yet; inputs editable.
    Idle,
    /// Enumerating source folders; progress indeterminate.
    Scanning,
    /// Copying files; progress determinate.
    Copying,
    /// A run ended; the last outcome is available.
    Finished,
}

/// A line in the on-screen log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub text: String,
}

/// Maximum number of events drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is shown again.
pub const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum lines kept in the on-screen log. Oldest lines are dropped first;
/// the session log file keeps everything.
pub const MAX_LOG_LINES: usize = 10_000;

pub const STATUS_READY: &str = "Ready.";
pub const STATUS_SCANNING: &str = "Scanning files...";
pub const STATUS_COPYING: &str = "Copying files...";
pub const STATUS_CANCELLING: &str = "Cancelling...";

pub const MSG_FOLDER_ALREADY_ADDED: &str = "Folder already added.";
pub const MSG_NOT_A_FOLDER: &str = "Not an existing folder.";
pub const MSG_NO_SOURCE_FOLDERS: &str = "Please select at least one source folder.";
pub const MSG_NO_DEST_FOLDER: &str = "Please select a destination folder.";
pub const MSG_DEST_FOLDER_NOT_EXIST: &str = "Destination folder not set or does not exist.";
pub const MSG_LOG_FILE_NOT_FOUND: &str = "Log file not found.";

/// All application state.
pub struct AppState {
    // ── Inputs ─────────────────────────────────────────
    pub source_folders: Vec<PathBuf>,
    pub selected_source: Option<usize>,
    pub destination_folder: Option<PathBuf>,
    /// Text box for adding a source folder.
    pub source_input: String,
    /// Text box for the destination folder.
    pub destination_input: String,

    // ── Run ────────────────────────────────────────────
    pub phase: AppPhase,
    copy_handle: Option<CopyHandle>,
    pub progress: Option<ProgressEvent>,
    pub last_completion: Option<CompletionEvent>,

    // ── Output ─────────────────────────────────────────
    pub log_lines: VecDeque<LogLine>,
    pub status_text: String,
    /// Validation message shown next to the inputs (not a log line).
    pub notice: Option<String>,

    // ── UI state ───────────────────────────────────────
    pub show_summary: bool,
    pub show_about: bool,
    pub dark_mode: bool,

    settings_store: SettingsStore,
    session_log: Option<PathBuf>,
    shut_down: bool,
}

impl AppState {
    /// Create state from persisted settings.
    pub fn new(settings_store: SettingsStore, session_log: Option<PathBuf>) -> Self {
        let settings = settings_store.load();
        let destination_input = settings
            .destination_folder
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            source_folders: settings.source_folders,
            selected_source: None,
            destination_folder: settings.destination_folder,
            source_input: String::new(),
            destination_input,
            phase: AppPhase::Idle,
            copy_handle: None,
            progress: None,
            last_completion: None,
            log_lines: VecDeque::new(),
            status_text: STATUS_READY.to_string(),
            notice: None,
            show_summary: false,
            show_about: false,
            dark_mode: true,
            settings_store,
            session_log,
            shut_down: false,
        }
    }

    /// `true` while a worker is running; inputs are locked.
    pub fn is_running(&self) -> bool {
        self.copy_handle.is_some()
    }

    pub fn session_log(&self) -> Option<&Path> {
        self.session_log.as_deref()
    }

    // ── Folder management ─────────────────────────────

    /// Add a source folder. Rejects duplicates and paths that are not
    /// existing directories, leaving a notice instead.
    pub fn add_source_folder(&mut self, path: PathBuf) -> bool {
        if self.is_running() {
            return false;
        }
        if !path.is_dir() {
            self.notice = Some(format!("{MSG_NOT_A_FOLDER} ({})", path.display()));
            return false;
        }
        if self.source_folders.contains(&path) {
            self.notice = Some(MSG_FOLDER_ALREADY_ADDED.to_string());
            return false;
        }
        info!("Added source folder: {}", path.display());
        self.source_folders.push(path);
        self.notice = None;
        true
    }

    /// Add whatever is in the source text box; clears it on success.
    pub fn commit_source_input(&mut self) -> bool {
        let raw = self.source_input.trim().to_string();
        if raw.is_empty() {
            return false;
        }
        let added = self.add_source_folder(PathBuf::from(raw));
        if added {
            self.source_input.clear();
        }
        added
    }

    pub fn remove_source_folder(&mut self, index: usize) {
        if self.is_running() || index >= self.source_folders.len() {
            return;
        }
        let removed = self.source_folders.remove(index);
        info!("Removed source folder: {}", removed.display());
        self.selected_source = None;
    }

    /// Set the destination. It need not exist yet; the worker creates it.
    pub fn set_destination(&mut self, path: PathBuf) {
        if self.is_running() {
            return;
        }
        if path.as_os_str().is_empty() {
            self.destination_folder = None;
        } else {
            info!("Destination folder set to: {}", path.display());
            self.destination_input = path.display().to_string();
            self.destination_folder = Some(path);
        }
    }

    pub fn commit_destination_input(&mut self) {
        let raw = self.destination_input.trim().to_string();
        self.set_destination(PathBuf::from(raw));
    }

    // ── Run control ───────────────────────────────────

    /// Validate inputs and start a run on a background thread.
    pub fn start_copy(&mut self) {
        if self.is_running() {
            return;
        }
        if self.source_folders.is_empty() {
            warn!("Attempted to start copy without source folders.");
            self.notice = Some(MSG_NO_SOURCE_FOLDERS.to_string());
            self.status_text = STATUS_READY.to_string();
            return;
        }
        let Some(destination) = self.destination_folder.clone() else {
            warn!("Attempted to start copy without destination folder.");
            self.notice = Some(MSG_NO_DEST_FOLDER.to_string());
            self.status_text = STATUS_READY.to_string();
            return;
        };

        self.notice = None;
        self.progress = None;
        self.last_completion = None;
        self.show_summary = false;
        self.log_lines.clear();

        let request = CopyRequest {
            source_folders: self.source_folders.clone(),
            destination_folder: Some(destination),
            session_log: self.session_log.clone(),
        };
        match copier::start_copy(request) {
            Ok(handle) => {
                self.copy_handle = Some(handle);
                self.phase = AppPhase::Scanning;
                self.status_text = "Starting copy process...".to_string();
            }
            Err(err) => {
                error!("{err}");
                self.push_log(Severity::Error, err.to_string());
                self.finish(CompletionEvent::empty(Outcome::Error));
            }
        }
    }

    /// Ask the running worker to stop at its next checkpoint.
    pub fn cancel_copy(&mut self) {
        if let Some(handle) = &self.copy_handle {
            if !handle.is_cancelled() {
                warn!("User requested cancellation.");
                handle.cancel();
                self.push_log(
                    Severity::Warning,
                    "Cancellation requested. Waiting for current file operation to finish...",
                );
                self.status_text = STATUS_CANCELLING.to_string();
            }
        }
    }

    /// Process pending worker events. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_copy_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;

        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match &self.copy_handle {
                Some(handle) => match handle.events_rx.try_recv() {
                    Ok(m) => m,
                    Err(_) => break,
                },
                None => break,
            };
            messages_this_frame += 1;
            repaint = true;

            match msg {
                CopyEvent::Log(line) => self.push_log(line.severity, line.text),
                CopyEvent::Progress(progress) => self.apply_progress(progress),
                CopyEvent::Finished(done) => {
                    self.finish(done);
                    return true;
                }
            }
        }

        repaint
    }

    fn apply_progress(&mut self, progress: ProgressEvent) {
        let cancelling = self.copy_handle.as_ref().is_some_and(|h| h.is_cancelled());
        match progress.mode {
            ProgressMode::Scanning => {
                self.phase = AppPhase::Scanning;
                if !cancelling {
                    self.status_text = STATUS_SCANNING.to_string();
                }
            }
            ProgressMode::Copying => {
                self.phase = AppPhase::Copying;
                if !cancelling {
                    self.status_text = if progress.total > 0 {
                        format!(
                            "{STATUS_COPYING} ({}/{})",
                            format_count(progress.current),
                            format_count(progress.total)
                        )
                    } else {
                        STATUS_COPYING.to_string()
                    };
                }
            }
        }
        self.progress = Some(progress);
    }

    fn finish(&mut self, done: CompletionEvent) {
        info!(
            "Copy process finished: {:?}. Copied: {}, Skipped: {}",
            done.outcome, done.copied, done.skipped
        );
        // The worker exits right after the terminal event; dropping the
        // handle detaches the thread.
        self.copy_handle = None;
        self.phase = AppPhase::Finished;
        self.status_text = done.outcome.status_text().to_string();
        self.last_completion = Some(done);
        self.show_summary = true;
    }

    /// Body text for the completion summary window.
    pub fn summary_message(&self) -> Option<String> {
        let done = self.last_completion?;
        let text = match done.outcome {
            Outcome::Completed => format!(
                "Successfully copied {} image files ({}).",
                format_count(done.copied),
                format_size(done.bytes_copied)
            ),
            Outcome::CompletedWithErrors => format!(
                "Copied {} files, but {} files were skipped due to errors. Check log for details.",
                format_count(done.copied),
                format_count(done.skipped)
            ),
            Outcome::Cancelled => format!(
                "Image copying process was cancelled after {} of {} files.",
                format_count(done.copied + done.skipped),
                format_count(done.total)
            ),
            Outcome::Error => {
                "Image copying process failed due to an error. Check log for details.".to_string()
            }
            Outcome::Warning => "There was nothing to copy. Check log for details.".to_string(),
        };
        Some(text)
    }

    // ── Log ───────────────────────────────────────────

    fn push_log(&mut self, severity: Severity, text: impl Into<String>) {
        if self.log_lines.len() >= MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
        self.log_lines.push_back(LogLine {
            timestamp: Local::now(),
            severity,
            text: text.into(),
        });
    }

    pub fn clear_log(&mut self) {
        self.log_lines.clear();
    }

    // ── External openers ──────────────────────────────

    pub fn open_destination(&mut self) {
        match self.destination_folder.as_deref().filter(|p| p.is_dir()) {
            Some(path) => match imagecopier_core::platform::open_path(path) {
                Ok(()) => {
                    info!("Opened destination folder: {}", path.display());
                    self.status_text = format!("Opened: {}", path.display());
                }
                Err(err) => {
                    error!("Failed to open destination folder '{}': {err}", path.display());
                    self.notice = Some(format!("Could not open destination folder: {err}"));
                }
            },
            None => {
                warn!("Attempted to open non-existent destination folder.");
                self.notice = Some(MSG_DEST_FOLDER_NOT_EXIST.to_string());
            }
        }
    }

    pub fn open_log_file(&mut self) {
        match self.session_log.as_deref().filter(|p| p.exists()) {
            Some(path) => match imagecopier_core::platform::open_path(path) {
                Ok(()) => {
                    info!("Opened log file: {}", path.display());
                    self.status_text = "Opened log file.".to_string();
                }
                Err(err) => {
                    error!("Failed to open log file '{}': {err}", path.display());
                    self.notice = Some(format!("Could not open log file: {err}"));
                }
            },
            None => {
                warn!("Attempted to open non-existent log file.");
                self.notice = Some(MSG_LOG_FILE_NOT_FOUND.to_string());
            }
        }
    }

    // ── Shutdown ──────────────────────────────────────

    /// Stop any active run (waiting at most [`SHUTDOWN_TIMEOUT`]) and save
    /// settings. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if let Some(mut handle) = self.copy_handle.take() {
            info!("Application closing: cancellation requested for active copy run.");
            if handle.shutdown(SHUTDOWN_TIMEOUT) {
                info!("Copy worker stopped.");
            } else {
                warn!("Copy worker did not terminate within timeout; exiting anyway.");
            }
        }

        let settings = Settings {
            source_folders: self.source_folders.clone(),
            destination_folder: self.destination_folder.clone(),
        };
        if let Err(err) = self.settings_store.save(&settings) {
            error!("{err}");
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Some(handle) = &self.copy_handle {
            handle.cancel();
        }
    }
}
