/// ImageCopier Core — copy worker, event protocol, and persistence.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, tests).
///
/// # Modules
///
/// - [`copier`] — Background copy worker with progress events and cancellation.
/// - [`model`] — Image extension filter, unique naming, display formatting.
/// - [`settings`] — JSON persistence of the last used folders.
/// - [`logging`] — Session log file + console `tracing` subscriber.
/// - [`platform`] — Opening folders and files with the OS default handler.
/// - [`error`] — Typed errors for the fallible setup paths.
pub mod copier;
pub mod error;
pub mod logging;
pub mod model;
pub mod platform;
pub mod settings;

pub use error::{CopierError, LoggingError, SettingsError};
