/// The copy worker: enumerate image files under the source folders, then
/// copy each one into the destination under a fresh unique name.
///
/// The run is collect-then-copy: the full candidate list is built before the
/// first copy so the copy phase always has a known total. Every failure is
/// turned into a log event and the run keeps going; only a missing or
/// unusable destination ends it early with [`Outcome::Error`].
use super::events::{CompletionEvent, CopyEvent, EventReporter, Outcome, ProgressMode};
use super::{CancelToken, CopyRequest};
use crate::model::{is_image_file, source_extension, unique_file_name};
use crossbeam_channel::Sender;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Execute one full copy run on the calling thread.
///
/// Emits log and progress events on `events` and always finishes with exactly
/// one [`CopyEvent::Finished`], which is also returned.
pub fn run_copy(
    request: &CopyRequest,
    events: &Sender<CopyEvent>,
    cancel: &CancelToken,
) -> CompletionEvent {
    let start = Instant::now();
    let reporter = EventReporter::new(events);

    reporter.info("--- Starting Image Copy Process ---");
    if let Some(log_path) = &request.session_log {
        reporter.info(format!(
            "Log file for this session: {}",
            log_path.display()
        ));
    }

    let destination = match request.destination_folder.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            reporter.error("Error: No destination folder selected.");
            return reporter.finish(CompletionEvent::empty(Outcome::Error));
        }
    };

    let destination = match prepare_destination(destination) {
        Ok((path, created)) => {
            if created {
                reporter.info(format!("Created destination folder: {}", path.display()));
            } else {
                reporter.info(format!(
                    "Using existing destination folder: {}",
                    path.display()
                ));
            }
            path
        }
        Err(err) => {
            reporter.error(format!(
                "Error creating/accessing destination folder '{}': {err}",
                destination.display()
            ));
            return reporter.finish(CompletionEvent::empty(Outcome::Error));
        }
    };

    if request.source_folders.is_empty() {
        reporter.warning("Warning: No source folders selected.");
        return reporter.finish(CompletionEvent::empty(Outcome::Warning));
    }

    // ── Phase 1: enumeration ─────────────────────────────────────────────
    reporter.info("Scanning source folders for image files...");
    reporter.progress(0, 0, ProgressMode::Scanning);

    let mut candidates: Vec<PathBuf> = Vec::new();
    for folder in &request.source_folders {
        if cancel.is_cancelled() {
            reporter.warning("Process cancelled during file enumeration.");
            return reporter.finish(CompletionEvent::empty(Outcome::Cancelled));
        }

        let folder = match absolute_normalized(folder) {
            Ok(path) => path,
            Err(err) => {
                reporter.error(format!(
                    "An unexpected error occurred while enumerating folder '{}': {err}",
                    folder.display()
                ));
                continue;
            }
        };
        if !folder.is_dir() {
            reporter.warning(format!(
                "Source folder not found or is not a directory, skipping: {}",
                folder.display()
            ));
            continue;
        }

        collect_candidates(&folder, &mut candidates, &reporter);
    }

    // ── Phase 2: copy ────────────────────────────────────────────────────
    let completion = copy_candidates(&candidates, &destination, &reporter, cancel);
    debug!("Copy run finished in {:?}", start.elapsed());
    reporter.finish(completion)
}

/// Copy every candidate into `destination` under a fresh name, checking for
/// cancellation before each file. Returns the terminal counters without
/// sending them.
fn copy_candidates(
    candidates: &[PathBuf],
    destination: &Path,
    reporter: &EventReporter<'_>,
    cancel: &CancelToken,
) -> CompletionEvent {
    let total = candidates.len() as u64;
    reporter.info(format!(
        "Finished scanning. Found {total} potential image files to copy."
    ));
    reporter.progress(0, total, ProgressMode::Copying);

    let mut copied: u64 = 0;
    let mut skipped: u64 = 0;
    let mut bytes_copied: u64 = 0;

    for (i, source) in candidates.iter().enumerate() {
        if cancel.is_cancelled() {
            reporter.warning("Process cancelled during file copying.");
            return CompletionEvent {
                outcome: Outcome::Cancelled,
                copied,
                skipped,
                total,
                bytes_copied,
            };
        }

        reporter.progress(i as u64 + 1, total, ProgressMode::Copying);

        let new_name = unique_file_name(&source_extension(source));
        let target = destination.join(&new_name);
        let display_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());

        match copy_with_metadata(source, &target) {
            Ok(bytes) => {
                copied += 1;
                bytes_copied += bytes;
                reporter.info(format!("  Copied '{display_name}' as '{new_name}'"));
            }
            Err(err) => {
                skipped += 1;
                reporter.error(format!(
                    "  Error copying '{display_name}' to '{}': {err}",
                    target.display()
                ));
            }
        }
    }

    reporter.info("--- Finished Image Copy Process ---");
    reporter.info(format!("Total files identified: {total}"));
    reporter.info(format!("Total image files copied successfully: {copied}"));
    if skipped > 0 {
        reporter.warning(format!("Total files skipped due to errors: {skipped}"));
    }

    let outcome = if skipped == 0 {
        Outcome::Completed
    } else {
        Outcome::CompletedWithErrors
    };
    CompletionEvent {
        outcome,
        copied,
        skipped,
        total,
        bytes_copied,
    }
}

/// Resolve the destination and make sure it exists as a directory.
///
/// Returns the resolved path and whether it had to be created.
fn prepare_destination(path: &Path) -> io::Result<(PathBuf, bool)> {
    let path = absolute_normalized(path)?;
    if path.is_dir() {
        return Ok((path, false));
    }
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        ));
    }
    fs::create_dir_all(&path)?;
    Ok((path, true))
}

/// Walk `root` recursively and append every image file to `candidates` in
/// traversal order. Symlinks to files count as files; symlinked directories
/// are not followed. Unreadable entries are reported and skipped.
fn collect_candidates(root: &Path, candidates: &mut Vec<PathBuf>, reporter: &EventReporter<'_>) {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    let before = candidates.len();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let file_type = entry.file_type();
                if !file_type.is_file() && !file_type.is_symlink() {
                    continue;
                }
                let path = entry.path();
                if !is_image_file(&path) {
                    continue;
                }
                // Links to files are copied through; links to directories
                // are never descended into.
                if file_type.is_symlink() && !fs::metadata(&path).is_ok_and(|m| m.is_file()) {
                    continue;
                }
                candidates.push(path);
            }
            Err(err) => {
                // jwalk errors are typically access-denied on directories.
                let at = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                reporter.error(format!(
                    "Permission denied or unreadable path while enumerating folder '{}' ({at}): {err}",
                    root.display()
                ));
            }
        }
    }
    debug!(
        "Found {} image files under {}",
        candidates.len() - before,
        root.display()
    );
}

/// Copy bytes and permissions, then carry over access/modification times.
///
/// Timestamp restoration is best-effort: the bytes are already in place, so
/// a failure there does not count the file as skipped.
fn copy_with_metadata(source: &Path, target: &Path) -> io::Result<u64> {
    let bytes = fs::copy(source, target)?;
    if let Err(err) = restore_times(source, target) {
        warn!(
            "Copied {} but could not preserve its timestamps: {err}",
            target.display()
        );
    }
    Ok(bytes)
}

fn restore_times(source: &Path, target: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    // A read-only copy cannot be opened for writing; fall back to read access.
    let file = File::options()
        .write(true)
        .open(target)
        .or_else(|_| File::open(target))?;
    file.set_times(times)
}

/// Make `path` absolute and collapse `.` / `..` components lexically.
pub(crate) fn absolute_normalized(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copier::Severity;

    #[test]
    fn normalizes_parent_and_current_components() {
        let base = std::env::temp_dir();
        let messy = base.join("a").join(".").join("b").join("..").join("c");
        let clean = absolute_normalized(&messy).unwrap();
        assert_eq!(clean, absolute_normalized(&base.join("a").join("c")).unwrap());
        assert!(clean.is_absolute());
    }

    #[test]
    fn relative_paths_become_absolute() {
        let resolved = absolute_normalized(Path::new("some/relative/dir")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/dir"));
    }

    fn log_texts(rx: &crossbeam_channel::Receiver<CopyEvent>, severity: Severity) -> Vec<String> {
        rx.try_iter()
            .filter_map(|e| match e {
                CopyEvent::Log(l) if l.severity == severity => Some(l.text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn copy_into_missing_directory_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("a.png");
        fs::write(&src, b"png").unwrap();

        let target = tmp.path().join("no_such_dir").join("x.png");
        assert!(copy_with_metadata(&src, &target).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn failed_candidate_is_skipped_and_run_continues() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dst = tmp.path().join("dst");
        fs::create_dir(&dst).unwrap();

        let first = tmp.path().join("first.png");
        let vanished = tmp.path().join("vanished.jpg");
        let last = tmp.path().join("last.gif");
        fs::write(&first, b"one").unwrap();
        fs::write(&vanished, b"two").unwrap();
        fs::write(&last, b"three").unwrap();
        let candidates = vec![first, vanished.clone(), last];
        // Removed between enumeration and copy.
        fs::remove_file(&vanished).unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        let reporter = EventReporter::new(&tx);
        let done = copy_candidates(&candidates, &dst, &reporter, &CancelToken::new());

        assert_eq!(done.outcome, Outcome::CompletedWithErrors);
        assert_eq!((done.copied, done.skipped, done.total), (2, 1, 3));
        assert_eq!(done.copied + done.skipped, done.total);
        assert_eq!(done.bytes_copied, 8);
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 2);
        let errors = log_texts(&rx, Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("vanished.jpg"));
    }

    #[test]
    fn unreadable_root_is_reported_and_later_roots_still_walked() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let good = tmp.path().join("good");
        fs::create_dir(&good).unwrap();
        fs::write(good.join("a.jpeg"), b"jpeg").unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        let reporter = EventReporter::new(&tx);
        let mut candidates = Vec::new();
        collect_candidates(&missing, &mut candidates, &reporter);
        assert!(candidates.is_empty());
        collect_candidates(&good, &mut candidates, &reporter);

        assert_eq!(candidates, vec![good.join("a.jpeg")]);
        let errors = log_texts(&rx, Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("gone"));
    }
}
