/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic. The real
/// copy worker runs against temporary directories; no mocking.
use imagecopier_core::copier::{Outcome, Severity};
use imagecopier_core::settings::{Settings, SettingsStore};
use imagecopier_gui::state::{
    AppPhase, AppState, MSG_FOLDER_ALREADY_ADDED, MSG_NO_DEST_FOLDER, MSG_NO_SOURCE_FOLDERS,
    STATUS_READY,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    fs::write(path, vec![1u8; n]).unwrap();
}

/// A temp dir holding `src/` with two images and one text file.
fn make_temp_tree() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir_all(src.join("sub")).unwrap();
    write_bytes(&src.join("a.jpg"), 100);
    write_bytes(&src.join("b.txt"), 200);
    write_bytes(&src.join("sub").join("c.webp"), 300);
    (tmp, src)
}

fn new_state(tmp: &TempDir) -> AppState {
    AppState::new(SettingsStore::new(tmp.path().join("settings.json")), None)
}

/// Pump `process_copy_messages()` until the run finishes or the deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.is_running() {
        assert!(
            std::time::Instant::now() < deadline,
            "copy did not complete within 30 seconds"
        );
        state.process_copy_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

// ── Folder management ─────────────────────────────────────────────────────────

#[test]
fn duplicate_source_folder_is_rejected() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);

    assert!(state.add_source_folder(src.clone()));
    assert!(!state.add_source_folder(src));
    assert_eq!(state.source_folders.len(), 1);
    assert_eq!(state.notice.as_deref(), Some(MSG_FOLDER_ALREADY_ADDED));
}

#[test]
fn non_directory_source_is_rejected() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);

    assert!(!state.add_source_folder(src.join("a.jpg")));
    assert!(!state.add_source_folder(tmp.path().join("nope")));
    assert!(state.source_folders.is_empty());
    assert!(state.notice.is_some());
}

#[test]
fn source_input_is_cleared_after_add() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);

    state.source_input = format!("  {}  ", src.display());
    assert!(state.commit_source_input());
    assert!(state.source_input.is_empty());
    assert_eq!(state.source_folders, vec![src]);
}

#[test]
fn remove_source_folder_clears_selection() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.selected_source = Some(0);

    state.remove_source_folder(5);
    assert_eq!(state.source_folders.len(), 1);
    state.remove_source_folder(0);
    assert!(state.source_folders.is_empty());
    assert_eq!(state.selected_source, None);
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn start_without_sources_does_not_run() {
    let (tmp, _) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.set_destination(tmp.path().join("dst"));

    state.start_copy();
    assert!(!state.is_running());
    assert_eq!(state.phase, AppPhase::Idle);
    assert_eq!(state.notice.as_deref(), Some(MSG_NO_SOURCE_FOLDERS));
    assert_eq!(state.status_text, STATUS_READY);
}

#[test]
fn start_without_destination_does_not_run() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);

    state.start_copy();
    assert!(!state.is_running());
    assert_eq!(state.notice.as_deref(), Some(MSG_NO_DEST_FOLDER));
}

// ── Run lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn full_run_reaches_finished_with_summary() {
    let (tmp, src) = make_temp_tree();
    let dst = tmp.path().join("dst");
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.set_destination(dst.clone());

    state.start_copy();
    assert!(state.is_running());
    assert_eq!(state.phase, AppPhase::Scanning);
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Finished);
    let done = state.last_completion.expect("completion recorded");
    assert_eq!(done.outcome, Outcome::Completed);
    assert_eq!((done.copied, done.skipped), (2, 0));
    assert!(state.show_summary);
    assert_eq!(state.status_text, "Process complete!");
    assert!(state
        .summary_message()
        .unwrap()
        .starts_with("Successfully copied 2 image files"));

    let progress = state.progress.expect("progress seen");
    assert_eq!((progress.current, progress.total), (2, 2));
    assert!(!state.log_lines.is_empty());
    assert!(state
        .log_lines
        .iter()
        .all(|l| l.severity != Severity::Error));
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 2);
}

#[test]
fn inputs_are_locked_while_running() {
    let (tmp, src) = make_temp_tree();
    let other = tmp.path().join("other");
    fs::create_dir_all(&other).unwrap();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.set_destination(tmp.path().join("dst"));

    state.start_copy();
    if state.is_running() {
        assert!(!state.add_source_folder(other));
        state.remove_source_folder(0);
        assert_eq!(state.source_folders.len(), 1);
    }
    pump_until_done(&mut state);
}

#[test]
fn cancel_is_reported_and_run_ends() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.set_destination(tmp.path().join("dst"));

    state.start_copy();
    state.cancel_copy();
    pump_until_done(&mut state);

    // The worker may finish before it sees the flag, so either is acceptable.
    let done = state.last_completion.expect("completion recorded");
    assert!(matches!(
        done.outcome,
        Outcome::Cancelled | Outcome::Completed
    ));
    assert!(state
        .log_lines
        .iter()
        .any(|l| l.text.starts_with("Cancellation requested")));
}

#[test]
fn clear_log_empties_scrollback() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.set_destination(tmp.path().join("dst"));
    state.start_copy();
    pump_until_done(&mut state);

    assert!(!state.log_lines.is_empty());
    state.clear_log();
    assert!(state.log_lines.is_empty());
}

// ── Settings + shutdown ───────────────────────────────────────────────────────

#[test]
fn shutdown_saves_settings_and_is_idempotent() {
    let (tmp, src) = make_temp_tree();
    let dst = tmp.path().join("dst");
    fs::create_dir_all(&dst).unwrap();
    let store = SettingsStore::new(tmp.path().join("settings.json"));

    let mut state = AppState::new(store.clone(), None);
    state.add_source_folder(src.clone());
    state.set_destination(dst.clone());
    state.shutdown();
    state.shutdown();

    assert_eq!(
        store.load(),
        Settings {
            source_folders: vec![src.clone()],
            destination_folder: Some(dst.clone()),
        }
    );

    let restored = AppState::new(store, None);
    assert_eq!(restored.source_folders, vec![src]);
    assert_eq!(restored.destination_folder, Some(dst.clone()));
    assert_eq!(restored.destination_input, dst.display().to_string());
}

#[test]
fn shutdown_during_run_stops_worker() {
    let (tmp, src) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.add_source_folder(src);
    state.set_destination(tmp.path().join("dst"));

    state.start_copy();
    state.shutdown();
    assert!(!state.is_running());
    assert!(tmp.path().join("settings.json").exists());
}

#[test]
fn open_log_without_session_log_sets_notice() {
    let (tmp, _) = make_temp_tree();
    let mut state = new_state(&tmp);
    state.open_log_file();
    assert_eq!(state.notice.as_deref(), Some("Log file not found."));
}
