//! Image File Consolidator — copies image files from many folders into one,
//! renaming each copy with a unique ID.
//!
//! Thin binary entry point. All logic lives in the `imagecopier-core`
//! and `imagecopier-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use imagecopier_core::logging::{init_logging, LOG_DIR};
use imagecopier_core::settings::SettingsStore;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Session log file + console. Keep the guard alive until exit.
    let log_guard = init_logging(Path::new(LOG_DIR))?;

    tracing::info!("Image File Consolidator starting");

    let state = imagecopier_gui::ImageCopierState::build(
        SettingsStore::default_location(),
        Some(log_guard.path().to_path_buf()),
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Image File Consolidator")
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Image File Consolidator",
        options,
        Box::new(|cc| {
            Ok(Box::new(imagecopier_gui::ImageCopierApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    tracing::info!("Image File Consolidator exiting");
    Ok(())
}
