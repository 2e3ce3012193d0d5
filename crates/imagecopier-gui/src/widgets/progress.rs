/// Progress bar — indeterminate while scanning, `current/total` while copying.
use crate::state::{AppPhase, AppState};
use imagecopier_core::model::format::format_progress;
use egui::Ui;

pub fn progress(ui: &mut Ui, state: &AppState) {
    match state.progress {
        Some(p) if p.is_indeterminate() && state.phase == AppPhase::Scanning => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Scanning files...");
            });
            ui.add(egui::ProgressBar::new(0.0).animate(true));
        }
        Some(p) => {
            ui.label(format_progress(p.current, p.total));
            ui.add(
                egui::ProgressBar::new(p.fraction().unwrap_or(0.0))
                    .show_percentage()
                    .animate(state.is_running()),
            );
        }
        None => {
            ui.label(format_progress(0, 0));
            ui.add(egui::ProgressBar::new(0.0));
        }
    }
}
