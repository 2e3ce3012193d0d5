/// Bottom status bar — current status and the last run's totals.
use crate::state::AppState;
use crate::theme::Palette;
use imagecopier_core::model::format::{format_count, format_size};
use egui::Ui;

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_visuals(ui.visuals());

    ui.horizontal(|ui| {
        if state.is_running() {
            ui.spinner();
        }

        let color = match (&state.last_completion, state.is_running()) {
            (Some(done), false) => palette.outcome(done.outcome),
            _ => palette.text,
        };
        ui.label(egui::RichText::new(&state.status_text).size(12.0).color(color));

        if let (Some(done), false) = (&state.last_completion, state.is_running()) {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} copied", format_count(done.copied)))
                    .size(12.0)
                    .color(palette.text),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format_size(done.bytes_copied))
                    .size(12.0)
                    .color(palette.accent),
            );
            if done.skipped > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} skipped", format_count(done.skipped)))
                        .size(12.0)
                        .color(palette.warning),
                );
            }
        }

        if let Some(log) = state.session_log() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(log.display().to_string())
                        .size(11.0)
                        .color(palette.muted),
                );
            });
        }
    });
}
