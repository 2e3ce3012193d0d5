/// Scrolling process log, coloured by severity.
use crate::state::AppState;
use crate::theme::Palette;
use egui::Ui;

pub fn log_view(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_visuals(ui.visuals());
    let row_height = ui.text_style_height(&egui::TextStyle::Monospace);

    egui::ScrollArea::vertical()
        .id_salt("process_log")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show_rows(ui, row_height, state.log_lines.len(), |ui, rows| {
            for line in state.log_lines.range(rows) {
                let text = format!(
                    "{} [{}] {}",
                    line.timestamp.format("%H:%M:%S"),
                    line.severity.label(),
                    line.text
                );
                ui.label(
                    egui::RichText::new(text)
                        .monospace()
                        .color(palette.severity(line.severity)),
                );
            }
        });
}
