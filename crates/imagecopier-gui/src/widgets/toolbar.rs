/// Top action bar -- run controls, openers, theme toggle, and about.
use crate::state::AppState;
use egui::Ui;

pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🖼 Image File Consolidator")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let running = state.is_running();
        if ui
            .add_enabled(
                !running,
                egui::Button::new("▶ Start Copy").min_size(egui::vec2(90.0, 28.0)),
            )
            .on_hover_text("Copy every image from the source folders into the destination")
            .clicked()
        {
            state.commit_destination_input();
            state.start_copy();
        }

        if ui
            .add_enabled(
                running,
                egui::Button::new("⏹ Cancel").min_size(egui::vec2(70.0, 28.0)),
            )
            .on_hover_text("Stop after the file currently being copied")
            .clicked()
        {
            state.cancel_copy();
        }

        ui.separator();

        if ui
            .add_enabled(!running, egui::Button::new("📂 Open Destination Folder"))
            .clicked()
        {
            state.open_destination();
        }
        if ui.button("📄 Open Log File").clicked() {
            state.open_log_file();
        }
        if ui.button("🗑 Clear Log Display").clicked() {
            state.clear_log();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ About").clicked() {
                state.show_about = true;
            }
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            if ui
                .button(theme_label)
                .on_hover_text("Toggle light/dark theme")
                .clicked()
            {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
