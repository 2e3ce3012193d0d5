/// Source folder list and destination input.
use crate::state::AppState;
use egui::Ui;

/// Draw the "1. sources / 2. destination" section.
pub fn folder_panel(ui: &mut Ui, state: &mut AppState) {
    let editable = !state.is_running();

    ui.heading("1. Select Source Folders");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let input = ui.add_enabled(
            editable,
            egui::TextEdit::singleline(&mut state.source_input)
                .hint_text("Folder path to add")
                .desired_width(ui.available_width() - 90.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let add = ui
            .add_enabled(editable, egui::Button::new("➕ Add"))
            .on_hover_text("Add this folder to the source list");
        if add.clicked() || submitted {
            state.commit_source_input();
        }
    });

    ui.add_space(4.0);
    ui.label(egui::RichText::new("Selected Source Folders:").size(12.0));

    let mut clicked: Option<usize> = None;
    egui::ScrollArea::vertical()
        .id_salt("source_list")
        .max_height(140.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if state.source_folders.is_empty() {
                ui.label(
                    egui::RichText::new("No folders added yet.")
                        .italics()
                        .color(ui.visuals().weak_text_color()),
                );
            }
            for (i, folder) in state.source_folders.iter().enumerate() {
                let selected = state.selected_source == Some(i);
                if ui
                    .selectable_label(selected, folder.display().to_string())
                    .clicked()
                {
                    clicked = Some(i);
                }
            }
        });
    if let Some(i) = clicked {
        state.selected_source = Some(i);
    }

    let can_remove = editable && state.selected_source.is_some();
    if ui
        .add_enabled(can_remove, egui::Button::new("➖ Remove Selected"))
        .clicked()
    {
        if let Some(i) = state.selected_source {
            state.remove_source_folder(i);
        }
    }

    ui.add_space(12.0);
    ui.heading("2. Select Destination Folder");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Destination:");
        let input = ui.add_enabled(
            editable,
            egui::TextEdit::singleline(&mut state.destination_input)
                .hint_text("Created if it does not exist")
                .desired_width(ui.available_width()),
        );
        if input.lost_focus() {
            state.commit_destination_input();
        }
    });

    if let Some(notice) = &state.notice {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(notice)
                .size(12.0)
                .color(crate::theme::Palette::for_visuals(ui.visuals()).warning),
        );
    }
}
