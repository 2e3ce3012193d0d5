/// Main `eframe::App` implementation for ImageCopier.
///
/// This is the top-level UI layout that composes all widgets.
use crate::state::AppState;
use crate::theme::Palette;
use crate::widgets;
use imagecopier_core::copier::POLL_INTERVAL;
use imagecopier_core::settings::SettingsStore;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so settings are
/// loaded before the OS window is created.
pub struct ImageCopierState {
    pub(crate) inner: AppState,
}

impl ImageCopierState {
    /// Load settings and prepare state. Call this before `eframe::run_native`.
    pub fn build(settings_store: SettingsStore, session_log: Option<PathBuf>) -> Self {
        Self {
            inner: AppState::new(settings_store, session_log),
        }
    }
}

/// The ImageCopier application.
pub struct ImageCopierApp {
    state: AppState,
}

impl ImageCopierApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: ImageCopierState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state: state.inner }
    }
}

impl eframe::App for ImageCopierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Shutdown ──────────────────────────────────────────────────────
        if ctx.input(|i| i.viewport().close_requested()) {
            self.state.shutdown();
            return;
        }

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_copy_messages();
        if self.state.is_running() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About Image File Consolidator")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Image File Consolidator")
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label(
                        "Copies image files from multiple source folders\n\
                         into a single destination folder, renaming them\n\
                         with unique IDs to prevent filename collisions.",
                    );
                });
            });
        self.state.show_about = show_about;

        // ── Completion summary ────────────────────────────────────────────
        if let (Some(done), Some(message)) =
            (self.state.last_completion, self.state.summary_message())
        {
            let mut show_summary = self.state.show_summary;
            let mut dismissed = false;
            egui::Window::new(done.outcome.label())
                .open(&mut show_summary)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    let palette = Palette::for_visuals(ui.visuals());
                    ui.label(egui::RichText::new(message).color(palette.outcome(done.outcome)));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            self.state.show_summary = show_summary && !dismissed;
        }

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left sidebar: folders ─────────────────────────────────────────
        egui::SidePanel::left("folder_panel")
            .default_width(420.0)
            .min_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                widgets::folder_panel::folder_panel(ui, &mut self.state);
            });

        // ── Central panel: progress + log ─────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::progress::progress(ui, &self.state);
            ui.add_space(8.0);
            ui.separator();
            ui.heading("Process Log");
            widgets::log_view::log_view(ui, &self.state);
        });
    }
}
