/// UI widgets for ImageCopier.

pub mod folder_panel;
pub mod log_view;
pub mod progress;
pub mod status_bar;
pub mod toolbar;
