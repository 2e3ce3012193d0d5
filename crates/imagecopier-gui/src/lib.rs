/// ImageCopier GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Business logic lives in `imagecopier-core`.
pub mod app;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{ImageCopierApp, ImageCopierState};
