/// Data model helpers for the copier.
///
/// Re-exports the image filter, unique naming, and display formatting.
pub mod format;
pub mod image_file;
pub mod naming;

pub use image_file::{is_image_file, source_extension, IMAGE_EXTENSIONS};
pub use naming::unique_file_name;
