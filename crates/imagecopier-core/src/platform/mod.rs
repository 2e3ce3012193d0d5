/// Platform helpers — opening folders and files with the OS handler.

pub mod open;

pub use open::open_path;
