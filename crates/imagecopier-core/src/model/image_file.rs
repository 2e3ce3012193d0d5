/// Image file recognition.
///
/// A file is a copy candidate when its name ends (case-insensitively) with
/// one of [`IMAGE_EXTENSIONS`].
use std::path::Path;

/// Recognised image extensions, lower-case, including the leading dot.
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tiff", ".webp", ".ico",
];

/// Returns `true` if the file name ends with a recognised image extension.
///
/// Matching is done on the whole lower-cased file name, so a dot-file named
/// `.png` still counts as an image.
pub fn is_image_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// The extension of `path` including the leading dot, with the original
/// case kept. Empty when the file has no extension.
pub fn source_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_every_known_extension() {
        for ext in IMAGE_EXTENSIONS {
            let name = format!("photo{ext}");
            assert!(is_image_file(Path::new(&name)), "{name} should match");
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_image_file(Path::new("/tmp/c.PNG")));
        assert!(is_image_file(Path::new("Holiday.JpEg")));
    }

    #[test]
    fn rejects_non_images() {
        assert!(!is_image_file(Path::new("b.txt")));
        assert!(!is_image_file(Path::new("archive.png.zip")));
        assert!(!is_image_file(Path::new("noext")));
        assert!(!is_image_file(Path::new("/")));
    }

    #[test]
    fn extension_keeps_case() {
        assert_eq!(source_extension(Path::new("c.PNG")), ".PNG");
        assert_eq!(source_extension(Path::new("dir/a.tar.jpg")), ".jpg");
    }

    #[test]
    fn dot_file_has_no_extension() {
        assert!(is_image_file(Path::new(".jpg")));
        assert_eq!(source_extension(Path::new(".jpg")), "");
    }
}
