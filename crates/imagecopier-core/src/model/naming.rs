/// Unique destination names.
///
/// Every copied file gets a fresh random UUIDv4 rendered as 32 lower-case
/// hex characters. Collisions are not checked for; the 122 random bits make
/// them negligible within any realistic run.
use uuid::Uuid;

/// Length of the hex token used as the new base name.
pub const UNIQUE_ID_LEN: usize = 32;

/// Build `<uuid-hex><extension>`. `extension` must include its leading dot
/// (or be empty).
pub fn unique_file_name(extension: &str) -> String {
    format!("{}{extension}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base_name_is_hex_token() {
        let name = unique_file_name(".jpg");
        let (base, ext) = name.split_at(UNIQUE_ID_LEN);
        assert_eq!(ext, ".jpg");
        assert!(base
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn extension_case_is_preserved() {
        assert!(unique_file_name(".PNG").ends_with(".PNG"));
        assert_eq!(unique_file_name("").len(), UNIQUE_ID_LEN);
    }

    #[test]
    fn names_do_not_repeat() {
        let names: HashSet<String> = (0..1_000).map(|_| unique_file_name(".gif")).collect();
        assert_eq!(names.len(), 1_000);
    }
}
