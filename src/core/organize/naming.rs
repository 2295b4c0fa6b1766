//! Collision-free destination names.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// First name in `folder` not already taken: `stem.ext`, then
/// `stem_1.ext`, `stem_2.ext`, ...
///
/// Existing entries are never overwritten, so organizing the same source
/// twice produces suffixed copies.
pub(crate) fn unique_file_name(folder: &Path, stem: &OsStr, extension: Option<&OsStr>) -> OsString {
    let mut name = build_name(stem, None, extension);
    let mut counter = 1usize;

    while is_taken(&folder.join(&name)) {
        name = build_name(stem, Some(counter), extension);
        counter += 1;
    }

    name
}

fn build_name(stem: &OsStr, counter: Option<usize>, extension: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    if let Some(counter) = counter {
        name.push(format!("_{}", counter));
    }
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

// Dangling symlinks count as taken.
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn free_name_is_used_as_is() {
        let temp_dir = TempDir::new().unwrap();
        let name = unique_file_name(temp_dir.path(), OsStr::new("photo"), Some(OsStr::new("JPG")));
        assert_eq!(name, OsString::from("photo.JPG"));
    }

    #[test]
    fn taken_names_get_counter_suffix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("photo.jpg"), b"a").unwrap();
        fs::write(temp_dir.path().join("photo_1.jpg"), b"b").unwrap();

        let name = unique_file_name(temp_dir.path(), OsStr::new("photo"), Some(OsStr::new("jpg")));
        assert_eq!(name, OsString::from("photo_2.jpg"));
    }

    #[test]
    fn timestamp_collision_gets_first_suffix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("20210615_103000.png"), b"a").unwrap();

        let name = unique_file_name(
            temp_dir.path(),
            OsStr::new("20210615_103000"),
            Some(OsStr::new("png")),
        );
        assert_eq!(name, OsString::from("20210615_103000_1.png"));
    }

    #[test]
    fn handles_missing_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("raw"), b"a").unwrap();

        let name = unique_file_name(temp_dir.path(), OsStr::new("raw"), None);
        assert_eq!(name, OsString::from("raw_1"));
    }
}
