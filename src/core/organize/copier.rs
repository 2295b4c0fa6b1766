//! Copying that keeps the original's permissions and timestamps.

use crate::error::FileError;
use std::fs::{self, File, FileTimes};
use std::path::Path;

/// Copy `from` to `to`, then carry over access and modification times
///
/// `fs::copy` already copies permission bits.
pub(crate) fn copy_preserving(from: &Path, to: &Path) -> Result<(), FileError> {
    let metadata = fs::metadata(from).map_err(|source| FileError::Metadata {
        path: from.to_path_buf(),
        source,
    })?;

    fs::copy(from, to).map_err(|source| FileError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    // Read-only copies can't be opened for writing; owners may still set
    // times through a read handle on Unix.
    File::options()
        .write(true)
        .open(to)
        .or_else(|_| File::open(to))
        .and_then(|file| file.set_times(times))
        .map_err(|source| FileError::PreserveTimes {
            path: to.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn copy_keeps_content_and_modification_time() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("source.jpg");
        let to = temp_dir.path().join("copy.jpg");
        fs::write(&from, b"test content").unwrap();

        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::options()
            .write(true)
            .open(&from)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        copy_preserving(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), b"test content");
        assert_eq!(fs::metadata(&to).unwrap().modified().unwrap(), mtime);
        assert!(from.exists());
    }

    #[test]
    fn copy_into_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("source.jpg");
        fs::write(&from, b"x").unwrap();

        let err = copy_preserving(&from, &temp_dir.path().join("missing/copy.jpg")).unwrap_err();
        assert!(matches!(err, FileError::Copy { .. }));
    }

    #[test]
    fn missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = copy_preserving(
            &temp_dir.path().join("nope.jpg"),
            &temp_dir.path().join("copy.jpg"),
        )
        .unwrap_err();
        assert!(matches!(err, FileError::Metadata { .. }));
    }
}
