//! Copies images into `small`, `medium` and `large` folders.

use super::copier::copy_preserving;
use super::naming::unique_file_name;
use super::types::{OrganizedFile, SizeOrganizeResult, DEFAULT_SIZE_TARGET};
use crate::core::scanner::{file_name_of, scan_images};
use crate::core::size::{classify_file, SizeBucket};
use crate::error::{FileError, OrganizerError, Result, SkippedFile};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Organizes photos by pixel count, keeping their names
#[derive(Debug, Clone)]
pub struct SizeOrganizer {
    target_dir: String,
}

impl SizeOrganizer {
    pub fn new() -> Self {
        Self {
            target_dir: DEFAULT_SIZE_TARGET.to_string(),
        }
    }

    /// Name of the output folder created inside the source directory
    pub fn target_dir(mut self, name: impl Into<String>) -> Self {
        self.target_dir = name.into();
        self
    }

    pub fn organize(&self, source: &Path) -> Result<SizeOrganizeResult> {
        self.organize_with_progress(source, |_, _, _| {})
    }

    /// Organize with a `(done, total, current)` callback after each file
    ///
    /// All three bucket folders are created up front, even if some stay empty.
    pub fn organize_with_progress<F>(
        &self,
        source: &Path,
        mut on_progress: F,
    ) -> Result<SizeOrganizeResult>
    where
        F: FnMut(usize, usize, &Path),
    {
        let photos = scan_images(source)?;

        for bucket in SizeBucket::ALL {
            let folder = source.join(&self.target_dir).join(bucket.as_str());
            fs::create_dir_all(&folder).map_err(|e| OrganizerError::CreateTarget {
                path: folder.clone(),
                source: e,
            })?;
        }

        let mut result = SizeOrganizeResult::default();

        for (i, photo) in photos.iter().enumerate() {
            let bucket = classify_file(photo);
            match self.organize_file(source, photo, bucket) {
                Ok(organized) => {
                    tracing::debug!(
                        from = %photo.display(),
                        to = %organized.destination.display(),
                        %bucket,
                        "copied by size"
                    );
                    result.by_bucket.entry(bucket).or_default().push(organized);
                }
                Err(e) => result.skipped.push(SkippedFile::record(photo.clone(), e)),
            }
            on_progress(i + 1, photos.len(), photo);
        }

        tracing::info!(
            organized = result.total_files(),
            skipped = result.skipped.len(),
            "organized by size"
        );
        Ok(result)
    }

    fn organize_file(
        &self,
        source: &Path,
        photo: &Path,
        bucket: SizeBucket,
    ) -> std::result::Result<OrganizedFile, FileError> {
        let folder = Path::new(&self.target_dir).join(bucket.as_str());
        let absolute_folder = source.join(&folder);

        let stem = photo.file_stem().unwrap_or_else(|| OsStr::new("image"));
        let name = unique_file_name(&absolute_folder, stem, photo.extension());

        copy_preserving(photo, &absolute_folder.join(&name))?;

        Ok(OrganizedFile {
            original: file_name_of(photo),
            destination: folder.join(name),
        })
    }
}

impl Default for SizeOrganizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn save_image(dir: &Path, name: &str, width: u32, height: u32) {
        RgbImage::new(width, height).save(dir.join(name)).unwrap();
    }

    #[test]
    fn creates_all_bucket_folders() {
        let temp_dir = TempDir::new().unwrap();

        let result = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(result.total_files(), 0);
        for bucket in SizeBucket::ALL {
            assert!(temp_dir
                .path()
                .join(DEFAULT_SIZE_TARGET)
                .join(bucket.as_str())
                .is_dir());
        }
    }

    #[test]
    fn keeps_original_name() {
        let temp_dir = TempDir::new().unwrap();
        save_image(temp_dir.path(), "icon.png", 64, 64);

        let result = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(
            result.files_in(SizeBucket::Small),
            &[OrganizedFile {
                original: "icon.png".to_string(),
                destination: Path::new(DEFAULT_SIZE_TARGET).join("small").join("icon.png"),
            }]
        );
        assert!(result.files_in(SizeBucket::Large).is_empty());
    }

    #[test]
    fn boundary_sizes_round_up() {
        let temp_dir = TempDir::new().unwrap();
        save_image(temp_dir.path(), "half_mp.png", 1000, 500);
        save_image(temp_dir.path(), "two_mp.png", 2000, 1000);

        let result = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(result.files_in(SizeBucket::Medium)[0].original, "half_mp.png");
        assert_eq!(result.files_in(SizeBucket::Large)[0].original, "two_mp.png");
    }

    #[test]
    fn unreadable_image_goes_to_small() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.webp"), b"not an image").unwrap();

        let result = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(result.files_in(SizeBucket::Small).len(), 1);
        assert!(result.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn failed_copy_is_skipped_and_batch_continues() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        save_image(temp_dir.path(), "locked.png", 8, 8);
        save_image(temp_dir.path(), "open.png", 8, 8);
        let locked = temp_dir.path().join("locked.png");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to observe in that case.
        if fs::read(&locked).is_ok() {
            return;
        }

        let result = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].path, locked);
        assert!(matches!(result.skipped[0].error, FileError::Copy { .. }));
        assert_eq!(result.total_files(), 1);
        assert_eq!(result.files_in(SizeBucket::Small)[0].original, "open.png");
        assert!(temp_dir
            .path()
            .join(DEFAULT_SIZE_TARGET)
            .join("small")
            .join("open.png")
            .is_file());
    }

    #[test]
    fn second_run_adds_suffixed_copies() {
        let temp_dir = TempDir::new().unwrap();
        save_image(temp_dir.path(), "icon.png", 16, 16);

        SizeOrganizer::new().organize(temp_dir.path()).unwrap();
        let second = SizeOrganizer::new().organize(temp_dir.path()).unwrap();

        assert_eq!(
            second.files_in(SizeBucket::Small)[0].destination,
            Path::new(DEFAULT_SIZE_TARGET).join("small").join("icon_1.png")
        );
    }
}
