//! Copies images into a `<year>/<month>` tree named by capture time.

use super::copier::copy_preserving;
use super::naming::unique_file_name;
use super::types::{DateOrganizeResult, OrganizedFile, DEFAULT_DATE_TARGET};
use crate::core::metadata::capture_date;
use crate::core::scanner::{file_name_of, scan_images};
use crate::error::{FileError, OrganizerError, Result, SkippedFile};
use chrono::{Datelike, NaiveDateTime};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Organizes photos by when they were taken
///
/// `IMG_0042.jpg` shot on 2021-06-15 at 10:30 is copied to
/// `organized_by_date/2021/06/20210615_103000.jpg`.
#[derive(Debug, Clone)]
pub struct DateOrganizer {
    target_dir: String,
}

impl DateOrganizer {
    pub fn new() -> Self {
        Self {
            target_dir: DEFAULT_DATE_TARGET.to_string(),
        }
    }

    /// Name of the output folder created inside the source directory
    pub fn target_dir(mut self, name: impl Into<String>) -> Self {
        self.target_dir = name.into();
        self
    }

    pub fn organize(&self, source: &Path) -> Result<DateOrganizeResult> {
        self.organize_with_progress(source, |_, _, _| {})
    }

    /// Organize with a `(done, total, current)` callback after each file
    pub fn organize_with_progress<F>(
        &self,
        source: &Path,
        mut on_progress: F,
    ) -> Result<DateOrganizeResult>
    where
        F: FnMut(usize, usize, &Path),
    {
        let photos = scan_images(source)?;

        let target_root = source.join(&self.target_dir);
        fs::create_dir_all(&target_root).map_err(|e| OrganizerError::CreateTarget {
            path: target_root.clone(),
            source: e,
        })?;

        let mut result = DateOrganizeResult::default();

        for (i, photo) in photos.iter().enumerate() {
            match self.organize_file(source, photo) {
                Ok(organized) => {
                    tracing::debug!(
                        from = %photo.display(),
                        to = %organized.destination.display(),
                        "copied by date"
                    );
                    result.files.push(organized);
                }
                Err(e) => result.skipped.push(SkippedFile::record(photo.clone(), e)),
            }
            on_progress(i + 1, photos.len(), photo);
        }

        tracing::info!(
            organized = result.files.len(),
            skipped = result.skipped.len(),
            "organized by date"
        );
        Ok(result)
    }

    fn organize_file(
        &self,
        source: &Path,
        photo: &Path,
    ) -> std::result::Result<OrganizedFile, FileError> {
        let date = capture_date(photo);

        let folder = Path::new(&self.target_dir).join(Self::folder_for(&date));
        let absolute_folder = source.join(&folder);
        fs::create_dir_all(&absolute_folder).map_err(|e| FileError::CreateFolder {
            path: absolute_folder.clone(),
            source: e,
        })?;

        let stem = Self::file_stem_for(&date);
        let name = unique_file_name(&absolute_folder, OsStr::new(&stem), photo.extension());

        copy_preserving(photo, &absolute_folder.join(&name))?;

        Ok(OrganizedFile {
            original: file_name_of(photo),
            destination: folder.join(name),
        })
    }

    /// `<year>/<month:02>` relative folder for a timestamp
    pub fn folder_for(date: &NaiveDateTime) -> PathBuf {
        PathBuf::from(date.year().to_string()).join(format!("{:02}", date.month()))
    }

    /// `YYYYMMDD_HHMMSS` file stem for a timestamp
    pub fn file_stem_for(date: &NaiveDateTime) -> String {
        date.format("%Y%m%d_%H%M%S").to_string()
    }
}

impl Default for DateOrganizer {
    fn default() -> Self {
        Self::new()
    }
}
