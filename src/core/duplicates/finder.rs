//! Exact duplicate detection by content digest.

use super::grouper::DigestGrouper;
use super::DuplicateReport;
use crate::core::hasher::hash_file;
use crate::core::scanner::scan_images;
use crate::error::{Result, SkippedFile};
use std::path::Path;

/// Finds byte-identical images in a directory
pub struct DuplicateFinder;

impl DuplicateFinder {
    pub fn find(source: &Path) -> Result<DuplicateReport> {
        Self::find_with_progress(source, |_, _, _| {})
    }

    /// Find duplicates with a `(done, total, current)` callback after each file
    ///
    /// Files that can't be read are skipped and left out of every group.
    pub fn find_with_progress<F>(source: &Path, mut on_progress: F) -> Result<DuplicateReport>
    where
        F: FnMut(usize, usize, &Path),
    {
        let photos = scan_images(source)?;

        let mut grouper = DigestGrouper::new();
        let mut report = DuplicateReport::default();

        for (i, photo) in photos.iter().enumerate() {
            match hash_file(photo) {
                Ok(digest) => {
                    tracing::debug!(path = %photo.display(), %digest, "hashed");
                    grouper.insert(digest, photo.clone());
                    report.files_hashed += 1;
                }
                Err(e) => report.skipped.push(SkippedFile::record(photo.clone(), e.into())),
            }
            on_progress(i + 1, photos.len(), photo);
        }

        let distinct = grouper.distinct();
        report.groups = grouper.into_duplicates();

        tracing::info!(
            hashed = report.files_hashed,
            distinct,
            groups = report.groups.len(),
            skipped = report.skipped.len(),
            "duplicate search complete"
        );
        Ok(report)
    }
}
