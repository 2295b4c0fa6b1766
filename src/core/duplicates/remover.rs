//! Deletes the extra copies in each duplicate group.

use super::{DuplicateFinder, KeepPolicy};
use crate::core::scanner::file_name_of;
use crate::error::{FileError, Result, SkippedFile};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Outcome of a removal run
#[derive(Debug, Default)]
pub struct RemovalResult {
    /// Names of deleted files, group by group
    pub removed: Vec<String>,
    /// The surviving path of each group that was processed
    pub kept: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Removes duplicates, keeping one copy per group
///
/// Copies are ordered by modification time, oldest first, with the path
/// breaking ties. [`KeepPolicy::First`] keeps the oldest,
/// [`KeepPolicy::Last`] the newest. Deletion is permanent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateRemover {
    keep: KeepPolicy,
}

impl DuplicateRemover {
    pub fn new(keep: KeepPolicy) -> Self {
        Self { keep }
    }

    pub fn remove(&self, source: &Path) -> Result<RemovalResult> {
        self.remove_with_progress(source, |_, _, _| {})
    }

    /// Remove duplicates; the callback tracks the hashing pass
    pub fn remove_with_progress<F>(
        &self,
        source: &Path,
        mut on_progress: F,
    ) -> Result<RemovalResult>
    where
        F: FnMut(usize, usize, &Path),
    {
        let report = DuplicateFinder::find_with_progress(source, &mut on_progress)?;

        let mut result = RemovalResult {
            skipped: report.skipped,
            ..Default::default()
        };

        for group in &report.groups {
            let mut dated = Vec::with_capacity(group.paths.len());
            for path in &group.paths {
                match fs::metadata(path).and_then(|m| m.modified()) {
                    Ok(modified) => dated.push((modified, path.clone())),
                    Err(e) => result.skipped.push(SkippedFile::record(
                        path.clone(),
                        FileError::Metadata {
                            path: path.clone(),
                            source: e,
                        },
                    )),
                }
            }

            // Files we couldn't date are never deleted; what's left may no
            // longer be a duplicate set.
            if dated.len() < 2 {
                continue;
            }

            let (kept, doomed) = self.split_group(dated);
            tracing::debug!(kept = %kept.display(), digest = %group.digest, "keeping");

            for path in doomed {
                match fs::remove_file(&path) {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "removed duplicate");
                        result.removed.push(file_name_of(&path));
                    }
                    Err(e) => result.skipped.push(SkippedFile::record(
                        path.clone(),
                        FileError::Remove {
                            path: path.clone(),
                            source: e,
                        },
                    )),
                }
            }
            result.kept.push(kept);
        }

        tracing::info!(
            removed = result.removed.len(),
            skipped = result.skipped.len(),
            keep = %self.keep,
            "duplicate removal complete"
        );
        Ok(result)
    }

    /// Pick the survivor; `dated` must hold at least one entry
    fn split_group(&self, mut dated: Vec<(SystemTime, PathBuf)>) -> (PathBuf, Vec<PathBuf>) {
        dated.sort();
        let mut paths: Vec<PathBuf> = dated.into_iter().map(|(_, path)| path).collect();
        let kept = match self.keep {
            KeepPolicy::First => paths.remove(0),
            KeepPolicy::Last => paths.remove(paths.len() - 1),
        };
        (kept, paths)
    }
}
