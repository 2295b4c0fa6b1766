//! Directory listing using walkdir, limited to immediate children.

use super::filter::ImageFilter;
use crate::error::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists supported images directly inside a directory
pub struct DirectoryScanner {
    filter: ImageFilter,
}

impl DirectoryScanner {
    pub fn new() -> Self {
        Self {
            filter: ImageFilter::new(),
        }
    }

    /// Return the selected files, sorted by file name
    ///
    /// Subdirectories are neither selected nor descended into, so output
    /// folders created inside `root` never feed back into a later run.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let metadata = match root.metadata() {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::DirectoryNotFound {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(ScanError::ReadDirectory {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
        };

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut files = Vec::new();

        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    // Follows symlinks to files, like a shell glob would.
                    if !entry.path().is_file() {
                        continue;
                    }
                    if self.filter.should_include(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    // The root itself failing to open surfaces here too.
                    if e.depth() == 0 {
                        return Err(ScanError::ReadDirectory {
                            path: root.to_path_buf(),
                            source: e.into(),
                        });
                    }
                    tracing::warn!(
                        path = ?e.path(),
                        error = %e,
                        "skipping unreadable directory entry"
                    );
                }
            }
        }

        tracing::debug!(root = %root.display(), selected = files.len(), "scan complete");
        Ok(files)
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}
