//! Types for the organize module.

use crate::core::size::SizeBucket;
use crate::error::SkippedFile;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default output folder for [`super::DateOrganizer`]
pub const DEFAULT_DATE_TARGET: &str = "organized_by_date";
/// Default output folder for [`super::SizeOrganizer`]
pub const DEFAULT_SIZE_TARGET: &str = "organized_by_size";

/// A file that was copied into the organized tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizedFile {
    /// File name of the source image
    pub original: String,
    /// Where the copy landed, relative to the source directory
    pub destination: PathBuf,
}

/// Result of organizing by capture date
#[derive(Debug, Default)]
pub struct DateOrganizeResult {
    /// Copies made, in scan order
    pub files: Vec<OrganizedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Result of organizing by size bucket
#[derive(Debug, Default)]
pub struct SizeOrganizeResult {
    /// Copies made per bucket; buckets that received nothing are absent
    pub by_bucket: BTreeMap<SizeBucket, Vec<OrganizedFile>>,
    pub skipped: Vec<SkippedFile>,
}

impl SizeOrganizeResult {
    /// Total number of copies across all buckets
    pub fn total_files(&self) -> usize {
        self.by_bucket.values().map(Vec::len).sum()
    }

    /// Copies in one bucket
    pub fn files_in(&self, bucket: SizeBucket) -> &[OrganizedFile] {
        self.by_bucket.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }
}
