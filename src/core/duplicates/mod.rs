//! # Duplicates Module
//!
//! Finds byte-identical images and optionally removes the extra copies.
//!
//! ## How It Works
//! 1. Hash every selected file with SHA-256
//! 2. Group paths sharing a digest, in scan order
//! 3. Groups with two or more paths are duplicates
//! 4. Removal keeps one path per group, chosen by modification time
//!
//! Only exact content matches are found; visually similar photos with
//! different bytes are not.

mod finder;
mod grouper;
mod remover;

pub use finder::DuplicateFinder;
pub use grouper::DigestGrouper;
pub use remover::{DuplicateRemover, RemovalResult};

use crate::core::hasher::ContentDigest;
use crate::error::SkippedFile;
use std::fmt;
use std::path::PathBuf;

/// Files sharing one content digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub digest: ContentDigest,
    /// Paths in scan order
    pub paths: Vec<PathBuf>,
    /// Size of each copy in bytes
    pub file_size_bytes: u64,
}

impl DuplicateGroup {
    /// Number of copies beyond the one that would be kept
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Bytes freed by removing every copy but one
    pub fn reclaimable_bytes(&self) -> u64 {
        self.file_size_bytes * self.duplicate_count() as u64
    }
}

/// Outcome of a duplicate search
#[derive(Debug, Default)]
pub struct DuplicateReport {
    /// Groups in order of first appearance
    pub groups: Vec<DuplicateGroup>,
    /// Files successfully hashed
    pub files_hashed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl DuplicateReport {
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Total extra copies across all groups
    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::duplicate_count).sum()
    }

    pub fn reclaimable_bytes(&self) -> u64 {
        self.groups.iter().map(DuplicateGroup::reclaimable_bytes).sum()
    }
}

/// Which copy of a duplicate group survives removal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeepPolicy {
    /// Keep the least recently modified copy
    #[default]
    First,
    /// Keep the most recently modified copy
    Last,
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepPolicy::First => write!(f, "first"),
            KeepPolicy::Last => write!(f, "last"),
        }
    }
}
