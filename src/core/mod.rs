//! # Core Module
//!
//! The file-system operations behind the CLI.
//!
//! ## Modules
//! - `scanner` - Selects supported images in a directory
//! - `metadata` - Reads capture dates from EXIF
//! - `size` - Classifies images by pixel count
//! - `hasher` - Computes content digests
//! - `organize` - Copies images into date or size folders
//! - `duplicates` - Finds and removes exact duplicates

pub mod duplicates;
pub mod hasher;
pub mod metadata;
pub mod organize;
pub mod scanner;
pub mod size;

// Re-export commonly used types
pub use duplicates::{
    DuplicateFinder, DuplicateGroup, DuplicateRemover, DuplicateReport, KeepPolicy,
};
pub use hasher::ContentDigest;
pub use organize::{DateOrganizer, OrganizedFile, SizeOrganizer};
pub use size::SizeBucket;
