//! # Scanner Module
//!
//! Selects the images an operation works on.
//!
//! Only the immediate children of the source directory are considered.
//! A child is selected when it is a regular file (hidden or not) whose
//! extension (any case) is one of:
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//! - GIF (.gif)
//! - BMP (.bmp)
//! - WebP (.webp)
//! - TIFF (.tiff)
//!
//! ## Example
//! ```rust,ignore
//! use image_organizer::core::scanner::scan_images;
//!
//! let photos = scan_images(Path::new("/Users/me/Photos"))?;
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::DirectoryScanner;

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Lowercase extensions accepted by the default filter
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff"];

/// Scan a directory with the default filter
pub fn scan_images(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    DirectoryScanner::default().scan(root)
}

/// Final path component as a displayable string
pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
