//! # Size Module
//!
//! Buckets images by total pixel count.
//!
//! | Pixels              | Bucket   |
//! |---------------------|----------|
//! | < 500,000           | `small`  |
//! | 500,000 - 1,999,999 | `medium` |
//! | >= 2,000,000        | `large`  |

use image::ImageReader;
use std::fmt;
use std::path::Path;

/// Pixel count at which an image stops being `small`
pub const MEDIUM_MIN_PIXELS: u64 = 500_000;
/// Pixel count at which an image becomes `large`
pub const LARGE_MIN_PIXELS: u64 = 2_000_000;

/// Size category derived from pixel count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeBucket {
    /// Screenshots, icons, thumbnails
    Small,
    /// Small photos
    Medium,
    /// High-resolution photos
    Large,
}

impl SizeBucket {
    /// Every bucket, smallest first
    pub const ALL: [SizeBucket; 3] = [SizeBucket::Small, SizeBucket::Medium, SizeBucket::Large];

    /// Classify from dimensions
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self::from_pixels(u64::from(width) * u64::from(height))
    }

    /// Classify from a total pixel count
    pub fn from_pixels(pixels: u64) -> Self {
        if pixels < MEDIUM_MIN_PIXELS {
            SizeBucket::Small
        } else if pixels < LARGE_MIN_PIXELS {
            SizeBucket::Medium
        } else {
            SizeBucket::Large
        }
    }

    /// Folder name for the bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width and height in pixels, or `(0, 0)` when the file can't be read
///
/// Only the header is decoded.
pub fn image_dimensions(path: &Path) -> (u32, u32) {
    match read_dimensions(path) {
        Ok(dimensions) => dimensions,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read dimensions");
            (0, 0)
        }
    }
}

fn read_dimensions(path: &Path) -> image::ImageResult<(u32, u32)> {
    ImageReader::open(path)?.with_guessed_format()?.into_dimensions()
}

/// Bucket for an image file
pub fn classify_file(path: &Path) -> SizeBucket {
    let (width, height) = image_dimensions(path);
    SizeBucket::from_dimensions(width, height)
}
