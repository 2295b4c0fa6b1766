//! File filtering logic for the scanner.

use super::SUPPORTED_EXTENSIONS;
use std::collections::HashSet;
use std::path::Path;

/// Decides whether a path names a supported image
pub struct ImageFilter {
    /// Lowercase file extensions to include
    extensions: HashSet<String>,
}

impl ImageFilter {
    /// Create a new filter with the default supported extensions
    pub fn new() -> Self {
        Self {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Check if a file name should be included
    ///
    /// Dotfiles are treated like any other name: `.beach.jpg` is an image.
    pub fn should_include(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}
