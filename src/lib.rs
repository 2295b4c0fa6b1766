//! # Image Organizer
//!
//! Sorts a folder of photos by capture date or by size, and finds or
//! removes exact duplicates.
//!
//! ## Safety
//! - Organizing **copies**; originals are never moved or changed
//! - Existing files in the output tree are never overwritten
//! - Only duplicate removal deletes anything, and it always keeps one copy
//!
//! ## Architecture
//! - `core` - Scanning, metadata, hashing and the four operations
//! - `error` - Directory-level and per-file error types

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{OrganizerError, Result};

/// Initialize tracing for the library
///
/// Logs go to stdout. `RUST_LOG` overrides the default `warn` level, which
/// shows one line per skipped file.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
