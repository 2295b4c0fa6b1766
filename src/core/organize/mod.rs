//! Photo organization module.
//!
//! Copies photos into folder trees inside the source directory, either by
//! capture date or by size bucket. Originals are never moved or deleted.

mod by_date;
mod by_size;
mod copier;
mod naming;
mod types;

pub use by_date::DateOrganizer;
pub use by_size::SizeOrganizer;
pub use types::*;
