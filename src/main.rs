//! # image-organizer CLI
//!
//! Command-line interface for the image organizer.
//!
//! ## Usage
//! ```bash
//! image-organizer ~/Photos --by-date
//! image-organizer ~/Photos --remove-dupes --keep last
//! ```

mod cli;

use image_organizer::Result;

fn main() -> Result<()> {
    image_organizer::init_tracing();
    cli::run()
}
