//! # CLI Module
//!
//! Command-line interface for the image organizer.
//!
//! ## Usage
//! ```bash
//! # Copy photos into organized_by_date/<year>/<month>/
//! image-organizer ~/Photos --by-date
//!
//! # Copy photos into organized_by_size/{small,medium,large}/
//! image-organizer ~/Photos --by-size
//!
//! # List exact duplicates
//! image-organizer ~/Photos --find-dupes
//!
//! # Delete duplicates, keeping the newest copy
//! image-organizer ~/Photos --remove-dupes --keep last
//! ```

use clap::{ArgGroup, Parser, ValueEnum};
use console::{style, Term};
use image_organizer::core::duplicates::{
    DuplicateFinder, DuplicateRemover, DuplicateReport, KeepPolicy, RemovalResult,
};
use image_organizer::core::organize::{
    DateOrganizeResult, DateOrganizer, SizeOrganizeResult, SizeOrganizer,
};
use image_organizer::error::{Result, SkippedFile};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Smart Image Organizer - sort photos by date or size, and remove duplicates
#[derive(Parser, Debug)]
#[command(name = "image-organizer")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["by_date", "by_size", "find_dupes", "remove_dupes"])
        .multiple(false)
))]
pub struct Cli {
    /// Source directory containing images
    source: PathBuf,

    /// Organize by date
    #[arg(long)]
    by_date: bool,

    /// Organize by size
    #[arg(long)]
    by_size: bool,

    /// Find duplicates
    #[arg(long)]
    find_dupes: bool,

    /// Remove duplicates
    #[arg(long)]
    remove_dupes: bool,

    /// Which duplicate to keep
    #[arg(long, value_enum, default_value_t = Keep::First)]
    keep: Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Keep {
    /// Keep the oldest copy (by modification time)
    First,
    /// Keep the newest copy (by modification time)
    Last,
}

impl From<Keep> for KeepPolicy {
    fn from(keep: Keep) -> Self {
        match keep {
            Keep::First => KeepPolicy::First,
            Keep::Last => KeepPolicy::Last,
        }
    }
}

/// The one operation a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ByDate,
    BySize,
    FindDuplicates,
    RemoveDuplicates(KeepPolicy),
}

impl Cli {
    /// `None` when no mode flag was given
    fn mode(&self) -> Option<Mode> {
        if self.by_date {
            Some(Mode::ByDate)
        } else if self.by_size {
            Some(Mode::BySize)
        } else if self.find_dupes {
            Some(Mode::FindDuplicates)
        } else if self.remove_dupes {
            Some(Mode::RemoveDuplicates(self.keep.into()))
        } else {
            None
        }
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(mode) = cli.mode() else {
        tracing::debug!("no mode flag given, nothing to do");
        return Ok(());
    };

    let term = Term::stdout();
    let progress = progress_bar();
    let on_progress = |done: usize, total: usize, current: &Path| {
        progress.set_length(total as u64);
        progress.set_position(done as u64);
        progress.set_message(
            current
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
        );
    };

    let (lines, skipped) = match mode {
        Mode::ByDate => {
            let result = DateOrganizer::new().organize_with_progress(&cli.source, on_progress)?;
            (render_by_date(&result), result.skipped)
        }
        Mode::BySize => {
            let result = SizeOrganizer::new().organize_with_progress(&cli.source, on_progress)?;
            (render_by_size(&result), result.skipped)
        }
        Mode::FindDuplicates => {
            let report = DuplicateFinder::find_with_progress(&cli.source, on_progress)?;
            (render_duplicates(&report), report.skipped)
        }
        Mode::RemoveDuplicates(keep) => {
            let result =
                DuplicateRemover::new(keep).remove_with_progress(&cli.source, on_progress)?;
            (render_removal(&result), result.skipped)
        }
    };
    progress.finish_and_clear();

    print_lines(&term, &lines);
    if !skipped.is_empty() {
        print_lines(&term, &render_skipped(&skipped));
    }

    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    let style =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
    pb.set_style(style);
    pb
}

/// First line is the heading
fn print_lines(term: &Term, lines: &[String]) {
    let mut lines = lines.iter();
    if let Some(heading) = lines.next() {
        term.write_line(&style(heading).bold().to_string()).ok();
    }
    for line in lines {
        term.write_line(line).ok();
    }
}

fn render_by_date(result: &DateOrganizeResult) -> Vec<String> {
    let mut lines = vec!["Organized by date:".to_string()];
    for file in &result.files {
        lines.push(format!("  {} -> {}", file.original, file.destination.display()));
    }
    lines
}

fn render_by_size(result: &SizeOrganizeResult) -> Vec<String> {
    let mut lines = vec!["Organized by size:".to_string()];
    for (bucket, files) in &result.by_bucket {
        for file in files {
            lines.push(format!(
                "  {}: {} -> {}",
                bucket,
                file.original,
                file.destination.display()
            ));
        }
    }
    lines
}

fn render_duplicates(report: &DuplicateReport) -> Vec<String> {
    if !report.has_duplicates() {
        return vec!["No duplicates found.".to_string()];
    }

    let mut lines = vec!["Found duplicates:".to_string()];
    for group in &report.groups {
        let names: Vec<String> = group
            .paths
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect();
        lines.push(format!("  {} copies: [{}]", group.paths.len(), names.join(", ")));
    }
    lines.push(format!(
        "  {} duplicate file(s), {} reclaimable",
        report.duplicate_count(),
        format_bytes(report.reclaimable_bytes())
    ));
    lines
}

fn render_removal(result: &RemovalResult) -> Vec<String> {
    if result.removed.is_empty() {
        return vec!["No duplicates to remove.".to_string()];
    }

    let mut lines = vec![format!("Removed {} duplicate(s):", result.removed.len())];
    for name in &result.removed {
        lines.push(format!("  - {}", name));
    }
    lines
}

fn render_skipped(skipped: &[SkippedFile]) -> Vec<String> {
    let mut lines = vec![format!("Skipped {} file(s):", skipped.len())];
    for file in skipped {
        lines.push(format!("  {}: {}", file.path.display(), file.error));
    }
    lines
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
