//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Status messages go to stderr; stdout is reserved for proposal lines.

use console::style;

use crate::domain::{TagProposal, Version};

/// Error line with a red `Error:` marker.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("Error:").red().bold().for_stderr(), message)
}

/// Success line with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green().for_stderr(), message)
}

/// Status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow().for_stderr(), message)
}

/// Warning line with a yellow marker.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠").yellow().for_stderr(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message to stderr.
pub fn display_success(message: &str) {
    eprintln!("{}", format_success(message));
}

/// Print a status message to stderr.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print a warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{}", format_warning(message));
}

fn tag_or_placeholder(version: Option<&Version>, width: usize) -> String {
    match version {
        Some(v) => v.tag_name(),
        None => "_".repeat(width.max(1)),
    }
}

struct Widths {
    name: usize,
    latest: usize,
    next: usize,
}

fn column_widths<'a>(names: impl Iterator<Item = (usize, &'a TagProposal)>) -> Widths {
    let mut widths = Widths {
        name: 0,
        latest: 1,
        next: 0,
    };
    for (name_len, p) in names {
        widths.name = widths.name.max(name_len);
        if let Some(latest) = &p.latest {
            widths.latest = widths.latest.max(latest.tag_name().len());
        }
        widths.next = widths.next.max(p.next.tag_name().len());
    }
    widths
}

/// Aligned review table: `host/org/repo  v1.1.0 -> v1.2.0`.
///
/// Repositories without a previous version show `_` in the middle column.
pub fn format_review_table(proposals: &[TagProposal], host: &str) -> Vec<String> {
    let names: Vec<String> = proposals.iter().map(|p| p.repo.with_host(host)).collect();
    let widths = column_widths(names.iter().map(String::len).zip(proposals));

    names
        .iter()
        .zip(proposals)
        .map(|(name, p)| {
            format!(
                "{:<nw$} {:>lw$} -> {:>rw$}",
                name,
                p.latest
                    .as_ref()
                    .map(Version::tag_name)
                    .unwrap_or_else(|| "_".to_string()),
                p.next.tag_name(),
                nw = widths.name,
                lw = widths.latest,
                rw = widths.next,
            )
        })
        .collect()
}

/// Selection list entries: `repo (v1.1.0 -> v1.2.0)`.
///
/// A missing previous version is shown as underscores filling the column.
pub fn format_selection_options(proposals: &[TagProposal]) -> Vec<String> {
    let widths = column_widths(proposals.iter().map(|p| (p.repo.name.len(), p)));

    proposals
        .iter()
        .map(|p| {
            format!(
                "{:<nw$} ({:>lw$} -> {:>rw$})",
                p.repo.name,
                tag_or_placeholder(p.latest.as_ref(), widths.latest),
                p.next.tag_name(),
                nw = widths.name,
                lw = widths.latest,
                rw = widths.next,
            )
        })
        .collect()
}
