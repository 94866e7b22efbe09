//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect};
use indicatif::{ProgressBar, ProgressStyle};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_warning, format_review_table,
    format_selection_options,
};

/// Phrase the operator must type before the interactive tool creates tags
pub const DO_IT: &str = "DO IT";

#[cfg(unix)]
const TERMINAL_DEVICE: &str = "/dev/tty";
#[cfg(windows)]
const TERMINAL_DEVICE: &str = "CONIN$";

/// Returns true for "y" or "yes" (case-insensitive); everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    let response = answer.trim().to_lowercase();
    response == "y" || response == "yes"
}

/// Prompts on the controlling terminal with a yes/no question.
///
/// Stdin usually carries the piped tag list, so the answer is read from the
/// terminal device directly. Default is "no".
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise
/// * `Err` - If the terminal cannot be opened or read
pub fn confirm_on_terminal(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let tty = File::open(TERMINAL_DEVICE)
        .with_context(|| format!("cannot open {} to read confirmation", TERMINAL_DEVICE))?;
    let mut input = String::new();
    BufReader::new(tty).read_line(&mut input)?;

    Ok(is_affirmative(&input))
}

/// Lets the user pick which proposals to apply; all are preselected.
///
/// # Returns
/// * `Ok(Vec<usize>)` - Indices of the selected options, in list order
pub fn select_repositories(options: &[String]) -> crate::Result<Vec<usize>> {
    let defaults = vec![true; options.len()];

    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Please select repositories that should be tagged")
        .items(options)
        .defaults(&defaults)
        .max_length(options.len().max(1))
        .interact()
        .map_err(io::Error::other)?;

    Ok(selected)
}

/// Asks the user to type [DO_IT] to confirm irreversible tag creation.
///
/// Returns the raw answer; [crate::cli::interactive] decides whether it confirms.
pub fn prompt_confirmation_phrase() -> crate::Result<String> {
    let prompt = format!(
        "Please confirm that you want to apply the tags above by writing \"{}\" ({})",
        console::style(DO_IT).green(),
        console::style("this action CAN NOT be reversed!").red()
    );

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)?;

    Ok(text)
}

/// Progress bar for per-repository tag fetching, cleared when finished
pub fn fetch_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message("Fetching repo tags");
    pb
}
