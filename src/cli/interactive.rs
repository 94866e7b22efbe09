//! Interactive workflow: the operator picks proposals and confirms with a phrase before tags are created.

use crate::cli::create::{self, TagOutcome};
use crate::domain::TagProposal;
use crate::error::{Result, TaggerError};
use crate::github::HostingApi;
use crate::ui::{format_selection_options, DO_IT};

/// True only when the operator typed the confirmation phrase exactly
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim() == DO_IT
}

/// Ask the operator which proposals to apply, then ask for the confirmation phrase.
///
/// `select` receives one option line per proposal and returns the chosen
/// indices. `confirm` returns the typed answer. An empty selection aborts
/// before `confirm` is called; any answer other than [DO_IT] aborts too.
pub fn choose_proposals<S, C>(
    proposals: &[TagProposal],
    select: S,
    confirm: C,
) -> Result<Vec<TagProposal>>
where
    S: FnOnce(&[String]) -> Result<Vec<usize>>,
    C: FnOnce() -> Result<String>,
{
    let options = format_selection_options(proposals);
    let selected: Vec<TagProposal> = if options.is_empty() {
        Vec::new()
    } else {
        select(&options)?
            .into_iter()
            .filter_map(|i| proposals.get(i).cloned())
            .collect()
    };

    if selected.is_empty() {
        return Err(TaggerError::aborted("no repositories selected"));
    }

    tracing::debug!(selected = selected.len(), "Waiting for confirmation");
    if !is_confirmation(&confirm()?) {
        return Err(TaggerError::aborted("confirmation phrase not entered"));
    }

    Ok(selected)
}

/// Select, confirm, then tag the head of each selected repository's default branch
pub fn apply_selection<A, S, C>(
    api: &A,
    proposals: &[TagProposal],
    select: S,
    confirm: C,
) -> Result<Vec<TagOutcome>>
where
    A: HostingApi + ?Sized,
    S: FnOnce(&[String]) -> Result<Vec<usize>>,
    C: FnOnce() -> Result<String>,
{
    let selected = choose_proposals(proposals, select, confirm)?;
    let requests = create::requests_from_proposals(&selected);
    let resolved = create::resolve_requests(api, requests)?;
    create::create_tags(api, &resolved, false)
}
