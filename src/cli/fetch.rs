//! Fetch workflow: list an organization's repositories and propose the next tag for each.

use crate::domain::{select_latest, TagProposal, Version, VersionBump};
use crate::error::Result;
use crate::github::{HostingApi, RepoInfo};

/// Progress notifications emitted while fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchProgress<'a> {
    /// Repository listing finished with this many repositories
    Listed(usize),
    /// A proposal was computed for one repository
    Proposed(&'a TagProposal),
}

/// Compute the proposal for a single repository
pub fn propose_for<A: HostingApi + ?Sized>(
    api: &A,
    info: &RepoInfo,
    bump: VersionBump,
) -> Result<TagProposal> {
    tracing::info!("Fetching latest tag for {}", info.repo);

    let tags = api.list_tags(&info.repo)?;
    let latest = select_latest(&tags);
    let next = Version::next(latest.as_ref(), bump)?;

    let latest_tag = latest
        .as_ref()
        .map(Version::tag_name)
        .unwrap_or_else(|| "_".to_string());
    tracing::debug!(
        repo = %info.repo,
        tags = tags.len(),
        latest = %latest_tag,
        next = %next.tag_name(),
        "Computed proposal"
    );

    Ok(TagProposal::new(info.repo.clone(), latest, next))
}

/// Fetch every repository of `org` and compute its proposal.
///
/// Repositories are processed one at a time in listing order. The first API
/// error aborts the run.
pub fn fetch_proposals<A: HostingApi + ?Sized>(
    api: &A,
    org: &str,
    bump: VersionBump,
) -> Result<Vec<TagProposal>> {
    fetch_proposals_with(api, org, bump, |_| {})
}

/// Same as [fetch_proposals], reporting progress to `on_progress`
pub fn fetch_proposals_with<A, F>(
    api: &A,
    org: &str,
    bump: VersionBump,
    mut on_progress: F,
) -> Result<Vec<TagProposal>>
where
    A: HostingApi + ?Sized,
    F: FnMut(FetchProgress<'_>),
{
    tracing::info!("Fetching repositories of {} (might take a minute)...", org);

    let repos = api.list_org_repos(org)?;
    on_progress(FetchProgress::Listed(repos.len()));

    let mut proposals = Vec::with_capacity(repos.len());
    for info in &repos {
        let proposal = propose_for(api, info, bump)?;
        on_progress(FetchProgress::Proposed(&proposal));
        proposals.push(proposal);
    }

    Ok(proposals)
}
