//! Create workflow: resolve each requested repository and tag the head of its default branch.

use crate::domain::{TagProposal, TagRequest};
use crate::error::Result;
use crate::github::{CreatedRef, HostingApi, RepoInfo};

/// A tag request joined with the repository metadata needed to apply it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub request: TagRequest,
    pub info: RepoInfo,
}

impl ResolvedTag {
    /// Line shown for review (e.g., "github.com/org/repo v1.2.0")
    pub fn to_line(&self, host: &str) -> String {
        format!("{} {}", self.info.repo.with_host(host), self.request.tag)
    }
}

/// Outcome of one tag operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    pub repo: String,
    pub branch: String,
    pub created: CreatedRef,
    /// True when the ref was only computed, not created
    pub dry_run: bool,
}

/// Turn accepted proposals into tag requests
pub fn requests_from_proposals(proposals: &[TagProposal]) -> Vec<TagRequest> {
    proposals
        .iter()
        .map(|p| TagRequest {
            repo: p.repo.clone(),
            tag: p.next.tag_name(),
        })
        .collect()
}

/// Look up every requested repository before anything is created.
///
/// No tag is created when any repository fails to resolve.
pub fn resolve_requests<A: HostingApi + ?Sized>(
    api: &A,
    requests: Vec<TagRequest>,
) -> Result<Vec<ResolvedTag>> {
    requests
        .into_iter()
        .map(|request| {
            tracing::info!("Fetching info for {}", request.repo);
            let info = api.get_repo(&request.repo)?;
            Ok(ResolvedTag { request, info })
        })
        .collect()
}

/// Create each tag on the latest commit of the repository's default branch.
///
/// Stops at the first failure; tags created before it stay in place.
/// With `dry_run`, commits are resolved but no ref is created.
pub fn create_tags<A: HostingApi + ?Sized>(
    api: &A,
    resolved: &[ResolvedTag],
    dry_run: bool,
) -> Result<Vec<TagOutcome>> {
    let mut outcomes = Vec::with_capacity(resolved.len());

    for tag in resolved {
        let repo = &tag.info.repo;
        let branch = &tag.info.default_branch;
        let sha = api.branch_head_sha(repo, branch)?;

        let created = if dry_run {
            tracing::info!(
                "Would create tag {} in {} (SHA: {})",
                tag.request.tag,
                repo,
                sha
            );
            CreatedRef {
                ref_name: tag.request.ref_name(),
                sha,
            }
        } else {
            tracing::info!("Creating tag {} in {} (SHA: {})", tag.request.tag, repo, sha);
            let created = api.create_tag_ref(repo, &tag.request.tag, &sha)?;
            tracing::info!("Created ref: {} (SHA: {})", created.ref_name, created.sha);
            created
        };

        outcomes.push(TagOutcome {
            repo: repo.full_name(),
            branch: branch.clone(),
            created,
            dry_run,
        });
    }

    Ok(outcomes)
}
