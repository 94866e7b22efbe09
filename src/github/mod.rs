//! Hosting API abstraction layer
//!
//! This module provides a trait-based abstraction over the GitHub REST calls
//! gh-tagger needs, allowing the workflows to run against the real API or an
//! in-memory mock.
//!
//! # Overview
//!
//! The primary abstraction is the [HostingApi] trait. The concrete
//! implementations are:
//!
//! - [client::GithubClient]: blocking `reqwest` client for the GitHub REST API
//! - [mock::MockHostingApi]: in-memory implementation for testing
//!
//! Workflows take `&impl HostingApi` so that a single explicitly constructed
//! client is passed down from `main`.

pub mod client;
pub mod mock;

pub use client::GithubClient;
pub use mock::MockHostingApi;

use crate::domain::RepoRef;
use crate::error::Result;

/// Repository metadata needed for tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Owner login and repository name
    pub repo: RepoRef,
    /// Branch whose head receives new tags
    pub default_branch: String,
}

impl RepoInfo {
    pub fn new(repo: RepoRef, default_branch: impl Into<String>) -> Self {
        RepoInfo {
            repo,
            default_branch: default_branch.into(),
        }
    }
}

/// Ref returned by a successful create call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRef {
    /// Fully qualified ref (e.g., "refs/tags/v1.2.0")
    pub ref_name: String,
    /// Commit the ref points at
    pub sha: String,
}

/// Hosting API operations used by the fetch and create workflows.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// Remote failures map to [crate::error::TaggerError::Api] carrying the HTTP
/// status and the message returned by the service, unchanged.
pub trait HostingApi: Send + Sync {
    /// List every repository of an organization, across all pages.
    fn list_org_repos(&self, org: &str) -> Result<Vec<RepoInfo>>;

    /// Fetch metadata for a single repository.
    fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo>;

    /// List tag names of a repository with the `refs/tags/` prefix removed.
    ///
    /// # Example
    /// ```rust
    /// # use gh_tagger::github::{HostingApi, MockHostingApi, RepoInfo};
    /// # use gh_tagger::domain::RepoRef;
    /// let repo = RepoRef::new("org", "A");
    /// let api = MockHostingApi::new()
    ///     .with_repo(RepoInfo::new(repo.clone(), "main"), &["v1.0.0"]);
    /// assert_eq!(api.list_tags(&repo).unwrap(), vec!["v1.0.0".to_string()]);
    /// ```
    fn list_tags(&self, repo: &RepoRef) -> Result<Vec<String>>;

    /// Resolve the commit SHA at the head of `branch`.
    fn branch_head_sha(&self, repo: &RepoRef, branch: &str) -> Result<String>;

    /// Create `refs/tags/<tag>` pointing at `sha`.
    ///
    /// Fails if the tag already exists.
    fn create_tag_ref(&self, repo: &RepoRef, tag: &str, sha: &str) -> Result<CreatedRef>;
}
