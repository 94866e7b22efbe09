use crate::domain::RepoRef;
use crate::error::{Result, TaggerError};
use crate::github::{CreatedRef, HostingApi, RepoInfo};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock hosting API for testing without network access
#[derive(Default)]
pub struct MockHostingApi {
    repos: Vec<RepoInfo>,
    tags: HashMap<RepoRef, Vec<String>>,
    heads: HashMap<(RepoRef, String), String>,
    failing_creates: HashSet<RepoRef>,
    created: Mutex<Vec<(RepoRef, CreatedRef)>>,
}

impl MockHostingApi {
    /// Create a new empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository with its tag names
    pub fn with_repo(mut self, info: RepoInfo, tags: &[&str]) -> Self {
        self.tags.insert(
            info.repo.clone(),
            tags.iter().map(|t| t.to_string()).collect(),
        );
        self.repos.push(info);
        self
    }

    /// Set the head commit of a branch
    pub fn with_head(mut self, repo: &RepoRef, branch: &str, sha: &str) -> Self {
        self.heads
            .insert((repo.clone(), branch.to_string()), sha.to_string());
        self
    }

    /// Make tag creation fail for `repo` as if the ref already existed
    pub fn failing_create(mut self, repo: &RepoRef) -> Self {
        self.failing_creates.insert(repo.clone());
        self
    }

    /// Refs created so far, in call order
    pub fn created(&self) -> Vec<(RepoRef, CreatedRef)> {
        self.created
            .lock()
            .map(|created| created.clone())
            .unwrap_or_default()
    }

    fn find(&self, repo: &RepoRef) -> Result<&RepoInfo> {
        self.repos
            .iter()
            .find(|info| &info.repo == repo)
            .ok_or_else(|| TaggerError::api(404, "Not Found"))
    }
}

impl HostingApi for MockHostingApi {
    fn list_org_repos(&self, org: &str) -> Result<Vec<RepoInfo>> {
        Ok(self
            .repos
            .iter()
            .filter(|info| info.repo.owner == org)
            .cloned()
            .collect())
    }

    fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo> {
        self.find(repo).cloned()
    }

    fn list_tags(&self, repo: &RepoRef) -> Result<Vec<String>> {
        self.find(repo)?;
        Ok(self.tags.get(repo).cloned().unwrap_or_default())
    }

    fn branch_head_sha(&self, repo: &RepoRef, branch: &str) -> Result<String> {
        self.heads
            .get(&(repo.clone(), branch.to_string()))
            .cloned()
            .ok_or_else(|| TaggerError::api(404, format!("No commit found for SHA: {}", branch)))
    }

    fn create_tag_ref(&self, repo: &RepoRef, tag: &str, sha: &str) -> Result<CreatedRef> {
        self.find(repo)?;
        if self.failing_creates.contains(repo) {
            return Err(TaggerError::api(422, "Reference already exists"));
        }

        let created = CreatedRef {
            ref_name: format!("refs/tags/{}", tag),
            sha: sha.to_string(),
        };
        if let Ok(mut log) = self.created.lock() {
            log.push((repo.clone(), created.clone()));
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoRef {
        RepoRef::new("org", name)
    }

    #[test]
    fn test_mock_lists_only_org_repos() {
        let api = MockHostingApi::new()
            .with_repo(RepoInfo::new(repo("A"), "main"), &[])
            .with_repo(RepoInfo::new(RepoRef::new("other", "B"), "main"), &[]);

        let repos = api.list_org_repos("org").unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].repo.name, "A");
    }

    #[test]
    fn test_mock_unknown_repo_is_not_found() {
        let api = MockHostingApi::new();
        let err = api.get_repo(&repo("missing")).unwrap_err();
        assert!(matches!(err, TaggerError::Api { status: 404, .. }));
    }

    #[test]
    fn test_mock_records_created_refs() {
        let api = MockHostingApi::new().with_repo(RepoInfo::new(repo("A"), "main"), &[]);

        api.create_tag_ref(&repo("A"), "v1.0.0", "abc").unwrap();

        let created = api.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].1.ref_name, "refs/tags/v1.0.0");
        assert_eq!(created[0].1.sha, "abc");
    }

    #[test]
    fn test_mock_failing_create() {
        let api = MockHostingApi::new()
            .with_repo(RepoInfo::new(repo("A"), "main"), &[])
            .failing_create(&repo("A"));

        assert!(api.create_tag_ref(&repo("A"), "v1.0.0", "abc").is_err());
        assert!(api.created().is_empty());
    }
}
