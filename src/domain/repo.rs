use crate::error::{Result, TaggerError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid repository name regex"))
}

/// Owner/name pair identifying a repository on the hosting service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a repository reference such as "github.com/my-org/my-repo".
    ///
    /// The `host/` prefix is optional, but when present it must match `host`.
    pub fn parse(reference: &str, host: &str) -> Result<Self> {
        let host_prefix = format!("{}/", host);
        let path = reference.strip_prefix(&host_prefix).unwrap_or(reference);

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != 2 {
            return Err(TaggerError::input(format!(
                "invalid repo URL: '{}' - expected {}/owner/name",
                reference, host
            )));
        }

        for part in &parts {
            if !name_pattern().is_match(part) {
                return Err(TaggerError::input(format!(
                    "invalid repo URL: '{}' - bad segment '{}'",
                    reference, part
                )));
            }
        }

        Ok(RepoRef::new(parts[0], parts[1]))
    }

    /// "owner/name", as GitHub reports `full_name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// "host/owner/name", the form used in proposal lines
    pub fn with_host(&self, host: &str) -> String {
        format!("{}/{}/{}", host, self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_host() {
        let repo = RepoRef::parse("github.com/conduitio/conduit", "github.com").unwrap();
        assert_eq!(repo, RepoRef::new("conduitio", "conduit"));
    }

    #[test]
    fn test_parse_without_host() {
        let repo = RepoRef::parse("conduitio/conduit-connector-s3", "github.com").unwrap();
        assert_eq!(repo.name, "conduit-connector-s3");
    }

    #[test]
    fn test_parse_other_host_is_rejected() {
        assert!(RepoRef::parse("gitlab.com/org/repo", "github.com").is_err());
    }

    #[test]
    fn test_parse_custom_host() {
        let repo = RepoRef::parse("git.example.com/org/repo", "git.example.com").unwrap();
        assert_eq!(repo.full_name(), "org/repo");
    }

    #[test]
    fn test_parse_invalid() {
        for reference in ["repo", "github.com/org", "org/repo/extra", "org/", "/repo", "org/re po"] {
            let err = RepoRef::parse(reference, "github.com").unwrap_err();
            assert!(matches!(err, TaggerError::Input(_)), "{}", reference);
        }
    }

    #[test]
    fn test_with_host() {
        let repo = RepoRef::new("org", "A");
        assert_eq!(repo.with_host("github.com"), "github.com/org/A");
        assert_eq!(repo.to_string(), "org/A");
    }
}
