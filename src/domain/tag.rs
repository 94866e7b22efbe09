use crate::domain::{RepoRef, Version};
use crate::error::{Result, TaggerError};

/// Proposed new tag for one repository, as computed by the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagProposal {
    pub repo: RepoRef,
    pub latest: Option<Version>,
    pub next: Version,
}

impl TagProposal {
    pub fn new(repo: RepoRef, latest: Option<Version>, next: Version) -> Self {
        TagProposal { repo, latest, next }
    }

    /// Line consumed by the creator (e.g., "github.com/org/repo v1.2.0")
    pub fn to_line(&self, host: &str) -> String {
        format!("{} {}", self.repo.with_host(host), self.next.tag_name())
    }
}

/// Request to create `tag` in `repo`, read from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub repo: RepoRef,
    pub tag: String,
}

impl TagRequest {
    /// Parse a "host/owner/name tag" line.
    ///
    /// The line must hold exactly two whitespace-separated tokens.
    pub fn parse_line(line: &str, host: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(TaggerError::input(format!(
                "error parsing input line: expected 2 tokens separated with a space: '{}'",
                line
            )));
        }

        let repo = RepoRef::parse(tokens[0], host)?;
        Ok(TagRequest {
            repo,
            tag: tokens[1].to_string(),
        })
    }

    /// Fully qualified ref name (e.g., "refs/tags/v1.2.0")
    pub fn ref_name(&self) -> String {
        format!("refs/tags/{}", self.tag)
    }
}

/// Parse every non-blank line of the creator input.
///
/// Fails on the first malformed line, and when there is nothing to tag.
pub fn parse_requests<I, S>(lines: I, host: &str) -> Result<Vec<TagRequest>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut requests = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        requests.push(TagRequest::parse_line(line, host)?);
    }

    if requests.is_empty() {
        return Err(TaggerError::input("no input"));
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_line() {
        let proposal = TagProposal::new(
            RepoRef::new("org", "A"),
            Some(Version::new(1, 1, 0)),
            Version::new(1, 2, 0),
        );
        assert_eq!(proposal.to_line("github.com"), "github.com/org/A v1.2.0");
    }

    #[test]
    fn test_parse_line() {
        let req = TagRequest::parse_line("github.com/org/A v1.2.0", "github.com").unwrap();
        assert_eq!(req.repo, RepoRef::new("org", "A"));
        assert_eq!(req.tag, "v1.2.0");
        assert_eq!(req.ref_name(), "refs/tags/v1.2.0");
    }

    #[test]
    fn test_parse_line_tolerates_repeated_whitespace() {
        let req = TagRequest::parse_line("  github.com/org/A \t v1.2.0  ", "github.com").unwrap();
        assert_eq!(req.tag, "v1.2.0");
    }

    #[test]
    fn test_parse_line_wrong_token_count() {
        assert!(TagRequest::parse_line("github.com/org/A", "github.com").is_err());
        assert!(TagRequest::parse_line("github.com/org/A v1 extra", "github.com").is_err());
    }

    #[test]
    fn test_parse_line_bad_repo() {
        let err = TagRequest::parse_line("github.com/A v1.0.0", "github.com").unwrap_err();
        assert!(err.to_string().contains("invalid repo URL"));
    }

    #[test]
    fn test_parse_requests_skips_blank_lines() {
        let lines = ["github.com/org/A v1.2.0", "", "   ", "github.com/org/B v0.1.0"];
        let requests = parse_requests(lines, "github.com").unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].repo.name, "B");
    }

    #[test]
    fn test_parse_requests_empty_input() {
        let err = parse_requests(["", "\t"], "github.com").unwrap_err();
        assert_eq!(err.to_string(), "Input error: no input");
    }

    #[test]
    fn test_parse_requests_fails_on_first_bad_line() {
        let lines = ["github.com/org/A v1.2.0", "garbage"];
        assert!(parse_requests(lines, "github.com").is_err());
    }
}
