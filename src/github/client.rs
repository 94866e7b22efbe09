use crate::domain::RepoRef;
use crate::error::{Result, TaggerError};
use crate::github::{CreatedRef, HostingApi, RepoInfo};
use regex::Regex;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct ApiOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ApiRepository {
    name: String,
    owner: ApiOwner,
    #[serde(default)]
    default_branch: Option<String>,
}

impl From<ApiRepository> for RepoInfo {
    fn from(r: ApiRepository) -> Self {
        RepoInfo::new(
            RepoRef::new(r.owner.login, r.name),
            r.default_branch.unwrap_or_else(|| "main".to_string()),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ApiObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiReference {
    #[serde(rename = "ref")]
    ref_name: String,
    object: ApiObject,
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    sha: String,
}

#[derive(Debug, Serialize)]
struct NewReference<'a> {
    #[serde(rename = "ref")]
    ref_name: &'a str,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking GitHub REST client authenticated with a static token
pub struct GithubClient {
    http: Client,
    api_url: Url,
    per_page: u8,
}

impl GithubClient {
    /// Create a client for `api_url` (e.g., "https://api.github.com").
    ///
    /// # Arguments
    /// * `token` - Personal access token sent as a bearer token
    /// * `api_url` - Base URL of the REST API, with or without trailing slash
    /// * `per_page` - Page size for list endpoints (1-100)
    pub fn new(token: &str, api_url: &str, per_page: u8) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| TaggerError::config(format!("invalid api_url: {}", api_url)))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| TaggerError::config("GITHUB_TOKEN contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(format!("gh-tagger/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(GithubClient {
            http,
            api_url,
            per_page,
        })
    }

    /// Endpoint URL below the API base; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = check_status(self.http.get(url).send()?)?;
        Ok(response.json()?)
    }

    /// GET a list endpoint and follow `Link: rel="next"` until the last page
    fn get_all_pages<T: DeserializeOwned>(&self, mut url: Url) -> Result<Vec<T>> {
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());

        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(url) = next {
            tracing::debug!(url = %url, "GET page");
            let response = check_status(self.http.get(&url).send()?)?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_link);
            let page: Vec<T> = response.json()?;
            items.extend(page);
        }

        Ok(items)
    }
}

impl HostingApi for GithubClient {
    fn list_org_repos(&self, org: &str) -> Result<Vec<RepoInfo>> {
        let repos: Vec<ApiRepository> = self.get_all_pages(self.endpoint(&["orgs", org, "repos"]))?;
        Ok(repos.into_iter().map(RepoInfo::from).collect())
    }

    fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo> {
        let r: ApiRepository = self.get_json(self.endpoint(&["repos", &repo.owner, &repo.name]))?;
        Ok(r.into())
    }

    fn list_tags(&self, repo: &RepoRef) -> Result<Vec<String>> {
        let refs: Vec<ApiReference> = self.get_all_pages(self.endpoint(&[
            "repos",
            &repo.owner,
            &repo.name,
            "git",
            "matching-refs",
            "tags",
            "",
        ]))?;

        Ok(refs
            .into_iter()
            .map(|r| {
                r.ref_name
                    .strip_prefix("refs/tags/")
                    .map(str::to_string)
                    .unwrap_or(r.ref_name)
            })
            .collect())
    }

    fn branch_head_sha(&self, repo: &RepoRef, branch: &str) -> Result<String> {
        let commit: ApiCommit =
            self.get_json(self.endpoint(&["repos", &repo.owner, &repo.name, "commits", branch]))?;
        Ok(commit.sha)
    }

    fn create_tag_ref(&self, repo: &RepoRef, tag: &str, sha: &str) -> Result<CreatedRef> {
        let ref_name = format!("refs/tags/{}", tag);
        let url = self.endpoint(&["repos", &repo.owner, &repo.name, "git", "refs"]);
        tracing::debug!(url = %url, ref_name = %ref_name, sha, "POST");

        let response = self
            .http
            .post(url)
            .json(&NewReference {
                ref_name: &ref_name,
                sha,
            })
            .send()?;
        let created: ApiReference = check_status(response)?.json()?;

        Ok(CreatedRef {
            ref_name: created.ref_name,
            sha: created.object.sha,
        })
    }
}

/// Turn a non-success response into an API error carrying the service message
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(TaggerError::api(status.as_u16(), error_message(&body)))
}

/// Extract `message` from a GitHub error body, falling back to the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Find the `rel="next"` target in a `Link` header
fn next_page_link(header: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN
        .get_or_init(|| Regex::new(r#"<([^>]+)>\s*;\s*rel="next""#).expect("valid link regex"));

    re.captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
