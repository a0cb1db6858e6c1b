//! Best-effort lookup of a user's public repositories on GitHub.

use crate::error::HubError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Number of repositories shown on a detail page.
pub const MAX_PROJECTS: usize = 6;

pub const NO_DESCRIPTION: &str = "No description";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Simplified projection of a GitHub repository.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct GithubRepo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<GithubRepo> for Project {
    fn from(repo: GithubRepo) -> Self {
        Project {
            title: repo.name.unwrap_or_default(),
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            link: repo.html_url.unwrap_or_default(),
        }
    }
}

/// Outcome of one repository lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoFetch {
    Found(Vec<Project>),
    /// The user exists but has no public repositories.
    Empty,
    Failed(String),
}

impl RepoFetch {
    /// Collapse to the list shown to users; failures show as no projects.
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            RepoFetch::Found(projects) => projects,
            RepoFetch::Empty | RepoFetch::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RepoFetch::Failed(_))
    }
}

#[derive(Clone)]
pub struct GithubApi {
    client: reqwest::Client,
    base_url: Url,
}

impl GithubApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, HubError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn repos_url(&self, username: &str) -> Result<Url, String> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("cannot build repos URL from base {}", self.base_url))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        Ok(url)
    }

    /// Fetch up to [`MAX_PROJECTS`] repositories for `username`.
    ///
    /// Never returns an error: any failure is logged here and reported as
    /// [`RepoFetch::Failed`].
    pub async fn fetch_projects(&self, username: &str) -> RepoFetch {
        let outcome = self.try_fetch(username).await;
        match &outcome {
            RepoFetch::Failed(reason) => {
                warn!(username, reason = %reason, "GitHub repository fetch failed");
            }
            RepoFetch::Found(projects) => {
                debug!(username, count = projects.len(), "GitHub repositories fetched");
            }
            RepoFetch::Empty => debug!(username, "GitHub user has no public repositories"),
        }
        outcome
    }

    async fn try_fetch(&self, username: &str) -> RepoFetch {
        let url = match self.repos_url(username) {
            Ok(url) => url,
            Err(reason) => return RepoFetch::Failed(reason),
        };

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => return RepoFetch::Failed(format!("request error: {e}")),
        };

        let status = resp.status();
        if !status.is_success() {
            return RepoFetch::Failed(format!("HTTP {status}"));
        }

        let repos: Vec<GithubRepo> = match resp.json().await {
            Ok(repos) => repos,
            Err(e) => return RepoFetch::Failed(format!("malformed payload: {e}")),
        };

        if repos.is_empty() {
            return RepoFetch::Empty;
        }
        RepoFetch::Found(
            repos
                .into_iter()
                .take(MAX_PROJECTS)
                .map(Project::from)
                .collect(),
        )
    }
}
