use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;
use crate::ports::metadata::{MetadataPort, RepoMetadata, UpstreamError};
use crate::shared::config::GithubConfig;
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub REST API 客户端实现（基于 reqwest）
pub struct GithubClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            TrackerError::Config(format!("Invalid github.api_base_url {}: {}", config.api_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TrackerError::Config(format!(
                "github.api_base_url cannot be used as a base: {}",
                config.api_base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// 拼接 {base}/repos/{owner}/{repo}，每段单独做百分号编码
    fn repo_url(&self, owner: &str, repo_name: &str) -> std::result::Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::ServiceUnavailable)?
            .pop_if_empty()
            .extend(["repos", owner, repo_name]);
        Ok(url)
    }
}

#[async_trait]
impl MetadataPort for GithubClient {
    async fn fetch_repository(
        &self,
        owner: &str,
        repo_name: &str,
    ) -> std::result::Result<RepoMetadata, UpstreamError> {
        let url = self.repo_url(owner, repo_name)?;
        debug!(%url, "Fetching repository metadata");

        let response = match self.client.get(url).header(ACCEPT, GITHUB_JSON).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(owner, repo_name, error = %e, "GitHub API unreachable");
                return Err(UpstreamError::ServiceUnavailable);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(owner, repo_name, status = status.as_u16(), "GitHub returned non-success status");
            return Err(UpstreamError::NotFound {
                status: status.as_u16(),
            });
        }

        let metadata = match response.json::<RepoMetadata>().await {
            Ok(metadata) => metadata,
            Err(e) if e.is_timeout() => {
                error!(owner, repo_name, error = %e, "GitHub API timed out reading body");
                return Err(UpstreamError::ServiceUnavailable);
            }
            Err(e) => {
                warn!(owner, repo_name, error = %e, "GitHub returned an unusable body");
                return Err(UpstreamError::InvalidResponse);
            }
        };

        if metadata.stargazers_count < 0 {
            warn!(owner, repo_name, stars = metadata.stargazers_count, "Negative star count from GitHub");
            return Err(UpstreamError::InvalidResponse);
        }

        Ok(metadata)
    }
}
