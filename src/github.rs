use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "GitHub Repos Server/0.1.0";

#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub api_base: Url,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl GitHubClientConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);

        // No timeout unless one is configured explicitly.
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(GitHubClient {
            client: builder.build()?,
            api_base: config.api_base.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn owner_repos_url(&self, owner: &str) -> String {
        format!("{}/users/{}/repos", self.api_base, owner)
    }

    /// Raw JSON listing of an owner's public repositories (first page only).
    pub async fn owner_repos(&self, owner: &str) -> Option<String> {
        debug!(owner = %owner, "Fetching repositories from GitHub");
        let url = self.owner_repos_url(owner);
        self.download_json(&url).await
    }

    /// Fetch `url` and return its body as text.
    ///
    /// Failures are logged and reported as `None`; callers decide what an
    /// absent body means.
    pub async fn download_json(&self, url: &str) -> Option<String> {
        match self.fetch_text(url).await {
            Ok(body) => {
                debug!(url = %url, bytes = body.len(), "Downloaded response body");
                Some(body)
            }
            Err(e) => {
                error!(url = %url, error = %e, "Failed to get content from URL");
                None
            }
        }
    }

    async fn fetch_text(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?
            .error_for_status()?;

        response.text().await
    }
}
