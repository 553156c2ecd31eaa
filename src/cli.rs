use crate::github::{GitHubClientConfig, API_BASE_URL, DEFAULT_USER_AGENT};
use clap::Parser;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(name = "github-repos-server")]
#[command(about = "GitHub Repos Server - Lists a user's public repositories sorted by stars")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub github_api_url: Url,

    /// User-Agent header sent to GitHub
    #[arg(long, env = "GITHUB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Timeout for the outbound GitHub request, in seconds (no timeout when unset)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn github_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            api_base: self.github_api_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
