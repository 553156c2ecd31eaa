#![allow(dead_code)]

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use github_repos_server::github::{GitHubClient, GitHubClientConfig};
use github_repos_server::service::RepositoryService;
use url::Url;

/// Three repositories with stars encoded as a number, a string and a float.
pub const OCTO_REPOS: &str = r#"[
    {
        "id": 1,
        "name": "alpha",
        "full_name": "octo/alpha",
        "description": "First repository",
        "clone_url": "https://github.com/octo/alpha.git",
        "created_at": "2019-07-11T19:45:57Z",
        "stargazers_count": 1,
        "owner": { "login": "octo", "id": 42 },
        "topics": ["rust", "http"]
    },
    {
        "id": 2,
        "name": "beta",
        "full_name": "octo/beta",
        "description": null,
        "clone_url": "https://github.com/octo/beta.git",
        "created_at": "2018-01-02T23:30:00-05:00",
        "stargazers_count": "3",
        "owner": { "login": "octo", "id": 42 },
        "topics": []
    },
    {
        "id": 3,
        "name": "gamma",
        "full_name": "octo/gamma",
        "description": "Third repository",
        "clone_url": "https://github.com/octo/gamma.git",
        "created_at": "2020-03-04T05:06:07+02:00",
        "stargazers_count": 2.9,
        "owner": { "login": "octo", "id": 42 },
        "topics": null
    }
]"#;

pub const MISSING_FULL_NAME: &str = r#"[
    {
        "description": "No name",
        "clone_url": "https://github.com/ghost/unnamed.git",
        "created_at": "2019-07-11T19:45:57Z",
        "stargazers_count": 5
    }
]"#;

/// Stand-in for `GET /users/{owner}/repos` on the GitHub API
async fn stub_user_repos(Path(owner): Path<String>, headers: HeaderMap) -> (StatusCode, String) {
    // GitHub rejects requests that carry no User-Agent.
    if !headers.contains_key(header::USER_AGENT) {
        return (StatusCode::FORBIDDEN, "User-Agent required".to_string());
    }

    match owner.as_str() {
        "octo" => (StatusCode::OK, OCTO_REPOS.to_string()),
        "empty" => (StatusCode::OK, "[]".to_string()),
        "broken" => (StatusCode::OK, "{not json".to_string()),
        "object" => (StatusCode::OK, r#"{"message":"hello"}"#.to_string()),
        "nameless" => (StatusCode::OK, MISSING_FULL_NAME.to_string()),
        "holes" => (StatusCode::OK, "[null]".to_string()),
        _ => (
            StatusCode::NOT_FOUND,
            r#"{"message":"Not Found"}"#.to_string(),
        ),
    }
}

pub struct StubGitHub {
    pub base_url: Url,
}

impl StubGitHub {
    /// Serve the stub API on an ephemeral local port.
    pub async fn start() -> anyhow::Result<Self> {
        let app = Router::new().route("/users/:owner/repos", get(stub_user_repos));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Stub GitHub server failed: {}", e);
            }
        });

        let base_url = Url::parse(&format!("http://{}", addr))?;
        Ok(StubGitHub { base_url })
    }

    pub fn client(&self) -> anyhow::Result<GitHubClient> {
        Ok(GitHubClient::new(GitHubClientConfig::new(self.base_url.clone()))?)
    }

    pub fn service(&self) -> anyhow::Result<RepositoryService> {
        Ok(RepositoryService::new(self.client()?))
    }
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_client() -> anyhow::Result<GitHubClient> {
    let base_url = Url::parse("http://127.0.0.1:9")?;
    Ok(GitHubClient::new(GitHubClientConfig::new(base_url))?)
}
