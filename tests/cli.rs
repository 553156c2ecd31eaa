use clap::Parser;
use github_repos_server::cli::Cli;
use github_repos_server::github::{API_BASE_URL, DEFAULT_USER_AGENT};
use std::time::Duration;

#[test]
fn test_defaults_match_client_constants() {
    let cli = Cli::try_parse_from(["github-repos-server"]).expect("Failed to parse defaults");

    assert_eq!(cli.github_api_url.as_str().trim_end_matches('/'), API_BASE_URL);
    assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cli.request_timeout_secs, None);

    let config = cli.github_config();
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.timeout, None);
}

#[test]
fn test_explicit_flags() {
    let cli = Cli::try_parse_from([
        "github-repos-server",
        "--host",
        "127.0.0.1",
        "--port",
        "9090",
        "--github-api-url",
        "http://localhost:3000",
        "--request-timeout-secs",
        "15",
    ])
    .expect("Failed to parse flags");

    assert_eq!(cli.bind_addr(), "127.0.0.1:9090");
    assert_eq!(cli.github_config().timeout, Some(Duration::from_secs(15)));
    assert_eq!(cli.github_config().api_base.as_str(), "http://localhost:3000/");
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let result = Cli::try_parse_from(["github-repos-server", "--github-api-url", "not a url"]);
    assert!(result.is_err());
}
