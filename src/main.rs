use clap::Parser;
use colored::*;
use github_repos_server::api::{create_router, AppState};
use github_repos_server::cli::Cli;
use github_repos_server::error::{GitHubReposError, Result};
use github_repos_server::github::GitHubClient;
use github_repos_server::service::RepositoryService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Initialize tracing with DEBUG level by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("debug"))
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Repos Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let github = GitHubClient::new(cli.github_config())?;
    let app = create_router(AppState::new(RepositoryService::new(github)));

    let addr = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e|
        GitHubReposError::ConfigError(format!("Failed to bind {}: {}", addr, e))
    )?;

    println!("✅ Using GitHub API at {}", cli.github_api_url);
    println!("📡 Listening on http://{}", addr);
    println!("\nPress Ctrl+C to stop the server\n");
    info!(addr = %addr, "HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("✅ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    println!("\n🛑 Shutting down server...");
}
