use crate::error::{GitHubReposError, Result};
use crate::health::{health_check, liveness_check};
use crate::models::RepositoryRecord;
use crate::service::RepositoryService;
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RepositoryService>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: RepositoryService) -> Self {
        Self {
            service: Arc::new(service),
            start_time: Instant::now(),
        }
    }
}

/// Value of the `sort` query parameter. Repeated occurrences are joined
/// with commas, so `?sort=stars&sort=desc` reads as `stars,desc`.
pub fn sort_param(pairs: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/repositories/:owner", get(list_repositories))
        .route("/health", get(health_check))
        .route("/livez", get(liveness_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// `GET /repositories/{owner}?sort={sortSpec}`
async fn list_repositories(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RepositoryRecord>>> {
    let sort = sort_param(&params)
        .ok_or_else(|| GitHubReposError::MissingParameter("sort".to_string()))?;

    debug!(owner = %owner, sort = %sort, "Collect all repositories for owner with provided sorting order");
    let repos = state
        .service
        .sorted_repositories(Some(&owner), Some(&sort))
        .await?;
    Ok(Json(repos))
}
