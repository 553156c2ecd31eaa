use crate::error::{GitHubReposError, Result};
use crate::github::GitHubClient;
use crate::models::{map_raw_record, RepositoryRecord};
use crate::sort::sort_by_stars;
use crate::types::decode_records;
use tracing::{debug, info};

/// Lists an owner's repositories sorted by stars.
#[derive(Debug, Clone)]
pub struct RepositoryService {
    github: GitHubClient,
}

impl RepositoryService {
    pub fn new(github: GitHubClient) -> Self {
        Self { github }
    }

    pub async fn sorted_repositories(
        &self,
        owner: Option<&str>,
        sort_spec: Option<&str>,
    ) -> Result<Vec<RepositoryRecord>> {
        let owner = owner.ok_or_else(|| {
            GitHubReposError::InvalidArgument("Repository owner must not be absent".to_string())
        })?;
        let sort_spec = sort_spec.ok_or_else(|| {
            GitHubReposError::InvalidArgument("Sort order must not be absent".to_string())
        })?;

        info!(owner = %owner, sort = %sort_spec, "Collecting repositories in sorted order");

        // An absent body is not treated as an empty listing; decoding rejects it.
        let body = self.github.owner_repos(owner).await;
        let raw_records = decode_records(body.as_deref())?;

        let repos = raw_records
            .iter()
            .map(|raw| map_raw_record(raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        debug!(owner = %owner, count = repos.len(), "Mapped repositories");
        sort_by_stars(repos, Some(sort_spec))
    }
}
