use crate::error::{GitHubReposError, Result};
use crate::models::RepositoryRecord;
use std::cmp::Reverse;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only the last non-empty comma-separated token counts; `desc` (any case)
    /// is descending, everything else ascending.
    pub fn from_sort_spec(sort_spec: &str) -> Self {
        let last = sort_spec
            .split(',')
            .filter(|token| !token.is_empty())
            .last()
            .unwrap_or_default();

        if last.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Stable sort by star count. Equal counts keep their input order.
pub fn sort_by_stars(
    mut records: Vec<RepositoryRecord>,
    sort_spec: Option<&str>,
) -> Result<Vec<RepositoryRecord>> {
    let sort_spec = sort_spec.ok_or_else(|| {
        GitHubReposError::InvalidArgument("Sort order must not be absent".to_string())
    })?;

    match SortDirection::from_sort_spec(sort_spec) {
        SortDirection::Descending => {
            debug!(count = records.len(), "Sorting repositories in descending order");
            records.sort_by_key(|record| Reverse(record.star_count));
        }
        SortDirection::Ascending => {
            debug!(count = records.len(), "Sorting repositories in ascending order");
            records.sort_by_key(|record| record.star_count);
        }
    }

    Ok(records)
}
