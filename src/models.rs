use crate::error::{GitHubReposError, Result};
use crate::types::RawRecord;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

const FULL_NAME: &str = "full_name";
const DESCRIPTION: &str = "description";
const CLONE_URL: &str = "clone_url";
const CREATED_AT: &str = "created_at";
const STARGAZERS: &str = "stargazers_count";

/// Normalized repository returned by `GET /repositories/{owner}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    // Full name of the repository, serialized as `fullName`.
    #[serde(rename = "fullName")]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "cloneUrl")]
    pub clone_url: String,
    #[serde(rename = "stars")]
    pub star_count: u64,
    #[serde(rename = "createdAt")]
    pub created_date: String,
}

impl RepositoryRecord {
    /// Build a record from already-stringified GitHub values.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        clone_url: impl Into<String>,
        created_at: &str,
        stargazers: &str,
    ) -> Result<Self> {
        Ok(RepositoryRecord {
            name: name.into(),
            description,
            clone_url: clone_url.into(),
            star_count: parse_star_count(stargazers)?,
            created_date: local_creation_date(created_at)?,
        })
    }
}

/// Map a decoded element, which is `None` when GitHub sent a `null` entry.
pub fn map_raw_record(raw: Option<&RawRecord>) -> Result<RepositoryRecord> {
    let raw = raw.ok_or_else(|| {
        GitHubReposError::InvalidArgument("Repository record must not be absent".to_string())
    })?;
    to_repository_record(raw)
}

/// Map one raw GitHub record onto a `RepositoryRecord`.
pub fn to_repository_record(raw: &RawRecord) -> Result<RepositoryRecord> {
    let name = raw.require_text(FULL_NAME)?;
    let description = raw.optional_text(DESCRIPTION);
    let clone_url = raw.require_text(CLONE_URL)?;
    let created_at = raw.require_text(CREATED_AT)?;
    let stargazers = raw.require_text(STARGAZERS)?;

    debug!(repo = %name, "Mapping raw repository record");
    RepositoryRecord::new(name, description, clone_url, &created_at, &stargazers)
}

/// Star counts arrive as numbers or numeric strings; the text is parsed as a
/// decimal and truncated toward zero, so `"2.99"` becomes 2.
pub fn parse_star_count(stargazers: &str) -> Result<u64> {
    let value: f64 = stargazers.trim().parse().map_err(|_| {
        GitHubReposError::FormatError(format!("Star count is not numeric: {:?}", stargazers))
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(GitHubReposError::FormatError(format!(
            "Star count out of range: {:?}",
            stargazers
        )));
    }

    Ok(value.trunc() as u64)
}

/// ISO-8601 local date-time followed by an offset; seconds and fraction are optional.
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Calendar date (`YYYY-MM-DD`) of a zoned timestamp, in the timestamp's own offset.
///
/// A trailing `[Region/Id]` is accepted and ignored; the offset before it
/// decides the date.
pub fn local_creation_date(created_at: &str) -> Result<String> {
    let invalid = |reason: &str| {
        GitHubReposError::FormatError(format!(
            "Invalid zoned timestamp {:?}: {}",
            created_at, reason
        ))
    };

    if created_at.contains(char::is_whitespace) {
        return Err(invalid("whitespace is not allowed"));
    }
    if created_at.as_bytes().get(10) != Some(&b'T') {
        return Err(invalid("expected 'T' between date and time"));
    }

    let without_region = match created_at.find('[') {
        Some(start) if created_at.ends_with(']') => &created_at[..start],
        _ => created_at,
    };
    let normalized = match without_region.strip_suffix('Z') {
        Some(local) => format!("{}+00:00", local),
        None => without_region.to_string(),
    };

    let timestamp: DateTime<FixedOffset> = ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .ok_or_else(|| invalid("expected an ISO-8601 date-time with an offset"))?;

    Ok(timestamp.date_naive().format("%Y-%m-%d").to_string())
}
