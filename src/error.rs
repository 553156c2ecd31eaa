use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum GitHubReposError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON parsing error: {0}")]
    ParseError(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Network error: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing query parameter: {0}")]
    MissingParameter(String),
}

impl From<serde_json::Error> for GitHubReposError {
    fn from(e: serde_json::Error) -> Self {
        GitHubReposError::ParseError(e.to_string())
    }
}

impl IntoResponse for GitHubReposError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        let status = match &self {
            GitHubReposError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, GitHubReposError>;
