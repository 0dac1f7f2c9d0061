// ABOUTME: Custom error types for the GitHub SDK with user-friendly messages
// ABOUTME: Maps transport failures and HTTP status codes onto a small error taxonomy

use thiserror::Error;

use crate::constants::status;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("User {0} not found")]
    NotFound(String),

    #[error("Authentication failed. Check your GITHUB_TOKEN")]
    Auth,

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GitHubError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            GitHubError::NotFound(_) => Some("Check the spelling of the GitHub username"),
            GitHubError::Auth => {
                Some("Create a token at https://github.com/settings/tokens or unset GITHUB_TOKEN")
            }
            GitHubError::RateLimit => Some(
                "Unauthenticated requests are limited to 60 per hour. Set GITHUB_TOKEN to raise the limit",
            ),
            GitHubError::Network(_) => Some("Check your internet connection and try again"),
            GitHubError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }

    /// Map a non-success status for a user lookup onto an error variant
    pub fn from_status(code: u16, login: &str) -> Self {
        match code {
            status::NOT_FOUND => GitHubError::NotFound(login.to_string()),
            status::UNAUTHORIZED => GitHubError::Auth,
            // GitHub reports primary rate limits as 403 and secondary ones as 429
            status::FORBIDDEN | status::TOO_MANY_REQUESTS => GitHubError::RateLimit,
            other => GitHubError::Status(other),
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GitHubError::Timeout
        } else if err.is_decode() {
            GitHubError::InvalidResponse
        } else if let Some(status) = err.status() {
            GitHubError::Status(status.as_u16())
        } else {
            GitHubError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(_err: serde_json::Error) -> Self {
        GitHubError::InvalidResponse
    }
}
