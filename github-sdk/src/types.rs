// ABOUTME: Data model for GitHub user profiles returned by the REST API
// ABOUTME: Deserializes the subset of fields the CLI renders and validates them

use serde::Deserialize;
use url::Url;

use crate::error::GitHubError;

/// Public profile of a GitHub user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    #[serde(default)]
    pub location: Option<String>,
}

impl Profile {
    /// Reject records that deserialized but cannot be rendered
    pub fn validate(self) -> Result<Self, GitHubError> {
        if self.login.trim().is_empty() {
            return Err(GitHubError::InvalidResponse);
        }
        Url::parse(&self.avatar_url).map_err(|_| GitHubError::InvalidResponse)?;
        Ok(self)
    }
}

/// Everything one rendering pass needs about a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub profile: Profile,
    /// Number of starred repositories, zero when the count could not be fetched
    pub starred: u64,
}
