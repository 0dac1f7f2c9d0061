// ABOUTME: Builder pattern implementation for GitHubClient configuration
// ABOUTME: Provides typed configuration with defaults for timeout, base URL and token

use crate::GitHubClient;
use crate::constants::timeouts;
use crate::error::GitHubError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<GitHubClient, GitHubError>))]
pub struct GitHubClientConfig {
    /// Personal access token; anonymous requests when absent
    #[builder(default = None)]
    pub token: Option<SecretString>,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Override for the API root, used by GitHub Enterprise and tests
    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<GitHubClientConfig> for Result<GitHubClient, GitHubError> {
    fn from(config: GitHubClientConfig) -> Self {
        GitHubClient::from_config(config)
    }
}

impl GitHubClient {
    pub fn builder() -> GitHubClientConfigBuilder<((), (), ())> {
        GitHubClientConfig::builder()
    }
}
