// ABOUTME: GitHub SDK library providing a typed REST client for public user profiles
// ABOUTME: Fetches the user record and the starred-repository count for a login

pub mod builder;
pub mod constants;
pub mod error;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use builder::GitHubClientConfig;
pub use error::GitHubError;
pub use types::{Profile, UserSnapshot};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use url::Url;

pub type Result<T> = std::result::Result<T, GitHubError>;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Anonymous client against the public API with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn from_config(config: GitHubClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| constants::urls::GITHUB_API_BASE.to_string());
        Url::parse(&base_url)
            .map_err(|e| GitHubError::Configuration(format!("Invalid API URL: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(constants::headers::USER_AGENT),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(constants::headers::ACCEPT));
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| {
                    GitHubError::Configuration("Token contains invalid characters".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GitHubError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the public profile of `login`
    pub async fn fetch_user(&self, login: &str) -> Result<Profile> {
        let url = self.user_url(login, &[])?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::from_status(status.as_u16(), login));
        }

        let body = response.text().await?;
        // A literal `null` body is treated like any other unusable response
        let profile: Option<Profile> = serde_json::from_str(&body)?;
        profile.ok_or(GitHubError::InvalidResponse)?.validate()
    }

    /// Count the repositories `login` has starred, as listed by the first response page
    pub async fn starred_count(&self, login: &str) -> Result<u64> {
        let url = self.user_url(login, &["starred"])?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::from_status(status.as_u16(), login));
        }

        let body = response.text().await?;
        let starred: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(starred.len() as u64)
    }

    /// Fetch the profile and starred count together.
    ///
    /// Only the profile request is allowed to fail the call; a failed starred
    /// request is reported as zero starred repositories.
    pub async fn fetch_snapshot(&self, login: &str) -> Result<UserSnapshot> {
        let profile = self.fetch_user(login).await?;

        let starred = match self.starred_count(login).await {
            Ok(count) => count,
            Err(e) => {
                log::debug!("Starred count unavailable for {}: {}", login, e);
                0
            }
        };

        Ok(UserSnapshot { profile, starred })
    }

    fn user_url(&self, login: &str, rest: &[&str]) -> Result<Url> {
        if login.trim().is_empty() {
            return Err(GitHubError::Configuration(
                "Username must not be empty".to_string(),
            ));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GitHubError::Configuration(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| GitHubError::Configuration("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("users")
            .push(login)
            .extend(rest);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{mock_github_server, mock_profile_response, mock_starred_response};

    fn client_for(server: &mockito::ServerGuard) -> GitHubClient {
        GitHubClient::builder()
            .base_url(Some(server.url()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(GitHubClient::new().is_ok());
    }

    #[test]
    fn test_user_url_escapes_login() {
        let client = GitHubClient::new().unwrap();
        let url = client.user_url("a b", &["starred"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/a%20b/starred");
    }

    #[test]
    fn test_user_url_rejects_empty_login() {
        let client = GitHubClient::new().unwrap();
        assert!(matches!(
            client.user_url("", &[]),
            Err(GitHubError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_user_success() {
        let mut server = mock_github_server().await;
        let mock = server
            .mock("GET", "/users/octocat")
            .match_header("user-agent", constants::headers::USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_profile_response("octocat").to_string())
            .create_async()
            .await;

        let profile = client_for(&server).fetch_user("octocat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.public_repos, 8);
    }

    #[tokio::test]
    async fn test_fetch_user_not_found() {
        let mut server = mock_github_server().await;
        let _mock = server
            .mock("GET", "/users/ghost-user")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let result = client_for(&server).fetch_user("ghost-user").await;
        assert!(matches!(result, Err(GitHubError::NotFound(login)) if login == "ghost-user"));
    }

    #[tokio::test]
    async fn test_fetch_user_null_body_is_invalid() {
        let mut server = mock_github_server().await;
        let _mock = server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let result = client_for(&server).fetch_user("octocat").await;
        assert!(matches!(result, Err(GitHubError::InvalidResponse)));
    }

    #[tokio::test]
    async fn test_starred_count() {
        let mut server = mock_github_server().await;
        let _mock = server
            .mock("GET", "/users/octocat/starred")
            .with_status(200)
            .with_body(mock_starred_response(3).to_string())
            .create_async()
            .await;

        let count = client_for(&server).starred_count("octocat").await.unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_snapshot_degrades_starred_failure_to_zero() {
        let mut server = mock_github_server().await;
        let _profile = server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_body(mock_profile_response("octocat").to_string())
            .create_async()
            .await;
        let _starred = server
            .mock("GET", "/users/octocat/starred")
            .with_status(500)
            .create_async()
            .await;

        let snapshot = client_for(&server).fetch_snapshot("octocat").await.unwrap();
        assert_eq!(snapshot.profile.login, "octocat");
        assert_eq!(snapshot.starred, 0);
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer() {
        let mut server = mock_github_server().await;
        let mock = server
            .mock("GET", "/users/octocat/starred")
            .match_header("authorization", "Bearer ghp_abc")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = GitHubClient::builder()
            .base_url(Some(server.url()))
            .token(Some(secrecy::SecretString::new(
                "ghp_abc".to_string().into_boxed_str(),
            )))
            .build()
            .unwrap();

        assert_eq!(client.starred_count("octocat").await.unwrap(), 0);
        mock.assert_async().await;
    }
}
