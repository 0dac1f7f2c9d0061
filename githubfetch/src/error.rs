// ABOUTME: Fatal error taxonomy of the profile pipeline
// ABOUTME: Errors that abort the command instead of degrading its output

use github_sdk::GitHubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The primary profile record could not be retrieved. Transport failures,
    /// missing users and unusable payloads all end up here.
    #[error("Failed to get data for user '{username}'.")]
    FetchFailed {
        username: String,
        #[source]
        source: GitHubError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Ctrl-C while the image helper was running
    #[error("Interrupted")]
    Interrupted,
}

impl PipelineError {
    pub fn fetch_failed(username: &str, source: GitHubError) -> Self {
        PipelineError::FetchFailed {
            username: username.to_string(),
            source,
        }
    }

    /// Hint for the user, when the underlying failure has one
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            PipelineError::FetchFailed { source, .. } => source.help_text(),
            PipelineError::Output(_) | PipelineError::Interrupted => None,
        }
    }
}
