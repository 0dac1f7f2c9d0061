// ABOUTME: HTTP client for downloading avatar images shared by both renderers
// ABOUTME: Implements a single attempt with timeout, status check, and streaming size limit

use futures_util::StreamExt;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::download::{IMAGE_TIMEOUT, MAX_IMAGE_BYTES};

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Image too large: more than {limit} bytes: {url}")]
    TooLarge { limit: u64, url: String },

    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct ImageAcquirer {
    client: Client,
    max_bytes: u64,
}

impl ImageAcquirer {
    pub fn new() -> Result<Self, AcquireError> {
        Self::with_limits(IMAGE_TIMEOUT, MAX_IMAGE_BYTES)
    }

    pub fn with_limits(timeout: Duration, max_bytes: u64) -> Result<Self, AcquireError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(github_sdk::constants::headers::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()
            .map_err(|e| AcquireError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, max_bytes })
    }

    /// Download the raw bytes behind `url`. Exactly one request is made.
    pub async fn acquire(&self, url: &str) -> Result<Vec<u8>, AcquireError> {
        let parsed = Url::parse(url).map_err(|e| AcquireError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AcquireError::InvalidUrl(format!(
                "unsupported scheme '{}': {}",
                parsed.scheme(),
                url
            )));
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| AcquireError::Network(format!("HTTP request failed for {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AcquireError::Network(format!(
                "HTTP request failed with status {}: {}",
                response.status(),
                url
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_bytes {
                return Err(self.too_large(url));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| AcquireError::Network(format!("Failed to read response body: {}", e)))?;
            bytes.extend_from_slice(&chunk);

            if bytes.len() as u64 > self.max_bytes {
                return Err(self.too_large(url));
            }
        }

        log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }

    fn too_large(&self, url: &str) -> AcquireError {
        AcquireError::TooLarge {
            limit: self.max_bytes,
            url: url.to_string(),
        }
    }
}
