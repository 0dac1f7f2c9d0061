// ABOUTME: Centralized constants for the GitHub SDK
// ABOUTME: Contains API URLs, request headers, and timeout defaults

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// GitHub API URLs
pub mod urls {
    /// Base URL for the GitHub REST API
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// Domain used when presenting a user handle as `<login>@<domain>`
    pub const GITHUB_DOMAIN: &str = "github.com";
}

/// Request header values
pub mod headers {
    /// Media type recommended by the GitHub REST API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// User agent sent with every request (GitHub rejects requests without one)
    pub const USER_AGENT: &str = concat!("githubfetch/", env!("CARGO_PKG_VERSION"));
}

/// Status codes with dedicated error mapping
pub mod status {
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const TOO_MANY_REQUESTS: u16 = 429;
}
