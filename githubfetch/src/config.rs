// ABOUTME: Configuration file loading, validation, and hierarchical merging for githubfetch
// ABOUTME: Supports TOML config files in XDG locations plus environment overrides

use anyhow::{Context, Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::constants::glyph::DEFAULT_MAX_WIDTH;
use crate::constants::inline::DEFAULT_HELPER;
use crate::constants::layout::LEFT_COLUMN_WIDTH;
use crate::rendering::{TerminalMode, detect_mode};

/// Environment variable holding a GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API root
pub const API_URL_ENV: &str = "GITHUBFETCH_API_URL";

const CONFIG_DIR: &str = "githubfetch";
const CONFIG_FILE: &str = "config.toml";
const PROJECT_CONFIG_FILE: &str = "githubfetch.toml";

/// How the avatar should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Decide from the TERM environment variable
    #[default]
    Auto,
    /// Always use the inline image helper
    Inline,
    /// Always draw glyph art
    Glyph,
}

impl RenderMode {
    /// Resolve against the current environment
    pub fn resolve(self) -> TerminalMode {
        match self {
            RenderMode::Auto => TerminalMode::from_env(),
            other => other.resolve_with(None),
        }
    }

    /// Resolve against an explicit TERM value
    pub fn resolve_with(self, term: Option<&str>) -> TerminalMode {
        match self {
            RenderMode::Auto => detect_mode(term),
            RenderMode::Inline => TerminalMode::InlineCapable,
            RenderMode::Glyph => TerminalMode::GlyphFallback,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_token")]
    pub token: Option<SecretString>,
    #[serde(default)]
    pub image_helper: Option<String>,
    #[serde(default)]
    pub mode: Option<RenderMode>,
    #[serde(default)]
    pub glyph_width: Option<u32>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn deserialize_token<'de, D>(deserializer: D) -> std::result::Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let token: Option<String> = Option::deserialize(deserializer)?;
    Ok(token.map(secret))
}

fn secret(token: String) -> SecretString {
    SecretString::new(token.into_boxed_str())
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths)
    }

    /// Load configuration from files applied in order; later files override earlier ones.
    /// Missing files are skipped, unreadable or invalid ones are errors.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join(CONFIG_DIR).join(CONFIG_FILE));
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(config_home).join(CONFIG_DIR).join(CONFIG_FILE));
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(PROJECT_CONFIG_FILE));
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            token: other.token.or(self.token),
            image_helper: other.image_helper.or(self.image_helper),
            mode: other.mode.or(self.mode),
            glyph_width: other.glyph_width.or(self.glyph_width),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Apply `GITHUB_TOKEN` and `GITHUBFETCH_API_URL`, which beat any file
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(token) = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty()) {
            self.token = Some(secret(token));
        }
        if let Some(api_url) = std::env::var(API_URL_ENV).ok().filter(|u| !u.is_empty()) {
            self.api_url = Some(api_url);
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref api_url) = self.api_url {
            let url = Url::parse(api_url).with_context(|| format!("Invalid api_url '{}'", api_url))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(anyhow!("api_url must use http or https: {}", api_url));
            }
        }

        if let Some(width) = self.glyph_width {
            if width == 0 || width as usize > LEFT_COLUMN_WIDTH {
                return Err(anyhow!(
                    "glyph_width must be between 1 and {}, got {}",
                    LEFT_COLUMN_WIDTH,
                    width
                ));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }

        if let Some(ref helper) = self.image_helper {
            if helper.trim().is_empty() {
                return Err(anyhow!("image_helper must not be empty"));
            }
        }

        Ok(())
    }

    pub fn glyph_width(&self) -> u32 {
        self.glyph_width.unwrap_or(DEFAULT_MAX_WIDTH)
    }

    pub fn image_helper(&self) -> &str {
        self.image_helper.as_deref().unwrap_or(DEFAULT_HELPER)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode.unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(github_sdk::constants::timeouts::HTTP_REQUEST_TIMEOUT)
    }

    /// Build the API client described by this configuration
    pub fn client(&self) -> Result<github_sdk::GitHubClient> {
        github_sdk::GitHubClient::builder()
            .token(
                self.token
                    .as_ref()
                    .map(|token| secret(token.expose_secret().to_string())),
            )
            .timeout(self.timeout())
            .base_url(self.api_url.clone())
            .build()
            .context("Failed to create GitHub client")
    }
}
