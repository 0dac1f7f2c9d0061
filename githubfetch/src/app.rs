// ABOUTME: The profile pipeline: fetch, render the avatar in the detected mode, lay out, write
// ABOUTME: A failed profile fetch or a Ctrl-C stops the run; avatar problems leave the column empty

use github_sdk::{GitHubClient, UserSnapshot};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::constants::download::{IMAGE_TIMEOUT, MAX_IMAGE_BYTES};
use crate::constants::glyph::DEFAULT_MAX_WIDTH;
use crate::constants::inline::DEFAULT_HELPER;
use crate::constants::timeouts::SPINNER_TICK_MS;
use crate::error::PipelineError;
use crate::layout::LayoutComposer;
use crate::rendering::{
    GlyphArtRenderer, ImageAcquirer, InlineImageRenderer, RenderableVisual, TerminalMode,
    best_effort,
};

/// Everything the pipeline needs besides the API client
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub mode: TerminalMode,
    pub use_color: bool,
    pub glyph_width: u32,
    pub image_helper: String,
    /// Where the inline renderer stages avatars; system temp dir when `None`
    pub temp_dir: Option<PathBuf>,
    /// Width used to wrap long values; no wrapping when `None`
    pub terminal_width: Option<usize>,
    /// Show a spinner on stderr while the profile loads
    pub show_status: bool,
    pub image_timeout: Duration,
}

impl PipelineOptions {
    pub fn new(mode: TerminalMode) -> Self {
        Self {
            mode,
            use_color: false,
            glyph_width: DEFAULT_MAX_WIDTH,
            image_helper: DEFAULT_HELPER.to_string(),
            temp_dir: None,
            terminal_width: None,
            show_status: false,
            image_timeout: IMAGE_TIMEOUT,
        }
    }

    /// Options for an interactive run, sized to the current terminal
    pub fn from_config(config: &Config, mode: TerminalMode, use_color: bool) -> Self {
        let terminal_width = if std::io::stdout().is_terminal() {
            crossterm::terminal::size()
                .ok()
                .map(|(columns, _)| columns as usize)
        } else {
            None
        };

        Self {
            mode,
            use_color,
            glyph_width: config.glyph_width(),
            image_helper: config.image_helper().to_string(),
            temp_dir: None,
            terminal_width,
            show_status: std::io::stderr().is_terminal(),
            image_timeout: config.timeout(),
        }
    }
}

pub struct Pipeline {
    client: GitHubClient,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(client: GitHubClient, options: PipelineOptions) -> Self {
        Self { client, options }
    }

    /// Show `username`'s profile on `out`
    pub async fn run<W: Write>(&self, username: &str, out: &mut W) -> Result<(), PipelineError> {
        let snapshot = self.fetch(username).await?;
        let visual = self.render_avatar(&snapshot.profile.avatar_url).await?;
        log::debug!("Avatar column: {:?}", visual_kind(&visual));

        LayoutComposer::new(self.options.use_color)
            .with_terminal_width(self.options.terminal_width)
            .write_to(out, &snapshot, &visual)?;
        Ok(())
    }

    /// Fetch the profile and starred count behind a status spinner
    pub async fn fetch(&self, username: &str) -> Result<UserSnapshot, PipelineError> {
        let spinner = self.spinner(username);
        let result = self.client.fetch_snapshot(username).await;
        spinner.finish_and_clear();

        result.map_err(|e| PipelineError::fetch_failed(username, e))
    }

    /// Render the avatar with the one renderer matching the terminal mode.
    ///
    /// Rendering problems yield an empty visual; only a Ctrl-C while the
    /// image helper runs is an error.
    pub async fn render_avatar(&self, avatar_url: &str) -> Result<RenderableVisual, PipelineError> {
        let acquirer = match ImageAcquirer::with_limits(self.options.image_timeout, MAX_IMAGE_BYTES)
        {
            Ok(acquirer) => acquirer,
            Err(e) => {
                log::debug!("Could not set up image download: {}", e);
                return Ok(RenderableVisual::Empty);
            }
        };

        let visual = match self.options.mode {
            TerminalMode::InlineCapable => {
                let mut renderer =
                    InlineImageRenderer::new(acquirer).with_helper(&self.options.image_helper);
                if let Some(dir) = &self.options.temp_dir {
                    renderer = renderer.with_temp_dir(dir);
                }
                best_effort("Inline image", renderer.render(avatar_url)).await
            }
            TerminalMode::GlyphFallback => {
                let renderer =
                    GlyphArtRenderer::new(acquirer).with_max_width(self.options.glyph_width);
                best_effort("Glyph art", renderer.render(avatar_url)).await
            }
        };

        visual.map_err(|_| PipelineError::Interrupted)
    }

    fn spinner(&self, username: &str) -> ProgressBar {
        if !self.options.show_status {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Fetching {}...", username));
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        spinner
    }
}

fn visual_kind(visual: &RenderableVisual) -> &'static str {
    match visual {
        RenderableVisual::Empty => "empty",
        RenderableVisual::GlyphArt(_) => "glyph art",
        RenderableVisual::InlinePlaceholder => "inline image",
    }
}
