// ABOUTME: CLI argument definitions for githubfetch
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::RenderMode;

#[derive(Parser, Debug)]
#[command(name = "githubfetch")]
#[command(about = "Show a GitHub user's profile in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GitHub username to look up
    pub username: String,

    /// How to draw the avatar (defaults to the config file, then auto-detection)
    #[arg(long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Force colored output even when piped
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Whether profile output should carry ANSI colors
    pub fn use_color(&self) -> bool {
        if self.force_color {
            return true;
        }
        !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
            && std::io::stdout().is_terminal()
    }
}
