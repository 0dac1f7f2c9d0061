// ABOUTME: Centralized constants for the githubfetch CLI
// ABOUTME: Contains layout geometry, labels, placeholders, and image helper settings

/// Terminal capability detection
pub mod detection {
    /// Environment variable identifying the terminal emulator
    pub const TERM_ENV: &str = "TERM";

    /// Substring (compared case-insensitively) marking Kitty-protocol terminals
    pub const INLINE_TERMINAL_MARKER: &str = "kitty";
}

/// Two-column layout geometry
pub mod layout {
    /// Width of the left (avatar) column in terminal cells
    pub const LEFT_COLUMN_WIDTH: usize = 30;

    /// Padding between the avatar column and the profile column
    pub const RIGHT_COLUMN_PADDING: usize = 1;

    /// Rows reserved for an inline image (matches the helper's 24x12 placement)
    pub const PLACEHOLDER_ROWS: usize = 12;

    /// Blank lines written before the profile block
    pub const BLANK_LINES_BEFORE: usize = 1;

    /// Blank lines written after the profile block
    pub const BLANK_LINES_AFTER: usize = 2;

    /// Below this many cells a wrapped value column is unreadable, so no wrapping is applied
    pub const MIN_WRAP_WIDTH: usize = 10;
}

/// Labels and placeholders of the profile table
pub mod labels {
    pub const USERNAME: &str = "Username:";
    pub const REPOS: &str = "Repos:";
    pub const BIO: &str = "Bio:";
    pub const FROM: &str = "From:";
    pub const FOLLOWERS: &str = "Followers:";
    pub const FOLLOWING: &str = "Following:";
    pub const STARRED: &str = "Starred repos:";

    /// Shown when the user has no biography
    pub const BIO_PLACEHOLDER: &str = "N/A";

    /// Shown when the user has no location
    pub const LOCATION_PLACEHOLDER: &str = "Not Provided";
}

/// Glyph-art rendering
pub mod glyph {
    /// Default maximum width of the glyph art in cells
    pub const DEFAULT_MAX_WIDTH: u32 = 10;

    /// Upper half block: foreground paints the top pixel, background the bottom
    pub const HALF_BLOCK: char = '▀';

    /// Luminance ramp used when color output is disabled, darkest first
    pub const LUMA_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
}

/// External inline-image helper
pub mod inline {
    /// Default helper executable (ships with Kitty)
    pub const DEFAULT_HELPER: &str = "kitten";

    /// Helper subcommand that draws an image
    pub const HELPER_SUBCOMMAND: &str = "icat";

    /// Horizontal alignment inside the placement region
    pub const ALIGN: &str = "left";

    /// Placement region: 24x12 cells anchored at column 2, row 1
    pub const PLACE: &str = "24x12@2x1";

    /// Prefix of staged avatar files in the temp directory
    pub const TEMP_PREFIX: &str = "githubfetch-avatar-";

    /// Signal number of an interrupt on unix
    pub const SIGINT: i32 = 2;

    /// Exit status of a command stopped by Ctrl-C
    pub const INTERRUPTED_EXIT_CODE: u8 = 130;
}

/// Image download limits
pub mod download {
    use std::time::Duration;

    /// Largest avatar accepted, in bytes
    pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

    /// Timeout for a single avatar download
    pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Status spinner
pub mod timeouts {
    /// Spinner tick interval for smooth animation
    pub const SPINNER_TICK_MS: u64 = 80;
}
