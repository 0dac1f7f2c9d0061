// ABOUTME: Terminal capability detection for choosing the avatar rendering path
// ABOUTME: Classifies the TERM value into inline-image capable or glyph fallback

use std::env;

use crate::constants::detection::{INLINE_TERMINAL_MARKER, TERM_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Terminal speaks the Kitty image protocol
    InlineCapable,
    /// Anything else: draw the avatar with characters
    GlyphFallback,
}

impl TerminalMode {
    /// Read `TERM` from the process environment and classify it
    pub fn from_env() -> Self {
        let term = env::var(TERM_ENV).ok();
        detect_mode(term.as_deref())
    }
}

/// Classify a terminal identifier. Absent or non-matching values fall back to glyph art.
pub fn detect_mode(term: Option<&str>) -> TerminalMode {
    match term {
        Some(term) if term.to_lowercase().contains(INLINE_TERMINAL_MARKER) => {
            TerminalMode::InlineCapable
        }
        _ => TerminalMode::GlyphFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_kitty_in_any_case_is_inline() {
        for term in ["xterm-kitty", "xterm-KITTY", "Kitty", "KITTY-direct"] {
            assert_eq!(
                detect_mode(Some(term)),
                TerminalMode::InlineCapable,
                "{} should select inline rendering",
                term
            );
        }
    }

    #[test]
    fn test_other_terminals_fall_back() {
        for term in ["xterm-256color", "screen", "dumb", "", "kit-ty", "wezterm"] {
            assert_eq!(detect_mode(Some(term)), TerminalMode::GlyphFallback);
        }
        assert_eq!(detect_mode(None), TerminalMode::GlyphFallback);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        let original_term = env::var(TERM_ENV).ok();

        unsafe {
            env::set_var(TERM_ENV, "xterm-KITTY");
        }
        assert_eq!(TerminalMode::from_env(), TerminalMode::InlineCapable);

        unsafe {
            env::remove_var(TERM_ENV);
        }
        assert_eq!(TerminalMode::from_env(), TerminalMode::GlyphFallback);

        // Restore env
        unsafe {
            if let Some(val) = original_term {
                env::set_var(TERM_ENV, val);
            } else {
                env::remove_var(TERM_ENV);
            }
        }
    }
}
