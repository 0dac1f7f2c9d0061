// ABOUTME: Two-column profile layout: avatar on the left, profile table on the right
// ABOUTME: The only component that writes the rendered profile to standard output

use github_sdk::UserSnapshot;
use github_sdk::constants::urls::GITHUB_DOMAIN;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Modify, Padding, Style, Width};

use crate::constants::labels;
use crate::constants::layout::{
    BLANK_LINES_AFTER, BLANK_LINES_BEFORE, LEFT_COLUMN_WIDTH, MIN_WRAP_WIDTH, PLACEHOLDER_ROWS,
    RIGHT_COLUMN_PADDING,
};
use crate::rendering::RenderableVisual;

/// `<login>@github.com`
pub fn header_line(login: &str) -> String {
    format!("{}@{}", login, GITHUB_DOMAIN)
}

/// Dashes matching the header's character count
pub fn underline(header: &str) -> String {
    "-".repeat(header.chars().count())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelColor {
    Blue,
    Yellow,
    Green,
    Red,
}

pub struct LayoutComposer {
    use_color: bool,
    terminal_width: Option<usize>,
}

impl LayoutComposer {
    /// Composer that never wraps; see `with_terminal_width`
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            terminal_width: None,
        }
    }

    pub fn with_terminal_width(mut self, terminal_width: Option<usize>) -> Self {
        self.terminal_width = terminal_width;
        self
    }

    /// Write the complete profile block, surrounding blank lines included
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        snapshot: &UserSnapshot,
        visual: &RenderableVisual,
    ) -> io::Result<()> {
        out.write_all(self.compose(snapshot, visual).as_bytes())?;
        out.flush()
    }

    pub fn compose(&self, snapshot: &UserSnapshot, visual: &RenderableVisual) -> String {
        let left = self.left_column(visual);
        let right = self.right_column(snapshot);
        let rows = left.len().max(right.len());

        let mut builder = Builder::default();
        for i in 0..rows {
            builder.push_record([
                left.get(i).cloned().unwrap_or_default(),
                right.get(i).cloned().unwrap_or_default(),
            ]);
        }

        let mut grid = builder.build();
        grid.with(Style::empty())
            .with(Padding::new(0, 0, 0, 0))
            .with(Modify::new(Columns::first()).with(Width::increase(LEFT_COLUMN_WIDTH)))
            .with(
                Modify::new(Columns::new(1..)).with(Padding::new(RIGHT_COLUMN_PADDING, 0, 0, 0)),
            );

        let mut output = "\n".repeat(BLANK_LINES_BEFORE);
        for line in grid.to_string().lines() {
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output.push_str(&"\n".repeat(BLANK_LINES_AFTER));
        output
    }

    fn left_column(&self, visual: &RenderableVisual) -> Vec<String> {
        match visual {
            RenderableVisual::GlyphArt(grid) => grid.render_lines(self.use_color),
            // The helper already drew the image over these rows
            RenderableVisual::InlinePlaceholder => vec![String::new(); PLACEHOLDER_ROWS],
            RenderableVisual::Empty => Vec::new(),
        }
    }

    fn right_column(&self, snapshot: &UserSnapshot) -> Vec<String> {
        let header = header_line(&snapshot.profile.login);
        let rule = underline(&header);
        let mut lines = vec![header, rule];
        lines.extend(self.profile_table(snapshot).lines().map(str::to_string));
        lines
    }

    fn profile_table(&self, snapshot: &UserSnapshot) -> String {
        let profile = &snapshot.profile;
        let login = if self.use_color {
            profile.login.bold().to_string()
        } else {
            profile.login.clone()
        };

        let rows = [
            (labels::USERNAME, LabelColor::Blue, login),
            (
                labels::REPOS,
                LabelColor::Yellow,
                profile.public_repos.to_string(),
            ),
            (
                labels::BIO,
                LabelColor::Green,
                profile
                    .bio
                    .clone()
                    .unwrap_or_else(|| labels::BIO_PLACEHOLDER.to_string()),
            ),
            (
                labels::FROM,
                LabelColor::Red,
                profile
                    .location
                    .clone()
                    .unwrap_or_else(|| labels::LOCATION_PLACEHOLDER.to_string()),
            ),
            (
                labels::FOLLOWERS,
                LabelColor::Red,
                profile.followers.to_string(),
            ),
            (
                labels::FOLLOWING,
                LabelColor::Blue,
                profile.following.to_string(),
            ),
            (
                labels::STARRED,
                LabelColor::Yellow,
                snapshot.starred.to_string(),
            ),
        ];

        let label_width = rows
            .iter()
            .map(|(label, _, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut builder = Builder::default();
        for (label, color, value) in rows {
            builder.push_record([self.paint(label, color), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::empty())
            .with(Padding::new(0, 0, 0, 0))
            .with(Modify::new(Columns::new(1..)).with(Padding::new(1, 0, 0, 0)));

        if let Some(value_width) = self.value_column_width(label_width) {
            table.with(Modify::new(Columns::new(1..)).with(Width::wrap(value_width)));
        }

        table.to_string()
    }

    /// Cells left for values once the avatar column, padding and labels are placed
    fn value_column_width(&self, label_width: usize) -> Option<usize> {
        let terminal_width = self.terminal_width?;
        let used = LEFT_COLUMN_WIDTH + RIGHT_COLUMN_PADDING + label_width + 1;
        let available = terminal_width.checked_sub(used)?;
        (available >= MIN_WRAP_WIDTH).then_some(available)
    }

    fn paint(&self, label: &str, color: LabelColor) -> String {
        if !self.use_color {
            return label.to_string();
        }
        match color {
            LabelColor::Blue => label.blue().to_string(),
            LabelColor::Yellow => label.yellow().to_string(),
            LabelColor::Green => label.green().to_string(),
            LabelColor::Red => label.red().to_string(),
        }
    }
}
