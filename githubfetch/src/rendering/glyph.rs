// ABOUTME: Character-art approximation of the avatar for terminals without image support
// ABOUTME: Downsamples to a bounded width and pairs pixel rows into half-block glyphs

use image::{DynamicImage, GenericImageView, Rgb};
use owo_colors::OwoColorize;

use super::{ImageAcquirer, RenderError, RenderableVisual};
use crate::constants::glyph::{DEFAULT_MAX_WIDTH, HALF_BLOCK, LUMA_RAMP};

/// One terminal cell covering two vertically stacked pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub glyph: char,
    pub upper: Rgb<u8>,
    pub lower: Rgb<u8>,
}

impl GlyphCell {
    fn luma(&self) -> f64 {
        let luma = |Rgb([r, g, b]): Rgb<u8>| 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
        (luma(self.upper) + luma(self.lower)) / 2.0
    }

    /// Glyph used when colors are unavailable
    fn ramp_glyph(&self) -> char {
        let steps = (LUMA_RAMP.len() - 1) as f64;
        let index = (self.luma() / 255.0 * steps).round() as usize;
        LUMA_RAMP[index.min(LUMA_RAMP.len() - 1)]
    }
}

/// Rectangular grid of glyph cells in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGrid {
    width: usize,
    height: usize,
    cells: Vec<GlyphCell>,
}

impl GlyphGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &[GlyphCell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Render each row to a string exactly `width()` cells wide
    pub fn render_lines(&self, use_color: bool) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|cell| {
                        if use_color {
                            let Rgb([ur, ug, ub]) = cell.upper;
                            let Rgb([lr, lg, lb]) = cell.lower;
                            cell.glyph
                                .truecolor(ur, ug, ub)
                                .on_truecolor(lr, lg, lb)
                                .to_string()
                        } else {
                            cell.ramp_glyph().to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

pub struct GlyphArtRenderer {
    acquirer: ImageAcquirer,
    max_width: u32,
}

impl GlyphArtRenderer {
    pub fn new(acquirer: ImageAcquirer) -> Self {
        Self {
            acquirer,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Download the avatar at `url` and convert it into glyph art
    pub async fn render(&self, url: &str) -> Result<RenderableVisual, RenderError> {
        let bytes = self.acquirer.acquire(url).await?;
        let grid = self.render_bytes(&bytes)?;
        Ok(RenderableVisual::GlyphArt(grid))
    }

    pub fn render_bytes(&self, bytes: &[u8]) -> Result<GlyphGrid, RenderError> {
        let image = image::load_from_memory(bytes)?;
        self.render_image(&image)
    }

    pub fn render_image(&self, image: &DynamicImage) -> Result<GlyphGrid, RenderError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage);
        }

        let (target_width, target_height) = self.target_dimensions(width, height);
        log::debug!(
            "Downsampling avatar from {}x{} to {}x{} pixels",
            width,
            height,
            target_width,
            target_height
        );

        // Area averaging; never upscales because the target fits inside the source
        let pixels = image.thumbnail_exact(target_width, target_height).to_rgb8();

        let rows = target_height.div_ceil(2);
        let mut cells = Vec::with_capacity((target_width * rows) as usize);
        for row in 0..rows {
            let upper_y = row * 2;
            let lower_y = (upper_y + 1).min(target_height - 1);
            for x in 0..target_width {
                cells.push(GlyphCell {
                    glyph: HALF_BLOCK,
                    upper: *pixels.get_pixel(x, upper_y),
                    lower: *pixels.get_pixel(x, lower_y),
                });
            }
        }

        Ok(GlyphGrid {
            width: target_width as usize,
            height: rows as usize,
            cells,
        })
    }

    /// Pixel size after downsampling: width capped at the bound, aspect ratio kept
    fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let target_width = width.min(self.max_width);
        let scaled = (target_width as f64 * height as f64 / width as f64).round() as u32;
        (target_width, scaled.clamp(1, height))
    }
}
