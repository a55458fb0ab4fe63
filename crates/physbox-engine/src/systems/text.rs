//! Text measurement and rasterization.
//!
//! Glyph rendering belongs to the host. The engine only needs to know how big
//! a piece of text will be (to size physics boxes around labels) and which
//! atlas cells to sample, so a `TextRasterizer` turns a string into a
//! `TextImage` carrying exactly that.
//!
//! Font atlases are grids of glyphs laid out in ASCII order, typically
//! 16 columns × 6 rows for printable ASCII (32-127).

use serde::Serialize;

/// Configuration for a bitmap font atlas.
///
/// The atlas is a grid of character glyphs laid out in ASCII order,
/// starting from `start_char` (typically 32 = space).
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as fraction of character size (e.g., 0.55 for tight, 1.0 for monospace).
    pub spacing: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 6,
            start_char: 32, // space
            spacing: 0.55,
        }
    }
}

impl FontConfig {
    /// Set the character spacing.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Convert an ASCII character to grid coordinates (col, row) in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(u32, u32)> {
    let ascii = c as u32;
    let start = font.start_char as u32;

    if ascii < start {
        return None;
    }

    let index = ascii - start;
    if index >= font.cols * font.rows {
        return None;
    }

    Some((index % font.cols, index / font.cols))
}

/// One glyph of a rasterized string: its atlas cell and its left edge,
/// relative to the image's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphCell {
    pub col: u32,
    pub row: u32,
    pub x: f32,
}

/// A string laid out at a given size. Width and height are the bounds the
/// host will fill when it draws the image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextImage {
    pub text: String,
    pub font_size: u32,
    pub width: f32,
    pub height: f32,
    pub glyphs: Vec<GlyphCell>,
}

/// Turns text into a sized image. Implemented by the host's font backend.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str, font_size: u32) -> TextImage;
}

/// Fixed-advance rasterizer over a bitmap font atlas.
#[derive(Debug, Clone, Default)]
pub struct AtlasText {
    pub font: FontConfig,
}

impl AtlasText {
    pub fn new(font: FontConfig) -> Self {
        Self { font }
    }
}

impl TextRasterizer for AtlasText {
    fn rasterize(&self, text: &str, font_size: u32) -> TextImage {
        let size = font_size as f32;
        let advance = size * self.font.spacing;
        let mut glyphs = Vec::with_capacity(text.len());
        let mut cursor_x = 0.0;
        let mut count = 0usize;

        for c in text.chars() {
            if let Some((col, row)) = char_to_grid(c, &self.font) {
                glyphs.push(GlyphCell { col, row, x: cursor_x });
            }
            // Always advance cursor (even for skipped chars, to preserve spacing)
            cursor_x += advance;
            count += 1;
        }

        TextImage {
            text: text.to_owned(),
            font_size,
            width: count as f32 * advance,
            height: size,
            glyphs,
        }
    }
}
