//! Font facilities consumed by the compositor.
//!
//! The compositor never rasterizes anything itself. It asks a font how wide a
//! run is and how tall a line is, then hands the run back to the font to draw.
//! The same two traits describe both the text font and the button font.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::primitives::{Color, Point};

/// Measurement half of a sprite font.
pub trait FontMetrics {
    /// Unscaled horizontal extent of `text`.
    fn measure(&self, text: &str) -> f32;

    /// Unscaled vertical advance of one line.
    fn line_spacing(&self) -> f32;
}

/// A font that can also draw.
pub trait GlyphFont: FontMetrics {
    /// Draw `text` with its top-left corner at `position`, uniformly scaled.
    fn draw(&mut self, text: &str, position: Point, color: Color, scale: f32);
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn line_spacing(&self) -> f32 {
        (**self).line_spacing()
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for &mut F {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn line_spacing(&self) -> f32 {
        (**self).line_spacing()
    }
}

impl<F: GlyphFont + ?Sized> GlyphFont for &mut F {
    fn draw(&mut self, text: &str, position: Point, color: Color, scale: f32) {
        (**self).draw(text, position, color, scale)
    }
}

/// Metrics for a font whose glyphs share one advance width, with optional
/// per-character exceptions.
///
/// Good enough for bitmap fonts and for the controller button font, where
/// every icon is laid out on the same cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvanceFont {
    /// Advance of any character without an override.
    pub advance: f32,
    /// Vertical advance of one line.
    pub line_spacing: f32,
    /// Per-character advance overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<char, f32>,
}

impl FixedAdvanceFont {
    pub fn new(advance: f32, line_spacing: f32) -> Self {
        Self {
            advance,
            line_spacing,
            overrides: BTreeMap::new(),
        }
    }

    /// Builder-style per-character override.
    pub fn with_override(mut self, ch: char, advance: f32) -> Self {
        self.overrides.insert(ch, advance);
        self
    }

    /// Advance of a single character.
    #[inline]
    pub fn advance_of(&self, ch: char) -> f32 {
        self.overrides.get(&ch).copied().unwrap_or(self.advance)
    }
}

impl Default for FixedAdvanceFont {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl FontMetrics for FixedAdvanceFont {
    fn measure(&self, text: &str) -> f32 {
        text.chars().map(|c| self.advance_of(c)).sum()
    }

    fn line_spacing(&self) -> f32 {
        self.line_spacing
    }
}
