//! Text measurement and line breaking for focuskit.
//!
//! Renderers never shape glyphs themselves; they ask a [`TextMeasurer`] how
//! wide a run of text is and how tall one line is, and [`wrap_text`] turns
//! that into greedily packed, clamped, end-ellipsized lines.

mod cosmic;
pub mod tests;
mod wrap;

pub use cosmic::CosmicMeasurer;
pub use wrap::{ELLIPSIS, TextLine, WrappedText, ellipsize_line, wrap_text};

use focuskit_core::TextPaint;
use unicode_segmentation::UnicodeSegmentation;

/// Text measurement primitive provided by the platform.
pub trait TextMeasurer {
    /// Advance width of `text` laid out on a single line.
    fn text_width(&self, text: &str, paint: &TextPaint) -> f32;
    /// Distance between consecutive baselines.
    fn line_height(&self, paint: &TextPaint) -> f32;
}

/// Estimates widths from the grapheme count; no font access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxMeasurer {
    /// Advance of one grapheme, as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line spacing, as a multiple of the font size.
    pub line_height_ratio: f32,
}

impl Default for ApproxMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.3,
        }
    }
}

impl ApproxMeasurer {
    pub fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }
}

impl TextMeasurer for ApproxMeasurer {
    fn text_width(&self, text: &str, paint: &TextPaint) -> f32 {
        text.graphemes(true).count() as f32 * paint.size_px * self.advance_ratio
    }

    fn line_height(&self, paint: &TextPaint) -> f32 {
        paint.size_px * self.line_height_ratio
    }
}
