use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use focuskit_core::{TextPaint, Typeface};

use crate::TextMeasurer;

/// Measures by shaping with cosmic-text against the system font database.
pub struct CosmicMeasurer {
    fs: RefCell<FontSystem>,
    line_height_ratio: f32,
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicMeasurer {
    /// Loads the system fonts; call once per host.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    pub fn with_font_system(fs: FontSystem) -> Self {
        Self {
            fs: RefCell::new(fs),
            line_height_ratio: 1.3,
        }
    }

    fn attrs(typeface: Typeface) -> Attrs<'static> {
        let mut attrs = Attrs::new().family(Family::SansSerif);
        if typeface.is_bold() {
            attrs = attrs.weight(Weight::BOLD);
        }
        if typeface.is_italic() {
            attrs = attrs.style(Style::Italic);
        }
        attrs
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn text_width(&self, text: &str, paint: &TextPaint) -> f32 {
        if text.is_empty() || paint.size_px <= 0.0 {
            return 0.0;
        }
        let mut guard = self.fs.borrow_mut();
        let fs = &mut *guard;

        // Unbounded single line; FontSystem and its caches are retained across calls
        let mut buf = Buffer::new(fs, Metrics::new(paint.size_px, self.line_height(paint)));
        {
            let mut b = buf.borrow_with(fs);
            b.set_size(None, None);
            b.set_text(text, &Self::attrs(paint.typeface), Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }

        buf.layout_runs().map(|run| run.line_w).fold(0.0, f32::max)
    }

    fn line_height(&self, paint: &TextPaint) -> f32 {
        paint.size_px * self.line_height_ratio
    }
}
