use focuskit_core::TextPaint;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::TextMeasurer;

pub const ELLIPSIS: &str = "\u{2026}";

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
}

/// Result of wrapping one text block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WrappedText {
    pub lines: SmallVec<[TextLine; 2]>,
    /// The last visible line was cut and ends in an ellipsis.
    pub ellipsized: bool,
    pub line_height: f32,
}

impl WrappedText {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Widest visible line.
    pub fn width(&self) -> f32 {
        self.lines.iter().map(|l| l.width).fold(0.0, f32::max)
    }
}

/// Greedily packs whitespace-separated words into lines no wider than
/// `max_width`, keeps at most `max_lines` (at least one), and end-ellipsizes
/// the last kept line when text was left over or that line is too wide.
///
/// A single word wider than `max_width` occupies a line of its own. A
/// non-positive width or blank text yields no lines.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    max_lines: usize,
    paint: &TextPaint,
    measurer: &dyn TextMeasurer,
) -> WrappedText {
    let line_height = measurer.line_height(paint);
    let mut out = WrappedText {
        line_height,
        ..WrappedText::default()
    };
    if max_width <= 0.0 {
        return out;
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measurer.text_width(&candidate, paint) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        return out;
    }

    let max_lines = max_lines.max(1);
    let mut overflowed = false;
    if lines.len() > max_lines {
        // The last visible line carries the rest of the text, then gets cut.
        let rest = lines.split_off(max_lines - 1).join(" ");
        lines.push(rest);
        overflowed = true;
    }

    let last = lines.len() - 1;
    for (i, line) in lines.into_iter().enumerate() {
        let width = measurer.text_width(&line, paint);
        if i == last && (overflowed || width > max_width) {
            let text = ellipsize_line(&line, max_width, paint, measurer);
            let width = measurer.text_width(&text, paint);
            out.lines.push(TextLine { text, width });
            out.ellipsized = true;
        } else {
            out.lines.push(TextLine { text: line, width });
        }
    }
    out
}

/// Drops trailing graphemes from `line` until it plus an ellipsis fits in
/// `max_width`. Returns the bare ellipsis when nothing else fits.
pub fn ellipsize_line(
    line: &str,
    max_width: f32,
    paint: &TextPaint,
    measurer: &dyn TextMeasurer,
) -> String {
    let cuts = line
        .grapheme_indices(true)
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect::<Vec<_>>();

    for &end in cuts.iter().rev() {
        let candidate = format!("{}{ELLIPSIS}", line[..end].trim_end());
        if measurer.text_width(&candidate, paint) <= max_width {
            return candidate;
        }
    }
    ELLIPSIS.to_string()
}
