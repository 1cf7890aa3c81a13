#[cfg(test)]
mod tests {
    use crate::*;
    use focuskit_core::TextPaint;

    // 10px per grapheme, 20px lines.
    fn fixed() -> (ApproxMeasurer, TextPaint) {
        (
            ApproxMeasurer::new(1.0, 2.0),
            TextPaint {
                size_px: 10.0,
                ..TextPaint::default()
            },
        )
    }

    fn texts(w: &WrappedText) -> Vec<&str> {
        w.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_single_line_fits() {
        let (m, paint) = fixed();
        let w = wrap_text("Settings", 200.0, 1, &paint, &m);
        assert_eq!(texts(&w), vec!["Settings"]);
        assert!(!w.ellipsized);
        assert_eq!(w.height(), 20.0);
        assert_eq!(w.width(), 80.0);
    }

    #[test]
    fn test_overflowing_word_moves_to_next_line() {
        let (m, paint) = fixed();
        // "alpha beta gamma" is 160px; the last word does not fit in 110px.
        let w = wrap_text("alpha beta gamma", 110.0, 2, &paint, &m);
        assert_eq!(texts(&w), vec!["alpha beta", "gamma"]);
        assert!(!w.ellipsized);
        assert_eq!(w.height(), 40.0);
    }

    #[test]
    fn test_clamps_to_max_lines_and_ellipsizes_last() {
        let (m, paint) = fixed();
        let w = wrap_text("alpha beta gamma", 60.0, 2, &paint, &m);
        assert_eq!(texts(&w), vec!["alpha", "beta\u{2026}"]);
        assert!(w.ellipsized);
        assert_eq!(w.line_count(), 2);
    }

    #[test]
    fn test_long_word_is_one_line() {
        let (m, paint) = fixed();
        let w = wrap_text("Supercalifragilistic ok", 100.0, 3, &paint, &m);
        assert_eq!(texts(&w), vec!["Supercalifragilistic", "ok"]);
        assert!(!w.ellipsized);

        let alone = wrap_text("Supercalifragilistic", 100.0, 3, &paint, &m);
        assert_eq!(texts(&alone), vec!["Supercali\u{2026}"]);
        assert!(alone.ellipsized);
    }

    #[test]
    fn test_degenerate_inputs_yield_nothing() {
        let (m, paint) = fixed();
        assert!(wrap_text("Settings", 0.0, 1, &paint, &m).is_empty());
        assert!(wrap_text("Settings", -5.0, 1, &paint, &m).is_empty());
        assert!(wrap_text("   ", 100.0, 1, &paint, &m).is_empty());
        assert_eq!(wrap_text("", 100.0, 1, &paint, &m).height(), 0.0);
    }

    #[test]
    fn test_zero_max_lines_keeps_one() {
        let (m, paint) = fixed();
        let w = wrap_text("alpha beta", 60.0, 0, &paint, &m);
        assert_eq!(texts(&w), vec!["alpha\u{2026}"]);
    }

    #[test]
    fn test_ellipsize_respects_graphemes() {
        let (m, paint) = fixed();
        // "e\u{301}" is one grapheme; it must never be split.
        let s = ellipsize_line("cafe\u{301}s", 50.0, &paint, &m);
        assert_eq!(s, "cafe\u{301}\u{2026}");
        assert_eq!(ellipsize_line("abc", 5.0, &paint, &m), ELLIPSIS);
    }

    #[test]
    fn test_approx_measurer_defaults() {
        let m = ApproxMeasurer::default();
        let paint = TextPaint {
            size_px: 10.0,
            ..TextPaint::default()
        };
        assert!((m.text_width("abcde", &paint) - 30.0).abs() < 1e-4);
        assert!((m.line_height(&paint) - 13.0).abs() < 1e-4);
    }
}
