use std::fmt::Write as _;

use crate::{Color, Drawable, DrawableId, Rect, TextPaint, Vec2};

/// Drawing surface handed to `draw`. Coordinates are local to the widget;
/// the surface clips at its own bounds.
pub trait Canvas {
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);
    /// Draws one already-wrapped line with its top-left corner at `origin`.
    fn draw_text_line(&mut self, text: &str, origin: Vec2, paint: &TextPaint);
    fn draw_drawable(&mut self, drawable: &Drawable, bounds: Rect);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        paint: TextPaint,
    },
    Drawable {
        id: DrawableId,
        bounds: Rect,
    },
}

/// Canvas that records commands instead of rasterizing them; replay them on a
/// real surface or inspect them in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// One line per command, stable enough to diff.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::RoundRect {
                    rect,
                    radius,
                    color,
                } => {
                    let _ = writeln!(
                        out,
                        "rect {},{} {}x{} r={} {}",
                        rect.x,
                        rect.y,
                        rect.w,
                        rect.h,
                        radius,
                        hex(*color)
                    );
                }
                DrawCommand::Text { text, pos, paint } => {
                    let _ = writeln!(
                        out,
                        "text {:?} @{},{} {}px {}",
                        text,
                        pos.x,
                        pos.y,
                        paint.size_px,
                        hex(paint.color)
                    );
                }
                DrawCommand::Drawable { id, bounds } => {
                    let _ = writeln!(
                        out,
                        "image {} {},{} {}x{}",
                        id, bounds.x, bounds.y, bounds.w, bounds.h
                    );
                }
            }
        }
        out
    }
}

fn hex(c: Color) -> String {
    format!("#{:02X}{:02X}{:02X}{:02X}", c.0, c.1, c.2, c.3)
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius: radius.max(0.0),
            color,
        });
    }

    fn draw_text_line(&mut self, text: &str, origin: Vec2, paint: &TextPaint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos: origin,
            paint: *paint,
        });
    }

    fn draw_drawable(&mut self, drawable: &Drawable, bounds: Rect) {
        self.commands.push(DrawCommand::Drawable {
            id: drawable.id,
            bounds,
        });
    }
}
