use std::rc::Rc;

use focuskit_core::{
    Canvas, Coordinates, HorizontalAlignment, LayoutError, MeasuredSize, Paddings,
    ResourceProvider, StyleToken, TextPaint, TraceEvent, Vec2, VerticalAlignment,
};
use focuskit_text::{TextMeasurer, WrappedText, wrap_text};

use crate::position::{horizontal_position, vertical_position};
use crate::{LayoutInputs, LayoutRenderer, RenderContext};

/// Appearance pair for one text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub focused: StyleToken,
    pub unfocused: StyleToken,
}

impl TextStyle {
    pub const fn new(focused: StyleToken, unfocused: StyleToken) -> Self {
        Self { focused, unfocused }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextStyles {
    pub title: TextStyle,
    pub subtitle: TextStyle,
}

impl Default for TextStyles {
    fn default() -> Self {
        Self {
            title: TextStyle::new(
                StyleToken("TextAppearance.PC.Title.Focused"),
                StyleToken("TextAppearance.PC.Title.Unfocused"),
            ),
            subtitle: TextStyle::new(
                StyleToken("TextAppearance.PC.Subtitle.Focused"),
                StyleToken("TextAppearance.PC.Subtitle.Unfocused"),
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlockState {
    pub title: String,
    pub subtitle: String,
    /// Gap between title and subtitle, used only when both are present.
    pub spacing_px: i32,
    pub max_title_lines: usize,
    pub max_subtitle_lines: usize,
    pub is_focused: bool,
    pub paddings: Paddings,
    pub vertical_alignment: VerticalAlignment,
    pub horizontal_alignment: HorizontalAlignment,
}

impl Default for TextBlockState {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            spacing_px: 0,
            max_title_lines: 1,
            max_subtitle_lines: 1,
            is_focused: false,
            paddings: Paddings::ZERO,
            vertical_alignment: VerticalAlignment::Top,
            horizontal_alignment: HorizontalAlignment::Left,
        }
    }
}

impl TextBlockState {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Paints {
    title_focused: TextPaint,
    title_unfocused: TextPaint,
    subtitle_focused: TextPaint,
    subtitle_unfocused: TextPaint,
}

impl Paints {
    fn resolve(styles: &TextStyles, resources: &dyn ResourceProvider) -> Self {
        let paint = |token: StyleToken| {
            resources.text_appearance(token).unwrap_or_else(|| {
                log::debug!("text appearance `{token}` not found, using default paint");
                TextPaint::default()
            })
        };
        Self {
            title_focused: paint(styles.title.focused),
            title_unfocused: paint(styles.title.unfocused),
            subtitle_focused: paint(styles.subtitle.focused),
            subtitle_unfocused: paint(styles.subtitle.unfocused),
        }
    }

    fn title(&self, focused: bool) -> &TextPaint {
        if focused {
            &self.title_focused
        } else {
            &self.title_unfocused
        }
    }

    fn subtitle(&self, focused: bool) -> &TextPaint {
        if focused {
            &self.subtitle_focused
        } else {
            &self.subtitle_unfocused
        }
    }
}

/// Stacked title and optional subtitle, each wrapped to the content width,
/// clamped to its own line cap and end-ellipsized.
pub struct TextBlockRenderer {
    ctx: RenderContext,
    resources: Rc<dyn ResourceProvider>,
    measurer: Rc<dyn TextMeasurer>,
    state: TextBlockState,
    styles: TextStyles,
    paints: Paints,
    title: WrappedText,
    subtitle: WrappedText,
    layout: LayoutInputs,
    coordinates: Coordinates,
}

impl TextBlockRenderer {
    pub fn new(
        ctx: RenderContext,
        resources: Rc<dyn ResourceProvider>,
        measurer: Rc<dyn TextMeasurer>,
        state: TextBlockState,
    ) -> Self {
        let styles = TextStyles::default();
        let paints = Paints::resolve(&styles, resources.as_ref());
        Self {
            ctx,
            resources,
            measurer,
            state,
            styles,
            paints,
            title: WrappedText::default(),
            subtitle: WrappedText::default(),
            layout: LayoutInputs::default(),
            coordinates: Coordinates::default(),
        }
    }

    pub fn text_styles(&self) -> TextStyles {
        self.styles
    }

    /// Replaces the appearance tokens and re-resolves the four paints.
    pub fn update_text_styles(&mut self, f: impl FnOnce(TextStyles) -> TextStyles) {
        let styles = f(self.styles);
        if styles == self.styles {
            return;
        }
        self.styles = styles;
        self.paints = Paints::resolve(&self.styles, self.resources.as_ref());
        log::trace!("text block: styles replaced");
        self.ctx.invalidate();
    }

    /// Title lines from the last measure.
    pub fn title_layout(&self) -> &WrappedText {
        &self.title
    }

    /// Subtitle lines from the last measure; empty without a subtitle.
    pub fn subtitle_layout(&self) -> &WrappedText {
        &self.subtitle
    }

    /// Moves the block inside new parent extents without re-wrapping.
    pub fn place_in(&mut self, parent_width: i32, parent_height: i32) {
        self.layout.parent_width = parent_width;
        self.layout.parent_height = parent_height;
        self.coordinates = self.block_coordinates();
    }

    /// Height of title, spacing and subtitle wrapped at `width`, paddings
    /// excluded.
    pub fn content_height(&self, width: i32) -> Result<i32, LayoutError> {
        if !self.state.has_title() {
            return Err(LayoutError::MissingTitle);
        }
        let (title, subtitle) = self.wrap(width);
        Ok(self.stacked_height(&title, &subtitle))
    }

    /// Widest unwrapped text plus horizontal paddings, never narrower than the
    /// last desired width.
    pub fn optimal_width(&self) -> i32 {
        let focused = self.state.is_focused;
        let pad = self.state.paddings.horizontal();
        let mut widest = 0;
        if self.state.has_title() {
            let w = self
                .measurer
                .text_width(&self.state.title, self.paints.title(focused));
            widest = widest.max(w.ceil() as i32 + pad);
        }
        if self.state.has_subtitle() {
            let w = self
                .measurer
                .text_width(&self.state.subtitle, self.paints.subtitle(focused));
            widest = widest.max(w.ceil() as i32 + pad);
        }
        widest.max(self.layout.desired_width)
    }

    fn wrap(&self, width: i32) -> (WrappedText, WrappedText) {
        let focused = self.state.is_focused;
        let max_width = width as f32;
        let title = wrap_text(
            &self.state.title,
            max_width,
            self.state.max_title_lines,
            self.paints.title(focused),
            self.measurer.as_ref(),
        );
        let subtitle = if self.state.has_subtitle() {
            wrap_text(
                &self.state.subtitle,
                max_width,
                self.state.max_subtitle_lines,
                self.paints.subtitle(focused),
                self.measurer.as_ref(),
            )
        } else {
            WrappedText::default()
        };
        (title, subtitle)
    }

    fn spacing_between(&self, title: &WrappedText, subtitle: &WrappedText) -> i32 {
        if title.is_empty() || subtitle.is_empty() {
            0
        } else {
            self.state.spacing_px
        }
    }

    fn stacked_height(&self, title: &WrappedText, subtitle: &WrappedText) -> i32 {
        title.height().ceil() as i32
            + self.spacing_between(title, subtitle)
            + subtitle.height().ceil() as i32
    }

    fn block_coordinates(&self) -> Coordinates {
        let width = self.title.width().max(self.subtitle.width()).ceil() as i32;
        let height = self.stacked_height(&self.title, &self.subtitle);
        let x = horizontal_position(
            self.layout.parent_width,
            width,
            self.state.horizontal_alignment,
            &self.state.paddings,
        );
        let y = vertical_position(
            self.layout.parent_height,
            height,
            self.state.vertical_alignment,
            &self.state.paddings,
        );
        Coordinates::from_origin(x, y, width, height)
    }
}

impl LayoutRenderer for TextBlockRenderer {
    type State = TextBlockState;

    fn name(&self) -> &'static str {
        "text"
    }

    fn state(&self) -> TextBlockState {
        self.state.clone()
    }

    fn update_state<F>(&mut self, f: F)
    where
        F: FnOnce(TextBlockState) -> TextBlockState,
    {
        let next = f(self.state.clone());
        if next == self.state {
            return;
        }
        self.state = next;
        self.ctx
            .tracer
            .emit(|| TraceEvent::StateChanged { renderer: "text" });
        self.ctx.invalidate();
    }

    fn measure(
        &mut self,
        desired_width: i32,
        desired_height: i32,
        parent_width: i32,
        parent_height: i32,
    ) -> Result<MeasuredSize, LayoutError> {
        if !self.state.has_title() {
            return Err(LayoutError::MissingTitle);
        }
        self.layout = LayoutInputs {
            desired_width,
            desired_height,
            parent_width,
            parent_height,
        };
        let (title, subtitle) = self.wrap(desired_width);
        self.title = title;
        self.subtitle = subtitle;
        self.coordinates = self.block_coordinates();

        let paddings = self.state.paddings;
        let size = MeasuredSize::new(
            desired_width + paddings.horizontal(),
            self.stacked_height(&self.title, &self.subtitle) + paddings.vertical(),
        );
        log::trace!(
            "text block: {} title line(s), {} subtitle line(s), size {size:?}",
            self.title.line_count(),
            self.subtitle.line_count()
        );
        self.ctx.tracer.emit(|| TraceEvent::Measured {
            renderer: "text",
            size,
        });
        Ok(size)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let focused = self.state.is_focused;
        let x = self.coordinates.left as f32;
        let mut y = self.coordinates.top as f32;

        let title_paint = self.paints.title(focused);
        for (i, line) in self.title.lines.iter().enumerate() {
            let origin = Vec2 {
                x,
                y: y + i as f32 * self.title.line_height,
            };
            canvas.draw_text_line(&line.text, origin, title_paint);
        }

        if !self.subtitle.is_empty() {
            y += (self.title.height().ceil() as i32 + self.spacing_between(&self.title, &self.subtitle))
                as f32;
            let subtitle_paint = self.paints.subtitle(focused);
            for (i, line) in self.subtitle.lines.iter().enumerate() {
                let origin = Vec2 {
                    x,
                    y: y + i as f32 * self.subtitle.line_height,
                };
                canvas.draw_text_line(&line.text, origin, subtitle_paint);
            }
        }

        self.ctx.tracer.emit(|| TraceEvent::Drawn {
            renderer: "text",
            coordinates: self.coordinates,
        });
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
