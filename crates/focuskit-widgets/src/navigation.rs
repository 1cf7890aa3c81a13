use focuskit_core::{
    Canvas, DrawableId, Host, HorizontalAlignment, LayoutError, MeasureSpec, MeasuredSize,
    Paddings, VerticalAlignment,
};
use focuskit_render::{
    ImageRenderer, ImageState, LayoutRenderer, RectangleRenderer, RectangleState,
    TextBlockRenderer, TextBlockState,
};

use crate::config::drawables;
use crate::{CanvasWidget, WidgetContext};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub title: String,
    pub subtitle: String,
    pub is_focused: bool,
}

/// Row that opens another screen: vertically centered text and a trailing
/// arrow.
pub struct NavigationRow {
    ctx: WidgetContext,
    state: NavigationState,
    card: RectangleRenderer,
    text: TextBlockRenderer,
    arrow: ImageRenderer,
}

fn text_state(state: &NavigationState, base: TextBlockState) -> TextBlockState {
    TextBlockState {
        title: state.title.clone(),
        subtitle: state.subtitle.clone(),
        is_focused: state.is_focused,
        ..base
    }
}

impl NavigationRow {
    pub fn new(ctx: WidgetContext, state: NavigationState) -> Self {
        Self::with_arrows(
            ctx,
            state,
            drawables::IMG_RIGHT_ARROW_FOCUSED,
            drawables::IMG_RIGHT_ARROW_UNFOCUSED,
        )
    }

    pub fn with_arrows(
        ctx: WidgetContext,
        state: NavigationState,
        focused_arrow: DrawableId,
        unfocused_arrow: DrawableId,
    ) -> Self {
        let cfg = ctx.config.clone();
        let card = ctx.background(state.is_focused);
        let text = TextBlockRenderer::new(
            ctx.render_context(),
            ctx.resources.clone(),
            ctx.measurer.clone(),
            text_state(
                &state,
                TextBlockState {
                    spacing_px: cfg.title_spacing,
                    max_title_lines: cfg.max_title_lines,
                    max_subtitle_lines: cfg.max_subtitle_lines,
                    paddings: Paddings::symmetric(cfg.vertical_padding, cfg.horizontal_padding),
                    vertical_alignment: VerticalAlignment::Center,
                    ..TextBlockState::default()
                },
            ),
        );
        let arrow = ImageRenderer::new(
            ctx.render_context(),
            ctx.resources.clone(),
            ImageState {
                focused_resource: Some(focused_arrow),
                unfocused_resource: Some(unfocused_arrow),
                is_focused: state.is_focused,
                paddings: Paddings::new(0, cfg.horizontal_padding, 0, 0),
                vertical_alignment: VerticalAlignment::Center,
                horizontal_alignment: HorizontalAlignment::Right,
                ..ImageState::default()
            },
        );
        Self {
            ctx,
            state,
            card,
            text,
            arrow,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn update_state(&mut self, f: impl FnOnce(NavigationState) -> NavigationState) {
        let next = f(self.state.clone());
        if next == self.state {
            return;
        }
        self.state = next;
        log::debug!(
            "navigation {:?}: focused={}",
            self.state.title,
            self.state.is_focused
        );

        let state = &self.state;
        self.card.update_state(|s| RectangleState {
            is_focused: state.is_focused,
            ..s
        });
        self.text.update_state(|s| text_state(state, s));
        self.arrow.update_state(|s| ImageState {
            is_focused: state.is_focused,
            ..s
        });
    }
}

impl CanvasWidget for NavigationRow {
    fn host(&self) -> &dyn Host {
        self.ctx.host.as_ref()
    }

    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<MeasuredSize, LayoutError> {
        let cfg = self.ctx.config.clone();
        let text = self
            .text
            .measure(cfg.navigation_title_width, 0, cfg.navigation_width, 0)?;
        let card = self.card.measure(
            cfg.navigation_width,
            text.height,
            cfg.navigation_width,
            text.height,
        )?;
        // Center the text in the final card height.
        self.text.place_in(card.width, card.height);
        self.arrow.measure(
            cfg.navigation_icon_width,
            cfg.navigation_icon_height,
            cfg.navigation_width,
            card.height,
        )?;
        // The scaled card box starts at a negative origin.
        self.arrow.place_in(self.card.coordinates());
        Ok(self.ctx.resolve(card, width, height))
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.card.draw(canvas);
        self.text.draw(canvas);
        self.arrow.draw(canvas);
    }

    fn on_focus_change(&mut self, focused: bool) {
        self.update_state(|s| NavigationState {
            is_focused: focused,
            ..s
        });
    }
}
