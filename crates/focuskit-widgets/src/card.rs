use focuskit_core::{Canvas, Host, LayoutError, MeasureSpec, MeasuredSize, Paddings};
use focuskit_render::{
    LayoutRenderer, RectangleRenderer, RectangleState, TextBlockRenderer, TextBlockState,
};

use crate::{CanvasWidget, WidgetContext};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub title: String,
    pub subtitle: String,
    pub is_focused: bool,
}

/// Plain focusable card: background and text, no icon.
pub struct Card {
    ctx: WidgetContext,
    state: CardState,
    card: RectangleRenderer,
    text: TextBlockRenderer,
}

impl Card {
    pub fn new(ctx: WidgetContext, state: CardState) -> Self {
        let cfg = ctx.config.clone();
        let card = ctx.background(state.is_focused);
        let text = TextBlockRenderer::new(
            ctx.render_context(),
            ctx.resources.clone(),
            ctx.measurer.clone(),
            TextBlockState {
                title: state.title.clone(),
                subtitle: state.subtitle.clone(),
                is_focused: state.is_focused,
                spacing_px: cfg.title_spacing,
                max_title_lines: cfg.max_title_lines,
                max_subtitle_lines: cfg.max_subtitle_lines,
                paddings: Paddings::symmetric(cfg.vertical_padding, cfg.horizontal_padding),
                ..TextBlockState::default()
            },
        );
        Self {
            ctx,
            state,
            card,
            text,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn update_state(&mut self, f: impl FnOnce(CardState) -> CardState) {
        let next = f(self.state.clone());
        if next == self.state {
            return;
        }
        self.state = next;

        let state = &self.state;
        self.card.update_state(|s| RectangleState {
            is_focused: state.is_focused,
            ..s
        });
        self.text.update_state(|s| TextBlockState {
            title: state.title.clone(),
            subtitle: state.subtitle.clone(),
            is_focused: state.is_focused,
            ..s
        });
    }
}

impl CanvasWidget for Card {
    fn host(&self) -> &dyn Host {
        self.ctx.host.as_ref()
    }

    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<MeasuredSize, LayoutError> {
        let cfg = self.ctx.config.clone();
        let content_width = cfg.card_width - 2 * cfg.horizontal_padding;
        let text = self
            .text
            .measure(content_width, 0, cfg.card_width, 0)?;
        let card = self
            .card
            .measure(cfg.card_width, text.height, cfg.card_width, text.height)?;
        Ok(self.ctx.resolve(card, width, height))
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.card.draw(canvas);
        self.text.draw(canvas);
    }

    fn on_focus_change(&mut self, focused: bool) {
        self.update_state(|s| CardState {
            is_focused: focused,
            ..s
        });
    }
}
