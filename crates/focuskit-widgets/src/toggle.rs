use focuskit_core::{
    Canvas, Host, HorizontalAlignment, LayoutError, MeasureSpec, MeasuredSize, Paddings,
    VerticalAlignment,
};
use focuskit_render::{
    ImageRenderer, ImageState, LayoutRenderer, RectangleRenderer, RectangleState,
    TextBlockRenderer, TextBlockState,
};

use crate::{CanvasWidget, ToggleIcons, WidgetContext};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub title: String,
    pub subtitle: String,
    pub is_focused: bool,
    pub is_checked: bool,
}

/// Settings row with a title, optional subtitle and a trailing switch icon.
pub struct ToggleRow {
    ctx: WidgetContext,
    state: ToggleState,
    icons: ToggleIcons,
    card: RectangleRenderer,
    text: TextBlockRenderer,
    switch: ImageRenderer,
    on_toggle: Option<Box<dyn FnMut(bool)>>,
}

fn text_state(state: &ToggleState, base: TextBlockState) -> TextBlockState {
    TextBlockState {
        title: state.title.clone(),
        subtitle: state.subtitle.clone(),
        is_focused: state.is_focused,
        ..base
    }
}

fn switch_state(state: &ToggleState, icons: &ToggleIcons, base: ImageState) -> ImageState {
    let (focused, unfocused) = icons.pair(state.is_checked);
    ImageState {
        focused_resource: Some(focused),
        unfocused_resource: Some(unfocused),
        is_focused: state.is_focused,
        ..base
    }
}

impl ToggleRow {
    pub fn new(ctx: WidgetContext, state: ToggleState) -> Self {
        Self::with_icons(ctx, state, ToggleIcons::default())
    }

    pub fn with_icons(ctx: WidgetContext, state: ToggleState, icons: ToggleIcons) -> Self {
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
                    paddings: Paddings::new(
                        cfg.vertical_padding,
                        cfg.toggle_title_padding_right,
                        cfg.vertical_padding,
                        cfg.horizontal_padding,
                    ),
                    ..TextBlockState::default()
                },
            ),
        );
        let switch = ImageRenderer::new(
            ctx.render_context(),
            ctx.resources.clone(),
            switch_state(
                &state,
                &icons,
                ImageState {
                    paddings: Paddings::new(0, cfg.horizontal_padding, 0, 0),
                    vertical_alignment: VerticalAlignment::Center,
                    horizontal_alignment: HorizontalAlignment::Right,
                    ..ImageState::default()
                },
            ),
        );
        Self {
            ctx,
            state,
            icons,
            card,
            text,
            switch,
            on_toggle: None,
        }
    }

    /// Called with the new checked value after every click.
    pub fn set_on_toggle(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_toggle = Some(Box::new(listener));
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked
    }

    pub fn update_state(&mut self, f: impl FnOnce(ToggleState) -> ToggleState) {
        let next = f(self.state.clone());
        if next == self.state {
            return;
        }
        self.state = next;
        log::debug!(
            "toggle {:?}: focused={} checked={}",
            self.state.title,
            self.state.is_focused,
            self.state.is_checked
        );

        let state = &self.state;
        self.card.update_state(|s| RectangleState {
            is_focused: state.is_focused,
            ..s
        });
        self.text.update_state(|s| text_state(state, s));
        self.switch
            .update_state(|s| switch_state(state, &self.icons, s));
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.update_state(|s| ToggleState {
            is_checked: checked,
            ..s
        });
    }

    pub fn background(&self) -> &RectangleRenderer {
        &self.card
    }

    pub fn switch(&self) -> &ImageRenderer {
        &self.switch
    }
}

impl CanvasWidget for ToggleRow {
    fn host(&self) -> &dyn Host {
        self.ctx.host.as_ref()
    }

    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<MeasuredSize, LayoutError> {
        let cfg = self.ctx.config.clone();
        let content_height = self.text.content_height(cfg.toggle_title_width)?;
        let text = self.text.measure(
            cfg.toggle_title_width,
            content_height,
            cfg.toggle_view_width,
            cfg.toggle_view_height,
        )?;
        let card = self.card.measure(
            cfg.toggle_view_width,
            text.height,
            cfg.toggle_view_width,
            cfg.toggle_view_height,
        )?;
        self.switch.measure(
            cfg.toggle_icon_width,
            cfg.toggle_icon_height,
            card.width,
            card.height,
        )?;
        // The scaled card box starts at a negative origin.
        self.switch.place_in(self.card.coordinates());
        Ok(self.ctx.resolve(card, width, height))
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.card.draw(canvas);
        self.text.draw(canvas);
        self.switch.draw(canvas);
    }

    fn on_focus_change(&mut self, focused: bool) {
        self.update_state(|s| ToggleState {
            is_focused: focused,
            ..s
        });
    }

    fn on_click(&mut self) {
        let checked = !self.state.is_checked;
        self.set_checked(checked);
        if let Some(listener) = self.on_toggle.as_mut() {
            listener(checked);
        }
    }
}
