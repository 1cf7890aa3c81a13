use std::rc::Rc;

use focuskit_core::{
    AnimationDriver, Canvas, Host, LayoutError, MeasureSpec, MeasuredSize, ResourceProvider,
    Tracer,
};
use focuskit_render::{RectangleRenderer, RectangleState, RenderContext};
use focuskit_text::TextMeasurer;

use crate::WidgetConfig;

/// Collaborators every widget is built from.
#[derive(Clone)]
pub struct WidgetContext {
    pub host: Rc<dyn Host>,
    pub resources: Rc<dyn ResourceProvider>,
    pub measurer: Rc<dyn TextMeasurer>,
    pub driver: Rc<dyn AnimationDriver>,
    pub config: Rc<WidgetConfig>,
    pub tracer: Tracer,
}

impl WidgetContext {
    pub fn new(
        host: Rc<dyn Host>,
        resources: Rc<dyn ResourceProvider>,
        measurer: Rc<dyn TextMeasurer>,
        driver: Rc<dyn AnimationDriver>,
    ) -> Self {
        Self {
            host,
            resources,
            measurer,
            driver,
            config: Rc::new(WidgetConfig::default()),
            tracer: Tracer::none(),
        }
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = Rc::new(config);
        self
    }

    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub(crate) fn render_context(&self) -> RenderContext {
        RenderContext::new(self.host.clone()).with_tracer(self.tracer.clone())
    }

    /// Card background configured from [`WidgetConfig`].
    pub(crate) fn background(&self, is_focused: bool) -> RectangleRenderer {
        let cfg = &self.config;
        RectangleRenderer::new(
            self.render_context(),
            self.driver.clone(),
            cfg.focus_animation,
            RectangleState {
                corner_radius_px: cfg.corner_radius_px,
                focus_scale_percent: cfg.focus_scale_percent,
                colors: cfg.rectangle_colors(),
                is_focused,
                ..RectangleState::default()
            },
        )
    }

    pub(crate) fn resolve(&self, desired: MeasuredSize, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        MeasuredSize::new(
            self.host.resolve_size(desired.width, width),
            self.host.resolve_size(desired.height, height),
        )
    }
}

/// What the hosting view calls on a custom-drawn widget.
///
/// Focus and input arrive through the `on_*` methods; the widget answers by
/// asking its host for redraws and relayouts.
pub trait CanvasWidget {
    fn host(&self) -> &dyn Host;

    fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<MeasuredSize, LayoutError>;

    /// Paints back to front: background, text, icon.
    fn draw(&self, canvas: &mut dyn Canvas);

    fn on_focus_change(&mut self, focused: bool);

    /// Syncs with whatever focus the host already has.
    fn on_attach(&mut self) {
        let focused = self.host().has_focus();
        self.on_focus_change(focused);
    }

    fn on_click(&mut self) {}

    fn on_pointer_down(&mut self) {
        self.host().request_focus();
    }

    fn on_pointer_up(&mut self) {
        self.on_click();
    }
}
