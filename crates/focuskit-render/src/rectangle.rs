use std::cell::RefCell;
use std::rc::{Rc, Weak};

use focuskit_core::{
    AnimationDriver, AnimationSpec, Canvas, Color, Coordinates, LayoutError, MeasuredSize,
    TraceEvent, TweenHandle, TweenListener,
};

use crate::{LayoutInputs, LayoutRenderer, RenderContext};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleColors {
    pub focused: Color,
    pub unfocused: Color,
}

impl Default for RectangleColors {
    fn default() -> Self {
        Self {
            focused: Color::from_hex("#F2F2F2"),
            unfocused: Color::from_hex("#2E3035"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectangleState {
    pub corner_radius_px: f32,
    /// Extra scale reached while focused, `0.03` is 3%. Clamped to `0..=1`.
    pub focus_scale_percent: f32,
    pub colors: RectangleColors,
    /// Scale the focus tween last produced; `1.0` at rest.
    pub current_scale: f32,
    pub is_focused: bool,
}

impl Default for RectangleState {
    fn default() -> Self {
        Self {
            corner_radius_px: 8.0,
            focus_scale_percent: 0.03,
            colors: RectangleColors::default(),
            current_scale: 1.0,
            is_focused: false,
        }
    }
}

impl RectangleState {
    fn color(&self) -> Color {
        if self.is_focused {
            self.colors.focused
        } else {
            self.colors.unfocused
        }
    }

    fn target_scale(&self, focused: bool) -> f32 {
        if focused {
            1.0 + self.focus_scale_percent.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Scale the outer box is sized for: the larger of where the tween is and
    /// where it is heading, so a running tween never outgrows the box.
    fn box_scale(&self) -> f32 {
        self.current_scale.max(self.target_scale(self.is_focused))
    }
}

/// Padding one side of `extent` gains at `scale`: `(extent - extent / scale) / 2`.
///
/// Zero for a degenerate scale.
pub fn scale_padding(extent: i32, scale: f32) -> f32 {
    if !scale.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    let extent = extent as f32;
    (extent - extent / scale) / 2.0
}

fn coordinates_for(layout: &LayoutInputs, scale: f32) -> Coordinates {
    let pad_w = scale_padding(layout.desired_width, scale) as i32;
    let pad_h = scale_padding(layout.desired_height, scale) as i32;
    Coordinates::new(
        -pad_w,
        -pad_h,
        layout.desired_width + pad_w,
        layout.desired_height + pad_h,
    )
}

struct Inner {
    state: RectangleState,
    layout: LayoutInputs,
    coordinates: Coordinates,
    tween: Option<Box<dyn TweenHandle>>,
    /// Box scale of the last `measure`; `None` before the first one.
    measured_scale: Option<f32>,
    /// Bumped on every tween start; stale listeners compare against it.
    generation: u64,
}

struct Shared {
    cell: RefCell<Inner>,
    ctx: RenderContext,
    driver: Rc<dyn AnimationDriver>,
    spec: AnimationSpec,
}

impl Shared {
    fn apply(self: &Rc<Self>, f: impl FnOnce(RectangleState) -> RectangleState) {
        let old = self.cell.borrow().state.clone();
        let new = f(old.clone());
        if new == old {
            return;
        }
        self.cell.borrow_mut().state = new.clone();
        self.ctx.tracer.emit(|| TraceEvent::StateChanged {
            renderer: "rectangle",
        });

        if old.is_focused == new.is_focused {
            // Tween frames land here: repaint only.
            self.ctx.host.request_redraw();
        } else {
            self.start_focus_animation(new.is_focused);
        }
    }

    fn start_focus_animation(self: &Rc<Self>, gain_focus: bool) {
        // No borrow may be held while the driver runs: cancel and start can
        // call back into this renderer.
        let (previous, from, to, generation) = {
            let mut inner = self.cell.borrow_mut();
            inner.generation += 1;
            (
                inner.tween.take(),
                inner.state.current_scale,
                inner.state.target_scale(gain_focus),
                inner.generation,
            )
        };
        if let Some(previous) = previous {
            previous.cancel();
        }

        let listener = Rc::new(ScaleListener {
            target: Rc::downgrade(self),
            generation,
        });
        let handle = self.driver.start(from, to, self.spec, listener);
        self.cell.borrow_mut().tween = Some(handle);

        log::debug!("rectangle: focus={gain_focus}, scale {from} -> {to}");
        self.ctx.tracer.emit(|| TraceEvent::TweenStarted { from, to });
        // The fill color follows focus immediately.
        self.ctx.host.request_redraw();
        self.relayout_if_box_changed();
    }

    /// Asks for a layout pass when the last measured box no longer matches
    /// the state. Never called from tween frames.
    fn relayout_if_box_changed(&self) {
        let stale = {
            let inner = self.cell.borrow();
            inner
                .measured_scale
                .is_some_and(|measured| measured != inner.state.box_scale())
        };
        if stale {
            log::debug!("rectangle: box scale changed, requesting relayout");
            self.ctx.host.request_relayout();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.cell.borrow().generation == generation
    }
}

struct ScaleListener {
    target: Weak<Shared>,
    generation: u64,
}

impl ScaleListener {
    fn live_target(&self) -> Option<Rc<Shared>> {
        self.target
            .upgrade()
            .filter(|shared| shared.is_current(self.generation))
    }
}

impl TweenListener for ScaleListener {
    fn on_start(&self) {
        log::trace!("rectangle: tween {} started", self.generation);
    }

    fn on_tick(&self, value: f32) {
        let Some(shared) = self.live_target() else {
            return;
        };
        shared.ctx.tracer.emit(|| TraceEvent::TweenFrame { value });
        shared.apply(|s| RectangleState {
            current_scale: value,
            ..s
        });
    }

    fn on_end(&self, value: f32) {
        let Some(shared) = self.live_target() else {
            return;
        };
        shared.cell.borrow_mut().tween = None;
        shared.ctx.tracer.emit(|| TraceEvent::TweenEnded { value });
        shared.relayout_if_box_changed();
    }
}

/// Rounded card background that grows around its center while focused.
///
/// Cloning yields another handle to the same renderer.
#[derive(Clone)]
pub struct RectangleRenderer {
    shared: Rc<Shared>,
}

impl RectangleRenderer {
    pub fn new(
        ctx: RenderContext,
        driver: Rc<dyn AnimationDriver>,
        spec: AnimationSpec,
        state: RectangleState,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                cell: RefCell::new(Inner {
                    state,
                    layout: LayoutInputs::default(),
                    coordinates: Coordinates::default(),
                    tween: None,
                    measured_scale: None,
                    generation: 0,
                }),
                ctx,
                driver,
                spec,
            }),
        }
    }

    pub fn current_scale(&self) -> f32 {
        self.shared.cell.borrow().state.current_scale
    }

    pub fn is_animating(&self) -> bool {
        self.shared
            .cell
            .borrow()
            .tween
            .as_ref()
            .is_some_and(|t| t.is_running())
    }

    /// Stops the focus tween where it is. Safe to call when idle.
    pub fn cancel_animation(&self) {
        let tween = {
            let mut inner = self.shared.cell.borrow_mut();
            inner.generation += 1;
            inner.tween.take()
        };
        if let Some(tween) = tween {
            tween.cancel();
        }
    }
}

impl LayoutRenderer for RectangleRenderer {
    type State = RectangleState;

    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn state(&self) -> RectangleState {
        self.shared.cell.borrow().state.clone()
    }

    fn update_state<F>(&mut self, f: F)
    where
        F: FnOnce(RectangleState) -> RectangleState,
    {
        self.shared.apply(f);
    }

    fn measure(
        &mut self,
        desired_width: i32,
        desired_height: i32,
        parent_width: i32,
        parent_height: i32,
    ) -> Result<MeasuredSize, LayoutError> {
        let (coordinates, scale) = {
            let mut inner = self.shared.cell.borrow_mut();
            inner.layout = LayoutInputs {
                desired_width,
                desired_height,
                parent_width,
                parent_height,
            };
            let scale = inner.state.box_scale();
            inner.measured_scale = Some(scale);
            inner.coordinates = coordinates_for(&inner.layout, scale);
            (inner.coordinates, scale)
        };

        let size = MeasuredSize::new(
            desired_width - 2 * coordinates.left,
            desired_height - 2 * coordinates.top,
        );
        log::trace!("rectangle: measured {size:?} at scale {scale}");
        self.shared.ctx.tracer.emit(|| TraceEvent::Measured {
            renderer: "rectangle",
            size,
        });
        Ok(size)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        // Redraw-only tween frames still move the edges.
        let (coordinates, radius, color) = {
            let mut inner = self.shared.cell.borrow_mut();
            let coordinates = coordinates_for(&inner.layout, inner.state.current_scale);
            inner.coordinates = coordinates;
            (coordinates, inner.state.corner_radius_px, inner.state.color())
        };

        canvas.fill_round_rect(coordinates.to_rect(), radius, color);
        self.shared.ctx.tracer.emit(|| TraceEvent::Drawn {
            renderer: "rectangle",
            coordinates,
        });
    }

    fn coordinates(&self) -> Coordinates {
        self.shared.cell.borrow().coordinates
    }
}
