use std::rc::Rc;

use focuskit_core::{Canvas, Coordinates, Host, LayoutError, MeasuredSize, Tracer};

/// Measures and paints one layer of a widget.
pub trait LayoutRenderer {
    type State: Clone + PartialEq;

    /// Short name used in trace events.
    fn name(&self) -> &'static str;

    fn state(&self) -> Self::State;

    /// Replaces the state with `f(current)`; does nothing when the result
    /// equals the current state.
    fn update_state<F>(&mut self, f: F)
    where
        F: FnOnce(Self::State) -> Self::State;

    /// Computes the size for the given desired and parent extents and caches
    /// the draw coordinates.
    fn measure(
        &mut self,
        desired_width: i32,
        desired_height: i32,
        parent_width: i32,
        parent_height: i32,
    ) -> Result<MeasuredSize, LayoutError>;

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Coordinates from the last measure or draw pass.
    fn coordinates(&self) -> Coordinates;
}

/// Inputs of the last `measure` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutInputs {
    pub desired_width: i32,
    pub desired_height: i32,
    pub parent_width: i32,
    pub parent_height: i32,
}

/// What a renderer needs from its owner: the host to invalidate and an
/// optional trace hook.
#[derive(Clone)]
pub struct RenderContext {
    pub host: Rc<dyn Host>,
    pub tracer: Tracer,
}

impl RenderContext {
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self {
            host,
            tracer: Tracer::none(),
        }
    }

    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Asks the host for a new layout pass and a repaint.
    pub(crate) fn invalidate(&self) {
        self.host.request_relayout();
        self.host.request_redraw();
    }
}
