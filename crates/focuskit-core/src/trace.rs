//! Injected observability hook.
//!
//! Renderers hold a `Tracer`; it is empty unless the owner installs a hook.
//! Events are built lazily so an empty tracer costs one branch.

use std::fmt;
use std::rc::Rc;

use crate::{Coordinates, DrawableId, MeasuredSize};

#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    StateChanged {
        renderer: &'static str,
    },
    Measured {
        renderer: &'static str,
        size: MeasuredSize,
    },
    Drawn {
        renderer: &'static str,
        coordinates: Coordinates,
    },
    TweenStarted {
        from: f32,
        to: f32,
    },
    TweenFrame {
        value: f32,
    },
    TweenEnded {
        value: f32,
    },
    DrawableLoaded {
        id: DrawableId,
    },
    DrawableLoadFailed {
        id: DrawableId,
        reason: String,
    },
}

pub type TraceHook = Rc<dyn Fn(&TraceEvent)>;

#[derive(Clone, Default)]
pub struct Tracer(Option<TraceHook>);

impl Tracer {
    pub fn new(hook: impl Fn(&TraceEvent) + 'static) -> Self {
        Self(Some(Rc::new(hook)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.0.is_some()
    }

    pub fn emit(&self, event: impl FnOnce() -> TraceEvent) {
        if let Some(hook) = &self.0 {
            hook(&event());
        }
    }
}

impl From<TraceHook> for Tracer {
    fn from(hook: TraceHook) -> Self {
        Self(Some(hook))
    }
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracer")
            .field(&self.0.as_ref().map(|_| "..."))
            .finish()
    }
}
