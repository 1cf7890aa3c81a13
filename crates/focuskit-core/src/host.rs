use std::cell::Cell;

use bitflags::bitflags;

/// Constraint the hosting layout passes down for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    Unspecified,
    AtMost(i32),
    Exactly(i32),
}

impl MeasureSpec {
    /// Reconcile a desired size with this constraint.
    pub fn resolve(self, desired: i32) -> i32 {
        match self {
            MeasureSpec::Unspecified => desired,
            MeasureSpec::AtMost(max) => desired.min(max),
            MeasureSpec::Exactly(size) => size,
        }
    }
}

/// The part of the hosting view a renderer or widget may call back into.
///
/// Calls are cheap requests; the host coalesces them and re-runs measure and
/// draw before the next paint.
pub trait Host {
    fn request_redraw(&self);
    fn request_relayout(&self);
    /// Asks to move input focus to this view. The host answers later through
    /// the widget's focus-change notification.
    fn request_focus(&self);
    fn has_focus(&self) -> bool;
    fn resolve_size(&self, desired: i32, spec: MeasureSpec) -> i32 {
        spec.resolve(desired)
    }
}

bitflags! {
    /// Pending work a renderer asked the host for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HostRequests: u8 {
        const REDRAW = 1 << 0;
        const RELAYOUT = 1 << 1;
        const FOCUS = 1 << 2;
    }
}

/// A host that only accumulates requests; the owner polls them once per frame.
///
/// Also the test double used throughout the workspace.
#[derive(Debug, Default)]
pub struct PollingHost {
    pending: Cell<HostRequests>,
    redraws: Cell<u32>,
    relayouts: Cell<u32>,
    focus_requests: Cell<u32>,
    focused: Cell<bool>,
}

impl PollingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }

    /// Returns and clears the pending requests.
    pub fn take_requests(&self) -> HostRequests {
        self.pending.replace(HostRequests::empty())
    }

    pub fn peek_requests(&self) -> HostRequests {
        self.pending.get()
    }

    /// Total redraw requests since creation.
    pub fn redraw_count(&self) -> u32 {
        self.redraws.get()
    }

    /// Total relayout requests since creation.
    pub fn relayout_count(&self) -> u32 {
        self.relayouts.get()
    }

    pub fn focus_request_count(&self) -> u32 {
        self.focus_requests.get()
    }
}

impl Host for PollingHost {
    fn request_redraw(&self) {
        self.pending.set(self.pending.get() | HostRequests::REDRAW);
        self.redraws.set(self.redraws.get() + 1);
    }

    fn request_relayout(&self) {
        self.pending.set(self.pending.get() | HostRequests::RELAYOUT);
        self.relayouts.set(self.relayouts.get() + 1);
    }

    fn request_focus(&self) {
        self.pending.set(self.pending.get() | HostRequests::FOCUS);
        self.focus_requests.set(self.focus_requests.get() + 1);
    }

    fn has_focus(&self) -> bool {
        self.focused.get()
    }
}
