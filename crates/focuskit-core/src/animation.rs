use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Time source for animations. Injected, never global.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you drive by hand.
#[derive(Debug)]
pub struct ManualClock {
    t: Cell<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: Cell::new(Instant::now()),
        }
    }
    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Value that transitions from its current value to a target over a spec.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Retargets from wherever the value currently is.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Samples the value at `now`. Returns `false` once the target is reached.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);

        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}

/// Callbacks a tween delivers, all on the UI thread.
pub trait TweenListener {
    fn on_start(&self) {}
    fn on_tick(&self, value: f32);
    fn on_end(&self, _value: f32) {}
}

/// Handle to a running tween. Cancelling is immediate, fires no further
/// callbacks, and is a no-op on a finished or already cancelled tween.
pub trait TweenHandle {
    fn cancel(&self);
    fn is_running(&self) -> bool;
}

/// Starts float tweens between two endpoints.
///
/// Implementations must not invoke `listener` from inside `start`; the first
/// callback arrives on a later frame.
pub trait AnimationDriver {
    fn start(
        &self,
        from: f32,
        to: f32,
        spec: AnimationSpec,
        listener: Rc<dyn TweenListener>,
    ) -> Box<dyn TweenHandle>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenStatus {
    Pending,
    Running,
    Finished,
    Cancelled,
}

struct ActiveTween {
    value: AnimatedValue<f32>,
    listener: Rc<dyn TweenListener>,
    status: Rc<Cell<TweenStatus>>,
}

struct FrameTweenHandle {
    status: Rc<Cell<TweenStatus>>,
}

impl TweenHandle for FrameTweenHandle {
    fn cancel(&self) {
        if matches!(self.status.get(), TweenStatus::Pending | TweenStatus::Running) {
            self.status.set(TweenStatus::Cancelled);
        }
    }

    fn is_running(&self) -> bool {
        matches!(self.status.get(), TweenStatus::Pending | TweenStatus::Running)
    }
}

/// `AnimationDriver` pumped by the host once per frame via [`advance`].
///
/// [`advance`]: FrameAnimator::advance
#[derive(Clone)]
pub struct FrameAnimator {
    clock: Rc<dyn Clock>,
    active: Rc<RefCell<Vec<ActiveTween>>>,
}

impl FrameAnimator {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            active: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Rc::new(SystemClock))
    }

    /// Number of tweens still pending or running.
    pub fn active_count(&self) -> usize {
        self.active
            .borrow()
            .iter()
            .filter(|t| matches!(t.status.get(), TweenStatus::Pending | TweenStatus::Running))
            .count()
    }

    /// Samples every live tween at the clock's current time and delivers its
    /// callbacks. Returns `true` while any tween remains live.
    pub fn advance(&self) -> bool {
        let now = self.clock.now();
        // Listeners may start or cancel tweens; work on a detached batch.
        let mut batch = std::mem::take(&mut *self.active.borrow_mut());

        for tween in &mut batch {
            if tween.status.get() == TweenStatus::Pending {
                tween.status.set(TweenStatus::Running);
                tween.listener.on_start();
            }
            if tween.status.get() != TweenStatus::Running {
                continue;
            }

            let still_running = tween.value.update(now);
            let value = *tween.value.get();
            tween.listener.on_tick(value);

            if !still_running && tween.status.get() == TweenStatus::Running {
                tween.status.set(TweenStatus::Finished);
                tween.listener.on_end(value);
            }
        }

        batch.retain(|t| matches!(t.status.get(), TweenStatus::Pending | TweenStatus::Running));
        let mut active = self.active.borrow_mut();
        batch.append(&mut active);
        *active = batch;
        !active.is_empty()
    }
}

impl AnimationDriver for FrameAnimator {
    fn start(
        &self,
        from: f32,
        to: f32,
        spec: AnimationSpec,
        listener: Rc<dyn TweenListener>,
    ) -> Box<dyn TweenHandle> {
        let mut value = AnimatedValue::new(from, spec);
        value.set_target(to, self.clock.now());

        let status = Rc::new(Cell::new(TweenStatus::Pending));
        self.active.borrow_mut().push(ActiveTween {
            value,
            listener,
            status: status.clone(),
        });
        log::trace!("tween queued {from} -> {to} over {:?}", spec.duration);
        Box::new(FrameTweenHandle { status })
    }
}
