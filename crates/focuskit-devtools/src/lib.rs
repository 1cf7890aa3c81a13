use std::cell::RefCell;
use std::rc::Rc;

use web_time::Instant;

use focuskit_core::{Canvas, Color, TextPaint, TraceEvent, Tracer, Typeface, Vec2};

pub mod tests;

/// Collects every event a renderer emits. Hand [`TraceRecorder::tracer`] to
/// a `RenderContext` or `WidgetContext`.
#[derive(Clone, Default)]
pub struct TraceRecorder {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracer(&self) -> Tracer {
        let events = self.events.clone();
        Tracer::new(move |e| {
            log::trace!("{e:?}");
            events.borrow_mut().push(e.clone());
        })
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn metrics(&self) -> Metrics {
        let mut m = Metrics::default();
        for e in self.events.borrow().iter() {
            match e {
                TraceEvent::StateChanged { .. } => m.state_changes += 1,
                TraceEvent::Measured { .. } => m.measures += 1,
                TraceEvent::Drawn { .. } => m.draws += 1,
                TraceEvent::TweenStarted { .. } => m.tweens_started += 1,
                TraceEvent::TweenFrame { .. } => m.tween_frames += 1,
                TraceEvent::TweenEnded { .. } => m.tweens_ended += 1,
                TraceEvent::DrawableLoaded { .. } => m.drawable_loads += 1,
                TraceEvent::DrawableLoadFailed { .. } => m.drawable_failures += 1,
            }
        }
        m
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub state_changes: usize,
    pub measures: usize,
    pub draws: usize,
    pub tweens_started: usize,
    pub tween_frames: usize,
    pub tweens_ended: usize,
    pub drawable_loads: usize,
    pub drawable_failures: usize,
}

impl Metrics {
    pub fn summary(&self) -> String {
        [
            format!("measures: {}", self.measures),
            format!("draws: {}", self.draws),
            format!("tweens: {}/{}", self.tweens_ended, self.tweens_started),
            format!("frames: {}", self.tween_frames),
            format!("icons: {} ({} failed)", self.drawable_loads, self.drawable_failures),
        ]
        .join("  |  ")
    }
}

/// One-line overlay with frame rate and trace metrics.
pub struct Hud {
    pub enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            metrics: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Counts a frame and, when enabled, paints the overlay on top.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) {
        self.frame_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
        if !self.enabled {
            return;
        }

        let mut text = format!("frame: {}  |  fps: {:.1}", self.frame_count, self.fps_smooth);
        if let Some(m) = &self.metrics {
            text.push_str("  |  ");
            text.push_str(&m.summary());
        }
        canvas.draw_text_line(
            &text,
            Vec2 { x: 8.0, y: 8.0 },
            &TextPaint {
                color: Color::from_hex("#AAAAAA"),
                size_px: 14.0,
                typeface: Typeface::Normal,
            },
        );
    }
}
