//! Headless settings panel: three focusable rows driven through a scripted
//! sequence of D-pad moves and a click, painted into a recording canvas.
//!
//! Run with `RUST_LOG=info` (or `trace` to see every renderer event).

use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use focuskit_core::*;
use focuskit_devtools::{Hud, TraceRecorder};
use focuskit_text::CosmicMeasurer;
use focuskit_widgets::config::{colors, dimens, drawables};
use focuskit_widgets::*;

const FRAME: Duration = Duration::from_millis(16);

fn resources() -> StaticResources {
    let paint = |hex: &str, size_px: f32, typeface: Typeface| TextPaint {
        color: Color::from_hex(hex),
        size_px,
        typeface,
    };
    let title = |focused| StyleToken(if focused {
        "TextAppearance.PC.Title.Focused"
    } else {
        "TextAppearance.PC.Title.Unfocused"
    });
    let subtitle = |focused| StyleToken(if focused {
        "TextAppearance.PC.Subtitle.Focused"
    } else {
        "TextAppearance.PC.Subtitle.Unfocused"
    });

    StaticResources::new()
        .with_style(title(true), paint("#1B1B1F", 24.0, Typeface::Bold))
        .with_style(title(false), paint("#E3E2E6", 24.0, Typeface::Normal))
        .with_style(subtitle(true), paint("#45464F", 18.0, Typeface::Normal))
        .with_style(subtitle(false), paint("#A0A0A8", 18.0, Typeface::Normal))
        .with_color(colors::PC_CARD_FOCUSED, Color::from_hex("#F2F2F2"))
        .with_color(colors::PC_CARD_UNFOCUSED, Color::from_hex("#2E3035"))
        .with_dimen(dimens::PC_CORNER_RADIUS, 12)
        .with_dimen(dimens::PC_VERTICAL_PADDING, 20)
        .with_dimen(dimens::PC_HORIZONTAL_PADDING, 28)
        .with_drawable(drawables::IMG_TOGGLE_ON, Some(MeasuredSize::new(64, 36)))
        .with_drawable(drawables::IMG_TOGGLE_OFF, Some(MeasuredSize::new(64, 36)))
        .with_drawable(
            drawables::IMG_RIGHT_ARROW_UNFOCUSED,
            Some(MeasuredSize::new(32, 32)),
        )
        // The focused arrow is missing from this theme; the row must still draw.
        .with_broken_drawable(drawables::IMG_RIGHT_ARROW_FOCUSED, "truncated vector data")
}

struct Panel {
    host: Rc<PollingHost>,
    clock: Rc<ManualClock>,
    animator: Rc<FrameAnimator>,
    rows: Vec<Box<dyn CanvasWidget>>,
    focused: usize,
    hud: Hud,
    recorder: TraceRecorder,
}

impl Panel {
    fn layout(&mut self) -> anyhow::Result<()> {
        for (i, row) in self.rows.iter_mut().enumerate() {
            let size = row
                .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified)
                .with_context(|| format!("measuring row {i}"))?;
            log::debug!("row {i}: {}x{}", size.width, size.height);
        }
        Ok(())
    }

    fn paint(&mut self) {
        let mut canvas = RecordingCanvas::new();
        for row in &self.rows {
            row.draw(&mut canvas);
        }
        self.hud.metrics = Some(self.recorder.metrics());
        self.hud.frame(&mut canvas);
        log::info!("frame {}:\n{}", self.hud.frame_count(), canvas.listing());
    }

    /// Services host requests until no tween is left.
    fn settle(&mut self) -> anyhow::Result<()> {
        loop {
            let requests = self.host.take_requests();
            if requests.contains(HostRequests::RELAYOUT) {
                self.layout()?;
            }
            if requests.intersects(HostRequests::REDRAW | HostRequests::RELAYOUT) {
                self.paint();
            }
            if self.animator.active_count() == 0 && self.host.peek_requests().is_empty() {
                return Ok(());
            }
            self.clock.advance(FRAME);
            self.animator.advance();
        }
    }

    fn move_focus(&mut self, to: usize) -> anyhow::Result<()> {
        let to = to.min(self.rows.len().saturating_sub(1));
        if to == self.focused {
            return Ok(());
        }
        log::info!("focus {} -> {to}", self.focused);
        self.rows[self.focused].on_focus_change(false);
        self.rows[to].on_focus_change(true);
        self.focused = to;
        self.settle()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let resources = Rc::new(resources());
    let config = WidgetConfig::from_resources(resources.as_ref());
    let host = Rc::new(PollingHost::new());
    let clock = Rc::new(ManualClock::new());
    let animator = Rc::new(FrameAnimator::new(clock.clone()));
    let recorder = TraceRecorder::new();

    let ctx = WidgetContext::new(
        host.clone(),
        resources.clone(),
        Rc::new(CosmicMeasurer::new()),
        animator.clone(),
    )
    .with_config(config)
    .with_tracer(recorder.tracer());

    let mut wifi = ToggleRow::new(
        ctx.clone(),
        ToggleState {
            title: "Wi-Fi".into(),
            subtitle: "Connected to HomeNetwork_5G".into(),
            ..ToggleState::default()
        },
    );
    wifi.set_on_toggle(|on| log::info!("wifi toggled: {on}"));

    let rows: Vec<Box<dyn CanvasWidget>> = vec![
        Box::new(wifi),
        Box::new(NavigationRow::new(
            ctx.clone(),
            NavigationState {
                title: "Display & sound".into(),
                subtitle: "Resolution, HDR, audio output".into(),
                ..NavigationState::default()
            },
        )),
        Box::new(Card::new(
            ctx,
            CardState {
                title: "About".into(),
                subtitle: "Software version, legal information and device name".into(),
                ..CardState::default()
            },
        )),
    ];

    let mut panel = Panel {
        host: host.clone(),
        clock,
        animator,
        rows,
        focused: 0,
        hud: Hud::new(),
        recorder,
    };
    panel.hud.toggle();

    host.set_focused(true);
    panel.rows[0].on_attach();
    host.set_focused(false);
    for row in panel.rows.iter_mut().skip(1) {
        row.on_attach();
    }
    panel.layout()?;
    panel.paint();
    panel.settle()?;

    // Click the toggle, then walk down the list and back up.
    panel.rows[0].on_pointer_down();
    panel.rows[0].on_pointer_up();
    panel.settle()?;
    for target in [1, 2, 1, 0] {
        panel.move_focus(target)?;
    }

    log::info!("{}", panel.recorder.metrics().summary());
    Ok(())
}
