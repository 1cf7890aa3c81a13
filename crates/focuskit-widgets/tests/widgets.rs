use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use focuskit_core::*;
use focuskit_render::{LayoutRenderer, TextStyles};
use focuskit_text::ApproxMeasurer;
use focuskit_widgets::config::drawables;
use focuskit_widgets::*;

const ANY: MeasureSpec = MeasureSpec::Unspecified;

struct Fixture {
    host: Rc<PollingHost>,
    clock: Rc<ManualClock>,
    animator: Rc<FrameAnimator>,
    resources: Rc<StaticResources>,
}

impl Fixture {
    fn new() -> Self {
        Self::with_resources(|r| r)
    }

    fn with_resources(extra: impl FnOnce(StaticResources) -> StaticResources) -> Self {
        let styles = TextStyles::default();
        let paint = |hex: &str| TextPaint {
            color: Color::from_hex(hex),
            size_px: 10.0,
            typeface: Typeface::Normal,
        };
        let resources = StaticResources::new()
            .with_style(styles.title.focused, paint("#101010"))
            .with_style(styles.title.unfocused, paint("#FFFFFF"))
            .with_style(styles.subtitle.focused, paint("#404040"))
            .with_style(styles.subtitle.unfocused, paint("#B0B0B0"))
            .with_drawable(drawables::IMG_TOGGLE_ON, None)
            .with_drawable(drawables::IMG_TOGGLE_OFF, None)
            .with_drawable(drawables::IMG_RIGHT_ARROW_FOCUSED, None)
            .with_drawable(drawables::IMG_RIGHT_ARROW_UNFOCUSED, None);

        let clock = Rc::new(ManualClock::new());
        Self {
            host: Rc::new(PollingHost::new()),
            animator: Rc::new(FrameAnimator::new(clock.clone())),
            clock,
            resources: Rc::new(extra(resources)),
        }
    }

    // 10px per grapheme, 20px per line.
    fn ctx(&self) -> WidgetContext {
        WidgetContext::new(
            self.host.clone(),
            self.resources.clone(),
            Rc::new(ApproxMeasurer::new(1.0, 2.0)),
            self.animator.clone(),
        )
    }

    fn finish_animations(&self) {
        self.clock.advance(Duration::from_millis(500));
        self.animator.advance();
    }
}

fn paint(widget: &dyn CanvasWidget) -> String {
    let mut canvas = RecordingCanvas::new();
    widget.draw(&mut canvas);
    canvas.listing()
}

/// Space between the switch's trailing edge and the card's.
fn trailing_gap(row: &ToggleRow) -> i32 {
    row.background().coordinates().right - row.switch().coordinates().right
}

fn wifi() -> ToggleState {
    ToggleState {
        title: "Wi-Fi".into(),
        subtitle: "Connected".into(),
        ..ToggleState::default()
    }
}

#[test]
fn toggle_row_unfocused() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());

    let size = row.measure(ANY, ANY).unwrap();
    assert_eq!(size, MeasuredSize::new(500, 92));
    insta::assert_snapshot!(paint(&row), @r#"
    rect 0,0 500x92 r=16 #2E3035FF
    text "Wi-Fi" @32,24 10px #FFFFFFFF
    text "Connected" @32,48 10px #B0B0B0FF
    image img_toggle_off 404,28 64x36
    "#);
    assert_eq!(trailing_gap(&row), WidgetConfig::default().horizontal_padding);
}

#[test]
fn toggle_row_focused_after_attach() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    fx.host.set_focused(true);
    row.on_attach();
    assert!(row.state().is_focused);

    fx.finish_animations();
    assert_eq!(row.background().current_scale(), 1.03);

    let size = row.measure(ANY, ANY).unwrap();
    assert_eq!(size, MeasuredSize::new(514, 94));
    insta::assert_snapshot!(paint(&row), @r#"
    rect -7,-1 514x94 r=16 #F2F2F2FF
    text "Wi-Fi" @32,24 10px #101010FF
    text "Connected" @32,48 10px #404040FF
    image img_toggle_off 411,28 64x36
    "#);
    assert_eq!(trailing_gap(&row), WidgetConfig::default().horizontal_padding);
}

#[test]
fn toggle_box_settles_when_relaid_out_on_every_focus_change() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(500, 92));
    fx.host.take_requests();

    // Relayout runs before the first tween frame, like a polling host does.
    row.on_focus_change(true);
    assert!(fx.host.take_requests().contains(HostRequests::RELAYOUT));
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(514, 94));

    fx.finish_animations();
    assert_eq!(fx.host.take_requests(), HostRequests::REDRAW);
    let focused = paint(&row);
    assert!(focused.starts_with("rect -7,-1 514x94 "), "{focused}");
    assert!(focused.contains("image img_toggle_off 411,28 64x36"), "{focused}");
    assert_eq!(trailing_gap(&row), 32);

    // The box keeps the focused size until the shrink tween is over.
    row.on_focus_change(false);
    fx.host.take_requests();
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(514, 94));

    fx.finish_animations();
    assert_eq!(
        fx.host.take_requests(),
        HostRequests::REDRAW | HostRequests::RELAYOUT
    );
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(500, 92));
    let unfocused = paint(&row);
    assert!(unfocused.starts_with("rect 0,0 500x92 "), "{unfocused}");
    assert!(unfocused.contains("image img_toggle_off 404,28 64x36"), "{unfocused}");
    assert_eq!(trailing_gap(&row), 32);
}

#[test]
fn toggle_click_flips_checked_and_notifies() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    row.set_on_toggle(move |checked| sink.borrow_mut().push(checked));

    row.on_pointer_up();
    assert!(row.is_checked());
    assert_eq!(
        row.switch().drawable().map(|d| d.id),
        Some(drawables::IMG_TOGGLE_ON)
    );

    row.on_click();
    assert!(!row.is_checked());
    assert_eq!(*seen.borrow(), vec![true, false]);
    assert_eq!(fx.resources.load_count(drawables::IMG_TOGGLE_ON), 1);
    assert_eq!(fx.resources.load_count(drawables::IMG_TOGGLE_OFF), 2);
}

#[test]
fn toggle_icon_tracks_checked_and_focus() {
    let ids = ["f_on", "u_on", "f_off", "u_off"].map(DrawableId);
    let fx = Fixture::with_resources(|r| {
        ids.iter().fold(r, |r, id| r.with_drawable(*id, None))
    });
    let icons = ToggleIcons {
        focused_checked: ids[0],
        unfocused_checked: ids[1],
        focused_unchecked: ids[2],
        unfocused_unchecked: ids[3],
    };
    let mut row = ToggleRow::with_icons(fx.ctx(), wifi(), icons);
    let icon = |row: &ToggleRow| row.switch().drawable().map(|d| d.id.0);

    assert_eq!(icon(&row), Some("u_off"));
    row.on_focus_change(true);
    assert_eq!(icon(&row), Some("f_off"));
    row.set_checked(true);
    assert_eq!(icon(&row), Some("f_on"));
    row.on_focus_change(false);
    assert_eq!(icon(&row), Some("u_on"));
}

#[test]
fn pointer_down_requests_focus() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    row.on_pointer_down();
    assert_eq!(fx.host.focus_request_count(), 1);
    assert!(fx.host.take_requests().contains(HostRequests::FOCUS));
    assert!(!row.state().is_focused);
}

#[test]
fn unchanged_state_requests_nothing() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    assert!(fx.host.take_requests().is_empty());

    row.update_state(|s| s);
    row.on_focus_change(false);
    row.set_checked(false);
    assert!(fx.host.take_requests().is_empty());
    assert_eq!(fx.animator.active_count(), 0);
}

#[test]
fn focus_tween_frames_only_redraw() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    row.measure(ANY, ANY).unwrap();

    row.on_focus_change(true);
    assert_eq!(
        fx.host.take_requests(),
        HostRequests::REDRAW | HostRequests::RELAYOUT
    );

    fx.clock.advance(Duration::from_millis(75));
    assert!(fx.animator.advance());
    assert_eq!(fx.host.take_requests(), HostRequests::REDRAW);
    let scale = row.background().current_scale();
    assert!(scale > 1.0 && scale < 1.03, "scale = {scale}");
}

#[test]
fn missing_title_fails_measure() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), ToggleState::default());
    assert_eq!(row.measure(ANY, ANY), Err(LayoutError::MissingTitle));

    let mut card = Card::new(fx.ctx(), CardState::default());
    assert_eq!(card.measure(ANY, ANY), Err(LayoutError::MissingTitle));
}

#[test]
fn measure_specs_constrain_the_reported_size() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(fx.ctx(), wifi());
    let size = row
        .measure(MeasureSpec::Exactly(600), MeasureSpec::AtMost(50))
        .unwrap();
    assert_eq!(size, MeasuredSize::new(600, 50));
}

#[test]
fn long_toggle_title_is_ellipsized() {
    let fx = Fixture::new();
    let mut row = ToggleRow::new(
        fx.ctx(),
        ToggleState {
            title: "Bluetooth audio devices nearby for pairing".into(),
            ..ToggleState::default()
        },
    );
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(500, 68));
    assert!(paint(&row).contains("text \"Bluetooth audio devices nearby for\u{2026}\" @32,24"));
}

#[test]
fn navigation_row_centers_text() {
    let fx = Fixture::new();
    let mut row = NavigationRow::new(
        fx.ctx(),
        NavigationState {
            title: "Bluetooth".into(),
            ..NavigationState::default()
        },
    );

    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(500, 68));
    insta::assert_snapshot!(paint(&row), @r#"
    rect 0,0 500x68 r=16 #2E3035FF
    text "Bluetooth" @32,24 10px #FFFFFFFF
    image img_right_arrow_unfocused 436,18 32x32
    "#);

    row.on_focus_change(true);
    assert_eq!(fx.resources.load_count(drawables::IMG_RIGHT_ARROW_FOCUSED), 1);
    fx.finish_animations();
    assert_eq!(row.measure(ANY, ANY).unwrap(), MeasuredSize::new(514, 68));
    let focused = paint(&row);
    assert!(focused.starts_with("rect -7,0 514x68 "), "{focused}");
    // 507 - (443 + 32) keeps the 32px trailing padding.
    assert!(focused.ends_with("image img_right_arrow_focused 443,18 32x32\n"), "{focused}");
}

#[test]
fn card_draws_background_and_text() {
    let fx = Fixture::new();
    let mut card = Card::new(
        fx.ctx(),
        CardState {
            title: "Now playing".into(),
            subtitle: "Episode 4".into(),
            ..CardState::default()
        },
    );

    assert_eq!(card.measure(ANY, ANY).unwrap(), MeasuredSize::new(500, 92));
    insta::assert_snapshot!(paint(&card), @r#"
    rect 0,0 500x92 r=16 #2E3035FF
    text "Now playing" @32,24 10px #FFFFFFFF
    text "Episode 4" @32,48 10px #B0B0B0FF
    "#);

    card.update_state(|s| CardState {
        title: "Up next".into(),
        ..s
    });
    assert!(fx.host.take_requests().contains(HostRequests::RELAYOUT));
    card.measure(ANY, ANY).unwrap();
    assert!(paint(&card).contains("text \"Up next\" @32,24"));
}
