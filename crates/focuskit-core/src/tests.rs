#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl TweenListener for Recorder {
        fn on_start(&self) {
            self.events.borrow_mut().push("start".into());
        }
        fn on_tick(&self, value: f32) {
            self.events.borrow_mut().push(format!("tick {value:.2}"));
        }
        fn on_end(&self, value: f32) {
            self.events.borrow_mut().push(format!("end {value:.2}"));
        }
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_color_from_argb() {
        assert_eq!(Color::from_argb(0x80FF0010), Color(255, 0, 16, 128));
    }

    #[test]
    fn test_paddings_sums() {
        let p = Paddings::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
        assert_eq!(Paddings::symmetric(5, 7), Paddings::new(5, 7, 5, 7));
    }

    #[test]
    fn test_coordinates_extent() {
        let c = Coordinates::from_origin(-7, -1, 514, 102);
        assert_eq!(c.width(), 514);
        assert_eq!(c.height(), 102);
        assert_eq!(
            c.to_rect(),
            Rect {
                x: -7.0,
                y: -1.0,
                w: 514.0,
                h: 102.0
            }
        );
        assert!(Coordinates::default().is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_measure_spec_resolve() {
        assert_eq!(MeasureSpec::Unspecified.resolve(120), 120);
        assert_eq!(MeasureSpec::AtMost(100).resolve(120), 100);
        assert_eq!(MeasureSpec::AtMost(200).resolve(120), 120);
        assert_eq!(MeasureSpec::Exactly(80).resolve(120), 80);
    }

    #[test]
    fn test_polling_host_coalesces() {
        let host = PollingHost::new();
        host.request_redraw();
        host.request_redraw();
        host.request_relayout();
        assert_eq!(host.redraw_count(), 2);
        assert_eq!(
            host.take_requests(),
            HostRequests::REDRAW | HostRequests::RELAYOUT
        );
        assert!(host.peek_requests().is_empty());

        host.request_focus();
        assert_eq!(host.take_requests(), HostRequests::FOCUS);
        assert_eq!(host.focus_request_count(), 1);
        assert!(!host.has_focus());
    }

    #[test]
    fn test_static_resources_counts_loads() {
        let res = StaticResources::new()
            .with_drawable(DrawableId("ok"), None)
            .with_broken_drawable(DrawableId("bad"), "truncated");

        assert!(res.load_drawable(DrawableId("ok")).is_ok());
        assert_eq!(
            res.load_drawable(DrawableId("bad")),
            Err(ResourceError::DrawableDecode {
                id: DrawableId("bad"),
                reason: "truncated".into()
            })
        );
        assert_eq!(
            res.load_drawable(DrawableId("missing")),
            Err(ResourceError::DrawableNotFound(DrawableId("missing")))
        );
        assert_eq!(res.load_count(DrawableId("ok")), 1);
        assert_eq!(res.total_loads(), 3);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = ManualClock::new();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, clock.now());

        clock.advance(Duration::from_millis(250));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        assert!(!a.update(clock.now()));
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_frame_animator_lifecycle() {
        let clock = Rc::new(ManualClock::new());
        let animator = FrameAnimator::new(clock.clone());
        let rec = Rc::new(Recorder::default());

        let handle = animator.start(
            1.0,
            2.0,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
            rec.clone(),
        );
        // Nothing fires synchronously from start.
        assert!(rec.events.borrow().is_empty());
        assert!(handle.is_running());

        clock.advance(Duration::from_millis(50));
        assert!(animator.advance());
        clock.advance(Duration::from_millis(50));
        assert!(!animator.advance());

        assert_eq!(
            *rec.events.borrow(),
            vec!["start", "tick 1.50", "tick 2.00", "end 2.00"]
        );
        assert!(!handle.is_running());
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_frame_animator_cancel_is_silent_and_idempotent() {
        let clock = Rc::new(ManualClock::new());
        let animator = FrameAnimator::new(clock.clone());
        let rec = Rc::new(Recorder::default());

        let handle = animator.start(0.0, 1.0, AnimationSpec::default(), rec.clone());
        handle.cancel();
        handle.cancel();
        assert!(!handle.is_running());

        clock.advance(Duration::from_millis(10));
        assert!(!animator.advance());
        assert!(rec.events.borrow().is_empty());
    }

    #[test]
    fn test_tracer_is_lazy() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let tracer = Tracer::new({
            let seen = seen.clone();
            move |e: &TraceEvent| seen.borrow_mut().push(e.clone())
        });
        tracer.emit(|| TraceEvent::TweenFrame { value: 1.0 });
        assert_eq!(seen.borrow().len(), 1);

        let silent = Tracer::none();
        silent.emit(|| panic!("event built for a disabled tracer"));
        assert!(!silent.is_enabled());
    }

    #[test]
    fn test_recording_canvas_listing() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_round_rect(
            Rect {
                x: -7.0,
                y: 0.0,
                w: 514.0,
                h: 60.0,
            },
            8.0,
            Color::WHITE,
        );
        canvas.draw_text_line("Hi", Vec2 { x: 24.0, y: 18.5 }, &TextPaint::default());
        assert_eq!(
            canvas.listing(),
            "rect -7,0 514x60 r=8 #FFFFFFFF\ntext \"Hi\" @24,18.5 16px #000000FF\n"
        );
    }
}
