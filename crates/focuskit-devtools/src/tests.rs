#[cfg(test)]
mod tests {
    use crate::*;
    use focuskit_core::{Coordinates, DrawCommand, DrawableId, MeasuredSize, RecordingCanvas};

    fn sample(tracer: &Tracer) {
        tracer.emit(|| TraceEvent::StateChanged { renderer: "rectangle" });
        tracer.emit(|| TraceEvent::TweenStarted { from: 1.0, to: 1.03 });
        tracer.emit(|| TraceEvent::TweenFrame { value: 1.015 });
        tracer.emit(|| TraceEvent::TweenFrame { value: 1.03 });
        tracer.emit(|| TraceEvent::TweenEnded { value: 1.03 });
        tracer.emit(|| TraceEvent::Measured {
            renderer: "rectangle",
            size: MeasuredSize::new(514, 94),
        });
        tracer.emit(|| TraceEvent::Drawn {
            renderer: "rectangle",
            coordinates: Coordinates::new(-7, -1, 507, 93),
        });
        tracer.emit(|| TraceEvent::DrawableLoaded {
            id: DrawableId("img_toggle_on"),
        });
        tracer.emit(|| TraceEvent::DrawableLoadFailed {
            id: DrawableId("img_toggle_off"),
            reason: "missing".into(),
        });
    }

    #[test]
    fn test_recorder_collects_events() {
        let recorder = TraceRecorder::new();
        assert!(recorder.is_empty());

        let tracer = recorder.tracer();
        assert!(tracer.is_enabled());
        sample(&tracer);

        assert_eq!(recorder.len(), 9);
        assert_eq!(
            recorder.events()[0],
            TraceEvent::StateChanged { renderer: "rectangle" }
        );

        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_metrics_summary() {
        let recorder = TraceRecorder::new();
        sample(&recorder.tracer());

        let m = recorder.metrics();
        assert_eq!(
            m,
            Metrics {
                state_changes: 1,
                measures: 1,
                draws: 1,
                tweens_started: 1,
                tween_frames: 2,
                tweens_ended: 1,
                drawable_loads: 1,
                drawable_failures: 1,
            }
        );
        assert_eq!(
            m.summary(),
            "measures: 1  |  draws: 1  |  tweens: 1/1  |  frames: 2  |  icons: 1 (1 failed)"
        );
    }

    #[test]
    fn test_hud_draws_only_when_enabled() {
        let mut hud = Hud::new();
        let mut canvas = RecordingCanvas::new();

        hud.frame(&mut canvas);
        assert!(canvas.commands.is_empty());
        assert_eq!(hud.frame_count(), 1);

        hud.toggle();
        hud.metrics = Some(Metrics::default());
        hud.frame(&mut canvas);
        match canvas.commands.as_slice() {
            [DrawCommand::Text { text, pos, .. }] => {
                assert!(text.starts_with("frame: 2  |  fps: "), "{text}");
                assert!(text.ends_with("icons: 0 (0 failed)"), "{text}");
                assert_eq!((pos.x, pos.y), (8.0, 8.0));
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }
}
