use proptest::prelude::*;
use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{RawPoint, TimeWindow, Viewport};
use timeline_rs::extensions::Marker;
use timeline_rs::render::NullRenderer;

fn sorted_series(gaps: &[f64], values: &[f64]) -> Vec<RawPoint> {
    let mut time = 0.0;
    gaps.iter()
        .zip(values)
        .map(|(gap, value)| {
            time += gap;
            RawPoint::new(time, *value)
        })
        .collect()
}

fn window_strategy() -> impl Strategy<Value = TimeWindow> {
    prop_oneof![
        Just(TimeWindow::Unbounded),
        (1.0f64..20_000.0).prop_map(TimeWindow::bounded),
    ]
}

proptest! {
    #[test]
    fn sorted_input_projects_monotonic_render_x(
        gaps in prop::collection::vec(0.0f64..500.0, 2..200),
        values in prop::collection::vec(-1e6f64..1e6, 200),
        window in window_strategy()
    ) {
        let data = sorted_series(&gaps, &values);
        let config = TimelineConfig::default().with_time_window(window);
        let mut timeline = Timeline::new(NullRenderer::new(Viewport::new(1200, 700)), config)
            .expect("timeline init");
        timeline.recompute(&data);

        let computed = timeline.computed_data();
        prop_assert_eq!(computed.len(), timeline.saved_data().len());
        for pair in computed.windows(2) {
            prop_assert!(pair[1].render_x >= pair[0].render_x);
        }
        for point in computed {
            prop_assert!(point.render_x.is_finite() && point.render_y.is_finite());
        }
    }

    #[test]
    fn bounded_window_span_is_capped(
        gaps in prop::collection::vec(1.0f64..500.0, 2..300),
        window in 1.0f64..10_000.0
    ) {
        let values: Vec<f64> = (0..gaps.len()).map(|i| (i as f64).sin()).collect();
        let data = sorted_series(&gaps, &values);
        let mut timeline = Timeline::new(
            NullRenderer::default(),
            TimelineConfig::bounded(window),
        )
        .expect("timeline init");
        timeline.recompute(&data);

        let saved = timeline.saved_data();
        let latest = saved[saved.len() - 1].time;
        // everything after the retained boundary sample is inside the window
        prop_assert!(latest - saved[1].time <= window + 1e-6);
        if saved.len() >= 3 {
            prop_assert!(latest - saved[0].time <= window + 1e-6);
        }
    }

    #[test]
    fn always_show_value_marker_is_never_clipped(
        gaps in prop::collection::vec(1.0f64..500.0, 2..100),
        values in prop::collection::vec(-1_000.0f64..1_000.0, 100),
        marker in -5_000.0f64..5_000.0
    ) {
        let data = sorted_series(&gaps, &values);
        let config = TimelineConfig::default()
            .with_marker(Marker::value(marker).with_always_show(true));
        let mut timeline = Timeline::new(NullRenderer::new(Viewport::new(900, 600)), config)
            .expect("timeline init");
        timeline.recompute(&data);

        let plot = timeline.plot_area();
        let render_y = timeline.computed_markers()[0].render_y().expect("render y");
        prop_assert!(render_y >= plot.top - 1e-9 && render_y <= plot.bottom() + 1e-9);
    }

    #[test]
    fn unsorted_input_never_panics(
        samples in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..100),
        window in window_strategy()
    ) {
        let data: Vec<RawPoint> = samples
            .into_iter()
            .map(|(time, value)| RawPoint::new(time, value))
            .collect();
        let config = TimelineConfig::default().with_time_window(window);
        let mut timeline = Timeline::new(NullRenderer::default(), config).expect("timeline init");

        timeline.recompute(&data);
        if data.len() >= 2 {
            prop_assert_eq!(timeline.computed_data().len(), timeline.saved_data().len());
        }
        prop_assert!(timeline.draw().is_ok());
    }
}
