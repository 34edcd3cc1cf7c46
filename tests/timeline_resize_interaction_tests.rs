use approx::assert_abs_diff_eq;
use timeline_rs::ChartError;
use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{DistanceMethod, Padding, RawPoint, Viewport};
use timeline_rs::render::{NullRenderer, RenderTarget};

fn data() -> Vec<RawPoint> {
    vec![
        RawPoint::new(0.0, 0.0),
        RawPoint::new(1000.0, 10.0),
        RawPoint::new(2000.0, -10.0),
        RawPoint::new(3000.0, 5.0),
    ]
}

fn timeline() -> Timeline<NullRenderer> {
    Timeline::new(
        NullRenderer::new(Viewport::new(1000, 500)),
        TimelineConfig::default(),
    )
    .expect("timeline init")
}

#[test]
fn resize_reprojects_current_saved_data() {
    let mut timeline = timeline();
    timeline.recompute(&data());
    let saved = timeline.saved_data().to_vec();

    timeline.resize(Viewport::new(2000, 250)).expect("resize");

    assert_eq!(timeline.viewport(), Viewport::new(2000, 250));
    assert_eq!(timeline.renderer().viewport(), Viewport::new(2000, 250));
    assert_eq!(timeline.saved_data(), saved.as_slice());
    let last = timeline.computed_data()[3];
    assert_abs_diff_eq!(last.render_x, 2000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(timeline.computed_data()[2].render_y, 250.0, epsilon = 1e-9);
}

#[test]
fn invalid_resize_is_rejected_and_state_kept() {
    let mut timeline = timeline();
    timeline.recompute(&data());
    let before = timeline.computed_data().to_vec();

    let result = timeline.resize(Viewport::new(0, 300));
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 300
        })
    ));
    assert_eq!(timeline.viewport(), Viewport::new(1000, 500));
    assert_eq!(timeline.computed_data(), before.as_slice());
}

#[test]
fn zero_sized_render_target_fails_construction() {
    let result = Timeline::new(
        NullRenderer::new(Viewport::new(0, 0)),
        TimelineConfig::default(),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn pointer_updates_interaction_context() {
    let mut timeline = timeline();
    assert!(!timeline.cursor().over_chart);

    timeline.pointer_move(320.0, 40.0);
    let cursor = timeline.cursor();
    assert!(cursor.over_chart);
    assert_eq!((cursor.chart_x, cursor.chart_y), (320.0, 40.0));

    timeline.pointer_move(1200.0, 40.0);
    assert!(!timeline.cursor().over_chart);

    timeline.pointer_move(10.0, 10.0);
    timeline.pointer_leave();
    assert_eq!(timeline.cursor().chart_x, -1.0);
    assert!(!timeline.interaction().cursor().over_chart);
}

#[test]
fn nearest_point_honours_distance_method() {
    let mut timeline = timeline();
    assert!(timeline.nearest_point(0.0, 0.0, DistanceMethod::Pythagoras).is_none());
    timeline.recompute(&data());

    // render positions: x = 0, 333.3, 666.7, 1000; y = 250, 0, 500, 125
    let by_x = timeline
        .nearest_point(640.0, 0.0, DistanceMethod::ClosestX)
        .expect("nearest by x");
    assert_eq!(by_x.time, 2000.0);

    let by_y = timeline
        .nearest_point(640.0, 0.0, DistanceMethod::ClosestY)
        .expect("nearest by y");
    assert_eq!(by_y.time, 1000.0);

    let euclid = timeline
        .nearest_point(900.0, 140.0, DistanceMethod::Pythagoras)
        .expect("nearest");
    assert_eq!(euclid.time, 3000.0);

    timeline.pointer_move(20.0, 240.0);
    let under_cursor = timeline
        .nearest_point_to_cursor(DistanceMethod::default())
        .expect("cursor point");
    assert_eq!(under_cursor.time, 0.0);
}

#[test]
fn inverse_mapping_follows_padding_and_transform() {
    let config = TimelineConfig::default().with_padding(Padding::new(20.0, 10.0, 30.0, 40.0));
    let mut timeline = Timeline::new(NullRenderer::new(Viewport::new(1000, 500)), config)
        .expect("timeline init");
    timeline.recompute(&data());

    let point = timeline.computed_data()[1];
    let time = timeline.time_at_render_x(point.render_x).expect("time");
    let value = timeline.value_at_render_y(point.render_y).expect("value");
    assert_abs_diff_eq!(time, 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(value, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.render_y, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(timeline.computed_data()[3].render_x, 990.0, epsilon = 1e-9);
}
