use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{OverflowBehaviour, RawPoint, ValueWindow, Viewport};
use timeline_rs::extensions::Marker;
use timeline_rs::render::{Color, DrawCommand, LineStrokeStyle, NullRenderer};

fn timeline(config: TimelineConfig) -> Timeline<NullRenderer> {
    Timeline::new(NullRenderer::new(Viewport::new(1000, 500)), config).expect("timeline init")
}

fn data() -> Vec<RawPoint> {
    vec![
        RawPoint::new(0.0, 0.0),
        RawPoint::new(1000.0, 10.0),
        RawPoint::new(2000.0, -10.0),
        RawPoint::new(3000.0, 5.0),
    ]
}

#[test]
fn repeated_draws_do_not_touch_computed_state() {
    let mut timeline = timeline(TimelineConfig::default().with_marker(Marker::value(2.0)));
    timeline.recompute(&data());

    let points = timeline.computed_data().to_vec();
    let markers = timeline.computed_markers().to_vec();
    let transform = timeline.transform();

    for _ in 0..5 {
        timeline.draw().expect("draw");
    }

    assert_eq!(timeline.computed_data(), points.as_slice());
    assert_eq!(timeline.computed_markers(), markers.as_slice());
    assert_eq!(timeline.transform(), transform);
    assert_eq!(timeline.renderer().frames_rendered(), 5);
}

#[test]
fn frame_paints_background_line_border_then_markers() {
    let config = TimelineConfig::default()
        .with_background_colour(Color::rgb(0.1, 0.1, 0.1))
        .with_marker(Marker::value(5.0).with_label("Target"));
    let mut timeline = timeline(config);
    timeline.recompute(&data());
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    assert_eq!(frame.commands.len(), 5);
    assert!(matches!(
        &frame.commands[0],
        DrawCommand::Rect(rect) if rect.fill_color == Some(Color::rgb(0.1, 0.1, 0.1))
    ));
    assert!(matches!(
        &frame.commands[1],
        DrawCommand::Polyline(polyline) if polyline.points.len() == 4 && polyline.clip.is_none()
    ));
    assert!(matches!(
        &frame.commands[2],
        DrawCommand::Rect(rect) if rect.fill_color.is_none() && rect.width == 1000.0
    ));
    assert!(matches!(&frame.commands[3], DrawCommand::Line(line) if line.y1 == line.y2));
    assert!(matches!(&frame.commands[4], DrawCommand::Text(text) if text.text == "Target"));

    let polyline = frame.polylines().next().expect("polyline");
    assert_eq!(polyline.stroke_width, 0.8);
    assert_eq!(polyline.color, Color::BLACK);
}

#[test]
fn insufficient_data_still_draws_background_and_border() {
    let mut timeline = timeline(TimelineConfig::default());
    timeline.recompute(&[RawPoint::new(0.0, 0.0)]);
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    assert_eq!(frame.polylines().count(), 0);
    assert_eq!(frame.commands.len(), 2);
}

#[test]
fn offscreen_markers_are_pruned_for_the_frame_but_kept() {
    let mut timeline = timeline(
        TimelineConfig::default()
            .with_marker(Marker::time(5_000.0))
            .with_marker(Marker::time(1_500.0)),
    );
    timeline.recompute(&data());
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!((lines[0].x1 - 500.0).abs() <= 1e-9);
    assert_eq!(timeline.markers().len(), 2);
    assert_eq!(timeline.computed_markers().len(), 2);

    // the same marker reappears once data scrolls up to it
    let mut scrolled = data();
    scrolled.push(RawPoint::new(6_000.0, 1.0));
    timeline.recompute(&scrolled);
    timeline.draw().expect("draw");
    let frame = timeline.renderer().last_frame().expect("frame");
    assert_eq!(frame.lines().count(), 2);
}

#[test]
fn dotted_markers_are_shifted_by_one_pixel() {
    let mut timeline = timeline(
        TimelineConfig::default()
            .with_marker(Marker::time(1_500.0).with_line_style(LineStrokeStyle::Dotted))
            .with_marker(Marker::time(1_500.0).with_line_style(LineStrokeStyle::Dashed)),
    );
    timeline.recompute(&data());
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    let xs: Vec<_> = frame.lines().map(|line| line.x1).collect();
    assert_eq!(xs.len(), 2);
    assert!((xs[0] - 501.0).abs() <= 1e-9);
    assert!((xs[1] - 500.0).abs() <= 1e-9);
}

#[test]
fn clipped_value_window_clips_series_to_plot_area() {
    let window = ValueWindow::new(-5.0, 5.0, OverflowBehaviour::Clip).expect("window");
    let mut timeline = timeline(TimelineConfig::default().with_value_window(window));
    timeline.recompute(&data());
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    let polyline = frame.polylines().next().expect("polyline");
    assert_eq!(polyline.clip, Some((0.0, 0.0, 1000.0, 500.0)));
    assert!(timeline.computed_data()[1].render_y < 0.0);
}
