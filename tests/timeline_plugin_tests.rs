use std::cell::RefCell;
use std::rc::Rc;

use timeline_rs::ChartError;
use timeline_rs::api::{Timeline, TimelineConfig};
use timeline_rs::core::{Padding, RawPoint, Viewport};
use timeline_rs::extensions::{PluginHook, TimelinePlugin};
use timeline_rs::render::{
    Color, DrawCommand, LinePrimitive, NullRenderer, RenderTarget, TextHAlign, TextPrimitive,
};

type Log = Rc<RefCell<Vec<String>>>;

fn recording_plugin(id: &'static str, log: &Log) -> TimelinePlugin {
    let push = |hook: PluginHook| {
        let log = Rc::clone(log);
        let entry = format!("{id}:{}", hook.name());
        move || log.borrow_mut().push(entry.clone())
    };
    let construct = push(PluginHook::Construct);
    let pause = push(PluginHook::Pause);
    let resume = push(PluginHook::Resume);
    let compute_before = push(PluginHook::ComputeBefore);
    let compute_after = push(PluginHook::ComputeAfter);
    let calculate_positions = push(PluginHook::CalculatePositions);
    let draw_before = push(PluginHook::DrawBefore);
    let draw_after = push(PluginHook::DrawAfter);

    TimelinePlugin::new(id)
        .on_construct(move |_| construct())
        .on_pause(move |_| pause())
        .on_resume(move |_| resume())
        .on_compute_before(move |_| compute_before())
        .on_compute_after(move |_| compute_after())
        .on_calculate_positions(move |_| calculate_positions())
        .on_draw_before(move |_, _| draw_before())
        .on_draw_after(move |_, _| draw_after())
}

fn data() -> Vec<RawPoint> {
    vec![
        RawPoint::new(0.0, 1.0),
        RawPoint::new(100.0, 3.0),
        RawPoint::new(200.0, 2.0),
    ]
}

#[test]
fn hooks_fire_in_lifecycle_and_registration_order() {
    let log: Log = Rc::default();
    let mut timeline = Timeline::builder(NullRenderer::default(), TimelineConfig::default())
        .with_plugin(recording_plugin("a", &log))
        .with_plugin(recording_plugin("b", &log))
        .build()
        .expect("timeline init");
    assert_eq!(
        log.borrow().as_slice(),
        [
            "a:construct",
            "b:construct",
            "a:calculate-positions",
            "b:calculate-positions",
        ]
    );

    log.borrow_mut().clear();
    timeline.recompute(&data());
    timeline.draw().expect("draw");
    assert_eq!(
        log.borrow().as_slice(),
        [
            "a:compute:before",
            "b:compute:before",
            "a:compute:after",
            "b:compute:after",
            "a:draw:before",
            "b:draw:before",
            "a:draw:after",
            "b:draw:after",
        ]
    );

    log.borrow_mut().clear();
    timeline.pause();
    timeline.recompute(&data());
    timeline.resume(&data());
    assert_eq!(
        log.borrow().as_slice(),
        [
            "a:pause",
            "b:pause",
            "a:compute:before",
            "b:compute:before",
            "a:compute:after",
            "b:compute:after",
            "a:resume",
            "b:resume",
        ]
    );

    log.borrow_mut().clear();
    timeline.resize(Viewport::new(640, 480)).expect("resize");
    assert_eq!(
        log.borrow().as_slice(),
        [
            "a:compute:before",
            "b:compute:before",
            "a:compute:after",
            "b:compute:after",
            "a:calculate-positions",
            "b:calculate-positions",
        ]
    );
}

#[test]
fn plugins_without_a_hook_are_skipped() {
    let log: Log = Rc::default();
    let mut timeline = Timeline::builder(NullRenderer::default(), TimelineConfig::default())
        .with_plugin(TimelinePlugin::new("silent"))
        .with_plugin(recording_plugin("loud", &log))
        .build()
        .expect("timeline init");

    timeline.pause();
    assert_eq!(log.borrow().last().map(String::as_str), Some("loud:pause"));
    assert_eq!(timeline.plugin_ids().collect::<Vec<_>>(), vec!["silent", "loud"]);
    assert!(timeline.has_plugin("silent"));
    assert_eq!(timeline.plugin_count(), 2);
}

#[test]
fn duplicate_plugin_ids_are_rejected_at_build() {
    let result = Timeline::builder(NullRenderer::default(), TimelineConfig::default())
        .with_plugin(TimelinePlugin::new("axis"))
        .with_plugin(TimelinePlugin::new("axis"))
        .build();

    match result {
        Err(ChartError::DuplicatePlugin(id)) => assert_eq!(id, "axis"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("duplicate plugin ids must be rejected"),
    }
}

#[test]
fn construct_hooks_accumulate_padding_once() {
    let widths = Rc::new(RefCell::new(Vec::<(f64, f64)>::new()));
    let observed = Rc::clone(&widths);

    let config = TimelineConfig::default().with_padding(Padding::new(5.0, 0.0, 0.0, 10.0));
    let mut timeline = Timeline::builder(NullRenderer::new(Viewport::new(800, 600)), config)
        .with_plugin(TimelinePlugin::new("value-axis").on_construct(|context| {
            context.padding.add_left(30.0).add_bottom(20.0);
        }))
        .with_plugin(
            TimelinePlugin::new("labels")
                .on_construct(|context| {
                    context.padding.add_left(20.0);
                })
                .on_calculate_positions(move |view| {
                    observed
                        .borrow_mut()
                        .push((view.width_inside_padding(), view.height_inside_padding()));
                }),
        )
        .build()
        .expect("timeline init");

    assert_eq!(timeline.padding(), Padding::new(5.0, 0.0, 20.0, 60.0));
    assert_eq!(timeline.width_inside_padding(), 740.0);
    assert_eq!(timeline.height_inside_padding(), 575.0);
    assert_eq!(widths.borrow().as_slice(), [(740.0, 575.0)]);

    timeline.recompute(&data());
    timeline.resize(Viewport::new(900, 600)).expect("resize");
    assert_eq!(timeline.padding(), Padding::new(5.0, 0.0, 20.0, 60.0));
    assert_eq!(widths.borrow().as_slice(), [(740.0, 575.0), (840.0, 575.0)]);
}

#[test]
fn compute_after_hook_sees_fresh_geometry() {
    let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
    let observed = Rc::clone(&seen);
    let mut timeline = Timeline::builder(NullRenderer::default(), TimelineConfig::default())
        .with_plugin(TimelinePlugin::new("probe").on_compute_after(move |view| {
            observed.borrow_mut().push(view.computed_data.len());
        }))
        .build()
        .expect("timeline init");

    timeline.recompute(&data());
    timeline.recompute(&[RawPoint::new(0.0, 0.0), RawPoint::new(1.0, 1.0)]);
    assert_eq!(seen.borrow().as_slice(), [3, 2]);
}

#[test]
fn draw_after_overlays_are_painted_last() {
    let mut timeline = Timeline::builder(NullRenderer::default(), TimelineConfig::default())
        .with_plugin(TimelinePlugin::new("crosshair").on_draw_after(|view, frame| {
            let cursor = view.cursor();
            if !cursor.over_chart {
                return;
            }
            frame.push_line(LinePrimitive::new(
                cursor.chart_x,
                view.plot.top,
                cursor.chart_x,
                view.plot.bottom(),
                1.0,
                Color::rgb(1.0, 0.0, 0.0),
            ));
            frame.push_text(TextPrimitive::new(
                format!("{:.1}", view.transform.render_x(100.0, view.plot)),
                cursor.chart_x,
                view.plot.top,
                12.0,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }))
        .build()
        .expect("timeline init");

    timeline.recompute(&data());
    timeline.pointer_move(120.0, 80.0);
    timeline.draw().expect("draw");

    let frame = timeline.renderer().last_frame().expect("frame");
    let commands = &frame.commands;
    assert!(matches!(&commands[commands.len() - 2], DrawCommand::Line(line) if line.x1 == 120.0));
    assert!(matches!(&commands[commands.len() - 1], DrawCommand::Text(text) if text.text == "400.0"));
    assert_eq!(timeline.renderer().viewport(), Viewport::new(800, 600));
}
