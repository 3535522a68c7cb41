//! Integration tests for the speed display controller

use speedo_hud::{
    hal::{CountingFormatter, MockActor, MockSink},
    ColorState, DeferredOutline, DisplayMode, LabelSlot, Rgba, SpeedDisplayController,
    SpeedometerConfig,
};

fn started(config: SpeedometerConfig) -> SpeedDisplayController<MockSink> {
    let mut controller = SpeedDisplayController::new(config, MockSink::new());
    controller.init().unwrap();
    controller
}

#[test]
fn at_max_speed_fills_bar_and_stays_normal() {
    let mut controller = started(SpeedometerConfig::default());

    controller.on_frame(10.0, 10.0).unwrap();

    let sink = controller.sink();
    assert!((sink.fill - 1.0).abs() < 0.002);
    assert!(sink.fill >= 1.0);
    assert_eq!(controller.color_state(), Some(ColorState::Normal));
    // only the base color from init
    assert_eq!(sink.color_count, 1);
}

#[test]
fn overspeed_switches_color_once() {
    let mut controller = started(SpeedometerConfig::default());

    controller.on_frame(15.0, 10.0).unwrap();

    let sink = controller.sink();
    assert!((sink.fill - 1.5).abs() < 0.01);
    assert_eq!(controller.color_state(), Some(ColorState::OverMax));
    assert_eq!(sink.colors, [Rgba::DEFAULT_BAR, Rgba::DEFAULT_OVER_MAX]);
}

#[test]
fn color_pushes_match_transitions() {
    let mut controller = started(SpeedometerConfig::default());
    let speeds = [5.0, 9.0, 12.0, 13.0, 14.0, 10.0, 8.0, 11.0, 11.0, 3.0];

    let mut transitions = 0;
    let mut previous = ColorState::Normal;
    for speed in speeds {
        controller.on_frame(speed, 10.0).unwrap();
        let state = controller.color_state().unwrap();
        if state != previous {
            transitions += 1;
            previous = state;
        }
    }

    assert_eq!(transitions, 4);
    // init push + one per transition
    assert_eq!(controller.sink().color_count, 1 + transitions);
    assert_eq!(controller.sink().color, Some(Rgba::DEFAULT_BAR));
}

#[test]
fn custom_colors_are_used() {
    let base = Rgba::rgb(0.0, 1.0, 0.0);
    let warn = Rgba::rgb(1.0, 0.0, 0.0);
    let mut controller = started(
        SpeedometerConfig::default()
            .with_bar_color(base)
            .with_over_max_color(warn),
    );

    controller.on_frame(20.0, 10.0).unwrap();
    assert_eq!(controller.sink().color, Some(warn));

    controller.on_frame(2.0, 10.0).unwrap();
    assert_eq!(controller.sink().colors, [base, warn, base]);
}

#[test]
fn live_label_in_each_unit() {
    let cases = [
        (DisplayMode::MetersPerSecond, "12.3 M/S"),
        (DisplayMode::KilometersPerHour, "44.4 KM/H"),
        (DisplayMode::MilesPerHour, "27.6 MPH"),
    ];

    for (mode, expected) in cases {
        let mut controller = started(SpeedometerConfig::default().with_display_mode(mode));
        controller.on_frame(12.34, 30.0).unwrap();
        assert_eq!(controller.sink().label(LabelSlot::Live), Some(expected));
    }
}

#[test]
fn display_none_never_formats() {
    let config = SpeedometerConfig::default().with_display_mode(DisplayMode::None);
    let mut controller =
        SpeedDisplayController::with_formatter(config, MockSink::new(), CountingFormatter::new());
    controller.init().unwrap();

    for speed in [0.0, 5.0, 15.0, 30.0] {
        controller.on_frame(speed, 10.0).unwrap();
    }

    assert_eq!(controller.formatter().calls, 0);
    assert_eq!(controller.sink().label_count, 0);
    // the bar still works
    assert_eq!(controller.sink().fill_count, 4);
    assert_eq!(controller.color_state(), Some(ColorState::OverMax));
}

#[test]
fn formatter_runs_once_per_frame() {
    let mut controller = SpeedDisplayController::with_formatter(
        SpeedometerConfig::default(),
        MockSink::new(),
        CountingFormatter::new(),
    );
    controller.init().unwrap();

    for _ in 0..5 {
        controller.on_frame(4.0, 10.0).unwrap();
    }
    assert_eq!(controller.formatter().calls, 5);
}

#[test]
fn zip_render_is_idempotent() {
    let mut controller = started(SpeedometerConfig::default().with_display_zip_speed(true));

    controller.record_zip(5.0);
    let first = controller.render_zip().unwrap();
    let second = controller.render_zip().unwrap();

    assert_eq!(first, second);
    assert_eq!(controller.sink().label(LabelSlot::Zip), Some("18.0 KM/H"));
}

#[test]
fn zip_capture_independent_of_frames() {
    let mut controller = started(SpeedometerConfig::default().with_display_zip_speed(true));

    controller.on_frame(3.0, 10.0).unwrap();
    controller.capture_zip(25.0).unwrap();
    controller.on_frame(4.0, 10.0).unwrap();
    controller.on_frame(5.0, 10.0).unwrap();

    let sink = controller.sink();
    assert_eq!(sink.label(LabelSlot::Zip), Some("90.0 KM/H"));
    assert_eq!(sink.label(LabelSlot::Live), Some("18.0 KM/H"));
}

#[test]
fn zip_disabled_leaves_zip_label_alone() {
    let mut controller = started(SpeedometerConfig::default());

    controller.capture_zip(25.0).unwrap();

    assert_eq!(controller.sink().label(LabelSlot::Zip), None);
    assert_eq!(controller.state().zip_speed, 25.0);
}

#[test]
fn update_uses_configured_speed_source() {
    let actor = MockActor::new(10.0).with_speeds(6.0, 12.0);

    let mut total = started(SpeedometerConfig::default());
    total.update(&actor).unwrap();
    assert_eq!(total.state().speed, 12.0);
    assert_eq!(total.color_state(), Some(ColorState::OverMax));

    let mut forward = started(SpeedometerConfig::default().with_use_total_speed(false));
    forward.update(&actor).unwrap();
    assert_eq!(forward.state().speed, 6.0);
    assert_eq!(forward.color_state(), Some(ColorState::Normal));
}

#[test]
fn speed_cap_replaces_actor_max() {
    // 72 km/h = 20 m/s
    let mut controller = started(SpeedometerConfig::default().with_custom_speed_cap_kmh(72.0));
    let actor = MockActor::new(10.0).with_speeds(15.0, 15.0);

    controller.update(&actor).unwrap();

    let state = controller.state();
    assert!((state.max_speed - 20.0).abs() < 1e-3);
    assert!((state.fill - 0.75).abs() < 0.01);
    assert_eq!(state.color_state, ColorState::Normal);
}

#[test]
fn deferred_outline_applies_after_construction() {
    let config = SpeedometerConfig::default().with_display_zip_speed(true);
    let mut controller = started(config.clone());
    let mut outline = DeferredOutline::for_config(&config).unwrap();

    // nothing styled during construction
    assert_eq!(controller.sink().outline_count, 0);

    controller.on_frame(1.0, 10.0).unwrap();
    assert!(outline.poll(controller.sink_mut()).unwrap());
    controller.on_frame(2.0, 10.0).unwrap();
    assert!(!outline.poll(controller.sink_mut()).unwrap());

    assert_eq!(controller.sink().outline_count, 2);
}

#[test]
fn rejected_color_push_is_retried_next_frame() {
    let mut controller = started(SpeedometerConfig::default());
    controller.sink_mut().color_failures = 1;

    assert!(controller.on_frame(15.0, 10.0).is_err());
    assert_eq!(controller.color_state(), Some(ColorState::Normal));
    assert_eq!(controller.sink().color, Some(Rgba::DEFAULT_BAR));

    for _ in 0..5 {
        controller.on_frame(15.0, 10.0).unwrap();
    }

    let sink = controller.sink();
    assert_eq!(controller.color_state(), Some(ColorState::OverMax));
    assert_eq!(sink.color, Some(Rgba::DEFAULT_OVER_MAX));
    assert_eq!(sink.colors, [Rgba::DEFAULT_BAR, Rgba::DEFAULT_OVER_MAX]);
}

#[test]
fn sink_errors_propagate() {
    let mut controller = SpeedDisplayController::new(SpeedometerConfig::default(), MockSink::new());
    controller.sink_mut().fail = true;

    assert!(controller.init().is_err());
    assert!(controller.on_frame(1.0, 10.0).is_err());
    assert!(controller.capture_zip(1.0).is_ok()); // zip disabled, sink untouched
}
