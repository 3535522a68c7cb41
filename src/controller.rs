//! Per-frame orchestration of the speed readout.
//!
//! This module provides [`SpeedDisplayController`], which owns the sink and
//! runs the full pipeline once per frame.
//!
//! # Overview
//!
//! Each frame the controller:
//! - picks the effective max speed (user cap or the actor's own)
//! - pushes the unclamped fill ratio
//! - advances the over-max color machine and pushes a color on edges only
//! - formats and pushes the live label, unless labels are disabled
//!
//! Zip speed captures arrive from a separate game event and are rendered
//! into the second label independently of the frame cycle.
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::{SpeedDisplayController, SpeedometerConfig};
//! use speedo_hud::hal::MockSink;
//! use speedo_hud::traits::LabelSlot;
//!
//! let mut controller = SpeedDisplayController::new(SpeedometerConfig::default(), MockSink::new());
//! controller.init().unwrap();
//!
//! // Main loop - call on_frame() every render tick
//! controller.on_frame(10.0, 20.0).unwrap();
//!
//! let sink = controller.sink();
//! assert!((sink.fill - 0.5).abs() < 0.01);
//! assert_eq!(sink.label(LabelSlot::Live), Some("36.0 KM/H"));
//! ```

use crate::color::Rgba;
use crate::config::{SpeedCap, SpeedometerConfig};
use crate::label::{DecimalFormatter, LabelFormatter, LabelText};
use crate::projector::fill_ratio;
use crate::threshold::{ColorState, ThresholdColorStateMachine};
use crate::traits::{ActorTelemetry, LabelSlot, SpeedSource, SpeedometerSink};
use crate::units::{convert, DisplayMode, SpeedUnit};
use crate::zip::ZipSpeedRecorder;

/// Drives a [`SpeedometerSink`] from per-frame speed telemetry.
///
/// # Type Parameters
///
/// - `S`: where the readout is drawn ([`SpeedometerSink`] trait)
/// - `F`: label formatter, [`DecimalFormatter`] unless a test swaps it
///
/// # Thread Safety
///
/// Frames and zip captures are expected on one thread. Hosts that share
/// the controller across threads wrap it themselves.
pub struct SpeedDisplayController<S: SpeedometerSink, F: LabelFormatter = DecimalFormatter> {
    sink: S,
    formatter: F,
    source: SpeedSource,
    speed_cap: SpeedCap,
    live_unit: Option<SpeedUnit>,
    base_color: Rgba,
    over_max_color: Rgba,
    threshold: Option<ThresholdColorStateMachine>,
    zip: ZipSpeedRecorder,
    last_speed: f32,
    last_max_speed: f32,
    last_fill: f32,
}

impl<S: SpeedometerSink> SpeedDisplayController<S> {
    /// Create a controller with the standard one-decimal formatter.
    pub fn new(config: SpeedometerConfig, sink: S) -> Self {
        Self::with_formatter(config, sink, DecimalFormatter)
    }
}

impl<S: SpeedometerSink, F: LabelFormatter> SpeedDisplayController<S, F> {
    /// Create a controller with a custom label formatter.
    ///
    /// The configuration is normalized and the speed cap derived here, once.
    pub fn with_formatter(config: SpeedometerConfig, sink: S, formatter: F) -> Self {
        let config = config.normalized();
        let threshold = config
            .display_over_max_color
            .then(ThresholdColorStateMachine::new);

        Self {
            sink,
            formatter,
            source: config.speed_source(),
            speed_cap: config.speed_cap(),
            live_unit: config.display_mode.unit(),
            base_color: config.bar_color,
            over_max_color: config.over_max_color,
            threshold,
            zip: ZipSpeedRecorder::from_config(&config),
            last_speed: 0.0,
            last_max_speed: 0.0,
            last_fill: 0.0,
        }
    }

    /// Prepare the sink: base bar color and the initial zip label.
    ///
    /// Call after the widgets exist, before the first frame. Calling it
    /// again (after the host rebuilds its widgets) puts the color machine
    /// back to normal to match the base color just pushed. The zip label
    /// shows the stored speed, 0 until the first capture.
    pub fn init(&mut self) -> Result<(), S::Error> {
        self.sink.set_bar_color(self.base_color)?;
        if let Some(threshold) = self.threshold.as_mut() {
            threshold.reset();
        }
        self.zip.render(&mut self.formatter, &mut self.sink)?;
        Ok(())
    }

    /// Run the pipeline for one frame.
    ///
    /// `raw_speed` is in m/s; `actor_max_speed` is the actor's own max
    /// speed, replaced by the configured cap when one is set.
    pub fn on_frame(&mut self, raw_speed: f32, actor_max_speed: f32) -> Result<(), S::Error> {
        let max_speed = self.speed_cap.effective_max(actor_max_speed);

        let fill = fill_ratio(raw_speed, max_speed);
        self.sink.set_fill(fill)?;
        log::trace!("speed {raw_speed:.2}/{max_speed:.2} m/s, fill {fill:.3}");

        self.last_speed = raw_speed;
        self.last_max_speed = max_speed;
        self.last_fill = fill;

        // A failed push leaves the edge pending for the next frame.
        if let Some(threshold) = self.threshold.as_mut() {
            if let Some(transition) = threshold.pending(raw_speed, max_speed) {
                let color = transition.color(self.base_color, self.over_max_color);
                self.sink.set_bar_color(color)?;
                threshold.commit(transition);
                log::debug!("speed {raw_speed:.2} vs max {max_speed:.2}: {transition:?}");
            }
        }

        if let Some(unit) = self.live_unit {
            let (value, template) = convert(raw_speed, unit);
            let text = self.formatter.format(value, template);
            self.sink.set_label(LabelSlot::Live, &text)?;
        }

        Ok(())
    }

    /// Sample the configured speed from the actor and run a frame.
    pub fn update<A: ActorTelemetry + ?Sized>(&mut self, actor: &A) -> Result<(), S::Error> {
        let speed = self.source.sample(actor);
        self.on_frame(speed, actor.max_move_speed())
    }

    /// Store a zip speed without rendering it.
    pub fn record_zip(&mut self, speed: f32) {
        self.zip.capture(speed);
    }

    /// Render the stored zip speed into the zip label.
    ///
    /// Returns `None` when the zip label is disabled.
    pub fn render_zip(&mut self) -> Result<Option<LabelText>, S::Error> {
        self.zip.render(&mut self.formatter, &mut self.sink)
    }

    /// Store a zip speed and render it right away.
    ///
    /// This is the hook for the game event that produces zip speeds.
    pub fn capture_zip(&mut self, speed: f32) -> Result<(), S::Error> {
        self.zip.capture(speed);
        self.zip.render(&mut self.formatter, &mut self.sink)?;
        Ok(())
    }

    /// Current color state, or `None` when the over-max color is disabled.
    pub fn color_state(&self) -> Option<ColorState> {
        self.threshold.as_ref().map(|t| t.state())
    }

    /// The display mode labels are rendered in.
    pub fn display_mode(&self) -> DisplayMode {
        match self.live_unit {
            None => DisplayMode::None,
            Some(SpeedUnit::MetersPerSecond) => DisplayMode::MetersPerSecond,
            Some(SpeedUnit::KilometersPerHour) => DisplayMode::KilometersPerHour,
            Some(SpeedUnit::MilesPerHour) => DisplayMode::MilesPerHour,
        }
    }

    /// Snapshot of the last frame for UI/debug output.
    pub fn state(&self) -> SpeedometerState {
        SpeedometerState {
            speed: self.last_speed,
            max_speed: self.last_max_speed,
            fill: self.last_fill,
            color_state: self.color_state().unwrap_or_default(),
            zip_speed: self.zip.captured(),
        }
    }

    /// The sink being driven.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. for deferred style tasks.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The label formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Consume the controller, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Snapshot of the last processed frame.
///
/// # Example
///
/// ```rust
/// use speedo_hud::{SpeedDisplayController, SpeedometerConfig};
/// use speedo_hud::hal::MockSink;
/// use speedo_hud::threshold::ColorState;
///
/// let controller = SpeedDisplayController::new(SpeedometerConfig::default(), MockSink::new());
/// let state = controller.state();
/// assert_eq!(state.speed, 0.0);
/// assert_eq!(state.color_state, ColorState::Normal);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedometerState {
    /// Raw speed of the last frame (m/s).
    pub speed: f32,
    /// Effective max speed of the last frame (m/s).
    pub max_speed: f32,
    /// Fill ratio pushed on the last frame (unclamped).
    pub fill: f32,
    /// Bar color state; always `Normal` when the over-max color is off.
    pub color_state: ColorState,
    /// Last captured zip speed (m/s).
    pub zip_speed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{CountingFormatter, MockSink};

    fn controller(config: SpeedometerConfig) -> SpeedDisplayController<MockSink> {
        let mut controller = SpeedDisplayController::new(config, MockSink::new());
        controller.init().unwrap();
        controller
    }

    #[test]
    fn init_pushes_base_color_once() {
        let controller = controller(SpeedometerConfig::default());
        assert_eq!(controller.sink().color_count, 1);
        assert_eq!(controller.sink().color, Some(Rgba::DEFAULT_BAR));
    }

    #[test]
    fn init_without_zip_writes_no_label() {
        let controller = controller(SpeedometerConfig::default());
        assert_eq!(controller.sink().label_count, 0);
    }

    #[test]
    fn init_with_zip_shows_zero() {
        let controller = controller(SpeedometerConfig::default().with_display_zip_speed(true));
        assert_eq!(controller.sink().label(LabelSlot::Zip), Some("0.0 KM/H"));
    }

    #[test]
    fn init_keeps_zip_recorded_before_it() {
        let mut controller = SpeedDisplayController::new(
            SpeedometerConfig::default().with_display_zip_speed(true),
            MockSink::new(),
        );
        controller.record_zip(5.0);
        controller.init().unwrap();

        assert_eq!(controller.state().zip_speed, 5.0);
        assert_eq!(controller.sink().label(LabelSlot::Zip), Some("18.0 KM/H"));
    }

    #[test]
    fn second_init_resets_color_state() {
        let mut controller = controller(SpeedometerConfig::default());
        controller.on_frame(15.0, 10.0).unwrap();
        assert_eq!(controller.color_state(), Some(ColorState::OverMax));

        controller.init().unwrap();
        assert_eq!(controller.color_state(), Some(ColorState::Normal));
        assert_eq!(controller.sink().color, Some(Rgba::DEFAULT_BAR));

        // still over max: the warning color comes back on the next frame
        controller.on_frame(15.0, 10.0).unwrap();
        assert_eq!(controller.sink().color, Some(Rgba::DEFAULT_OVER_MAX));
    }

    #[test]
    fn cap_overrides_actor_max() {
        let mut controller = controller(SpeedometerConfig::default().with_custom_speed_cap_kmh(36.0));
        controller.on_frame(5.0, 100.0).unwrap();
        let state = controller.state();
        assert!((state.max_speed - 10.0).abs() < 1e-4);
        assert!((state.fill - 5.0 / 9.99).abs() < 1e-4);
    }

    #[test]
    fn disabled_threshold_never_recolors() {
        let mut controller =
            controller(SpeedometerConfig::default().with_display_over_max_color(false));
        for speed in [5.0, 50.0, 5.0, 50.0] {
            controller.on_frame(speed, 10.0).unwrap();
        }
        assert_eq!(controller.color_state(), None);
        // only the init push
        assert_eq!(controller.sink().color_count, 1);
        assert_eq!(controller.state().color_state, ColorState::Normal);
    }

    #[test]
    fn none_mode_skips_formatter() {
        let config = SpeedometerConfig::default()
            .with_display_mode(DisplayMode::None)
            .with_display_zip_speed(true);
        let mut controller =
            SpeedDisplayController::with_formatter(config, MockSink::new(), CountingFormatter::new());
        controller.init().unwrap();
        controller.on_frame(12.0, 10.0).unwrap();
        controller.capture_zip(4.0).unwrap();

        assert_eq!(controller.formatter().calls, 0);
        assert_eq!(controller.sink().label_count, 0);
        assert_eq!(controller.display_mode(), DisplayMode::None);
    }

    #[test]
    fn record_then_render_zip() {
        let mut controller = controller(
            SpeedometerConfig::default()
                .with_display_zip_speed(true)
                .with_display_mode(DisplayMode::MetersPerSecond),
        );
        controller.record_zip(7.24);
        // not rendered yet
        assert_eq!(controller.sink().label(LabelSlot::Zip), Some("0.0 M/S"));

        let text = controller.render_zip().unwrap().unwrap();
        assert_eq!(text.as_str(), "7.2 M/S");
        assert_eq!(controller.state().zip_speed, 7.24);
    }
}
