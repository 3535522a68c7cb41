//! Stored zip speed and its secondary label.
//!
//! A zip speed is captured by a game event (not every frame) and shown in
//! its own label until the next capture. Capturing and rendering are
//! independent: rendering twice without a capture in between produces the
//! same text.
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::hal::MockSink;
//! use speedo_hud::label::DecimalFormatter;
//! use speedo_hud::traits::LabelSlot;
//! use speedo_hud::units::SpeedUnit;
//! use speedo_hud::zip::ZipSpeedRecorder;
//!
//! let mut recorder = ZipSpeedRecorder::new(Some(SpeedUnit::KilometersPerHour));
//! let mut sink = MockSink::new();
//!
//! recorder.capture(5.0);
//! recorder.render(&mut DecimalFormatter, &mut sink).unwrap();
//! assert_eq!(sink.label(LabelSlot::Zip), Some("18.0 KM/H"));
//! ```

use crate::config::SpeedometerConfig;
use crate::label::{LabelFormatter, LabelText};
use crate::traits::{LabelSlot, SpeedometerSink};
use crate::units::{convert, SpeedUnit};

/// Holds the last captured zip speed.
#[derive(Clone, Debug, Default)]
pub struct ZipSpeedRecorder {
    captured: f32,
    unit: Option<SpeedUnit>,
}

impl ZipSpeedRecorder {
    /// Creates a recorder rendering in `unit`, or a disabled one for `None`.
    pub fn new(unit: Option<SpeedUnit>) -> Self {
        Self {
            captured: 0.0,
            unit,
        }
    }

    /// Creates a recorder enabled only when the config shows a zip label.
    pub fn from_config(config: &SpeedometerConfig) -> Self {
        let unit = if config.display_zip_speed {
            config.display_mode.unit()
        } else {
            None
        };
        Self::new(unit)
    }

    /// Returns true if [`render`](Self::render) writes a label.
    pub fn is_enabled(&self) -> bool {
        self.unit.is_some()
    }

    /// The last captured speed in m/s (0 before the first capture).
    pub fn captured(&self) -> f32 {
        self.captured
    }

    /// Store a new zip speed, replacing the previous one.
    pub fn capture(&mut self, speed: f32) {
        log::debug!("zip speed captured: {speed:.2} m/s");
        self.captured = speed;
    }

    /// Write the stored speed to the zip label.
    ///
    /// Returns the rendered text, or `None` when the recorder is disabled
    /// (no formatting happens then).
    pub fn render<F, S>(&self, formatter: &mut F, sink: &mut S) -> Result<Option<LabelText>, S::Error>
    where
        F: LabelFormatter,
        S: SpeedometerSink,
    {
        let Some(unit) = self.unit else {
            return Ok(None);
        };

        let (value, template) = convert(self.captured, unit);
        let text = formatter.format(value, template);
        sink.set_label(LabelSlot::Zip, &text)?;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{CountingFormatter, MockSink};
    use crate::label::DecimalFormatter;
    use crate::units::DisplayMode;

    #[test]
    fn starts_at_zero() {
        let recorder = ZipSpeedRecorder::new(Some(SpeedUnit::MetersPerSecond));
        assert_eq!(recorder.captured(), 0.0);
    }

    #[test]
    fn capture_overwrites() {
        let mut recorder = ZipSpeedRecorder::new(Some(SpeedUnit::MetersPerSecond));
        recorder.capture(3.0);
        recorder.capture(-1.5);
        assert_eq!(recorder.captured(), -1.5);
    }

    #[test]
    fn repeated_render_is_stable() {
        let mut recorder = ZipSpeedRecorder::new(Some(SpeedUnit::MetersPerSecond));
        let mut sink = MockSink::new();
        recorder.capture(5.0);

        let first = recorder.render(&mut DecimalFormatter, &mut sink).unwrap();
        let second = recorder.render(&mut DecimalFormatter, &mut sink).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().as_str(), "5.0 M/S");
        assert_eq!(sink.label_count, 2);
    }

    #[test]
    fn disabled_recorder_skips_formatting() {
        let mut recorder = ZipSpeedRecorder::new(None);
        let mut formatter = CountingFormatter::new();
        let mut sink = MockSink::new();
        recorder.capture(9.0);

        assert_eq!(recorder.render(&mut formatter, &mut sink).unwrap(), None);
        assert_eq!(formatter.calls, 0);
        assert_eq!(sink.label_count, 0);
        // capture still stores the value
        assert_eq!(recorder.captured(), 9.0);
    }

    #[test]
    fn from_config_needs_zip_and_labels() {
        let config = SpeedometerConfig::default();
        assert!(!ZipSpeedRecorder::from_config(&config).is_enabled());

        let config = config.with_display_zip_speed(true);
        assert!(ZipSpeedRecorder::from_config(&config).is_enabled());

        let config = config.with_display_mode(DisplayMode::None);
        assert!(!ZipSpeedRecorder::from_config(&config).is_enabled());
    }

    #[test]
    fn render_uses_unit() {
        let mut recorder = ZipSpeedRecorder::new(Some(SpeedUnit::MilesPerHour));
        let mut sink = MockSink::new();
        recorder.capture(10.0);
        recorder.render(&mut DecimalFormatter, &mut sink).unwrap();
        assert_eq!(sink.label(LabelSlot::Zip), Some("22.4 MPH"));
    }
}
