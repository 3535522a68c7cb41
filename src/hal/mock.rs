//! Mock implementations for testing without a UI.
//!
//! This module provides test doubles for the sink, telemetry and formatter
//! seams, so the pipeline can be exercised on desktop without a renderer.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockSink`] | [`SpeedometerSink`] | Records fill, color and label pushes |
//! | [`MockActor`] | [`ActorTelemetry`] | Settable forward/total/max speeds |
//! | [`CountingFormatter`] | [`LabelFormatter`] | Counts formatting calls |
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::{SpeedDisplayController, SpeedometerConfig};
//! use speedo_hud::hal::{MockActor, MockSink};
//!
//! let mut controller = SpeedDisplayController::new(SpeedometerConfig::default(), MockSink::new());
//! let actor = MockActor::new(10.0).with_speeds(9.0, 15.0);
//!
//! // Total speed is used by default: 15 m/s against a 10 m/s max
//! controller.update(&actor).unwrap();
//!
//! let sink = controller.sink();
//! assert!((sink.fill - 1.5).abs() < 0.01);
//! assert_eq!(sink.color_count, 1);
//! ```
//!
//! [`SpeedometerSink`]: crate::traits::SpeedometerSink
//! [`ActorTelemetry`]: crate::traits::ActorTelemetry
//! [`LabelFormatter`]: crate::label::LabelFormatter

use std::collections::HashMap;

use crate::color::Rgba;
use crate::label::{format_label, LabelFormatter, LabelTemplate, LabelText};
use crate::style::Outline;
use crate::traits::{ActorTelemetry, LabelSlot, SpeedometerSink};

// ============================================================================
// Sink Mock
// ============================================================================

/// Mock sink for testing.
///
/// Records every push. Use the public fields to inspect what the
/// controller did.
///
/// # Example
///
/// ```rust
/// use speedo_hud::hal::MockSink;
/// use speedo_hud::traits::{LabelSlot, SpeedometerSink};
/// use speedo_hud::Rgba;
///
/// let mut sink = MockSink::new();
/// sink.set_fill(0.25).unwrap();
/// sink.set_bar_color(Rgba::BLACK).unwrap();
/// sink.set_label(LabelSlot::Live, "9.0 M/S").unwrap();
///
/// assert_eq!(sink.fill, 0.25);
/// assert_eq!(sink.color, Some(Rgba::BLACK));
/// assert_eq!(sink.label(LabelSlot::Live), Some("9.0 M/S"));
/// assert_eq!(sink.fill_count, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSink {
    /// Last fill ratio.
    pub fill: f32,
    /// Number of times `set_fill` was called.
    pub fill_count: usize,
    /// Last bar color, `None` until one is pushed.
    pub color: Option<Rgba>,
    /// Every bar color pushed, in order.
    pub colors: Vec<Rgba>,
    /// Number of times `set_bar_color` was called.
    pub color_count: usize,
    /// Current text of each label.
    pub labels: HashMap<LabelSlot, String>,
    /// Number of times `set_label` was called.
    pub label_count: usize,
    /// Outline applied to each label.
    pub outlines: HashMap<LabelSlot, Outline>,
    /// Number of times `set_label_outline` was called.
    pub outline_count: usize,
    /// When set, every call fails with `Err(())`.
    pub fail: bool,
    /// Number of upcoming `set_bar_color` calls to reject.
    pub color_failures: usize,
}

impl MockSink {
    /// Creates a new mock sink with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail until `fail` is cleared.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Current text of a label, if it was ever set.
    pub fn label(&self, slot: LabelSlot) -> Option<&str> {
        self.labels.get(&slot).map(String::as_str)
    }

    fn check(&self) -> Result<(), ()> {
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}

impl SpeedometerSink for MockSink {
    type Error = ();

    fn set_fill(&mut self, ratio: f32) -> Result<(), ()> {
        self.check()?;
        self.fill = ratio;
        self.fill_count += 1;
        Ok(())
    }

    fn set_bar_color(&mut self, color: Rgba) -> Result<(), ()> {
        self.check()?;
        if self.color_failures > 0 {
            self.color_failures -= 1;
            return Err(());
        }
        self.color = Some(color);
        self.colors.push(color);
        self.color_count += 1;
        Ok(())
    }

    fn set_label(&mut self, slot: LabelSlot, text: &str) -> Result<(), ()> {
        self.check()?;
        self.labels.insert(slot, text.to_string());
        self.label_count += 1;
        Ok(())
    }

    fn set_label_outline(&mut self, slot: LabelSlot, outline: Outline) -> Result<(), ()> {
        self.check()?;
        self.outlines.insert(slot, outline);
        self.outline_count += 1;
        Ok(())
    }
}

// ============================================================================
// Telemetry Mock
// ============================================================================

/// Mock actor telemetry for testing.
///
/// # Example
///
/// ```rust
/// use speedo_hud::hal::MockActor;
/// use speedo_hud::traits::ActorTelemetry;
///
/// let mut actor = MockActor::new(12.0);
/// actor.set_speeds(3.0, 4.0);
/// assert_eq!(actor.forward_speed(), 3.0);
/// assert_eq!(actor.total_speed(), 4.0);
/// assert_eq!(actor.max_move_speed(), 12.0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockActor {
    /// Speed along the facing direction (m/s).
    pub forward: f32,
    /// Total speed (m/s).
    pub total: f32,
    /// Max movement speed (m/s).
    pub max: f32,
}

impl MockActor {
    /// Creates a stationary actor with the given max speed.
    pub fn new(max: f32) -> Self {
        Self {
            forward: 0.0,
            total: 0.0,
            max,
        }
    }

    /// Sets forward and total speed.
    pub fn with_speeds(mut self, forward: f32, total: f32) -> Self {
        self.set_speeds(forward, total);
        self
    }

    /// Updates forward and total speed in place.
    pub fn set_speeds(&mut self, forward: f32, total: f32) {
        self.forward = forward;
        self.total = total;
    }
}

impl ActorTelemetry for MockActor {
    fn forward_speed(&self) -> f32 {
        self.forward
    }

    fn total_speed(&self) -> f32 {
        self.total
    }

    fn max_move_speed(&self) -> f32 {
        self.max
    }
}

// ============================================================================
// Formatter Mock
// ============================================================================

/// Formatter that counts calls and delegates to the standard format.
///
/// # Example
///
/// ```rust
/// use speedo_hud::hal::CountingFormatter;
/// use speedo_hud::label::{LabelFormatter, LabelTemplate};
///
/// let mut formatter = CountingFormatter::new();
/// let text = formatter.format(1.0, LabelTemplate::new("M/S"));
/// assert_eq!(text.as_str(), "1.0 M/S");
/// assert_eq!(formatter.calls, 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingFormatter {
    /// Number of times `format` was called.
    pub calls: usize,
}

impl CountingFormatter {
    /// Creates a formatter with a zero call count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LabelFormatter for CountingFormatter {
    fn format(&mut self, value: f32, template: LabelTemplate) -> LabelText {
        self.calls += 1;
        format_label(value, template)
    }
}
