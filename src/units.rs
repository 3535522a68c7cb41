//! Unit conversion from raw telemetry speed to display units.
//!
//! Telemetry always arrives in meters per second. The label shows the value
//! in whichever unit the user picked through [`DisplayMode`].
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::units::{convert, SpeedUnit};
//!
//! let (value, template) = convert(10.0, SpeedUnit::KilometersPerHour);
//! assert!((value - 36.0).abs() < 1e-4);
//! assert_eq!(template.suffix(), "KM/H");
//! ```

use core::str::FromStr;

use crate::error::ConfigError;
use crate::label::LabelTemplate;

/// Meters per second → kilometers per hour.
pub const KMH_FACTOR: f32 = 3.6;

/// Meters per second → miles per hour.
pub const MPH_FACTOR: f32 = 2.236936;

/// A unit the speed label can be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedUnit {
    /// Meters per second (no conversion).
    MetersPerSecond,
    /// Kilometers per hour.
    KilometersPerHour,
    /// Miles per hour.
    MilesPerHour,
}

impl SpeedUnit {
    /// Multiplier applied to a meters-per-second value.
    #[inline]
    pub const fn factor(&self) -> f32 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => KMH_FACTOR,
            SpeedUnit::MilesPerHour => MPH_FACTOR,
        }
    }

    /// Label template for this unit.
    #[inline]
    pub const fn template(&self) -> LabelTemplate {
        match self {
            SpeedUnit::MetersPerSecond => LabelTemplate::new("M/S"),
            SpeedUnit::KilometersPerHour => LabelTemplate::new("KM/H"),
            SpeedUnit::MilesPerHour => LabelTemplate::new("MPH"),
        }
    }
}

/// How the numeric speed label is displayed.
///
/// Chosen once when the configuration is loaded. [`DisplayMode::None`]
/// removes the labels entirely; the bar keeps working.
///
/// # Default
///
/// Defaults to [`KilometersPerHour`](Self::KilometersPerHour).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// No speed label.
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    /// Label in meters per second.
    #[cfg_attr(feature = "serde", serde(rename = "mps"))]
    MetersPerSecond,
    /// Label in kilometers per hour.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "kmh"))]
    KilometersPerHour,
    /// Label in miles per hour.
    #[cfg_attr(feature = "serde", serde(rename = "mph"))]
    MilesPerHour,
}

impl DisplayMode {
    /// The unit to render in, or `None` when labels are disabled.
    ///
    /// ```
    /// use speedo_hud::units::{DisplayMode, SpeedUnit};
    ///
    /// assert_eq!(DisplayMode::MilesPerHour.unit(), Some(SpeedUnit::MilesPerHour));
    /// assert_eq!(DisplayMode::None.unit(), None);
    /// ```
    #[inline]
    pub const fn unit(&self) -> Option<SpeedUnit> {
        match self {
            DisplayMode::None => None,
            DisplayMode::MetersPerSecond => Some(SpeedUnit::MetersPerSecond),
            DisplayMode::KilometersPerHour => Some(SpeedUnit::KilometersPerHour),
            DisplayMode::MilesPerHour => Some(SpeedUnit::MilesPerHour),
        }
    }

    /// Returns true if any label is shown in this mode.
    #[inline]
    pub const fn shows_labels(&self) -> bool {
        !matches!(self, DisplayMode::None)
    }

    /// Returns the mode as a short lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::None => "none",
            DisplayMode::MetersPerSecond => "mps",
            DisplayMode::KilometersPerHour => "kmh",
            DisplayMode::MilesPerHour => "mph",
        }
    }

    /// Parse a display mode from text.
    ///
    /// Accepts the short forms (`"mps"`, `"kmh"`, `"mph"`, `"none"`), the
    /// unit suffixes (`"m/s"`, `"km/h"`) and `"off"`. Input is trimmed and
    /// case-insensitive.
    ///
    /// ```
    /// use speedo_hud::units::DisplayMode;
    ///
    /// assert_eq!(DisplayMode::from_text(" KmH "), Some(DisplayMode::KilometersPerHour));
    /// assert_eq!(DisplayMode::from_text("m/s"), Some(DisplayMode::MetersPerSecond));
    /// assert_eq!(DisplayMode::from_text("off"), Some(DisplayMode::None));
    /// assert_eq!(DisplayMode::from_text("knots"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        fn matches_any(text: &str, options: &[&str]) -> bool {
            options.iter().any(|o| o.eq_ignore_ascii_case(text))
        }

        let text = text.trim();

        if matches_any(text, &["none", "off"]) {
            Some(DisplayMode::None)
        } else if matches_any(text, &["mps", "m/s", "meterspersecond"]) {
            Some(DisplayMode::MetersPerSecond)
        } else if matches_any(text, &["kmh", "km/h", "kph", "kilometersperhour"]) {
            Some(DisplayMode::KilometersPerHour)
        } else if matches_any(text, &["mph", "milesperhour"]) {
            Some(DisplayMode::MilesPerHour)
        } else {
            None
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayMode::from_text(s).ok_or(ConfigError::UnknownDisplayMode)
    }
}

/// Convert a raw speed in m/s to the given unit.
///
/// Returns the converted value together with the label template to format
/// it with. Total over all finite inputs; negative speeds pass through.
#[inline]
pub fn convert(raw_speed: f32, unit: SpeedUnit) -> (f32, LabelTemplate) {
    (raw_speed * unit.factor(), unit.template())
}
