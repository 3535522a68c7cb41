//! Speedometer configuration.
//!
//! The configuration is read once per session and never changes while the
//! readout runs. Values that would break the pipeline (a negative or tiny
//! speed cap) are normalized here, at load time, so the per-frame code can
//! rely on a positive max speed.
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::config::SpeedometerConfig;
//! use speedo_hud::units::DisplayMode;
//!
//! // Use defaults
//! let config = SpeedometerConfig::default();
//! assert_eq!(config.display_mode, DisplayMode::KilometersPerHour);
//!
//! // Or customize
//! let config = SpeedometerConfig::default()
//!     .with_display_mode(DisplayMode::MilesPerHour)
//!     .with_custom_speed_cap_kmh(400.0)
//!     .with_display_zip_speed(true);
//! assert!(config.speed_cap().is_enabled());
//! ```

use crate::color::Rgba;
use crate::projector::FILL_EPSILON;
use crate::traits::SpeedSource;
use crate::units::{DisplayMode, KMH_FACTOR};

#[cfg(feature = "serde-json-core")]
use crate::error::ConfigError;

/// Caps at or below this many km/h count as "no cap".
pub const MIN_CUSTOM_CAP_KMH: f32 = 0.001;

// ============================================================================
// Speed Cap
// ============================================================================

/// User override for the max speed, derived once from the km/h setting.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpeedCap {
    max_mps: Option<f32>,
}

impl SpeedCap {
    /// No override: the actor's own max speed is used.
    pub const DISABLED: SpeedCap = SpeedCap { max_mps: None };

    /// Derive the cap from a km/h setting.
    ///
    /// Values at or below [`MIN_CUSTOM_CAP_KMH`] disable the cap. Non-finite
    /// values and caps too small to divide by are also treated as disabled.
    ///
    /// ```
    /// use speedo_hud::config::SpeedCap;
    ///
    /// let cap = SpeedCap::from_kmh(36.0);
    /// assert!((cap.effective_max(5.0) - 10.0).abs() < 1e-4);
    ///
    /// assert_eq!(SpeedCap::from_kmh(0.0).effective_max(5.0), 5.0);
    /// ```
    pub fn from_kmh(kmh: f32) -> Self {
        if kmh.is_nan() || kmh <= MIN_CUSTOM_CAP_KMH {
            if kmh.is_nan() || kmh < 0.0 {
                log::warn!("ignoring invalid speed cap {kmh} km/h");
            }
            return Self::DISABLED;
        }

        let mps = kmh / KMH_FACTOR;
        if !mps.is_finite() || mps <= FILL_EPSILON {
            log::warn!("ignoring unusable speed cap {kmh} km/h");
            return Self::DISABLED;
        }

        Self { max_mps: Some(mps) }
    }

    /// Returns true if the cap overrides the actor's max speed.
    pub fn is_enabled(&self) -> bool {
        self.max_mps.is_some()
    }

    /// The cap in m/s, if any.
    pub fn max_mps(&self) -> Option<f32> {
        self.max_mps
    }

    /// Pick the max speed for this frame.
    #[inline]
    pub fn effective_max(&self, actor_max_speed: f32) -> f32 {
        self.max_mps.unwrap_or(actor_max_speed)
    }
}

// ============================================================================
// Main Config
// ============================================================================

/// User-chosen options for the speed readout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpeedometerConfig {
    /// Use total speed of movement instead of forward speed.
    pub use_total_speed: bool,
    /// Fill the bar against this speed (km/h) instead of the actor's max
    /// speed. 0 disables the override.
    pub custom_speed_cap_kmh: f32,
    /// Show the stored zip speed in a second label.
    pub display_zip_speed: bool,
    /// Unit of the speed label, or no label.
    pub display_mode: DisplayMode,
    /// Base bar color.
    pub bar_color: Rgba,
    /// Switch the bar color while above max speed.
    pub display_over_max_color: bool,
    /// Bar color while above max speed.
    pub over_max_color: Rgba,
    /// Outline the speed labels for readability.
    pub outline_enabled: bool,
}

impl Default for SpeedometerConfig {
    fn default() -> Self {
        Self {
            use_total_speed: true,
            custom_speed_cap_kmh: 0.0,
            display_zip_speed: false,
            display_mode: DisplayMode::KilometersPerHour,
            bar_color: Rgba::DEFAULT_BAR,
            display_over_max_color: true,
            over_max_color: Rgba::DEFAULT_OVER_MAX,
            outline_enabled: true,
        }
    }
}

impl SpeedometerConfig {
    /// Set whether total speed is used
    pub fn with_use_total_speed(mut self, use_total: bool) -> Self {
        self.use_total_speed = use_total;
        self
    }

    /// Set the custom speed cap in km/h (0 = disabled)
    pub fn with_custom_speed_cap_kmh(mut self, kmh: f32) -> Self {
        self.custom_speed_cap_kmh = kmh;
        self
    }

    /// Enable or disable the zip speed label
    pub fn with_display_zip_speed(mut self, enabled: bool) -> Self {
        self.display_zip_speed = enabled;
        self
    }

    /// Set the display mode
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Set the base bar color
    pub fn with_bar_color(mut self, color: Rgba) -> Self {
        self.bar_color = color;
        self
    }

    /// Enable or disable the over-max color
    pub fn with_display_over_max_color(mut self, enabled: bool) -> Self {
        self.display_over_max_color = enabled;
        self
    }

    /// Set the over-max color
    pub fn with_over_max_color(mut self, color: Rgba) -> Self {
        self.over_max_color = color;
        self
    }

    /// Enable or disable label outlines
    pub fn with_outline_enabled(mut self, enabled: bool) -> Self {
        self.outline_enabled = enabled;
        self
    }

    /// Which telemetry speed drives the readout.
    pub fn speed_source(&self) -> SpeedSource {
        SpeedSource::from_use_total(self.use_total_speed)
    }

    /// The derived max speed override.
    pub fn speed_cap(&self) -> SpeedCap {
        SpeedCap::from_kmh(self.custom_speed_cap_kmh)
    }

    /// Returns true if the zip label is actually shown.
    ///
    /// The zip label only exists alongside the live label.
    pub fn shows_zip_label(&self) -> bool {
        self.display_zip_speed && self.display_mode.shows_labels()
    }

    /// Replace values the pipeline cannot use with safe defaults.
    ///
    /// A negative or non-finite speed cap becomes 0 (disabled).
    pub fn normalized(mut self) -> Self {
        if !self.custom_speed_cap_kmh.is_finite() || self.custom_speed_cap_kmh < 0.0 {
            log::warn!(
                "speed cap {} km/h is invalid, disabling it",
                self.custom_speed_cap_kmh
            );
            self.custom_speed_cap_kmh = 0.0;
        }
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields keep their defaults. The result is normalized.
    ///
    /// ```
    /// use speedo_hud::config::SpeedometerConfig;
    /// use speedo_hud::units::DisplayMode;
    ///
    /// let config = SpeedometerConfig::from_json(
    ///     r#"{"display_mode": "mph", "custom_speed_cap_kmh": -5.0}"#,
    /// ).unwrap();
    /// assert_eq!(config.display_mode, DisplayMode::MilesPerHour);
    /// assert_eq!(config.custom_speed_cap_kmh, 0.0);
    /// ```
    #[cfg(feature = "serde-json-core")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let (config, _): (Self, usize) = serde_json_core::from_str(json).map_err(|err| {
            log::warn!("rejecting speedometer config: {err}");
            ConfigError::InvalidJson
        })?;
        let config = config.normalized();
        log::info!(
            "speedometer config loaded: mode={}, cap={} km/h, zip={}",
            config.display_mode.as_str(),
            config.custom_speed_cap_kmh,
            config.display_zip_speed
        );
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
