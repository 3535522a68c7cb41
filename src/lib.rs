//! # speedo-hud
//!
//! A speed readout for games and dashboards: a fill bar with an over-max
//! warning color, plus optional numeric labels for the live speed and a
//! captured "zip" speed.
//!
//! ## Features
//!
//! - **Unit labels**: m/s, km/h or mph with one decimal, or no label at all
//! - **Unclamped fill**: the bar ratio passes 1.0 above max speed; the sink
//!   decides how to draw overflow
//! - **Edge-triggered color**: the warning color is pushed only when the
//!   over-max state changes, never redundantly
//! - **Zip speed**: an externally captured speed shown in a second label
//! - **Speed cap**: an optional user max speed (km/h) replaces the actor's
//!
//! ## Architecture
//!
//! The crate is structured to allow testing without a renderer:
//!
//! - `traits` - Telemetry input and sink output abstractions
//! - `units`, `label` - Unit conversion and label formatting
//! - `projector`, `threshold` - Fill ratio and over-max color state
//! - `zip` - Captured zip speed
//! - `controller` - Per-frame orchestration
//! - `hal` - Concrete sinks (mock for testing, embedded-graphics for displays)
//!
//! ## Example
//!
//! ```rust
//! use speedo_hud::{
//!     SpeedDisplayController, SpeedometerConfig,
//!     hal::MockSink,
//!     traits::LabelSlot,
//! };
//!
//! let config = SpeedometerConfig::default().with_display_zip_speed(true);
//! let mut controller = SpeedDisplayController::new(config, MockSink::new());
//! controller.init().unwrap();
//!
//! // Every render tick
//! controller.on_frame(12.5, 10.0).unwrap(); // m/s, actor max speed
//!
//! // When the game reports a zip
//! controller.capture_zip(20.0).unwrap();
//!
//! let sink = controller.sink();
//! assert_eq!(sink.label(LabelSlot::Live), Some("45.0 KM/H"));
//! assert_eq!(sink.label(LabelSlot::Zip), Some("72.0 KM/H"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// RGBA colors for the bar and outlines.
pub mod color;
/// Speedometer configuration and the derived speed cap.
pub mod config;
/// Per-frame orchestration of the readout.
pub mod controller;
/// Configuration error types.
pub mod error;
/// Sink and telemetry implementations (mock, embedded-graphics).
pub mod hal;
/// One-decimal label formatting.
pub mod label;
/// Speed to bar fill ratio.
pub mod projector;
/// Label outline style and its deferred application.
pub mod style;
/// Over-max color state machine.
pub mod threshold;
/// Core traits for telemetry input and readout output.
pub mod traits;
/// Unit conversion and display modes.
pub mod units;
/// Captured zip speed and its label.
pub mod zip;

// Re-exports for convenience
pub use color::Rgba;
pub use config::{SpeedCap, SpeedometerConfig};
pub use controller::{SpeedDisplayController, SpeedometerState};
pub use error::ConfigError;
pub use label::{DecimalFormatter, LabelFormatter, LabelTemplate, LabelText};
pub use projector::fill_ratio;
pub use style::{DeferredOutline, Outline};
pub use threshold::{ColorState, ColorTransition, ThresholdColorStateMachine};
pub use traits::{ActorTelemetry, LabelSlot, SpeedSource, SpeedometerSink};
pub use units::{convert, DisplayMode, SpeedUnit};
pub use zip::ZipSpeedRecorder;
