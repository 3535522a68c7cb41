//! Trait definitions for the speedometer's inputs and outputs.
//!
//! These abstractions keep the display pipeline independent of any game
//! engine or UI toolkit:
//! - Telemetry comes in through [`ActorTelemetry`]
//! - The readout goes out through [`SpeedometerSink`]
//!
//! # Submodules
//!
//! - `sink`: fill/color/label output and the [`LabelSlot`] enum
//! - `telemetry`: actor speed input and [`SpeedSource`] selection

pub mod sink;
pub mod telemetry;

pub use sink::*;
pub use telemetry::*;
