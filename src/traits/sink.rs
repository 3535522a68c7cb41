//! Output side of the speedometer: where fill, color and labels go.
//!
//! This module defines the [`SpeedometerSink`] trait implemented by
//! whatever draws the readout: a game HUD, an embedded display, or the
//! recording mock used in tests.

use crate::color::Rgba;
use crate::style::Outline;

/// Which label a text update is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelSlot {
    /// The live per-frame speed.
    Live,
    /// The last captured zip speed.
    Zip,
}

impl LabelSlot {
    /// Returns the slot as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LabelSlot::Live => "live",
            LabelSlot::Zip => "zip",
        }
    }
}

/// Receiver for the speed readout.
///
/// The controller calls [`set_fill`](Self::set_fill) every frame, but
/// [`set_bar_color`](Self::set_bar_color) only when the color actually
/// changes. Implementations may treat a color assignment as expensive.
///
/// # Example
///
/// ```ignore
/// use speedo_hud::traits::{LabelSlot, SpeedometerSink};
/// use speedo_hud::Rgba;
///
/// struct HudBar { /* widget handles */ }
///
/// impl SpeedometerSink for HudBar {
///     type Error = ();
///
///     fn set_fill(&mut self, ratio: f32) -> Result<(), ()> { Ok(()) }
///     fn set_bar_color(&mut self, color: Rgba) -> Result<(), ()> { Ok(()) }
///     fn set_label(&mut self, slot: LabelSlot, text: &str) -> Result<(), ()> { Ok(()) }
/// }
/// ```
pub trait SpeedometerSink {
    /// Error type for sink operations.
    type Error;

    /// Sets the bar fill ratio.
    ///
    /// The ratio is not clamped and exceeds 1.0 above max speed. Whether
    /// the bar clips or overshoots is up to the implementation.
    fn set_fill(&mut self, ratio: f32) -> Result<(), Self::Error>;

    /// Sets the bar color.
    fn set_bar_color(&mut self, color: Rgba) -> Result<(), Self::Error>;

    /// Replaces the text of a label.
    fn set_label(&mut self, slot: LabelSlot, text: &str) -> Result<(), Self::Error>;

    /// Applies an outline style to a label.
    ///
    /// Some toolkits only accept style changes on a label one frame after
    /// it was created; see [`DeferredOutline`](crate::style::DeferredOutline).
    /// The default implementation ignores the request.
    fn set_label_outline(&mut self, slot: LabelSlot, outline: Outline) -> Result<(), Self::Error> {
        let _ = (slot, outline);
        Ok(())
    }
}
