//! Label outline style and its deferred application.
//!
//! Freshly created text elements in some UI toolkits ignore material
//! changes until they have been through one render pass. The outline is
//! therefore not applied when the labels are built, but by a one-shot
//! [`DeferredOutline`] task the host polls at the end of the frame.
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::hal::MockSink;
//! use speedo_hud::style::DeferredOutline;
//! use speedo_hud::SpeedometerConfig;
//!
//! let config = SpeedometerConfig::default();
//! let mut sink = MockSink::new();
//! let mut task = DeferredOutline::for_config(&config).unwrap();
//!
//! assert!(task.poll(&mut sink).unwrap());  // applied at end of frame
//! assert!(!task.poll(&mut sink).unwrap()); // never again
//! assert_eq!(sink.outline_count, 1);
//! ```

use heapless::Vec as HVec;

use crate::color::Rgba;
use crate::config::SpeedometerConfig;
use crate::traits::{LabelSlot, SpeedometerSink};

/// Default outline width, relative to the font size.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 0.075;

/// Text outline for a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    /// Outline color.
    pub color: Rgba,
    /// Outline width, relative to the font size.
    pub width: f32,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            width: DEFAULT_OUTLINE_WIDTH,
        }
    }
}

/// One-shot task applying the outline to the speed labels.
#[derive(Clone, Debug)]
pub struct DeferredOutline {
    outline: Outline,
    slots: HVec<LabelSlot, 2>,
    done: bool,
}

impl DeferredOutline {
    /// Schedules the outline for the given label slots.
    pub fn new(outline: Outline, slots: &[LabelSlot]) -> Self {
        let mut pending = HVec::new();
        for slot in slots {
            if !pending.contains(slot) {
                let _ = pending.push(*slot);
            }
        }
        Self {
            outline,
            slots: pending,
            done: false,
        }
    }

    /// Schedules the outline the configuration asks for.
    ///
    /// Returns `None` when outlines are disabled or no labels exist
    /// (display mode `None`).
    pub fn for_config(config: &SpeedometerConfig) -> Option<Self> {
        if !config.outline_enabled || !config.display_mode.shows_labels() {
            return None;
        }

        let task = if config.display_zip_speed {
            Self::new(Outline::default(), &[LabelSlot::Live, LabelSlot::Zip])
        } else {
            Self::new(Outline::default(), &[LabelSlot::Live])
        };
        Some(task)
    }

    /// Returns true once the outline has been applied.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Runs the task if it has not run yet.
    ///
    /// Returns `Ok(true)` on the call that applied the outline and
    /// `Ok(false)` afterwards. On a sink error the task stays pending and
    /// is retried on the next poll.
    pub fn poll<S: SpeedometerSink>(&mut self, sink: &mut S) -> Result<bool, S::Error> {
        if self.done {
            return Ok(false);
        }

        for slot in &self.slots {
            sink.set_label_outline(*slot, self.outline)?;
        }
        self.done = true;
        log::debug!("label outline applied to {} slot(s)", self.slots.len());
        Ok(true)
    }
}
