//! Over-max color state machine.
//!
//! The bar switches to a warning color once the speed passes the effective
//! max speed. Re-assigning the bar color every frame forces the renderer to
//! rebuild its geometry, so the color is only pushed when the state actually
//! changes: [`ThresholdColorStateMachine::advance`] returns a
//! [`ColorTransition`] on the edge and `None` otherwise.
//!
//! # Boundary
//!
//! Both directions share one boundary, `max + THRESHOLD_EPSILON`. A speed
//! sitting exactly on it counts as normal; a speed alternating across it
//! flips state every frame. There is no separate dead-band.
//!
//! # Example
//!
//! ```rust
//! use speedo_hud::threshold::{ColorState, ColorTransition, ThresholdColorStateMachine};
//!
//! let mut machine = ThresholdColorStateMachine::new();
//! assert_eq!(machine.advance(15.0, 10.0), Some(ColorTransition::EnteredOverMax));
//! assert_eq!(machine.advance(16.0, 10.0), None); // still over, nothing to push
//! assert_eq!(machine.advance(9.0, 10.0), Some(ColorTransition::ReturnedToNormal));
//! assert_eq!(machine.state(), ColorState::Normal);
//! ```

use crate::color::Rgba;

/// Margin above max speed before the bar counts as over max.
pub const THRESHOLD_EPSILON: f32 = 0.01;

/// Color state of the speed bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorState {
    /// At or below max speed, base color.
    #[default]
    Normal,
    /// Above max speed, threshold color.
    OverMax,
}

impl ColorState {
    /// Classify a speed against the effective max speed.
    #[inline]
    pub fn classify(raw_speed: f32, effective_max_speed: f32) -> Self {
        if raw_speed > effective_max_speed + THRESHOLD_EPSILON {
            ColorState::OverMax
        } else {
            ColorState::Normal
        }
    }
}

/// A state change that must be pushed to the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTransition {
    /// Normal → OverMax.
    EnteredOverMax,
    /// OverMax → Normal.
    ReturnedToNormal,
}

impl ColorTransition {
    /// The state after this transition.
    pub const fn target(&self) -> ColorState {
        match self {
            ColorTransition::EnteredOverMax => ColorState::OverMax,
            ColorTransition::ReturnedToNormal => ColorState::Normal,
        }
    }

    /// Pick the color to apply for this transition.
    pub const fn color(&self, base: Rgba, over_max: Rgba) -> Rgba {
        match self {
            ColorTransition::EnteredOverMax => over_max,
            ColorTransition::ReturnedToNormal => base,
        }
    }
}

/// Two-state machine deciding when the bar color changes.
#[derive(Clone, Debug, Default)]
pub struct ThresholdColorStateMachine {
    state: ColorState,
    transitions: u32,
}

impl ThresholdColorStateMachine {
    /// Creates a machine in the [`ColorState::Normal`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Number of transitions taken since creation.
    pub fn transition_count(&self) -> u32 {
        self.transitions
    }

    /// Evaluate one frame.
    ///
    /// Returns the transition when the state changed, `None` when it stayed
    /// the same.
    pub fn advance(&mut self, raw_speed: f32, effective_max_speed: f32) -> Option<ColorTransition> {
        let transition = self.pending(raw_speed, effective_max_speed)?;
        self.commit(transition);
        log::debug!(
            "speed {raw_speed:.2} vs max {effective_max_speed:.2}: {:?}",
            transition
        );
        Some(transition)
    }

    /// The transition this frame would take, without taking it.
    ///
    /// Pair with [`commit`](Self::commit) once the new color is on screen.
    pub fn pending(&self, raw_speed: f32, effective_max_speed: f32) -> Option<ColorTransition> {
        match (self.state, ColorState::classify(raw_speed, effective_max_speed)) {
            (ColorState::Normal, ColorState::OverMax) => Some(ColorTransition::EnteredOverMax),
            (ColorState::OverMax, ColorState::Normal) => Some(ColorTransition::ReturnedToNormal),
            _ => None,
        }
    }

    /// Move to the target state of `transition`.
    pub fn commit(&mut self, transition: ColorTransition) {
        self.state = transition.target();
        self.transitions = self.transitions.saturating_add(1);
    }

    /// Back to [`ColorState::Normal`], keeping the transition count.
    pub fn reset(&mut self) {
        self.state = ColorState::Normal;
    }
}
