//! Speed → bar fill ratio.
//!
//! The denominator is shrunk by [`FILL_EPSILON`] so the bar visibly reaches
//! full at exactly max speed despite float rounding. The ratio is **not**
//! clamped: above max speed it exceeds 1.0 and the sink decides whether to
//! clip or overshoot.

/// Amount subtracted from the max speed before dividing.
pub const FILL_EPSILON: f32 = 0.01;

/// Compute the bar fill ratio for a speed.
///
/// # Preconditions
///
/// `effective_max_speed` must be greater than [`FILL_EPSILON`]. The
/// configuration layer guarantees a positive max speed, so this is only
/// checked in debug builds.
///
/// # Example
///
/// ```rust
/// use speedo_hud::projector::fill_ratio;
///
/// assert!(fill_ratio(10.0, 10.0) >= 1.0);
/// assert!(fill_ratio(15.0, 10.0) > 1.4);
/// assert_eq!(fill_ratio(0.0, 10.0), 0.0);
/// ```
#[inline]
pub fn fill_ratio(raw_speed: f32, effective_max_speed: f32) -> f32 {
    debug_assert!(
        effective_max_speed > FILL_EPSILON,
        "max speed {effective_max_speed} leaves no room for the fill epsilon"
    );
    raw_speed / (effective_max_speed - FILL_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_full_at_max_speed() {
        for max in [0.5_f32, 1.0, 10.0, 33.3, 111.11] {
            let ratio = fill_ratio(max, max);
            assert!(ratio >= 1.0, "max = {max}, ratio = {ratio}");
            let slack = FILL_EPSILON / (max - FILL_EPSILON);
            assert!(ratio - 1.0 <= slack + 1e-5, "max = {max}, ratio = {ratio}");
        }
    }

    #[test]
    fn half_speed_is_about_half() {
        assert!((fill_ratio(50.0, 100.0) - 0.5).abs() < 0.001);
    }

    #[test]
    fn overspeed_is_not_clamped() {
        let ratio = fill_ratio(15.0, 10.0);
        assert!((ratio - 1.5).abs() < 0.01);
        assert!(ratio > 1.0);
    }

    #[test]
    fn negative_speed_gives_negative_ratio() {
        assert!(fill_ratio(-1.0, 10.0) < 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "fill epsilon")]
    fn degenerate_max_asserts_in_debug() {
        let _ = fill_ratio(1.0, 0.005);
    }
}
