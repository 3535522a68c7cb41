//! Label formatting for the speed readouts.
//!
//! Labels are one-decimal fixed-point strings followed by the unit suffix,
//! e.g. `"12.3 KM/H"`. They are built into a fixed-capacity
//! [`heapless::String`] so the per-frame path never allocates.
//!
//! # Rounding
//!
//! [`DecimalFormatter`] uses `{:.1}` formatting: the exact binary value of
//! the `f32` is rounded to one decimal, ties to even. Since most decimal
//! inputs are not exactly representable, `12.34` becomes `"12.3"` and
//! `0.35` (stored as `0.3499999...`) becomes `"0.3"`. Exact ties such as
//! `0.25` and `0.75` give `"0.2"` and `"0.8"`.

use core::fmt::Write;

use heapless::String as HString;

/// Capacity of a formatted label.
///
/// Large enough for the widest finite `f32` at one decimal plus sign and
/// suffix.
pub const MAX_LABEL_LEN: usize = 48;

/// Number of decimal digits in every speed label.
pub const LABEL_DECIMALS: usize = 1;

/// A formatted speed label.
pub type LabelText = HString<MAX_LABEL_LEN>;

/// Fixed-precision template: a number followed by a unit suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelTemplate {
    suffix: &'static str,
}

impl LabelTemplate {
    /// Creates a template with the given unit suffix.
    pub const fn new(suffix: &'static str) -> Self {
        Self { suffix }
    }

    /// The unit suffix, e.g. `"KM/H"`.
    pub const fn suffix(&self) -> &'static str {
        self.suffix
    }
}

/// Renders a display value into label text.
///
/// The controller routes every label through this trait, which lets tests
/// observe how often formatting happens.
pub trait LabelFormatter {
    /// Format `value` with the given template.
    fn format(&mut self, value: f32, template: LabelTemplate) -> LabelText;
}

/// The standard one-decimal formatter.
///
/// # Example
///
/// ```rust
/// use speedo_hud::label::{DecimalFormatter, LabelFormatter, LabelTemplate};
///
/// let mut formatter = DecimalFormatter;
/// let text = formatter.format(12.34, LabelTemplate::new("KM/H"));
/// assert_eq!(text.as_str(), "12.3 KM/H");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecimalFormatter;

impl LabelFormatter for DecimalFormatter {
    fn format(&mut self, value: f32, template: LabelTemplate) -> LabelText {
        format_label(value, template)
    }
}

/// Format a value with one decimal digit and the template's suffix.
pub fn format_label(value: f32, template: LabelTemplate) -> LabelText {
    let mut text = LabelText::new();
    // Capacity covers every finite f32, so this cannot truncate.
    let _ = write!(
        text,
        "{:.prec$} {}",
        value,
        template.suffix(),
        prec = LABEL_DECIMALS
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const KMH: LabelTemplate = LabelTemplate::new("KM/H");

    #[test]
    fn formats_one_decimal() {
        assert_eq!(format_label(12.34, KMH).as_str(), "12.3 KM/H");
    }

    #[test]
    fn pads_whole_numbers() {
        assert_eq!(format_label(0.0, KMH).as_str(), "0.0 KM/H");
        assert_eq!(format_label(36.0, KMH).as_str(), "36.0 KM/H");
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(format_label(12.36, KMH).as_str(), "12.4 KM/H");
        assert_eq!(format_label(99.96, KMH).as_str(), "100.0 KM/H");
        // 0.35 is stored just below the midpoint
        assert_eq!(format_label(0.35, KMH).as_str(), "0.3 KM/H");
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 0.25 and 0.75 are exact in binary
        assert_eq!(format_label(0.25, KMH).as_str(), "0.2 KM/H");
        assert_eq!(format_label(0.75, KMH).as_str(), "0.8 KM/H");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_label(-3.21, KMH).as_str(), "-3.2 KM/H");
    }

    #[test]
    fn largest_finite_value_fits() {
        let text = format_label(f32::MAX, LabelTemplate::new("KM/H"));
        assert!(text.ends_with(".0 KM/H"));
    }

    #[test]
    fn decimal_formatter_matches_free_function() {
        let mut formatter = DecimalFormatter;
        let mph = LabelTemplate::new("MPH");
        assert_eq!(formatter.format(55.55, mph), format_label(55.55, mph));
    }
}
