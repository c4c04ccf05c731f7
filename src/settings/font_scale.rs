// SPDX-License-Identifier: MPL-2.0

//! Font scale domain type for page-wide text sizing.
//!
//! This module provides a type-safe wrapper for the font size percentage,
//! ensuring it is always within the valid range (75-150, where 100 = the
//! page's base size).

/// Valid font scale percentages.
pub mod font_bounds {
    /// Minimum font scale percentage.
    pub const MIN_PERCENT: f32 = 75.0;

    /// Maximum font scale percentage.
    pub const MAX_PERCENT: f32 = 150.0;

    /// Default font scale percentage.
    pub const DEFAULT_PERCENT: f32 = 100.0;

    /// Step applied by widget increase/decrease controls.
    pub const STEP_PERCENT: f32 = 5.0;
}

use font_bounds::{DEFAULT_PERCENT, MAX_PERCENT, MIN_PERCENT, STEP_PERCENT};

/// Whether a raw percentage lies inside the valid font scale range.
///
/// Used when restoring persisted values: out-of-range payloads are
/// rejected outright rather than clamped, so a corrupt profile falls
/// back to the default.
#[must_use]
pub fn is_valid_percent(percent: f32) -> bool {
    (MIN_PERCENT..=MAX_PERCENT).contains(&percent)
}

/// Font scale percentage, guaranteed to be within valid range (75-150).
///
/// Live inputs clamp instead of failing, so sliders and steppers can
/// feed raw numbers without pre-validation.
///
/// # Example
///
/// ```
/// use kilau_a11y::settings::FontScale;
///
/// let scale = FontScale::new(112.5);
/// assert_eq!(scale.value(), 112.5);
///
/// // Values outside range are clamped
/// let huge = FontScale::new(400.0);
/// assert_eq!(huge.value(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale(f32);

impl FontScale {
    /// Creates a new font scale, clamping to valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_PERCENT, MAX_PERCENT))
    }

    /// Returns the percentage as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Increases the scale by one widget step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + STEP_PERCENT)
    }

    /// Decreases the scale by one widget step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - STEP_PERCENT)
    }

    /// Returns true if this is the minimum scale.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_PERCENT
    }

    /// Returns true if this is the maximum scale.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_PERCENT
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(FontScale::new(10.0).value(), MIN_PERCENT);
        assert_abs_diff_eq!(FontScale::new(400.0).value(), MAX_PERCENT);
        assert_abs_diff_eq!(FontScale::new(112.5).value(), 112.5);
    }

    #[test]
    fn default_is_expected_scale() {
        assert_abs_diff_eq!(FontScale::default().value(), DEFAULT_PERCENT);
    }

    #[test]
    fn increase_adds_step() {
        let scale = FontScale::new(100.0);
        let larger = scale.increase();
        assert_abs_diff_eq!(larger.value(), 100.0 + STEP_PERCENT, epsilon = 0.001);

        // At max, stays at max
        let max_scale = FontScale::new(MAX_PERCENT);
        assert_abs_diff_eq!(max_scale.increase().value(), MAX_PERCENT);
    }

    #[test]
    fn decrease_subtracts_step() {
        let scale = FontScale::new(100.0);
        let smaller = scale.decrease();
        assert_abs_diff_eq!(smaller.value(), 100.0 - STEP_PERCENT, epsilon = 0.001);

        // At min, stays at min
        let min_scale = FontScale::new(MIN_PERCENT);
        assert_abs_diff_eq!(min_scale.decrease().value(), MIN_PERCENT);
    }

    #[test]
    fn is_min_and_is_max() {
        assert!(FontScale::new(MIN_PERCENT).is_min());
        assert!(!FontScale::new(100.0).is_min());

        assert!(FontScale::new(MAX_PERCENT).is_max());
        assert!(!FontScale::new(100.0).is_max());
    }

    #[test]
    fn restore_validation_rejects_instead_of_clamping() {
        assert!(is_valid_percent(75.0));
        assert!(is_valid_percent(150.0));
        assert!(is_valid_percent(112.5));
        assert!(!is_valid_percent(74.9));
        assert!(!is_valid_percent(150.1));
        assert!(!is_valid_percent(f32::NAN));
    }
}
