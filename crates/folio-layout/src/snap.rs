#![forbid(unsafe_code)]

//! Index arithmetic: clamping, drag snapping, and discrete navigation.
//!
//! # Invariants
//!
//! 1. Every function returning an index returns a value in `[0, count-1]`
//!    (or `0` when `count == 0`).
//! 2. [`snap_shift`] is monotonic: more leftward drag never yields a smaller
//!    shift, more rightward drag never yields a larger one.
//! 3. A zero delta never shifts.

use serde::{Deserialize, Serialize};

use crate::params::MIN_STEP_SPACING;

/// Discrete navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    const fn step(self) -> i64 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Clamp a signed index into `[0, count-1]`.
#[must_use]
pub fn clamp_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = i64::try_from(count - 1).unwrap_or(i64::MAX);
    // Non-negative after the clamp, and bounded by `count - 1`.
    index.clamp(0, last) as usize
}

/// Number of items a drag of `delta_px` advances.
///
/// `raw = -delta / max(1, spacing)`; positive raw rounds with
/// `floor(raw + bias)`, negative with `ceil(raw - bias)`. Dragging left
/// (negative delta) advances to later items.
#[must_use]
pub fn snap_shift(delta_px: f64, step_spacing: f64, snap_bias: f64) -> i64 {
    if !delta_px.is_finite() {
        return 0;
    }
    let spacing = step_spacing.max(MIN_STEP_SPACING);
    let raw = -delta_px / spacing;
    let shifted = if raw > 0.0 {
        (raw + snap_bias).floor()
    } else {
        (raw - snap_bias).ceil()
    };
    // `as` saturates for out-of-range floats and maps NaN to 0.
    shifted as i64
}

/// Index a drag that started at `start_index` settles on.
#[must_use]
pub fn settle_index(
    start_index: usize,
    delta_px: f64,
    count: usize,
    step_spacing: f64,
    snap_bias: f64,
) -> usize {
    let start = i64::try_from(start_index).unwrap_or(i64::MAX);
    let shift = snap_shift(delta_px, step_spacing, snap_bias);
    clamp_index(start.saturating_add(shift), count)
}

/// Bounded step: stays on the first/last item at the ends.
#[must_use]
pub fn navigate(direction: NavDirection, active: usize, count: usize) -> usize {
    let active = i64::try_from(clamp_index(active as i64, count)).unwrap_or(0);
    clamp_index(active + direction.step(), count)
}

/// Wrapping step: past the last item comes the first, and vice versa.
#[must_use]
pub fn wrapping_navigate(direction: NavDirection, active: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let active = active.min(count - 1);
    match direction {
        NavDirection::Next => (active + 1) % count,
        NavDirection::Prev => (active + count - 1) % count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(-3, 8), 0);
        assert_eq!(clamp_index(5, 8), 5);
        assert_eq!(clamp_index(99, 8), 7);
        assert_eq!(clamp_index(4, 0), 0);
        assert_eq!(clamp_index(i64::MAX, 1), 0);
    }

    #[test]
    fn long_left_drag_advances_three() {
        // 130 / 40 = 3.25 -> floor(3.95) = 3
        assert_eq!(snap_shift(-130.0, 40.0, 0.7), 3);
        assert_eq!(settle_index(3, -130.0, 8, 40.0, 0.7), 6);
    }

    #[test]
    fn short_drag_stays_put() {
        // 10 / 40 = 0.25 -> floor(0.95) = 0
        assert_eq!(snap_shift(-10.0, 40.0, 0.7), 0);
        assert_eq!(settle_index(3, -10.0, 8, 40.0, 0.7), 3);
    }

    #[test]
    fn bias_decides_the_crossover() {
        // 0.3 of a step with bias 0.7 reaches exactly 1.0
        assert_eq!(snap_shift(-12.0, 40.0, 0.7), 1);
        assert_eq!(snap_shift(-11.0, 40.0, 0.7), 0);
        assert_eq!(snap_shift(12.0, 40.0, 0.7), -1);
        assert_eq!(snap_shift(11.0, 40.0, 0.7), 0);
    }

    #[test]
    fn settle_clamps_at_both_ends() {
        assert_eq!(settle_index(6, -400.0, 8, 40.0, 0.7), 7);
        assert_eq!(settle_index(1, 400.0, 8, 40.0, 0.7), 0);
    }

    #[test]
    fn zero_and_degenerate_inputs() {
        assert_eq!(snap_shift(0.0, 40.0, 0.7), 0);
        assert_eq!(snap_shift(-5.0, 0.0, 0.7), 5);
        assert_eq!(snap_shift(f64::NAN, 40.0, 0.7), 0);
        assert_eq!(snap_shift(-40.0, f64::NAN, 0.7), 40);
        assert_eq!(snap_shift(f64::NEG_INFINITY, 40.0, 0.7), 0);
    }

    #[test]
    fn bounded_navigation_stops_at_ends() {
        assert_eq!(navigate(NavDirection::Next, 7, 8), 7);
        assert_eq!(navigate(NavDirection::Prev, 0, 8), 0);
        assert_eq!(navigate(NavDirection::Next, 2, 8), 3);
        assert_eq!(navigate(NavDirection::Next, 42, 8), 7);
    }

    #[test]
    fn wrapping_navigation_cycles() {
        assert_eq!(wrapping_navigate(NavDirection::Next, 7, 8), 0);
        assert_eq!(wrapping_navigate(NavDirection::Prev, 0, 8), 7);
        assert_eq!(wrapping_navigate(NavDirection::Next, 2, 8), 3);
    }

    #[test]
    fn single_item_never_moves() {
        for direction in [NavDirection::Prev, NavDirection::Next] {
            assert_eq!(navigate(direction, 0, 1), 0);
            assert_eq!(wrapping_navigate(direction, 0, 1), 0);
        }
        assert_eq!(settle_index(0, -500.0, 1, 40.0, 0.7), 0);
        assert_eq!(settle_index(0, 500.0, 1, 40.0, 0.7), 0);
    }

    #[test]
    fn empty_collections_yield_zero() {
        assert_eq!(navigate(NavDirection::Next, 0, 0), 0);
        assert_eq!(wrapping_navigate(NavDirection::Prev, 0, 0), 0);
        assert_eq!(settle_index(0, -80.0, 0, 40.0, 0.7), 0);
    }
}
