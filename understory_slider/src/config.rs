// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track configuration and the step grid.
//!
//! ## Grid
//!
//! Valid thumb values are `min + k * step` for `k >= 0`, up to and including the
//! largest such value not above `max` (the "grid max"). When `max - min` is not a
//! multiple of `step`, `max` itself is therefore unreachable.
//!
//! ## Rounding
//!
//! [`TrackConfig::snap`] rounds to the nearest grid value. A value exactly halfway
//! between two grid values rounds toward `min` (round half down), so with
//! `min = 0, step = 4` the value `6` snaps to `4` and `7` snaps to `8`.
//!
//! Arithmetic is carried out in `i64` so that extreme `i32` ranges cannot overflow.

use crate::error::SliderError;

/// Range, granularity, and separation shared by every thumb on a track.
///
/// Build one with struct-update syntax over [`TrackConfig::default`] and pass it to
/// [`Track::with_config`](crate::Track::with_config), which validates it.
///
/// ```
/// use understory_slider::TrackConfig;
///
/// let config = TrackConfig { max: 20, steps_apart: 2, ..Default::default() };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.gap(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrackConfig {
    /// Lowest value any thumb may take.
    pub min: i32,
    /// Upper bound for thumb values (see the module docs on the grid max).
    pub max: i32,
    /// Value granularity. Must be positive.
    pub step: i32,
    /// Minimum distance between adjacent thumbs, in steps. Must not be negative.
    pub steps_apart: i32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
            steps_apart: 0,
        }
    }
}

impl TrackConfig {
    /// Check the configuration, reporting the first problem found.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.min > self.max {
            return Err(SliderError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0 {
            return Err(SliderError::NonPositiveStep(self.step));
        }
        if self.steps_apart < 0 {
            return Err(SliderError::NegativeStepsApart(self.steps_apart));
        }
        Ok(())
    }

    /// Minimum value distance between adjacent thumbs: `steps_apart * step`.
    pub fn gap(&self) -> i64 {
        i64::from(self.steps_apart) * i64::from(self.step)
    }

    /// Largest grid value that does not exceed `max`.
    pub fn grid_max(&self) -> i32 {
        let (min, step) = (i64::from(self.min), i64::from(self.step));
        let span = i64::from(self.max) - min;
        narrow(min + span / step * step)
    }

    /// Clamp `value` into the track range and round it to the nearest grid value.
    ///
    /// Ties round toward `min`.
    pub fn snap(&self, value: i32) -> i32 {
        narrow(self.snap_wide(i64::from(value)))
    }

    pub(crate) fn snap_wide(&self, value: i64) -> i64 {
        let (min, step) = (i64::from(self.min), i64::from(self.step));
        let grid_max = i64::from(self.grid_max());
        if value <= min {
            return min;
        }
        if value >= grid_max {
            return grid_max;
        }
        let offset = value - min;
        let mut k = offset / step;
        if 2 * (offset % step) > step {
            k += 1;
        }
        (min + k * step).min(grid_max)
    }

    /// Largest grid value `<= value`, clamped into the track range.
    pub(crate) fn floor_to_grid(&self, value: i64) -> i64 {
        let (min, step) = (i64::from(self.min), i64::from(self.step));
        let clamped = value.clamp(min, i64::from(self.grid_max()));
        min + (clamped - min).div_euclid(step) * step
    }

    /// Smallest grid value `>= value`, clamped into the track range.
    pub(crate) fn ceil_to_grid(&self, value: i64) -> i64 {
        let (min, step) = (i64::from(self.min), i64::from(self.step));
        let grid_max = i64::from(self.grid_max());
        let clamped = value.clamp(min, grid_max);
        let floor = min + (clamped - min).div_euclid(step) * step;
        if floor == clamped {
            floor
        } else {
            (floor + step).min(grid_max)
        }
    }

    /// The grid values a thumb with the given limits may occupy.
    ///
    /// Limits are intersected with the track range, then shrunk inward to grid values.
    /// When no grid value lies between the limits, the range collapses onto the grid
    /// value nearest the lower limit.
    pub(crate) fn bounds_for(&self, limit_min: i32, limit_max: i32) -> Bounds {
        let lo = self.ceil_to_grid(i64::from(limit_min));
        let hi = self.floor_to_grid(i64::from(limit_max));
        if lo <= hi {
            Bounds { lo, hi }
        } else {
            let v = self.snap_wide(i64::from(limit_min));
            Bounds { lo: v, hi: v }
        }
    }
}

/// Inclusive interval of grid values, in widened arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub(crate) lo: i64,
    pub(crate) hi: i64,
}

impl Bounds {
    pub(crate) fn clamp(self, value: i64) -> i64 {
        value.clamp(self.lo, self.hi)
    }
}

/// Convert a widened value back to `i32`.
///
/// Callers only pass values that were clamped into an `i32` track range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Values are clamped into an i32 track range before narrowing."
)]
pub(crate) const fn narrow(value: i64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: i32, max: i32, step: i32) -> TrackConfig {
        TrackConfig {
            min,
            max,
            step,
            steps_apart: 0,
        }
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert_eq!(
            config(5, 1, 1).validate(),
            Err(SliderError::InvertedRange { min: 5, max: 1 })
        );
        assert_eq!(
            config(0, 10, 0).validate(),
            Err(SliderError::NonPositiveStep(0))
        );
        let negative = TrackConfig {
            steps_apart: -1,
            ..TrackConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(SliderError::NegativeStepsApart(-1))
        );
        assert!(config(3, 3, 1).validate().is_ok(), "empty span is valid");
    }

    // Halfway values round toward min.
    #[test]
    fn snap_rounds_half_down() {
        let c = config(0, 20, 4);
        assert_eq!(c.snap(5), 4);
        assert_eq!(c.snap(6), 4);
        assert_eq!(c.snap(7), 8);
        assert_eq!(c.snap(8), 8);

        let offset = config(1, 21, 2);
        assert_eq!(offset.snap(2), 1, "tie between 1 and 3 rounds down");
        assert_eq!(offset.snap(4), 3, "tie between 3 and 5 rounds down");
    }

    #[test]
    fn snap_clamps_to_range() {
        let c = config(-10, 10, 5);
        assert_eq!(c.snap(-100), -10);
        assert_eq!(c.snap(100), 10);
        assert_eq!(c.snap(-3), -5);
        assert_eq!(c.snap(3), 5);
    }

    // When the span is not a multiple of the step, max is unreachable.
    #[test]
    fn grid_max_stays_on_grid() {
        let c = config(0, 10, 3);
        assert_eq!(c.grid_max(), 9);
        assert_eq!(c.snap(10), 9);
        assert_eq!(c.snap(11), 9);
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        let c = config(i32::MIN, i32::MAX, 1);
        assert_eq!(c.snap(i32::MAX), i32::MAX);
        assert_eq!(c.snap(i32::MIN), i32::MIN);
        let coarse = config(i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(coarse.grid_max(), i32::MAX - 1);
    }

    #[test]
    fn floor_and_ceil_to_grid() {
        let c = config(0, 20, 4);
        assert_eq!(c.floor_to_grid(7), 4);
        assert_eq!(c.ceil_to_grid(7), 8);
        assert_eq!(c.ceil_to_grid(8), 8);
        assert_eq!(c.floor_to_grid(-3), 0);
        assert_eq!(c.ceil_to_grid(99), 20);
    }

    #[test]
    fn bounds_shrink_limits_inward() {
        let c = config(0, 20, 4);
        assert_eq!(c.bounds_for(3, 13), Bounds { lo: 4, hi: 12 });
        assert_eq!(c.bounds_for(i32::MIN, i32::MAX), Bounds { lo: 0, hi: 20 });
        // No grid value between 5 and 7: collapse onto the snap of the lower limit.
        assert_eq!(c.bounds_for(5, 7), Bounds { lo: 4, hi: 4 });
    }
}
