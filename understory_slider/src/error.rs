// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by track configuration and index-based operations.
//!
//! Value updates never fail because of an out-of-range request; they clamp.
//! Errors are reserved for structurally invalid input: an inverted range, a
//! non-positive step, a negative separation, or an index past the end of the
//! thumb sequence. Every fallible operation checks its input before mutating.

use thiserror::Error;

/// Error returned by fallible [`Track`](crate::Track) operations.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    /// The track range is inverted (`min > max`).
    #[error("inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Requested minimum.
        min: i32,
        /// Requested maximum.
        max: i32,
    },
    /// The step granularity is zero or negative.
    #[error("step must be positive, got {0}")]
    NonPositiveStep(i32),
    /// The minimum thumb separation is negative.
    #[error("steps apart must not be negative, got {0}")]
    NegativeStepsApart(i32),
    /// Per-thumb limits are inverted (`min > max`).
    #[error("inverted thumb limits: min {min} is greater than max {max}")]
    InvertedLimits {
        /// Requested lower limit.
        min: i32,
        /// Requested upper limit.
        max: i32,
    },
    /// An index does not name a thumb in the track.
    #[error("thumb index {index} out of bounds for track with {len} thumbs")]
    ThumbOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of thumbs at the time of the call.
        len: usize,
    },
}
