// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change records, the listener protocol, and update modes.
//!
//! ## Ordering
//!
//! Every operation that moves thumbs produces its [`ValueChange`] records in a
//! deterministic order, returns them, and reports them one by one to the
//! registered [`ValueListener`] in that same order:
//!
//! - A push cascade reports the outermost displaced thumb first and the thumb
//!   the caller asked to move last.
//! - When a single update displaces thumbs on both sides, the left cascade is
//!   reported before the right cascade.
//! - Configuration changes and repositioning report changed thumbs by ascending index.
//!
//! Thumbs whose value did not change are never reported, and no thumb is
//! reported more than once per operation.

use crate::thumb::{Thumb, ThumbId};
use crate::track::Track;

/// How a value update treats neighbours that stand within the gap.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Push {
    /// Clamp the moving thumb against its neighbours; neighbours never move.
    #[default]
    No,
    /// Displace neighbours outward, recursively, to keep the minimum separation.
    Yes,
}

/// Which neighbour of a thumb.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    /// The neighbour at `index - 1` (lower values).
    Left,
    /// The neighbour at `index + 1` (higher values).
    Right,
}

/// A single thumb whose value changed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ValueChange {
    /// Identity of the thumb.
    pub id: ThumbId,
    /// Position of the thumb in the track at the time of the change.
    pub index: usize,
    /// Value before the operation.
    pub old: i32,
    /// Value after the operation.
    pub new: i32,
}

/// Receives one call per changed thumb.
///
/// The track is fully committed before the first call, so `track` already
/// reflects the final configuration. The listener only gets shared access; it
/// cannot move thumbs from inside a notification.
///
/// Any `FnMut(&Track, &Thumb, usize, i32)` closure is a listener.
pub trait ValueListener {
    /// Called after `thumb` (at `index`) moved to `value`.
    fn on_value_changed(&mut self, track: &Track, thumb: &Thumb, index: usize, value: i32);
}

impl<F> ValueListener for F
where
    F: FnMut(&Track, &Thumb, usize, i32),
{
    fn on_value_changed(&mut self, track: &Track, thumb: &Thumb, index: usize, value: i32) {
        self(track, thumb, index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_defaults_to_no() {
        assert_eq!(Push::default(), Push::No);
    }
}
