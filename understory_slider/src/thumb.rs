// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb records and the borrowing handle used to move them.

use alloc::vec::Vec;

use crate::error::SliderError;
use crate::listener::{Push, ValueChange};
use crate::track::Track;

/// Identifier for a thumb on a [`Track`].
///
/// Indices shift when thumbs are inserted or removed; a `ThumbId` does not.
/// Use [`Track::index_of`] to find where a thumb currently sits.
///
/// Ids come from a monotonic per-track `u32` counter, not a generational slot.
/// A track does not repeat an id until it has handed out 2^32 of them; after
/// that the counter wraps and ids of long-removed thumbs may reappear.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ThumbId(pub(crate) u32);

/// One handle on the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumb {
    pub(crate) id: ThumbId,
    pub(crate) value: i32,
    pub(crate) limit_min: i32,
    pub(crate) limit_max: i32,
}

impl Thumb {
    pub(crate) const fn new(id: ThumbId, value: i32) -> Self {
        Self {
            id,
            value,
            limit_min: i32::MIN,
            limit_max: i32::MAX,
        }
    }

    /// Stable identity of this thumb.
    pub const fn id(&self) -> ThumbId {
        self.id
    }

    /// Current value.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Per-thumb limits as `(min, max)`.
    ///
    /// Unbounded thumbs report `(i32::MIN, i32::MAX)`; the track range always applies on top.
    pub const fn limits(&self) -> (i32, i32) {
        (self.limit_min, self.limit_max)
    }
}

/// Mutable access to one thumb of a [`Track`].
///
/// Obtained from [`Track::thumb_mut`]. Every update goes through the track so
/// that ordering, separation, and notifications are handled in one place.
///
/// ```
/// use understory_slider::{Track, TrackConfig};
///
/// let mut track = Track::with_config(TrackConfig { max: 20, steps_apart: 2, ..Default::default() })?;
/// track.add_thumb(2);
/// track.add_thumb(6);
///
/// let changes = track.thumb_mut(1)?.set_value(3);
/// assert_eq!(track.values(), [2, 4]);
/// assert_eq!(changes.len(), 1);
/// # Ok::<(), understory_slider::SliderError>(())
/// ```
#[derive(Debug)]
pub struct ThumbMut<'a> {
    pub(crate) track: &'a mut Track,
    pub(crate) index: usize,
}

impl ThumbMut<'_> {
    /// Position of this thumb in the track.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Stable identity of this thumb.
    pub fn id(&self) -> ThumbId {
        self.track.thumbs[self.index].id
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.track.thumbs[self.index].value
    }

    /// Move this thumb without disturbing its neighbours.
    ///
    /// See [`Track::set_value`] with [`Push::No`].
    pub fn set_value(&mut self, requested: i32) -> Vec<ValueChange> {
        self.set_value_with(requested, Push::No)
    }

    /// Move this thumb, pushing neighbours out of the way.
    ///
    /// See [`Track::set_value`] with [`Push::Yes`].
    pub fn set_value_pushing(&mut self, requested: i32) -> Vec<ValueChange> {
        self.set_value_with(requested, Push::Yes)
    }

    /// Move this thumb with an explicit [`Push`] mode.
    pub fn set_value_with(&mut self, requested: i32, push: Push) -> Vec<ValueChange> {
        self.track.update(self.index, requested, push)
    }

    /// Move this thumb by a whole number of steps.
    ///
    /// See [`Track::nudge`].
    pub fn nudge(&mut self, steps: i32, push: Push) -> Vec<ValueChange> {
        let target = self.track.nudge_target(self.index, steps);
        self.track.update(self.index, target, push)
    }

    /// Restrict the values this thumb may take.
    ///
    /// See [`Track::set_thumb_limits`].
    pub fn set_limits(&mut self, min: i32, max: i32) -> Result<Vec<ValueChange>, SliderError> {
        self.track.set_thumb_limits(self.index, min, max)
    }
}
