// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The track: configuration, the ordered thumb arena, and update entry points.
//!
//! ## Overview
//!
//! A [`Track`] owns its [`TrackConfig`] and an ordered sequence of [`Thumb`]s,
//! index `0` being the leftmost (smallest value). Neighbours are purely
//! positional, so there are no back-pointers between thumbs.
//!
//! Every operation that can move thumbs computes the final configuration on a
//! scratch copy, commits it, and only then reports the changes, both as the
//! returned `Vec<ValueChange>` and through the registered [`ValueListener`].
//!
//! ## Configuration changes
//!
//! Configuration setters validate first and leave the track untouched on error.
//! On success, existing thumbs are re-clamped: each value is snapped into its
//! range, then separation is restored left to right and the top of the range is
//! respected right to left. Changed thumbs are reported by ascending index.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::cascade::Cascade;
use crate::config::{TrackConfig, narrow};
use crate::error::SliderError;
use crate::listener::{Push, Side, ValueChange, ValueListener};
use crate::thumb::{Thumb, ThumbId, ThumbMut};

/// An ordered set of thumbs sharing one range, step, and separation.
///
/// ## Usage
///
/// - Construct with [`Track::new`] for the default `0..=100` range, or with
///   [`Track::with_config`].
/// - Add thumbs in ascending order with [`Track::add_thumb`].
/// - Optionally register a listener with [`Track::set_listener`].
/// - Move thumbs with [`Track::set_value`] or through a [`ThumbMut`] handle.
pub struct Track {
    pub(crate) config: TrackConfig,
    pub(crate) thumbs: Vec<Thumb>,
    next_id: u32,
    listener: Option<Box<dyn ValueListener>>,
}

impl core::fmt::Debug for Track {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Track")
            .field("config", &self.config)
            .field("thumbs", &self.thumbs)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    /// Create an empty track with [`TrackConfig::default`].
    pub fn new() -> Self {
        Self {
            config: TrackConfig::default(),
            thumbs: Vec::new(),
            next_id: 0,
            listener: None,
        }
    }

    /// Create an empty track with a validated configuration.
    pub fn with_config(config: TrackConfig) -> Result<Self, SliderError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Current configuration.
    pub fn config(&self) -> TrackConfig {
        self.config
    }

    /// Replace the whole configuration, re-clamping existing thumbs.
    pub fn set_config(&mut self, config: TrackConfig) -> Result<Vec<ValueChange>, SliderError> {
        config.validate()?;
        log::debug!("track config {:?} -> {:?}", self.config, config);
        self.config = config;
        let mut cascade = self.cascade();
        cascade.normalize(&self.config);
        Ok(self.commit(cascade))
    }

    /// Set the lowest allowed value.
    pub fn set_min(&mut self, min: i32) -> Result<Vec<ValueChange>, SliderError> {
        self.set_config(TrackConfig { min, ..self.config })
    }

    /// Set the highest allowed value.
    pub fn set_max(&mut self, max: i32) -> Result<Vec<ValueChange>, SliderError> {
        self.set_config(TrackConfig { max, ..self.config })
    }

    /// Set the value granularity.
    pub fn set_step(&mut self, step: i32) -> Result<Vec<ValueChange>, SliderError> {
        self.set_config(TrackConfig { step, ..self.config })
    }

    /// Set the minimum separation between adjacent thumbs, in steps.
    pub fn set_steps_apart(&mut self, steps_apart: i32) -> Result<Vec<ValueChange>, SliderError> {
        self.set_config(TrackConfig {
            steps_apart,
            ..self.config
        })
    }

    /// Register the listener that receives one call per changed thumb.
    ///
    /// Replaces any previous listener.
    pub fn set_listener(&mut self, listener: impl ValueListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove and return the registered listener, if any.
    pub fn take_listener(&mut self) -> Option<Box<dyn ValueListener>> {
        self.listener.take()
    }

    /// Number of thumbs.
    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    /// True if the track has no thumbs.
    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    /// All thumbs, leftmost first.
    pub fn thumbs(&self) -> &[Thumb] {
        &self.thumbs
    }

    /// The thumb at `index`, if any.
    pub fn thumb(&self, index: usize) -> Option<&Thumb> {
        self.thumbs.get(index)
    }

    /// Mutable handle to the thumb at `index`.
    pub fn thumb_mut(&mut self, index: usize) -> Result<ThumbMut<'_>, SliderError> {
        self.check(index)?;
        Ok(ThumbMut { track: self, index })
    }

    /// Current position of the thumb with the given id.
    pub fn index_of(&self, id: ThumbId) -> Option<usize> {
        self.thumbs.iter().position(|t| t.id == id)
    }

    /// Current values, leftmost first.
    pub fn values(&self) -> Vec<i32> {
        self.thumbs.iter().map(Thumb::value).collect()
    }

    /// The neighbour of the thumb at `index` on the given side.
    ///
    /// Returns `Ok(None)` at either end of the track.
    pub fn neighbor(&self, index: usize, side: Side) -> Result<Option<&Thumb>, SliderError> {
        self.check(index)?;
        Ok(match side {
            Side::Left => index.checked_sub(1).and_then(|i| self.thumbs.get(i)),
            Side::Right => self.thumbs.get(index + 1),
        })
    }

    /// Append a thumb after the current last one.
    ///
    /// The value is clamped into the range and snapped to the grid. Existing
    /// thumbs are not pushed and no notification is sent; the caller keeps the
    /// value clear of the last thumb.
    pub fn add_thumb(&mut self, value: i32) -> ThumbId {
        let thumb = self.make_thumb(value);
        let id = thumb.id;
        log::debug!("add thumb {id:?} at {}", thumb.value);
        self.thumbs.push(thumb);
        id
    }

    /// Insert a thumb at `index`, shifting later thumbs right.
    ///
    /// `index == len()` appends. Clamping works as in [`Track::add_thumb`].
    pub fn insert_thumb(&mut self, index: usize, value: i32) -> Result<ThumbId, SliderError> {
        if index > self.thumbs.len() {
            return Err(SliderError::ThumbOutOfBounds {
                index,
                len: self.thumbs.len(),
            });
        }
        let thumb = self.make_thumb(value);
        let id = thumb.id;
        log::debug!("insert thumb {id:?} at index {index} with {}", thumb.value);
        self.thumbs.insert(index, thumb);
        Ok(id)
    }

    /// Remove the thumb at `index`, shifting later thumbs left.
    ///
    /// Remaining values are untouched.
    pub fn remove_thumb(&mut self, index: usize) -> Result<Thumb, SliderError> {
        self.check(index)?;
        let thumb = self.thumbs.remove(index);
        log::debug!("remove thumb {:?} from index {index}", thumb.id);
        Ok(thumb)
    }

    /// Remove every thumb.
    pub fn clear_thumbs(&mut self) {
        self.thumbs.clear();
    }

    /// Request a new value for the thumb at `index`.
    ///
    /// The request is snapped to the grid (ties toward `min`) and clamped into
    /// the thumb's range. Then:
    ///
    /// - [`Push::No`]: the value is also clamped to stay a gap away from both
    ///   neighbours; only this thumb can change.
    /// - [`Push::Yes`]: neighbours within the gap are pushed outward, recursively,
    ///   until the cascade fits or hits the end of the range; this thumb then takes
    ///   the closest value the settled neighbours allow.
    ///
    /// Returns the changed thumbs in notification order. Out-of-range requests
    /// clamp; the only error is an out-of-range `index`.
    pub fn set_value(
        &mut self,
        index: usize,
        requested: i32,
        push: Push,
    ) -> Result<Vec<ValueChange>, SliderError> {
        self.check(index)?;
        Ok(self.update(index, requested, push))
    }

    /// Move the thumb at `index` by `steps` grid steps (negative moves left).
    pub fn nudge(
        &mut self,
        index: usize,
        steps: i32,
        push: Push,
    ) -> Result<Vec<ValueChange>, SliderError> {
        self.check(index)?;
        let target = self.nudge_target(index, steps);
        Ok(self.update(index, target, push))
    }

    /// Restrict the values the thumb at `index` may take to `min..=max`.
    ///
    /// The track range still applies. If the current value falls outside the new
    /// limits, the thumb moves to the nearest allowed value and neighbours are
    /// re-clamped as for a configuration change, so separation still holds
    /// whenever some layout allows it. Changed thumbs are reported by ascending index.
    pub fn set_thumb_limits(
        &mut self,
        index: usize,
        min: i32,
        max: i32,
    ) -> Result<Vec<ValueChange>, SliderError> {
        if min > max {
            return Err(SliderError::InvertedLimits { min, max });
        }
        self.check(index)?;
        let thumb = &mut self.thumbs[index];
        thumb.limit_min = min;
        thumb.limit_max = max;
        log::debug!("thumb {:?} limited to {min}..={max}", thumb.id);
        let mut cascade = self.cascade();
        cascade.normalize(&self.config);
        Ok(self.commit(cascade))
    }

    /// Spread the thumbs evenly across the range.
    ///
    /// Thumb `i` of `n` aims for `min + (max - min) * (i + 1) / (n + 1)`, then
    /// grid, limits, and separation are restored as for a configuration change.
    pub fn reposition_thumbs(&mut self) -> Vec<ValueChange> {
        let min = i64::from(self.config.min);
        let span = i64::from(self.config.max) - min;
        let n = self.thumbs.len() as i64;
        let mut cascade = self.cascade();
        cascade.propose((1..=n).map(|i| min + span * i / (n + 1)));
        cascade.normalize(&self.config);
        self.commit(cascade)
    }

    pub(crate) fn update(&mut self, index: usize, requested: i32, push: Push) -> Vec<ValueChange> {
        let target = self.config.snap_wide(i64::from(requested));
        log::trace!("thumb {index} requested {requested} ({push:?}), snapped to {target}");
        let mut cascade = self.cascade();
        match push {
            Push::No => cascade.contain(index, target),
            Push::Yes => cascade.push(index, target),
        }
        self.commit(cascade)
    }

    pub(crate) fn nudge_target(&self, index: usize, steps: i32) -> i32 {
        let value = i64::from(self.thumbs[index].value);
        let target = value + i64::from(steps) * i64::from(self.config.step);
        narrow(target.clamp(i64::from(self.config.min), i64::from(self.config.max)))
    }

    fn check(&self, index: usize) -> Result<(), SliderError> {
        if index < self.thumbs.len() {
            Ok(())
        } else {
            Err(SliderError::ThumbOutOfBounds {
                index,
                len: self.thumbs.len(),
            })
        }
    }

    fn make_thumb(&mut self, value: i32) -> Thumb {
        let id = ThumbId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Thumb::new(id, self.config.snap(value))
    }

    fn cascade(&self) -> Cascade {
        let bounds = self
            .thumbs
            .iter()
            .map(|t| self.config.bounds_for(t.limit_min, t.limit_max))
            .collect();
        let values = self.thumbs.iter().map(|t| i64::from(t.value)).collect();
        Cascade::new(&self.config, bounds, values)
    }

    fn commit(&mut self, cascade: Cascade) -> Vec<ValueChange> {
        let changes: Vec<ValueChange> = cascade
            .into_changes()
            .map(|(index, old, new)| {
                let thumb = &mut self.thumbs[index];
                thumb.value = narrow(new);
                ValueChange {
                    id: thumb.id,
                    index,
                    old: narrow(old),
                    new: thumb.value,
                }
            })
            .collect();
        self.notify(&changes);
        changes
    }

    fn notify(&mut self, changes: &[ValueChange]) {
        if changes.is_empty() {
            return;
        }
        // Detached while it runs so the listener can borrow the whole track.
        if let Some(mut listener) = self.listener.take() {
            for change in changes {
                listener.on_value_changed(self, &self.thumbs[change.index], change.index, change.new);
            }
            self.listener = Some(listener);
        }
    }
}
