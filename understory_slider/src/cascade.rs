// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value resolution over a scratch copy of the thumb values.
//!
//! ## Overview
//!
//! A [`Cascade`] takes a snapshot of the current values and the effective
//! [`Bounds`] of every thumb, computes a final configuration, and records the
//! order in which thumbs settled. Nothing is written back to the track here;
//! the [`Track`](crate::Track) commits the outcome in one step afterwards.
//!
//! ## Push resolution
//!
//! The moving thumb first clamps its request into its own bounds. If the left
//! neighbour stands within the gap, that neighbour is asked to settle at
//! `value - gap`, moving left only; it clamps into its own bounds and may in
//! turn push its own left neighbour. Once it has settled, the moving thumb is
//! bounded by it (`max(value, left + gap)`). The right side follows the same
//! rule mirrored. A thumb is recorded as settled only after everything it
//! pushed, so the settle order runs from the outermost displaced thumb back to
//! the thumb that was asked to move.

use alloc::vec::Vec;

use crate::config::{Bounds, TrackConfig};
use crate::listener::Side;

#[derive(Debug)]
pub(crate) struct Cascade {
    gap: i64,
    bounds: Vec<Bounds>,
    before: Vec<i64>,
    values: Vec<i64>,
    settled: Vec<usize>,
    recorded: Vec<bool>,
}

impl Cascade {
    pub(crate) fn new(config: &TrackConfig, bounds: Vec<Bounds>, values: Vec<i64>) -> Self {
        debug_assert_eq!(
            bounds.len(),
            values.len(),
            "every thumb needs bounds and a value"
        );
        Self {
            gap: config.gap(),
            recorded: alloc::vec![false; values.len()],
            bounds,
            before: values.clone(),
            values,
            settled: Vec::new(),
        }
    }

    /// Move `index` toward `target` without touching any other thumb.
    ///
    /// `target` must already be on the grid.
    pub(crate) fn contain(&mut self, index: usize, target: i64) {
        let bounds = self.bounds[index];
        let mut v = bounds.clamp(target);
        if let Some(left) = index.checked_sub(1) {
            v = v.max(self.values[left] + self.gap);
        }
        if index + 1 < self.values.len() {
            v = v.min(self.values[index + 1] - self.gap);
        }
        v = bounds.clamp(v);
        log::trace!("thumb {index} contained at {v} (target {target})");
        self.settle(index, v);
    }

    /// Move `index` toward `target`, displacing neighbours as needed.
    ///
    /// `target` must already be on the grid.
    pub(crate) fn push(&mut self, index: usize, target: i64) {
        self.push_toward(index, target, None);
    }

    fn push_toward(&mut self, index: usize, target: i64, toward: Option<Side>) -> i64 {
        let bounds = self.bounds[index];
        let mut v = bounds.clamp(target);

        if toward != Some(Side::Right) {
            if let Some(left) = index.checked_sub(1) {
                if self.values[left] > v - self.gap {
                    let stop = self.push_toward(left, v - self.gap, Some(Side::Left));
                    v = v.max(stop + self.gap);
                }
            }
        }
        if toward != Some(Side::Left) {
            let right = index + 1;
            if right < self.values.len() && self.values[right] < v + self.gap {
                let stop = self.push_toward(right, v + self.gap, Some(Side::Right));
                v = v.min(stop - self.gap);
            }
        }

        v = bounds.clamp(v);
        log::trace!("thumb {index} pushed to {v} (target {target})");
        self.settle(index, v);
        v
    }

    /// Restore grid alignment, bounds, and separation across every thumb.
    ///
    /// A left-to-right sweep lifts thumbs clear of their left neighbours, then a
    /// right-to-left sweep pulls them back under the top of the range. Changes are
    /// recorded by ascending index.
    pub(crate) fn normalize(&mut self, config: &TrackConfig) {
        let n = self.values.len();
        for i in 0..n {
            let mut v = self.bounds[i].clamp(config.snap_wide(self.values[i]));
            if i > 0 {
                v = self.bounds[i].clamp(v.max(self.values[i - 1] + self.gap));
            }
            self.values[i] = v;
        }
        for i in (0..n.saturating_sub(1)).rev() {
            let v = self.values[i].min(self.values[i + 1] - self.gap);
            self.values[i] = self.bounds[i].clamp(v);
        }
        self.settled = (0..n)
            .filter(|&i| self.values[i] != self.before[i])
            .collect();
    }

    /// Overwrite the target values wholesale before a [`normalize`](Self::normalize) pass.
    pub(crate) fn propose(&mut self, values: impl IntoIterator<Item = i64>) {
        for (slot, v) in self.values.iter_mut().zip(values) {
            *slot = v;
        }
    }

    fn settle(&mut self, index: usize, value: i64) {
        self.values[index] = value;
        if value != self.before[index] && !self.recorded[index] {
            self.recorded[index] = true;
            self.settled.push(index);
        }
    }

    /// Settled thumbs that changed, in settle order, with their old and new values.
    pub(crate) fn into_changes(self) -> impl Iterator<Item = (usize, i64, i64)> {
        let Self {
            before,
            values,
            settled,
            ..
        } = self;
        settled
            .into_iter()
            .map(move |i| (i, before[i], values[i]))
            .filter(|&(_, old, new)| old != new)
    }
}
