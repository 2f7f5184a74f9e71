// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: the value core of a multi-thumb range slider.
//!
//! ## Overview
//!
//! A [`Track`] holds an ordered set of thumbs. Every thumb value lies in a shared
//! `[min, max]` range, sits on a step grid, and keeps a minimum distance (the gap,
//! `steps_apart * step`) from its neighbours.
//! Given a requested value for one thumb, the track computes where that thumb and,
//! optionally, its displaced neighbours end up, and reports each change in a
//! well-defined order.
//!
//! This crate does not draw, measure, or recognize gestures.
//! A toolkit maps pointer or keyboard input to a requested value, calls into the
//! track, and repaints from the reported changes.
//!
//! ## Update modes
//!
//! - [`Push::No`]: the thumb is clamped between its neighbours (each a gap away).
//!   Only that thumb can change.
//! - [`Push::Yes`]: neighbours within the gap are pushed outward, recursively,
//!   until the cascade fits or runs into the end of the range.
//!
//! Requests outside the range never fail; they clamp. Step snapping rounds to the
//! nearest grid value with ties toward `min`.
//!
//! ## Notification order
//!
//! Each operation commits its final configuration first and then reports one
//! [`ValueChange`] per moved thumb, both as its return value and through the
//! registered [`ValueListener`]:
//! - A push cascade reports the outermost displaced thumb first and the thumb you
//!   moved last.
//! - If one update displaces thumbs on both sides, the left side is reported first.
//! - Unchanged thumbs are not reported.
//!
//! ## Example
//!
//! ```rust
//! use understory_slider::{Push, Track, TrackConfig};
//!
//! let mut track = Track::with_config(TrackConfig {
//!     min: 0,
//!     max: 20,
//!     step: 1,
//!     steps_apart: 2,
//! })?;
//! track.add_thumb(2);
//! track.add_thumb(6);
//! track.add_thumb(12);
//!
//! // Without push, the thumb stops a gap short of its neighbour.
//! track.thumb_mut(1)?.set_value(14);
//! assert_eq!(track.values(), [2, 10, 12]);
//!
//! // With push, the neighbour makes room and is reported first.
//! let changes = track.set_value(1, 14, Push::Yes)?;
//! assert_eq!(track.values(), [2, 14, 16]);
//! let order: Vec<_> = changes.iter().map(|c| (c.index, c.new)).collect();
//! assert_eq!(order, [(2, 16), (1, 14)]);
//! # Ok::<(), understory_slider::SliderError>(())
//! ```
//!
//! ## Listening for changes
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_slider::{Push, Thumb, Track};
//!
//! let mut track = Track::new();
//! track.add_thumb(10);
//! track.add_thumb(90);
//!
//! let moved = Rc::new(RefCell::new(Vec::new()));
//! let sink = moved.clone();
//! track.set_listener(move |_: &Track, _: &Thumb, index: usize, value: i32| {
//!     sink.borrow_mut().push((index, value));
//! });
//!
//! track.set_value(0, 25, Push::No)?;
//! assert_eq!(*moved.borrow(), [(0, 25)]);
//! # Ok::<(), understory_slider::SliderError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cascade;
pub mod config;
pub mod error;
pub mod listener;
pub mod thumb;
pub mod track;

pub use config::TrackConfig;
pub use error::SliderError;
pub use listener::{Push, Side, ValueChange, ValueListener};
pub use thumb::{Thumb, ThumbId, ThumbMut};
pub use track::Track;
