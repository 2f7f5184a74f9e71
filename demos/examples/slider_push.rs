// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push cascades.
//!
//! Moves thumbs far past their neighbours in push mode and prints the change
//! records in the order they are reported: outermost displaced thumb first,
//! requested thumb last.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_push`

use understory_slider::{Push, Track, TrackConfig, ValueChange};

fn fresh() -> Result<Track, understory_slider::SliderError> {
    let mut track = Track::with_config(TrackConfig {
        min: 0,
        max: 20,
        step: 1,
        steps_apart: 2,
    })?;
    track.add_thumb(2);
    track.add_thumb(6);
    track.add_thumb(12);
    Ok(track)
}

fn show(title: &str, track: &Track, changes: &[ValueChange]) {
    println!("== {title} ==");
    for c in changes {
        println!("  index {}: {} -> {}", c.index, c.old, c.new);
    }
    println!("  values: {:?}", track.values());
}

fn main() -> Result<(), understory_slider::SliderError> {
    let mut track = fresh()?;
    let changes = track.set_value(1, 14, Push::Yes)?;
    show("thumb 1 -> 14", &track, &changes);

    let mut track = fresh()?;
    let changes = track.set_value(0, 14, Push::Yes)?;
    show("thumb 0 -> 14", &track, &changes);

    let mut track = fresh()?;
    let changes = track.set_value(2, 0, Push::Yes)?;
    show("thumb 2 -> 0", &track, &changes);

    let mut track = fresh()?;
    let changes = track.set_value(0, 100, Push::Yes)?;
    show("thumb 0 -> 100 (clamped at the end)", &track, &changes);

    let mut track = fresh()?;
    track.set_thumb_limits(2, 0, 14)?;
    let changes = track.set_value(0, 20, Push::Yes)?;
    show("thumb 0 -> 20, thumb 2 limited to 14", &track, &changes);

    Ok(())
}
