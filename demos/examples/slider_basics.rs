// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Builds a three-thumb track, registers a listener, and moves a thumb with and
//! without clamping against its neighbours.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_basics`

use understory_slider::{Push, Thumb, Track, TrackConfig};

fn print_values(label: &str, track: &Track) {
    println!("{label:<28} {:?}", track.values());
}

fn main() -> Result<(), understory_slider::SliderError> {
    let mut track = Track::with_config(TrackConfig {
        min: 0,
        max: 20,
        step: 1,
        steps_apart: 2,
    })?;
    track.add_thumb(2);
    track.add_thumb(6);
    track.add_thumb(12);

    track.set_listener(|_: &Track, thumb: &Thumb, index: usize, value: i32| {
        println!("  changed: thumb {:?} at index {index} -> {value}", thumb.id());
    });

    print_values("initial", &track);

    println!("== thumb 1 -> 8 ==");
    track.thumb_mut(1)?.set_value(8);
    print_values("between neighbours", &track);

    println!("== thumb 1 -> 14 (no push) ==");
    track.thumb_mut(1)?.set_value(14);
    print_values("stops a gap short", &track);

    println!("== thumb 1 -> 14 again ==");
    let changes = track.set_value(1, 14, Push::No)?;
    print_values("unchanged", &track);
    println!("  {} changes", changes.len());

    println!("== thumb 0 -> 7 (snapped, range 0..=20 step 5) ==");
    track.set_steps_apart(0)?;
    track.set_step(5)?;
    track.set_value(0, 7, Push::No)?;
    print_values("after resnap", &track);

    Ok(())
}
