// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_slider::{Push, Track, TrackConfig};

/// `n` thumbs packed at the low end of the range, one gap apart.
fn packed_track(n: usize, steps_apart: i32) -> Track {
    let width = i32::try_from(n).unwrap() * steps_apart;
    let mut track = Track::with_config(TrackConfig {
        min: 0,
        max: width * 4,
        step: 1,
        steps_apart,
    })
    .unwrap();
    for i in 0..n {
        track.add_thumb(i32::try_from(i).unwrap() * steps_apart);
    }
    track
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

fn bench_full_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_cascade");
    for &n in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("push_first_to_end_n{}", n), |b| {
            b.iter_batched(
                || packed_track(n, 2),
                |mut track| {
                    let max = track.config().max;
                    let changes = track.set_value(0, max, Push::Yes).unwrap();
                    black_box(changes.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_contained_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("contained");
    let n = 128usize;
    let mut track = packed_track(n, 2);
    track.reposition_thumbs();
    let max = u64::try_from(track.config().max).unwrap();
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    group.bench_function("random_no_push_n128", |b| {
        b.iter(|| {
            let index = usize::try_from(rng.below(n as u64)).unwrap();
            let value = i32::try_from(rng.below(max + 1)).unwrap();
            let changes = track.set_value(index, value, Push::No).unwrap();
            black_box(changes.len());
        })
    });
    group.finish();
}

fn bench_random_pushes(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_push");
    for &n in &[16usize, 128] {
        let mut track = packed_track(n, 3);
        track.reposition_thumbs();
        let max = u64::try_from(track.config().max).unwrap();
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        group.bench_function(format!("random_push_n{}", n), |b| {
            b.iter(|| {
                let index = usize::try_from(rng.below(n as u64)).unwrap();
                let value = i32::try_from(rng.below(max + 1)).unwrap();
                let changes = track.set_value(index, value, Push::Yes).unwrap();
                black_box(changes.len());
            })
        });
    }
    group.finish();
}

fn bench_reconfigure(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconfigure");
    let n = 1024usize;
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("widen_gap_n1024", |b| {
        b.iter_batched(
            || packed_track(n, 1),
            |mut track| {
                let changes = track.set_steps_apart(3).unwrap();
                black_box(changes.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_full_cascade,
    bench_contained_moves,
    bench_random_pushes,
    bench_reconfigure,
);
criterion_main!(benches);
