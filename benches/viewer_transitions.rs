// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for story viewer transitions.
//!
//! Measures the performance of:
//! - Pure state machine steps over a large layout
//! - A full session walk from open to exhaustion
//! - Progress segment projection for long collections

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use talka_stories::application::port::{HostQueue, NullMedia, SystemClock};
use talka_stories::application::viewer::{StoryViewer, ViewerSettings};
use talka_stories::domain::story::{Collection, MediaItem, Owner};
use talka_stories::domain::viewer::{segments, Input, SwipeDirection, ViewerState};

/// Builds `count` collections of `items` placeholder images each.
fn layout(count: usize, items: usize) -> Vec<Collection> {
    (0..count)
        .filter_map(|c| {
            let owner = Owner::new(format!("u{c}"), format!("user{c}"), format!("User {c}"));
            let items = (0..items)
                .map(|i| MediaItem::image(format!("u{c}-{i}"), format!("mock://u{c}/{i}")))
                .collect();
            Collection::new(owner, items).ok()
        })
        .collect()
}

/// Benchmark raw state machine steps.
///
/// No side effects, only `ViewerState::apply` against the layout.
fn bench_state_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");
    let collections = layout(50, 10);

    group.bench_function("tap_forward_until_exhausted", |b| {
        b.iter(|| {
            let mut state = ViewerState::open(collections.as_slice(), 0);
            let mut steps = 0_usize;
            while let Some(current) = state.filter(|s| !s.is_closed()) {
                state = Some(current.apply(Input::TapRightZone, collections.as_slice()).to);
                steps += 1;
            }
            black_box(steps);
        });
    });

    group.bench_function("mixed_inputs", |b| {
        let inputs = [
            Input::TapRightZone,
            Input::HoldStart,
            Input::TapLeftZone,
            Input::HoldEnd,
            Input::Swipe(SwipeDirection::Left),
            Input::JumpToItem(3),
            Input::Swipe(SwipeDirection::Right),
            Input::ItemTimerElapsed,
        ];
        b.iter(|| {
            let Some(mut state) = ViewerState::open(collections.as_slice(), 25) else {
                return;
            };
            for input in inputs.iter().cycle().take(1_000) {
                state = state.apply(*input, collections.as_slice()).to;
            }
            black_box(state);
        });
    });

    group.finish();
}

/// Benchmark a full session including history recording and host events.
fn bench_session_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");
    let collections = layout(20, 5);

    group.bench_function("session_open_to_exhausted", |b| {
        b.iter(|| {
            let Ok(mut viewer) = StoryViewer::open(
                collections.clone(),
                0,
                ViewerSettings::default(),
                SystemClock,
                NullMedia,
                HostQueue::new(),
            ) else {
                return;
            };
            while !viewer.is_closed() {
                viewer.dispatch(Input::ItemTimerElapsed);
            }
            black_box(viewer.history().len());
        });
    });

    group.finish();
}

/// Benchmark progress projection.
fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_transitions");

    group.bench_function("segments_100_items", |b| {
        b.iter(|| black_box(segments(black_box(100), black_box(42), black_box(0.37))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_state_machine,
    bench_session_walk,
    bench_segments
);
criterion_main!(benches);
