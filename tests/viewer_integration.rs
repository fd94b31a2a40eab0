// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the story viewer session driven through its
//! public API with a fake clock, media controller and host.

use std::time::Duration;

use talka_stories::application::port::testing::{
    FakeClock, MediaCall, RecordingHost, RecordingMedia,
};
use talka_stories::application::viewer::{Position, StoryViewer, ViewerSettings};
use talka_stories::domain::story::{
    Collection, DisplayDuration, MediaItem, Owner, SwipeThreshold, TapZone,
};
use talka_stories::domain::viewer::{CloseReason, Cursor, Input, SwipeDirection, ViewerState};

type Viewer = StoryViewer<FakeClock, RecordingMedia, RecordingHost>;

struct Fixture {
    viewer: Viewer,
    clock: FakeClock,
    media: RecordingMedia,
    host: RecordingHost,
}

fn collection(owner: &str, durations_ms: &[u64]) -> Collection {
    let items = durations_ms
        .iter()
        .enumerate()
        .map(|(i, ms)| {
            MediaItem::image(format!("{owner}-{i}"), format!("mock://{owner}/{i}"))
                .with_duration(DisplayDuration::from_millis(*ms))
        })
        .collect();
    Collection::new(Owner::new(owner, owner, owner), items).expect("non-empty")
}

fn open_with(collections: Vec<Collection>, start: usize, settings: ViewerSettings) -> Fixture {
    let clock = FakeClock::new();
    let media = RecordingMedia::new();
    let host = RecordingHost::new();
    let viewer = StoryViewer::open(
        collections,
        start,
        settings,
        clock.clone(),
        media.clone(),
        host.clone(),
    )
    .expect("viewer opens");
    Fixture {
        viewer,
        clock,
        media,
        host,
    }
}

fn open(collections: Vec<Collection>) -> Fixture {
    open_with(collections, 0, ViewerSettings::default())
}

fn at(collection: usize, item: usize) -> ViewerState {
    ViewerState::Playing(Cursor::new(collection, item))
}

#[test]
fn three_item_scenario_rolls_over_then_closes() {
    let mut f = open(vec![
        collection("u1", &[3_000]),
        collection("u2", &[3_000, 3_000]),
    ]);

    f.clock.advance_ms(3_000);
    f.viewer.tick();
    assert_eq!(f.viewer.state(), at(1, 0));

    f.viewer.tap(TapZone::Right);
    assert_eq!(f.viewer.state(), at(1, 1));

    f.viewer.tap(TapZone::Right);
    assert_eq!(f.viewer.state(), ViewerState::Closed);
    assert_eq!(f.host.closes(), vec![CloseReason::Exhausted]);
}

#[test]
fn advancing_past_last_item_of_collection_lands_on_next_first_item() {
    let mut f = open(vec![collection("a", &[1_000, 1_000]), collection("b", &[1_000])]);

    f.viewer.tap(TapZone::Right);
    assert_eq!(f.viewer.state(), at(0, 1));
    f.viewer.dispatch(Input::ItemTimerElapsed);
    assert_eq!(f.viewer.state(), at(1, 0));
    f.viewer.dispatch(Input::ItemTimerElapsed);
    assert!(f.viewer.is_closed());
}

#[test]
fn paused_time_does_not_count_toward_auto_advance() {
    let mut f = open(vec![collection("a", &[5_000, 5_000])]);

    f.clock.advance_ms(1_000);
    f.viewer.hold_start();
    f.clock.advance_ms(2_000);
    assert!(f.viewer.tick().is_none(), "timer must not fire while paused");
    f.viewer.hold_end();

    // 1000ms played so far; 3999ms more is still short of 5000ms.
    f.clock.advance_ms(3_999);
    assert!(f.viewer.tick().is_none());
    assert_eq!(f.viewer.state(), at(0, 0));

    f.clock.advance_ms(1);
    f.viewer.tick();
    assert_eq!(f.viewer.state(), at(0, 1));
    assert_eq!(f.clock.elapsed(), Duration::from_millis(7_000));
}

#[test]
fn repeated_hold_inputs_are_idempotent() {
    let mut f = open(vec![collection("a", &[5_000])]);

    assert!(f.viewer.hold_end().is_noop());
    f.viewer.hold_start();
    assert!(f.viewer.hold_start().is_noop());
    assert_eq!(f.media.count(&MediaCall::Pause), 1);
    assert!(f.viewer.state().is_paused());
}

#[test]
fn tap_back_on_very_first_item_changes_nothing() {
    let mut f = open(vec![collection("a", &[5_000, 5_000]), collection("b", &[5_000])]);
    let history_before = f.viewer.history().len();

    let transition = f.viewer.tap(TapZone::Left);

    assert!(transition.is_noop());
    assert_eq!(f.viewer.state(), at(0, 0));
    assert_eq!(f.viewer.history().len(), history_before);
}

#[test]
fn swipe_below_threshold_leaves_indices_unchanged() {
    let mut settings = ViewerSettings::default();
    settings.gestures.swipe_threshold = SwipeThreshold::new(100.0);
    let mut f = open_with(
        vec![collection("a", &[5_000]), collection("b", &[5_000])],
        0,
        settings,
    );

    f.viewer.pointer_pressed(Position::new(200.0, 300.0));
    f.viewer.pointer_moved(Position::new(170.0, 300.0));
    let transitions = f.viewer.pointer_released(Position::new(170.0, 300.0), 360.0);

    assert!(transitions
        .iter()
        .all(|t| t.to.cursor() == Some(Cursor::new(0, 0))));
    assert_eq!(f.viewer.state(), at(0, 0));
    assert_eq!(f.viewer.drag_offset(), 0.0);
}

#[test]
fn swipe_past_threshold_switches_collection() {
    let mut f = open(vec![collection("a", &[5_000, 5_000]), collection("b", &[5_000])]);

    f.viewer.pointer_pressed(Position::new(300.0, 300.0));
    f.viewer.pointer_moved(Position::new(150.0, 300.0));
    f.viewer.pointer_released(Position::new(150.0, 300.0), 360.0);
    assert_eq!(f.viewer.state(), at(1, 0));

    f.viewer.swipe(SwipeDirection::Right);
    assert_eq!(f.viewer.state(), at(0, 0));
}

#[test]
fn media_failure_does_not_stall_auto_advance() {
    let collections = vec![collection("a", &[2_000, 2_000])];
    let clock = FakeClock::new();
    let media = RecordingMedia::new();
    media.fail_on("a-0");
    let host = RecordingHost::new();
    let mut viewer = StoryViewer::open(
        collections,
        0,
        ViewerSettings::default(),
        clock.clone(),
        media.clone(),
        host.clone(),
    )
    .expect("opens");

    assert_eq!(host.notices().len(), 1);
    assert_eq!(media.count(&MediaCall::Play), 0);

    clock.advance_ms(2_000);
    viewer.tick();
    assert_eq!(viewer.state(), at(0, 1));
    assert_eq!(media.count(&MediaCall::Play), 1);
}

#[test]
fn close_fires_once_and_releases_media() {
    let mut f = open(vec![collection("a", &[5_000])]);

    f.viewer.close();
    f.viewer.close();
    f.viewer.tap(TapZone::Right);

    assert_eq!(f.host.closes(), vec![CloseReason::Dismissed]);
    assert_eq!(f.media.count(&MediaCall::Release), 1);
    assert!(f.viewer.tick().is_none());
}

#[test]
fn dropping_an_open_viewer_releases_media_without_closing() {
    let f = open(vec![collection("a", &[5_000])]);
    let media = f.media.clone();
    let host = f.host.clone();

    drop(f);

    assert_eq!(media.count(&MediaCall::Release), 1);
    assert!(host.closes().is_empty());
}

/// Small deterministic generator for input sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

#[test]
fn random_input_sequences_keep_indices_valid() {
    let layout: [&[u64]; 4] = [&[1_200, 1_500], &[1_000], &[1_800, 1_000, 1_400], &[1_100]];

    for seed in 0..40 {
        let collections: Vec<_> = layout
            .iter()
            .enumerate()
            .map(|(i, durations)| collection(&format!("u{i}"), durations))
            .collect();
        for (collection, durations) in collections.iter().zip(layout) {
            let actual: Vec<u64> = collection
                .items()
                .iter()
                .filter_map(|item| item.duration.map(DisplayDuration::as_millis))
                .collect();
            assert_eq!(actual, durations, "durations must be within bounds");
        }
        let lens: Vec<usize> = layout.iter().map(|d| d.len()).collect();
        let start = (seed as usize) % lens.len();
        let mut f = open_with(collections, start, ViewerSettings::default());
        let mut rng = Lcg(seed);

        for _ in 0..200 {
            let input = match rng.next() % 11 {
                0 => Input::ItemTimerElapsed,
                1 => Input::HoldStart,
                2 => Input::HoldEnd,
                3 | 4 => Input::TapLeftZone,
                5 | 6 => Input::TapRightZone,
                7 => Input::Swipe(SwipeDirection::Left),
                8 => Input::Swipe(SwipeDirection::Right),
                9 => Input::JumpToItem((rng.next() % 4) as usize),
                _ => Input::JumpToCollection((rng.next() % 5) as usize),
            };
            f.clock.advance_ms(rng.next() % 1_400);
            f.viewer.tick();
            f.viewer.dispatch(input);

            match f.viewer.state().cursor() {
                Some(cursor) => {
                    assert!(cursor.collection < lens.len());
                    assert!(cursor.item < lens[cursor.collection]);
                    assert!(f.viewer.current_item().is_some());
                    let active = f.viewer.progress().iter().filter(|s| s.is_active()).count();
                    assert_eq!(active, 1);
                }
                None => {
                    assert!(f.viewer.is_closed());
                    break;
                }
            }
        }
        assert!(f.host.closes().len() <= 1);
    }
}
