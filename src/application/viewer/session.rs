// SPDX-License-Identifier: MPL-2.0
//! Story viewer session.
//!
//! [`StoryViewer`] drives the pure [`ViewerState`] machine and owns every
//! side effect around it: the per-item timer, gesture recognition, media
//! commands and host callbacks. Inputs are applied in arrival order on a
//! single thread; timer completion is evaluated on [`StoryViewer::tick`].

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::gesture::{GestureSettings, GestureTracker, Position};
use super::timer::ItemTimer;
use crate::application::port::{Clock, MediaController, MediaInfo, Notice, ViewerHost};
use crate::diagnostics::{CircularBuffer, HistoryCapacity, TransitionRecord};
use crate::domain::error::{MediaError, StoryError};
use crate::domain::story::{Collection, DisplayDuration, MediaId, MediaItem, Owner, TapZone};
use crate::domain::viewer::{
    segments, CloseReason, Cursor, Input, SegmentState, SwipeDirection, Transition, ViewerState,
};

/// Tunables for a viewer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Duration of items without their own duration.
    pub image_duration: DisplayDuration,
    /// Play videos for their natural length when known.
    pub use_video_length: bool,
    pub gestures: GestureSettings,
    pub history_capacity: HistoryCapacity,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            image_duration: DisplayDuration::default(),
            use_video_length: true,
            gestures: GestureSettings::default(),
            history_capacity: HistoryCapacity::default(),
        }
    }
}

/// Outcome of loading the active item's media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    Ready(MediaInfo),
    /// The item is shown as unavailable; its timer still runs.
    Failed(MediaError),
}

impl MediaStatus {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, MediaStatus::Ready(_))
    }
}

/// Owners of the collections adjacent to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a Owner>,
    pub next: Option<&'a Owner>,
}

/// A story viewer session.
///
/// Generic over its ports so tests can inject a fake clock, a recording
/// media controller and a recording host.
pub struct StoryViewer<C, M, H>
where
    C: Clock,
    M: MediaController,
    H: ViewerHost,
{
    collections: Arc<[Collection]>,
    state: ViewerState,
    timer: Option<ItemTimer>,
    gestures: GestureTracker,
    settings: ViewerSettings,
    clock: C,
    media: M,
    host: H,
    opened_at: Instant,
    media_status: Option<MediaStatus>,
    seen: HashSet<MediaId>,
    history: CircularBuffer<TransitionRecord>,
    close_reason: Option<CloseReason>,
}

impl<C, M, H> StoryViewer<C, M, H>
where
    C: Clock,
    M: MediaController,
    H: ViewerHost,
{
    /// Opens the viewer on the first item of `initial_collection` and starts
    /// playing it.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::NoCollections`] for an empty list,
    /// [`StoryError::StartOutOfRange`] for an invalid start index and
    /// [`StoryError::EmptyCollection`] if the start collection has no items.
    pub fn open(
        collections: impl Into<Arc<[Collection]>>,
        initial_collection: usize,
        settings: ViewerSettings,
        clock: C,
        media: M,
        host: H,
    ) -> Result<Self, StoryError> {
        let collections: Arc<[Collection]> = collections.into();
        if collections.is_empty() {
            return Err(StoryError::NoCollections);
        }
        let Some(start) = collections.get(initial_collection) else {
            return Err(StoryError::StartOutOfRange {
                index: initial_collection,
                len: collections.len(),
            });
        };
        let Some(state) = ViewerState::open(&*collections, initial_collection) else {
            return Err(StoryError::EmptyCollection {
                owner: start.owner().handle.clone(),
            });
        };

        let opened_at = clock.now();
        let mut viewer = Self {
            collections,
            state,
            timer: None,
            gestures: GestureTracker::new(settings.gestures),
            settings,
            clock,
            media,
            host,
            opened_at,
            media_status: None,
            seen: HashSet::new(),
            history: CircularBuffer::new(settings.history_capacity),
            close_reason: None,
        };
        info!(
            collections = viewer.collections.len(),
            start = initial_collection,
            "story viewer opened"
        );
        viewer.enter_item(opened_at);
        Ok(viewer)
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Applies one input and performs its side effects.
    pub fn dispatch(&mut self, input: Input) -> Transition {
        let now = self.clock.now();
        let transition = self.state.apply(input, &*self.collections);
        self.state = transition.to;

        if transition.is_noop() {
            return transition;
        }

        debug!(?input, from = ?transition.from, to = ?transition.to, "viewer transition");
        self.history.push(TransitionRecord::new(
            now.saturating_duration_since(self.opened_at),
            input,
            &transition,
        ));

        if let Some(reason) = transition.closed {
            self.shutdown(reason);
        } else if transition.entered {
            self.enter_item(now);
        } else {
            match (transition.from, transition.to) {
                (ViewerState::Playing(_), ViewerState::Paused(_)) => self.suspend(now),
                (ViewerState::Paused(_), ViewerState::Playing(_)) => self.resume(now),
                _ => {}
            }
        }
        transition
    }

    /// Advances time: promotes a long press to a hold and auto-advances once
    /// the active item's timer has elapsed.
    ///
    /// Returns the auto-advance transition, if one happened.
    pub fn tick(&mut self) -> Option<Transition> {
        let now = self.clock.now();
        if let Some(input) = self.gestures.poll(now) {
            self.dispatch_gesture(input);
        }

        let elapsed = self.state.is_playing() && self.timer.is_some_and(|t| t.is_elapsed(now));
        elapsed.then(|| self.dispatch(Input::ItemTimerElapsed))
    }

    pub fn hold_start(&mut self) -> Transition {
        self.dispatch(Input::HoldStart)
    }

    pub fn hold_end(&mut self) -> Transition {
        self.dispatch(Input::HoldEnd)
    }

    /// Toggles the hold, for keyboard control.
    pub fn toggle_hold(&mut self) -> Transition {
        if self.state.is_paused() {
            self.hold_end()
        } else {
            self.hold_start()
        }
    }

    pub fn tap(&mut self, zone: TapZone) -> Transition {
        match zone {
            TapZone::Left => self.dispatch(Input::TapLeftZone),
            TapZone::Right => self.dispatch(Input::TapRightZone),
        }
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Transition {
        self.dispatch(Input::Swipe(direction))
    }

    pub fn jump_to_item(&mut self, item: usize) -> Transition {
        self.dispatch(Input::JumpToItem(item))
    }

    pub fn jump_to_collection(&mut self, collection: usize) -> Transition {
        self.dispatch(Input::JumpToCollection(collection))
    }

    /// Dismisses the viewer.
    pub fn close(&mut self) -> Transition {
        self.dispatch(Input::CloseRequested)
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn pointer_pressed(&mut self, position: Position) {
        if self.state.is_closed() {
            return;
        }
        let now = self.clock.now();
        self.gestures.press(position, now);
    }

    pub fn pointer_moved(&mut self, position: Position) -> Option<Transition> {
        let input = self.gestures.moved(position)?;
        Some(self.dispatch_gesture(input))
    }

    /// Finishes a pointer interaction over an item area `width` wide.
    pub fn pointer_released(&mut self, position: Position, width: f32) -> Vec<Transition> {
        self.gestures
            .release(position, width)
            .into_iter()
            .map(|input| self.dispatch(input))
            .collect()
    }

    /// The pointer left the item area mid-gesture.
    pub fn pointer_cancelled(&mut self) -> Option<Transition> {
        let input = self.gestures.cancel()?;
        Some(self.dispatch(input))
    }

    /// Live horizontal drag offset for rendering.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.gestures.drag_offset()
    }

    // =========================================================================
    // Ancillary actions
    // =========================================================================

    /// Sends a text reply to the owner of the active collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::ViewerClosed`] once closed and
    /// [`StoryError::EmptyReply`] for blank text.
    pub fn send_reply(&mut self, text: &str) -> Result<(), StoryError> {
        let to = self.active_handle()?;
        if text.trim().is_empty() {
            return Err(StoryError::EmptyReply);
        }
        info!(to = %to, chars = text.chars().count(), "reply sent");
        self.host.on_notify(Notice::ReplySent { to });
        Ok(())
    }

    /// Sends a quick reaction to the owner of the active collection.
    ///
    /// # Errors
    ///
    /// Same as [`send_reply`](Self::send_reply).
    pub fn send_reaction(&mut self, reaction: &str) -> Result<(), StoryError> {
        let to = self.active_handle()?;
        let reaction = reaction.trim();
        if reaction.is_empty() {
            return Err(StoryError::EmptyReply);
        }
        info!(to = %to, reaction, "reaction sent");
        self.host.on_notify(Notice::ReactionSent {
            to,
            reaction: reaction.to_string(),
        });
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.state
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Why the viewer closed, once closed.
    #[must_use]
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.state.cursor()
    }

    #[must_use]
    pub fn collections(&self) -> &Arc<[Collection]> {
        &self.collections
    }

    #[must_use]
    pub fn current_collection(&self) -> Option<&Collection> {
        let cursor = self.state.cursor()?;
        self.collections.get(cursor.collection)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        let cursor = self.state.cursor()?;
        self.collections.get(cursor.collection)?.item(cursor.item)
    }

    /// Non-paused elapsed share of the active item in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.timer
            .map_or(0.0, |timer| timer.fraction(self.clock.now()))
    }

    /// Progress segments of the active collection; empty once closed.
    #[must_use]
    pub fn progress(&self) -> Vec<SegmentState> {
        match (self.state.cursor(), self.current_collection()) {
            (Some(cursor), Some(collection)) => {
                segments(collection.len(), cursor.item, self.fraction())
            }
            _ => Vec::new(),
        }
    }

    /// Owners of the previous and next collections, for peek avatars.
    #[must_use]
    pub fn neighbors(&self) -> Neighbors<'_> {
        let Some(cursor) = self.state.cursor() else {
            return Neighbors::default();
        };
        Neighbors {
            previous: cursor
                .collection
                .checked_sub(1)
                .and_then(|i| self.collections.get(i))
                .map(Collection::owner),
            next: self
                .collections
                .get(cursor.collection + 1)
                .map(Collection::owner),
        }
    }

    #[must_use]
    pub fn media_status(&self) -> Option<&MediaStatus> {
        self.media_status.as_ref()
    }

    /// Every item entered during this session.
    #[must_use]
    pub fn seen_items(&self) -> &HashSet<MediaId> {
        &self.seen
    }

    /// Returns true if every item of the collection was entered.
    #[must_use]
    pub fn is_fully_seen(&self, collection: usize) -> bool {
        self.collections
            .get(collection)
            .is_some_and(|c| c.items().iter().all(|item| self.seen.contains(&item.id)))
    }

    /// Applied transitions, oldest first.
    #[must_use]
    pub fn history(&self) -> &CircularBuffer<TransitionRecord> {
        &self.history
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Dispatches a pointer input. A hold that starts while already paused
    /// (for example from the keyboard) leaves that pause in place on release.
    fn dispatch_gesture(&mut self, input: Input) -> Transition {
        let transition = self.dispatch(input);
        if input == Input::HoldStart && transition.is_noop() {
            self.gestures.yield_pause();
        }
        transition
    }

    fn active_handle(&self) -> Result<String, StoryError> {
        self.current_collection()
            .map(|collection| collection.owner().handle.clone())
            .ok_or(StoryError::ViewerClosed)
    }

    /// Loads and starts the active item with fresh progress.
    fn enter_item(&mut self, now: Instant) {
        let collections = Arc::clone(&self.collections);
        let Some(cursor) = self.state.cursor() else {
            return;
        };
        let Some(item) = collections
            .get(cursor.collection)
            .and_then(|c| c.item(cursor.item))
        else {
            return;
        };

        self.media.stop();
        let reported_length = match self.media.load(item) {
            Ok(info) => {
                self.media_status = Some(MediaStatus::Ready(info));
                info.natural_length
            }
            Err(error) => {
                warn!(item = %item.id, %error, "media unavailable");
                self.host.on_notify(Notice::MediaUnavailable {
                    item: item.id.clone(),
                    error: error.clone(),
                });
                self.media_status = Some(MediaStatus::Failed(error));
                None
            }
        };

        let duration = item.playback_duration(
            reported_length,
            self.settings.image_duration,
            self.settings.use_video_length,
        );
        let mut timer = ItemTimer::new(duration);
        timer.start(now);
        self.timer = Some(timer);

        if self.media_ready() {
            self.media.play();
        }
        self.seen.insert(item.id.clone());
    }

    fn suspend(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.pause(now);
        }
        if self.media_ready() {
            self.media.pause();
        }
    }

    fn resume(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.start(now);
        }
        if self.media_ready() {
            self.media.play();
        }
    }

    fn shutdown(&mut self, reason: CloseReason) {
        self.timer = None;
        self.gestures.cancel();
        self.media.stop();
        self.media.release();
        if self.close_reason.is_none() {
            self.close_reason = Some(reason);
            info!(?reason, seen = self.seen.len(), "story viewer closed");
            self.host.on_close(reason);
        }
    }

    fn media_ready(&self) -> bool {
        self.media_status.as_ref().is_some_and(MediaStatus::is_ready)
    }
}

impl<C, M, H> Drop for StoryViewer<C, M, H>
where
    C: Clock,
    M: MediaController,
    H: ViewerHost,
{
    fn drop(&mut self) {
        if self.close_reason.is_none() {
            self.media.stop();
            self.media.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::testing::{FakeClock, MediaCall, RecordingHost, RecordingMedia};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    type TestViewer = StoryViewer<FakeClock, RecordingMedia, RecordingHost>;

    fn collection(owner: &str, items: usize) -> Collection {
        let items = (0..items)
            .map(|i| MediaItem::image(format!("{owner}-{i}"), format!("{owner}/{i}.jpg")))
            .collect();
        Collection::new(Owner::new(owner, owner, owner), items).expect("non-empty")
    }

    fn open(layout: &[usize], start: usize) -> (TestViewer, FakeClock, RecordingMedia, RecordingHost) {
        let collections: Vec<_> = layout
            .iter()
            .enumerate()
            .map(|(i, n)| collection(&format!("u{i}"), *n))
            .collect();
        let clock = FakeClock::new();
        let media = RecordingMedia::new();
        let host = RecordingHost::new();
        let viewer = StoryViewer::open(
            collections,
            start,
            ViewerSettings::default(),
            clock.clone(),
            media.clone(),
            host.clone(),
        )
        .expect("opens");
        (viewer, clock, media, host)
    }

    #[test]
    fn open_rejects_invalid_input() {
        let result = StoryViewer::open(
            Vec::<Collection>::new(),
            0,
            ViewerSettings::default(),
            FakeClock::new(),
            RecordingMedia::new(),
            RecordingHost::new(),
        );
        assert!(matches!(result, Err(StoryError::NoCollections)));

        let result = StoryViewer::open(
            vec![collection("a", 1)],
            3,
            ViewerSettings::default(),
            FakeClock::new(),
            RecordingMedia::new(),
            RecordingHost::new(),
        );
        assert!(matches!(
            result,
            Err(StoryError::StartOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn open_loads_and_plays_first_item() {
        let (viewer, _, media, _) = open(&[2, 1], 1);
        assert_eq!(viewer.state(), ViewerState::Playing(Cursor::new(1, 0)));
        assert_eq!(
            media.calls(),
            vec![
                MediaCall::Stop,
                MediaCall::Load(MediaId::new("u1-0")),
                MediaCall::Play
            ]
        );
        assert!(viewer.seen_items().contains(&MediaId::new("u1-0")));
    }

    #[test]
    fn tick_advances_after_duration() {
        let (mut viewer, clock, _, _) = open(&[2], 0);
        clock.advance_ms(4_999);
        assert!(viewer.tick().is_none());
        clock.advance_ms(1);
        let transition = viewer.tick().expect("advanced");
        assert_eq!(transition.to, ViewerState::Playing(Cursor::new(0, 1)));
        assert_abs_diff_eq!(viewer.fraction(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn progress_freezes_while_paused() {
        let (mut viewer, clock, media, _) = open(&[1], 0);
        clock.advance_ms(1_000);
        viewer.hold_start();
        let frozen = viewer.fraction();
        clock.advance_ms(10_000);
        assert!(viewer.tick().is_none());
        assert_abs_diff_eq!(viewer.fraction(), frozen, epsilon = F32_EPSILON);
        assert_eq!(media.count(&MediaCall::Pause), 1);

        viewer.hold_end();
        assert_eq!(media.count(&MediaCall::Play), 2);
    }

    #[test]
    fn media_failure_notifies_and_still_advances() {
        let collections = vec![collection("a", 2)];
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

        assert!(matches!(viewer.media_status(), Some(MediaStatus::Failed(_))));
        assert_eq!(host.notices().len(), 1);
        assert_eq!(media.count(&MediaCall::Play), 0);

        clock.advance_ms(5_000);
        viewer.tick();
        assert_eq!(viewer.cursor(), Some(Cursor::new(0, 1)));
        assert!(matches!(viewer.media_status(), Some(MediaStatus::Ready(_))));
    }

    #[test]
    fn close_releases_media_and_notifies_once() {
        let (mut viewer, _, media, host) = open(&[1], 0);
        viewer.close();
        viewer.close();
        viewer.tap(TapZone::Right);

        assert_eq!(host.closes(), vec![CloseReason::Dismissed]);
        assert_eq!(media.count(&MediaCall::Release), 1);
        assert!(viewer.progress().is_empty());
        drop(viewer);
        assert_eq!(media.count(&MediaCall::Release), 1);
    }

    #[test]
    fn dropping_open_viewer_releases_media() {
        let (viewer, _, media, host) = open(&[1], 0);
        drop(viewer);
        assert_eq!(media.count(&MediaCall::Release), 1);
        assert!(host.closes().is_empty());
    }

    #[test]
    fn reply_requires_text_and_open_viewer() {
        let (mut viewer, _, _, host) = open(&[1], 0);
        assert_eq!(viewer.send_reply("   "), Err(StoryError::EmptyReply));
        assert_eq!(viewer.send_reply("nice!"), Ok(()));
        assert_eq!(
            host.notices(),
            vec![Notice::ReplySent {
                to: "u0".to_string()
            }]
        );

        viewer.close();
        assert_eq!(viewer.send_reply("late"), Err(StoryError::ViewerClosed));
        assert_eq!(viewer.send_reaction("🔥"), Err(StoryError::ViewerClosed));
    }

    #[test]
    fn neighbors_report_adjacent_owners() {
        let (viewer, _, _, _) = open(&[1, 1, 1], 1);
        let neighbors = viewer.neighbors();
        assert_eq!(neighbors.previous.map(|o| o.handle.as_str()), Some("u0"));
        assert_eq!(neighbors.next.map(|o| o.handle.as_str()), Some("u2"));
    }

    #[test]
    fn history_records_only_effective_transitions() {
        let (mut viewer, _, _, _) = open(&[2], 0);
        viewer.tap(TapZone::Left);
        viewer.tap(TapZone::Right);
        assert_eq!(viewer.history().len(), 1);
    }

    #[test]
    fn fully_seen_after_visiting_every_item() {
        let (mut viewer, _, _, _) = open(&[2, 1], 0);
        assert!(!viewer.is_fully_seen(0));
        viewer.tap(TapZone::Right);
        assert!(viewer.is_fully_seen(0));
        assert!(!viewer.is_fully_seen(1));
    }

    #[test]
    fn drag_after_keyboard_pause_keeps_playback_paused() {
        let (mut viewer, clock, _media, _host) = open(&[2], 0);
        viewer.toggle_hold();
        assert!(viewer.state().is_paused());

        viewer.pointer_pressed(Position::new(200.0, 300.0));
        let started = viewer.pointer_moved(Position::new(170.0, 300.0));
        assert!(started.is_some_and(|t| t.is_noop()));
        let released = viewer.pointer_released(Position::new(170.0, 300.0), 360.0);

        assert!(released.is_empty());
        assert!(viewer.state().is_paused());
        clock.advance_ms(10_000);
        assert!(viewer.tick().is_none());
    }

    #[test]
    fn drag_from_playing_resumes_on_release() {
        let (mut viewer, _clock, _media, _host) = open(&[2], 0);

        viewer.pointer_pressed(Position::new(200.0, 300.0));
        viewer.pointer_moved(Position::new(170.0, 300.0));
        assert!(viewer.state().is_paused());
        viewer.pointer_released(Position::new(170.0, 300.0), 360.0);

        assert!(viewer.state().is_playing());
    }
}
