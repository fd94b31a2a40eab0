// SPDX-License-Identifier: MPL-2.0
//! Fake port implementations for tests and benchmarks.
//!
//! Each fake shares its recorded state through `Rc` handles so a test can keep
//! a handle after moving the fake into a viewer.

use super::clock::Clock;
use super::host::{HostEvent, Notice, ViewerHost};
use super::media::{MediaController, MediaInfo};
use crate::domain::error::MediaError;
use crate::domain::story::{MediaId, MediaItem};
use crate::domain::viewer::CloseReason;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// FakeClock
// =============================================================================

/// Manually advanced clock.
#[derive(Debug, Clone)]
pub struct FakeClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl FakeClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Moves time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

// =============================================================================
// RecordingMedia
// =============================================================================

/// A command received by [`RecordingMedia`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCall {
    Load(MediaId),
    Play,
    Pause,
    Stop,
    Release,
}

#[derive(Debug, Default)]
struct MediaScript {
    calls: Vec<MediaCall>,
    failing: HashSet<MediaId>,
    lengths: HashMap<MediaId, Duration>,
}

/// Media controller that records every command.
#[derive(Debug, Clone, Default)]
pub struct RecordingMedia {
    script: Rc<RefCell<MediaScript>>,
}

impl RecordingMedia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes loading the given item fail with [`MediaError::NotFound`].
    pub fn fail_on(&self, id: &str) {
        self.script.borrow_mut().failing.insert(MediaId::new(id));
    }

    /// Makes loading the given item report a natural length.
    pub fn report_length(&self, id: &str, length: Duration) {
        self.script
            .borrow_mut()
            .lengths
            .insert(MediaId::new(id), length);
    }

    /// Every command received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<MediaCall> {
        self.script.borrow().calls.clone()
    }

    /// Number of times `call` was received.
    #[must_use]
    pub fn count(&self, call: &MediaCall) -> usize {
        self.script
            .borrow()
            .calls
            .iter()
            .filter(|c| *c == call)
            .count()
    }

    fn record(&self, call: MediaCall) {
        self.script.borrow_mut().calls.push(call);
    }
}

impl MediaController for RecordingMedia {
    fn load(&mut self, item: &MediaItem) -> Result<MediaInfo, MediaError> {
        self.record(MediaCall::Load(item.id.clone()));
        let script = self.script.borrow();
        if script.failing.contains(&item.id) {
            return Err(MediaError::NotFound(item.source.to_string()));
        }
        Ok(MediaInfo {
            natural_length: script.lengths.get(&item.id).copied(),
        })
    }

    fn play(&mut self) {
        self.record(MediaCall::Play);
    }

    fn pause(&mut self) {
        self.record(MediaCall::Pause);
    }

    fn stop(&mut self) {
        self.record(MediaCall::Stop);
    }

    fn release(&mut self) {
        self.record(MediaCall::Release);
    }
}

// =============================================================================
// RecordingHost
// =============================================================================

/// Host that records every callback.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    /// Every close reason received, in order.
    #[must_use]
    pub fn closes(&self) -> Vec<CloseReason> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Closed(reason) => Some(*reason),
                HostEvent::Notice(_) => None,
            })
            .collect()
    }

    /// Every notice received, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Notice(notice) => Some(notice.clone()),
                HostEvent::Closed(_) => None,
            })
            .collect()
    }
}

impl ViewerHost for RecordingHost {
    fn on_close(&mut self, reason: CloseReason) {
        self.events.borrow_mut().push(HostEvent::Closed(reason));
    }

    fn on_notify(&mut self, notice: Notice) {
        self.events.borrow_mut().push(HostEvent::Notice(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_clock_advances_shared_offset() {
        let clock = FakeClock::new();
        let handle = clock.clone();
        let start = clock.now();
        handle.advance_ms(1_500);
        assert_eq!(clock.now() - start, Duration::from_millis(1_500));
        assert_eq!(clock.elapsed(), Duration::from_millis(1_500));
    }

    #[test]
    fn recording_media_fails_on_request() {
        let media = RecordingMedia::new();
        media.fail_on("b");
        let mut controller = media.clone();

        assert!(controller.load(&MediaItem::image("a", "a.jpg")).is_ok());
        assert!(controller.load(&MediaItem::image("b", "b.jpg")).is_err());
        assert_eq!(media.count(&MediaCall::Load(MediaId::new("b"))), 1);
    }

    #[test]
    fn recording_media_reports_lengths() {
        let media = RecordingMedia::new();
        media.report_length("v", Duration::from_secs(9));
        let mut controller = media.clone();
        let info = controller
            .load(&MediaItem::video("v", "v.mp4", None))
            .expect("loads");
        assert_eq!(info.natural_length, Some(Duration::from_secs(9)));
    }
}
