// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition.
//!
//! Turns raw pointer press / move / release events into viewer inputs:
//! press-and-hold pauses, a horizontal drag past the threshold swipes between
//! collections, and a short press is a tap on the left or right zone.

use crate::domain::story::{HoldDelay, SwipeThreshold, TapZone, TapZoneSplit};
use crate::domain::viewer::{Input, SwipeDirection};
use std::time::Instant;

/// Movement below this distance (logical pixels) still counts as a tap.
pub const DEFAULT_DRAG_SLOP_PX: f32 = 8.0;

/// Pointer position relative to the item area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tunables for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub hold_delay: HoldDelay,
    pub swipe_threshold: SwipeThreshold,
    pub tap_split: TapZoneSplit,
    pub drag_slop: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            hold_delay: HoldDelay::default(),
            swipe_threshold: SwipeThreshold::default(),
            tap_split: TapZoneSplit::default(),
            drag_slop: DEFAULT_DRAG_SLOP_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    origin: Position,
    at: Instant,
}

/// Tracks one pointer interaction at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    settings: GestureSettings,
    press: Option<Press>,
    current: Option<Position>,
    dragging: bool,
    holding: bool,
    /// The hold paused playback itself and must resume it on release.
    owns_pause: bool,
}

impl GestureTracker {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            press: None,
            current: None,
            dragging: false,
            holding: false,
            owns_pause: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Returns true while a pointer is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Returns true once the press turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns true once the press paused playback.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Live horizontal drag offset, zero when not dragging.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        if !self.dragging {
            return 0.0;
        }
        match (self.press, self.current) {
            (Some(press), Some(current)) => current.x - press.origin.x,
            _ => 0.0,
        }
    }

    /// Starts tracking a press.
    pub fn press(&mut self, position: Position, now: Instant) {
        self.press = Some(Press {
            origin: position,
            at: now,
        });
        self.current = Some(position);
        self.dragging = false;
        self.holding = false;
        self.owns_pause = false;
    }

    /// Updates the pointer position.
    ///
    /// Returns [`Input::HoldStart`] when the press first turns into a drag, so
    /// the item does not advance underneath the finger.
    pub fn moved(&mut self, position: Position) -> Option<Input> {
        let press = self.press?;
        self.current = Some(position);

        if !self.dragging {
            let dx = position.x - press.origin.x;
            let dy = position.y - press.origin.y;
            if dx.hypot(dy) > self.settings.drag_slop {
                self.dragging = true;
            }
        }

        if self.dragging && !self.holding {
            self.holding = true;
            self.owns_pause = true;
            return Some(Input::HoldStart);
        }
        None
    }

    /// Checks whether a still press has lasted long enough to become a hold.
    pub fn poll(&mut self, now: Instant) -> Option<Input> {
        let press = self.press?;
        if self.holding {
            return None;
        }
        if now.saturating_duration_since(press.at) >= self.settings.hold_delay.as_duration() {
            self.holding = true;
            self.owns_pause = true;
            return Some(Input::HoldStart);
        }
        None
    }

    /// Marks the current hold as not owning the pause.
    ///
    /// Called when the hold began while playback was already paused by other
    /// means; releasing then leaves playback paused.
    pub fn yield_pause(&mut self) {
        self.owns_pause = false;
    }

    /// Finishes the interaction and classifies it.
    ///
    /// `width` is the width of the item area, used for tap zones. A drag
    /// released below the swipe threshold yields no navigation input; the
    /// view snaps back because [`drag_offset`](Self::drag_offset) returns to
    /// zero.
    pub fn release(&mut self, position: Position, width: f32) -> Vec<Input> {
        let Some(press) = self.press.take() else {
            return Vec::new();
        };
        let was_dragging = self.dragging || {
            let dx = position.x - press.origin.x;
            let dy = position.y - press.origin.y;
            dx.hypot(dy) > self.settings.drag_slop
        };
        let was_holding = self.holding;
        let owned_pause = self.owns_pause;
        self.reset();

        let mut inputs = Vec::with_capacity(2);
        if was_holding && owned_pause {
            inputs.push(Input::HoldEnd);
        }

        let dx = position.x - press.origin.x;
        if was_dragging {
            if self.settings.swipe_threshold.is_reached_by(dx) {
                let direction = if dx < 0.0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                };
                inputs.push(Input::Swipe(direction));
            }
        } else if !was_holding {
            let input = match self.settings.tap_split.classify(position.x, width) {
                TapZone::Left => Input::TapLeftZone,
                TapZone::Right => Input::TapRightZone,
            };
            inputs.push(input);
        }
        inputs
    }

    /// Abandons the interaction (pointer left the area).
    ///
    /// Returns [`Input::HoldEnd`] if the press had paused playback.
    pub fn cancel(&mut self) -> Option<Input> {
        let was_holding = self.holding && self.owns_pause && self.press.is_some();
        self.reset();
        was_holding.then_some(Input::HoldEnd)
    }

    fn reset(&mut self) {
        self.press = None;
        self.current = None;
        self.dragging = false;
        self.holding = false;
        self.owns_pause = false;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}
