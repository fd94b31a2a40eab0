// SPDX-License-Identifier: MPL-2.0
//! Serializable records of viewer transitions.
//!
//! Domain types stay free of serde; these records mirror them for export.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::viewer::{CloseReason, Input, SwipeDirection, Transition, ViewerState};

/// Recorded viewer input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum InputRecord {
    ItemTimerElapsed,
    HoldStart,
    HoldEnd,
    TapLeftZone,
    TapRightZone,
    SwipeLeft,
    SwipeRight,
    JumpToItem { index: usize },
    JumpToCollection { index: usize },
    CloseRequested,
}

impl From<Input> for InputRecord {
    fn from(input: Input) -> Self {
        match input {
            Input::ItemTimerElapsed => Self::ItemTimerElapsed,
            Input::HoldStart => Self::HoldStart,
            Input::HoldEnd => Self::HoldEnd,
            Input::TapLeftZone => Self::TapLeftZone,
            Input::TapRightZone => Self::TapRightZone,
            Input::Swipe(SwipeDirection::Left) => Self::SwipeLeft,
            Input::Swipe(SwipeDirection::Right) => Self::SwipeRight,
            Input::JumpToItem(index) => Self::JumpToItem { index },
            Input::JumpToCollection(index) => Self::JumpToCollection { index },
            Input::CloseRequested => Self::CloseRequested,
        }
    }
}

/// Recorded viewer state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StateSnapshot {
    Playing { collection: usize, item: usize },
    Paused { collection: usize, item: usize },
    Closed,
}

impl From<ViewerState> for StateSnapshot {
    fn from(state: ViewerState) -> Self {
        match state {
            ViewerState::Playing(c) => Self::Playing {
                collection: c.collection,
                item: c.item,
            },
            ViewerState::Paused(c) => Self::Paused {
                collection: c.collection,
                item: c.item,
            },
            ViewerState::Closed => Self::Closed,
        }
    }
}

/// Recorded close reason.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloseRecord {
    Exhausted,
    Dismissed,
}

impl From<CloseReason> for CloseRecord {
    fn from(reason: CloseReason) -> Self {
        match reason {
            CloseReason::Exhausted => Self::Exhausted,
            CloseReason::Dismissed => Self::Dismissed,
        }
    }
}

/// One applied input and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Milliseconds since the viewer opened.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub input: InputRecord,
    pub from: StateSnapshot,
    pub to: StateSnapshot,
    /// True when an item was (re)entered.
    pub entered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<CloseRecord>,
}

impl TransitionRecord {
    #[must_use]
    pub fn new(offset: Duration, input: Input, transition: &Transition) -> Self {
        Self {
            offset_ms: u64::try_from(offset.as_millis()).unwrap_or(u64::MAX),
            input: input.into(),
            from: transition.from.into(),
            to: transition.to.into(),
            entered: transition.entered,
            closed: transition.closed.map(Into::into),
        }
    }
}
