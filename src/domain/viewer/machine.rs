// SPDX-License-Identifier: MPL-2.0
//! Story viewer state machine.
//!
//! Manages which item of which collection is on screen:
//! - Playing: the active item is shown and its timer runs
//! - Paused: the active item is held, its timer is frozen
//! - Closed: the viewer is done, every input is ignored
//!
//! Transitions are pure: [`ViewerState::apply`] takes the current state, an
//! [`Input`] and the shape of the collections, and returns a [`Transition`]
//! describing where the machine ended up. Timers and media live in the
//! application layer.

use crate::domain::story::Collection;

/// Position of the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Index into the list of collections.
    pub collection: usize,
    /// Index into the active collection's items.
    pub item: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(collection: usize, item: usize) -> Self {
        Self { collection, item }
    }
}

/// Shape of the collection list, as far as navigation is concerned.
///
/// Implemented for collection slices and for plain slices of item counts.
pub trait StoryLayout {
    /// Number of collections.
    fn collection_count(&self) -> usize;

    /// Number of items in the given collection, zero if out of range.
    fn item_count(&self, collection: usize) -> usize;
}

impl StoryLayout for [Collection] {
    fn collection_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, collection: usize) -> usize {
        self.get(collection).map_or(0, Collection::len)
    }
}

impl StoryLayout for [usize] {
    fn collection_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, collection: usize) -> usize {
        self.get(collection).copied().unwrap_or(0)
    }
}

/// Direction of a completed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger/pointer moved left: go to the next collection.
    Left,
    /// Finger/pointer moved right: go back to the previous collection.
    Right,
}

/// Why the viewer closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Navigation ran past the last item of the last collection.
    Exhausted,
    /// The user dismissed the viewer.
    Dismissed,
}

/// Everything that can drive the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The active item's display time has fully elapsed.
    ItemTimerElapsed,
    /// A press-and-hold started.
    HoldStart,
    /// A press-and-hold ended.
    HoldEnd,
    /// Tap on the "back" zone.
    TapLeftZone,
    /// Tap on the "forward" zone.
    TapRightZone,
    /// A horizontal drag released past the swipe threshold.
    Swipe(SwipeDirection),
    /// Jump to an item of the active collection.
    JumpToItem(usize),
    /// Jump to the first item of another collection.
    JumpToCollection(usize),
    /// Explicit close (close button, background tap, Escape).
    CloseRequested,
}

/// Viewer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Playing(Cursor),
    Paused(Cursor),
    Closed,
}

/// Result of applying an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewerState,
    pub to: ViewerState,
    /// True when an item was (re)entered and its progress must restart.
    pub entered: bool,
    /// Set when this transition closed the viewer.
    pub closed: Option<CloseReason>,
}

impl Transition {
    fn stay(state: ViewerState) -> Self {
        Self {
            from: state,
            to: state,
            entered: false,
            closed: None,
        }
    }

    fn enter(from: ViewerState, cursor: Cursor) -> Self {
        Self {
            from,
            to: ViewerState::Playing(cursor),
            entered: true,
            closed: None,
        }
    }

    fn close(from: ViewerState, reason: CloseReason) -> Self {
        Self {
            from,
            to: ViewerState::Closed,
            entered: false,
            closed: Some(reason),
        }
    }

    fn hold(from: ViewerState, to: ViewerState) -> Self {
        Self {
            from,
            to,
            entered: false,
            closed: None,
        }
    }

    /// Returns true if the state did not change and no item was re-entered.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to && !self.entered
    }
}

impl ViewerState {
    /// Opens the viewer on the first item of `collection`.
    ///
    /// Returns `None` when the index is out of range or the collection is
    /// empty; the viewer must not open in that case.
    #[must_use]
    pub fn open<L: StoryLayout + ?Sized>(layout: &L, collection: usize) -> Option<Self> {
        if collection < layout.collection_count() && layout.item_count(collection) > 0 {
            Some(Self::Playing(Cursor::new(collection, 0)))
        } else {
            None
        }
    }

    /// Returns the active cursor, or `None` once closed.
    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        match self {
            Self::Playing(cursor) | Self::Paused(cursor) => Some(*cursor),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Applies an input and returns the resulting transition.
    #[must_use]
    pub fn apply<L: StoryLayout + ?Sized>(self, input: Input, layout: &L) -> Transition {
        let Some(cursor) = self.cursor() else {
            return Transition::stay(self);
        };

        match input {
            Input::ItemTimerElapsed => {
                if self.is_playing() {
                    advance(self, cursor, layout)
                } else {
                    Transition::stay(self)
                }
            }
            Input::HoldStart => match self {
                Self::Playing(c) => Transition::hold(self, Self::Paused(c)),
                _ => Transition::stay(self),
            },
            Input::HoldEnd => match self {
                Self::Paused(c) => Transition::hold(self, Self::Playing(c)),
                _ => Transition::stay(self),
            },
            Input::TapRightZone => advance(self, cursor, layout),
            Input::TapLeftZone => retreat(self, cursor, layout),
            Input::Swipe(SwipeDirection::Left) => {
                let next = cursor.collection + 1;
                if next < layout.collection_count() {
                    Transition::enter(self, Cursor::new(next, 0))
                } else {
                    Transition::close(self, CloseReason::Exhausted)
                }
            }
            Input::Swipe(SwipeDirection::Right) => {
                if cursor.collection > 0 {
                    Transition::enter(self, Cursor::new(cursor.collection - 1, 0))
                } else {
                    Transition::stay(self)
                }
            }
            Input::JumpToItem(item) => {
                if item < layout.item_count(cursor.collection) {
                    Transition::enter(self, Cursor::new(cursor.collection, item))
                } else {
                    Transition::stay(self)
                }
            }
            Input::JumpToCollection(collection) => {
                if collection < layout.collection_count() && layout.item_count(collection) > 0 {
                    Transition::enter(self, Cursor::new(collection, 0))
                } else {
                    Transition::stay(self)
                }
            }
            Input::CloseRequested => Transition::close(self, CloseReason::Dismissed),
        }
    }
}

/// Next item, rolling over into the next collection or closing.
fn advance<L: StoryLayout + ?Sized>(from: ViewerState, cursor: Cursor, layout: &L) -> Transition {
    if cursor.item + 1 < layout.item_count(cursor.collection) {
        return Transition::enter(from, Cursor::new(cursor.collection, cursor.item + 1));
    }
    let next = cursor.collection + 1;
    if next < layout.collection_count() && layout.item_count(next) > 0 {
        Transition::enter(from, Cursor::new(next, 0))
    } else {
        Transition::close(from, CloseReason::Exhausted)
    }
}

/// Previous item, rolling back into the previous collection's last item.
fn retreat<L: StoryLayout + ?Sized>(from: ViewerState, cursor: Cursor, layout: &L) -> Transition {
    if cursor.item > 0 {
        return Transition::enter(from, Cursor::new(cursor.collection, cursor.item - 1));
    }
    if cursor.collection == 0 {
        return Transition::stay(from);
    }
    let previous = cursor.collection - 1;
    match layout.item_count(previous) {
        0 => Transition::stay(from),
        count => Transition::enter(from, Cursor::new(previous, count - 1)),
    }
}
