// SPDX-License-Identifier: MPL-2.0
//! Host port definition.
//!
//! The host is whatever opened the viewer. It is told exactly once that the
//! viewer closed and receives fire-and-forget notices for ancillary actions.

use crate::domain::error::MediaError;
use crate::domain::story::MediaId;
use crate::domain::viewer::CloseReason;

/// Ancillary event the host may want to surface (e.g. as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A reply to the active item was sent.
    ReplySent { to: String },
    /// A quick reaction to the active item was sent.
    ReactionSent { to: String, reaction: String },
    /// The active item's media could not be shown.
    MediaUnavailable { item: MediaId, error: MediaError },
}

impl Notice {
    /// Returns the i18n key for the notice text.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::ReplySent { .. } => "notification-reply-sent",
            Notice::ReactionSent { .. } => "notification-reaction-sent",
            Notice::MediaUnavailable { .. } => "notification-media-unavailable",
        }
    }

    /// Returns the interpolation arguments for the notice text.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Notice::ReplySent { to } => vec![("handle", to.clone())],
            Notice::ReactionSent { to, reaction } => {
                vec![("handle", to.clone()), ("reaction", reaction.clone())]
            }
            Notice::MediaUnavailable { item, .. } => vec![("item", item.to_string())],
        }
    }
}

/// Port through which the viewer talks back to its host.
pub trait ViewerHost {
    /// Called exactly once, when the viewer transitions to closed.
    fn on_close(&mut self, reason: CloseReason);

    /// Called for ancillary notices. Fire-and-forget.
    fn on_notify(&mut self, _notice: Notice) {}
}

/// Host adapter over a close callback and an optional notify callback.
pub struct CallbackHost<F, G = fn(Notice)>
where
    F: FnOnce(CloseReason),
    G: FnMut(Notice),
{
    on_close: Option<F>,
    on_notify: Option<G>,
}

impl<F> CallbackHost<F>
where
    F: FnOnce(CloseReason),
{
    /// Creates a host with only a close callback.
    pub fn new(on_close: F) -> Self {
        Self {
            on_close: Some(on_close),
            on_notify: None,
        }
    }
}

impl<F, G> CallbackHost<F, G>
where
    F: FnOnce(CloseReason),
    G: FnMut(Notice),
{
    /// Creates a host with both callbacks.
    pub fn with_notify(on_close: F, on_notify: G) -> Self {
        Self {
            on_close: Some(on_close),
            on_notify: Some(on_notify),
        }
    }
}

impl<F, G> ViewerHost for CallbackHost<F, G>
where
    F: FnOnce(CloseReason),
    G: FnMut(Notice),
{
    fn on_close(&mut self, reason: CloseReason) {
        if let Some(callback) = self.on_close.take() {
            callback(reason);
        }
    }

    fn on_notify(&mut self, notice: Notice) {
        if let Some(callback) = self.on_notify.as_mut() {
            callback(notice);
        }
    }
}

/// Event buffered by [`HostQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Closed(CloseReason),
    Notice(Notice),
}

/// Host that buffers events until the owner drains them.
///
/// Fits message-driven shells that cannot hand out callbacks.
#[derive(Debug, Default)]
pub struct HostQueue {
    events: Vec<HostEvent>,
}

impl HostQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every buffered event in arrival order.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ViewerHost for HostQueue {
    fn on_close(&mut self, reason: CloseReason) {
        self.events.push(HostEvent::Closed(reason));
    }

    fn on_notify(&mut self, notice: Notice) {
        self.events.push(HostEvent::Notice(notice));
    }
}
