// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed to the viewer only while it is open and only
//! when no widget (e.g. the reply box) captured the key. Cursor movement is
//! always forwarded so drags can be measured in window coordinates.

use super::{Message, Screen};
use crate::config::VIEWER_TICK_MS;
use crate::domain::viewer::SwipeDirection;
use crate::ui::story_viewer;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, Event, Subscription};
use std::time::Duration;

/// Toast auto-dismiss polling interval.
const NOTIFICATION_TICK_MS: u64 = 100;

/// Maps a key to a viewer action.
#[must_use]
pub fn viewer_shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<story_viewer::Message> {
    use story_viewer::Message as M;

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(M::Close),
        Key::Named(Named::Space) => Some(M::TogglePause),
        Key::Named(Named::ArrowLeft) if modifiers.shift() => {
            Some(M::Swipe(SwipeDirection::Right))
        }
        Key::Named(Named::ArrowRight) if modifiers.shift() => {
            Some(M::Swipe(SwipeDirection::Left))
        }
        Key::Named(Named::ArrowLeft) => Some(M::TapBack),
        Key::Named(Named::ArrowRight) => Some(M::TapForward),
        Key::Named(Named::PageUp) => Some(M::Swipe(SwipeDirection::Right)),
        Key::Named(Named::PageDown) => Some(M::Swipe(SwipeDirection::Left)),
        Key::Character(c) => c
            .parse::<usize>()
            .ok()
            .filter(|digit| (1..=9).contains(digit))
            .map(|digit| M::SelectItem(digit - 1)),
        _ => None,
    }
}

/// Maps a window event to a viewer message.
#[must_use]
pub fn viewer_event(event: &Event, status: event::Status) -> Option<story_viewer::Message> {
    if let Event::Mouse(mouse::Event::CursorMoved { position }) = event {
        return Some(story_viewer::Message::CursorMoved(*position));
    }
    if matches!(status, event::Status::Captured) {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            viewer_shortcut(key, *modifiers)
        }
        _ => None,
    }
}

/// Routes window events for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, _window_id| {
            viewer_event(&event, status).map(Message::Viewer)
        }),
        Screen::Tray => Subscription::none(),
    }
}

/// Frame tick driving progress and auto-advance while the viewer is open.
pub fn create_viewer_tick_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Viewer {
        time::every(Duration::from_millis(VIEWER_TICK_MS))
            .map(|_| Message::Viewer(story_viewer::Message::Tick))
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_viewer::Message as M;

    fn shortcut(key: Key) -> Option<M> {
        viewer_shortcut(&key, keyboard::Modifiers::empty())
    }

    #[test]
    fn escape_closes_and_space_pauses() {
        assert!(matches!(shortcut(Key::Named(Named::Escape)), Some(M::Close)));
        assert!(matches!(
            shortcut(Key::Named(Named::Space)),
            Some(M::TogglePause)
        ));
    }

    #[test]
    fn arrows_tap_and_shift_arrows_swipe() {
        assert!(matches!(shortcut(Key::Named(Named::ArrowRight)), Some(M::TapForward)));
        assert!(matches!(
            viewer_shortcut(&Key::Named(Named::ArrowRight), keyboard::Modifiers::SHIFT),
            Some(M::Swipe(SwipeDirection::Left))
        ));
    }

    #[test]
    fn digits_select_items() {
        assert!(matches!(
            shortcut(Key::Character("3".into())),
            Some(M::SelectItem(2))
        ));
        assert!(shortcut(Key::Character("0".into())).is_none());
        assert!(shortcut(Key::Character("x".into())).is_none());
    }

    #[test]
    fn cursor_moves_are_forwarded_even_when_captured() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(12.0, 34.0),
        });
        assert!(matches!(
            viewer_event(&event, event::Status::Captured),
            Some(M::CursorMoved(p)) if p == iced::Point::new(12.0, 34.0)
        ));
    }

    #[test]
    fn captured_keys_are_ignored() {
        let event = Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            modified_key: Key::Named(Named::Escape),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::empty(),
            text: None,
            repeat: false,
        });
        assert!(viewer_event(&event, event::Status::Captured).is_none());
        assert!(matches!(
            viewer_event(&event, event::Status::Ignored),
            Some(M::Close)
        ));
    }
}
