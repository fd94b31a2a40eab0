// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Screen};
use crate::application::port::{HostEvent, SystemClock};
use crate::config::{self, Config};
use crate::diagnostics;
use crate::domain::story::Collection;
use crate::domain::viewer::CloseReason;
use crate::ui::notifications::{self, Notification};
use crate::ui::story_tray;
use crate::ui::story_viewer::{self, Effect};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
    pub collections: &'a mut Vec<Collection>,
    pub viewer: &'a mut Option<story_viewer::State>,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
    pub history_dir: Option<&'a Path>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Tray(message) => handle_tray_message(ctx, message),
        Message::Viewer(message) => handle_viewer_message(ctx, message),
        Message::Notification(message) => ctx.notifications.handle_message(&message),
        Message::Tick(_) => ctx.notifications.tick(),
    }
    Task::none()
}

fn handle_tray_message(ctx: &mut UpdateContext<'_>, message: story_tray::Message) {
    match message {
        story_tray::Message::Open(index) => open_viewer(ctx, index),
        story_tray::Message::ToggleTheme => {
            let next = next_theme_mode(*ctx.theme_mode);
            *ctx.theme_mode = next;
            ctx.config.general.theme_mode = next;
            if let Err(error) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
                tracing::warn!(%error, "could not save settings");
                ctx.notifications
                    .push(Notification::warning("notification-config-save-error"));
            }
        }
    }
}

/// Opens the viewer on `index`, surfacing open errors as a toast.
pub fn open_viewer(ctx: &mut UpdateContext<'_>, index: usize) {
    if ctx.viewer.is_some() {
        return;
    }
    let collections = ctx.collections.clone();
    match story_viewer::State::open(
        collections,
        index,
        ctx.config.viewer_settings(),
        SystemClock,
    ) {
        Ok(mut state) => {
            let effect = state.drain_effect();
            *ctx.viewer = Some(state);
            *ctx.screen = Screen::Viewer;
            apply_viewer_effect(ctx, effect);
        }
        Err(error) => {
            tracing::warn!(%error, index, "could not open story viewer");
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
}

fn handle_viewer_message(ctx: &mut UpdateContext<'_>, message: story_viewer::Message) {
    let Some(state) = ctx.viewer.as_mut() else {
        return;
    };
    let effect = state.update(message);
    apply_viewer_effect(ctx, effect);
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Rejected(error) => {
            ctx.notifications.push(Notification::info(error.i18n_key()));
        }
        Effect::Events(events) => {
            for event in events {
                match event {
                    HostEvent::Notice(notice) => {
                        ctx.notifications.push(Notification::from_notice(&notice));
                    }
                    HostEvent::Closed(reason) => on_viewer_closed(ctx, reason),
                }
            }
        }
    }
}

/// Returns to the tray, recording what was watched.
fn on_viewer_closed(ctx: &mut UpdateContext<'_>, reason: CloseReason) {
    let Some(state) = ctx.viewer.take() else {
        return;
    };
    let viewer = state.viewer();

    for (index, collection) in ctx.collections.iter_mut().enumerate() {
        if viewer.is_fully_seen(index) {
            collection.mark_seen();
        }
    }

    if let Some(dir) = ctx.history_dir {
        let path = dir.join(diagnostics::generate_default_filename());
        match diagnostics::export_json(&path, viewer.history().iter()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "transition history exported");
                ctx.notifications.push(
                    Notification::info("notification-history-exported")
                        .with_arg("path", path.display().to_string()),
                );
            }
            Err(error) => {
                tracing::warn!(%error, "history export failed");
                ctx.notifications
                    .push(Notification::error("notification-history-export-error"));
            }
        }
    }

    tracing::debug!(?reason, "back to tray");
    ctx.notifications.clear_media_notices();
    *ctx.screen = Screen::Tray;
}

/// Light, dark, then follow the system.
#[must_use]
pub fn next_theme_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
        ThemeMode::System => ThemeMode::Light,
    }
}
