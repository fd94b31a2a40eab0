// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the tray and the viewer.
//!
//! The `App` struct owns the loaded collections, the open viewer session (if
//! any), localization and persisted settings. Viewer host events come back
//! through `update` and become toasts or a return to the tray.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::CollectionProvider;
use crate::config::{self, Config};
use crate::domain::story::Collection;
use crate::i18n::fluent::I18n;
use crate::infrastructure::MockCatalog;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::story_viewer;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    config_dir: Option<PathBuf>,
    collections: Vec<Collection>,
    viewer: Option<story_viewer::State>,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    notifications: notifications::Manager,
    /// Receives a JSON transition history whenever the viewer closes.
    history_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("collections", &self.collections.len())
            .field("viewer_open", &self.viewer.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
/// Room for the story card, neighbor peeks and the reply bar.
pub const MIN_WINDOW_WIDTH: f32 = sizing::STORY_WIDTH + 2.0 * sizing::AVATAR_SM + 64.0;
pub const MIN_WINDOW_HEIGHT: f32 = sizing::STORY_HEIGHT + 96.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and collections, then optionally opens the viewer.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.general.theme_mode;

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let catalog = flags
            .catalog
            .as_ref()
            .map_or_else(MockCatalog::builtin, MockCatalog::from_file);
        let collections = match catalog.collections() {
            Ok(collections) => collections,
            Err(error) => {
                tracing::error!(%error, "could not load story catalog");
                notifications.push(Notification::error("notification-catalog-load-error"));
                Vec::new()
            }
        };
        tracing::info!(collections = collections.len(), "talka stories started");

        let mut app = App {
            i18n,
            screen: Screen::Tray,
            config,
            config_dir,
            collections,
            viewer: None,
            theme_mode,
            colors: theme_mode.colors(),
            notifications,
            history_dir: flags.history_dir.map(PathBuf::from),
        };

        if let Some(start) = flags.start {
            update::open_viewer(&mut app.update_context(), start);
        }

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
            collections: &mut self.collections,
            viewer: &mut self.viewer,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            history_dir: self.history_dir.as_deref(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self
            .viewer
            .as_ref()
            .and_then(|state| state.viewer().current_collection())
        {
            Some(collection) => format!("@{} - {app_name}", collection.owner().handle),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_viewer_tick_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let previous_theme = self.theme_mode;
        let task = update::update(&mut self.update_context(), message);
        if self.theme_mode != previous_theme {
            self.colors = self.theme_mode.colors();
        }
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: &self.colors,
            collections: &self.collections,
            viewer: self.viewer.as_ref(),
            notifications: &self.notifications,
        })
    }
}
