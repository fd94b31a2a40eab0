// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::domain::story::Collection;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::story_tray;
use crate::ui::story_viewer;
use crate::ui::theming::ColorScheme;
use iced::widget::{Container, Stack};
use iced::{Background, Element, Length, Theme};
use std::time::SystemTime;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: &'a ColorScheme,
    pub collections: &'a [Collection],
    pub viewer: Option<&'a story_viewer::State>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.viewer) {
        (Screen::Viewer, Some(viewer)) => viewer
            .view(story_viewer::ViewContext {
                i18n: ctx.i18n,
                colors: ctx.colors,
                now: SystemTime::now(),
            })
            .map(Message::Viewer),
        _ => view_tray(&ctx),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
    let surface = ctx.colors.surface_primary;

    Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(current_view)
            .push(toasts),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_theme: &Theme| iced::widget::container::Style {
        background: Some(Background::Color(surface)),
        ..Default::default()
    })
    .into()
}

fn view_tray<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    story_tray::view(
        story_tray::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
        ctx.collections,
    )
    .map(Message::Tray)
}
