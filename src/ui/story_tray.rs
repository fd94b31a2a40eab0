// SPDX-License-Identifier: MPL-2.0
//! Story tray: one ringed avatar per collection.
//!
//! Clicking an avatar opens the viewer on that collection. The ring is drawn in
//! the accent color while the collection still has unseen items.

use crate::domain::story::{Collection, Owner};
use crate::i18n::fluent::I18n;
use crate::infrastructure::PreviewMedia;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, image, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the viewer on the collection at this index.
    Open(usize),
    ToggleTheme,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Number of collections that still have unseen items.
#[must_use]
pub fn unseen_count(collections: &[Collection]) -> usize {
    collections.iter().filter(|c| c.has_unseen()).count()
}

/// Ring color for a collection.
#[must_use]
pub fn ring_color(collection: &Collection, colors: &ColorScheme) -> Color {
    if collection.has_unseen() {
        colors.story_ring_unseen
    } else {
        colors.story_ring_seen
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, collections: &'a [Collection]) -> Element<'a, Message> {
    let unseen = unseen_count(collections);
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("tray-title")).size(typography::TITLE_MD));
    if unseen > 0 {
        let label = ctx
            .i18n
            .tr_with_args("tray-unseen-count", &[("count", &unseen.to_string())]);
        let accent = ctx.colors.story_ring_unseen;
        header = header.push(Text::new(label).size(typography::CAPTION).style(
            move |_theme: &Theme| iced::widget::text::Style {
                color: Some(accent),
            },
        ));
    }
    header = header
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("tray-theme-toggle")).size(typography::CAPTION))
                .on_press(Message::ToggleTheme)
                .padding(spacing::XXS),
        );

    let body: Element<'a, Message> = if collections.is_empty() {
        Text::new(ctx.i18n.tr("tray-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let avatars = collections
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::MD), |row, (index, collection)| {
                row.push(avatar_entry(ctx.colors, index, collection))
            });
        Scrollable::new(avatars)
            .direction(Direction::Horizontal(Scrollbar::default()))
            .width(Length::Fill)
            .into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn avatar_entry<'a>(
    colors: &ColorScheme,
    index: usize,
    collection: &'a Collection,
) -> Element<'a, Message> {
    let owner = collection.owner();
    let ring = ring_color(collection, colors);

    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(avatar(owner, sizing::AVATAR_LG, ring, colors.brand_primary))
        .push(Text::new(owner.handle.as_str()).size(typography::CAPTION));

    button(column)
        .on_press(Message::Open(index))
        .padding(0)
        .style(|_theme: &Theme, _status| button::Style {
            background: None,
            ..Default::default()
        })
        .into()
}

/// Round avatar with a colored ring.
///
/// Falls back to the owner's initials when the avatar file is missing.
pub fn avatar<'a, M: 'a>(owner: &'a Owner, size: f32, ring: Color, fill: Color) -> Element<'a, M> {
    let inner = size - 2.0 * sizing::STORY_RING;
    let source = owner.avatar.as_str();
    let has_file = !PreviewMedia::is_placeholder(source) && Path::new(source).is_file();
    let content: Element<'a, M> = if !has_file {
        Text::new(owner.initials())
            .size(inner * 0.4)
            .color(Color::WHITE)
            .into()
    } else {
        image(source)
            .width(Length::Fixed(inner))
            .height(Length::Fixed(inner))
            .into()
    };

    container(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: ring,
                width: sizing::STORY_RING,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        })
        .into()
}
