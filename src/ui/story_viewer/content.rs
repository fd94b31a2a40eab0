// SPDX-License-Identifier: MPL-2.0
//! Media area of a story card.
//!
//! Images with a file on disk are drawn with iced's image widget. Mock sources
//! and videos get a generated backdrop so the demo runs without assets.

use super::Message;
use crate::application::viewer::MediaStatus;
use crate::domain::story::{MediaItem, MediaKind};
use crate::i18n::fluent::I18n;
use crate::infrastructure::PreviewMedia;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{container, image, Container, Stack, Text};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Length, Padding, Theme};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct ViewModel<'a> {
    pub item: &'a MediaItem,
    pub status: Option<&'a MediaStatus>,
    pub paused: bool,
}

/// Stable backdrop color for a placeholder item.
#[must_use]
pub fn placeholder_color(item: &MediaItem) -> Color {
    let mut hasher = DefaultHasher::new();
    item.id.as_str().hash(&mut hasher);
    let hash = hasher.finish();
    let channel = |shift: u32| 0.25 + ((hash >> shift) & 0xff) as f32 / 255.0 * 0.5;
    Color::from_rgb(channel(0), channel(8), channel(16))
}

/// Top-left padding that places an overlay at its relative position.
#[must_use]
pub fn overlay_padding(x: f32, y: f32) -> Padding {
    Padding {
        top: y * sizing::STORY_HEIGHT * 0.85,
        left: x * sizing::STORY_WIDTH * 0.7,
        right: spacing::MD,
        bottom: 0.0,
    }
}

pub fn view<'a>(i18n: &'a I18n, model: ViewModel<'a>) -> Element<'a, Message> {
    let item = model.item;
    let failed = matches!(model.status, Some(MediaStatus::Failed(_)));

    let backdrop: Element<'a, Message> = if failed {
        centered(
            Text::new(i18n.tr("viewer-media-unavailable"))
                .size(typography::BODY)
                .color(palette::GRAY_200),
            palette::GRAY_900,
        )
    } else {
        match item.kind {
            MediaKind::Image if !PreviewMedia::is_placeholder(item.source.as_str()) => {
                image(item.source.as_str())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into()
            }
            MediaKind::Image => centered(Text::new(""), placeholder_color(item)),
            MediaKind::Video { .. } => {
                let glyph = if model.paused { "▶" } else { "❚❚" };
                centered(
                    Text::new(glyph)
                        .size(typography::TITLE_MD * 2.0)
                        .color(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..palette::WHITE
                        }),
                    placeholder_color(item),
                )
            }
        }
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    if let Some(overlay) = &item.overlay {
        let position = overlay.position;
        layers = layers.push(
            Container::new(
                Container::new(
                    Text::new(overlay.text.as_str())
                        .size(typography::BODY_LG)
                        .color(palette::WHITE),
                )
                .padding(spacing::XS)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::BLACK
                    })),
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(overlay_padding(position.x(), position.y())),
        );
    }

    if model.paused {
        layers = layers.push(
            Container::new(
                Text::new(i18n.tr("viewer-paused"))
                    .size(typography::CAPTION)
                    .color(palette::WHITE),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG),
        );
    }

    layers.into()
}

fn centered<'a>(content: Text<'a>, fill: Color) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(fill)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn placeholder_color_is_stable_per_item() {
        let a = MediaItem::image("a", "mock://a");
        let b = MediaItem::image("a", "mock://other");
        assert_eq!(placeholder_color(&a), placeholder_color(&b));
    }

    #[test]
    fn placeholder_color_stays_mid_range() {
        let color = placeholder_color(&MediaItem::image("xyz", "mock://xyz"));
        for channel in [color.r, color.g, color.b] {
            assert!((0.25..=0.75).contains(&channel));
        }
    }

    #[test]
    fn overlay_padding_scales_with_position() {
        let origin = overlay_padding(0.0, 0.0);
        assert_abs_diff_eq!(origin.top, 0.0);
        assert_abs_diff_eq!(origin.left, 0.0);

        let bottom_right = overlay_padding(1.0, 1.0);
        assert_abs_diff_eq!(bottom_right.top, sizing::STORY_HEIGHT * 0.85);
        assert_abs_diff_eq!(bottom_right.left, sizing::STORY_WIDTH * 0.7);
    }
}
