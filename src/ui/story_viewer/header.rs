// SPDX-License-Identifier: MPL-2.0
//! Owner line at the top of a story: avatar, handle, age and close button.

use super::Message;
use crate::domain::story::{Collection, MediaItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::story_tray::avatar;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Utc};
use iced::widget::{button, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::SystemTime;

/// Coarse age of a collection, as displayed next to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostedAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl PostedAge {
    /// Buckets the time between `posted` and `now`. Future timestamps count as
    /// just posted.
    #[must_use]
    pub fn between(posted: SystemTime, now: SystemTime) -> Self {
        let age = DateTime::<Utc>::from(now) - DateTime::<Utc>::from(posted);
        if age.num_minutes() < 1 {
            PostedAge::JustNow
        } else if age.num_hours() < 1 {
            PostedAge::Minutes(age.num_minutes())
        } else if age.num_days() < 1 {
            PostedAge::Hours(age.num_hours())
        } else {
            PostedAge::Days(age.num_days())
        }
    }

    #[must_use]
    pub fn label(self, i18n: &I18n) -> String {
        let (key, count) = match self {
            PostedAge::JustNow => return i18n.tr("viewer-posted-just-now"),
            PostedAge::Minutes(n) => ("viewer-posted-minutes", n),
            PostedAge::Hours(n) => ("viewer-posted-hours", n),
            PostedAge::Days(n) => ("viewer-posted-days", n),
        };
        i18n.tr_with_args(key, &[("count", &count.to_string())])
    }
}

pub fn view<'a>(
    i18n: &'a I18n,
    colors: &'a ColorScheme,
    collection: &'a Collection,
    item: &'a MediaItem,
    now: SystemTime,
) -> Element<'a, Message> {
    let owner = collection.owner();
    let age = PostedAge::between(collection.posted(), now).label(i18n);
    let secondary = Color {
        a: 0.8,
        ..Color::WHITE
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(avatar(
            owner,
            sizing::AVATAR_SM,
            Color::TRANSPARENT,
            colors.brand_primary,
        ))
        .push(
            Text::new(owner.handle.as_str())
                .size(typography::BODY)
                .color(Color::WHITE),
        )
        .push(Text::new(age).size(typography::CAPTION).color(secondary));

    if item.kind.is_video() {
        row = row.push(
            Text::new(i18n.tr("viewer-video-badge"))
                .size(typography::CAPTION)
                .color(secondary),
        );
    }

    row.push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("viewer-close")).size(typography::CAPTION).color(Color::WHITE))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(|_theme: &Theme, _status| button::Style {
                    background: None,
                    text_color: Color::WHITE,
                    ..Default::default()
                }),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ago(secs: u64) -> PostedAge {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000_000);
        PostedAge::between(now - Duration::from_secs(secs), now)
    }

    #[test]
    fn buckets_by_largest_whole_unit() {
        assert_eq!(ago(30), PostedAge::JustNow);
        assert_eq!(ago(5 * 60 + 59), PostedAge::Minutes(5));
        assert_eq!(ago(3 * 3600), PostedAge::Hours(3));
        assert_eq!(ago(2 * 86_400 + 10), PostedAge::Days(2));
    }

    #[test]
    fn future_timestamps_are_just_now() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let later = now + Duration::from_secs(600);
        assert_eq!(PostedAge::between(later, now), PostedAge::JustNow);
    }
}
