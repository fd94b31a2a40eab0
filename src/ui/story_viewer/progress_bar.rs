// SPDX-License-Identifier: MPL-2.0
//! Segmented progress bar shown across the top of a story.

use crate::domain::viewer::SegmentState;
use crate::ui::design_tokens::{opacity, palette, radius, sizing};
use iced::widget::{container, mouse_area, Container, Row, Space, Stack};
use iced::{mouse, Background, Border, Color, Element, Length, Theme};

/// Resolution of the fill split.
const PORTION_SCALE: f32 = 1000.0;

/// Splits a fill level into `(filled, remaining)` layout portions.
///
/// A zero part means that side is not drawn at all.
#[must_use]
pub fn portions(fill: f32) -> (u16, u16) {
    let filled = (fill.clamp(0.0, 1.0) * PORTION_SCALE).round() as u16;
    (filled, PORTION_SCALE as u16 - filled)
}

/// Draws one segment per item; clicking a segment selects that item.
pub fn view<'a, M: Clone + 'a>(
    segments: &[SegmentState],
    on_select: impl Fn(usize) -> M,
) -> Element<'a, M> {
    segments
        .iter()
        .enumerate()
        .fold(
            Row::new().spacing(sizing::SEGMENT_GAP).width(Length::Fill),
            |row, (index, segment)| {
                row.push(
                    mouse_area(segment_view(segment.fill()))
                        .on_press(on_select(index))
                        .interaction(mouse::Interaction::Pointer),
                )
            },
        )
        .into()
}

fn segment_view<'a, M: 'a>(fill: f32) -> Element<'a, M> {
    let (filled, remaining) = portions(fill);

    let track = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SEGMENT_HEIGHT))
        .style(|_theme: &Theme| bar_style(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        }));

    let mut bar = Row::new().width(Length::Fill);
    if filled > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fixed(sizing::SEGMENT_HEIGHT))
                .style(|_theme: &Theme| bar_style(palette::WHITE)),
        );
    }
    if remaining > 0 {
        bar = bar.push(
            Space::new()
                .width(Length::FillPortion(remaining))
                .height(Length::Fixed(sizing::SEGMENT_HEIGHT)),
        );
    }

    Stack::new()
        .push(track)
        .push(bar)
        .width(Length::FillPortion(1))
        .into()
}

fn bar_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
