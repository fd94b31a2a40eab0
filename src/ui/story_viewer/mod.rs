// SPDX-License-Identifier: MPL-2.0
//! Story viewer screen.
//!
//! Owns the running [`StoryViewer`] session and translates widget events into
//! session inputs. The `mouse_area` covering the story card reports positions
//! relative to the card, but the card slides while dragged. Drags are
//! therefore tracked with window cursor positions, mapped into the card's
//! frame as it was when the press started.
//!
//! Host events buffered by the session are handed back to the caller through
//! [`Effect::Events`] after every update.

pub mod content;
pub mod header;
pub mod progress_bar;

use crate::application::port::{Clock, HostEvent, HostQueue, SystemClock};
use crate::application::viewer::{Position, StoryViewer, ViewerSettings};
use crate::domain::error::StoryError;
use crate::domain::story::{Collection, Owner, TapZone};
use crate::domain::viewer::SwipeDirection;
use crate::i18n::fluent::I18n;
use crate::infrastructure::PreviewMedia;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::story_tray::avatar;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, container, mouse_area, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Background, Border, Element, Length, Padding, Point, Theme};
use std::sync::Arc;
use std::time::SystemTime;

/// Reactions offered next to the reply box.
pub const QUICK_REACTIONS: [&str; 3] = ["❤️", "🔥", "👏"];

/// Session type driven by the desktop shell.
pub type ActiveViewer<C> = StoryViewer<C, PreviewMedia, HostQueue>;

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick while the viewer is open.
    Tick,
    /// Pointer position relative to the card.
    PointerMoved(Point),
    /// Pointer position in window coordinates.
    CursorMoved(Point),
    PointerPressed,
    PointerReleased,
    /// The pointer left the card.
    PointerExited,
    TogglePause,
    TapBack,
    TapForward,
    Swipe(SwipeDirection),
    /// Jump to an item of the active collection.
    SelectItem(usize),
    /// Jump to the first item of another collection.
    SelectCollection(usize),
    ReplyChanged(String),
    SubmitReply,
    React(&'static str),
    Close,
}

/// What the caller has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Events the session reported to its host, in order.
    Events(Vec<HostEvent>),
    /// A reply or reaction was rejected.
    Rejected(StoryError),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Wall-clock time used for relative ages.
    pub now: SystemTime,
}

/// UI state of the open viewer.
pub struct State<C: Clock = SystemClock> {
    viewer: ActiveViewer<C>,
    /// Last card-relative pointer position.
    pointer: Position,
    /// Last window cursor position.
    cursor: Option<Point>,
    /// Card origin minus window origin, fixed for the duration of a press.
    press_frame: Option<Position>,
    reply_draft: String,
}

impl<C: Clock> State<C> {
    /// Opens a session on `collections`, starting at `initial`.
    ///
    /// # Errors
    ///
    /// Propagates the session's open errors.
    pub fn open(
        collections: impl Into<Arc<[Collection]>>,
        initial: usize,
        settings: ViewerSettings,
        clock: C,
    ) -> Result<Self, StoryError> {
        let viewer = StoryViewer::open(
            collections,
            initial,
            settings,
            clock,
            PreviewMedia::new(),
            HostQueue::new(),
        )?;
        Ok(Self {
            viewer,
            pointer: Position::default(),
            cursor: None,
            press_frame: None,
            reply_draft: String::new(),
        })
    }

    #[must_use]
    pub fn viewer(&self) -> &ActiveViewer<C> {
        &self.viewer
    }

    #[must_use]
    pub fn reply_draft(&self) -> &str {
        &self.reply_draft
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.viewer.is_closed()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Tick => {
                self.viewer.tick();
            }
            Message::PointerMoved(point) => {
                self.pointer = Position::new(point.x, point.y);
                if self.press_frame.is_none() {
                    self.viewer.pointer_moved(self.pointer);
                }
            }
            Message::CursorMoved(point) => {
                self.cursor = Some(point);
                if let Some(frame) = self.press_frame {
                    self.viewer.pointer_moved(in_frame(point, frame));
                }
            }
            Message::PointerPressed => {
                let pointer = self.pointer;
                self.press_frame = self
                    .cursor
                    .map(|cursor| Position::new(pointer.x - cursor.x, pointer.y - cursor.y));
                self.viewer.pointer_pressed(self.pointer);
            }
            Message::PointerReleased => {
                let position = match (self.press_frame.take(), self.cursor) {
                    (Some(frame), Some(cursor)) => in_frame(cursor, frame),
                    _ => self.pointer,
                };
                self.viewer.pointer_released(position, sizing::STORY_WIDTH);
            }
            Message::PointerExited => {
                self.press_frame = None;
                self.viewer.pointer_cancelled();
            }
            Message::TogglePause => {
                self.viewer.toggle_hold();
            }
            Message::TapBack => {
                self.viewer.tap(TapZone::Left);
            }
            Message::TapForward => {
                self.viewer.tap(TapZone::Right);
            }
            Message::Swipe(direction) => {
                self.viewer.swipe(direction);
            }
            Message::SelectItem(index) => {
                self.viewer.jump_to_item(index);
            }
            Message::SelectCollection(index) => {
                self.viewer.jump_to_collection(index);
            }
            Message::ReplyChanged(draft) => self.reply_draft = draft,
            Message::SubmitReply => match self.viewer.send_reply(&self.reply_draft) {
                Ok(()) => self.reply_draft.clear(),
                Err(error) => return Effect::Rejected(error),
            },
            Message::React(reaction) => {
                if let Err(error) = self.viewer.send_reaction(reaction) {
                    return Effect::Rejected(error);
                }
            }
            Message::Close => {
                self.viewer.close();
            }
        }
        self.drain_effect()
    }

    /// Hands over the events buffered since the last update, including those
    /// raised while opening.
    pub fn drain_effect(&mut self) -> Effect {
        let events = self.viewer.host_mut().drain();
        if events.is_empty() {
            Effect::None
        } else {
            Effect::Events(events)
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let (Some(collection), Some(item)) =
            (self.viewer.current_collection(), self.viewer.current_item())
        else {
            return Space::new().width(Length::Fill).height(Length::Fill).into();
        };

        let paused = self.viewer.state().is_paused();
        let media = content::view(
            ctx.i18n,
            content::ViewModel {
                item,
                status: self.viewer.media_status(),
                paused,
            },
        );

        let touch_surface = mouse_area(
            Space::new().width(Length::Fill).height(Length::Fill),
        )
        .on_move(Message::PointerMoved)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_exit(Message::PointerExited);

        let chrome = Column::new()
            .spacing(spacing::XS)
            .padding(spacing::XS)
            .push(progress_bar::view(
                &self.viewer.progress(),
                Message::SelectItem,
            ))
            .push(header::view(
                ctx.i18n,
                ctx.colors,
                collection,
                item,
                ctx.now,
            ));

        let card = Container::new(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(media)
                .push(touch_surface)
                .push(chrome),
        )
        .width(Length::Fixed(sizing::STORY_WIDTH))
        .height(Length::Fixed(sizing::STORY_HEIGHT))
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::BLACK)),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        // Follow the finger while dragging. The stage is centered, so one side
        // gets twice the offset to move the card by exactly the offset.
        let offset = self.viewer.drag_offset();
        let card = Container::new(card).padding(Padding {
            left: 2.0 * offset.max(0.0),
            right: 2.0 * (-offset).max(0.0),
            ..Padding::ZERO
        });

        let neighbors = self.viewer.neighbors();
        let active = self.viewer.cursor().map_or(0, |cursor| cursor.collection);
        let peek = |owner: Option<&'a Owner>, target: usize| {
            let slot: Element<'a, Message> = match owner {
                Some(owner) => button(avatar(
                    owner,
                    sizing::AVATAR_SM,
                    ctx.colors.story_ring_seen,
                    ctx.colors.brand_primary,
                ))
                .on_press(Message::SelectCollection(target))
                .padding(0)
                .style(|_theme: &Theme, _status| button::Style {
                    background: None,
                    ..Default::default()
                })
                .into(),
                None => Space::new().width(Length::Fixed(sizing::AVATAR_SM)).into(),
            };
            slot
        };

        let stage = Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .push(peek(neighbors.previous, active.saturating_sub(1)))
            .push(card)
            .push(peek(neighbors.next, active + 1));

        let reply = self.reply_bar(ctx.i18n, &collection.owner().handle);

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(stage)
                .push(reply),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(ColorScheme::viewer_backdrop())),
            ..Default::default()
        })
        .into()
    }

    fn reply_bar<'a>(&'a self, i18n: &'a I18n, handle: &str) -> Element<'a, Message> {
        let placeholder = i18n.tr_with_args("viewer-reply-placeholder", &[("handle", handle)]);
        let input = text_input(&placeholder, &self.reply_draft)
            .on_input(Message::ReplyChanged)
            .on_submit(Message::SubmitReply)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let send = button(Text::new(i18n.tr("viewer-send")).size(typography::BODY))
            .on_press_maybe((!self.reply_draft.trim().is_empty()).then_some(Message::SubmitReply))
            .padding(spacing::XS);

        QUICK_REACTIONS
            .iter()
            .fold(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(input)
                    .push(send),
                |row, reaction| {
                    row.push(
                        button(Text::new(*reaction).size(typography::BODY_LG))
                            .on_press(Message::React(*reaction))
                            .padding(spacing::XXS)
                            .style(|_theme: &Theme, _status| button::Style {
                                background: None,
                                ..Default::default()
                            }),
                    )
                },
            )
            .width(Length::Fixed(sizing::STORY_WIDTH))
            .into()
    }
}

/// Maps a window position into a card frame captured at press time.
fn in_frame(window: Point, frame: Position) -> Position {
    Position::new(window.x + frame.x, window.y + frame.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::testing::FakeClock;
    use crate::domain::story::MediaItem;
    use crate::domain::viewer::{CloseReason, ViewerState};
    use crate::test_utils::assert_abs_diff_eq;

    fn collections() -> Vec<Collection> {
        ["mira", "theo"]
            .iter()
            .map(|handle| {
                Collection::new(
                    Owner::new(*handle, *handle, *handle),
                    vec![
                        MediaItem::image(format!("{handle}-1"), "mock://a"),
                        MediaItem::image(format!("{handle}-2"), "mock://b"),
                    ],
                )
                .expect("non-empty")
            })
            .collect()
    }

    fn open(clock: &FakeClock) -> State<FakeClock> {
        State::open(collections(), 0, ViewerSettings::default(), clock.clone()).expect("opens")
    }

    #[test]
    fn tap_right_on_the_card_advances() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::PointerMoved(Point::new(sizing::STORY_WIDTH * 0.9, 100.0)));
        state.update(Message::PointerPressed);
        clock.advance_ms(50);
        state.update(Message::PointerReleased);

        assert_eq!(
            state.viewer().cursor().map(|c| (c.collection, c.item)),
            Some((0, 1))
        );
    }

    #[test]
    fn long_press_pauses_until_release() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::PointerMoved(Point::new(100.0, 100.0)));
        state.update(Message::PointerPressed);
        clock.advance_ms(400);
        state.update(Message::Tick);
        assert!(state.viewer().state().is_paused());

        state.update(Message::PointerReleased);
        assert!(state.viewer().state().is_playing());
        assert_eq!(state.viewer().cursor().map(|c| c.item), Some(0));
    }

    #[test]
    fn reply_clears_draft_and_reports_notice() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::ReplyChanged("nice!".into()));
        let effect = state.update(Message::SubmitReply);

        assert!(state.reply_draft().is_empty());
        assert!(matches!(effect, Effect::Events(events) if events.len() == 1));
    }

    #[test]
    fn blank_reply_is_rejected_and_kept() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::ReplyChanged("   ".into()));
        let effect = state.update(Message::SubmitReply);

        assert_eq!(effect, Effect::Rejected(StoryError::EmptyReply));
        assert_eq!(state.reply_draft(), "   ");
    }

    #[test]
    fn close_reports_dismissal_once() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        let effect = state.update(Message::Close);
        assert_eq!(
            effect,
            Effect::Events(vec![HostEvent::Closed(CloseReason::Dismissed)])
        );
        assert_eq!(state.viewer().state(), ViewerState::Closed);
        assert_eq!(state.update(Message::Close), Effect::None);
    }

    #[test]
    fn segment_and_peek_selection_jump() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::SelectItem(1));
        assert_eq!(state.viewer().cursor().map(|c| c.item), Some(1));

        state.update(Message::SelectCollection(1));
        assert_eq!(
            state.viewer().cursor().map(|c| (c.collection, c.item)),
            Some((1, 0))
        );
    }

    #[test]
    fn drag_offset_matches_cursor_travel() {
        let clock = FakeClock::new();
        let mut state = open(&clock);

        state.update(Message::CursorMoved(Point::new(500.0, 400.0)));
        state.update(Message::PointerMoved(Point::new(200.0, 300.0)));
        state.update(Message::PointerPressed);

        state.update(Message::CursorMoved(Point::new(455.0, 400.0)));
        // The card has slid under the pointer; its relative position lags.
        state.update(Message::PointerMoved(Point::new(177.5, 300.0)));
        state.update(Message::CursorMoved(Point::new(410.0, 400.0)));
        assert_abs_diff_eq!(state.viewer().drag_offset(), -90.0);

        state.update(Message::PointerReleased);
        assert_eq!(
            state.viewer().cursor().map(|c| (c.collection, c.item)),
            Some((1, 0))
        );
        assert_abs_diff_eq!(state.viewer().drag_offset(), 0.0);
    }

    #[test]
    fn tap_zone_uses_card_position_when_cursor_is_known() {
        let clock = FakeClock::new();
        let mut state = open(&clock);
        state.update(Message::SelectItem(1));

        state.update(Message::CursorMoved(Point::new(340.0, 400.0)));
        state.update(Message::PointerMoved(Point::new(40.0, 300.0)));
        state.update(Message::PointerPressed);
        state.update(Message::PointerReleased);

        assert_eq!(state.viewer().cursor().map(|c| c.item), Some(0));
    }
}
