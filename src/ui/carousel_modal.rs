// SPDX-License-Identifier: MPL-2.0
//! Sneak-peek carousel modal.
//!
//! Cycles through a fixed set of embedded preview frames. Unlike the
//! requirements deck, the carousel wraps around at both ends; indicator dots
//! jump directly to a frame.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::{Handle, Svg};
use iced::widget::{button, Column, Container, Row, Space};
use iced::{Element, Length};
use std::sync::OnceLock;

/// Embedded preview frames, in display order.
fn previews() -> &'static [Handle; 3] {
    static HANDLES: OnceLock<[Handle; 3]> = OnceLock::new();
    HANDLES.get_or_init(|| {
        [
            Handle::from_memory(include_bytes!("../../assets/previews/sneak-1.svg").as_slice()),
            Handle::from_memory(include_bytes!("../../assets/previews/sneak-2.svg").as_slice()),
            Handle::from_memory(include_bytes!("../../assets/previews/sneak-3.svg").as_slice()),
        ]
    })
}

/// Number of preview frames.
#[must_use]
pub fn frame_count() -> usize {
    previews().len()
}

/// Carousel state: just the current frame index.
#[derive(Debug, Clone, Default)]
pub struct State {
    index: usize,
}

/// Messages emitted by the carousel modal.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next,
    Previous,
    Select(usize),
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Close,
}

impl State {
    /// Current frame index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle a carousel message. Next/previous wrap around.
    pub fn update(&mut self, message: Message) -> Event {
        let total = frame_count();
        match message {
            Message::Next => {
                self.index = (self.index + 1) % total;
                Event::None
            }
            Message::Previous => {
                self.index = (self.index + total - 1) % total;
                Event::None
            }
            Message::Select(i) => {
                self.index = i.min(total - 1);
                Event::None
            }
            Message::Close => Event::Close,
        }
    }
}

/// Render the carousel over a dimmed backdrop.
pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let frame = Svg::new(previews()[state.index].clone())
        .width(Length::Fill)
        .height(Length::Fill);

    let close = button(
        icons::sized(icons::cross(), sizing::ICON_MD)
            .style(styles::overlay::icon(palette::TEXT_SECONDARY)),
    )
    .on_press(Message::Close)
    .padding(spacing::XS)
    .style(styles::button::text_link);

    let previous = button(
        icons::sized(icons::chevron_left(), sizing::ICON_XL)
            .style(styles::overlay::icon(palette::CYAN)),
    )
    .on_press(Message::Previous)
    .padding(spacing::MD)
    .style(styles::button::text_link);

    let next = button(
        icons::sized(icons::chevron_right(), sizing::ICON_XL)
            .style(styles::overlay::icon(palette::CYAN)),
    )
    .on_press(Message::Next)
    .padding(spacing::MD)
    .style(styles::button::text_link);

    let mut dots = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    for i in 0..frame_count() {
        dots = dots.push(
            button(Space::new()
                .width(Length::Fixed(sizing::NAV_DOT))
                .height(Length::Fixed(sizing::NAV_DOT)))
            .on_press(Message::Select(i))
            .padding(0)
            .style(styles::button::nav_dot(i == state.index)),
        );
    }

    let (current, total) = (state.index + 1, frame_count());
    let caption = Container::new(
        iced::widget::Text::new(i18n.tr_with_args(
            "carousel-caption",
            &[
                ("current", current.to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        ))
        .size(12),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let stage = Row::new()
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(frame)
                .width(Length::Fixed(sizing::CAROUSEL_WIDTH))
                .height(Length::Fixed(sizing::CAROUSEL_WIDTH * 9.0 / 16.0))
                .style(styles::container::modal)
                .padding(spacing::XS),
        )
        .push(next);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Container::new(close).align_x(Horizontal::Right).width(Length::Fill))
        .push(stage)
        .push(dots)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_in_both_directions() {
        let mut state = State::default();
        assert_eq!(state.index(), 0);

        state.update(Message::Previous);
        assert_eq!(state.index(), frame_count() - 1, "previous wraps to last");

        state.update(Message::Next);
        assert_eq!(state.index(), 0, "next wraps back to first");
    }

    #[test]
    fn select_jumps_directly() {
        let mut state = State::default();
        state.update(Message::Select(2));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn close_emits_close_event() {
        let mut state = State::default();
        assert!(matches!(state.update(Message::Close), Event::Close));
        // The index is untouched by closing
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn carousel_view_renders_every_frame() {
        let i18n = I18n::default();
        let mut state = State::default();
        for i in 0..frame_count() {
            state.update(Message::Select(i));
            let _element = view(&i18n, &state);
        }
    }
}
