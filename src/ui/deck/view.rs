// SPDX-License-Identifier: MPL-2.0
//! Render layer for the requirements deck.
//!
//! Paints the active slide panel plus the floating chrome: progress bar,
//! HOME affordance, and the auto-hiding navigation pill. Everything shown
//! here is derived from the controller's outputs; the view never mutates
//! navigation state.

use super::slides::{self, Accent, Block, Layout, Slide, Tag};
use super::state::{Message as NavMessage, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, scrollable, text, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{Color, Element, Length};

/// Contextual data needed to render the deck.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the deck screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigation input forwarded to the controller.
    Nav(NavMessage),
    /// The HOME affordance; dismissal is owned by the app, not the deck.
    GoHome,
}

/// Render the deck screen.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let slide = &slides::SLIDES[state.index().min(slides::SLIDES.len() - 1)];

    let base = Column::new()
        .push(progress_bar(state))
        .push(
            Container::new(scrollable(slide_panel(slide)).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([spacing::XL, spacing::SECTION]),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(
        Container::new(base)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(deck_background),
    );

    layers = layers.push(
        Container::new(home_button(ctx.i18n))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::LG),
    );

    if state.nav_visible() {
        layers = layers.push(
            Container::new(nav_chrome(ctx.i18n, state))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom)
                .padding(spacing::XL),
        );
    }

    layers.into()
}

fn deck_background(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::DEEP)),
        text_color: Some(palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Thin gradient-colored strip along the top edge; its filled share equals
/// the completed fraction of the deck.
fn progress_bar<'a>(state: &State) -> Element<'a, Message> {
    let filled = (state.index() + 1) as u16;
    let remaining = (state.total() - state.index() - 1) as u16;

    let mut bar = Row::new().push(
        Container::new(Space::new().width(Length::Fill).height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)))
            .width(Length::FillPortion(filled))
            .style(styles::container::progress_fill),
    );

    if remaining > 0 {
        bar = bar.push(
            Container::new(Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)))
            .width(Length::FillPortion(remaining))
            .style(styles::container::progress_track),
        );
    }

    bar.width(Length::Fill).into()
}

fn home_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::home(), sizing::ICON_SM).style(styles::overlay::icon(palette::CYAN)))
        .push(Text::new(i18n.tr("deck-home")).size(typography::BODY));

    button(label)
        .on_press(Message::GoHome)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::secondary)
        .into()
}

/// The floating navigation pill: previous arrow, indicator dots, counter,
/// next arrow. The arrows disable at the deck boundaries.
fn nav_chrome<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let prev_icon =
        icons::sized(icons::arrow_left(), sizing::ICON_MD).style(styles::overlay::icon(
            if state.at_first() {
                palette::TEXT_MUTED
            } else {
                palette::CYAN
            },
        ));
    let prev = tooltip::Tooltip::new(
        button(prev_icon)
            .on_press_maybe((!state.at_first()).then_some(Message::Nav(NavMessage::Previous)))
            .padding(spacing::SM)
            .style(styles::button::nav_arrow),
        text(i18n.tr("deck-previous")).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4);

    let next_icon =
        icons::sized(icons::arrow_right(), sizing::ICON_MD).style(styles::overlay::icon(
            if state.at_last() {
                palette::TEXT_MUTED
            } else {
                palette::CYAN
            },
        ));
    let next = tooltip::Tooltip::new(
        button(next_icon)
            .on_press_maybe((!state.at_last()).then_some(Message::Nav(NavMessage::Next)))
            .padding(spacing::SM)
            .style(styles::button::nav_arrow),
        text(i18n.tr("deck-next")).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4);

    let mut dots = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for i in 0..state.total() {
        let dot = button(Space::new()
            .width(Length::Fixed(sizing::NAV_DOT))
            .height(Length::Fixed(sizing::NAV_DOT)))
        .on_press(Message::Nav(NavMessage::Select(i)))
        .padding(0)
        .style(styles::button::nav_dot(i == state.index()));
        dots = dots.push(dot);
    }

    let (current, total) = state.counter();
    let counter = Container::new(
        Text::new(i18n.tr_with_args(
            "deck-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::BODY)
        .color(palette::CYAN),
    )
    .width(Length::Fixed(sizing::COUNTER_WIDTH))
    .align_x(Horizontal::Center);

    let pill = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(prev)
        .push(dots)
        .push(counter)
        .push(next);

    Container::new(pill)
        .padding([spacing::MD, spacing::XL])
        .style(styles::container::nav_pill)
        .into()
}

fn slide_panel<'a>(slide: &'a Slide) -> Element<'a, Message> {
    match slide.layout {
        Layout::Cover => cover_panel(slide),
        Layout::Standard => standard_panel(slide),
        Layout::Closing => closing_panel(slide),
    }
}

fn cover_panel<'a>(slide: &'a Slide) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(badge_chip(slide.badge, slide.badge_tag))
        .push(
            Text::new(slide.title)
                .size(typography::DISPLAY)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            Text::new(slide.subtitle)
                .size(typography::BODY_LG)
                .color(palette::TEXT_SECONDARY),
        );

    for block in slide.blocks {
        column = column.push(render_block(block));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn standard_panel<'a>(slide: &'a Slide) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::SM)
        .push(badge_chip(slide.badge, slide.badge_tag))
        .push(
            Text::new(slide.title)
                .size(typography::TITLE_LG)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            Text::new(slide.subtitle)
                .size(typography::BODY_LG)
                .color(palette::TEXT_SECONDARY),
        );

    let mut grid = Row::new().spacing(spacing::LG);
    for block in slide.blocks {
        grid = grid.push(Container::new(render_block(block)).width(Length::Fill));
    }

    Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(grid)
        .width(Length::Fill)
        .into()
}

fn closing_panel<'a>(slide: &'a Slide) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(badge_chip(slide.badge, slide.badge_tag))
        .push(
            Text::new(slide.title)
                .size(typography::DISPLAY)
                .color(palette::TEXT_PRIMARY),
        );

    for block in slide.blocks {
        column = column.push(render_block(block));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn badge_chip<'a>(badge: &'static str, tag: Option<Tag>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(badge).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::badge(palette::CYAN)),
        );

    if let Some(tag) = tag {
        row = row.push(tag_chip(tag));
    }

    row.into()
}

fn tag_chip<'a>(tag: Tag) -> Element<'a, Message> {
    let accent = match tag {
        Tag::New => palette::GREEN,
        Tag::Updated => palette::CYAN,
        Tag::Required => palette::RED,
        Tag::Chapter3 => palette::MAGENTA,
    };

    Container::new(Text::new(tag.label()).size(typography::FINE))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(accent))
        .into()
}

fn render_block<'a>(block: &'a Block) -> Element<'a, Message> {
    match block {
        Block::Stats(stats) => {
            let mut row = Row::new().spacing(spacing::XXL);
            for stat in *stats {
                let color = accent_color(stat.accent);
                row = row.push(
                    Column::new()
                        .align_x(Horizontal::Center)
                        .push(Text::new(stat.value).size(typography::TITLE_LG).color(color))
                        .push(
                            Text::new(stat.label)
                                .size(typography::BODY)
                                .color(palette::TEXT_MUTED),
                        ),
                );
            }
            Container::new(row).padding([spacing::XL, 0.0]).into()
        }
        Block::Card { icon, title, items } => {
            let mut card = Column::new()
                .spacing(spacing::SM)
                .push(card_icon(icon))
                .push(
                    Text::new(*title)
                        .size(typography::TITLE_SM)
                        .color(palette::CYAN),
                );

            for entry in *items {
                let mut line = Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new("▸").size(typography::BODY).color(palette::CYAN))
                    .push(
                        Text::new(entry.text)
                            .size(typography::BODY)
                            .color(palette::TEXT_SECONDARY),
                    );
                if let Some(tag) = entry.tag {
                    line = line.push(tag_chip(tag));
                }
                card = card.push(line);
            }

            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        }
        Block::Table {
            icon,
            title,
            header,
            rows,
        } => {
            let mut card = Column::new()
                .spacing(spacing::SM)
                .push(card_icon(icon))
                .push(
                    Text::new(*title)
                        .size(typography::TITLE_SM)
                        .color(palette::CYAN),
                );

            if !header.is_empty() {
                let mut head = Row::new().spacing(spacing::MD);
                for cell in *header {
                    head = head.push(
                        Text::new(*cell)
                            .size(typography::CAPTION)
                            .color(palette::CYAN)
                            .width(Length::FillPortion(1)),
                    );
                }
                card = card.push(head);
            }

            for row in *rows {
                let mut line = Row::new().spacing(spacing::MD);
                for cell in *row {
                    line = line.push(
                        Text::new(*cell)
                            .size(typography::BODY)
                            .color(palette::TEXT_SECONDARY)
                            .width(Length::FillPortion(1)),
                    );
                }
                card = card.push(line);
            }

            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        }
        Block::Footnote(text) => Container::new(
            Text::new(*text)
                .size(typography::CAPTION)
                .color(palette::TEXT_MUTED),
        )
        .padding([spacing::XL, 0.0])
        .into(),
    }
}

fn card_icon<'a>(icon: &fn() -> iced::widget::svg::Svg<'static>) -> Element<'a, Message> {
    Container::new(
        icons::sized(icon(), sizing::ICON_MD).style(styles::overlay::icon(palette::CYAN)),
    )
    .padding(spacing::SM)
    .style(icon_box)
    .into()
}

fn icon_box(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: 0.15,
            ..palette::CYAN
        })),
        border: iced::Border {
            color: palette::CYAN,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Cyan => palette::CYAN,
        Accent::Magenta => palette::MAGENTA,
        Accent::Green => palette::GREEN,
    }
}
