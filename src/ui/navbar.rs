// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for the landing screen.
//!
//! The navbar pins the brand mark, section links, and the two modal entry
//! points to the top of the landing page. Once the page is scrolled past a
//! threshold it switches to a condensed, backed style.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sections::SectionId;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Scroll offset (logical pixels) past which the navbar condenses.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the landing page is scrolled past the threshold.
    pub condensed: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    JumpTo(SectionId),
    OpenSneakPeek,
    OpenBeta,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    JumpTo(SectionId),
    OpenSneakPeek,
    OpenBeta,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::JumpTo(section) => Event::JumpTo(section),
        Message::OpenSneakPeek => Event::OpenSneakPeek,
        Message::OpenBeta => Event::OpenBeta,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = icons::wordmark()
        .width(Length::Fixed(sizing::ICON_LG * 3.0))
        .height(Length::Fixed(sizing::ICON_LG));

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    for section in [
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Features,
        SectionId::Roadmap,
    ] {
        row = row.push(
            button(
                Text::new(ctx.i18n.tr(section.label_key()))
                    .size(typography::BODY)
                    .color(palette::TEXT_SECONDARY),
            )
            .on_press(Message::JumpTo(section))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::text_link),
        );
    }

    let sneak_peek = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("navbar-sneak-peek")).size(typography::CAPTION))
            .push(
                icons::sized(icons::chevron_right(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::CYAN)),
            ),
    )
    .on_press(Message::OpenSneakPeek)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary);

    let join = button(Text::new(ctx.i18n.tr("navbar-join-beta")).size(typography::CAPTION))
        .on_press(Message::OpenBeta)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    row = row.push(sneak_peek).push(join);

    let padding = if ctx.condensed {
        [spacing::SM, spacing::LG]
    } else {
        [spacing::LG, spacing::LG]
    };

    Container::new(row)
        .width(Length::Fill)
        .padding(padding)
        .style(bar_style(ctx.condensed))
        .into()
}

/// Transparent while at the top of the page; backed and hairlined once
/// scrolled.
fn bar_style(condensed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if condensed {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::BACKDROP,
                    ..palette::DEEP
                })),
                border: Border {
                    color: palette::BORDER_GLOW,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}
