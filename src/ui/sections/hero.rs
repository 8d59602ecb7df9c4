// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, tagline, and the two primary calls to action.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Border, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                icons::sized(icons::terminal(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::GREEN)),
            )
            .push(
                Text::new(ctx.i18n.tr("hero-badge"))
                    .size(typography::CAPTION)
                    .color(palette::CYAN),
            ),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge(palette::CYAN));

    let title = Text::new(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .color(palette::TEXT_PRIMARY);

    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(palette::TEXT_SECONDARY);

    // The "first title" callout keeps the original's orange left rule.
    let callout = Container::new(
        Text::new(ctx.i18n.tr("hero-callout"))
            .size(typography::BODY_LG)
            .color(palette::TEXT_SECONDARY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(|_theme: &iced::Theme| iced::widget::container::Style {
        border: Border {
            color: palette::ORANGE,
            width: 2.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    });

    let join_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                icons::sized(icons::rocket(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::DEEP)),
            )
            .push(Text::new(ctx.i18n.tr("hero-join-beta")).size(typography::BODY_LG)),
    )
    .on_press(Message::OpenBeta)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    let sneak_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("hero-sneak-peek")).size(typography::BODY_LG))
            .push(
                icons::sized(icons::chevron_right(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::CYAN)),
            ),
    )
    .on_press(Message::OpenSneakPeek)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(join_button)
        .push(sneak_button);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(720.0)
        .push(badge)
        .push(title)
        .push(subtitle)
        .push(callout)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
