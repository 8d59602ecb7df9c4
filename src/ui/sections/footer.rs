// SPDX-License-Identifier: MPL-2.0
//! Footer: venture tagline, the requirements-deck entry point, and contact.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tagline = Column::new()
        .spacing(spacing::SM)
        .push(
            icons::wordmark()
                .width(Length::Fixed(sizing::ICON_XL * 3.0))
                .height(Length::Fixed(sizing::ICON_XL)),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-tagline"))
                .size(typography::BODY)
                .color(palette::TEXT_MUTED),
        )
        .width(Length::FillPortion(2));

    // The deck lives behind this quiet link, exactly like the original site.
    let resources = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("footer-resources"))
                .size(typography::BODY)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            button(Text::new(ctx.i18n.tr("footer-trd-link")).size(typography::BODY))
                .on_press(Message::OpenDeck)
                .padding(0)
                .style(styles::button::text_link),
        )
        .width(Length::FillPortion(1));

    let contact = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("footer-contact"))
                .size(typography::BODY)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    icons::sized(icons::mail(), sizing::ICON_SM)
                        .style(styles::overlay::icon(palette::CYAN)),
                )
                .push(
                    Text::new("ludobotics@gmail.com")
                        .size(typography::BODY)
                        .color(palette::TEXT_SECONDARY),
                ),
        )
        .width(Length::FillPortion(1));

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(tagline)
        .push(resources)
        .push(contact);

    let rights = Text::new(ctx.i18n.tr("footer-rights"))
        .size(typography::CAPTION)
        .color(palette::TEXT_MUTED);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(columns)
            .push(rights),
    )
    .width(Length::Fill)
    .padding([spacing::XL, 0.0])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
