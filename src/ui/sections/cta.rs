// SPDX-License-Identifier: MPL-2.0
//! Closing call to action.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let join = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                icons::sized(icons::rocket(), sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::DEEP)),
            )
            .push(Text::new(ctx.i18n.tr("cta-button")).size(typography::BODY_LG)),
    )
    .on_press(Message::OpenBeta)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("cta-heading"))
                .size(typography::TITLE_LG)
                .color(palette::TEXT_PRIMARY),
        )
        .push(join);

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SECTION, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn cta_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
