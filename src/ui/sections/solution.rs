// SPDX-License-Identifier: MPL-2.0
//! Solution section: the learning-layer pitch and its four value points.

use super::{heading, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::svg::Svg;
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

const VALUES: [(fn() -> Svg<'static>, &str); 4] = [
    (icons::gamepad, "solution-value-doing"),
    (icons::microscope, "solution-value-simulation"),
    (icons::lightbulb, "solution-value-feedback"),
    (icons::trending_up, "solution-value-progression"),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = Text::new(ctx.i18n.tr("solution-body"))
        .size(typography::BODY_LG)
        .color(palette::TEXT_SECONDARY);

    let mut values = Column::new().spacing(spacing::SM);
    for (icon, key) in VALUES {
        values = values.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::sized(icon(), sizing::ICON_SM).style(styles::overlay::icon(palette::CYAN)))
                .push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::BODY)
                        .color(palette::TEXT_SECONDARY),
                ),
        );
    }

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            ctx,
            Some("solution-badge"),
            "solution-heading",
            palette::CYAN,
        ))
        .push(body)
        .push(values)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn solution_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
