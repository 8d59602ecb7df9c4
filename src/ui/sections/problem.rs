// SPDX-License-Identifier: MPL-2.0
//! Problem section: three cards on why traditional ROS 2 teaching falls short.

use super::{heading, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

struct Card {
    icon: fn() -> Svg<'static>,
    title_key: &'static str,
    body_key: &'static str,
}

const CARDS: [Card; 3] = [
    Card {
        icon: icons::school,
        title_key: "problem-card-scale-title",
        body_key: "problem-card-scale-body",
    },
    Card {
        icon: icons::book_open,
        title_key: "problem-card-skills-title",
        body_key: "problem-card-skills-body",
    },
    Card {
        icon: icons::trending_down,
        title_key: "problem-card-motivation-title",
        body_key: "problem-card-motivation-body",
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    for card in &CARDS {
        let content = Column::new()
            .spacing(spacing::SM)
            .push(
                icons::sized((card.icon)(), sizing::ICON_LG)
                    .style(styles::overlay::icon(palette::ORANGE)),
            )
            .push(
                Text::new(ctx.i18n.tr(card.title_key))
                    .size(typography::TITLE_SM)
                    .color(palette::TEXT_PRIMARY),
            )
            .push(
                Text::new(ctx.i18n.tr(card.body_key))
                    .size(typography::BODY)
                    .color(palette::TEXT_SECONDARY),
            );

        cards = cards.push(
            Container::new(content)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            ctx,
            Some("problem-badge"),
            "problem-heading",
            palette::ORANGE,
        ))
        .push(cards)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn problem_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
