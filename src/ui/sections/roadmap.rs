// SPDX-License-Identifier: MPL-2.0
//! Roadmap section: four dated milestones toward launch.

use super::{heading, Message, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

struct Milestone {
    date_key: &'static str,
    title_key: &'static str,
    body_key: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        date_key: "roadmap-item-beta-date",
        title_key: "roadmap-item-beta-title",
        body_key: "roadmap-item-beta-body",
    },
    Milestone {
        date_key: "roadmap-item-mvp-date",
        title_key: "roadmap-item-mvp-title",
        body_key: "roadmap-item-mvp-body",
    },
    Milestone {
        date_key: "roadmap-item-launch-date",
        title_key: "roadmap-item-launch-title",
        body_key: "roadmap-item-launch-body",
    },
    Milestone {
        date_key: "roadmap-item-expansion-date",
        title_key: "roadmap-item-expansion-title",
        body_key: "roadmap-item-expansion-body",
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut timeline = Column::new().spacing(spacing::LG);
    for milestone in &MILESTONES {
        let content = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr(milestone.date_key))
                    .size(typography::CAPTION)
                    .color(palette::MAGENTA),
            )
            .push(
                Text::new(ctx.i18n.tr(milestone.title_key))
                    .size(typography::TITLE_SM)
                    .color(palette::TEXT_PRIMARY),
            )
            .push(
                Text::new(ctx.i18n.tr(milestone.body_key))
                    .size(typography::BODY)
                    .color(palette::TEXT_SECONDARY),
            );

        timeline = timeline.push(
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
            Some("roadmap-badge"),
            "roadmap-heading",
            palette::MAGENTA,
        ))
        .push(timeline)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn roadmap_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
