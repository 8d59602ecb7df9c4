// SPDX-License-Identifier: MPL-2.0
//! Features section: four product capability cards.

use super::{heading, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

struct Feature {
    icon: fn() -> Svg<'static>,
    title_key: &'static str,
    body_key: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::zap,
        title_key: "features-card-sync-title",
        body_key: "features-card-sync-body",
    },
    Feature {
        icon: icons::layers,
        title_key: "features-card-tracking-title",
        body_key: "features-card-tracking-body",
    },
    Feature {
        icon: icons::bar_chart,
        title_key: "features-card-dashboard-title",
        body_key: "features-card-dashboard-body",
    },
    Feature {
        icon: icons::users,
        title_key: "features-card-teams-title",
        body_key: "features-card-teams-body",
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG);

    // Two rows of two cards
    for pair in FEATURES.chunks(2) {
        let mut row = Row::new().spacing(spacing::LG);
        for feature in pair {
            let content = Column::new()
                .spacing(spacing::SM)
                .push(
                    icons::sized((feature.icon)(), sizing::ICON_LG)
                        .style(styles::overlay::icon(palette::CYAN)),
                )
                .push(
                    Text::new(ctx.i18n.tr(feature.title_key))
                        .size(typography::TITLE_SM)
                        .color(palette::TEXT_PRIMARY),
                )
                .push(
                    Text::new(ctx.i18n.tr(feature.body_key))
                        .size(typography::BODY)
                        .color(palette::TEXT_SECONDARY),
                );

            row = row.push(
                Container::new(content)
                    .width(Length::Fill)
                    .padding(spacing::LG)
                    .style(styles::container::card),
            );
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx, None, "features-heading", palette::CYAN))
        .push(grid)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn features_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
