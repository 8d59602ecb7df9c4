// SPDX-License-Identifier: MPL-2.0
//! Impact section: three headline metrics.

use super::{heading, Message, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

struct Metric {
    value: &'static str,
    label_key: &'static str,
    body_key: &'static str,
}

// Metric values are figures, not copy; they stay unlocalized.
const METRICS: [Metric; 3] = [
    Metric {
        value: "70%",
        label_key: "impact-metric-mastery-label",
        body_key: "impact-metric-mastery-body",
    },
    Metric {
        value: "3×",
        label_key: "impact-metric-retention-label",
        body_key: "impact-metric-retention-body",
    },
    Metric {
        value: "0",
        label_key: "impact-metric-hardware-label",
        body_key: "impact-metric-hardware-body",
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for metric in &METRICS {
        let content = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(metric.value)
                    .size(typography::TITLE_LG)
                    .color(palette::CYAN),
            )
            .push(
                Text::new(ctx.i18n.tr(metric.label_key))
                    .size(typography::TITLE_SM)
                    .color(palette::TEXT_PRIMARY),
            )
            .push(
                Text::new(ctx.i18n.tr(metric.body_key))
                    .size(typography::BODY)
                    .color(palette::TEXT_MUTED),
            );

        row = row.push(
            Container::new(content)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx, None, "impact-heading", palette::CYAN))
        .push(row)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn impact_view_renders() {
        let i18n = I18n::default();
        let _element = view(&ViewContext { i18n: &i18n });
    }
}
