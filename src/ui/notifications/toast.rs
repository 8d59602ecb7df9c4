// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let message_text = i18n.tr(notification.message_key());

        let icon_widget = icons::sized(Self::severity_icon(severity), sizing::ICON_MD)
            .style(styles::overlay::icon(accent_color));

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .color(palette::TEXT_PRIMARY);

        let notification_id = notification.id();
        let dismiss_button = button(
            icons::sized(icons::cross(), sizing::ICON_SM)
                .style(styles::overlay::icon(palette::TEXT_SECONDARY)),
        )
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(styles::button::text_link);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Success => icons::check_circle(),
            Severity::Info => icons::info_circle(),
            Severity::Warning => icons::alert_triangle(),
            Severity::Error => icons::alert_circle(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PANEL)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::GREEN;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn toast_view_renders() {
        let i18n = I18n::default();
        let notification = Notification::success("notification-signup-sent");
        let _element = Toast::view(&notification, &i18n);
    }

    #[test]
    fn overlay_renders_empty_and_populated() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);

        manager.push(Notification::error("error-submit-general"));
        let _populated = Toast::view_overlay(&manager, &i18n);
    }
}
