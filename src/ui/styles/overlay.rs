// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for fullscreen chrome and embedded vector art.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

/// Generic style for floating indicators (carousel caption, deck counter).
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL,
            ..palette::PANEL
        })),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            color: palette::BORDER_GLOW,
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Tinted SVG icon style used across overlays and buttons.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
