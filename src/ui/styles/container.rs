// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Glowing card surface used for spec cards, problem cards, and features.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL,
            ..palette::PANEL
        })),
        border: Border {
            color: palette::BORDER_GLOW,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Translucent pill surface for the deck navigation chrome.
pub fn nav_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL,
            ..palette::PANEL
        })),
        border: Border {
            color: palette::BORDER_GLOW,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::DEEP
        })),
        ..Default::default()
    }
}

/// Raised modal surface with a glowing outline.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PANEL)),
        border: Border {
            color: palette::BORDER_GLOW,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Badge chip (uppercase kicker above headings).
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLOW_SOFT,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Filled progress segment of the deck progress bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CYAN)),
        ..Default::default()
    }
}

/// Unfilled remainder of the deck progress bar.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLOW_SUBTLE,
            ..palette::CYAN
        })),
        ..Default::default()
    }
}
