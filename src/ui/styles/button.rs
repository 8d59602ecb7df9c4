// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, DEEP},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary call-to-action (filled cyan, dark text).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::CYAN)),
            text_color: DEEP,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: 0.85,
                ..palette::CYAN
            })),
            text_color: DEEP,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::GLOW,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::GLOW_SOFT,
                ..palette::CYAN
            })),
            text_color: palette::TEXT_MUTED,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for secondary actions (cyan outline, transparent fill).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::CYAN)),
            text_color: DEEP,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::GLOW,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::TEXT_MUTED,
            border: Border {
                color: Color {
                    a: opacity::GLOW_SOFT,
                    ..palette::CYAN
                },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette::CYAN,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for the circular deck navigation arrows.
///
/// Disabled arrows keep their outline at reduced opacity so the chrome shape
/// stays stable while signalling the boundary.
pub fn nav_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::CYAN)),
            text_color: DEEP,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::GLOW,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: 0.3,
                ..palette::CYAN
            },
            border: Border {
                color: Color {
                    a: 0.3,
                    ..palette::CYAN
                },
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette::CYAN,
            border: Border {
                color: palette::CYAN,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for deck indicator dots; the active dot glows cyan.
pub fn nav_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if active {
            palette::CYAN
        } else if matches!(status, button::Status::Hovered) {
            Color {
                a: 0.5,
                ..palette::TEXT_PRIMARY
            }
        } else {
            palette::TEXT_MUTED
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: fill,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if active { shadow::GLOW } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Style for quiet text-like buttons (links, dismiss affordances).
pub fn text_link(_theme: &Theme, status: button::Status) -> button::Style {
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::CYAN,
        button::Status::Disabled => palette::TEXT_MUTED,
        button::Status::Active => palette::TEXT_SECONDARY,
    };

    button::Style {
        background: None,
        text_color: color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
