// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! The showcase is designed dark-first (neon accents over deep space); the
//! light scheme keeps the brand hues readable on bright surfaces.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_accent: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,

    // Overlay colors
    pub backdrop: Color,
    pub border_glow: Color,
}

impl ColorScheme {
    /// Dark theme (the product's native look).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::DEEP,
            surface_secondary: palette::PANEL,
            surface_raised: palette::PANEL_RAISED,

            text_primary: palette::TEXT_PRIMARY,
            text_secondary: palette::TEXT_SECONDARY,
            text_muted: palette::TEXT_MUTED,

            brand_primary: palette::CYAN,
            brand_secondary: palette::BLUE,
            brand_accent: palette::MAGENTA,

            error: palette::RED,
            warning: palette::ORANGE,
            success: palette::GREEN,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::DEEP
            },
            border_glow: palette::BORDER_GLOW,
        }
    }

    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: Color::from_rgb(0.93, 0.96, 0.98),
            surface_raised: Color::from_rgb(0.88, 0.93, 0.96),

            text_primary: Color::from_rgb(0.05, 0.1, 0.15),
            text_secondary: Color::from_rgb(0.25, 0.32, 0.4),
            text_muted: Color::from_rgb(0.5, 0.56, 0.62),

            brand_primary: Color::from_rgb(0.0, 0.55, 0.6),
            brand_secondary: palette::BLUE,
            brand_accent: Color::from_rgb(0.7, 0.0, 0.7),

            error: palette::RED,
            warning: palette::ORANGE,
            success: Color::from_rgb(0.0, 0.6, 0.35),

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::WHITE
            },
            border_glow: Color::from_rgba(0.0, 0.55, 0.6, 0.3),
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to a concrete color scheme.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_has_deep_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.1);
    }

    #[test]
    fn light_theme_has_bright_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn both_themes_keep_cyan_leaning_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Brand primary stays blue/green dominant in both themes
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
