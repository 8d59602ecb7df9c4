// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (neon accents over a deep-space background)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use odyssey_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent panel color
let panel_bg = Color {
    a: opacity::PANEL,
    ..palette::PANEL
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Background scale (deep-space navy)
    pub const DEEP: Color = Color::from_rgb(0.008, 0.031, 0.063);
    pub const PANEL: Color = Color::from_rgb(0.039, 0.078, 0.157);
    pub const PANEL_RAISED: Color = Color::from_rgb(0.055, 0.11, 0.21);

    // Brand colors (neon accents)
    pub const CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0);
    pub const BLUE: Color = Color::from_rgb(0.0, 0.4, 1.0);
    pub const MAGENTA: Color = Color::from_rgb(1.0, 0.0, 1.0);

    // Semantic colors
    pub const GREEN: Color = Color::from_rgb(0.0, 1.0, 0.533);
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.42, 0.208);
    pub const GOLD: Color = Color::from_rgb(1.0, 0.843, 0.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.0, 0.392);

    // Text scale (white at descending emphasis)
    pub const TEXT_PRIMARY: Color = WHITE;
    pub const TEXT_SECONDARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);
    pub const TEXT_MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.4);

    // Border glow (translucent cyan)
    pub const BORDER_GLOW: Color = Color::from_rgba(0.0, 1.0, 1.0, 0.3);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const GLOW_SUBTLE: f32 = 0.05;
    pub const GLOW_SOFT: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for translucent panels and the nav pill.
    pub const PANEL: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // 10 units, vertical rhythm between sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 44.0;

    // Deck navigation chrome
    pub const NAV_BUTTON: f32 = 48.0;
    pub const NAV_DOT: f32 = 12.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;
    pub const COUNTER_WIDTH: f32 = 80.0;

    // Component widths
    pub const MODAL_WIDTH: f32 = 520.0;
    pub const CAROUSEL_WIDTH: f32 = 960.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_WIDTH: f32 = 1080.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy.
    //!
    //! - Display/Titles: headings (hero, slide titles, section headings)
    //! - Body: primary content text
    //! - Caption: badges, counters, supporting text

    /// Display - Hero headline and deck cover title
    pub const DISPLAY: f32 = 56.0;

    /// Large title - Slide and section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Medium title - Modal headings, metric values
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Subtitles, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, counters, fine print
    pub const CAPTION: f32 = 12.0;

    /// Fine print - Privacy note, footer legal line
    pub const FINE: f32 = 10.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Card outlines, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Navigation buttons, emphasis outlines
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Cyan glow used behind active navigation affordances.
    pub const GLOW: Shadow = Shadow {
        color: palette::BORDER_GLOW,
        offset: Vector::ZERO,
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PANEL > 0.0 && opacity::PANEL < 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::CAROUSEL_WIDTH > sizing::MODAL_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::CYAN.g >= 0.0 && palette::CYAN.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn background_scale_darkens_toward_deep() {
        assert!(palette::DEEP.b < palette::PANEL.b);
        assert!(palette::PANEL.b < palette::PANEL_RAISED.b);
    }
}
