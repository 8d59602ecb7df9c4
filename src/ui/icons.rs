// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are stroke-based vector art embedded at compile time via
//! `include_bytes!`; handles are cached using `OnceLock` so each icon is
//! parsed once per process. All icons use `currentColor` strokes so they can
//! be tinted with [`crate::ui::styles::overlay::icon`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_modal`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(chevron_left, "chevron-left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron-right.svg", "Chevron pointing right.");
define_icon!(arrow_left, "arrow-left.svg", "Arrow pointing left.");
define_icon!(arrow_right, "arrow-right.svg", "Arrow pointing right.");
define_icon!(cross, "cross.svg", "Diagonal cross (close).");
define_icon!(home, "home.svg", "House silhouette.");
define_icon!(terminal, "terminal.svg", "Terminal prompt.");
define_icon!(rocket, "rocket.svg", "Launching rocket.");
define_icon!(zap, "zap.svg", "Lightning bolt.");
define_icon!(layers, "layers.svg", "Stacked layers.");
define_icon!(bar_chart, "bar-chart.svg", "Vertical bar chart.");
define_icon!(users, "users.svg", "Group of people.");
define_icon!(school, "school.svg", "Graduation building.");
define_icon!(book_open, "book-open.svg", "Open book.");
define_icon!(trending_down, "trending-down.svg", "Falling trend line.");
define_icon!(trending_up, "trending-up.svg", "Rising trend line.");
define_icon!(gamepad, "gamepad.svg", "Game controller.");
define_icon!(microscope, "microscope.svg", "Laboratory microscope.");
define_icon!(lightbulb, "lightbulb.svg", "Light bulb.");
define_icon!(check_circle, "check-circle.svg", "Circled check mark.");
define_icon!(info_circle, "info-circle.svg", "Circled information mark.");
define_icon!(
    alert_triangle,
    "alert-triangle.svg",
    "Triangular warning sign."
);
define_icon!(alert_circle, "alert-circle.svg", "Circled exclamation mark.");
define_icon!(mail, "mail.svg", "Envelope.");

/// Brand wordmark (hex emblem plus signal lines). Lives with the branding
/// assets rather than the icon set; not square, so size it explicitly.
pub fn wordmark() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/branding/wordmark.svg");
    let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
    Svg::new(handle.clone())
}

/// Sizes an icon to a square of the given side length.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_load_without_panicking() {
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = cross();
        let _ = home();
        let _ = rocket();
        let _ = check_circle();
    }

    #[test]
    fn sized_icon_builds() {
        let _ = sized(arrow_right(), 24.0);
    }
}
