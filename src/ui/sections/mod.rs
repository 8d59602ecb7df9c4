// SPDX-License-Identifier: MPL-2.0
//! Presentational sections of the landing screen.
//!
//! Sections render static, localized marketing content and emit high-level
//! intents (open a modal, jump to a section, enter the deck). They hold no
//! state of their own; scroll position and modal flags are owned by the app.

pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod impact;
pub mod problem;
pub mod roadmap;
pub mod solution;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};

/// Anchored sections the navbar can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Problem,
    Solution,
    Features,
    Roadmap,
}

impl SectionId {
    /// Approximate vertical position of the section as a fraction of the
    /// landing page height, used for anchor scrolling.
    #[must_use]
    pub fn anchor_fraction(self) -> f32 {
        match self {
            SectionId::Problem => 0.14,
            SectionId::Solution => 0.3,
            SectionId::Features => 0.47,
            SectionId::Roadmap => 0.72,
        }
    }

    /// The i18n key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Problem => "navbar-link-problem",
            SectionId::Solution => "navbar-link-solution",
            SectionId::Features => "navbar-link-features",
            SectionId::Roadmap => "navbar-link-roadmap",
        }
    }
}

/// Intents emitted by landing sections.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Open the beta-signup modal.
    OpenBeta,
    /// Open the sneak-peek carousel modal.
    OpenSneakPeek,
    /// Enter the technical-requirements deck.
    OpenDeck,
}

/// Contextual data needed to render a section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Standard section heading: an uppercase badge chip above a large title.
pub(crate) fn heading<'a>(
    ctx: &ViewContext<'a>,
    badge_key: Option<&str>,
    title_key: &str,
    accent: Color,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if let Some(badge_key) = badge_key {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(badge_key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::badge(accent)),
        );
    }

    column = column.push(
        Text::new(ctx.i18n.tr(title_key))
            .size(typography::TITLE_LG)
            .color(palette::TEXT_PRIMARY),
    );

    Container::new(column).width(Length::Fill).into()
}
