// SPDX-License-Identifier: MPL-2.0
//! Fixed slide content for the technical-requirements deck.
//!
//! The deck is a compiled-in, English-language document: nineteen slides
//! covering every screen and system of The Odyssey's UI specification.
//! Chrome labels are localized; the document body is not, matching the
//! published requirements document.

use crate::ui::icons;
use iced::widget::svg::Svg;

/// Marker tags attached to badges and requirement items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    New,
    Updated,
    Required,
    Chapter3,
}

impl Tag {
    /// Short uppercase label shown inside the tag chip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tag::New => "NEW",
            Tag::Updated => "UPDATED",
            Tag::Required => "REQUIRED",
            Tag::Chapter3 => "CHAPTER 3",
        }
    }
}

/// Accent color role for cover stats and status chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Magenta,
    Green,
}

/// A headline number on the cover slide.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// A single requirement line, optionally tagged.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub text: &'static str,
    pub tag: Option<Tag>,
}

const fn item(text: &'static str) -> Item {
    Item { text, tag: None }
}

const fn tagged(text: &'static str, tag: Tag) -> Item {
    Item {
        text,
        tag: Some(tag),
    }
}

/// Content blocks a slide is composed of.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Headline numbers (cover slide).
    Stats(&'static [Stat]),
    /// Requirement card with an icon, title, and bullet items.
    Card {
        icon: fn() -> Svg<'static>,
        title: &'static str,
        items: &'static [Item],
    },
    /// Two-column specification table with an icon and title.
    Table {
        icon: fn() -> Svg<'static>,
        title: &'static str,
        header: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    /// Small footer line (cover slide colophon).
    Footnote(&'static str),
}

/// Layout archetype of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Centered cover with headline stats.
    Cover,
    /// Header plus content grid.
    Standard,
    /// Centered closing slide.
    Closing,
}

/// One slide of the deck.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub badge: &'static str,
    pub badge_tag: Option<Tag>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub layout: Layout,
    pub blocks: &'static [Block],
}

/// Number of slides in the deck.
#[must_use]
pub fn total() -> usize {
    SLIDES.len()
}

/// The complete requirements deck.
pub static SLIDES: &[Slide] = &[
    // Cover
    Slide {
        badge: "Technical Requirements Document v0.6",
        badge_tag: None,
        title: "A ROS 2 ODYSSEY",
        subtitle: "Complete UI/UX Specification for Unity Development",
        layout: Layout::Cover,
        blocks: &[
            Block::Stats(&[
                Stat {
                    value: "90+",
                    label: "UI Components",
                    accent: Accent::Cyan,
                },
                Stat {
                    value: "3",
                    label: "Chapters",
                    accent: Accent::Magenta,
                },
                Stat {
                    value: "12",
                    label: "Core Systems",
                    accent: Accent::Green,
                },
            ]),
            Block::Footnote("Ubuntu 24.04 LTS · Unity 2022.3.62f3 · 1920×1080 · TRD v0.6"),
        ],
    },
    // Screen 01: Main Menu
    Slide {
        badge: "Screen 01",
        badge_tag: None,
        title: "Main Menu",
        subtitle: "Primary entry point with 4 navigation options",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::layers,
            title: "Specifications",
            header: &["Element", "Requirement"],
            rows: &[
                &["Level Selection", "Navigate to chapter/level picker with scores"],
                &["Settings", "Audio, Video, Language, Accessibility"],
                &["Knowledge Base", "Access collected KB entries"],
                &["Quit Game", "Exit application with confirmation"],
                &["Background", "Animated with Odie robot character"],
                &["Version Tag", "Display build version (alpha 2.23)"],
            ],
        }],
    },
    // Screen 02: Level Selection
    Slide {
        badge: "Screen 02",
        badge_tag: None,
        title: "Level Selection",
        subtitle: "Chapter and level picker with player scores",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::gamepad,
            title: "Requirements",
            items: &[
                item("Display all available chapters/levels"),
                tagged("Show player score below each level", Tag::New),
                item("Star rating system (3 stars max)"),
                item("Lock indicator for incomplete prerequisites"),
                item("Chapter thumbnails or icons"),
            ],
        }],
    },
    // Screen 03: Settings
    Slide {
        badge: "Screen 03",
        badge_tag: None,
        title: "Settings Menu",
        subtitle: "Audio, Video, Language, and Accessibility options",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::layers,
            title: "Settings Categories",
            header: &["Category", "Options"],
            rows: &[
                &["Audio", "Music Volume, SFX Volume"],
                &["Video", "Resolution, Quality, Fullscreen"],
                &["Language", "LeanLocalization dropdown"],
                &["Accessibility", "Colorblind Mode, Text Scale"],
            ],
        }],
    },
    // Screen 04: In-Game HUD
    Slide {
        badge: "Screen 04",
        badge_tag: None,
        title: "In-Game HUD",
        subtitle: "Persistent heads-up display during gameplay",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::terminal,
            title: "HUD Elements",
            items: &[
                item("Settings button (top-left)"),
                item("Inventory/KB button (top-left)"),
                item("Mission panel (expandable, right side)"),
                tagged("Score display", Tag::New),
                tagged("Hint request button", Tag::New),
                item("Timer display (when active)"),
            ],
        }],
    },
    // Screen 05: Mission System
    Slide {
        badge: "Screen 05",
        badge_tag: None,
        title: "Mission System UI",
        subtitle: "Vertical mission list with dynamic states",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::check_circle,
            title: "Mission States",
            header: &["State", "Visual", "Behavior"],
            rows: &[
                &["Inactive", "Hidden/Gray", "Not yet triggered"],
                &["Active", "Highlighted", "Current objective"],
                &["Completed", "Checkmark", "Objective achieved"],
            ],
        }],
    },
    // Screen 06: Scoring
    Slide {
        badge: "Screen 06",
        badge_tag: Some(Tag::New),
        title: "Scoring System",
        subtitle: "Player rating and certification tracking",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::bar_chart,
            title: "Scoring Mechanics",
            items: &[
                item("Score starts high, decreases with hints"),
                item("Level-specific efficiency scoring"),
                item("Display rating at end of each level"),
                item("Certification unlock (post-MVP)"),
            ],
        }],
    },
    // Screen 07: Hints
    Slide {
        badge: "Screen 07",
        badge_tag: Some(Tag::New),
        title: "Hints System",
        subtitle: "Player assistance with score penalty",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::lightbulb,
            title: "Hint Requirements",
            items: &[
                item("Display hints on player request"),
                item("Progressive hint system (multiple levels)"),
                item("Clear score penalty warning"),
                item("Each hint has associated point cost"),
            ],
        }],
    },
    // Screen 08: Terminal
    Slide {
        badge: "Screen 08",
        badge_tag: None,
        title: "Terminal Interface",
        subtitle: "ROS 2 command input and output display",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::terminal,
            title: "Terminal Modes",
            items: &[
                item("In-Game Terminal: streamed output, scrollable"),
                item("External Terminal: system terminal integration"),
            ],
        }],
    },
    // Screen 09: Knowledge Base
    Slide {
        badge: "Screen 09",
        badge_tag: None,
        title: "Knowledge Base",
        subtitle: "Educational content discovery",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::book_open,
            title: "KB Structure",
            header: &["Field", "Description"],
            rows: &[
                &["ID", "Internal identifier"],
                &["Title", "LeanLocalization key"],
                &["IsUnlocked", "Visibility flag"],
            ],
        }],
    },
    // Screen 10: Inventory
    Slide {
        badge: "Screen 10",
        badge_tag: None,
        title: "Inventory System",
        subtitle: "Datapads, currency, and items",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::layers,
            title: "Inventory Features",
            items: &[
                item("Stores: Datapads, Currency, Story Items"),
                item("Grid or list layout"),
                item("Scrollable content viewer"),
            ],
        }],
    },
    // Screen 11: Dialogue
    Slide {
        badge: "Screen 11",
        badge_tag: None,
        title: "Dialogue Bubbles",
        subtitle: "World-anchored speech bubbles",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::users,
            title: "Dialogue Requirements",
            items: &[
                item("Speech bubble based"),
                tagged("Typewriter effect", Tag::Required),
                item("LeanLocalization text"),
            ],
        }],
    },
    // Screen 12: Notifications
    Slide {
        badge: "Screen 12",
        badge_tag: None,
        title: "Notifications",
        subtitle: "Feedback for unlocks and alerts",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::alert_circle,
            title: "Notification Types",
            header: &["Type", "Trigger"],
            rows: &[
                &["Success", "Mission complete"],
                &["Info", "KB unlock"],
                &["Warning", "Time low"],
            ],
        }],
    },
    // Screen 13: Space/RTS
    Slide {
        badge: "Screen 13",
        badge_tag: Some(Tag::Chapter3),
        title: "Space/RTS Interface",
        subtitle: "Top-down strategy view",
        layout: Layout::Standard,
        blocks: &[Block::Card {
            icon: icons::rocket,
            title: "Chapter 3 Specific UI",
            items: &[
                tagged("Resources counters", Tag::New),
                item("Drones shown on top-down RTS map"),
                item("Minimap with unit positions"),
                item("Unit selection panel"),
            ],
        }],
    },
    // System: Audio
    Slide {
        badge: "System Spec",
        badge_tag: None,
        title: "Audio Requirements",
        subtitle: "Sound effects for UI feedback",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::zap,
            title: "Required Audio Assets",
            header: &["Sound", "Trigger"],
            rows: &[
                &["UI Click", "Button press"],
                &["Dialogue Typewriter", "Letter reveal"],
                &["Mission Complete", "Objective achieved"],
            ],
        }],
    },
    // System: Save/Load
    Slide {
        badge: "System Spec",
        badge_tag: None,
        title: "Save/Load System",
        subtitle: "Persistent game state",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::layers,
            title: "Saved Data",
            header: &[],
            rows: &[
                &["Mission States", "Inventory"],
                &["KB Flags", "Chapter State"],
                &["Scores", "Player Settings"],
            ],
        }],
    },
    // Summary
    Slide {
        badge: "Summary",
        badge_tag: None,
        title: "Technical Summary",
        subtitle: "Overview",
        layout: Layout::Standard,
        blocks: &[
            Block::Card {
                icon: icons::check_circle,
                title: "Platform & Performance",
                items: &[
                    item("Platform: Ubuntu 24.04 LTS"),
                    item("Engine: Unity 2022.3.62f3"),
                    item("Render Pipeline: URP"),
                ],
            },
            Block::Card {
                icon: icons::bar_chart,
                title: "UI Module Count",
                items: &[item("90+ total components across 3 chapters")],
            },
        ],
    },
    // Reference: Hotkeys
    Slide {
        badge: "Reference",
        badge_tag: None,
        title: "Quick Access Keys",
        subtitle: "Recommended hotkeys",
        layout: Layout::Standard,
        blocks: &[Block::Table {
            icon: icons::terminal,
            title: "Recommended Hotkeys",
            header: &["Key", "Action"],
            rows: &[
                &["ESC", "Pause"],
                &["TAB", "Terminal"],
                &["I", "Inventory"],
            ],
        }],
    },
    // Closing
    Slide {
        badge: "End of Specification",
        badge_tag: None,
        title: "Ready for Development",
        subtitle: "",
        layout: Layout::Closing,
        blocks: &[Block::Card {
            icon: icons::check_circle,
            title: "STATUS",
            items: &[item("Complete")],
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_nineteen_slides() {
        assert_eq!(total(), 19);
    }

    #[test]
    fn cover_and_closing_frame_the_deck() {
        assert_eq!(SLIDES.first().unwrap().layout, Layout::Cover);
        assert_eq!(SLIDES.last().unwrap().layout, Layout::Closing);
        assert!(SLIDES[1..18]
            .iter()
            .all(|s| s.layout == Layout::Standard));
    }

    #[test]
    fn every_slide_has_a_title_and_badge() {
        for slide in SLIDES {
            assert!(!slide.title.is_empty());
            assert!(!slide.badge.is_empty());
        }
    }

    #[test]
    fn screen_slides_are_numbered_in_order() {
        let screens: Vec<&str> = SLIDES
            .iter()
            .filter(|s| s.badge.starts_with("Screen"))
            .map(|s| s.badge)
            .collect();
        assert_eq!(screens.len(), 13);
        assert_eq!(screens[0], "Screen 01");
        assert_eq!(screens[12], "Screen 13");
    }

    #[test]
    fn tag_labels_are_uppercase() {
        for tag in [Tag::New, Tag::Updated, Tag::Required, Tag::Chapter3] {
            assert_eq!(tag.label(), tag.label().to_uppercase());
        }
    }
}
