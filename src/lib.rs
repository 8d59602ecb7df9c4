// SPDX-License-Identifier: MPL-2.0
//! `odyssey_showcase` is the desktop presentation of The Odyssey, a
//! game-based ROS 2 learning platform, built with the Iced GUI framework.
//!
//! It combines the product landing experience with a fullscreen
//! technical-requirements slide deck, a beta-signup form posting to the
//! enrollment endpoint, and a sneak-peek gallery, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/odyssey_showcase/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod signup;
pub mod ui;
