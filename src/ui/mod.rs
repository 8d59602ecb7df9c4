// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sections`] - Landing sections (hero through footer)
//! - [`deck`] - Fullscreen technical-requirements slide deck
//!
//! # Dialogs
//!
//! - [`beta_modal`] - Beta-signup form with submission lifecycle
//! - [`carousel_modal`] - Sneak-peek preview carousel
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (nav-hide timeout)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icon loading and rendering
//! - [`navbar`] - Landing navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod beta_modal;
pub mod carousel_modal;
pub mod deck;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
