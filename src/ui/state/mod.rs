// SPDX-License-Identifier: MPL-2.0
//! Reusable state management types shared across screens.

pub mod nav_hide_timeout;

pub use nav_hide_timeout::NavHideTimeout;
