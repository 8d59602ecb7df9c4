// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Bundles are embedded from `assets/i18n/` at compile time; an optional
//! runtime directory can override or extend them for custom builds.

pub mod fluent;

pub use fluent::I18n;
