// SPDX-License-Identifier: MPL-2.0
//! Fullscreen technical-requirements deck.
//!
//! The deck pairs a fixed slide document ([`slides`]) with a navigation
//! controller ([`state`]) and a render layer ([`view`]). The controller owns
//! the current index and the auto-hiding chrome; the view paints the active
//! slide and derives everything else (progress, counter, per-edge disabled
//! arrows) from the controller's outputs.

pub mod slides;
pub mod state;
pub mod view;

pub use state::{Effect, Message as NavMessage, State};
pub use view::{view, Message, ViewContext};
