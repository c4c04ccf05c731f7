// SPDX-License-Identifier: MPL-2.0
//! User-facing accessibility settings.
//!
//! Six settings persist across sessions: theme, language, font size, and
//! the reduced-motion, high-contrast, and focus-visible switches. The
//! [`SettingsContext`] owns their stores and everything derived from them.
//!
//! # Components
//!
//! - [`theme`] - `Theme` enum and its presentation slugs
//! - [`font_scale`] - clamped font size percentage and its bounds
//! - [`system`] - host-fed environment preferences
//! - [`context`] - `SettingsContext` tying the stores together
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//! use kilau_a11y::events::EventBus;
//! use kilau_a11y::settings::{SettingsContext, Theme};
//! use kilau_a11y::storage::MemoryStorage;
//!
//! let context = SettingsContext::new(Rc::new(MemoryStorage::new()), EventBus::new());
//! context.theme().set(Theme::Dark);
//! assert_eq!(context.theme().get(), Theme::Dark);
//! ```

pub mod context;
pub mod font_scale;
pub mod system;
pub mod theme;

pub use context::{PresentationBinding, SettingsContext, RESET_ANNOUNCEMENT};
pub use font_scale::FontScale;
pub use system::{SystemColorScheme, SystemPreferences};
pub use theme::Theme;
