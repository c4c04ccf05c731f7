// SPDX-License-Identifier: MPL-2.0
//! `kilau_a11y` is the accessibility and internationalization core of the
//! Kilau portfolio site.
//!
//! It provides reactive persistent settings with a five-language translation
//! catalog, screen-reader announcements, and keyboard focus trapping, all
//! headless and host-agnostic.

#![doc(html_root_url = "https://docs.rs/kilau_a11y/0.1.0")]

pub mod a11y;
pub mod derived;
pub mod error;
pub mod events;
pub mod i18n;
pub mod paths;
pub mod presentation;
pub mod settings;
pub mod storage;
pub mod store;

#[cfg(test)]
pub mod test_utils;
