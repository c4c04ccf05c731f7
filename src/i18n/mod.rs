// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portfolio UI.
//!
//! This module provides the closed set of supported languages and pure
//! accessors over the embedded translation catalog.
//!
//! # Features
//!
//! - Typed language codes with text-direction metadata
//! - Embedded `.json` translation tables, one per language
//! - Raw-key fallback for missing translations (the UI never renders blank)

pub mod catalog;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{catalog, Catalog};

/// Languages supported by the portfolio UI.
///
/// The set is closed: persistence, the translation catalog, and the
/// presentation layer all agree on exactly these five codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Indonesian, the baseline language of the site.
    #[default]
    Id,
    /// English.
    En,
    /// Japanese.
    Jp,
    /// Korean.
    Kr,
    /// Arabic, the only right-to-left language in the set.
    Ar,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 5] = [
        Language::Id,
        Language::En,
        Language::Jp,
        Language::Kr,
        Language::Ar,
    ];

    /// The wire code, as persisted and as set on the root `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
            Language::Jp => "jp",
            Language::Kr => "kr",
            Language::Ar => "ar",
        }
    }

    /// Parses a wire code. Returns `None` for anything outside the set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Whether the language is written right-to-left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Text direction for the root `dir` attribute.
    #[must_use]
    pub fn direction(self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Horizontal text direction, as exposed on the root `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized string for `key`, or the raw key echoed back when missing.
///
/// A miss logs one warning line to stderr; the caller always receives
/// renderable text.
#[must_use]
pub fn lookup<'a>(key: &'a str, language: Language) -> &'a str {
    catalog().lookup(key, language)
}

/// The full key → string table for a language.
#[must_use]
pub fn all_translations(language: Language) -> &'static HashMap<String, String> {
    catalog().all(language)
}
