// SPDX-License-Identifier: MPL-2.0

//! Visual theme selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual theme applied to the page.
///
/// The wire form is the kebab-case slug (`light`, `dark`, `retro`,
/// `high-contrast`, `blue-light`), which doubles as the suffix of the
/// `theme-*` presentation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Bright default palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
    /// Warm CRT-inspired palette.
    Retro,
    /// Maximum-contrast palette for low vision.
    HighContrast,
    /// Reduced blue light for evening reading.
    BlueLight,
}

impl Theme {
    /// All themes, in widget display order.
    pub const ALL: [Theme; 5] = [
        Theme::Light,
        Theme::Dark,
        Theme::Retro,
        Theme::HighContrast,
        Theme::BlueLight,
    ];

    /// The persisted slug, identical to the serde form.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Retro => "retro",
            Theme::HighContrast => "high-contrast",
            Theme::BlueLight => "blue-light",
        }
    }

    /// Class placed on the page body while this theme is active.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
            Theme::Retro => "theme-retro",
            Theme::HighContrast => "theme-high-contrast",
            Theme::BlueLight => "theme-blue-light",
        }
    }

    /// Catalog key of the localized theme name.
    #[must_use]
    pub fn name_key(self) -> &'static str {
        match self {
            Theme::Light => "themeLight",
            Theme::Dark => "themeDark",
            Theme::Retro => "themeRetro",
            Theme::HighContrast => "themeHighContrast",
            Theme::BlueLight => "themeBlueLight",
        }
    }

    /// Catalog key of the localized theme description.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            Theme::Light => "themeLightDesc",
            Theme::Dark => "themeDarkDesc",
            Theme::Retro => "themeRetroDesc",
            Theme::HighContrast => "themeHighContrastDesc",
            Theme::BlueLight => "themeBlueLightDesc",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
