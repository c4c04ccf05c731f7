// SPDX-License-Identifier: MPL-2.0

//! Page presentation layer.
//!
//! Settings become visible by mutating a page: theme and mode classes on
//! the body, `lang`/`dir` attributes and a font-size percentage on the
//! root. The [`PresentationSink`] trait is the seam between the stores and
//! whatever actually renders; appliers in this module translate setting
//! values into sink calls and are idempotent, so replaying the current
//! value is always safe.

pub mod page;

pub use page::PageModel;

use crate::i18n::Language;
use crate::settings::font_scale::FontScale;
use crate::settings::theme::Theme;

/// Body classes toggled by the boolean settings.
pub mod classes {
    /// Present while animations should be minimized.
    pub const REDUCED_MOTION: &str = "reduced-motion";

    /// Present while the high-contrast palette overlay is active.
    pub const HIGH_CONTRAST: &str = "high-contrast-mode";

    /// Present while focus indicators are forced visible.
    pub const FOCUS_VISIBLE: &str = "focus-visible";
}

/// Receiver of presentation changes.
///
/// Body classes behave like a set: adding a present class or removing an
/// absent one is a no-op. Implementations that cannot render (headless
/// hosts, servers) can ignore every call; [`NullSink`] does exactly that.
pub trait PresentationSink {
    /// Adds `class` to the page body's class list.
    fn add_body_class(&mut self, class: &str);

    /// Removes `class` from the page body's class list.
    fn remove_body_class(&mut self, class: &str);

    /// Sets an attribute on the document root.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Sets the root font size as a percentage of the page's base size.
    fn set_root_font_size(&mut self, percent: f32);
}

/// Sink that ignores every call.
///
/// Stands in for a real page wherever nothing can be rendered, so the
/// store wiring never needs an environment check.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn add_body_class(&mut self, _class: &str) {}

    fn remove_body_class(&mut self, _class: &str) {}

    fn set_root_attribute(&mut self, _name: &str, _value: &str) {}

    fn set_root_font_size(&mut self, _percent: f32) {}
}

/// Applies `theme` to the body class list.
///
/// Every theme class is removed before the active one is added, so the
/// body carries exactly one `theme-*` class regardless of history.
pub fn apply_theme(sink: &mut dyn PresentationSink, theme: Theme) {
    for candidate in Theme::ALL {
        sink.remove_body_class(candidate.css_class());
    }
    sink.add_body_class(theme.css_class());
}

/// Applies `language` to the document root.
///
/// Sets the `lang` attribute to the language code and `dir` to its text
/// direction.
pub fn apply_language(sink: &mut dyn PresentationSink, language: Language) {
    sink.set_root_attribute("lang", language.code());
    sink.set_root_attribute("dir", language.direction().as_str());
}

/// Applies a font size percentage to the document root.
///
/// The raw store value is clamped into the valid scale range first, so a
/// wild in-memory value can never blow up the page.
pub fn apply_font_size(sink: &mut dyn PresentationSink, percent: f32) {
    sink.set_root_font_size(FontScale::new(percent).value());
}

/// Toggles the reduced-motion body class.
pub fn apply_motion_preference(sink: &mut dyn PresentationSink, reduced: bool) {
    set_body_flag(sink, classes::REDUCED_MOTION, reduced);
}

/// Toggles the high-contrast body class.
pub fn apply_high_contrast(sink: &mut dyn PresentationSink, enabled: bool) {
    set_body_flag(sink, classes::HIGH_CONTRAST, enabled);
}

/// Toggles the focus-visible body class.
pub fn apply_focus_visible(sink: &mut dyn PresentationSink, enabled: bool) {
    set_body_flag(sink, classes::FOCUS_VISIBLE, enabled);
}

fn set_body_flag(sink: &mut dyn PresentationSink, class: &str, on: bool) {
    if on {
        sink.add_body_class(class);
    } else {
        sink.remove_body_class(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_theme_leaves_exactly_one_theme_class() {
        let mut page = PageModel::new();

        apply_theme(&mut page, Theme::Dark);
        apply_theme(&mut page, Theme::Retro);

        assert!(!page.has_body_class("theme-dark"));
        assert!(page.has_body_class("theme-retro"));
        let theme_classes = page
            .body_classes()
            .iter()
            .filter(|class| class.starts_with("theme-"))
            .count();
        assert_eq!(theme_classes, 1);
    }

    #[test]
    fn apply_theme_is_idempotent() {
        let mut page = PageModel::new();

        apply_theme(&mut page, Theme::HighContrast);
        let first = page.body_classes();
        apply_theme(&mut page, Theme::HighContrast);

        assert_eq!(page.body_classes(), first);
    }

    #[test]
    fn apply_language_sets_lang_and_direction() {
        let mut page = PageModel::new();

        apply_language(&mut page, Language::Ar);
        assert_eq!(page.root_attribute("lang"), Some("ar"));
        assert_eq!(page.root_attribute("dir"), Some("rtl"));

        apply_language(&mut page, Language::En);
        assert_eq!(page.root_attribute("lang"), Some("en"));
        assert_eq!(page.root_attribute("dir"), Some("ltr"));
    }

    #[test]
    fn apply_font_size_clamps_wild_values() {
        let mut page = PageModel::new();

        apply_font_size(&mut page, 400.0);
        assert_eq!(page.root_font_size(), Some(150.0));

        apply_font_size(&mut page, 10.0);
        assert_eq!(page.root_font_size(), Some(75.0));

        apply_font_size(&mut page, 112.5);
        assert_eq!(page.root_font_size(), Some(112.5));
    }

    #[test]
    fn boolean_appliers_toggle_their_classes() {
        let mut page = PageModel::new();

        apply_motion_preference(&mut page, true);
        apply_high_contrast(&mut page, true);
        apply_focus_visible(&mut page, true);
        assert!(page.has_body_class(classes::REDUCED_MOTION));
        assert!(page.has_body_class(classes::HIGH_CONTRAST));
        assert!(page.has_body_class(classes::FOCUS_VISIBLE));

        apply_motion_preference(&mut page, false);
        apply_high_contrast(&mut page, false);
        apply_focus_visible(&mut page, false);
        assert!(!page.has_body_class(classes::REDUCED_MOTION));
        assert!(!page.has_body_class(classes::HIGH_CONTRAST));
        assert!(!page.has_body_class(classes::FOCUS_VISIBLE));
    }

    #[test]
    fn removing_an_absent_class_is_a_no_op() {
        let mut page = PageModel::new();

        apply_motion_preference(&mut page, false);
        apply_motion_preference(&mut page, false);

        assert!(page.body_classes().is_empty());
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;

        apply_theme(&mut sink, Theme::BlueLight);
        apply_language(&mut sink, Language::Jp);
        apply_font_size(&mut sink, 130.0);
        apply_focus_visible(&mut sink, true);
    }
}
