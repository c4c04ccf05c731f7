// SPDX-License-Identifier: MPL-2.0

//! Application-wide settings context.
//!
//! One [`SettingsContext`] owns the six persistent stores, the system
//! preference snapshot, the values derived from them, and the
//! announcement log. Hosts build exactly one per page (or per test) and
//! wire it to a presentation sink with [`bind`](SettingsContext::bind).

use std::cell::RefCell;
use std::rc::Rc;

use crate::a11y::announce::AnnouncementLog;
use crate::derived::Derived;
use crate::events::EventBus;
use crate::i18n::{self, Language};
use crate::presentation::{self, PresentationSink};
use crate::settings::font_scale::{self, font_bounds};
use crate::settings::system::SystemPreferences;
use crate::settings::theme::Theme;
use crate::storage::{keys, DiskStorage, NullStorage, PreferenceStorage};
use crate::store::{PersistentStore, Store, Subscription};

/// Announced after a full reset, in the site's baseline language.
pub const RESET_ANNOUNCEMENT: &str = "Semua pengaturan aksesibilitas telah direset";

/// Owner of every setting store and their wiring.
pub struct SettingsContext {
    theme: PersistentStore<Theme>,
    language: PersistentStore<Language>,
    font_size: PersistentStore<f32>,
    reduced_motion: PersistentStore<bool>,
    high_contrast: PersistentStore<bool>,
    focus_visible: PersistentStore<bool>,
    system: Store<SystemPreferences>,
    effective_theme: Derived<Theme>,
    effective_motion: Derived<bool>,
    announcements: AnnouncementLog,
    events: EventBus,
}

impl SettingsContext {
    /// Builds a context over `storage`, restoring every setting.
    ///
    /// Restore failures never surface here; affected settings come up
    /// with their defaults and the cause is reported through `events`.
    #[must_use]
    pub fn new(storage: Rc<dyn PreferenceStorage>, events: EventBus) -> Self {
        let theme = PersistentStore::new(
            Rc::clone(&storage),
            events.clone(),
            keys::THEME,
            Theme::default(),
        );
        let language = PersistentStore::new(
            Rc::clone(&storage),
            events.clone(),
            keys::LANGUAGE,
            Language::default(),
        );
        let font_size = PersistentStore::with_validator(
            Rc::clone(&storage),
            events.clone(),
            keys::FONT_SIZE,
            font_bounds::DEFAULT_PERCENT,
            |size: &f32| font_scale::is_valid_percent(*size),
        );
        let reduced_motion = PersistentStore::new(
            Rc::clone(&storage),
            events.clone(),
            keys::REDUCED_MOTION,
            false,
        );
        let high_contrast = PersistentStore::new(
            Rc::clone(&storage),
            events.clone(),
            keys::HIGH_CONTRAST,
            false,
        );
        let focus_visible = PersistentStore::new(storage, events.clone(), keys::FOCUS_VISIBLE, true);

        let system = Store::new(SystemPreferences::default());

        // The selected theme always wins; the system scheme feeds the pair
        // so an automatic theme can join later without rewiring.
        let effective_theme = Derived::zip(&theme.store(), &system, |theme, _system| *theme);
        let effective_motion = Derived::zip(&reduced_motion.store(), &system, |reduced, system| {
            *reduced || system.reduced_motion
        });

        Self {
            theme,
            language,
            font_size,
            reduced_motion,
            high_contrast,
            focus_visible,
            system,
            effective_theme,
            effective_motion,
            announcements: AnnouncementLog::new(),
            events,
        }
    }

    /// Builds a context over the default on-disk profile.
    ///
    /// Platforms without a config directory get a context that remembers
    /// nothing across runs but otherwise behaves identically.
    #[must_use]
    pub fn with_default_profile(events: EventBus) -> Self {
        match DiskStorage::from_default_profile() {
            Some(disk) => Self::new(Rc::new(disk), events),
            None => Self::new(Rc::new(NullStorage), events),
        }
    }

    // =========================================================================
    // Store access
    // =========================================================================

    /// The selected visual theme.
    #[must_use]
    pub fn theme(&self) -> &PersistentStore<Theme> {
        &self.theme
    }

    /// The selected interface language.
    #[must_use]
    pub fn language(&self) -> &PersistentStore<Language> {
        &self.language
    }

    /// The font size percentage, kept raw for slider hosts.
    #[must_use]
    pub fn font_size(&self) -> &PersistentStore<f32> {
        &self.font_size
    }

    /// The current font size as a clamped domain value.
    #[must_use]
    pub fn font_scale(&self) -> font_scale::FontScale {
        font_scale::FontScale::new(self.font_size.get())
    }

    /// Whether animations should be minimized.
    #[must_use]
    pub fn reduced_motion(&self) -> &PersistentStore<bool> {
        &self.reduced_motion
    }

    /// Whether the high-contrast overlay is active.
    #[must_use]
    pub fn high_contrast(&self) -> &PersistentStore<bool> {
        &self.high_contrast
    }

    /// Whether focus indicators are forced visible.
    #[must_use]
    pub fn focus_visible(&self) -> &PersistentStore<bool> {
        &self.focus_visible
    }

    /// The host-fed system preference snapshot.
    #[must_use]
    pub fn system(&self) -> &Store<SystemPreferences> {
        &self.system
    }

    /// Replaces the system preference snapshot.
    pub fn set_system_preferences(&self, preferences: SystemPreferences) {
        self.system.set(preferences);
    }

    /// The theme that should actually render.
    #[must_use]
    pub fn effective_theme(&self) -> &Derived<Theme> {
        &self.effective_theme
    }

    /// Whether motion should actually be reduced, combining the user's
    /// choice with the environment's.
    #[must_use]
    pub fn effective_motion(&self) -> &Derived<bool> {
        &self.effective_motion
    }

    /// The screen-reader announcement log.
    #[must_use]
    pub fn announcements(&self) -> &AnnouncementLog {
        &self.announcements
    }

    /// The event bus this context reports through.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Localizes `key` in the currently selected language.
    ///
    /// Unknown keys come back verbatim and are reported through the
    /// context's event bus.
    #[must_use]
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::catalog().lookup_reporting(key, self.language.get(), &self.events)
    }

    /// Connects every store to `sink`.
    ///
    /// Each applier runs immediately with the current value, so a freshly
    /// bound page is fully styled before this returns, and again after
    /// every change until the binding is released.
    pub fn bind(&self, sink: Rc<RefCell<dyn PresentationSink>>) -> PresentationBinding {
        let mut subscriptions = Vec::new();

        let target = Rc::clone(&sink);
        subscriptions.push(self.theme.subscribe(move |theme| {
            presentation::apply_theme(&mut *target.borrow_mut(), *theme);
        }));

        let target = Rc::clone(&sink);
        subscriptions.push(self.language.subscribe(move |language| {
            presentation::apply_language(&mut *target.borrow_mut(), *language);
        }));

        let target = Rc::clone(&sink);
        subscriptions.push(self.font_size.subscribe(move |size| {
            presentation::apply_font_size(&mut *target.borrow_mut(), *size);
        }));

        let target = Rc::clone(&sink);
        subscriptions.push(self.reduced_motion.subscribe(move |reduced| {
            presentation::apply_motion_preference(&mut *target.borrow_mut(), *reduced);
        }));

        let target = Rc::clone(&sink);
        subscriptions.push(self.high_contrast.subscribe(move |enabled| {
            presentation::apply_high_contrast(&mut *target.borrow_mut(), *enabled);
        }));

        let target = Rc::clone(&sink);
        subscriptions.push(self.focus_visible.subscribe(move |enabled| {
            presentation::apply_focus_visible(&mut *target.borrow_mut(), *enabled);
        }));

        PresentationBinding { subscriptions }
    }

    /// Restores every setting to its default and announces the reset once.
    pub fn reset_all(&self) {
        self.theme.set(Theme::default());
        self.language.set(Language::default());
        self.font_size.set(font_bounds::DEFAULT_PERCENT);
        self.reduced_motion.set(false);
        self.high_contrast.set(false);
        self.focus_visible.set(true);
        self.announcements.announce_polite(RESET_ANNOUNCEMENT);
    }
}

/// Live wiring between a context and one sink.
///
/// Dropping the binding leaves the wiring in place for the life of the
/// stores; call [`release`](Self::release) to disconnect the sink.
#[derive(Debug)]
pub struct PresentationBinding {
    subscriptions: Vec<Subscription>,
}

impl PresentationBinding {
    /// Disconnects the sink from every store.
    pub fn release(self) {
        for subscription in self.subscriptions {
            subscription.cancel();
        }
    }
}
