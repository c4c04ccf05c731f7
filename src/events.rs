// SPDX-License-Identifier: MPL-2.0
//! Preference failure events for host observation.
//!
//! The store layer never propagates storage or decoding errors. It emits
//! these events instead, so host applications can choose to react (retry,
//! notify the user) while the in-memory value stays authoritative.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Non-fatal incidents raised by the preference and translation layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PreferenceEvent {
    /// A stored value could not be used; the default took its place.
    ///
    /// An absent key is not reported: first launches restore defaults
    /// silently.
    RestoreDefaulted {
        /// Storage key the value was read from.
        key: String,
        /// Why the stored value was discarded.
        reason: RestoreReason,
    },

    /// A new value could not be written back to storage.
    PersistFailed {
        /// Storage key the write targeted.
        key: String,
        /// Storage error rendered as text.
        reason: String,
    },

    /// A translation lookup missed and the raw key was returned instead.
    CatalogMiss {
        /// Language code the lookup ran against.
        language: String,
        /// The key that had no localized string.
        key: String,
    },
}

/// Why a restore fell back to the default value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestoreReason {
    /// The stored payload did not decode as the setting's type.
    Unparsable,
    /// The decoded value failed the store's validator.
    Rejected,
    /// The storage backend reported a read error.
    ReadFailed,
}

impl fmt::Display for RestoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreReason::Unparsable => write!(f, "unparsable payload"),
            RestoreReason::Rejected => write!(f, "validator rejected the value"),
            RestoreReason::ReadFailed => write!(f, "storage read failed"),
        }
    }
}

impl fmt::Display for PreferenceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceEvent::RestoreDefaulted { key, reason } => {
                write!(f, "restored default for \"{}\": {}", key, reason)
            }
            PreferenceEvent::PersistFailed { key, reason } => {
                write!(f, "could not persist \"{}\": {}", key, reason)
            }
            PreferenceEvent::CatalogMiss { language, key } => {
                write!(f, "missing translation \"{}\" for language \"{}\"", key, language)
            }
        }
    }
}

type Listener = Rc<dyn Fn(&PreferenceEvent)>;

/// Synchronous fan-out channel for [`PreferenceEvent`]s.
///
/// Cheap to clone; clones share the same listener list. Listeners are
/// invoked in attachment order before the emitting call returns. When no
/// listener is attached, events fall back to a single stderr line so
/// failures are never dropped silently.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a listener invoked for every subsequent event.
    pub fn observe(&self, listener: impl Fn(&PreferenceEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Emits an event to all listeners, or to stderr when none exist.
    pub fn emit(&self, event: PreferenceEvent) {
        // Snapshot so a listener attaching another listener cannot
        // invalidate the iteration.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            eprintln!("kilau-a11y: {}", event);
            return;
        }
        for listener in &listeners {
            listener(&event);
        }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_receives_emitted_events() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.observe(move |event| sink.borrow_mut().push(event.clone()));

        bus.emit(PreferenceEvent::PersistFailed {
            key: "a11y-theme".into(),
            reason: "quota exceeded".into(),
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], PreferenceEvent::PersistFailed { .. }));
    }

    #[test]
    fn clones_share_the_listener_list() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        clone.observe(move |_| *sink.borrow_mut() += 1);

        bus.emit(PreferenceEvent::CatalogMiss {
            language: "en".into(),
            key: "missing".into(),
        });

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn emit_without_listeners_does_not_panic() {
        let bus = EventBus::new();
        bus.emit(PreferenceEvent::RestoreDefaulted {
            key: "a11y-fontSize".into(),
            reason: RestoreReason::Rejected,
        });
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = PreferenceEvent::RestoreDefaulted {
            key: "a11y-theme".into(),
            reason: RestoreReason::Unparsable,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"restore_defaulted\""));
        assert!(json.contains("\"reason\":\"unparsable\""));
    }

    #[test]
    fn display_names_the_storage_key() {
        let event = PreferenceEvent::PersistFailed {
            key: "a11y-language".into(),
            reason: "disk full".into(),
        };
        assert!(format!("{}", event).contains("a11y-language"));
    }
}
