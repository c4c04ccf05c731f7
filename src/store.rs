// SPDX-License-Identifier: MPL-2.0
//! Reactive value containers with optional durable persistence.
//!
//! [`Store`] is the in-memory reactive primitive: one value plus an ordered
//! subscriber list with synchronous notification. [`PersistentStore`] layers
//! a [`PreferenceStorage`] capability on top: the value is restored (and
//! validated) at construction and mirrored back to storage on every
//! mutation. Storage failures never propagate; they become
//! [`PreferenceEvent`]s and the in-memory value stays authoritative.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::events::{EventBus, PreferenceEvent, RestoreReason};
use crate::storage::PreferenceStorage;

// =============================================================================
// Store
// =============================================================================

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_subscriber_id: Cell<u64>,
}

/// A single-threaded reactive value.
///
/// Cloning produces another handle to the same value and subscriber list.
/// Subscribers run synchronously, in subscription order, on the calling
/// thread; a subscriber that mutates the store re-enters notification, so
/// cascading writes must converge.
pub struct Store<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Store<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
            }),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replaces the value and notifies every subscriber.
    ///
    /// Notification is unconditional: setting a value equal to the current
    /// one still notifies. Appliers are idempotent, so equal re-application
    /// is harmless.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Replaces the value with a pure transform of the current one.
    pub fn update(&self, transform: impl FnOnce(&T) -> T) {
        let next = transform(&self.get());
        self.set(next);
    }

    /// Registers `callback`, invokes it immediately with the current value,
    /// and invokes it again after every subsequent [`set`](Self::set).
    ///
    /// Dropping the returned [`Subscription`] does NOT unsubscribe; the
    /// wiring stays for the life of the store unless
    /// [`Subscription::cancel`] is called.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_subscriber_id.get();
        self.inner.next_subscriber_id.set(id + 1);

        let callback: Callback<T> = Rc::new(callback);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&callback)));

        let current = self.get();
        callback(&current);

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .subscribers
                        .borrow_mut()
                        .retain(|(subscriber_id, _)| *subscriber_id != id);
                }
            })),
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot the list so callbacks may subscribe or cancel without
        // invalidating this iteration.
        let snapshot: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        let current = self.get();
        for callback in &snapshot {
            callback(&current);
        }
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Handle to one store subscription.
///
/// Calling [`cancel`](Self::cancel) removes the callback. Dropping the
/// handle without cancelling leaves the subscription in place, which is the
/// intended lifetime for applier wiring.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Removes the subscribed callback. Consumes the handle.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("cancelled", &self.cancel.is_none())
            .finish()
    }
}

// =============================================================================
// PersistentStore
// =============================================================================

/// A [`Store`] mirrored to durable storage under a fixed key.
///
/// On construction the stored payload is read and JSON-decoded; an absent
/// key restores the default silently, while an unreadable, unparsable, or
/// validator-rejected payload restores the default and emits a
/// [`PreferenceEvent::RestoreDefaulted`]. Every [`set`](Self::set) and
/// [`update`](Self::update) serializes the new value back before notifying
/// subscribers; write failures emit [`PreferenceEvent::PersistFailed`] and
/// leave the in-memory value authoritative.
pub struct PersistentStore<T> {
    store: Store<T>,
    storage: Rc<dyn PreferenceStorage>,
    events: EventBus,
    key: &'static str,
}

impl<T> Clone for PersistentStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            storage: Rc::clone(&self.storage),
            events: self.events.clone(),
            key: self.key,
        }
    }
}

impl<T> PersistentStore<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    /// Creates a store restoring from `storage` under `key`, falling back
    /// to `default`.
    pub fn new(
        storage: Rc<dyn PreferenceStorage>,
        events: EventBus,
        key: &'static str,
        default: T,
    ) -> Self {
        Self::with_validator(storage, events, key, default, |_| true)
    }

    /// Like [`new`](Self::new), additionally rejecting restored values for
    /// which `validate` returns false. The validator only guards the
    /// restore path; `set` trusts its caller.
    pub fn with_validator(
        storage: Rc<dyn PreferenceStorage>,
        events: EventBus,
        key: &'static str,
        default: T,
        validate: impl Fn(&T) -> bool,
    ) -> Self {
        let initial = restore(storage.as_ref(), &events, key, default, validate);
        Self {
            store: Store::new(initial),
            storage,
            events,
            key,
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.store.get()
    }

    /// Persists `value`, then replaces the in-memory value and notifies.
    pub fn set(&self, value: T) {
        self.persist(&value);
        self.store.set(value);
    }

    /// Sets the result of a pure transform of the current value.
    pub fn update(&self, transform: impl FnOnce(&T) -> T) {
        let next = transform(&self.get());
        self.set(next);
    }

    /// See [`Store::subscribe`].
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    /// The storage key this store mirrors to.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// A handle to the underlying reactive store, for derived compositions.
    /// Reads and subscriptions are identical through either handle;
    /// persistence only happens through [`set`](Self::set) and
    /// [`update`](Self::update).
    #[must_use]
    pub fn store(&self) -> Store<T> {
        self.store.clone()
    }

    fn persist(&self, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                self.events.emit(PreferenceEvent::PersistFailed {
                    key: self.key.to_string(),
                    reason: err.to_string(),
                });
                return;
            }
        };
        if let Err(err) = self.storage.write(self.key, &payload) {
            self.events.emit(PreferenceEvent::PersistFailed {
                key: self.key.to_string(),
                reason: err.to_string(),
            });
        }
    }
}

fn restore<T>(
    storage: &dyn PreferenceStorage,
    events: &EventBus,
    key: &'static str,
    default: T,
    validate: impl Fn(&T) -> bool,
) -> T
where
    T: DeserializeOwned,
{
    let payload = match storage.read(key) {
        Ok(Some(payload)) => payload,
        // First launch: nothing stored, nothing to report.
        Ok(None) => return default,
        Err(_) => {
            events.emit(PreferenceEvent::RestoreDefaulted {
                key: key.to_string(),
                reason: RestoreReason::ReadFailed,
            });
            return default;
        }
    };
    match serde_json::from_str::<T>(&payload) {
        Ok(value) if validate(&value) => value,
        Ok(_) => {
            events.emit(PreferenceEvent::RestoreDefaulted {
                key: key.to_string(),
                reason: RestoreReason::Rejected,
            });
            default
        }
        Err(_) => {
            events.emit(PreferenceEvent::RestoreDefaulted {
                key: key.to_string(),
                reason: RestoreReason::Unparsable,
            });
            default
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryStorage;

    fn collected_events(bus: &EventBus) -> Rc<RefCell<Vec<PreferenceEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.observe(move |event| sink.borrow_mut().push(event.clone()));
        seen
    }

    #[test]
    fn subscribe_invokes_immediately_with_current_value() {
        let store = Store::new(42);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |value| sink.borrow_mut().push(*value));
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn set_notifies_subscribers_in_subscription_order() {
        let store = Store::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        store.subscribe(move |value| first.borrow_mut().push(format!("first:{}", value)));
        let second = Rc::clone(&log);
        store.subscribe(move |value| second.borrow_mut().push(format!("second:{}", value)));

        store.set(7);

        assert_eq!(
            *log.borrow(),
            vec!["first:0", "second:0", "first:7", "second:7"]
        );
    }

    #[test]
    fn cancelled_subscription_stops_notifications() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let subscription = store.subscribe(move |_| sink.set(sink.get() + 1));
        assert_eq!(count.get(), 1);

        subscription.cancel();
        store.set(1);
        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn dropped_handle_keeps_the_subscription_alive() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        drop(store.subscribe(move |_| sink.set(sink.get() + 1)));

        store.set(1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn update_applies_transform_to_current_value() {
        let store = Store::new(10);
        store.update(|value| value * 3);
        assert_eq!(store.get(), 30);
    }

    #[test]
    fn subscriber_may_subscribe_during_notification() {
        let store = Store::new(0);
        let late_calls = Rc::new(Cell::new(0));

        let inner_store = store.clone();
        let late = Rc::clone(&late_calls);
        store.subscribe(move |value| {
            if *value == 1 {
                let late = Rc::clone(&late);
                drop(inner_store.subscribe(move |_| late.set(late.get() + 1)));
            }
        });

        store.set(1);
        assert_eq!(late_calls.get(), 1);
        store.set(2);
        assert_eq!(late_calls.get(), 2);
    }

    #[test]
    fn persistent_store_restores_stored_value() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write("a11y-fontSize", "112.5").unwrap();

        let store =
            PersistentStore::new(storage, EventBus::new(), "a11y-fontSize", 100.0_f32);
        assert_eq!(store.get(), 112.5);
    }

    #[test]
    fn absent_key_restores_default_without_events() {
        let bus = EventBus::new();
        let seen = collected_events(&bus);

        let store = PersistentStore::new(
            Rc::new(MemoryStorage::new()),
            bus,
            "a11y-theme",
            "light".to_string(),
        );
        assert_eq!(store.get(), "light");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unparsable_payload_restores_default_and_reports() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write("a11y-reducedMotion", "definitely not json").unwrap();
        let bus = EventBus::new();
        let seen = collected_events(&bus);

        let store = PersistentStore::new(storage, bus, "a11y-reducedMotion", false);
        assert!(!store.get());
        assert_eq!(
            seen.borrow().as_slice(),
            [PreferenceEvent::RestoreDefaulted {
                key: "a11y-reducedMotion".into(),
                reason: RestoreReason::Unparsable,
            }]
        );
    }

    #[test]
    fn validator_rejection_restores_default_and_reports() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write("a11y-fontSize", "9000.0").unwrap();
        let bus = EventBus::new();
        let seen = collected_events(&bus);

        let store = PersistentStore::with_validator(
            storage,
            bus,
            "a11y-fontSize",
            100.0_f32,
            |size| (75.0..=150.0).contains(size),
        );
        assert_eq!(store.get(), 100.0);
        assert_eq!(
            seen.borrow().as_slice(),
            [PreferenceEvent::RestoreDefaulted {
                key: "a11y-fontSize".into(),
                reason: RestoreReason::Rejected,
            }]
        );
    }

    #[test]
    fn set_persists_a_json_payload() {
        let storage = Rc::new(MemoryStorage::new());
        let store = PersistentStore::new(
            Rc::clone(&storage) as Rc<dyn PreferenceStorage>,
            EventBus::new(),
            "a11y-language",
            "id".to_string(),
        );

        store.set("kr".to_string());
        assert_eq!(
            storage.read("a11y-language").unwrap(),
            Some("\"kr\"".to_string())
        );
    }

    struct FailingStorage;

    impl PreferenceStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Io("read denied".into()))
        }

        fn write(&self, _key: &str, _payload: &str) -> Result<()> {
            Err(Error::Io("quota exceeded".into()))
        }
    }

    #[test]
    fn read_failure_restores_default_and_reports() {
        let bus = EventBus::new();
        let seen = collected_events(&bus);

        let store = PersistentStore::new(Rc::new(FailingStorage), bus, "a11y-theme", 1_u8);
        assert_eq!(store.get(), 1);
        assert_eq!(
            seen.borrow().as_slice(),
            [PreferenceEvent::RestoreDefaulted {
                key: "a11y-theme".into(),
                reason: RestoreReason::ReadFailed,
            }]
        );
    }

    #[test]
    fn write_failure_keeps_in_memory_value_and_reports() {
        let bus = EventBus::new();
        let seen = collected_events(&bus);
        let store = PersistentStore::new(Rc::new(FailingStorage), bus, "a11y-highContrast", false);
        seen.borrow_mut().clear();

        store.set(true);

        assert!(store.get());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(matches!(
            &seen[0],
            PreferenceEvent::PersistFailed { key, .. } if key == "a11y-highContrast"
        ));
    }

    #[test]
    fn persist_runs_before_subscriber_notification() {
        let storage = Rc::new(MemoryStorage::new());
        let store = PersistentStore::new(
            Rc::clone(&storage) as Rc<dyn PreferenceStorage>,
            EventBus::new(),
            "a11y-focusVisible",
            true,
        );

        let observed = Rc::new(RefCell::new(None));
        let peek_storage = Rc::clone(&storage);
        let sink = Rc::clone(&observed);
        store.subscribe(move |value| {
            if !value {
                *sink.borrow_mut() = peek_storage.read("a11y-focusVisible").unwrap();
            }
        });

        store.set(false);
        assert_eq!(observed.borrow().as_deref(), Some("false"));
    }
}
