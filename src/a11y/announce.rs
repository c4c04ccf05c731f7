// SPDX-License-Identifier: MPL-2.0

//! Screen-reader announcement log.
//!
//! This module defines the `Announcement` struct and the `AnnouncementLog`
//! that hosts render into an ARIA live region. The log is reactive: every
//! insert notifies subscribers with the full entry list, oldest first.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::store::{Store, Subscription};

/// How long an entry stays relevant once a newer one arrives.
pub const MAX_AGE: Duration = Duration::from_secs(10);

/// Maximum entries retained after an insert.
pub const MAX_ENTRIES: usize = 5;

/// Unique identifier for an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementId(u64);

impl AnnouncementId {
    /// Creates a new unique announcement ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

/// Interruption level, matching the `aria-live` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// Narrated at the next graceful opportunity.
    #[default]
    Polite,
    /// Interrupts the current narration.
    Assertive,
}

impl Politeness {
    /// Returns the `aria-live` attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// One message queued for screen-reader narration.
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Unique identifier for this announcement.
    id: AnnouncementId,
    /// The text to narrate, already localized by the caller.
    message: String,
    /// Interruption level for the live region.
    politeness: Politeness,
    /// When this announcement was created.
    created_at: Instant,
}

impl Announcement {
    fn stamped(message: impl Into<String>, politeness: Politeness, now: Instant) -> Self {
        Self {
            id: AnnouncementId::new(),
            message: message.into(),
            politeness,
            created_at: now,
        }
    }

    /// Returns the announcement's unique ID.
    #[must_use]
    pub fn id(&self) -> AnnouncementId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the interruption level.
    #[must_use]
    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    /// Returns when this announcement was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this announcement.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= MAX_AGE
    }
}

/// Bounded, ordered log of announcements.
///
/// Each insert first drops entries older than [`MAX_AGE`], then appends
/// the new entry, then truncates from the front to [`MAX_ENTRIES`].
/// Entries are never removed between inserts, so a rendered live region
/// stays stable while the page is quiet.
#[derive(Clone, Default)]
pub struct AnnouncementLog {
    entries: Store<Vec<Announcement>>,
}

impl AnnouncementLog {
    /// Creates a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for narration.
    pub fn announce(&self, message: impl Into<String>, politeness: Politeness) {
        self.announce_at(message, politeness, Instant::now());
    }

    /// Appends a message at the default polite level.
    pub fn announce_polite(&self, message: impl Into<String>) {
        self.announce(message, Politeness::Polite);
    }

    /// Appends a message that interrupts the current narration.
    pub fn announce_assertive(&self, message: impl Into<String>) {
        self.announce(message, Politeness::Assertive);
    }

    fn announce_at(&self, message: impl Into<String>, politeness: Politeness, now: Instant) {
        let announcement = Announcement::stamped(message, politeness, now);
        self.entries.update(|entries| {
            let mut next: Vec<Announcement> = entries
                .iter()
                .filter(|entry| !entry.is_expired_at(now))
                .cloned()
                .collect();
            next.push(announcement);
            if next.len() > MAX_ENTRIES {
                let excess = next.len() - MAX_ENTRIES;
                next.drain(..excess);
            }
            next
        });
    }

    /// Returns the current entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Announcement> {
        self.entries.get()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.get().len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.get().is_empty()
    }

    /// Subscribes to the log; the callback runs immediately with the
    /// current entries and again after every insert.
    pub fn subscribe(&self, callback: impl Fn(&[Announcement]) + 'static) -> Subscription {
        self.entries.subscribe(move |entries| callback(entries))
    }
}

impl std::fmt::Debug for AnnouncementLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncementLog")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn announce_appends_in_insertion_order() {
        let log = AnnouncementLog::new();
        log.announce_polite("first");
        log.announce_polite("second");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message(), "first");
        assert_eq!(entries[1].message(), "second");
    }

    #[test]
    fn polite_is_the_default_level() {
        assert_eq!(Politeness::default(), Politeness::Polite);

        let log = AnnouncementLog::new();
        log.announce_polite("saved");
        assert_eq!(log.entries()[0].politeness(), Politeness::Polite);
        assert_eq!(log.entries()[0].politeness().as_str(), "polite");
    }

    #[test]
    fn assertive_announcements_keep_their_level() {
        let log = AnnouncementLog::new();
        log.announce_assertive("error");
        assert_eq!(log.entries()[0].politeness(), Politeness::Assertive);
        assert_eq!(log.entries()[0].politeness().as_str(), "assertive");
    }

    #[test]
    fn announcement_ids_are_unique() {
        let log = AnnouncementLog::new();
        log.announce_polite("one");
        log.announce_polite("two");

        let entries = log.entries();
        assert_ne!(entries[0].id(), entries[1].id());
    }

    #[test]
    fn log_is_capped_after_each_insert() {
        let log = AnnouncementLog::new();
        for index in 0..7 {
            log.announce_polite(format!("message-{index}"));
        }

        let entries = log.entries();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].message(), "message-2");
        assert_eq!(entries[4].message(), "message-6");
    }

    #[test]
    fn stale_entries_are_pruned_on_the_next_insert() {
        let log = AnnouncementLog::new();
        let start = Instant::now();

        log.announce_at("old", Politeness::Polite, start);
        assert_eq!(log.len(), 1);

        log.announce_at("fresh", Politeness::Polite, start + MAX_AGE + Duration::from_secs(1));
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message(), "fresh");
    }

    #[test]
    fn entries_survive_quiet_periods_between_inserts() {
        let log = AnnouncementLog::new();
        let start = Instant::now();

        log.announce_at("kept", Politeness::Polite, start);
        log.announce_at("also kept", Politeness::Polite, start + Duration::from_secs(5));

        assert_eq!(log.len(), 2);
    }

    #[test]
    fn subscribers_observe_every_insert() {
        let log = AnnouncementLog::new();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let subscriber = Rc::clone(&observed);
        let _subscription = log.subscribe(move |entries| {
            subscriber.borrow_mut().push(entries.len());
        });

        log.announce_polite("one");
        log.announce_polite("two");

        assert_eq!(*observed.borrow(), vec![0, 1, 2]);
    }
}
