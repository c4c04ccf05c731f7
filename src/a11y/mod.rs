// SPDX-License-Identifier: MPL-2.0
//! Assistive-technology support utilities.
//!
//! This module carries the pieces that talk to screen readers and the
//! keyboard rather than to the settings stores.
//!
//! # Components
//!
//! - [`announce`] - `AnnouncementLog` rendered into an ARIA live region
//! - [`focus`] - `FocusTrap` keeping Tab cycles inside modal surfaces
//!
//! # Usage
//!
//! ```
//! use kilau_a11y::a11y::{element_id, AnnouncementLog};
//!
//! let log = AnnouncementLog::new();
//! log.announce_polite("Settings saved");
//!
//! let region_id = element_id("live-region");
//! assert!(region_id.starts_with("live-region-"));
//! ```

pub mod announce;
pub mod focus;

pub use announce::{Announcement, AnnouncementId, AnnouncementLog, Politeness};
pub use focus::{FocusDirection, FocusScope, FocusTrap, TrapOutcome};

/// Returns a document-unique id with the given prefix, e.g. `nav-3`.
///
/// Backed by a process-wide counter, so two calls never collide even
/// across pages.
#[must_use]
pub fn element_id(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let serial = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{serial}")
}
