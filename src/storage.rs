// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage capabilities for preference values.
//!
//! Stores do not talk to the filesystem directly; they go through the
//! [`PreferenceStorage`] capability so hosts can swap the backing medium
//! (disk profile, in-memory map, or nothing at all for non-interactive
//! contexts).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths;

// =============================================================================
// Storage Keys
// =============================================================================

/// Storage keys, one per setting. Payloads are JSON encodings of the
/// setting's value.
pub mod keys {
    pub const THEME: &str = "a11y-theme";
    pub const LANGUAGE: &str = "a11y-language";
    pub const FONT_SIZE: &str = "a11y-fontSize";
    pub const REDUCED_MOTION: &str = "a11y-reducedMotion";
    pub const HIGH_CONTRAST: &str = "a11y-highContrast";
    pub const FOCUS_VISIBLE: &str = "a11y-focusVisible";
}

// =============================================================================
// Capability
// =============================================================================

/// Capability for durably remembering preference values between sessions.
///
/// Payloads are opaque strings (JSON by convention) keyed by the constants
/// in [`keys`]. Reads and writes are synchronous; failures surface as
/// [`crate::error::Error`] and are absorbed into events by the store layer,
/// never propagated to callers.
pub trait PreferenceStorage {
    /// Reads the payload stored under `key`. `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `payload` under `key`, replacing any previous value.
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

// =============================================================================
// Disk Storage
// =============================================================================

/// Disk-backed storage: one `{key}.json` file per setting inside a profile
/// directory.
///
/// The directory is created on first write, not at construction, so a
/// read-only session never touches the disk.
#[derive(Debug, Clone)]
pub struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    /// Creates a storage rooted at an explicit profile directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a storage rooted at the default preference profile.
    ///
    /// Returns `None` when no profile directory can be resolved for the
    /// platform (see [`paths::preference_dir`]).
    #[must_use]
    pub fn from_default_profile() -> Option<Self> {
        paths::preference_dir().map(Self::new)
    }

    /// The profile directory this storage reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl PreferenceStorage for DiskStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path)?;
        Ok(Some(payload))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.file_path(key), payload)?;
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// =============================================================================
// Null Storage
// =============================================================================

/// Storage that remembers nothing and never fails.
///
/// The no-op capability for contexts without durable storage; every read
/// restores defaults and every write succeeds without effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStorage;

impl PreferenceStorage for NullStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _payload: &str) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
