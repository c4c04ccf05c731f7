// SPDX-License-Identifier: MPL-2.0
use std::collections::HashMap;
use std::sync::OnceLock;

use rust_embed::RustEmbed;

use crate::events::{EventBus, PreferenceEvent};
use crate::i18n::Language;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The translation catalog: one flat key → string table per language,
/// decoded once from the embedded `.json` assets.
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    fn load() -> Self {
        let mut tables = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(code) = filename.strip_suffix(".json") {
                if let Some(language) = Language::from_code(code) {
                    if let Some(content) = Asset::get(filename) {
                        let table: HashMap<String, String> =
                            serde_json::from_slice(content.data.as_ref())
                                .expect("Failed to parse embedded translation table.");
                        tables.insert(language, table);
                    }
                }
            }
        }

        Self { tables }
    }

    /// Localized string for `key`, or the raw key echoed back when the
    /// catalog has no entry. A miss logs one warning line to stderr.
    pub fn lookup<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        match self.all(language).get(key) {
            Some(value) => value.as_str(),
            None => {
                eprintln!(
                    "kilau-a11y: missing translation \"{}\" for language \"{}\"",
                    key,
                    language.code()
                );
                key
            }
        }
    }

    /// Like [`lookup`](Self::lookup), reporting misses through `events`
    /// instead of stderr.
    pub fn lookup_reporting<'a>(
        &'a self,
        key: &'a str,
        language: Language,
        events: &EventBus,
    ) -> &'a str {
        match self.all(language).get(key) {
            Some(value) => value.as_str(),
            None => {
                events.emit(PreferenceEvent::CatalogMiss {
                    language: language.code().to_string(),
                    key: key.to_string(),
                });
                key
            }
        }
    }

    /// The full table for a language. Falls back to the baseline
    /// (Indonesian) table if a language asset is ever absent.
    #[must_use]
    pub fn all(&self, language: Language) -> &HashMap<String, String> {
        self.tables
            .get(&language)
            .or_else(|| self.tables.get(&Language::Id))
            .unwrap_or_else(|| empty_table())
    }

    /// Languages with a loaded table.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.tables.contains_key(language))
            .collect()
    }
}

fn empty_table() -> &'static HashMap<String, String> {
    static EMPTY: OnceLock<HashMap<String, String>> = OnceLock::new();
    EMPTY.get_or_init(HashMap::new)
}

/// The process-wide catalog, decoded from embedded assets on first use.
#[must_use]
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::load)
}
