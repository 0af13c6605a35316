//! Collaborator seams: the remote catalog service and the durable
//! preference store. The engine only sees these traits; the in-memory
//! implementations back tests and embedders without a network.

use crate::error::{EngineError, Result};
use crate::model::{Catalog, CatalogEntry};
use std::collections::HashMap;

/// The remote catalog service. Every call may fail with
/// [`EngineError::Unavailable`] in addition to the misses noted per method.
pub trait CatalogSource {
    fn list_all(&self) -> Result<Catalog>;

    /// `NotFound` when no entry has this id.
    fn get_by_id(&self, id: &str) -> Result<CatalogEntry>;

    /// Case-insensitive exact-or-partial name match, `NotFound` on a miss.
    fn search_by_name(&self, term: &str) -> Result<CatalogEntry>;

    fn create(&mut self, entry: CatalogEntry) -> Result<CatalogEntry>;

    fn update(&mut self, id: &str, entry: CatalogEntry) -> Result<CatalogEntry>;

    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Durable key-value store for user preferences (favorites, view mode).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Catalog service backed by a plain vector, catalog order preserved.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<CatalogEntry>,
}

impl InMemorySource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        InMemorySource { entries }
    }
}

impl CatalogSource for InMemorySource {
    fn list_all(&self) -> Result<Catalog> {
        Ok(self.entries.clone())
    }

    fn get_by_id(&self, id: &str) -> Result<CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    fn search_by_name(&self, term: &str) -> Result<CatalogEntry> {
        let needle = term.trim().to_ascii_lowercase();
        let exact = self
            .entries
            .iter()
            .find(|e| e.name.english.to_ascii_lowercase() == needle);
        let hit = exact.or_else(|| {
            self.entries
                .iter()
                .find(|e| e.name.english.to_ascii_lowercase().contains(&needle))
        });
        hit.cloned().ok_or(EngineError::NotFound)
    }

    fn create(&mut self, entry: CatalogEntry) -> Result<CatalogEntry> {
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn update(&mut self, id: &str, entry: CatalogEntry) -> Result<CatalogEntry> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EngineError::NotFound)?;
        *slot = entry.clone();
        Ok(entry)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(EngineError::NotFound);
        }
        Ok(())
    }
}

/// Preference store backed by a map. `fail_writes` simulates a broken
/// backing store so best-effort persistence can be exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
    pub fail_writes: bool,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        MemoryPrefs::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut prefs = MemoryPrefs::default();
        prefs.values.insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("preference store rejected write for '{key}'");
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
