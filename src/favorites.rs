//! Persisted set of favorite entry ids.
//!
//! The set is loaded once at startup and written back on every mutation.
//! Persistence is best-effort: a failed write never rolls back the
//! in-memory toggle, favorites are not worth blocking the UI over.

use crate::source::PreferenceStore;
use std::collections::BTreeSet;

/// Preference-store key the id set is serialized under.
pub const FAVORITES_KEY: &str = "pokedex.favorites";

#[derive(Debug)]
pub struct FavoritesStore<P: PreferenceStore> {
    ids: BTreeSet<String>,
    prefs: P,
}

impl<P: PreferenceStore> FavoritesStore<P> {
    /// Load the persisted set. Missing or malformed data starts empty.
    pub fn load(prefs: P) -> Self {
        let ids = prefs
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str::<BTreeSet<String>>(&raw).ok())
            .unwrap_or_default();
        FavoritesStore { ids, prefs }
    }

    /// Flip membership for `id`. Returns the new state (true = favorite).
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.contains(id) {
            self.ids.remove(id);
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn all(&self) -> &BTreeSet<String> {
        &self.ids
    }

    /// Drop `id` if present, used when the entry is deleted upstream.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.ids.remove(id);
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&mut self) {
        // BTreeSet<String> always serializes; the write itself may not land.
        if let Ok(raw) = serde_json::to_string(&self.ids) {
            let _ = self.prefs.set(FAVORITES_KEY, &raw);
        }
    }
}
