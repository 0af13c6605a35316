//! Deriving the working subset of the catalog.
//!
//! The three view modes operate on the already-loaded catalog snapshot and
//! always preserve its order. Free-text search is different: it goes through
//! the catalog service and its result replaces the filtered subset entirely,
//! so it is handled by the session, not here.

use crate::data::types::Type;
use crate::model::CatalogEntry;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    ByType(Type),
    Favorites,
}

/// Active filter: a view mode plus an optional search term. A non-empty
/// term overrides the view mode entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub view: ViewFilter,
    pub search: String,
}

impl FilterState {
    pub fn all() -> Self {
        FilterState {
            view: ViewFilter::All,
            search: String::new(),
        }
    }

    /// The trimmed search term, if one is active.
    pub fn search_term(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::all()
    }
}

/// Derive the working subset for a view mode, catalog order preserved.
pub fn apply(
    catalog: &[CatalogEntry],
    view: ViewFilter,
    favorites: &BTreeSet<String>,
) -> Vec<CatalogEntry> {
    match view {
        ViewFilter::All => catalog.to_vec(),
        ViewFilter::ByType(wanted) => catalog
            .iter()
            .filter(|e| e.has_type(wanted))
            .cloned()
            .collect(),
        ViewFilter::Favorites => catalog
            .iter()
            .filter(|e| favorites.contains(&e.id))
            .cloned()
            .collect(),
    }
}
