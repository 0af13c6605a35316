//! Browse session: owns the catalog snapshot and the per-user state, and
//! recomputes the view explicitly after every intent.
//!
//! The reactive effect chain of the original UI becomes [`derive_view`], a
//! pure function of (catalog, filter, search results, page, favorites).
//! Mutating intents return the freshly derived [`ViewModel`] so callers
//! never look at stale output.

use crate::comparison::{ComparisonSession, SelectOutcome, SessionState};
use crate::counter::{self, CounterReport};
use crate::error::{EngineError, Result};
use crate::favorites::FavoritesStore;
use crate::filter::{self, FilterState, ViewFilter};
use crate::model::{Catalog, CatalogEntry};
use crate::pagination::{self, PAGE_SIZE};
use crate::radar::{self, Point, AXES};
use crate::session_log::SessionLogger;
use crate::source::{CatalogSource, PreferenceStore};
use std::collections::BTreeSet;
use std::time::Duration;

/// Why the visible list is empty, so the UI can word it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmptyState {
    /// Nothing matched the search or type filter.
    NoMatches,
    /// The favorites view is empty, a distinct message from a search miss.
    NoFavorites,
}

/// Everything the presentation layer needs to render the list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub entries: Vec<CatalogEntry>,
    pub page: usize,
    pub total_pages: usize,
    /// Pagination controls apply only to the plain `All` view; type,
    /// favorite, and search views show their whole subset at once.
    pub paginated: bool,
    pub empty_state: Option<EmptyState>,
}

/// Pure derivation pipeline. An active search overrides the view mode
/// entirely; it is never intersected with it.
pub fn derive_view(
    catalog: &[CatalogEntry],
    filter: &FilterState,
    search_results: Option<&[CatalogEntry]>,
    page: usize,
    favorites: &BTreeSet<String>,
) -> Result<ViewModel> {
    if filter.search_term().is_some() {
        let entries = search_results.unwrap_or(&[]).to_vec();
        let empty_state = entries.is_empty().then_some(EmptyState::NoMatches);
        return Ok(ViewModel {
            entries,
            page: 1,
            total_pages: 1,
            paginated: false,
            empty_state,
        });
    }

    let filtered = filter::apply(catalog, filter.view, favorites);
    match filter.view {
        ViewFilter::All => {
            let (slice, total_pages) = pagination::page(&filtered, page, PAGE_SIZE)?;
            Ok(ViewModel {
                entries: slice.to_vec(),
                page,
                total_pages,
                paginated: !filtered.is_empty(),
                empty_state: filtered.is_empty().then_some(EmptyState::NoMatches),
            })
        }
        ViewFilter::ByType(_) | ViewFilter::Favorites => {
            let empty_state = filtered.is_empty().then_some(match filter.view {
                ViewFilter::Favorites => EmptyState::NoFavorites,
                _ => EmptyState::NoMatches,
            });
            Ok(ViewModel {
                entries: filtered,
                page: 1,
                total_pages: 1,
                paginated: false,
                empty_state,
            })
        }
    }
}

pub struct PokedexSession<S: CatalogSource, P: PreferenceStore> {
    source: S,
    catalog: Catalog,
    filter: FilterState,
    page: usize,
    search_results: Option<Vec<CatalogEntry>>,
    favorites: FavoritesStore<P>,
    comparison: ComparisonSession,
    logger: SessionLogger,
}

impl<S: CatalogSource, P: PreferenceStore> PokedexSession<S, P> {
    /// Load the catalog snapshot and the persisted favorites.
    pub fn new(source: S, prefs: P) -> Result<Self> {
        let catalog = source.list_all()?;
        let favorites = FavoritesStore::load(prefs);
        let mut logger = SessionLogger::new();
        logger.log_catalog_loaded(catalog.len());
        Ok(PokedexSession {
            source,
            catalog,
            filter: FilterState::all(),
            page: 1,
            search_results: None,
            favorites,
            comparison: ComparisonSession::new(),
            logger,
        })
    }

    /// Re-fetch the catalog. On failure the previous snapshot stays in place.
    pub fn refresh(&mut self) -> Result<()> {
        let catalog = self.source.list_all()?;
        self.logger.log_catalog_loaded(catalog.len());
        self.catalog = catalog;
        self.clamp_page();
        Ok(())
    }

    /// A shrinking snapshot can strand the committed page past the end.
    /// Only the `All` view paginates, so the catalog length is the basis.
    fn clamp_page(&mut self) {
        let total = pagination::total_pages(self.catalog.len(), PAGE_SIZE);
        self.page = self.page.min(total);
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> Result<ViewModel> {
        derive_view(
            &self.catalog,
            &self.filter,
            self.search_results.as_deref(),
            self.page,
            self.favorites.all(),
        )
    }

    /// Switch view mode. Resets to page 1 and drops any active search.
    pub fn set_filter(&mut self, view: ViewFilter) -> Result<ViewModel> {
        self.filter.view = view;
        self.filter.search.clear();
        self.search_results = None;
        self.page = 1;
        self.logger.log_filter(&describe_view(view));
        self.view()
    }

    /// Turn to `page`. Out-of-range pages are rejected, never clamped.
    pub fn set_page(&mut self, page: usize) -> Result<ViewModel> {
        let current = self.view()?;
        if page < 1 || page > current.total_pages {
            return Err(EngineError::InvalidPage {
                page,
                total_pages: current.total_pages,
            });
        }
        self.page = page;
        self.logger.log_page(page, current.total_pages);
        self.view()
    }

    /// Run a free-text search through the catalog service.
    ///
    /// A blank term behaves like clearing the search. A miss shows the
    /// empty state; only `Unavailable` propagates, leaving prior state
    /// untouched.
    pub fn search(&mut self, term: &str) -> Result<ViewModel> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.clear_search();
        }
        let results = match self.source.search_by_name(trimmed) {
            Ok(hit) => vec![hit],
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };
        self.logger.log_search(trimmed, results.len());
        self.search_results = Some(results);
        self.filter.search = trimmed.to_string();
        self.page = 1;
        self.view()
    }

    /// Drop the search term: back to `All`, page 1.
    pub fn clear_search(&mut self) -> Result<ViewModel> {
        self.filter = FilterState::all();
        self.search_results = None;
        self.page = 1;
        self.logger.log_search_cleared();
        self.view()
    }

    /// Flip favorite membership. Returns the new state (true = favorite).
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let favorite = self.favorites.toggle(id);
        self.logger.log_favorite(id, favorite);
        favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorite_ids(&self) -> &BTreeSet<String> {
        self.favorites.all()
    }

    /// Pick an entry for comparison out of the currently visible subset.
    pub fn select_for_comparison(&mut self, id: &str) -> Result<SelectOutcome> {
        let visible = self.view()?.entries;
        let outcome = self.comparison.select(id, &visible)?;
        if outcome == SelectOutcome::Added {
            self.logger.log_compare_pick(id);
            if self.comparison.state() == SessionState::Full {
                self.logger.log_compare_full();
            }
        }
        Ok(outcome)
    }

    pub fn comparison(&self) -> &ComparisonSession {
        &self.comparison
    }

    /// One-shot reveal signal for the presentation layer.
    pub fn take_reveal(&mut self) -> Option<Duration> {
        self.comparison.take_reveal()
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
        self.logger.log_compare_cleared();
    }

    /// Weaknesses and counter picks for a catalog entry.
    pub fn recommend_counters(&self, id: &str) -> Result<CounterReport> {
        let entry = self
            .catalog
            .iter()
            .find(|e| e.id == id)
            .ok_or(EngineError::NotFound)?;
        Ok(counter::recommend(entry, &self.catalog))
    }

    /// Radar polygon for a catalog entry's stat record.
    pub fn radar(&self, id: &str) -> Result<[Point; AXES]> {
        let entry = self
            .catalog
            .iter()
            .find(|e| e.id == id)
            .ok_or(EngineError::NotFound)?;
        Ok(radar::project(&entry.base))
    }

    /// Detail fetch straight from the catalog service.
    pub fn entry_detail(&self, id: &str) -> Result<CatalogEntry> {
        self.source.get_by_id(id)
    }

    /// Create an entry, then refresh the snapshot.
    pub fn create_entry(&mut self, entry: CatalogEntry) -> Result<CatalogEntry> {
        entry.validate()?;
        let created = self.source.create(entry)?;
        self.logger.log_entry_created(&created.id);
        self.refresh()?;
        Ok(created)
    }

    /// Replace an entry wholesale, then refresh the snapshot. Stored
    /// entries are never mutated in place.
    pub fn update_entry(&mut self, id: &str, entry: CatalogEntry) -> Result<CatalogEntry> {
        entry.validate()?;
        let updated = self.source.update(id, entry)?;
        self.comparison.replace(id, &updated);
        self.logger.log_entry_updated(id);
        self.refresh()?;
        Ok(updated)
    }

    /// Delete an entry and purge it from favorites and the comparison, so
    /// no stale id can resolve afterwards.
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        self.source.delete(id)?;
        self.favorites.remove(id);
        self.comparison.remove(id);
        self.logger.log_entry_deleted(id);
        self.refresh()
    }

    pub fn log_lines(&self) -> &[String] {
        self.logger.log_lines()
    }
}

fn describe_view(view: ViewFilter) -> String {
    match view {
        ViewFilter::All => "All".to_string(),
        ViewFilter::ByType(t) => format!("ByType({})", t.name()),
        ViewFilter::Favorites => "Favorites".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseStats, LocalizedName};
    use std::collections::HashMap;

    fn entry(id: &str, types: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            display_id: 1,
            name: LocalizedName::english(id),
            types: types.iter().map(|t| t.to_string()).collect(),
            base: BaseStats::uniform(50),
            image: None,
            extras: HashMap::new(),
        }
    }

    #[test]
    fn search_results_override_the_active_filter() {
        let catalog = vec![entry("1", &["Fire"]), entry("2", &["Water"])];
        let mut state = FilterState {
            view: ViewFilter::ByType(crate::data::types::Type::Fire),
            search: "squirt".to_string(),
        };
        let hit = [entry("2", &["Water"])];
        let vm = derive_view(&catalog, &state, Some(&hit), 1, &BTreeSet::new()).unwrap();
        assert_eq!(vm.entries.len(), 1);
        assert_eq!(vm.entries[0].id, "2");
        assert!(!vm.paginated);

        state.search.clear();
        let vm = derive_view(&catalog, &state, None, 1, &BTreeSet::new()).unwrap();
        assert_eq!(vm.entries.len(), 1);
        assert_eq!(vm.entries[0].id, "1");
    }

    #[test]
    fn favorites_view_gets_its_own_empty_state() {
        let catalog = vec![entry("1", &["Fire"])];
        let favorites_view = FilterState {
            view: ViewFilter::Favorites,
            search: String::new(),
        };
        let vm = derive_view(&catalog, &favorites_view, None, 1, &BTreeSet::new()).unwrap();
        assert_eq!(vm.empty_state, Some(EmptyState::NoFavorites));

        let type_view = FilterState {
            view: ViewFilter::ByType(crate::data::types::Type::Dragon),
            search: String::new(),
        };
        let vm = derive_view(&catalog, &type_view, None, 1, &BTreeSet::new()).unwrap();
        assert_eq!(vm.empty_state, Some(EmptyState::NoMatches));
    }

    #[test]
    fn only_the_all_view_paginates() {
        let catalog: Vec<CatalogEntry> = (0..45)
            .map(|i| entry(&format!("{i}"), &["Fire"]))
            .collect();
        let all = FilterState::all();
        let vm = derive_view(&catalog, &all, None, 2, &BTreeSet::new()).unwrap();
        assert!(vm.paginated);
        assert_eq!(vm.total_pages, 3);
        assert_eq!(vm.entries.len(), 20);

        let by_type = FilterState {
            view: ViewFilter::ByType(crate::data::types::Type::Fire),
            search: String::new(),
        };
        let vm = derive_view(&catalog, &by_type, None, 1, &BTreeSet::new()).unwrap();
        assert!(!vm.paginated);
        assert_eq!(vm.entries.len(), 45);
    }
}
