//! Catalog derivation and comparison engine for a Pokédex browser.
//!
//! The main entry point for interactive use is [`session::PokedexSession`];
//! the individual pieces (filtering, pagination, favorites, comparison,
//! counters, radar projection) are usable on their own.

pub mod comparison;
pub mod counter;
pub mod data;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod radar;
pub mod session;
pub mod session_log;
pub mod source;

pub use error::{EngineError, Result};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::comparison::{outcome, ComparisonSession, Outcome, SelectOutcome, SessionState};
    pub use crate::counter::{recommend, weaknesses, CounterReport};
    pub use crate::data::types::Type;
    pub use crate::error::{EngineError, Result};
    pub use crate::favorites::FavoritesStore;
    pub use crate::filter::{FilterState, ViewFilter};
    pub use crate::model::{BaseStats, Catalog, CatalogEntry, LocalizedName};
    pub use crate::radar::project;
    pub use crate::session::{derive_view, EmptyState, PokedexSession, ViewModel};
    pub use crate::source::{CatalogSource, InMemorySource, MemoryPrefs, PreferenceStore};
}
