//! Error kinds surfaced by the engine.
//!
//! None of these are fatal: `NotFound` maps to an empty-result view,
//! `Unavailable` to a transient alert with prior state intact, and the rest
//! to rejection messages. Callers match on the variant, so the enum is the
//! public contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A lookup by id or name missed. Rendered as an empty state.
    #[error("entry not found")]
    NotFound,

    /// The catalog or preference collaborator failed. The operation is
    /// abandoned and prior state is left unchanged.
    #[error("catalog service unavailable: {0}")]
    Unavailable(anyhow::Error),

    /// A third entry was selected while the comparison already holds two.
    #[error("comparison already holds two entries")]
    ComparisonFull,

    /// Page request outside the valid range. Navigation should be disabled
    /// at the bounds, so hitting this is a caller bug.
    #[error("page {page} is outside 1..={total_pages}")]
    InvalidPage { page: usize, total_pages: usize },

    /// A base stat outside [1, 255] on create/update.
    #[error("stat {stat} is {value}, expected 1..=255")]
    InvalidStat { stat: &'static str, value: u16 },

    /// An entry must carry one or two known type tags.
    #[error("entry must carry one or two known type tags")]
    InvalidTypes,
}

impl EngineError {
    pub fn unavailable(cause: impl Into<anyhow::Error>) -> Self {
        EngineError::Unavailable(cause.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
