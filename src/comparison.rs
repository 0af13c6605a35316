//! Two-entry comparison workflow.
//!
//! The session walks Empty -> OneSelected -> Full. Selections resolve
//! against the subset the user can currently see, never the global catalog.
//! Reaching Full arms a one-shot reveal signal the presentation layer can
//! animate for a fixed duration; the engine itself never sleeps.

use crate::error::{EngineError, Result};
use crate::model::CatalogEntry;
use std::time::Duration;

pub const MAX_SELECTED: usize = 2;

/// How long the presentation holds the "versus" transition after the second
/// pick. Handed out once via [`ComparisonSession::take_reveal`]; safe to
/// discard if the session is cleared first.
pub const REVEAL_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Empty,
    OneSelected,
    Full,
}

/// What a select call did. Duplicate and unresolvable picks are no-ops,
/// not errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectOutcome {
    Added,
    AlreadySelected,
    NotVisible,
}

/// Winner of a stat-total comparison, or a tie on equal totals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome<'a> {
    Winner(&'a CatalogEntry),
    Tie,
}

/// Pure comparator: strictly greater six-stat total wins.
pub fn outcome<'a>(a: &'a CatalogEntry, b: &'a CatalogEntry) -> Outcome<'a> {
    use std::cmp::Ordering::*;
    match a.base.total().cmp(&b.base.total()) {
        Greater => Outcome::Winner(a),
        Less => Outcome::Winner(b),
        Equal => Outcome::Tie,
    }
}

#[derive(Debug, Default)]
pub struct ComparisonSession {
    selected: Vec<CatalogEntry>,
    reveal: Option<Duration>,
}

impl ComparisonSession {
    pub fn new() -> Self {
        ComparisonSession::default()
    }

    pub fn state(&self) -> SessionState {
        match self.selected.len() {
            0 => SessionState::Empty,
            1 => SessionState::OneSelected,
            _ => SessionState::Full,
        }
    }

    /// Selected entries in insertion order.
    pub fn selected(&self) -> &[CatalogEntry] {
        &self.selected
    }

    /// Pick `id` out of the currently visible subset.
    ///
    /// A full session rejects any further pick; nothing is replaced.
    pub fn select(&mut self, id: &str, visible: &[CatalogEntry]) -> Result<SelectOutcome> {
        if self.selected.len() >= MAX_SELECTED {
            return Err(EngineError::ComparisonFull);
        }
        if self.selected.iter().any(|e| e.id == id) {
            return Ok(SelectOutcome::AlreadySelected);
        }
        let Some(entry) = visible.iter().find(|e| e.id == id) else {
            return Ok(SelectOutcome::NotVisible);
        };
        self.selected.push(entry.clone());
        if self.selected.len() == MAX_SELECTED {
            self.reveal = Some(REVEAL_DURATION);
        }
        Ok(SelectOutcome::Added)
    }

    /// One-shot reveal signal armed when the session filled.
    pub fn take_reveal(&mut self) -> Option<Duration> {
        self.reveal.take()
    }

    /// Both slots, once the session is full.
    pub fn pair(&self) -> Option<(&CatalogEntry, &CatalogEntry)> {
        match self.selected.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    /// Outcome of a full session.
    pub fn outcome(&self) -> Option<Outcome<'_>> {
        self.pair().map(|(a, b)| outcome(a, b))
    }

    /// Swap in a newer snapshot of a selected entry, used when the entry
    /// is updated upstream. Slot order and the session state are untouched.
    pub fn replace(&mut self, id: &str, entry: &CatalogEntry) -> bool {
        match self.selected.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = entry.clone();
                true
            }
            None => false,
        }
    }

    /// Drop `id` if selected, used when the entry is deleted upstream.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|e| e.id != id);
        self.selected.len() != before
    }

    /// Back to Empty; a pending reveal is discarded.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.reveal = None;
    }
}
