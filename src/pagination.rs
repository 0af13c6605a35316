//! Fixed-size pages over a filtered subset.
//!
//! Only the `All` view paginates; type, favorite, and search views show the
//! whole subset at once. That asymmetry belongs to the session, this module
//! just slices.

use crate::error::{EngineError, Result};
use crate::model::CatalogEntry;

pub const PAGE_SIZE: usize = 20;

/// `max(1, ceil(len / page_size))`. An empty subset still has one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page_size must be positive");
    len.div_ceil(page_size).max(1)
}

/// Slice out a 1-indexed page. Out-of-range pages are a caller bug; the UI
/// disables navigation at the bounds, so the engine reports rather than
/// clamps.
pub fn page(
    entries: &[CatalogEntry],
    number: usize,
    page_size: usize,
) -> Result<(&[CatalogEntry], usize)> {
    let total = total_pages(entries.len(), page_size);
    if number < 1 || number > total {
        return Err(EngineError::InvalidPage {
            page: number,
            total_pages: total,
        });
    }
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(entries.len());
    let start = start.min(entries.len());
    Ok((&entries[start..end], total))
}
