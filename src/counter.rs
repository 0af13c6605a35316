//! Counter recommendations.
//!
//! A coverage heuristic, not battle math: union the entry's per-type
//! weaknesses, then take the first six catalog entries carrying any of
//! those types. No ranking, no dual-type multipliers, no check of the
//! candidate's own resistances. First-match-wins is the contract; do not
//! trade it for battle accuracy.

use crate::data::types::Type;
use crate::model::CatalogEntry;
use std::collections::BTreeSet;

pub const MAX_COUNTERS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterReport {
    pub weaknesses: BTreeSet<Type>,
    pub counters: Vec<CatalogEntry>,
}

/// Union of `weak_to` across the entry's type tags.
pub fn weaknesses(entry: &CatalogEntry) -> BTreeSet<Type> {
    entry
        .parsed_types()
        .flat_map(|t| t.weak_to().iter().copied())
        .collect()
}

/// First six catalog entries (original order) that carry a weakness type.
/// The entry itself is never its own counter.
pub fn recommend(entry: &CatalogEntry, catalog: &[CatalogEntry]) -> CounterReport {
    let weaknesses = weaknesses(entry);
    let counters = catalog
        .iter()
        .filter(|c| c.id != entry.id && c.parsed_types().any(|t| weaknesses.contains(&t)))
        .take(MAX_COUNTERS)
        .cloned()
        .collect();
    CounterReport {
        weaknesses,
        counters,
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
    fn fire_is_countered_by_water() {
        let target = entry("1", &["Fire"]);
        let catalog = vec![target.clone(), entry("2", &["Water"])];
        let report = recommend(&target, &catalog);
        let expected: BTreeSet<Type> = [Type::Water, Type::Ground, Type::Rock]
            .into_iter()
            .collect();
        assert_eq!(report.weaknesses, expected);
        assert_eq!(report.counters.len(), 1);
        assert_eq!(report.counters[0].id, "2");
    }

    #[test]
    fn dual_type_weaknesses_union_without_duplicates() {
        // Grass/Poison: Grass brings Fire/Ice/Poison/Flying/Bug, Poison
        // brings Ground/Psychic; Poison itself stays in the union.
        let target = entry("1", &["Grass", "Poison"]);
        let report = recommend(&target, &[target.clone()]);
        let expected: BTreeSet<Type> = [
            Type::Fire,
            Type::Ice,
            Type::Poison,
            Type::Flying,
            Type::Bug,
            Type::Ground,
            Type::Psychic,
        ]
        .into_iter()
        .collect();
        assert_eq!(report.weaknesses, expected);
    }

    #[test]
    fn counters_stop_at_six_in_catalog_order() {
        let target = entry("0", &["Fire"]);
        let mut catalog = vec![target.clone()];
        for i in 1..=9 {
            catalog.push(entry(&format!("{i}"), &["Water"]));
        }
        let report = recommend(&target, &catalog);
        let ids: Vec<&str> = report.counters.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn the_entry_is_never_its_own_counter() {
        // Dragon is weak to Dragon; the entry still must not recommend itself.
        let target = entry("1", &["Dragon"]);
        let catalog = vec![target.clone(), entry("2", &["Dragon"])];
        let report = recommend(&target, &catalog);
        let ids: Vec<&str> = report.counters.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }
}
