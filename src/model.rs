//! Catalog data model.
//!
//! Entries are immutable value snapshots of whatever the catalog service
//! returns; unknown fields ride along in `extras` so a round-trip through
//! the engine never drops collaborator data.

use crate::data::types::Type;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sprite shown when an entry has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/0.png";

pub const STAT_MIN: u16 = 1;
pub const STAT_MAX: u16 = 255;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub japanese: String,
    #[serde(default)]
    pub chinese: String,
    #[serde(default)]
    pub french: String,
}

impl LocalizedName {
    pub fn english(name: impl Into<String>) -> Self {
        LocalizedName {
            english: name.into(),
            ..LocalizedName::default()
        }
    }
}

/// The six base stats, each constrained to [1, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    /// Uniform stat line, the create-form default.
    pub fn uniform(value: u16) -> Self {
        BaseStats {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    /// Fixed display order: HP, Attack, Defense, Sp. Atk, Sp. Def, Speed.
    pub fn as_array(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    /// Stat total used by the comparison outcome.
    pub fn total(&self) -> u32 {
        self.as_array().iter().map(|v| u32::from(*v)).sum()
    }

    pub fn validate(&self) -> Result<()> {
        const FIELDS: [&str; 6] = [
            "HP",
            "Attack",
            "Defense",
            "SpecialAttack",
            "SpecialDefense",
            "Speed",
        ];
        for (stat, value) in FIELDS.into_iter().zip(self.as_array()) {
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(EngineError::InvalidStat { stat, value });
            }
        }
        Ok(())
    }
}

/// One catalog record.
///
/// `id` is the stable storage key; `display_id` is the small dex number
/// shown on cards. `types` holds one or two tags, first is the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub display_id: u32,
    pub name: LocalizedName,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub base: BaseStats,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

impl CatalogEntry {
    /// Image reference with the placeholder fallback applied.
    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Parsed type tags, unknown tags skipped.
    pub fn parsed_types(&self) -> impl Iterator<Item = Type> + '_ {
        self.types.iter().filter_map(|tag| Type::from_name(tag))
    }

    pub fn primary_type(&self) -> Option<Type> {
        self.parsed_types().next()
    }

    pub fn has_type(&self, wanted: Type) -> bool {
        self.parsed_types().any(|t| t == wanted)
    }

    /// Checked before handing an entry to the catalog service.
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() || self.types.len() > 2 {
            return Err(EngineError::InvalidTypes);
        }
        if self.types.iter().any(|tag| Type::from_name(tag).is_none()) {
            return Err(EngineError::InvalidTypes);
        }
        self.base.validate()
    }
}

/// Ordered snapshot of the full catalog, ids unique.
pub type Catalog = Vec<CatalogEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, types: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            display_id: 1,
            name: LocalizedName::english("Testmon"),
            types: types.iter().map(|t| t.to_string()).collect(),
            base: BaseStats::uniform(50),
            image: None,
            extras: HashMap::new(),
        }
    }

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{
            "_id": "abc123",
            "id": 4,
            "name": {"english": "Charmander", "japanese": "ヒトカゲ", "chinese": "小火龙", "french": "Salamèche"},
            "type": ["Fire"],
            "base": {"HP": 39, "Attack": 52, "Defense": 43, "SpecialAttack": 60, "SpecialDefense": 50, "Speed": 65},
            "image": "https://example.test/4.png",
            "legendary": false
        }"#;
        let parsed: CatalogEntry = serde_json::from_str(json).expect("valid entry json");
        assert_eq!(parsed.id, "abc123");
        assert_eq!(parsed.display_id, 4);
        assert_eq!(parsed.base.hp, 39);
        assert_eq!(parsed.primary_type(), Some(Type::Fire));
        assert!(parsed.extras.contains_key("legendary"));

        let back = serde_json::to_value(&parsed).expect("serializes");
        assert_eq!(back["base"]["HP"], 39);
        assert_eq!(back["base"]["SpecialAttack"], 60);
        assert_eq!(back["type"][0], "Fire");
        assert_eq!(back["_id"], "abc123");
    }

    #[test]
    fn placeholder_applies_to_missing_and_blank_images() {
        let mut e = entry("x", &["Water"]);
        assert_eq!(e.image_or_placeholder(), PLACEHOLDER_IMAGE);
        e.image = Some("   ".to_string());
        assert_eq!(e.image_or_placeholder(), PLACEHOLDER_IMAGE);
        e.image = Some("https://example.test/x.png".to_string());
        assert_eq!(e.image_or_placeholder(), "https://example.test/x.png");
    }

    #[test]
    fn stat_validation_rejects_out_of_range() {
        let mut e = entry("x", &["Grass"]);
        assert!(e.validate().is_ok());
        e.base.speed = 0;
        assert!(matches!(
            e.validate(),
            Err(EngineError::InvalidStat { stat: "Speed", value: 0 })
        ));
        e.base.speed = 256;
        assert!(e.validate().is_err());
    }

    #[test]
    fn type_validation_rejects_zero_and_three_tags() {
        assert!(matches!(
            entry("x", &[]).validate(),
            Err(EngineError::InvalidTypes)
        ));
        assert!(entry("x", &["Fire", "Flying", "Dragon"]).validate().is_err());
        assert!(entry("x", &["Fire", "Madeup"]).validate().is_err());
        assert!(entry("x", &["Fire", "Flying"]).validate().is_ok());
    }

    #[test]
    fn stat_total_sums_all_six_fields() {
        assert_eq!(BaseStats::uniform(50).total(), 300);
    }
}
