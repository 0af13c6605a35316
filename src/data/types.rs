//! Static 18-type chart, defending perspective.
//!
//! Each type carries the lists of attacking types it is weak to, resistant
//! to, and immune to. The chart is fixed at build time; the counter
//! recommendation in [`crate::counter`] only consumes `weak_to`.

use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

/// Defensive profile of a single type.
pub struct TypeInfo {
    pub kind: Type,
    pub weak_to: &'static [Type],
    pub resistant_to: &'static [Type],
    pub immune_to: &'static [Type],
}

static TYPE_INDEX: phf::Map<&'static str, Type> = phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

use Type::*;

static TYPE_CHART: [TypeInfo; TYPE_COUNT] = [
    TypeInfo {
        kind: Normal,
        weak_to: &[Fighting],
        resistant_to: &[],
        immune_to: &[Ghost],
    },
    TypeInfo {
        kind: Fire,
        weak_to: &[Water, Ground, Rock],
        resistant_to: &[Fire, Grass, Ice, Bug, Steel, Fairy],
        immune_to: &[],
    },
    TypeInfo {
        kind: Water,
        weak_to: &[Electric, Grass],
        resistant_to: &[Fire, Water, Ice, Steel],
        immune_to: &[],
    },
    TypeInfo {
        kind: Electric,
        weak_to: &[Ground],
        resistant_to: &[Electric, Flying, Steel],
        immune_to: &[],
    },
    TypeInfo {
        kind: Grass,
        weak_to: &[Fire, Ice, Poison, Flying, Bug],
        resistant_to: &[Water, Electric, Grass, Ground],
        immune_to: &[],
    },
    TypeInfo {
        kind: Ice,
        weak_to: &[Fire, Fighting, Rock, Steel],
        resistant_to: &[Ice],
        immune_to: &[],
    },
    TypeInfo {
        kind: Fighting,
        weak_to: &[Flying, Psychic, Fairy],
        resistant_to: &[Bug, Rock, Dark],
        immune_to: &[],
    },
    TypeInfo {
        kind: Poison,
        weak_to: &[Ground, Psychic],
        resistant_to: &[Grass, Fighting, Poison, Bug, Fairy],
        immune_to: &[],
    },
    TypeInfo {
        kind: Ground,
        weak_to: &[Water, Grass, Ice],
        resistant_to: &[Poison, Rock],
        immune_to: &[Electric],
    },
    TypeInfo {
        kind: Flying,
        weak_to: &[Electric, Ice, Rock],
        resistant_to: &[Grass, Fighting, Bug],
        immune_to: &[Ground],
    },
    TypeInfo {
        kind: Psychic,
        weak_to: &[Bug, Ghost, Dark],
        resistant_to: &[Fighting, Psychic],
        immune_to: &[],
    },
    TypeInfo {
        kind: Bug,
        weak_to: &[Fire, Flying, Rock],
        resistant_to: &[Grass, Fighting, Ground],
        immune_to: &[],
    },
    TypeInfo {
        kind: Rock,
        weak_to: &[Water, Grass, Fighting, Ground, Steel],
        resistant_to: &[Normal, Fire, Poison, Flying],
        immune_to: &[],
    },
    TypeInfo {
        kind: Ghost,
        weak_to: &[Ghost, Dark],
        resistant_to: &[Poison, Bug],
        immune_to: &[Normal, Fighting],
    },
    TypeInfo {
        kind: Dragon,
        weak_to: &[Ice, Dragon, Fairy],
        resistant_to: &[Fire, Water, Electric, Grass],
        immune_to: &[],
    },
    TypeInfo {
        kind: Dark,
        weak_to: &[Fighting, Bug, Fairy],
        resistant_to: &[Ghost, Dark],
        immune_to: &[Psychic],
    },
    TypeInfo {
        kind: Steel,
        weak_to: &[Fire, Fighting, Ground],
        resistant_to: &[
            Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
        ],
        immune_to: &[Poison],
    },
    TypeInfo {
        kind: Fairy,
        weak_to: &[Poison, Steel],
        resistant_to: &[Fighting, Bug, Dark],
        immune_to: &[Dragon],
    },
];

impl Type {
    /// Parse a type tag as it appears on catalog entries ("Fire", "fire", ...).
    pub fn from_name(name: &str) -> Option<Type> {
        let key = normalize_key(name);
        TYPE_INDEX.get(key.as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Normal => "Normal",
            Fire => "Fire",
            Water => "Water",
            Electric => "Electric",
            Grass => "Grass",
            Ice => "Ice",
            Fighting => "Fighting",
            Poison => "Poison",
            Ground => "Ground",
            Flying => "Flying",
            Psychic => "Psychic",
            Bug => "Bug",
            Rock => "Rock",
            Ghost => "Ghost",
            Dragon => "Dragon",
            Dark => "Dark",
            Steel => "Steel",
            Fairy => "Fairy",
        }
    }

    pub fn info(self) -> &'static TypeInfo {
        &TYPE_CHART[self as usize]
    }

    pub fn weak_to(self) -> &'static [Type] {
        self.info().weak_to
    }

    pub fn resistant_to(self) -> &'static [Type] {
        self.info().resistant_to
    }

    pub fn immune_to(self) -> &'static [Type] {
        self.info().immune_to
    }
}

fn normalize_key(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
