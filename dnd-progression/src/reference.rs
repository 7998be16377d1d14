//! Read-only reference entities: races, classes and backgrounds.
//!
//! Characters hold only the ids. The records themselves are shared through
//! a [`crate::Rulebook`] and never mutated by the engine.

use crate::abilities::{Ability, AbilityBonuses};
use crate::caster::CasterKind;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self::new(slug)
            }
        }
    };
}

slug_id!(
    /// Race slug, e.g. `half-elf`.
    RaceId
);
slug_id!(
    /// Class slug, e.g. `wizard`.
    ClassId
);
slug_id!(
    /// Background slug, e.g. `folk-hero`.
    BackgroundId
);

/// A playable race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub ability_bonuses: AbilityBonuses,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Race {
    pub fn new(id: impl Into<String>, name: impl Into<String>, bonuses: AbilityBonuses) -> Self {
        Self {
            id: RaceId::new(id),
            name: name.into(),
            ability_bonuses: bonuses,
            traits: Vec::new(),
        }
    }

    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        self.traits = traits.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// A character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: ClassId,
    pub name: String,
    /// Hit die size: 6, 8, 10 or 12.
    pub hit_die: u8,
    pub primary_ability: Ability,
    pub saving_throws: Vec<Ability>,
    /// Set for spellcasting classes only.
    #[serde(default)]
    pub spellcasting_ability: Option<Ability>,
    #[serde(default)]
    pub caster_kind: CasterKind,
}

impl CharacterClass {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hit_die: u8,
        primary_ability: Ability,
        saving_throws: [Ability; 2],
    ) -> Self {
        Self {
            id: ClassId::new(id),
            name: name.into(),
            hit_die,
            primary_ability,
            saving_throws: saving_throws.to_vec(),
            spellcasting_ability: None,
            caster_kind: CasterKind::None,
        }
    }

    /// Make this a spellcasting class.
    pub fn with_spellcasting(mut self, ability: Ability, kind: CasterKind) -> Self {
        self.spellcasting_ability = Some(ability);
        self.caster_kind = kind;
        self
    }

    pub fn is_spellcaster(&self) -> bool {
        self.spellcasting_ability.is_some()
    }

    pub fn has_save_proficiency(&self, ability: Ability) -> bool {
        self.saving_throws.contains(&ability)
    }

    /// Problems that would make this class unusable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if ![6, 8, 10, 12].contains(&self.hit_die) {
            problems.push(format!("{}: hit die d{} is not a valid size", self.id, self.hit_die));
        }
        if self.is_spellcaster() != (self.caster_kind != CasterKind::None) {
            problems.push(format!(
                "{}: spellcasting ability {:?} disagrees with caster kind {}",
                self.id, self.spellcasting_ability, self.caster_kind
            ));
        }
        problems
    }
}

/// A character background. Carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub id: BackgroundId,
    pub name: String,
    #[serde(default)]
    pub skill_proficiencies: Vec<String>,
    #[serde(default)]
    pub tool_proficiencies: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Background {
    pub fn new(id: impl Into<String>, name: impl Into<String>, skills: &[&str]) -> Self {
        Self {
            id: BackgroundId::new(id),
            name: name.into(),
            skill_proficiencies: skills.iter().map(|s| s.to_string()).collect(),
            tool_proficiencies: Vec::new(),
            languages: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tool_proficiencies = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| l.to_string()).collect();
        self
    }
}
