//! Known spells, casting, and the optional spell reference.
//!
//! A character's spell list stores the level of each spell locally, so
//! casting never depends on a reference source. [`SpellReference`] only
//! supplies descriptive text and may have nothing to say.

use crate::character::Character;
use crate::error::EngineError;
use crate::resources::SlotUse;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A spell on a character's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSpell {
    /// Spell slug, e.g. `magic-missile`.
    pub id: String,
    pub name: String,
    /// 0 for cantrips, up to 9.
    pub level: u8,
    #[serde(default)]
    pub prepared: bool,
}

impl KnownSpell {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            prepared: false,
        }
    }

    pub fn prepared(mut self) -> Self {
        self.prepared = true;
        self
    }

    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }
}

/// A cast that went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    pub spell_id: String,
    pub slot: SlotUse,
}

impl Character {
    pub fn known_spell(&self, id: &str) -> Option<&KnownSpell> {
        self.spells.iter().find(|s| s.id == id)
    }

    /// Add a spell to the list.
    pub fn learn_spell(&mut self, spell: KnownSpell) -> Result<(), EngineError> {
        if spell.level > 9 {
            return Err(EngineError::InvalidSpellLevel(spell.level));
        }
        if self.known_spell(&spell.id).is_some() {
            return Err(EngineError::DuplicateSpell(spell.id));
        }
        self.spells.push(spell);
        Ok(())
    }

    pub fn forget_spell(&mut self, id: &str) -> Result<KnownSpell, EngineError> {
        let index = self
            .spells
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::UnknownSpell(id.to_string()))?;
        Ok(self.spells.remove(index))
    }

    pub fn set_prepared(&mut self, id: &str, prepared: bool) -> Result<(), EngineError> {
        let spell = self
            .spells
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::UnknownSpell(id.to_string()))?;
        spell.prepared = prepared;
        Ok(())
    }

    pub fn prepared_spells(&self) -> impl Iterator<Item = &KnownSpell> {
        self.spells.iter().filter(|s| s.prepared || s.is_cantrip())
    }

    /// Cast a known spell.
    ///
    /// Cantrips are free. Leveled spells must be prepared and spend a slot
    /// of `slot_level`, which defaults to the spell's level and may be
    /// higher to upcast.
    pub fn cast_spell(&mut self, id: &str, slot_level: Option<u8>) -> Result<Cast, EngineError> {
        let spell = self
            .known_spell(id)
            .ok_or_else(|| EngineError::UnknownSpell(id.to_string()))?;

        if spell.is_cantrip() {
            return Ok(Cast {
                spell_id: spell.id.clone(),
                slot: SlotUse::Cantrip,
            });
        }
        if !spell.prepared {
            return Err(EngineError::SpellNotPrepared(spell.id.clone()));
        }

        let slot_level = slot_level.unwrap_or(spell.level);
        if slot_level < spell.level {
            return Err(EngineError::SlotTooLow {
                spell_level: spell.level,
                slot_level,
            });
        }

        let spell_id = spell.id.clone();
        let slot = self.use_spell_slot(slot_level)?;
        tracing::debug!(character = %self.id, spell = %spell_id, slot_level, "cast spell");
        Ok(Cast { spell_id, slot })
    }

    /// Each known spell with whatever the reference knows about it.
    pub fn describe_spells<'a>(
        &'a self,
        reference: &'a dyn SpellReference,
    ) -> impl Iterator<Item = (&'a KnownSpell, Option<SpellDescription>)> + 'a {
        self.spells
            .iter()
            .map(move |spell| (spell, reference.describe(&spell.id)))
    }
}

// ============================================================================
// Spell Reference
// ============================================================================

/// Schools of magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellSchool {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
}

/// Spell components required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Components {
    pub verbal: bool,
    pub somatic: bool,
    pub material: Option<String>,
}

/// Descriptive text for a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDescription {
    pub name: String,
    pub level: u8,
    pub school: SpellSchool,
    pub casting_time: String,
    pub range: String,
    #[serde(default)]
    pub components: Components,
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// Optional source of spell descriptions.
///
/// Nothing in the engine needs an answer; a `None` is always acceptable.
pub trait SpellReference: Send + Sync {
    fn describe(&self, spell_id: &str) -> Option<SpellDescription>;
}

/// No reference available.
impl SpellReference for () {
    fn describe(&self, _spell_id: &str) -> Option<SpellDescription> {
        None
    }
}

/// In-memory spell descriptions keyed by slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellCatalog {
    spells: HashMap<String, SpellDescription>,
}

impl SpellCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, description: SpellDescription) {
        self.spells.insert(id.into(), description);
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellReference for SpellCatalog {
    fn describe(&self, spell_id: &str) -> Option<SpellDescription> {
        self.spells.get(spell_id).cloned()
    }
}
