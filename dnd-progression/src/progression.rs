//! Per-class, per-level progression data.
//!
//! A [`ProgressionTable`] holds one [`ProgressionEntry`] for every
//! (class, level) pair. Lookups of a missing pair are data defects: they
//! are logged and answered with zero, never a panic.

use crate::caster::CasterKind;
use crate::config::MAX_LEVEL;
use crate::error::EngineError;
use crate::reference::{CharacterClass, ClassId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Proficiency bonus at a level: `2 + (level - 1) / 4`.
pub fn proficiency_bonus_for_level(level: u8) -> i8 {
    let level = level.clamp(1, MAX_LEVEL);
    2 + ((level - 1) / 4) as i8
}

// ============================================================================
// Spell Slot Rows
// ============================================================================

/// Slot counts indexed by spell level 0-9.
///
/// Index 0 is the cantrip column. Cantrips are unlimited, so shipped data
/// always keeps it at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSlotRow(pub [u8; 10]);

impl SpellSlotRow {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from counts for spell levels 1 and up.
    pub fn from_leveled(counts: &[u8]) -> Self {
        let mut row = [0u8; 10];
        for (i, count) in counts.iter().take(9).enumerate() {
            row[i + 1] = *count;
        }
        Self(row)
    }

    /// Count at a spell level; 0 for anything past 9.
    pub fn get(&self, spell_level: u8) -> u8 {
        self.0.get(spell_level as usize).copied().unwrap_or(0)
    }

    pub fn set(&mut self, spell_level: u8, count: u8) {
        if let Some(slot) = self.0.get_mut(spell_level as usize) {
            *slot = count;
        }
    }

    /// Counts for spell levels 1-9.
    pub fn leveled(&self) -> [u8; 9] {
        std::array::from_fn(|i| self.0[i + 1])
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// (spell level, count) for each level with at least one slot.
    pub fn nonzero_levels(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(level, count)| (level as u8, *count))
    }
}

// ============================================================================
// Progression Entries
// ============================================================================

/// What a class has at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub class: ClassId,
    pub level: u8,
    pub proficiency_bonus: i8,
    #[serde(default)]
    pub cantrips_known: u8,
    /// 0 for classes that prepare spells instead of learning them.
    #[serde(default)]
    pub spells_known: u8,
    #[serde(default)]
    pub spell_slots: SpellSlotRow,
    /// Narrative labels only. Nothing in the engine reads them.
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProgressionEntry {
    /// Entry with the standard proficiency bonus and the slot shape of `kind`.
    pub fn standard(class: &ClassId, level: u8, kind: CasterKind) -> Self {
        Self {
            class: class.clone(),
            level,
            proficiency_bonus: proficiency_bonus_for_level(level),
            cantrips_known: 0,
            spells_known: 0,
            spell_slots: kind.slots_at(level),
            features: Vec::new(),
        }
    }

    pub fn with_cantrips(mut self, cantrips: u8) -> Self {
        self.cantrips_known = cantrips;
        self
    }

    pub fn with_spells_known(mut self, spells: u8) -> Self {
        self.spells_known = spells;
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// A problem found while validating progression data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDefect {
    pub class: ClassId,
    pub level: Option<u8>,
    pub message: String,
}

impl fmt::Display for DataDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "{} level {}: {}", self.class, level, self.message),
            None => write!(f, "{}: {}", self.class, self.message),
        }
    }
}

// ============================================================================
// Progression Table
// ============================================================================

/// All progression entries, keyed by (class, level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProgressionEntry>", into = "Vec<ProgressionEntry>")]
pub struct ProgressionTable {
    entries: BTreeMap<(ClassId, u8), ProgressionEntry>,
}

impl ProgressionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Rejects a second entry for the same pair and levels
    /// outside 1-20.
    pub fn insert(&mut self, entry: ProgressionEntry) -> Result<(), EngineError> {
        if !(1..=MAX_LEVEL).contains(&entry.level) {
            return Err(EngineError::InvalidReferenceData(format!(
                "{} has an entry for level {}",
                entry.class, entry.level
            )));
        }
        let key = (entry.class.clone(), entry.level);
        if self.entries.contains_key(&key) {
            return Err(EngineError::InvalidReferenceData(format!(
                "duplicate entry for {} level {}",
                entry.class, entry.level
            )));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn entry(&self, class: &ClassId, level: u8) -> Option<&ProgressionEntry> {
        self.entries.get(&(class.clone(), level))
    }

    /// Slot maxima at a level. A missing entry is logged and counts as empty.
    pub fn slot_row(&self, class: &ClassId, level: u8) -> SpellSlotRow {
        match self.entry(class, level) {
            Some(entry) => entry.spell_slots,
            None => {
                tracing::warn!(
                    class = %class,
                    level,
                    "missing progression entry, treating as no slots"
                );
                SpellSlotRow::empty()
            }
        }
    }

    /// Maximum slots of one spell level. 0 when the entry is missing.
    pub fn max_slots(&self, class: &ClassId, level: u8, spell_level: u8) -> u8 {
        self.slot_row(class, level).get(spell_level)
    }

    /// Entries for one class in level order.
    pub fn class_entries<'a>(
        &'a self,
        class: &'a ClassId,
    ) -> impl Iterator<Item = &'a ProgressionEntry> + 'a {
        self.entries
            .values()
            .filter(move |entry| &entry.class == class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check a class's rows against its caster kind.
    ///
    /// Expects levels 1-20, the standard proficiency step, and slot counts
    /// exactly matching the caster kind's shape.
    pub fn validate(&self, class: &CharacterClass) -> Vec<DataDefect> {
        let mut defects = Vec::new();
        let defect = |level: Option<u8>, message: String| DataDefect {
            class: class.id.clone(),
            level,
            message,
        };

        for level in 1..=MAX_LEVEL {
            let Some(entry) = self.entry(&class.id, level) else {
                defects.push(defect(Some(level), "missing entry".to_string()));
                continue;
            };

            let expected_bonus = proficiency_bonus_for_level(level);
            if entry.proficiency_bonus != expected_bonus {
                defects.push(defect(
                    Some(level),
                    format!(
                        "proficiency bonus {} (expected {expected_bonus})",
                        entry.proficiency_bonus
                    ),
                ));
            }

            if entry.spell_slots.get(0) != 0 {
                defects.push(defect(Some(level), "cantrip slot column is not 0".to_string()));
            }

            let expected_slots = class.caster_kind.slots_at(level);
            if entry.spell_slots != expected_slots {
                defects.push(defect(
                    Some(level),
                    format!(
                        "slots {:?} do not match {} shape {:?}",
                        entry.spell_slots.leveled(),
                        class.caster_kind,
                        expected_slots.leveled()
                    ),
                ));
            }
        }

        if !defects.is_empty() {
            tracing::warn!(class = %class.id, count = defects.len(), "progression data defects");
        }
        defects
    }
}

impl TryFrom<Vec<ProgressionEntry>> for ProgressionTable {
    type Error = EngineError;

    fn try_from(entries: Vec<ProgressionEntry>) -> Result<Self, Self::Error> {
        let mut table = ProgressionTable::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }
}

impl From<ProgressionTable> for Vec<ProgressionEntry> {
    fn from(table: ProgressionTable) -> Self {
        table.entries.into_values().collect()
    }
}
