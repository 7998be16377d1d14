//! Spell slot progression shapes.
//!
//! Each class belongs to one caster kind, and each kind has exactly one
//! slot table. The tables live here and nowhere else; the progression
//! table and the short rest rule both go through [`SlotProgression`].

use crate::progression::SpellSlotRow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a class gains spell slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasterKind {
    #[default]
    None,
    Full,
    Half,
    Third,
    Pact,
}

impl CasterKind {
    pub fn name(&self) -> &'static str {
        match self {
            CasterKind::None => "Non-caster",
            CasterKind::Full => "Full caster",
            CasterKind::Half => "Half caster",
            CasterKind::Third => "Third caster",
            CasterKind::Pact => "Pact magic",
        }
    }

    /// The slot strategy for this kind.
    pub fn progression(&self) -> &'static dyn SlotProgression {
        match self {
            CasterKind::None => &NoCasting,
            CasterKind::Full => &FullCasting,
            CasterKind::Half => &HalfCasting,
            CasterKind::Third => &ThirdCasting,
            CasterKind::Pact => &PactMagic,
        }
    }

    pub fn slots_at(&self, level: u8) -> SpellSlotRow {
        self.progression().slots(level)
    }

    pub fn all() -> [CasterKind; 5] {
        [
            CasterKind::None,
            CasterKind::Full,
            CasterKind::Half,
            CasterKind::Third,
            CasterKind::Pact,
        ]
    }
}

impl fmt::Display for CasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Slot shape for one caster kind.
pub trait SlotProgression: Send + Sync {
    /// Maximum slots at a character level. Levels outside 1-20 have none.
    fn slots(&self, level: u8) -> SpellSlotRow;

    /// Whether slots of this spell level come back on a short rest.
    fn recovers_on_short_rest(&self, _spell_level: u8) -> bool {
        false
    }
}

/// Index into a 20-row table, or `None` outside 1-20.
fn row_index(level: u8) -> Option<usize> {
    (1..=20).contains(&level).then(|| level as usize - 1)
}

// ============================================================================
// Tables
// ============================================================================

const FULL_CASTER_SLOTS: [[u8; 9]; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

const HALF_CASTER_SLOTS: [[u8; 5]; 20] = [
    [0, 0, 0, 0, 0],
    [2, 0, 0, 0, 0],
    [3, 0, 0, 0, 0],
    [3, 0, 0, 0, 0],
    [4, 2, 0, 0, 0],
    [4, 2, 0, 0, 0],
    [4, 3, 0, 0, 0],
    [4, 3, 0, 0, 0],
    [4, 3, 2, 0, 0],
    [4, 3, 2, 0, 0],
    [4, 3, 3, 0, 0],
    [4, 3, 3, 0, 0],
    [4, 3, 3, 1, 0],
    [4, 3, 3, 1, 0],
    [4, 3, 3, 2, 0],
    [4, 3, 3, 2, 0],
    [4, 3, 3, 3, 1],
    [4, 3, 3, 3, 1],
    [4, 3, 3, 3, 2],
    [4, 3, 3, 3, 2],
];

const THIRD_CASTER_SLOTS: [[u8; 4]; 20] = [
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 0, 0, 0],
    [3, 0, 0, 0],
    [3, 0, 0, 0],
    [3, 0, 0, 0],
    [4, 2, 0, 0],
    [4, 2, 0, 0],
    [4, 2, 0, 0],
    [4, 3, 0, 0],
    [4, 3, 0, 0],
    [4, 3, 0, 0],
    [4, 3, 2, 0],
    [4, 3, 2, 0],
    [4, 3, 2, 0],
    [4, 3, 3, 0],
    [4, 3, 3, 0],
    [4, 3, 3, 0],
    [4, 3, 3, 1],
    [4, 3, 3, 1],
];

/// Pact magic (slot count, slot level) by character level.
const PACT_SLOTS: [(u8, u8); 20] = [
    (1, 1),
    (2, 1),
    (2, 2),
    (2, 2),
    (2, 3),
    (2, 3),
    (2, 4),
    (2, 4),
    (2, 5),
    (2, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (4, 5),
    (4, 5),
    (4, 5),
    (4, 5),
];

/// Highest spell level pact slots recover on a short rest.
pub const PACT_SHORT_REST_MAX_LEVEL: u8 = 5;

// ============================================================================
// Strategies
// ============================================================================

/// Classes with no spellcasting.
#[derive(Debug, Clone, Copy)]
pub struct NoCasting;

impl SlotProgression for NoCasting {
    fn slots(&self, _level: u8) -> SpellSlotRow {
        SpellSlotRow::empty()
    }
}

/// Wizard, cleric, druid, bard, sorcerer.
#[derive(Debug, Clone, Copy)]
pub struct FullCasting;

impl SlotProgression for FullCasting {
    fn slots(&self, level: u8) -> SpellSlotRow {
        row_index(level)
            .map(|i| SpellSlotRow::from_leveled(&FULL_CASTER_SLOTS[i]))
            .unwrap_or_default()
    }
}

/// Paladin and ranger. Nothing until level 2, tops out at 5th level slots.
#[derive(Debug, Clone, Copy)]
pub struct HalfCasting;

impl SlotProgression for HalfCasting {
    fn slots(&self, level: u8) -> SpellSlotRow {
        row_index(level)
            .map(|i| SpellSlotRow::from_leveled(&HALF_CASTER_SLOTS[i]))
            .unwrap_or_default()
    }
}

/// Eldritch knight and arcane trickster. Nothing until level 3.
#[derive(Debug, Clone, Copy)]
pub struct ThirdCasting;

impl SlotProgression for ThirdCasting {
    fn slots(&self, level: u8) -> SpellSlotRow {
        row_index(level)
            .map(|i| SpellSlotRow::from_leveled(&THIRD_CASTER_SLOTS[i]))
            .unwrap_or_default()
    }
}

/// Warlock. All slots share one spell level.
#[derive(Debug, Clone, Copy)]
pub struct PactMagic;

impl PactMagic {
    /// (slot count, slot level) at a character level.
    pub fn pact_slots(level: u8) -> Option<(u8, u8)> {
        row_index(level).map(|i| PACT_SLOTS[i])
    }
}

impl SlotProgression for PactMagic {
    fn slots(&self, level: u8) -> SpellSlotRow {
        let mut row = SpellSlotRow::empty();
        if let Some((count, slot_level)) = Self::pact_slots(level) {
            row.set(slot_level, count);
        }
        row
    }

    fn recovers_on_short_rest(&self, spell_level: u8) -> bool {
        (1..=PACT_SHORT_REST_MAX_LEVEL).contains(&spell_level)
    }
}
