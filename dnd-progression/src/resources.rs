//! Hit points and spell slots: the consumable pools.

use crate::error::EngineError;
use crate::progression::SpellSlotRow;
use serde::{Deserialize, Serialize};

/// Maximum hit points for a class at a level.
///
/// Level 1 gets the full hit die plus CON. Every later level adds the fixed
/// average `hit_die / 2 + 1` plus CON. The total never drops below 1.
pub fn max_hit_points(hit_die: u8, con_modifier: i8, level: u8) -> i32 {
    let con = con_modifier as i32;
    let first = hit_die as i32 + con;
    let per_level = (hit_die / 2) as i32 + 1 + con;
    let extra_levels = level.max(1) as i32 - 1;
    (first + per_level * extra_levels).max(1)
}

// ============================================================================
// Hit Points
// ============================================================================

/// Current, maximum and temporary hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub maximum: i32,
    pub temporary: i32,
}

/// What a hit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    pub absorbed_by_temporary: i32,
    pub taken_from_current: i32,
    pub dropped_to_zero: bool,
}

impl HitPoints {
    pub fn new(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
            temporary: 0,
        }
    }

    /// Temporary hit points soak damage first. Current HP stops at 0.
    /// Negative amounts count as 0.
    pub fn take_damage(&mut self, amount: i32) -> DamageReport {
        let amount = amount.max(0);

        let absorbed = amount.min(self.temporary);
        self.temporary -= absorbed;

        let remaining = amount - absorbed;
        let taken = remaining.min(self.current);
        self.current -= taken;

        DamageReport {
            absorbed_by_temporary: absorbed,
            taken_from_current: taken,
            dropped_to_zero: self.is_at_zero() && taken > 0,
        }
    }

    /// Heal up to the maximum. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = (self.current + amount.max(0)).min(self.maximum);
        self.current - old
    }

    /// Temporary HP don't stack; the larger pool wins.
    pub fn grant_temporary(&mut self, amount: i32) -> i32 {
        self.temporary = self.temporary.max(amount);
        self.temporary
    }

    /// Set a new maximum and add the difference to current HP.
    ///
    /// Returns the change in maximum.
    pub fn raise_maximum(&mut self, maximum: i32) -> i32 {
        let gained = maximum - self.maximum;
        self.maximum = maximum;
        self.current = (self.current + gained).clamp(0, maximum);
        gained
    }

    /// Full HP, temporary HP cleared. Returns HP restored.
    pub fn restore(&mut self) -> i32 {
        let restored = self.maximum - self.current;
        self.current = self.maximum;
        self.temporary = 0;
        restored
    }

    pub fn is_at_zero(&self) -> bool {
        self.current == 0
    }
}

// ============================================================================
// Spell Slots
// ============================================================================

/// Remaining slots for spell levels 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSlotPool {
    remaining: [u8; 9],
}

/// Outcome of spending a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotUse {
    /// Level 0. Cantrips cost nothing.
    Cantrip,
    Spent { level: u8, remaining: u8 },
}

impl SpellSlotPool {
    /// A pool filled to the given maxima.
    pub fn full(max: &SpellSlotRow) -> Self {
        Self {
            remaining: max.leveled(),
        }
    }

    pub fn remaining(&self, spell_level: u8) -> u8 {
        match spell_level {
            1..=9 => self.remaining[spell_level as usize - 1],
            _ => 0,
        }
    }

    /// Counts for spell levels 1-9.
    pub fn as_array(&self) -> [u8; 9] {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.remaining.iter().map(|&n| n as u32).sum()
    }

    /// Spend one slot. Level 0 always succeeds and touches nothing.
    pub fn spend(&mut self, spell_level: u8) -> Result<SlotUse, EngineError> {
        match spell_level {
            0 => Ok(SlotUse::Cantrip),
            1..=9 => {
                let slot = &mut self.remaining[spell_level as usize - 1];
                if *slot == 0 {
                    return Err(EngineError::NoSlotRemaining(spell_level));
                }
                *slot -= 1;
                Ok(SlotUse::Spent {
                    level: spell_level,
                    remaining: *slot,
                })
            }
            _ => Err(EngineError::InvalidSpellLevel(spell_level)),
        }
    }

    /// Reset every level to its maximum. Returns slots regained.
    pub fn refill(&mut self, max: &SpellSlotRow) -> u32 {
        let regained = self.regained_towards(max, |_| true);
        self.remaining = max.leveled();
        regained
    }

    /// Reset the levels matching `recovers` to their maximum.
    ///
    /// Levels with no slots at this level are left as they are.
    pub fn refill_where(&mut self, max: &SpellSlotRow, recovers: impl Fn(u8) -> bool) -> u32 {
        let regained = self.regained_towards(max, &recovers);
        for spell_level in 1..=9u8 {
            let maximum = max.get(spell_level);
            if maximum > 0 && recovers(spell_level) {
                self.remaining[spell_level as usize - 1] = maximum;
            }
        }
        regained
    }

    fn regained_towards(&self, max: &SpellSlotRow, recovers: impl Fn(u8) -> bool) -> u32 {
        (1..=9u8)
            .filter(|&level| recovers(level))
            .map(|level| max.get(level).saturating_sub(self.remaining(level)) as u32)
            .sum()
    }
}
