//! The character aggregate.
//!
//! A [`Character`] owns its hit points and spell slots and changes only
//! through the operations here: damage, healing, slot use, rests and
//! level-up. Anything derived (final scores, proficiency, spell DC) is
//! recomputed from the [`Rulebook`] on every read.

use crate::abilities::{Ability, AbilityBreakdown, AbilityScores};
use crate::builder::{validate_base_scores, validate_point_buy};
use crate::combat::{saving_throw_bonus, CombatStats};
use crate::config::MAX_LEVEL;
use crate::error::EngineError;
use crate::experience::level_for_xp;
use crate::progression::{proficiency_bonus_for_level, SpellSlotRow};
use crate::reference::{BackgroundId, ClassId, RaceId};
use crate::resources::{max_hit_points, DamageReport, HitPoints, SlotUse, SpellSlotPool};
use crate::rulebook::Rulebook;
use crate::spells::KnownSpell;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Opaque owner reference. The engine never interprets it.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub background: Option<BackgroundId>,
    race: RaceId,
    class: ClassId,
    level: u8,
    #[serde(default)]
    experience: u32,
    base_scores: AbilityScores,
    hit_points: HitPoints,
    spell_slots: SpellSlotPool,
    #[serde(default)]
    pub(crate) spells: Vec<KnownSpell>,
}

/// Result of a successful level-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub previous_level: u8,
    pub new_level: u8,
    pub hp_gained: i32,
    pub proficiency_bonus: i8,
    pub max_spell_slots: SpellSlotRow,
    /// Feature labels from the new level's progression entry.
    pub features: Vec<String>,
}

/// What a rest restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestOutcome {
    pub hp_restored: i32,
    pub slots_regained: u32,
}

impl Character {
    /// Create a level 1 character at full HP and full slots.
    ///
    /// Base scores must be in the configured range, and a legal point buy
    /// when the rules enforce it.
    pub fn create(
        name: impl Into<String>,
        race: RaceId,
        class: ClassId,
        base_scores: AbilityScores,
        rules: &Rulebook,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::MissingName);
        }

        let config = rules.config();
        validate_base_scores(&base_scores, config)?;
        if config.enforce_point_buy {
            validate_point_buy(&base_scores, config.point_buy_budget)?;
        }

        let race_data = rules.race(&race)?;
        let class_data = rules.class(&class)?;
        let abilities = AbilityBreakdown::compute(
            base_scores,
            race_data.ability_bonuses,
            config.ability_score_cap,
        );

        let con = abilities.modifier(Ability::Constitution);
        let max_hp = max_hit_points(class_data.hit_die, con, 1);
        let slots = rules.progression().slot_row(&class, 1);

        tracing::debug!(%name, race = %race, class = %class, max_hp, "created character");

        Ok(Self {
            id: CharacterId::new(),
            name,
            owner: None,
            background: None,
            race,
            class,
            level: 1,
            experience: 0,
            base_scores,
            hit_points: HitPoints::new(max_hp),
            spell_slots: SpellSlotPool::full(&slots),
            spells: Vec::new(),
        })
    }

    pub fn race(&self) -> &RaceId {
        &self.race
    }

    pub fn class(&self) -> &ClassId {
        &self.class
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn base_scores(&self) -> &AbilityScores {
        &self.base_scores
    }

    pub fn hit_points(&self) -> &HitPoints {
        &self.hit_points
    }

    pub fn spell_slots(&self) -> &SpellSlotPool {
        &self.spell_slots
    }

    pub fn spells(&self) -> &[KnownSpell] {
        &self.spells
    }

    /// Check state that came from outside the engine, such as a save file.
    ///
    /// Level must be 1-20, current HP must sit in `0..=maximum`, maximum
    /// must be at least 1 and temporary HP can't be negative.
    pub fn validate(&self) -> Result<(), EngineError> {
        let inconsistent = |message: String| Err(EngineError::InconsistentCharacter(message));
        let hp = &self.hit_points;

        if !(1..=MAX_LEVEL).contains(&self.level) {
            return inconsistent(format!("level {} is outside 1-{}", self.level, MAX_LEVEL));
        }
        if hp.maximum < 1 {
            return inconsistent(format!("maximum HP {} is below 1", hp.maximum));
        }
        if !(0..=hp.maximum).contains(&hp.current) {
            return inconsistent(format!(
                "current HP {} is outside 0-{}",
                hp.current, hp.maximum
            ));
        }
        if hp.temporary < 0 {
            return inconsistent(format!("temporary HP {} is negative", hp.temporary));
        }
        Ok(())
    }

    // ========================================================================
    // Derived stats
    // ========================================================================

    /// Final scores and modifiers with racial bonuses applied.
    pub fn abilities(&self, rules: &Rulebook) -> Result<AbilityBreakdown, EngineError> {
        let race = rules.race(&self.race)?;
        Ok(AbilityBreakdown::compute(
            self.base_scores,
            race.ability_bonuses,
            rules.config().ability_score_cap,
        ))
    }

    pub fn proficiency_bonus(&self) -> i8 {
        proficiency_bonus_for_level(self.level)
    }

    pub fn combat_stats(&self, rules: &Rulebook) -> Result<CombatStats, EngineError> {
        let abilities = self.abilities(rules)?;
        let class = rules.class(&self.class)?;
        Ok(CombatStats::compute(&abilities, class, self.level))
    }

    pub fn saving_throw(&self, ability: Ability, rules: &Rulebook) -> Result<i8, EngineError> {
        let abilities = self.abilities(rules)?;
        let class = rules.class(&self.class)?;
        Ok(saving_throw_bonus(&abilities, class, self.level, ability))
    }

    /// Maximum slots at the current level.
    pub fn max_spell_slots(&self, rules: &Rulebook) -> SpellSlotRow {
        rules.progression().slot_row(&self.class, self.level)
    }

    // ========================================================================
    // Resources
    // ========================================================================

    pub fn take_damage(&mut self, amount: i32) -> DamageReport {
        self.hit_points.take_damage(amount)
    }

    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hit_points.heal(amount)
    }

    pub fn grant_temporary_hp(&mut self, amount: i32) -> i32 {
        self.hit_points.grant_temporary(amount)
    }

    /// Spend a slot. Level 0 always succeeds and spends nothing.
    pub fn use_spell_slot(&mut self, spell_level: u8) -> Result<SlotUse, EngineError> {
        self.spell_slots.spend(spell_level)
    }

    /// Full HP, no temporary HP, every slot back.
    pub fn long_rest(&mut self, rules: &Rulebook) -> RestOutcome {
        let max = self.max_spell_slots(rules);
        let outcome = RestOutcome {
            hp_restored: self.hit_points.restore(),
            slots_regained: self.spell_slots.refill(&max),
        };
        tracing::debug!(character = %self.id, ?outcome, "long rest");
        outcome
    }

    /// Only slots the caster kind recovers on a short rest come back.
    /// Hit points are untouched.
    pub fn short_rest(&mut self, rules: &Rulebook) -> Result<RestOutcome, EngineError> {
        let class = rules.class(&self.class)?;
        let progression = class.caster_kind.progression();
        let max = self.max_spell_slots(rules);

        let slots_regained = self
            .spell_slots
            .refill_where(&max, |level| progression.recovers_on_short_rest(level));

        tracing::debug!(character = %self.id, slots_regained, "short rest");
        Ok(RestOutcome {
            hp_restored: 0,
            slots_regained,
        })
    }

    // ========================================================================
    // Progression
    // ========================================================================

    /// Advance exactly one level.
    ///
    /// Fails at the level cap without changing anything. Otherwise raises
    /// max HP, adds the gain to current HP, and refills every slot.
    pub fn level_up(&mut self, rules: &Rulebook) -> Result<LevelUp, EngineError> {
        let cap = rules.config().level_cap();
        if self.level >= cap {
            return Err(EngineError::MaxLevel(cap));
        }

        let abilities = self.abilities(rules)?;
        let class = rules.class(&self.class)?;
        let new_level = self.level + 1;
        let new_max = max_hit_points(
            class.hit_die,
            abilities.modifier(Ability::Constitution),
            new_level,
        );
        let max_slots = rules.progression().slot_row(&self.class, new_level);
        let features = rules
            .progression()
            .entry(&self.class, new_level)
            .map(|entry| entry.features.clone())
            .unwrap_or_default();

        let previous_level = self.level;
        self.level = new_level;
        let hp_gained = self.hit_points.raise_maximum(new_max);
        self.spell_slots.refill(&max_slots);

        tracing::debug!(character = %self.id, new_level, hp_gained, "level up");

        Ok(LevelUp {
            previous_level,
            new_level,
            hp_gained,
            proficiency_bonus: proficiency_bonus_for_level(new_level),
            max_spell_slots: max_slots,
            features,
        })
    }

    /// Add experience. Returns how many levels the character could now take.
    ///
    /// Experience never levels a character by itself.
    pub fn award_experience(&mut self, amount: u32) -> u8 {
        self.experience = self.experience.saturating_add(amount);
        self.pending_levels()
    }

    pub fn pending_levels(&self) -> u8 {
        level_for_xp(self.experience).saturating_sub(self.level)
    }
}
