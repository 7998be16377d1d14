//! Ability scores, racial bonuses and modifiers.
//!
//! Final scores are never stored. They are derived on every read from the
//! character's base scores and its race, so a changed race or cap is
//! reflected immediately.

use crate::config::ABILITY_SCORE_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six core abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    pub fn all() -> [Ability; 6] {
        [
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Modifier for a score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so 9 gives -1 and 8 gives -1.
pub fn modifier_for_score(score: u8) -> i8 {
    (score as i16 - 10).div_euclid(2) as i8
}

/// Six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AbilityScores {
    pub fn new(str: u8, dex: u8, con: u8, int: u8, wis: u8, cha: u8) -> Self {
        Self {
            strength: str,
            dexterity: dex,
            constitution: con,
            intelligence: int,
            wisdom: wis,
            charisma: cha,
        }
    }

    pub fn standard_array() -> Self {
        Self::new(15, 14, 13, 12, 10, 8)
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, value: u8) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }

    pub fn modifier(&self, ability: Ability) -> i8 {
        modifier_for_score(self.get(ability))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

/// Racial adjustments to each ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityBonuses {
    pub strength: i8,
    pub dexterity: i8,
    pub constitution: i8,
    pub intelligence: i8,
    pub wisdom: i8,
    pub charisma: i8,
}

impl AbilityBonuses {
    /// The same bonus to every ability.
    pub fn uniform(bonus: i8) -> Self {
        Self {
            strength: bonus,
            dexterity: bonus,
            constitution: bonus,
            intelligence: bonus,
            wisdom: bonus,
            charisma: bonus,
        }
    }

    /// Builder-style single bonus.
    pub fn with(mut self, ability: Ability, bonus: i8) -> Self {
        match ability {
            Ability::Strength => self.strength = bonus,
            Ability::Dexterity => self.dexterity = bonus,
            Ability::Constitution => self.constitution = bonus,
            Ability::Intelligence => self.intelligence = bonus,
            Ability::Wisdom => self.wisdom = bonus,
            Ability::Charisma => self.charisma = bonus,
        }
        self
    }

    pub fn get(&self, ability: Ability) -> i8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// Final scores computed from base scores, racial bonuses and the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityBreakdown {
    base: AbilityScores,
    bonuses: AbilityBonuses,
    cap: u8,
}

impl AbilityBreakdown {
    pub fn compute(base: AbilityScores, bonuses: AbilityBonuses, cap: u8) -> Self {
        Self { base, bonuses, cap }
    }

    /// `min(cap, base + bonus)`. A negative total is held at 1, and the cap
    /// itself never goes above 30.
    pub fn final_score(&self, ability: Ability) -> u8 {
        let raw = self.base.get(ability) as i16 + self.bonuses.get(ability) as i16;
        let cap = self.cap.clamp(1, ABILITY_SCORE_LIMIT);
        raw.clamp(1, cap as i16) as u8
    }

    pub fn modifier(&self, ability: Ability) -> i8 {
        modifier_for_score(self.final_score(ability))
    }

    pub fn base(&self) -> &AbilityScores {
        &self.base
    }

    /// All six final scores.
    pub fn final_scores(&self) -> AbilityScores {
        let mut scores = self.base;
        for ability in Ability::all() {
            scores.set(ability, self.final_score(ability));
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_floor_division() {
        assert_eq!(modifier_for_score(3), -4);
        assert_eq!(modifier_for_score(8), -1);
        assert_eq!(modifier_for_score(9), -1);
        assert_eq!(modifier_for_score(10), 0);
        assert_eq!(modifier_for_score(11), 0);
        assert_eq!(modifier_for_score(20), 5);
        assert_eq!(modifier_for_score(1), -5);
    }

    #[test]
    fn test_final_score_capped() {
        let base = AbilityScores::new(18, 10, 10, 10, 10, 10);
        let bonuses = AbilityBonuses::default().with(Ability::Strength, 4);
        let breakdown = AbilityBreakdown::compute(base, bonuses, 20);

        // 18 + 4 is capped to 20
        assert_eq!(breakdown.final_score(Ability::Strength), 20);
        assert_eq!(breakdown.modifier(Ability::Strength), 5);
        // Base is untouched
        assert_eq!(breakdown.base().strength, 18);
    }

    #[test]
    fn test_oversized_cap_held_at_thirty() {
        let base = AbilityScores::new(250, 250, 250, 250, 250, 250);
        let breakdown = AbilityBreakdown::compute(base, AbilityBonuses::default(), 255);
        assert_eq!(breakdown.final_score(Ability::Dexterity), 30);
        assert_eq!(breakdown.modifier(Ability::Dexterity), 10);
    }

    #[test]
    fn test_final_scores_apply_each_bonus() {
        let base = AbilityScores::standard_array();
        let bonuses = AbilityBonuses::default()
            .with(Ability::Intelligence, 2)
            .with(Ability::Constitution, 1);
        let finals = AbilityBreakdown::compute(base, bonuses, 20).final_scores();

        assert_eq!(finals.intelligence, 14);
        assert_eq!(finals.constitution, 14);
        assert_eq!(finals.strength, 15);
    }

    #[test]
    fn test_uniform_bonus() {
        let human = AbilityBonuses::uniform(1);
        for ability in Ability::all() {
            assert_eq!(human.get(ability), 1);
        }
    }

    #[test]
    fn test_ability_serializes_lowercase() {
        let json = serde_json::to_string(&Ability::Wisdom).unwrap();
        assert_eq!(json, "\"wisdom\"");
    }
}
