//! Combat statistics derived from abilities, class and level.

use crate::abilities::{Ability, AbilityBreakdown};
use crate::progression::proficiency_bonus_for_level;
use crate::reference::CharacterClass;
use serde::{Deserialize, Serialize};

/// Spellcasting numbers for a casting class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingStats {
    pub ability: Ability,
    /// `8 + proficiency + casting modifier`
    pub save_dc: i8,
    /// `proficiency + casting modifier`
    pub attack_bonus: i8,
}

/// Derived combat numbers. Recomputed on every read; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub proficiency_bonus: i8,
    /// Unarmored: `10 + DEX modifier`.
    pub armor_class: i8,
    pub initiative_bonus: i8,
    /// `None` for classes without spellcasting.
    pub spellcasting: Option<SpellcastingStats>,
}

impl CombatStats {
    pub fn compute(abilities: &AbilityBreakdown, class: &CharacterClass, level: u8) -> Self {
        let proficiency_bonus = proficiency_bonus_for_level(level);
        let dex = abilities.modifier(Ability::Dexterity);

        let spellcasting = class.spellcasting_ability.map(|ability| {
            let modifier = abilities.modifier(ability);
            SpellcastingStats {
                ability,
                save_dc: 8 + proficiency_bonus + modifier,
                attack_bonus: proficiency_bonus + modifier,
            }
        });

        Self {
            proficiency_bonus,
            armor_class: 10 + dex,
            initiative_bonus: dex,
            spellcasting,
        }
    }

    pub fn spell_save_dc(&self) -> Option<i8> {
        self.spellcasting.map(|s| s.save_dc)
    }

    pub fn spell_attack_bonus(&self) -> Option<i8> {
        self.spellcasting.map(|s| s.attack_bonus)
    }
}

/// Saving throw bonus: the modifier, plus proficiency if the class grants it.
pub fn saving_throw_bonus(
    abilities: &AbilityBreakdown,
    class: &CharacterClass,
    level: u8,
    ability: Ability,
) -> i8 {
    let modifier = abilities.modifier(ability);
    if class.has_save_proficiency(ability) {
        modifier + proficiency_bonus_for_level(level)
    } else {
        modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{AbilityBonuses, AbilityScores};
    use crate::caster::CasterKind;

    fn wizard() -> CharacterClass {
        CharacterClass::new(
            "wizard",
            "Wizard",
            6,
            Ability::Intelligence,
            [Ability::Intelligence, Ability::Wisdom],
        )
        .with_spellcasting(Ability::Intelligence, CasterKind::Full)
    }

    fn fighter() -> CharacterClass {
        CharacterClass::new(
            "fighter",
            "Fighter",
            10,
            Ability::Strength,
            [Ability::Strength, Ability::Constitution],
        )
    }

    #[test]
    fn test_wizard_stats() {
        // INT 16 + 2 = 18 (+4), DEX 14 (+2)
        let base = AbilityScores::new(8, 14, 13, 16, 12, 10);
        let bonuses = AbilityBonuses::default().with(Ability::Intelligence, 2);
        let abilities = AbilityBreakdown::compute(base, bonuses, 20);

        let stats = CombatStats::compute(&abilities, &wizard(), 5);
        assert_eq!(stats.proficiency_bonus, 3);
        assert_eq!(stats.armor_class, 12);
        assert_eq!(stats.initiative_bonus, 2);
        assert_eq!(stats.spell_save_dc(), Some(15));
        assert_eq!(stats.spell_attack_bonus(), Some(7));
    }

    #[test]
    fn test_fighter_has_no_spellcasting() {
        let abilities = AbilityBreakdown::compute(
            AbilityScores::standard_array(),
            AbilityBonuses::default(),
            20,
        );
        for level in [1, 5, 20] {
            let stats = CombatStats::compute(&abilities, &fighter(), level);
            assert!(stats.spellcasting.is_none());
            assert_eq!(stats.spell_save_dc(), None);
        }
    }

    #[test]
    fn test_huge_scores_stay_in_range() {
        let base = AbilityScores::new(10, 250, 10, 250, 10, 10);
        let abilities = AbilityBreakdown::compute(base, AbilityBonuses::default(), 255);

        let stats = CombatStats::compute(&abilities, &wizard(), 20);
        // Scores stop at 30, so +10
        assert_eq!(stats.armor_class, 20);
        assert_eq!(stats.spell_save_dc(), Some(24));
        assert_eq!(stats.spell_attack_bonus(), Some(16));
    }

    #[test]
    fn test_low_dex_armor_class() {
        let base = AbilityScores::new(15, 9, 14, 10, 10, 10);
        let abilities = AbilityBreakdown::compute(base, AbilityBonuses::default(), 20);
        let stats = CombatStats::compute(&abilities, &fighter(), 1);
        // DEX 9 is -1
        assert_eq!(stats.armor_class, 9);
        assert_eq!(stats.initiative_bonus, -1);
    }

    #[test]
    fn test_saving_throws() {
        let abilities = AbilityBreakdown::compute(
            AbilityScores::new(16, 10, 14, 10, 10, 8),
            AbilityBonuses::default(),
            20,
        );
        let fighter = fighter();
        assert_eq!(saving_throw_bonus(&abilities, &fighter, 1, Ability::Strength), 5);
        assert_eq!(saving_throw_bonus(&abilities, &fighter, 9, Ability::Constitution), 6);
        assert_eq!(saving_throw_bonus(&abilities, &fighter, 9, Ability::Charisma), -1);
    }
}
