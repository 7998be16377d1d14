//! Sample characters for tests.
//!
//! Everything here uses the SRD rulebook and fixed scores, so results are
//! deterministic.

use crate::abilities::{Ability, AbilityScores};
use crate::character::Character;
use crate::error::EngineError;
use crate::reference::{ClassId, RaceId};
use crate::rulebook::Rulebook;

/// Standard array with the class's primary ability at 15.
pub fn sample_scores(primary: Ability) -> AbilityScores {
    let order = [
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Wisdom,
        Ability::Intelligence,
        Ability::Charisma,
        Ability::Strength,
    ];
    let mut scores = AbilityScores::default();
    scores.set(primary, 15);
    let rest = order.iter().filter(|&&a| a != primary);
    for (ability, value) in rest.zip([14, 13, 12, 10, 8]) {
        scores.set(*ability, value);
    }
    scores
}

/// Level up until `level` is reached.
pub fn advance_to(
    character: &mut Character,
    level: u8,
    rules: &Rulebook,
) -> Result<(), EngineError> {
    while character.level() < level {
        character.level_up(rules)?;
    }
    Ok(())
}

/// A human of the given SRD class at the given level.
pub fn sample_character(class: &str, level: u8) -> Result<Character, EngineError> {
    let rules = Rulebook::srd();
    let class = ClassId::new(class);
    let primary = rules.class(&class)?.primary_ability;

    let mut character = Character::create(
        format!("Sample {}", class),
        RaceId::new("human"),
        class,
        sample_scores(primary),
        rules,
    )?;
    advance_to(&mut character, level, rules)?;
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scores_are_standard_array() {
        let scores = sample_scores(Ability::Intelligence);
        assert_eq!(scores.intelligence, 15);
        assert_eq!(scores.dexterity, 14);
        assert_eq!(scores.constitution, 13);
        assert_eq!(scores.wisdom, 12);
        assert_eq!(scores.charisma, 10);
        assert_eq!(scores.strength, 8);
    }

    #[test]
    fn test_sample_character_level() {
        let cleric = sample_character("cleric", 7).unwrap();
        assert_eq!(cleric.level(), 7);
        assert_eq!(cleric.class().as_str(), "cleric");
    }
}
