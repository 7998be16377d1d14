//! Standard reference data from the 5e SRD.
//!
//! Races, classes, backgrounds, and the full level 1-20 progression for
//! every class. Slot counts are never written out per class here; each
//! entry takes them from its class's caster kind.

use crate::abilities::{Ability, AbilityBonuses};
use crate::caster::CasterKind;
use crate::progression::{ProgressionEntry, ProgressionTable};
use crate::reference::{Background, CharacterClass, Race};

use Ability::*;

// ============================================================================
// Races
// ============================================================================

/// The nine PHB races.
pub fn races() -> Vec<Race> {
    let bonus = AbilityBonuses::default;
    vec![
        Race::new("dragonborn", "Dragonborn", bonus().with(Strength, 2).with(Charisma, 1))
            .with_traits(&["Draconic Ancestry", "Breath Weapon", "Damage Resistance"]),
        Race::new("dwarf", "Dwarf", bonus().with(Constitution, 2))
            .with_traits(&["Darkvision", "Dwarven Resilience", "Stonecunning"]),
        Race::new("elf", "Elf", bonus().with(Dexterity, 2))
            .with_traits(&["Darkvision", "Keen Senses", "Fey Ancestry", "Trance"]),
        Race::new("gnome", "Gnome", bonus().with(Intelligence, 2).with(Constitution, 1))
            .with_traits(&["Darkvision", "Gnome Cunning"]),
        Race::new("half-elf", "Half-Elf", bonus().with(Charisma, 2))
            .with_traits(&["Darkvision", "Fey Ancestry", "Skill Versatility"]),
        Race::new("half-orc", "Half-Orc", bonus().with(Strength, 2).with(Constitution, 1))
            .with_traits(&["Darkvision", "Relentless Endurance", "Savage Attacks"]),
        Race::new("halfling", "Halfling", bonus().with(Dexterity, 2))
            .with_traits(&["Lucky", "Brave", "Halfling Nimbleness"]),
        Race::new("human", "Human", AbilityBonuses::uniform(1)),
        Race::new("tiefling", "Tiefling", bonus().with(Intelligence, 1).with(Charisma, 2))
            .with_traits(&["Darkvision", "Hellish Resistance", "Infernal Legacy"]),
    ]
}

// ============================================================================
// Classes
// ============================================================================

/// The twelve PHB classes plus the two third-caster archetypes.
///
/// Eldritch knight and arcane trickster are separate records so that plain
/// fighters and rogues stay non-casters.
pub fn classes() -> Vec<CharacterClass> {
    vec![
        CharacterClass::new("barbarian", "Barbarian", 12, Strength, [Strength, Constitution]),
        CharacterClass::new("bard", "Bard", 8, Charisma, [Dexterity, Charisma])
            .with_spellcasting(Charisma, CasterKind::Full),
        CharacterClass::new("cleric", "Cleric", 8, Wisdom, [Wisdom, Charisma])
            .with_spellcasting(Wisdom, CasterKind::Full),
        CharacterClass::new("druid", "Druid", 8, Wisdom, [Intelligence, Wisdom])
            .with_spellcasting(Wisdom, CasterKind::Full),
        CharacterClass::new("fighter", "Fighter", 10, Strength, [Strength, Constitution]),
        CharacterClass::new("monk", "Monk", 8, Dexterity, [Strength, Dexterity]),
        CharacterClass::new("paladin", "Paladin", 10, Strength, [Wisdom, Charisma])
            .with_spellcasting(Charisma, CasterKind::Half),
        CharacterClass::new("ranger", "Ranger", 10, Dexterity, [Strength, Dexterity])
            .with_spellcasting(Wisdom, CasterKind::Half),
        CharacterClass::new("rogue", "Rogue", 8, Dexterity, [Dexterity, Intelligence]),
        CharacterClass::new("sorcerer", "Sorcerer", 6, Charisma, [Constitution, Charisma])
            .with_spellcasting(Charisma, CasterKind::Full),
        CharacterClass::new("warlock", "Warlock", 8, Charisma, [Wisdom, Charisma])
            .with_spellcasting(Charisma, CasterKind::Pact),
        CharacterClass::new("wizard", "Wizard", 6, Intelligence, [Intelligence, Wisdom])
            .with_spellcasting(Intelligence, CasterKind::Full),
        CharacterClass::new(
            "eldritch-knight",
            "Eldritch Knight",
            10,
            Strength,
            [Strength, Constitution],
        )
            .with_spellcasting(Intelligence, CasterKind::Third),
        CharacterClass::new(
            "arcane-trickster",
            "Arcane Trickster",
            8,
            Dexterity,
            [Dexterity, Intelligence],
        )
            .with_spellcasting(Intelligence, CasterKind::Third),
    ]
}

// ============================================================================
// Backgrounds
// ============================================================================

pub fn backgrounds() -> Vec<Background> {
    vec![
        Background::new("acolyte", "Acolyte", &["insight", "religion"])
            .with_languages(&["two_of_choice"]),
        Background::new("criminal", "Criminal", &["deception", "stealth"])
            .with_tools(&["thieves_tools", "gaming_set"]),
        Background::new("folk-hero", "Folk Hero", &["animal_handling", "survival"])
            .with_tools(&["artisan_tools", "vehicles_land"]),
        Background::new("noble", "Noble", &["history", "persuasion"])
            .with_tools(&["gaming_set"])
            .with_languages(&["one_of_choice"]),
        Background::new("sage", "Sage", &["arcana", "history"])
            .with_languages(&["two_of_choice"]),
        Background::new("soldier", "Soldier", &["athletics", "intimidation"])
            .with_tools(&["gaming_set", "vehicles_land"]),
    ]
}

// ============================================================================
// Progression
// ============================================================================

type Features = &'static [(u8, &'static [&'static str])];

/// Known-spell columns and feature labels for one class.
struct ClassColumns {
    slug: &'static str,
    cantrips: [u8; 20],
    spells_known: [u8; 20],
    features: Features,
}

const NONE: [u8; 20] = [0; 20];

const ASI: &[&str] = &["Ability Score Improvement"];

const WIZARD_FEATURES: Features = &[
    (1, &["Spellcasting", "Arcane Recovery"]),
    (2, &["Arcane Tradition"]),
    (3, &["Arcane Tradition Feature"]),
    (4, ASI),
    (6, &["Arcane Tradition Feature"]),
    (8, ASI),
    (10, &["Arcane Tradition Feature"]),
    (12, ASI),
    (14, &["Arcane Tradition Feature"]),
    (16, ASI),
    (18, &["Spell Mastery"]),
    (19, ASI),
    (20, &["Signature Spell"]),
];

const SORCERER_FEATURES: Features = &[
    (1, &["Spellcasting", "Sorcerous Origin"]),
    (2, &["Font of Magic"]),
    (3, &["Metamagic"]),
    (4, ASI),
    (6, &["Sorcerous Origin Feature"]),
    (8, ASI),
    (10, &["Metamagic", "Sorcerous Origin Feature"]),
    (12, ASI),
    (14, &["Sorcerous Origin Feature"]),
    (16, ASI),
    (17, &["Metamagic"]),
    (18, &["Sorcerous Origin Feature"]),
    (19, ASI),
    (20, &["Sorcerous Restoration"]),
];

const BARD_FEATURES: Features = &[
    (1, &["Spellcasting", "Bardic Inspiration"]),
    (2, &["Jack of All Trades", "Song of Rest"]),
    (3, &["Bard College", "Expertise"]),
    (4, ASI),
    (5, &["Bardic Inspiration (d8)", "Font of Inspiration"]),
    (6, &["Countercharm", "Bard College Feature"]),
    (8, ASI),
    (9, &["Song of Rest (d8)"]),
    (10, &["Bardic Inspiration (d10)", "Expertise", "Magical Secrets"]),
    (12, ASI),
    (13, &["Song of Rest (d10)"]),
    (14, &["Magical Secrets", "Bard College Feature"]),
    (15, &["Bardic Inspiration (d12)"]),
    (16, ASI),
    (17, &["Song of Rest (d12)"]),
    (18, &["Magical Secrets"]),
    (19, ASI),
    (20, &["Superior Inspiration"]),
];

const CLERIC_FEATURES: Features = &[
    (1, &["Spellcasting", "Divine Domain"]),
    (2, &["Channel Divinity", "Divine Domain Feature"]),
    (4, ASI),
    (5, &["Destroy Undead (CR 1/2)"]),
    (6, &["Channel Divinity (2/rest)", "Divine Domain Feature"]),
    (8, &["Ability Score Improvement", "Destroy Undead (CR 1)", "Divine Domain Feature"]),
    (10, &["Divine Intervention"]),
    (11, &["Destroy Undead (CR 2)"]),
    (12, ASI),
    (14, &["Destroy Undead (CR 3)"]),
    (16, ASI),
    (17, &["Destroy Undead (CR 4)", "Divine Domain Feature"]),
    (18, &["Channel Divinity (3/rest)"]),
    (19, ASI),
    (20, &["Divine Intervention Improvement"]),
];

const DRUID_FEATURES: Features = &[
    (1, &["Spellcasting", "Druidcraft"]),
    (2, &["Wild Shape", "Druid Circle"]),
    (4, &["Wild Shape Improvement", "Ability Score Improvement"]),
    (6, &["Druid Circle Feature"]),
    (8, &["Wild Shape Improvement", "Ability Score Improvement"]),
    (10, &["Druid Circle Feature"]),
    (12, ASI),
    (14, &["Druid Circle Feature"]),
    (16, ASI),
    (18, &["Timeless Body", "Beast Spells"]),
    (19, ASI),
    (20, &["Archdruid"]),
];

const PALADIN_FEATURES: Features = &[
    (1, &["Divine Sense", "Lay on Hands"]),
    (2, &["Fighting Style", "Spellcasting", "Divine Smite"]),
    (3, &["Divine Health", "Sacred Oath"]),
    (4, ASI),
    (5, &["Extra Attack"]),
    (6, &["Aura of Protection"]),
    (7, &["Sacred Oath Feature"]),
    (8, ASI),
    (10, &["Aura of Courage"]),
    (11, &["Improved Divine Smite"]),
    (12, ASI),
    (14, &["Cleansing Touch"]),
    (15, &["Sacred Oath Feature"]),
    (16, ASI),
    (18, &["Aura Improvements"]),
    (19, ASI),
    (20, &["Sacred Oath Feature"]),
];

const RANGER_FEATURES: Features = &[
    (1, &["Favored Enemy", "Natural Explorer"]),
    (2, &["Fighting Style", "Spellcasting"]),
    (3, &["Ranger Archetype", "Primeval Awareness"]),
    (4, ASI),
    (5, &["Extra Attack"]),
    (6, &["Favored Enemy and Natural Explorer improvements"]),
    (7, &["Ranger Archetype Feature"]),
    (8, &["Ability Score Improvement", "Lands Stride"]),
    (10, &["Natural Explorer improvement", "Hide in Plain Sight"]),
    (11, &["Ranger Archetype Feature"]),
    (12, ASI),
    (14, &["Favored Enemy improvement", "Vanish"]),
    (15, &["Ranger Archetype Feature"]),
    (16, ASI),
    (18, &["Feral Senses"]),
    (19, ASI),
    (20, &["Foe Slayer"]),
];

const WARLOCK_FEATURES: Features = &[
    (1, &["Otherworldly Patron", "Pact Magic"]),
    (2, &["Eldritch Invocations"]),
    (3, &["Pact Boon"]),
    (4, ASI),
    (6, &["Otherworldly Patron Feature"]),
    (8, ASI),
    (10, &["Otherworldly Patron Feature"]),
    (11, &["Mystic Arcanum (6th level)"]),
    (12, ASI),
    (13, &["Mystic Arcanum (7th level)"]),
    (14, &["Otherworldly Patron Feature"]),
    (15, &["Mystic Arcanum (8th level)"]),
    (16, ASI),
    (17, &["Mystic Arcanum (9th level)"]),
    (19, ASI),
    (20, &["Eldritch Master"]),
];

const FIGHTER_FEATURES: Features = &[
    (1, &["Fighting Style", "Second Wind"]),
    (2, &["Action Surge"]),
    (3, &["Martial Archetype"]),
    (4, ASI),
    (5, &["Extra Attack"]),
    (6, ASI),
    (7, &["Martial Archetype Feature"]),
    (8, ASI),
    (9, &["Indomitable"]),
    (10, &["Martial Archetype Feature"]),
    (11, &["Extra Attack (2)"]),
    (12, ASI),
    (13, &["Indomitable (2/rest)"]),
    (14, ASI),
    (15, &["Martial Archetype Feature"]),
    (16, ASI),
    (17, &["Action Surge (2/rest)", "Indomitable (3/rest)"]),
    (18, &["Martial Archetype Feature"]),
    (19, ASI),
    (20, &["Extra Attack (3)"]),
];

const ELDRITCH_KNIGHT_FEATURES: Features = &[
    (1, &["Fighting Style", "Second Wind"]),
    (2, &["Action Surge"]),
    (3, &["Martial Archetype", "Spellcasting", "Weapon Bond"]),
    (4, ASI),
    (5, &["Extra Attack"]),
    (6, ASI),
    (7, &["War Magic"]),
    (8, ASI),
    (9, &["Indomitable"]),
    (10, &["Eldritch Strike"]),
    (11, &["Extra Attack (2)"]),
    (12, ASI),
    (13, &["Indomitable (2/rest)"]),
    (14, ASI),
    (15, &["Arcane Charge"]),
    (16, ASI),
    (17, &["Action Surge (2/rest)", "Indomitable (3/rest)"]),
    (18, &["Improved War Magic"]),
    (19, ASI),
    (20, &["Extra Attack (3)"]),
];

const ROGUE_FEATURES: Features = &[
    (1, &["Expertise", "Sneak Attack", "Thieves Cant"]),
    (2, &["Cunning Action"]),
    (3, &["Roguish Archetype"]),
    (4, ASI),
    (5, &["Uncanny Dodge"]),
    (6, &["Expertise"]),
    (7, &["Evasion"]),
    (8, ASI),
    (9, &["Roguish Archetype Feature"]),
    (10, ASI),
    (11, &["Reliable Talent"]),
    (12, ASI),
    (13, &["Roguish Archetype Feature"]),
    (14, &["Blindsense"]),
    (15, &["Slippery Mind"]),
    (16, ASI),
    (17, &["Roguish Archetype Feature"]),
    (18, &["Elusive"]),
    (19, ASI),
    (20, &["Stroke of Luck"]),
];

const ARCANE_TRICKSTER_FEATURES: Features = &[
    (1, &["Expertise", "Sneak Attack", "Thieves Cant"]),
    (2, &["Cunning Action"]),
    (3, &["Roguish Archetype", "Spellcasting", "Mage Hand Legerdemain"]),
    (4, ASI),
    (5, &["Uncanny Dodge"]),
    (6, &["Expertise"]),
    (7, &["Evasion"]),
    (8, ASI),
    (9, &["Magical Ambush"]),
    (10, ASI),
    (11, &["Reliable Talent"]),
    (12, ASI),
    (13, &["Versatile Trickster"]),
    (14, &["Blindsense"]),
    (15, &["Slippery Mind"]),
    (16, ASI),
    (17, &["Spell Thief"]),
    (18, &["Elusive"]),
    (19, ASI),
    (20, &["Stroke of Luck"]),
];

const BARBARIAN_FEATURES: Features = &[
    (1, &["Rage", "Unarmored Defense"]),
    (2, &["Reckless Attack", "Danger Sense"]),
    (3, &["Primal Path"]),
    (4, ASI),
    (5, &["Extra Attack", "Fast Movement"]),
    (6, &["Path Feature"]),
    (7, &["Feral Instinct"]),
    (8, ASI),
    (9, &["Brutal Critical (1 die)"]),
    (10, &["Path Feature"]),
    (11, &["Relentless Rage"]),
    (12, ASI),
    (13, &["Brutal Critical (2 dice)"]),
    (14, &["Path Feature"]),
    (15, &["Persistent Rage"]),
    (16, ASI),
    (17, &["Brutal Critical (3 dice)"]),
    (18, &["Indomitable Might"]),
    (19, ASI),
    (20, &["Primal Champion"]),
];

const MONK_FEATURES: Features = &[
    (1, &["Unarmored Defense", "Martial Arts"]),
    (2, &["Ki", "Unarmored Movement"]),
    (3, &["Monastic Tradition", "Deflect Missiles"]),
    (4, &["Ability Score Improvement", "Slow Fall"]),
    (5, &["Extra Attack", "Stunning Strike"]),
    (6, &["Ki-Empowered Strikes", "Monastic Tradition Feature"]),
    (7, &["Evasion", "Stillness of Mind"]),
    (8, ASI),
    (9, &["Unarmored Movement Improvement"]),
    (10, &["Purity of Body"]),
    (11, &["Monastic Tradition Feature"]),
    (12, ASI),
    (13, &["Tongue of the Sun and Moon"]),
    (14, &["Diamond Soul"]),
    (15, &["Timeless Body"]),
    (16, ASI),
    (17, &["Monastic Tradition Feature"]),
    (18, &["Empty Body"]),
    (19, ASI),
    (20, &["Perfect Self"]),
];

const PREPARED_CANTRIPS: [u8; 20] = [3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5];
const TWO_THREE_FOUR_CANTRIPS: [u8; 20] = [
    2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
];
const THIRD_CASTER_SPELLS: [u8; 20] = [0, 0, 2, 3, 3, 3, 4, 4, 4, 5, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9];

const CLASS_COLUMNS: &[ClassColumns] = &[
    ClassColumns {
        slug: "barbarian",
        cantrips: NONE,
        spells_known: NONE,
        features: BARBARIAN_FEATURES,
    },
    ClassColumns {
        slug: "bard",
        cantrips: TWO_THREE_FOUR_CANTRIPS,
        spells_known: [4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 15, 16, 18, 19, 19, 20, 22, 22, 22],
        features: BARD_FEATURES,
    },
    ClassColumns {
        slug: "cleric",
        cantrips: PREPARED_CANTRIPS,
        spells_known: NONE,
        features: CLERIC_FEATURES,
    },
    ClassColumns {
        slug: "druid",
        cantrips: TWO_THREE_FOUR_CANTRIPS,
        spells_known: NONE,
        features: DRUID_FEATURES,
    },
    ClassColumns {
        slug: "fighter",
        cantrips: NONE,
        spells_known: NONE,
        features: FIGHTER_FEATURES,
    },
    ClassColumns {
        slug: "monk",
        cantrips: NONE,
        spells_known: NONE,
        features: MONK_FEATURES,
    },
    ClassColumns {
        slug: "paladin",
        cantrips: NONE,
        spells_known: NONE,
        features: PALADIN_FEATURES,
    },
    ClassColumns {
        slug: "ranger",
        cantrips: NONE,
        spells_known: [0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11],
        features: RANGER_FEATURES,
    },
    ClassColumns {
        slug: "rogue",
        cantrips: NONE,
        spells_known: NONE,
        features: ROGUE_FEATURES,
    },
    ClassColumns {
        slug: "sorcerer",
        cantrips: [4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
        spells_known: [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15],
        features: SORCERER_FEATURES,
    },
    ClassColumns {
        slug: "warlock",
        cantrips: TWO_THREE_FOUR_CANTRIPS,
        spells_known: [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15],
        features: WARLOCK_FEATURES,
    },
    ClassColumns {
        slug: "wizard",
        cantrips: PREPARED_CANTRIPS,
        spells_known: NONE,
        features: WIZARD_FEATURES,
    },
    ClassColumns {
        slug: "eldritch-knight",
        cantrips: [0, 0, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
        spells_known: THIRD_CASTER_SPELLS,
        features: ELDRITCH_KNIGHT_FEATURES,
    },
    ClassColumns {
        slug: "arcane-trickster",
        cantrips: [0, 0, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
        spells_known: THIRD_CASTER_SPELLS,
        features: ARCANE_TRICKSTER_FEATURES,
    },
];

fn features_at(features: Features, level: u8) -> &'static [&'static str] {
    features
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Progression rows for one class, levels 1-20.
///
/// Classes without SRD columns get the standard proficiency and slot shape
/// with no spells known and no feature labels.
pub fn class_progression(class: &CharacterClass) -> Vec<ProgressionEntry> {
    let columns = CLASS_COLUMNS.iter().find(|c| c.slug == class.id.as_str());

    (1..=20u8)
        .map(|level| {
            let entry = ProgressionEntry::standard(&class.id, level, class.caster_kind);
            match columns {
                Some(columns) => {
                    let i = level as usize - 1;
                    entry
                        .with_cantrips(columns.cantrips[i])
                        .with_spells_known(columns.spells_known[i])
                        .with_features(features_at(columns.features, level))
                }
                None => entry,
            }
        })
        .collect()
}

/// Progression table for a set of classes.
pub fn progression_table(classes: &[CharacterClass]) -> ProgressionTable {
    let mut table = ProgressionTable::new();
    for class in classes {
        for entry in class_progression(class) {
            if let Err(err) = table.insert(entry) {
                tracing::error!(class = %class.id, %err, "skipping progression entry");
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ClassId;

    #[test]
    fn test_every_class_has_columns() {
        for class in classes() {
            assert!(
                CLASS_COLUMNS.iter().any(|c| c.slug == class.id.as_str()),
                "{} has no progression columns",
                class.id
            );
            assert!(class.check().is_empty(), "{:?}", class.check());
        }
    }

    #[test]
    fn test_all_classes_validate() {
        let classes = classes();
        let table = progression_table(&classes);
        assert_eq!(table.len(), classes.len() * 20);
        for class in &classes {
            let defects = table.validate(class);
            assert!(defects.is_empty(), "{}: {:?}", class.id, defects);
        }
    }

    #[test]
    fn test_race_bonuses() {
        let races = races();
        assert_eq!(races.len(), 9);

        let gnome = races.iter().find(|r| r.id.as_str() == "gnome").unwrap();
        assert_eq!(gnome.ability_bonuses.intelligence, 2);
        assert_eq!(gnome.ability_bonuses.constitution, 1);
        assert_eq!(gnome.ability_bonuses.strength, 0);

        let human = races.iter().find(|r| r.id.as_str() == "human").unwrap();
        assert_eq!(human.ability_bonuses.charisma, 1);
    }

    #[test]
    fn test_warlock_columns() {
        let classes = classes();
        let table = progression_table(&classes);
        let warlock = ClassId::new("warlock");

        let entry = table.entry(&warlock, 11).unwrap();
        assert_eq!(entry.cantrips_known, 4);
        assert_eq!(entry.spells_known, 11);
        assert_eq!(entry.features, vec!["Mystic Arcanum (6th level)"]);
        assert_eq!(entry.spell_slots.get(5), 3);
    }

    #[test]
    fn test_wizard_prepares_spells() {
        let classes = classes();
        let table = progression_table(&classes);
        let wizard = ClassId::new("wizard");

        for entry in table.class_entries(&wizard) {
            assert_eq!(entry.spells_known, 0);
        }
        assert_eq!(table.entry(&wizard, 1).unwrap().cantrips_known, 3);
        assert_eq!(table.entry(&wizard, 10).unwrap().cantrips_known, 5);
        // Level 5 has no new features
        assert!(table.entry(&wizard, 5).unwrap().features.is_empty());
    }

    #[test]
    fn test_backgrounds() {
        let backgrounds = backgrounds();
        assert_eq!(backgrounds.len(), 6);
        let noble = backgrounds.iter().find(|b| b.id.as_str() == "noble").unwrap();
        assert_eq!(noble.skill_proficiencies, vec!["history", "persuasion"]);
        assert_eq!(noble.languages, vec!["one_of_choice"]);
    }
}
