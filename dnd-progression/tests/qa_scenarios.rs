//! End-to-end character scenarios against the SRD rulebook.

use dnd_progression::testing::{advance_to, sample_character};
use dnd_progression::{
    Ability, AbilityScores, CasterKind, Character, ClassId, EngineError, ErrorKind, RaceId,
    RestOutcome, Rulebook, RulesConfig, SlotUse,
};

fn rules() -> &'static Rulebook {
    Rulebook::srd()
}

// =============================================================================
// Spellcasting wizard
// =============================================================================

#[test]
fn test_level_five_wizard_hp_and_slots() {
    // Human: CON 12 + 1 = 13, modifier +1
    let mut wizard = Character::create(
        "Mordenkainen",
        RaceId::new("human"),
        ClassId::new("wizard"),
        AbilityScores::new(8, 14, 12, 15, 12, 10),
        rules(),
    )
    .expect("wizard should build");
    advance_to(&mut wizard, 5, rules()).unwrap();

    // (6 + 1) + 4 * (3 + 1 + 1)
    assert_eq!(wizard.hit_points().maximum, 27);
    assert_eq!(wizard.hit_points().current, 27);
    assert_eq!(wizard.spell_slots().as_array(), [4, 3, 2, 0, 0, 0, 0, 0, 0]);

    for _ in 0..3 {
        wizard.use_spell_slot(1).unwrap();
    }
    assert_eq!(wizard.spell_slots().remaining(1), 1);

    wizard.use_spell_slot(1).unwrap();
    assert_eq!(wizard.spell_slots().remaining(1), 0);

    // A fifth use is exhausted and leaves the pool alone
    let err = wizard.use_spell_slot(1).unwrap_err();
    assert_eq!(err, EngineError::NoSlotRemaining(1));
    assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    assert_eq!(wizard.spell_slots().remaining(1), 0);
}

#[test]
fn test_fourth_use_fails_from_three_max() {
    // Level 2 wizard has 3 first level slots
    let mut wizard = sample_character("wizard", 2).unwrap();
    assert_eq!(wizard.spell_slots().remaining(1), 3);

    for _ in 0..2 {
        wizard.use_spell_slot(1).unwrap();
    }
    assert_eq!(wizard.spell_slots().remaining(1), 1);
    wizard.use_spell_slot(1).unwrap();
    assert!(wizard.use_spell_slot(1).is_err());
    assert_eq!(wizard.spell_slots().remaining(1), 0);
}

#[test]
fn test_cantrip_slot_never_decrements() {
    let mut wizard = sample_character("wizard", 3).unwrap();
    let before = *wizard.spell_slots();
    for _ in 0..10 {
        assert_eq!(wizard.use_spell_slot(0), Ok(SlotUse::Cantrip));
    }
    assert_eq!(*wizard.spell_slots(), before);

    // Still free once everything else is spent
    while wizard.use_spell_slot(1).is_ok() {}
    while wizard.use_spell_slot(2).is_ok() {}
    assert_eq!(wizard.use_spell_slot(0), Ok(SlotUse::Cantrip));
}

// =============================================================================
// Caster shapes
// =============================================================================

#[test]
fn test_warlock_level_three_single_slot_level() {
    let warlock = sample_character("warlock", 3).unwrap();
    let max = warlock.max_spell_slots(rules());

    let nonzero: Vec<_> = max.nonzero_levels().collect();
    assert_eq!(nonzero, vec![(2, 2)]);
    assert_eq!(warlock.spell_slots().as_array(), [0, 2, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_fighter_never_has_slots() {
    let mut fighter = sample_character("fighter", 1).unwrap();
    for level in 1..=20 {
        advance_to(&mut fighter, level, rules()).unwrap();
        assert!(fighter.max_spell_slots(rules()).is_empty());
        assert_eq!(fighter.spell_slots().total(), 0);

        let stats = fighter.combat_stats(rules()).unwrap();
        assert_eq!(stats.spell_save_dc(), None);
        assert_eq!(stats.spell_attack_bonus(), None);
    }
}

#[test]
fn test_half_and_third_casters_start_late() {
    let paladin = sample_character("paladin", 1).unwrap();
    assert_eq!(paladin.spell_slots().total(), 0);
    // Spellcasting class, so the DC is exposed even without slots
    assert!(paladin.combat_stats(rules()).unwrap().spell_save_dc().is_some());

    let paladin = sample_character("paladin", 2).unwrap();
    assert_eq!(paladin.spell_slots().remaining(1), 2);

    let knight = sample_character("eldritch-knight", 2).unwrap();
    assert_eq!(knight.spell_slots().total(), 0);
    let knight = sample_character("eldritch-knight", 3).unwrap();
    assert_eq!(knight.spell_slots().remaining(1), 2);
}

#[test]
fn test_every_class_follows_its_shape() {
    let rules = rules();
    for class in rules.classes() {
        for level in 1..=20 {
            assert_eq!(
                rules.progression().slot_row(&class.id, level),
                class.caster_kind.slots_at(level),
                "{} level {}",
                class.id,
                level
            );
        }
    }
    assert_eq!(
        rules.class(&ClassId::new("warlock")).unwrap().caster_kind,
        CasterKind::Pact
    );
}

// =============================================================================
// Hit points
// =============================================================================

#[test]
fn test_temporary_hp_absorbs_damage() {
    let mut fighter = sample_character("fighter", 2).unwrap();
    // Human fighter, CON 13 + 1 = 14 (+2): 12 + 8 = 20
    assert_eq!(fighter.hit_points().maximum, 20);

    fighter.grant_temporary_hp(4);
    fighter.take_damage(10);
    assert_eq!(fighter.hit_points().temporary, 0);
    assert_eq!(fighter.hit_points().current, 14);
}

#[test]
fn test_heal_reports_actual_amount() {
    let mut cleric = sample_character("cleric", 1).unwrap();
    let max = cleric.hit_points().maximum;
    cleric.take_damage(3);

    assert_eq!(cleric.heal(100), 3);
    assert_eq!(cleric.hit_points().current, max);
    assert_eq!(cleric.heal(5), 0);
}

#[test]
fn test_damage_never_goes_negative() {
    let mut rogue = sample_character("rogue", 1).unwrap();
    let report = rogue.take_damage(1_000);
    assert!(report.dropped_to_zero);
    assert_eq!(rogue.hit_points().current, 0);
}

// =============================================================================
// Rests
// =============================================================================

#[test]
fn test_long_rest_is_idempotent() {
    let mut sorcerer = sample_character("sorcerer", 9).unwrap();
    sorcerer.grant_temporary_hp(6);
    sorcerer.take_damage(15);
    sorcerer.use_spell_slot(5).unwrap();
    sorcerer.use_spell_slot(1).unwrap();

    sorcerer.long_rest(rules());
    let once = sorcerer.clone();
    assert_eq!(sorcerer.long_rest(rules()), RestOutcome::default());
    assert_eq!(sorcerer, once);

    assert_eq!(sorcerer.hit_points().current, sorcerer.hit_points().maximum);
    assert_eq!(sorcerer.hit_points().temporary, 0);
    assert_eq!(
        sorcerer.spell_slots().as_array(),
        sorcerer.max_spell_slots(rules()).leveled()
    );
}

#[test]
fn test_short_rest_only_recovers_pact_slots() {
    for class in ["wizard", "paladin", "eldritch-knight", "fighter"] {
        let mut character = sample_character(class, 5).unwrap();
        let _ = character.use_spell_slot(1);
        character.take_damage(5);
        let before = character.clone();

        character.short_rest(rules()).unwrap();
        assert_eq!(character, before, "{class} changed on short rest");
    }

    let mut warlock = sample_character("warlock", 5).unwrap();
    warlock.use_spell_slot(3).unwrap();
    warlock.use_spell_slot(3).unwrap();
    warlock.take_damage(5);
    let hp = warlock.hit_points().current;

    let outcome = warlock.short_rest(rules()).unwrap();
    assert_eq!(outcome.slots_regained, 2);
    assert_eq!(warlock.spell_slots().remaining(3), 2);
    assert_eq!(warlock.hit_points().current, hp);
}

// =============================================================================
// Level-up
// =============================================================================

#[test]
fn test_level_up_refills_and_heals_by_gain() {
    let mut ranger = sample_character("ranger", 4).unwrap();
    ranger.take_damage(10);
    ranger.use_spell_slot(1).unwrap();
    let before = *ranger.hit_points();

    let outcome = ranger.level_up(rules()).unwrap();
    assert_eq!(outcome.new_level, 5);
    assert_eq!(outcome.proficiency_bonus, 3);
    assert_eq!(outcome.features, vec!["Extra Attack"]);
    assert_eq!(ranger.hit_points().maximum, before.maximum + outcome.hp_gained);
    assert_eq!(ranger.hit_points().current, before.current + outcome.hp_gained);
    assert_eq!(ranger.spell_slots().as_array(), [4, 2, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_level_up_at_twenty_fails() {
    let mut bard = sample_character("bard", 20).unwrap();
    bard.take_damage(7);
    bard.use_spell_slot(9).unwrap();
    let before = bard.clone();

    let err = bard.level_up(rules()).unwrap_err();
    assert_eq!(err, EngineError::MaxLevel(20));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(bard, before);
}

#[test]
fn test_proficiency_bands() {
    let mut monk = sample_character("monk", 1).unwrap();
    let mut seen = Vec::new();
    for level in 1..=20 {
        advance_to(&mut monk, level, rules()).unwrap();
        seen.push(monk.proficiency_bonus());
    }
    assert_eq!(seen[0], 2);
    assert_eq!(seen[4], 3);
    assert_eq!(seen[8], 4);
    assert_eq!(seen[12], 5);
    assert_eq!(seen[16], 6);
    for band in seen.chunks(4) {
        assert!(band.iter().all(|&b| b == band[0]));
    }
}

#[test]
fn test_racial_bonus_capped_at_twenty() {
    // 18 + 2 (half-orc STR) stays at 20
    let barbarian = Character::create(
        "Grog",
        RaceId::new("half-orc"),
        ClassId::new("barbarian"),
        AbilityScores::new(18, 12, 16, 8, 10, 8),
        rules(),
    )
    .unwrap();
    let abilities = barbarian.abilities(rules()).unwrap();
    assert_eq!(abilities.final_score(Ability::Strength), 20);
    assert_eq!(abilities.modifier(Ability::Strength), 5);
    assert_eq!(abilities.final_score(Ability::Constitution), 17);
}

#[test]
fn test_score_limits_keep_combat_stats_in_range() {
    let oversized = RulesConfig::new()
        .with_ability_score_cap(255)
        .with_base_score_range(3, 255);
    let err = rules().clone().with_config(oversized).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);

    // The highest limits the rules allow
    let epic = rules()
        .clone()
        .with_config(
            RulesConfig::new()
                .with_ability_score_cap(30)
                .with_base_score_range(3, 30),
        )
        .unwrap();
    let wizard = Character::create(
        "Archmage",
        RaceId::new("gnome"),
        ClassId::new("wizard"),
        AbilityScores::new(10, 30, 30, 30, 10, 10),
        &epic,
    )
    .unwrap();

    let stats = wizard.combat_stats(&epic).unwrap();
    assert_eq!(stats.armor_class, 20);
    // 8 + 2 + 10
    assert_eq!(stats.spell_save_dc(), Some(20));
}
