//! D&D 5e character progression engine.
//!
//! This crate provides:
//! - Ability scores with racial bonuses and modifiers
//! - Combat stats: proficiency, armor class, initiative, spell save DC
//! - Per-class progression tables for all five spell slot shapes
//! - Hit point and spell slot pools with damage, healing and rests
//! - One-level-at-a-time advancement
//! - Character persistence
//!
//! # Quick Start
//!
//! ```ignore
//! use dnd_progression::{AbilityScores, CharacterBuilder, Rulebook};
//!
//! let rules = Rulebook::srd();
//! let mut wizard = CharacterBuilder::new()
//!     .name("Elminster")
//!     .race("human")
//!     .class("wizard")
//!     .point_buy(AbilityScores::new(8, 14, 13, 15, 12, 10))
//!     .build(rules)?;
//!
//! wizard.use_spell_slot(1)?;
//! wizard.level_up(rules)?;
//! let stats = wizard.combat_stats(rules)?;
//! println!("Spell save DC {:?}", stats.spell_save_dc());
//! ```

pub mod abilities;
pub mod builder;
pub mod caster;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod experience;
pub mod persist;
pub mod progression;
pub mod reference;
pub mod resources;
pub mod rulebook;
pub mod spells;
pub mod srd;
pub mod testing;

// Primary public API
pub use abilities::{Ability, AbilityBonuses, AbilityBreakdown, AbilityScores};
pub use builder::{AbilityMethod, CharacterBuilder};
pub use caster::{CasterKind, SlotProgression};
pub use character::{Character, CharacterId, LevelUp, RestOutcome};
pub use combat::{CombatStats, SpellcastingStats};
pub use config::RulesConfig;
pub use error::{EngineError, ErrorKind, PersistError};
pub use persist::{CharacterStore, JsonCharacterStore, MemoryCharacterStore, SavedCharacter};
pub use progression::{ProgressionEntry, ProgressionTable, SpellSlotRow};
pub use reference::{Background, BackgroundId, CharacterClass, ClassId, Race, RaceId};
pub use resources::{DamageReport, HitPoints, SlotUse, SpellSlotPool};
pub use rulebook::{ReferenceData, Rulebook};
pub use spells::{KnownSpell, SpellCatalog, SpellReference};
