//! Error types for engine and persistence operations.

use crate::abilities::Ability;
use crate::reference::{BackgroundId, ClassId, RaceId};
use thiserror::Error;

/// Broad category of an engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied a value the rules do not allow.
    InvalidInput,
    /// A consumable resource has nothing left.
    ResourceExhausted,
    /// Reference data is missing or inconsistent.
    DataIntegrity,
}

/// Errors from character engine operations.
///
/// Every operation that returns one of these leaves the character unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{ability} base score {score} is out of range ({min}-{max})")]
    ScoreOutOfRange {
        ability: Ability,
        score: u8,
        min: u8,
        max: u8,
    },

    #[error("{ability} score {score} is not allowed under point buy (8-15)")]
    PointBuyScore { ability: Ability, score: u8 },

    #[error("Total point cost {cost} exceeds budget {budget}")]
    PointBuyBudget { cost: u32, budget: u32 },

    #[error("Scores {0:?} are not the standard array")]
    NotStandardArray([u8; 6]),

    #[error("Character is already at maximum level {0}")]
    MaxLevel(u8),

    #[error("Invalid spell level {0} (expected 0-9)")]
    InvalidSpellLevel(u8),

    #[error("No level {0} spell slots remaining")]
    NoSlotRemaining(u8),

    #[error("Spell '{0}' is already known")]
    DuplicateSpell(String),

    #[error("Spell '{0}' is not known")]
    UnknownSpell(String),

    #[error("Spell '{0}' is not prepared")]
    SpellNotPrepared(String),

    #[error("Cannot cast a level {spell_level} spell with a level {slot_level} slot")]
    SlotTooLow { spell_level: u8, slot_level: u8 },

    #[error("Character name is required")]
    MissingName,

    #[error("Race selection is required")]
    MissingRace,

    #[error("Class selection is required")]
    MissingClass,

    #[error("Ability scores are required")]
    MissingAbilityScores,

    #[error("Unknown race '{0}'")]
    UnknownRace(RaceId),

    #[error("Unknown class '{0}'")]
    UnknownClass(ClassId),

    #[error("Unknown background '{0}'")]
    UnknownBackground(BackgroundId),

    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("Inconsistent character state: {0}")]
    InconsistentCharacter(String),
}

impl EngineError {
    /// The failure category, for callers that map errors to responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NoSlotRemaining(_) => ErrorKind::ResourceExhausted,
            EngineError::UnknownRace(_)
            | EngineError::UnknownClass(_)
            | EngineError::UnknownBackground(_)
            | EngineError::InvalidReferenceData(_)
            | EngineError::InconsistentCharacter(_) => ErrorKind::DataIntegrity,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Character {0} not found")]
    NotFound(String),

    #[error("Invalid save: {0}")]
    Invalid(#[from] EngineError),
}
