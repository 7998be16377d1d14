//! The rulebook: every piece of reference data the engine reads.
//!
//! A [`Rulebook`] bundles races, classes, backgrounds, the progression
//! table and the campaign [`RulesConfig`]. It is immutable once built and
//! safe to share between threads. [`Rulebook::srd`] returns a process-wide
//! copy of the standard data.

use crate::config::RulesConfig;
use crate::error::{EngineError, PersistError};
use crate::progression::{DataDefect, ProgressionEntry, ProgressionTable};
use crate::reference::{Background, BackgroundId, CharacterClass, ClassId, Race, RaceId};
use crate::srd;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Source of reference records, keyed by id.
///
/// Returning `None` means the record does not exist.
pub trait ReferenceData {
    fn load_race(&self, id: &RaceId) -> Option<Race>;
    fn load_class(&self, id: &ClassId) -> Option<CharacterClass>;
    fn load_progression_entry(&self, class: &ClassId, level: u8) -> Option<ProgressionEntry>;
}

/// Shared reference data plus campaign rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulebookData", into = "RulebookData")]
pub struct Rulebook {
    races: BTreeMap<RaceId, Race>,
    classes: BTreeMap<ClassId, CharacterClass>,
    backgrounds: BTreeMap<BackgroundId, Background>,
    progression: ProgressionTable,
    config: RulesConfig,
}

/// On-disk shape of a rulebook: plain lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RulebookData {
    races: Vec<Race>,
    classes: Vec<CharacterClass>,
    backgrounds: Vec<Background>,
    progression: ProgressionTable,
    config: RulesConfig,
}

impl TryFrom<RulebookData> for Rulebook {
    type Error = EngineError;

    fn try_from(data: RulebookData) -> Result<Self, Self::Error> {
        Rulebook::new(data.races, data.classes, data.progression)
            .with_backgrounds(data.backgrounds)
            .with_config(data.config)
    }
}

impl From<Rulebook> for RulebookData {
    fn from(rules: Rulebook) -> Self {
        Self {
            races: rules.races.into_values().collect(),
            classes: rules.classes.into_values().collect(),
            backgrounds: rules.backgrounds.into_values().collect(),
            progression: rules.progression,
            config: rules.config,
        }
    }
}

lazy_static::lazy_static! {
    /// Standard races, classes, backgrounds and progression.
    static ref SRD_RULEBOOK: Rulebook = {
        let classes = srd::classes();
        let progression = srd::progression_table(&classes);
        Rulebook::new(srd::races(), classes, progression).with_backgrounds(srd::backgrounds())
    };
}

impl Rulebook {
    pub fn new(
        races: Vec<Race>,
        classes: Vec<CharacterClass>,
        progression: ProgressionTable,
    ) -> Self {
        Self {
            races: races.into_iter().map(|r| (r.id.clone(), r)).collect(),
            classes: classes.into_iter().map(|c| (c.id.clone(), c)).collect(),
            backgrounds: BTreeMap::new(),
            progression,
            config: RulesConfig::default(),
        }
    }

    /// The standard rulebook with default rules.
    pub fn srd() -> &'static Rulebook {
        &SRD_RULEBOOK
    }

    pub fn with_backgrounds(mut self, backgrounds: Vec<Background>) -> Self {
        self.backgrounds = backgrounds.into_iter().map(|b| (b.id.clone(), b)).collect();
        self
    }

    /// Replace the campaign rules. Score limits that don't fit together are
    /// rejected.
    pub fn with_config(mut self, config: RulesConfig) -> Result<Self, EngineError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Build a rulebook by pulling the named records from another source.
    ///
    /// Unknown races or classes are errors. Missing progression rows are
    /// skipped with a warning and will read as zero.
    pub fn from_reference(
        source: &impl ReferenceData,
        races: &[RaceId],
        classes: &[ClassId],
    ) -> Result<Self, EngineError> {
        let races = races
            .iter()
            .map(|id| source.load_race(id).ok_or_else(|| EngineError::UnknownRace(id.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        let mut loaded = Vec::with_capacity(classes.len());
        let mut progression = ProgressionTable::new();
        for id in classes {
            let class = source
                .load_class(id)
                .ok_or_else(|| EngineError::UnknownClass(id.clone()))?;
            for level in 1..=crate::config::MAX_LEVEL {
                match source.load_progression_entry(id, level) {
                    Some(entry) => progression.insert(entry)?,
                    None => tracing::warn!(class = %id, level, "no progression entry in source"),
                }
            }
            loaded.push(class);
        }

        Ok(Self::new(races, loaded, progression))
    }

    /// Parse a rulebook from JSON.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a rulebook JSON file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn race(&self, id: &RaceId) -> Result<&Race, EngineError> {
        self.races.get(id).ok_or_else(|| EngineError::UnknownRace(id.clone()))
    }

    pub fn class(&self, id: &ClassId) -> Result<&CharacterClass, EngineError> {
        self.classes.get(id).ok_or_else(|| EngineError::UnknownClass(id.clone()))
    }

    pub fn background(&self, id: &BackgroundId) -> Option<&Background> {
        self.backgrounds.get(id)
    }

    pub fn races(&self) -> impl Iterator<Item = &Race> {
        self.races.values()
    }

    pub fn classes(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.values()
    }

    pub fn backgrounds(&self) -> impl Iterator<Item = &Background> {
        self.backgrounds.values()
    }

    pub fn progression(&self) -> &ProgressionTable {
        &self.progression
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Every defect in the class records and their progression rows.
    pub fn validate(&self) -> Vec<DataDefect> {
        let mut defects = Vec::new();
        for class in self.classes.values() {
            defects.extend(class.check().into_iter().map(|message| DataDefect {
                class: class.id.clone(),
                level: None,
                message,
            }));
            defects.extend(self.progression.validate(class));
        }
        defects
    }
}

impl ReferenceData for Rulebook {
    fn load_race(&self, id: &RaceId) -> Option<Race> {
        self.races.get(id).cloned()
    }

    fn load_class(&self, id: &ClassId) -> Option<CharacterClass> {
        self.classes.get(id).cloned()
    }

    fn load_progression_entry(&self, class: &ClassId, level: u8) -> Option<ProgressionEntry> {
        self.progression.entry(class, level).cloned()
    }
}
