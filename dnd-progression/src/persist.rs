//! Character persistence.
//!
//! The engine itself never does I/O. This module is the collaborator that
//! loads and saves characters: a versioned JSON save format, and two
//! [`CharacterStore`] implementations (in memory, and one file per
//! character in a directory).

use crate::character::{Character, CharacterId};
use crate::error::PersistError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// Current character save file version.
const CHARACTER_SAVE_VERSION: u32 = 1;

/// A saved character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCharacter {
    /// Save format version for compatibility checking.
    pub version: u32,

    /// When the character was saved.
    pub saved_at: String,

    /// The complete character data.
    pub character: Character,

    /// Quick-access metadata about the character.
    pub metadata: CharacterMetadata,
}

/// Metadata about a saved character for quick display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterMetadata {
    pub id: CharacterId,
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u8,
    #[serde(default)]
    pub owner: Option<String>,
}

impl SavedCharacter {
    pub fn new(character: Character) -> Self {
        let metadata = CharacterMetadata {
            id: character.id,
            name: character.name.clone(),
            race: character.race().to_string(),
            class: character.class().to_string(),
            level: character.level(),
            owner: character.owner.clone(),
        };

        Self {
            version: CHARACTER_SAVE_VERSION,
            saved_at: timestamp_now(),
            character,
            metadata,
        }
    }

    /// Save to a JSON file.
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Load from a JSON file, rejecting characters in an impossible state.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let saved: Self = read_current_version(path.as_ref()).await?;
        saved.character.validate()?;
        Ok(saved)
    }

    /// Get metadata without loading the full character.
    pub async fn peek_metadata(path: impl AsRef<Path>) -> Result<CharacterMetadata, PersistError> {
        #[derive(Deserialize)]
        struct Partial {
            metadata: CharacterMetadata,
        }

        let partial: Partial = read_current_version(path.as_ref()).await?;
        Ok(partial.metadata)
    }
}

/// Read a save file, checking its version before parsing the rest.
async fn read_current_version<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    #[derive(Deserialize)]
    struct Header {
        version: u32,
    }

    let content = fs::read_to_string(path).await?;
    let header: Header = serde_json::from_str(&content)?;
    if header.version != CHARACTER_SAVE_VERSION {
        return Err(PersistError::VersionMismatch {
            expected: CHARACTER_SAVE_VERSION,
            found: header.version,
        });
    }
    Ok(serde_json::from_str(&content)?)
}

/// Information about a character save file.
#[derive(Debug, Clone)]
pub struct CharacterSaveInfo {
    pub path: PathBuf,
    pub metadata: CharacterMetadata,
}

/// List all character save files in a directory, sorted by name.
///
/// Creates the directory if it does not exist. Files that are not valid
/// saves are skipped.
pub async fn list_character_saves(
    dir: impl AsRef<Path>,
) -> Result<Vec<CharacterSaveInfo>, PersistError> {
    let mut saves = Vec::new();

    let dir_path = dir.as_ref();
    if !dir_path.exists() {
        fs::create_dir_all(dir_path).await?;
        return Ok(saves);
    }

    let mut entries = fs::read_dir(dir_path).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            match SavedCharacter::peek_metadata(&path).await {
                Ok(metadata) => saves.push(CharacterSaveInfo { path, metadata }),
                Err(err) => tracing::debug!(path = %path.display(), %err, "skipping file"),
            }
        }
    }

    saves.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
    Ok(saves)
}

/// Save path for a character, named by id.
pub fn character_save_path(dir: impl AsRef<Path>, id: &CharacterId) -> PathBuf {
    dir.as_ref().join(format!("{id}.json"))
}

/// Seconds since the Unix epoch, as a string.
fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", now.as_secs())
}

// ============================================================================
// Character Stores
// ============================================================================

/// Where characters live between operations.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    async fn load_character(&self, id: &CharacterId) -> Result<Character, PersistError>;
    async fn save_character(&self, character: &Character) -> Result<(), PersistError>;
}

/// Characters held in memory.
#[derive(Debug, Default)]
pub struct MemoryCharacterStore {
    characters: RwLock<HashMap<CharacterId, Character>>,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.characters.read().await.len()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn load_character(&self, id: &CharacterId) -> Result<Character, PersistError> {
        self.characters
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PersistError::NotFound(id.to_string()))
    }

    async fn save_character(&self, character: &Character) -> Result<(), PersistError> {
        self.characters
            .write()
            .await
            .insert(character.id, character.clone());
        Ok(())
    }
}

/// One [`SavedCharacter`] JSON file per character in a directory.
#[derive(Debug, Clone)]
pub struct JsonCharacterStore {
    dir: PathBuf,
}

impl JsonCharacterStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn list(&self) -> Result<Vec<CharacterSaveInfo>, PersistError> {
        list_character_saves(&self.dir).await
    }
}

#[async_trait]
impl CharacterStore for JsonCharacterStore {
    async fn load_character(&self, id: &CharacterId) -> Result<Character, PersistError> {
        let path = character_save_path(&self.dir, id);
        if !path.exists() {
            return Err(PersistError::NotFound(id.to_string()));
        }
        Ok(SavedCharacter::load_json(&path).await?.character)
    }

    async fn save_character(&self, character: &Character) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir).await?;
        let path = character_save_path(&self.dir, &character.id);
        SavedCharacter::new(character.clone()).save_json(&path).await?;
        tracing::debug!(character = %character.id, path = %path.display(), "saved character");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::testing::sample_character;
    use tempfile::TempDir;

    #[test]
    fn test_saved_character_metadata() {
        let mut character = sample_character("warlock", 3).unwrap();
        character.owner = Some("player-7".to_string());

        let saved = SavedCharacter::new(character);
        assert_eq!(saved.version, CHARACTER_SAVE_VERSION);
        assert_eq!(saved.metadata.class, "warlock");
        assert_eq!(saved.metadata.race, "human");
        assert_eq!(saved.metadata.level, 3);
        assert_eq!(saved.metadata.owner.as_deref(), Some("player-7"));
    }

    #[test]
    fn test_character_save_path() {
        let id = CharacterId::new();
        let path = character_save_path("/saves/characters", &id);
        assert!(path.to_string_lossy().ends_with(&format!("{id}.json")));
    }

    #[tokio::test]
    async fn test_save_and_load_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("wizard.json");

        let mut character = sample_character("wizard", 3).unwrap();
        character.use_spell_slot(2).unwrap();
        character.take_damage(4);

        SavedCharacter::new(character.clone())
            .save_json(&path)
            .await
            .expect("Save should succeed");

        let loaded = SavedCharacter::load_json(&path)
            .await
            .expect("Load should succeed");
        assert_eq!(loaded.character, character);
        assert_eq!(loaded.character.spell_slots().remaining(2), 1);
    }

    #[tokio::test]
    async fn test_version_mismatch() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("old.json");

        let mut saved = SavedCharacter::new(sample_character("fighter", 1).unwrap());
        saved.version = 0;
        saved.save_json(&path).await.unwrap();

        let err = SavedCharacter::load_json(&path).await.unwrap_err();
        assert!(matches!(
            err,
            PersistError::VersionMismatch {
                expected: 1,
                found: 0
            }
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_inconsistent_character() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("tampered.json");

        let saved = SavedCharacter::new(sample_character("cleric", 2).unwrap());
        let mut json = serde_json::to_value(&saved).unwrap();
        let maximum = json["character"]["hit_points"]["maximum"].as_i64().unwrap();
        json["character"]["hit_points"]["current"] = (maximum + 10).into();
        fs::write(&path, json.to_string()).await.unwrap();

        let err = SavedCharacter::load_json(&path).await.unwrap_err();
        assert!(matches!(
            err,
            PersistError::Invalid(EngineError::InconsistentCharacter(_))
        ));

        // Metadata is still readable for listings
        let metadata = SavedCharacter::peek_metadata(&path).await.unwrap();
        assert_eq!(metadata.class, "cleric");
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryCharacterStore::new();
        let character = sample_character("bard", 2).unwrap();

        assert!(matches!(
            store.load_character(&character.id).await,
            Err(PersistError::NotFound(_))
        ));

        store.save_character(&character).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.load_character(&character.id).await.unwrap(), character);
    }

    #[tokio::test]
    async fn test_json_store_lists_by_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonCharacterStore::new(temp_dir.path().join("characters"));

        for name in ["Charlie", "Alpha", "Beta"] {
            let mut character = sample_character("rogue", 1).unwrap();
            character.name = name.to_string();
            store.save_character(&character).await.unwrap();
        }
        // Not a save file
        std::fs::write(store.dir().join("notes.json"), "{}").unwrap();

        let saves = store.list().await.unwrap();
        let names: Vec<_> = saves.iter().map(|s| s.metadata.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Charlie"]);
    }

    #[tokio::test]
    async fn test_list_character_saves_empty_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let char_dir = temp_dir.path().join("empty_characters");

        let saves = list_character_saves(&char_dir)
            .await
            .expect("List should succeed");

        assert!(saves.is_empty());
        assert!(char_dir.exists());
    }
}
