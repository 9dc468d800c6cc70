//! Session snapshot persistence for later reuse

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordForgeError};
use crate::types::{GeneratorConfig, SeedComponents};

/// Persistent session snapshot: seed components plus generator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub components: SeedComponents,
    pub config: GeneratorConfig,
}

impl SessionSnapshot {
    /// Create a snapshot of the current session
    pub fn new(components: SeedComponents, config: GeneratorConfig) -> Self {
        Self { components, config }
    }

    /// Load a snapshot from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| WordForgeError::parse(e.to_string(), Some(content)))
    }

    /// Save the snapshot to file
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WordForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            WordForgeError::internal(format!("Failed to serialize snapshot: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Get default snapshot file path inside an output directory
    pub fn default_path(output_dir: &Path) -> PathBuf {
        output_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = SessionSnapshot::default_path(dir.path());

        let mut components = SeedComponents::new();
        components.insert(Category::Words, "admin");
        components.insert(Category::Numbers, "2024");
        components.insert(Category::SpecialChars, "!");
        let config = GeneratorConfig {
            min_length: 3,
            max_length: 12,
            capitalize: true,
            include_reverse: false,
        };

        let snapshot = SessionSnapshot::new(components, config.clone());
        snapshot.save(&path).unwrap();

        let loaded = SessionSnapshot::load(&path).unwrap();
        assert_eq!(loaded.config, config);
        assert!(loaded.components.words.contains("admin"));
        assert!(loaded.components.numbers.contains("2024"));
        assert!(loaded.components.special_chars.contains("!"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(SessionSnapshot::load(&path).is_err());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json at all").unwrap();
        match SessionSnapshot::load(&path) {
            Err(WordForgeError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
