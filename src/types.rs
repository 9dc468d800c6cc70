//! Core types and structures for word-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, WordForgeError};

/// Seed component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Words,
    Numbers,
    SpecialChars,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 3] = [Category::Words, Category::Numbers, Category::SpecialChars];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Words => write!(f, "words"),
            Category::Numbers => write!(f, "numbers"),
            Category::SpecialChars => write!(f, "special_chars"),
        }
    }
}

/// Configuration for wordlist generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Minimum candidate length, in characters (inclusive)
    pub min_length: usize,
    /// Maximum candidate length, in characters (inclusive)
    pub max_length: usize,
    /// Informational flag, only affects output file naming
    pub capitalize: bool,
    /// Add reversed forms of word variants and word+word combinations
    pub include_reverse: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 16,
            capitalize: false,
            include_reverse: false,
        }
    }
}

impl GeneratorConfig {
    /// Validate the length window. Callers run this before passing the
    /// config into the generator, which assumes a pre-validated window.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(WordForgeError::validation("Minimum length must be positive"));
        }
        if self.max_length < self.min_length {
            return Err(WordForgeError::validation(format!(
                "Maximum length must be at least the minimum length ({})",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Check whether a character count lies inside the configured window
    pub fn within_window(&self, len: usize) -> bool {
        len >= self.min_length && len <= self.max_length
    }
}

/// Seed components for one generation session.
///
/// Three disjoint sets of strings. `BTreeSet` gives set semantics plus
/// deterministic lexicographic iteration, which the output-file naming
/// relies on (smallest word becomes the file's base name).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedComponents {
    pub words: BTreeSet<String>,
    pub numbers: BTreeSet<String>,
    pub special_chars: BTreeSet<String>,
}

impl SeedComponents {
    /// Create an empty component store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the set for a category
    pub fn set(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Words => &self.words,
            Category::Numbers => &self.numbers,
            Category::SpecialChars => &self.special_chars,
        }
    }

    /// Get the mutable set for a category
    pub fn set_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Words => &mut self.words,
            Category::Numbers => &mut self.numbers,
            Category::SpecialChars => &mut self.special_chars,
        }
    }

    /// Insert a value into a category, returns false if already present
    pub fn insert(&mut self, category: Category, value: impl Into<String>) -> bool {
        self.set_mut(category).insert(value.into())
    }

    /// Remove a value from a category, returns false if absent
    pub fn remove(&mut self, category: Category, value: &str) -> bool {
        self.set_mut(category).remove(value)
    }

    /// Total number of components across all categories
    pub fn total(&self) -> usize {
        self.words.len() + self.numbers.len() + self.special_chars.len()
    }

    /// True when all three categories are empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Lexicographically smallest seed word, used for output naming.
    /// Deterministic regardless of insertion order.
    pub fn base_word(&self) -> Option<&str> {
        self.words.iter().next().map(String::as_str)
    }
}

/// Summary of one completed generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Number of candidates written
    pub count: usize,
    /// Path of the written wordlist file
    pub output_file: PathBuf,
    /// Wall-clock time of the generation + write
    pub duration: Duration,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
}
