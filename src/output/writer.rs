//! Wordlist file writer

use chrono::Utc;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{Result, WordForgeError};
use crate::types::{GenerationReport, GeneratorConfig, SeedComponents};

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "WORD_FORGE_OUTPUT_DIR";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "wordlists";

/// Writes candidate sets to uniquely named wordlist files
pub struct WordlistWriter {
    output_dir: PathBuf,
}

impl WordlistWriter {
    /// Create a writer using the default (or env-configured) output directory
    pub fn new() -> Self {
        let output_dir = std::env::var(OUTPUT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));
        Self { output_dir }
    }

    /// Create a writer targeting a specific directory
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory wordlists are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Build the output file name for a run.
    ///
    /// `{base}_min{min}_max{max}{suffix}_{timestamp}.txt` where `base` is the
    /// lexicographically smallest seed word (or `wordlist` when there are no
    /// words) and `suffix` reflects the capitalize/reverse flags.
    pub fn output_path(&self, components: &SeedComponents, config: &GeneratorConfig) -> PathBuf {
        let base_word = components.base_word().unwrap_or("wordlist");

        let mut settings = Vec::new();
        if config.capitalize {
            settings.push("cap");
        }
        if config.include_reverse {
            settings.push("rev");
        }
        let suffix = if settings.is_empty() {
            String::new()
        } else {
            format!("_{}", settings.join("-"))
        };

        let timestamp = Utc::now().format("%Y%m%d_%H%M");
        self.output_dir.join(format!(
            "{}_min{}_max{}{}_{}.txt",
            base_word, config.min_length, config.max_length, suffix, timestamp
        ))
    }

    /// Write the candidate set, one per line in lexicographic order, and
    /// return a report with the path and count.
    pub fn write(
        &self,
        candidates: &BTreeSet<String>,
        components: &SeedComponents,
        config: &GeneratorConfig,
    ) -> Result<GenerationReport> {
        let start = Instant::now();
        let path = self.output_path(components, config);

        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(self.output_dir.to_string_lossy().to_string()))
        })?;

        let mut file = std::fs::File::create(&path).map_err(|e| {
            WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        // BTreeSet iteration is already sorted
        for candidate in candidates {
            writeln!(file, "{}", candidate).map_err(|e| {
                WordForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
            })?;
        }

        let report = GenerationReport {
            count: candidates.len(),
            output_file: path,
            duration: start.elapsed(),
            generated_at: Utc::now(),
        };

        tracing::info!(
            count = report.count,
            file = %report.output_file.display(),
            "Wordlist written"
        );

        Ok(report)
    }
}

impl Default for WordlistWriter {
    fn default() -> Self {
        Self::new()
    }
}
