//! Word Forge - interactive wordlist generation for password audits
//!
//! A simple and elegant CLI tool for building candidate password wordlists
//! from seed words, numbers, and special characters, with leet substitutions.

pub mod cli;
pub mod components;
pub mod error;
pub mod generator;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordForgeError};
pub use types::{Category, GenerationReport, GeneratorConfig, SeedComponents};

// Re-export main functionality
pub use generator::{generate_variants, generate_wordlist};
pub use output::{SessionSnapshot, WordlistWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
