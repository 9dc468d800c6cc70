//! Seed entry validation utilities
//!
//! Validation runs at insertion time, before any entry reaches the
//! generation engine. The engine assumes every seed already satisfies the
//! configured length window.

use regex::Regex;

use crate::error::{Result, WordForgeError};
use crate::types::{Category, GeneratorConfig};

/// Seed entry validator
pub struct SeedValidator {
    digits: Regex,
    specials: Regex,
    word: Regex,
}

/// A seed entry that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSeed {
    pub value: String,
    pub category: Category,
}

impl SeedValidator {
    /// Create a new seed validator
    pub fn new() -> Self {
        Self {
            digits: Regex::new(r"^[0-9]+$").unwrap(),
            specials: Regex::new(r"^[^A-Za-z0-9\s]+$").unwrap(),
            word: Regex::new(r"^\S+$").unwrap(),
        }
    }

    /// Validate one seed entry against its category and the length window
    pub fn validate(
        &self,
        value: &str,
        category: Category,
        config: &GeneratorConfig,
    ) -> Result<ValidatedSeed> {
        let value = value.trim();

        if value.is_empty() {
            return Err(WordForgeError::validation("Input cannot be empty"));
        }

        self.validate_length(value, config)?;
        self.validate_shape(value, category)?;

        Ok(ValidatedSeed {
            value: value.to_string(),
            category,
        })
    }

    fn validate_length(&self, value: &str, config: &GeneratorConfig) -> Result<()> {
        let len = value.chars().count();
        if len < config.min_length {
            return Err(WordForgeError::validation(format!(
                "Input must be at least {} characters long",
                config.min_length
            )));
        }
        if len > config.max_length {
            return Err(WordForgeError::validation(format!(
                "Input cannot be longer than {} characters",
                config.max_length
            )));
        }
        Ok(())
    }

    fn validate_shape(&self, value: &str, category: Category) -> Result<()> {
        let ok = match category {
            Category::Words => self.word.is_match(value),
            Category::Numbers => self.digits.is_match(value),
            Category::SpecialChars => self.specials.is_match(value),
        };
        if !ok {
            return Err(WordForgeError::validation(match category {
                Category::Words => "Words cannot contain whitespace",
                Category::Numbers => "Numbers must contain only digits 0-9",
                Category::SpecialChars => {
                    "Special characters cannot contain letters, digits, or whitespace"
                }
            }));
        }
        Ok(())
    }
}

impl Default for SeedValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            min_length: 2,
            max_length: 8,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_entries() {
        let v = SeedValidator::new();
        let cfg = config();
        assert!(v.validate("hello", Category::Words, &cfg).is_ok());
        assert!(v.validate("1984", Category::Numbers, &cfg).is_ok());
        assert!(v.validate("!!", Category::SpecialChars, &cfg).is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let v = SeedValidator::new();
        let seed = v.validate("  admin  ", Category::Words, &config()).unwrap();
        assert_eq!(seed.value, "admin");
    }

    #[test]
    fn test_length_window() {
        let v = SeedValidator::new();
        let cfg = config();
        assert!(v.validate("x", Category::Words, &cfg).is_err());
        assert!(v.validate("waytoolongword", Category::Words, &cfg).is_err());
    }

    #[test]
    fn test_category_shapes() {
        let v = SeedValidator::new();
        let cfg = config();
        assert!(v.validate("12a4", Category::Numbers, &cfg).is_err());
        assert!(v.validate("!a", Category::SpecialChars, &cfg).is_err());
        assert!(v.validate("two words", Category::Words, &cfg).is_err());
    }

    #[test]
    fn test_empty_rejected() {
        let v = SeedValidator::new();
        assert!(v.validate("   ", Category::Words, &config()).is_err());
    }
}
