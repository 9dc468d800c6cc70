//! Case and leet variant generation for a single string

use std::collections::BTreeSet;

use super::leet::leet_substitutes;
use crate::types::GeneratorConfig;

/// Uppercase the first character, lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Generate all case and leet-substitution variants of `word` that fit the
/// configured length window.
///
/// Always seeds the set with four base forms (verbatim, uppercased,
/// lowercased, capitalized), then adds one variant per (position, substitute)
/// pair from the leet table, each in as-is, uppercased, and capitalized form.
/// Substitutions are single-position: they are never combined across more
/// than one index in the same variant. The window filter runs last, so base
/// forms outside the window are dropped along with everything else.
///
/// Pure function of its two inputs.
pub fn generate_variants(word: &str, config: &GeneratorConfig) -> BTreeSet<String> {
    let mut results = BTreeSet::new();
    results.insert(word.to_string());
    results.insert(word.to_uppercase());
    results.insert(word.to_lowercase());
    results.insert(capitalize(word));

    // Substitution works over the lowercased word, one index at a time
    let lower: Vec<char> = word.to_lowercase().chars().collect();
    for (i, &c) in lower.iter().enumerate() {
        for &substitute in leet_substitutes(c) {
            let mut chars = lower.clone();
            chars[i] = substitute;
            let variant: String = chars.iter().collect();
            results.insert(variant.to_uppercase());
            results.insert(capitalize(&variant));
            results.insert(variant);
        }
    }

    results.retain(|v| config.within_window(v.chars().count()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: usize, max: usize) -> GeneratorConfig {
        GeneratorConfig {
            min_length: min,
            max_length: max,
            ..Default::default()
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("test"), "Test");
        assert_eq!(capitalize("TEST"), "Test");
        assert_eq!(capitalize("7est"), "7est");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_base_forms_present() {
        let variants = generate_variants("sun", &config(3, 6));
        assert!(variants.contains("sun"));
        assert!(variants.contains("SUN"));
        assert!(variants.contains("Sun"));
    }

    #[test]
    fn test_single_position_substitution() {
        let variants = generate_variants("test", &config(1, 10));
        assert!(variants.contains("t3st"));
        assert!(variants.contains("T3ST"));
        assert!(variants.contains("T3st"));
        assert!(variants.contains("7est"));
        assert!(variants.contains("te5t"));
        assert!(variants.contains("te$t"));
        assert!(variants.contains("tes7"));
        // Substitutions are never combined across positions
        assert!(!variants.contains("7357"));
        assert!(!variants.contains("t35t"));
    }

    #[test]
    fn test_substitution_uses_lowercased_word() {
        // Uppercase input still substitutes against the lowercased form
        let variants = generate_variants("TEST", &config(1, 10));
        assert!(variants.contains("t3st"));
        assert!(variants.contains("TEST"));
        assert!(variants.contains("test"));
    }

    #[test]
    fn test_window_filter_is_final() {
        // "sun" base forms are 3 chars, below a 4..=10 window
        let variants = generate_variants("sun", &config(4, 10));
        assert!(variants.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let cfg = config(3, 8);
        assert_eq!(
            generate_variants("hello", &cfg),
            generate_variants("hello", &cfg)
        );
    }

    #[test]
    fn test_all_within_window() {
        let cfg = config(4, 6);
        for v in generate_variants("secret", &cfg) {
            let len = v.chars().count();
            assert!(len >= 4 && len <= 6, "variant '{}' outside window", v);
        }
    }

    #[test]
    fn test_exact_set_for_sun() {
        // 's' maps to ['5', '$']; 'u' and 'n' have no entries
        let variants = generate_variants("sun", &config(3, 6));
        let expected: BTreeSet<String> = ["sun", "SUN", "Sun", "5un", "5UN", "$un", "$UN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(variants, expected);
    }
}
