//! Combination engine: seed words crossed with each other, numbers, and
//! special characters

use std::collections::BTreeSet;

use super::variants::generate_variants;
use crate::types::{GeneratorConfig, SeedComponents};

/// Reverse a string by characters
fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

/// Build the full candidate set from the seed components.
///
/// Accumulates, in order: variants of every single word, variants of every
/// ordered word+word concatenation (self-pairs included, both orderings of
/// distinct pairs), variants of word+number and number+word, and variants of
/// word+special and special+word. Combinations are length-gated before
/// variant expansion; the variant generator filters again on its own output.
///
/// When `include_reverse` is set, reversed forms are added for single-word
/// variants and word+word combinations only. Number and special-character
/// combinations are deliberately never reversed: this asymmetry is
/// long-standing observed behavior and is pinned by the reversal-scoping
/// integration tests.
///
/// Empty seeds produce an empty set; the engine itself never fails and does
/// no I/O.
pub fn generate_wordlist(
    components: &SeedComponents,
    config: &GeneratorConfig,
) -> BTreeSet<String> {
    let mut generated = BTreeSet::new();

    if components.is_empty() {
        tracing::debug!("no seed components, returning empty candidate set");
        return generated;
    }

    for word in &components.words {
        let variants = generate_variants(word, config);
        if config.include_reverse {
            for v in &variants {
                generated.insert(reversed(v));
            }
        }
        generated.extend(variants);

        for word2 in &components.words {
            let combo = format!("{}{}", word, word2);
            if config.within_window(combo.chars().count()) {
                let combo_variants = generate_variants(&combo, config);
                if config.include_reverse {
                    for v in &combo_variants {
                        generated.insert(reversed(v));
                    }
                }
                generated.extend(combo_variants);
            }
        }

        for number in &components.numbers {
            for combo in [format!("{}{}", word, number), format!("{}{}", number, word)] {
                if config.within_window(combo.chars().count()) {
                    generated.extend(generate_variants(&combo, config));
                }
            }
        }

        for special in &components.special_chars {
            for combo in [format!("{}{}", word, special), format!("{}{}", special, word)] {
                if config.within_window(combo.chars().count()) {
                    generated.extend(generate_variants(&combo, config));
                }
            }
        }
    }

    tracing::info!(
        words = components.words.len(),
        numbers = components.numbers.len(),
        special_chars = components.special_chars.len(),
        candidates = generated.len(),
        "Wordlist generation complete"
    );

    generated
}
