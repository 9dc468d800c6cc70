//! Wordlist generation engine
//!
//! The core of word-forge: a pure variant generator (case and leet
//! substitution forms of a single string) and the combination engine that
//! crosses seed words with each other, with numbers, and with special
//! characters to accumulate the candidate set.

mod combiner;
mod leet;
mod variants;

pub use combiner::generate_wordlist;
pub use leet::leet_substitutes;
pub use variants::{capitalize, generate_variants};
