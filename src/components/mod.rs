//! Seed component validation

mod validator;

pub use validator::{SeedValidator, ValidatedSeed};
