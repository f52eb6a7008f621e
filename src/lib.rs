//! Breed Match - conversational dog breed matchmaker
//!
//! This library turns free-text lifestyle descriptions into preferences on a
//! fixed set of 1-5 breed traits and ranks a breed catalog against them.
//! The core (`core::extract` and `core::Matcher`) is pure and performs no
//! I/O; catalog loading and image links live in `services`.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{explain_match, extract, Matcher, Ranking};
pub use models::{BreedRecord, ExtractedPreferences, Level, MatchResult, PreferenceProfile, ScoringParams, Trait, TraitError};
pub use services::BreedCatalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let delta = extract("we go hiking every day", None);
        assert_eq!(delta.level(Trait::EnergyLevel), Level::new(4).ok());
    }
}
