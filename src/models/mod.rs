// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod traits;

pub use domain::{parse_trait_cell, BreedRecord, ExtractedPreferences, MatchResult, Preference, PreferenceProfile, ScoringParams, TraitMatch};
pub use requests::{ChatRequest, ExtractRequest, ScoreRequest};
pub use responses::{ChatResponse, ErrorResponse, ExtractResponse, HealthResponse, RankedBreed, ScoreResponse};
pub use traits::{Level, Trait, TraitError};
