use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::domain::{ExtractedPreferences, MatchResult, PreferenceProfile, TraitMatch};
use super::traits::{Level, Trait};

/// Response for the extract endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub levels: BTreeMap<Trait, Level>,
    pub weights: BTreeMap<Trait, f64>,
    pub empty: bool,
}

impl From<ExtractedPreferences> for ExtractResponse {
    fn from(delta: ExtractedPreferences) -> Self {
        let empty = delta.is_empty();
        Self {
            levels: delta.levels,
            weights: delta.weights,
            empty,
        }
    }
}

/// A ranked breed as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBreed {
    pub rank: usize,
    pub breed: String,
    pub score: f64,
    pub details: Vec<TraitMatch>,
    pub explanation: Vec<String>,
    pub trait_notes: Vec<String>,
    pub image_url: String,
    pub folder_url: String,
}

impl RankedBreed {
    pub fn new(
        rank: usize,
        result: MatchResult,
        explanation: Vec<String>,
        trait_notes: Vec<String>,
        image_url: String,
        folder_url: String,
    ) -> Self {
        Self {
            rank,
            breed: result.breed,
            score: result.score,
            details: result.details,
            explanation,
            trait_notes,
            image_url,
            folder_url,
        }
    }
}

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub matches: Vec<RankedBreed>,
    pub total_results: usize,
}

/// Response for one chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub delta: ExtractedPreferences,
    pub profile: PreferenceProfile,
    pub matches: Vec<RankedBreed>,
    pub total_results: usize,
    pub next_question: Option<Trait>,
    pub next_question_text: Option<String>,
    pub off_topic: bool,
    pub summary: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub breeds: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
