use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::PreferenceProfile;

/// Request to extract preferences from one message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(alias = "pending_trait", rename = "pendingTrait", default)]
    pub pending_trait: Option<String>,
}

/// Request to rank the catalog against a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(default)]
    pub profile: PreferenceProfile,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// One conversational turn: extract, merge and rank
///
/// The caller owns the session and sends the profile and pending trait back
/// with every turn.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(alias = "pending_trait", rename = "pendingTrait", default)]
    pub pending_trait: Option<String>,
    #[serde(default)]
    pub profile: PreferenceProfile,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
