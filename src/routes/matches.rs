use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{
    explain_match, extract, is_off_topic, next_question, summarize_profile, trait_notes, Matcher, Ranking,
};
use crate::models::{
    ChatRequest, ChatResponse, ErrorResponse, ExtractRequest, ExtractResponse, HealthResponse, PreferenceProfile,
    RankedBreed, ScoreRequest, ScoreResponse, Trait,
};
use crate::services::{BreedCatalog, ImageLinks};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<BreedCatalog>,
    pub images: Arc<ImageLinks>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/preferences/extract", web::post().to(extract_preferences))
        .route("/matches/score", web::post().to(score_matches))
        .route("/chat", web::post().to(chat));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Parse the optional pending trait sent by the client
fn parse_pending(pending: Option<&str>) -> Result<Option<Trait>, HttpResponse> {
    match pending.map(str::trim).filter(|p| !p.is_empty()) {
        None => Ok(None),
        Some(name) => name
            .parse::<Trait>()
            .map(Some)
            .map_err(|e| bad_request("invalid_trait", e.to_string())),
    }
}

fn resolve_limit(requested: Option<u16>, matching: &MatchingSettings) -> usize {
    requested
        .unwrap_or(matching.default_limit)
        .min(matching.max_limit)
        .max(1) as usize
}

fn rank(state: &AppState, profile: &PreferenceProfile, limit: usize) -> (Vec<RankedBreed>, usize) {
    let Ranking { matches, total_breeds } = state.matcher.find_matches(state.catalog.breeds(), profile, limit);

    let ranked = matches
        .into_iter()
        .enumerate()
        .map(|(idx, result)| {
            let explanation = explain_match(&result);
            let notes = trait_notes(&result);
            let image_url = state.images.image_url(&result.breed);
            let folder_url = state.images.folder_url(&result.breed);
            RankedBreed::new(idx + 1, result, explanation, notes, image_url, folder_url)
        })
        .collect();

    (ranked, total_breeds)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let breeds = state.catalog.len();
    let status = if breeds > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        breeds,
    })
}

/// Extract preferences from one message
///
/// POST /api/v1/preferences/extract
///
/// Request body:
/// ```json
/// {
///   "message": "string",
///   "pendingTrait": "Energy Level"
/// }
/// ```
async fn extract_preferences(req: web::Json<ExtractRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for extract request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let pending = match parse_pending(req.pending_trait.as_deref()) {
        Ok(pending) => pending,
        Err(response) => return response,
    };

    let delta = extract(&req.message, pending);
    tracing::debug!("Extracted {} traits (pending: {:?})", delta.levels.len(), pending);

    HttpResponse::Ok().json(ExtractResponse::from(delta))
}

/// Rank the catalog against a profile
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "profile": { "Energy Level": { "level": 4, "weight": 0.9 } },
///   "limit": 3
/// }
/// ```
async fn score_matches(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let limit = resolve_limit(req.limit, &state.matching);
    let (matches, total_results) = rank(&state, &req.profile, limit);

    tracing::info!(
        "Returning {} matches (from {} breeds) for {} preferences",
        matches.len(),
        total_results,
        req.profile.len()
    );

    HttpResponse::Ok().json(ScoreResponse { matches, total_results })
}

/// One conversational turn
///
/// POST /api/v1/chat
///
/// Extracts preferences from the message, merges them into the profile sent
/// by the client, ranks the catalog and returns the updated profile together
/// with the next scripted question.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let pending = match parse_pending(req.pending_trait.as_deref()) {
        Ok(pending) => pending,
        Err(response) => return response,
    };

    let ChatRequest { message, profile, limit, .. } = req.into_inner();

    let delta = extract(&message, pending);
    let off_topic = is_off_topic(&message, pending, &profile, &delta);

    let mut profile = profile;
    profile.merge(&delta);

    if delta.is_empty() {
        tracing::debug!("No new preferences detected (off topic: {})", off_topic);
    } else {
        tracing::debug!("Merged {} new preferences, profile now has {}", delta.levels.len(), profile.len());
    }

    let limit = resolve_limit(limit, &state.matching);
    let (matches, total_results) = rank(&state, &profile, limit);
    let next = next_question(&profile);

    HttpResponse::Ok().json(ChatResponse {
        summary: summarize_profile(&profile),
        next_question_text: next.map(Trait::question),
        next_question: next,
        delta,
        profile,
        matches,
        total_results,
        off_topic,
    })
}
