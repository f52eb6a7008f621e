use crate::core::scoring::score_breed;
use crate::models::{BreedRecord, MatchResult, PreferenceProfile, ScoringParams};

/// Result of ranking the catalog
#[derive(Debug)]
pub struct Ranking {
    pub matches: Vec<MatchResult>,
    pub total_breeds: usize,
}

/// Ranks breeds against a preference profile
///
/// The catalog is read-only and the profile is only borrowed, so one
/// `Matcher` can be shared freely between request handlers.
#[derive(Debug, Clone)]
pub struct Matcher {
    params: ScoringParams,
}

impl Matcher {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score every breed and sort by score (descending), then breed name
    pub fn rank(&self, catalog: &[BreedRecord], profile: &PreferenceProfile) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .map(|breed| score_breed(breed, profile, &self.params))
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.breed.cmp(&b.breed))
        });

        results
    }

    /// Rank the catalog and keep the top `limit` breeds
    pub fn find_matches(&self, catalog: &[BreedRecord], profile: &PreferenceProfile, limit: usize) -> Ranking {
        let total_breeds = catalog.len();
        let mut matches = self.rank(catalog, profile);
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} breeds on {} traits, top score {:.1}",
            total_breeds,
            profile.len(),
            matches.first().map(|m| m.score).unwrap_or(0.0)
        );

        Ranking { matches, total_breeds }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
