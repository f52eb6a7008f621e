use crate::models::{BreedRecord, Level, MatchResult, PreferenceProfile, ScoringParams, TraitMatch};

/// Closeness (0-1) between the desired level and a breed's value
///
/// A missing value is charged a fixed difference instead of being skipped,
/// so breeds with sparse data do not outrank well documented ones.
#[inline]
pub fn trait_match(desired: Level, actual: Option<f64>, params: &ScoringParams) -> f64 {
    let diff = match actual {
        Some(value) => (value - desired.as_f64()).abs(),
        None => params.missing_value_diff,
    };
    (1.0 - diff / params.max_diff).max(0.0)
}

/// Calculate a match score (0-100) for one breed
///
/// Scoring formula:
/// score = sum(match(trait) * weight(trait)) / sum(weight) * 100
///
/// The weight sum is floored to 1.0 when the profile carries no weight at all,
/// so an empty profile scores every breed 0 rather than dividing by zero.
pub fn score_breed(breed: &BreedRecord, profile: &PreferenceProfile, params: &ScoringParams) -> MatchResult {
    let total_weight = profile.total_weight();
    let total_weight = if total_weight > 0.0 { total_weight } else { 1.0 };

    let mut weighted_sum = 0.0;
    let details: Vec<TraitMatch> = profile
        .iter()
        .map(|(t, pref)| {
            let actual = breed.trait_value(t);
            let match_fraction = trait_match(pref.level, actual, params);
            weighted_sum += match_fraction * pref.weight;
            TraitMatch {
                trait_: t,
                desired: pref.level,
                actual,
                match_fraction,
                weight: pref.weight,
            }
        })
        .collect();

    let score = (weighted_sum / total_weight * 100.0).clamp(0.0, 100.0);

    MatchResult {
        breed: breed.name.clone(),
        score,
        details,
    }
}
