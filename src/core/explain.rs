use crate::models::{MatchResult, PreferenceProfile, Trait, TraitMatch};

const EMPTY_PROFILE_SUMMARY: &str = "I don't know much yet. Tell me about your activity level, \
    living situation, allergies, or whether you have kids.";

/// Qualitative bucket for a match fraction
pub fn match_quality(match_fraction: f64) -> &'static str {
    if match_fraction > 0.8 {
        "excellent match"
    } else if match_fraction > 0.6 {
        "good match"
    } else if match_fraction > 0.4 {
        "moderate match"
    } else {
        "differs from what you want"
    }
}

/// One sentence describing how a breed fares on a single trait
pub fn explain_trait(detail: &TraitMatch) -> String {
    match detail.actual {
        None => format!(
            "{}: no data available for this breed (you want {}).",
            detail.trait_, detail.desired
        ),
        Some(actual) => format!(
            "{}: {} (you want {}, this breed is {}).",
            detail.trait_,
            match_quality(detail.match_fraction),
            detail.desired,
            actual
        ),
    }
}

/// Long-form description of a trait at a breed's level
pub fn describe_trait(t: Trait, level: f64) -> String {
    format!("{} (level {})", t.description(), level.trunc() as i64)
}

/// Descriptions of the traits a breed has data for, most important first
pub fn trait_notes(result: &MatchResult) -> Vec<String> {
    let mut details: Vec<&TraitMatch> = result.details.iter().collect();
    details.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    details
        .into_iter()
        .filter_map(|d| d.actual.map(|actual| describe_trait(d.trait_, actual)))
        .collect()
}

/// Explanation lines for a ranked breed, most important traits first
pub fn explain_match(result: &MatchResult) -> Vec<String> {
    let mut details: Vec<&TraitMatch> = result.details.iter().collect();
    details.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    details.into_iter().map(explain_trait).collect()
}

/// Short recap of what the conversation has learned so far
pub fn summarize_profile(profile: &PreferenceProfile) -> String {
    if profile.is_empty() {
        return EMPTY_PROFILE_SUMMARY.to_string();
    }

    profile
        .iter()
        .map(|(t, pref)| {
            let level = pref.level.value();
            match t {
                Trait::EnergyLevel if level <= 2 => "You prefer a calmer, lower-energy dog.".to_string(),
                Trait::EnergyLevel if level == 3 => "You're okay with a medium-energy dog.".to_string(),
                Trait::EnergyLevel => "You'd like a high-energy, active dog.".to_string(),
                Trait::AdaptabilityLevel if level >= 4 => {
                    "You live in an apartment or smaller space, so an adaptable dog matters.".to_string()
                }
                Trait::AdaptabilityLevel => "You seem to have more space, like a house or yard.".to_string(),
                Trait::SheddingLevel if level <= 2 => {
                    "Low shedding or hypoallergenic coats are important for you.".to_string()
                }
                Trait::SheddingLevel => "You're flexible about shedding and allergies.".to_string(),
                Trait::GoodWithYoungChildren if level >= 4 => {
                    "Being good with young children is important.".to_string()
                }
                Trait::GoodWithYoungChildren => "Kid-friendliness is less critical for you.".to_string(),
                Trait::BarkingLevel if level <= 2 => "You'd like a quieter dog.".to_string(),
                other => format!("{}: you'd like around {} out of 5.", other, level),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn detail(actual: Option<f64>, match_fraction: f64) -> TraitMatch {
        TraitMatch {
            trait_: Trait::EnergyLevel,
            desired: Level::new(4).unwrap(),
            actual,
            match_fraction,
            weight: 0.9,
        }
    }

    #[test]
    fn test_quality_buckets() {
        assert_eq!(match_quality(1.0), "excellent match");
        assert_eq!(match_quality(0.75), "good match");
        assert_eq!(match_quality(0.5), "moderate match");
        assert_eq!(match_quality(0.25), "differs from what you want");
    }

    #[test]
    fn test_missing_value_reported_regardless_of_score() {
        let line = explain_trait(&detail(None, 0.9));
        assert!(line.contains("no data available"));
        assert!(!line.contains("excellent"));
    }

    #[test]
    fn test_explanation_mentions_levels() {
        let line = explain_trait(&detail(Some(4.0), 1.0));
        assert_eq!(line, "Energy Level: excellent match (you want 4, this breed is 4).");
    }

    #[test]
    fn test_explain_match_orders_by_weight() {
        let mut low = detail(Some(3.0), 0.75);
        low.trait_ = Trait::BarkingLevel;
        low.weight = 0.5;
        let result = MatchResult {
            breed: "Beagle".to_string(),
            score: 80.0,
            details: vec![low, detail(Some(4.0), 1.0)],
        };
        let lines = explain_match(&result);
        assert!(lines[0].starts_with("Energy Level"));
        assert!(lines[1].starts_with("Barking Level"));
    }

    #[test]
    fn test_describe_trait() {
        assert_eq!(
            describe_trait(Trait::DroolingLevel, 2.0),
            "How drool-prone a breed tends to be (level 2)"
        );
    }

    #[test]
    fn test_trait_notes_skip_missing_values() {
        let mut missing = detail(None, 0.375);
        missing.trait_ = Trait::BarkingLevel;
        let result = MatchResult {
            breed: "Beagle".to_string(),
            score: 70.0,
            details: vec![missing, detail(Some(5.0), 0.75)],
        };
        let notes = trait_notes(&result);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("The amount of exercise"));
        assert!(notes[0].ends_with("(level 5)"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(summarize_profile(&PreferenceProfile::new()), EMPTY_PROFILE_SUMMARY);

        let mut profile = PreferenceProfile::new();
        profile.set(Trait::SheddingLevel, Level::new(1).unwrap(), 1.0);
        profile.set(Trait::GoodWithYoungChildren, Level::new(5).unwrap(), 1.0);
        let summary = summarize_profile(&profile);
        assert!(summary.contains("hypoallergenic"));
        assert!(summary.contains("young children"));
    }
}
