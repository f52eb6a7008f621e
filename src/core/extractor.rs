use crate::core::keywords::{
    Tokens, AFFIRMATIVE_WORDS, ALLERGY_WORDS, ANSWER_WEIGHT, LEVEL_WORDS, NEGATIVE_WORDS,
    NO_ALLERGY_PHRASES, RULES, SHEDDING_WORDS,
};
use crate::models::{ExtractedPreferences, Level, Trait};

/// Extract a preference delta from one utterance
///
/// When `pending_trait` is set the utterance is first read as an answer to
/// that question; a recognized answer is returned on its own. Otherwise the
/// free-text rule table is applied to every trait.
///
/// Never fails: an utterance without any recognizable signal yields an
/// empty delta.
pub fn extract(utterance: &str, pending_trait: Option<Trait>) -> ExtractedPreferences {
    let tokens = Tokens::new(utterance);

    if let Some(pending) = pending_trait {
        if let Some((level, weight)) = answer_pending(&tokens, pending) {
            tracing::trace!("Pending answer for {}: level {} (weight {})", pending, level, weight);
            let mut delta = ExtractedPreferences::new();
            delta.insert(pending, level, weight);
            return delta;
        }
    }

    extract_free_text(&tokens)
}

/// Interpret an utterance as the answer to a specific question
fn answer_pending(tokens: &Tokens, pending: Trait) -> Option<(Level, f64)> {
    if let Some(answer) = negative_answer(tokens, pending) {
        return Some(answer);
    }

    if pending == Trait::SheddingLevel && tokens.contains_any(ALLERGY_WORDS) {
        return Some((Level::clamped(1), 1.0));
    }

    if pending.is_yes_no() {
        if tokens.contains_any(AFFIRMATIVE_WORDS) {
            return Some((Level::clamped(5), 1.0));
        }
        // A "no" means the trait is not a strong requirement either way
        if tokens.contains_any(NEGATIVE_WORDS) {
            return Some((Level::clamped(3), 0.5));
        }
        // Numbers and level words do not answer a yes/no question
        return None;
    }

    if let Some(number) = tokens.leading_number() {
        if let Ok(level) = Level::new(i64::from(number)) {
            return Some((level, ANSWER_WEIGHT));
        }
    }

    LEVEL_WORDS
        .iter()
        .find(|(word, _)| tokens.contains_phrase(word))
        .map(|(_, level)| (Level::clamped(*level), ANSWER_WEIGHT))
}

/// "No" to the allergy or barking questions, which are asked as yes/no
/// questions but score on a scale
fn negative_answer(tokens: &Tokens, pending: Trait) -> Option<(Level, f64)> {
    match pending {
        Trait::SheddingLevel => {
            if tokens.contains_any(NO_ALLERGY_PHRASES) {
                return Some((Level::clamped(4), 0.5));
            }
            // "no shedding please" is a shedding preference, not a "no" to allergies
            if tokens.contains_any(NEGATIVE_WORDS)
                && !tokens.contains_any(SHEDDING_WORDS)
                && !tokens.contains_any(ALLERGY_WORDS)
            {
                return Some((Level::clamped(4), 0.5));
            }
            None
        }
        Trait::BarkingLevel if tokens.contains_any(NEGATIVE_WORDS) => Some((Level::clamped(1), ANSWER_WEIGHT)),
        _ => None,
    }
}

/// Apply the rule table; first matching rule per trait wins
fn extract_free_text(tokens: &Tokens) -> ExtractedPreferences {
    let mut delta = ExtractedPreferences::new();
    if tokens.is_empty() {
        return delta;
    }

    for rule in RULES {
        if delta.contains(rule.trait_) {
            continue;
        }
        if let Some(phrase) = rule.phrases.iter().find(|p| tokens.contains_phrase(p)) {
            tracing::trace!(
                "Matched \"{}\" -> {} = {} (priority {}, weight {})",
                phrase,
                rule.trait_,
                rule.level,
                rule.priority,
                rule.weight
            );
            delta.insert(rule.trait_, rule.level, rule.weight);
        }
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_no_keywords_yields_empty_delta() {
        let delta = extract("What's the weather like tomorrow?", None);
        assert!(delta.is_empty());
        assert!(delta.weights.is_empty());
    }

    #[test]
    fn test_apartment_kids_allergies() {
        let delta = extract(
            "I live in an apartment and have two young kids, and I'm allergic to dog hair",
            None,
        );
        assert_eq!(delta.level(Trait::GoodWithYoungChildren), Some(level(5)));
        assert_eq!(delta.weight(Trait::GoodWithYoungChildren), Some(1.0));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(1)));
        assert_eq!(delta.weight(Trait::SheddingLevel), Some(1.0));
        assert!(!delta.contains(Trait::EnergyLevel));
    }

    #[test]
    fn test_pending_energy_uses_level_words() {
        let delta = extract("pretty high I'd say", Some(Trait::EnergyLevel));
        assert_eq!(delta.levels.len(), 1);
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(4)));
        assert_eq!(delta.weight(Trait::EnergyLevel), Some(ANSWER_WEIGHT));
    }

    #[test]
    fn test_specific_phrase_beats_generic() {
        // "very active" must win over the plain "active" rule
        let delta = extract("We are very active and love to run", None);
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(5)));

        // "active" is checked before "low energy"
        let delta = extract("I'm active but want a low energy dog", None);
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(4)));
    }

    #[test]
    fn test_no_kids_overrides_kids() {
        let delta = extract("We have no kids", None);
        assert_eq!(delta.level(Trait::GoodWithYoungChildren), Some(level(3)));
        assert_eq!(delta.weight(Trait::GoodWithYoungChildren), Some(0.5));
    }

    #[test]
    fn test_pending_shedding_allergy_overrides_level_words() {
        let delta = extract("medium, but my partner is allergic", Some(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(1)));
        assert_eq!(delta.weight(Trait::SheddingLevel), Some(1.0));
    }

    #[test]
    fn test_pending_yes_no() {
        let yes = extract("yep", Some(Trait::GoodWithYoungChildren));
        assert_eq!(yes.level(Trait::GoodWithYoungChildren), Some(level(5)));
        assert_eq!(yes.weight(Trait::GoodWithYoungChildren), Some(1.0));

        let no = extract("Nope.", Some(Trait::GoodWithYoungChildren));
        assert_eq!(no.level(Trait::GoodWithYoungChildren), Some(level(3)));
        assert_eq!(no.weight(Trait::GoodWithYoungChildren), Some(0.5));
    }

    #[test]
    fn test_pending_digit_answer() {
        let delta = extract("2", Some(Trait::BarkingLevel));
        assert_eq!(delta.level(Trait::BarkingLevel), Some(level(2)));

        // Out of scale numbers are not answers
        let delta = extract("9", Some(Trait::BarkingLevel));
        assert!(delta.is_empty());
    }

    #[test]
    fn test_pending_multi_digit_number_is_not_a_level() {
        // "10" must not be read as its first digit
        let delta = extract("10", Some(Trait::BarkingLevel));
        assert!(delta.is_empty());

        let delta = extract("15 out of 10", Some(Trait::EnergyLevel));
        assert!(delta.is_empty());
    }

    #[test]
    fn test_moderately_active_is_medium_energy() {
        let delta = extract("we are moderately active", None);
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(3)));
        assert_eq!(delta.weight(Trait::EnergyLevel), Some(0.8));
    }

    #[test]
    fn test_count_of_kids_answers_children_question() {
        let delta = extract("2 kids under five", Some(Trait::GoodWithYoungChildren));
        assert_eq!(delta.level(Trait::GoodWithYoungChildren), Some(level(5)));
        assert_eq!(delta.weight(Trait::GoodWithYoungChildren), Some(1.0));

        // Level words do not answer a yes/no question either
        let delta = extract("high", Some(Trait::GoodWithOtherDogs));
        assert!(delta.is_empty());
    }

    #[test]
    fn test_house_with_yard_answers_living_space() {
        let delta = extract("a house with a big yard", Some(Trait::AdaptabilityLevel));
        assert_eq!(delta.level(Trait::AdaptabilityLevel), Some(level(3)));
        assert_eq!(delta.weight(Trait::AdaptabilityLevel), Some(0.5));

        // The apartment rule still wins when both are mentioned
        let delta = extract("an apartment now, a house later", None);
        assert_eq!(delta.level(Trait::AdaptabilityLevel), Some(level(5)));
    }

    #[test]
    fn test_no_to_allergy_question() {
        let delta = extract("no", Some(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(4)));
        assert_eq!(delta.weight(Trait::SheddingLevel), Some(0.5));

        // "no allergies" must not trip the allergy words
        let delta = extract("No allergies here", Some(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(4)));

        // Someone allergic still wins over a leading "no"
        let delta = extract("no, but my son is allergic", Some(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(1)));

        // Asking for no shedding is still a low-shedding preference
        let delta = extract("no shedding please", Some(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::SheddingLevel), Some(level(2)));
    }

    #[test]
    fn test_no_to_barking_question() {
        let delta = extract("none, please", Some(Trait::BarkingLevel));
        assert_eq!(delta.level(Trait::BarkingLevel), Some(level(1)));
        assert_eq!(delta.weight(Trait::BarkingLevel), Some(ANSWER_WEIGHT));
    }

    #[test]
    fn test_pending_answer_returns_immediately() {
        let delta = extract("low, and we have kids", Some(Trait::EnergyLevel));
        assert_eq!(delta.levels.len(), 1);
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(2)));
    }

    #[test]
    fn test_unanswered_pending_falls_through() {
        let delta = extract("we go hiking every weekend", Some(Trait::SheddingLevel));
        assert!(!delta.contains(Trait::SheddingLevel));
        assert_eq!(delta.level(Trait::EnergyLevel), Some(level(4)));
    }

    #[test]
    fn test_multiple_traits_in_one_message() {
        let delta = extract("First dog, we need a quiet and cuddly guard dog that likes the dog park", None);
        assert_eq!(delta.level(Trait::TrainabilityLevel), Some(level(5)));
        assert_eq!(delta.level(Trait::BarkingLevel), Some(level(2)));
        assert_eq!(delta.level(Trait::AffectionateWithFamily), Some(level(5)));
        assert_eq!(delta.level(Trait::WatchdogProtectiveNature), Some(level(5)));
        assert_eq!(delta.level(Trait::GoodWithOtherDogs), Some(level(5)));
    }
}
