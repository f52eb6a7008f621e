use crate::core::keywords::Tokens;
use crate::models::{ExtractedPreferences, PreferenceProfile, Trait};

/// Scripted follow-up questions, in the order they are asked
pub const QUESTION_ORDER: [Trait; 6] = [
    Trait::EnergyLevel,
    Trait::AdaptabilityLevel,
    Trait::SheddingLevel,
    Trait::GoodWithYoungChildren,
    Trait::GoodWithOtherDogs,
    Trait::BarkingLevel,
];

const GENERAL_DOG_WORDS: &[&str] = &[
    "dog", "dogs", "breed", "breeds", "puppy", "puppies", "pet", "pets", "canine", "walk", "leash",
    "bark", "coat", "fur",
];

/// First scripted question the profile has no answer for yet
pub fn next_question(profile: &PreferenceProfile) -> Option<Trait> {
    QUESTION_ORDER.iter().copied().find(|t| !profile.contains(*t))
}

/// Words that show a reply is about the pending question even when no level was parsed
fn pending_hints(pending: Trait) -> &'static [&'static str] {
    match pending {
        Trait::EnergyLevel => &["low", "medium", "high", "moderate", "energetic", "calm", "active"],
        Trait::AdaptabilityLevel => &["apartment", "flat", "house", "home", "yard", "garden", "space"],
        Trait::SheddingLevel => &["allergy", "allergies", "hypoallergenic", "shedding", "shed", "dander", "no", "none", "nope"],
        Trait::GoodWithYoungChildren => &["kid", "kids", "child", "children", "baby", "toddler", "family"],
        Trait::GoodWithOtherDogs => &["dog", "dogs", "other", "another"],
        Trait::BarkingLevel => &["bark", "barking", "noise", "quiet", "loud", "no", "none", "nope"],
        _ => &["low", "medium", "high"],
    }
}

/// Decide whether a reply is clearly unrelated to finding a dog
///
/// Callers use this to re-prompt instead of silently ignoring the message.
/// The opening message of a conversation (empty `profile`, nothing pending)
/// is never off topic.
pub fn is_off_topic(
    utterance: &str,
    pending: Option<Trait>,
    profile: &PreferenceProfile,
    delta: &ExtractedPreferences,
) -> bool {
    if !delta.is_empty() || (pending.is_none() && profile.is_empty()) {
        return false;
    }

    let tokens = Tokens::new(utterance);
    if let Some(t) = pending {
        if tokens.contains_any(pending_hints(t)) {
            return false;
        }
    }

    !tokens.contains_any(GENERAL_DOG_WORDS)
}
