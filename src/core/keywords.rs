use crate::models::{Level, Trait};

/// One entry of the free-text rule table
///
/// Rules for the same trait are evaluated by ascending `priority`; the first
/// rule with any matching phrase decides the trait's level and weight.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub trait_: Trait,
    pub priority: u8,
    pub phrases: &'static [&'static str],
    pub level: Level,
    pub weight: f64,
}

const fn rule(
    trait_: Trait,
    priority: u8,
    phrases: &'static [&'static str],
    level: u8,
    weight: f64,
) -> KeywordRule {
    KeywordRule {
        trait_,
        priority,
        phrases,
        level: Level::clamped(level),
        weight,
    }
}

/// Free-text rules, grouped by trait and ordered most specific first
pub static RULES: &[KeywordRule] = &[
    // Energy / activity
    rule(Trait::EnergyLevel, 1, &["very active", "marathon", "trail run", "high energy", "athletic"], 5, 1.0),
    rule(Trait::EnergyLevel, 2, &["moderately active", "somewhat active", "fairly active"], 3, 0.8),
    rule(Trait::EnergyLevel, 3, &["active", "jog", "jogging", "run", "running", "hike", "hiking", "gym"], 4, 0.9),
    rule(Trait::EnergyLevel, 4, &["medium energy", "moderate energy"], 3, 0.8),
    rule(Trait::EnergyLevel, 5, &["low energy", "couch", "relaxed", "homebody"], 2, 0.9),
    rule(Trait::EnergyLevel, 6, &["very calm", "really calm", "sedentary"], 1, 1.0),
    // Children / family
    rule(Trait::GoodWithYoungChildren, 1, &["no kids", "no children", "don't have kids", "no young kids"], 3, 0.5),
    rule(Trait::GoodWithYoungChildren, 2, &["kid", "kids", "child", "children", "family", "toddler", "baby"], 5, 1.0),
    // Other dogs
    rule(Trait::GoodWithOtherDogs, 1, &["other dog", "other dogs", "another dog", "dog park", "play with dogs"], 5, 0.9),
    // Shedding / allergies
    rule(Trait::SheddingLevel, 1, &["allergy", "allergies", "allergic", "hypoallergenic", "asthma"], 1, 1.0),
    rule(Trait::SheddingLevel, 2, &["low shedding", "minimal shedding", "no shedding", "doesn't shed much"], 2, 0.8),
    rule(Trait::SheddingLevel, 3, &["okay with shedding", "ok with shedding", "don't mind fur", "don't mind shedding", "shedding is fine"], 4, 0.7),
    // Barking / noise
    rule(Trait::BarkingLevel, 1, &["quiet", "noise sensitive", "thin walls", "no barking"], 2, 0.9),
    rule(Trait::WatchdogProtectiveNature, 1, &["guard dog", "watchdog", "watch dog", "protective"], 5, 0.8),
    // Trainability / experience
    rule(Trait::TrainabilityLevel, 1, &["experienced owner", "i've had many dogs"], 3, 0.5),
    rule(Trait::TrainabilityLevel, 2, &["first dog", "new owner", "beginner", "first time owner"], 5, 0.9),
    // Affection / independence
    rule(Trait::AffectionateWithFamily, 1, &["not clingy", "more independent", "independent"], 3, 0.7),
    rule(Trait::AffectionateWithFamily, 2, &["very affectionate", "cuddly", "lap dog", "affectionate"], 5, 0.9),
    // Living space
    rule(Trait::AdaptabilityLevel, 1, &["apartment", "flat", "condo", "studio", "small space"], 5, 0.6),
    rule(Trait::AdaptabilityLevel, 2, &["house", "yard", "garden", "big house", "suburbs", "farm"], 3, 0.5),
];

/// Qualitative level words for answers to a pending question, checked in order
pub static LEVEL_WORDS: &[(&str, u8)] = &[
    ("very low", 1),
    ("very high", 5),
    ("low", 2),
    ("high", 4),
    ("medium", 3),
    ("moderate", 3),
    ("average", 3),
];

pub const ALLERGY_WORDS: &[&str] = &["hypoallergenic", "allergy", "allergies", "allergic"];
pub const AFFIRMATIVE_WORDS: &[&str] = &["yes", "yeah", "yep"];
pub const NEGATIVE_WORDS: &[&str] = &["no", "nope", "none"];
pub const NO_ALLERGY_PHRASES: &[&str] = &["no allergies", "no allergy", "not allergic", "nobody", "no one"];
pub const SHEDDING_WORDS: &[&str] = &["shed", "sheds", "shedding", "fur", "hair"];

/// Weight given to a generic answer to a pending question
pub const ANSWER_WEIGHT: f64 = 0.9;

/// Lower-cased word tokens of an utterance
///
/// Splits on anything that is neither alphanumeric nor an apostrophe, and
/// drops apostrophes so that "don't" and "dont" tokenize alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    pub fn new(text: &str) -> Self {
        let tokens = text
            .to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
            .map(|word| word.chars().filter(|c| *c != '\'' && *c != '\u{2019}').collect::<String>())
            .filter(|word| !word.is_empty())
            .collect();
        Self(tokens)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `phrase` occurs as a contiguous run of whole tokens
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let needle = Tokens::new(phrase);
        let needle = needle.as_slice();
        if needle.is_empty() || needle.len() > self.0.len() {
            return false;
        }
        self.0.windows(needle.len()).any(|window| window == needle)
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.contains_phrase(p))
    }

    /// Whole number leading the first token, as in "4", "4 please" or "10"
    pub fn leading_number(&self) -> Option<u32> {
        let first = self.0.first()?;
        let digits: String = first.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}
