use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a trait name or level does not fit the fixed trait scale
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraitError {
    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    #[error("Level out of range (expected 1-5): {0}")]
    LevelOutOfRange(i64),
}

/// Breed trait scored on a 1-5 ordinal scale
///
/// The display name of every variant matches the column header used by the
/// breed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trait {
    AffectionateWithFamily,
    GoodWithYoungChildren,
    GoodWithOtherDogs,
    SheddingLevel,
    CoatGroomingFrequency,
    DroolingLevel,
    OpennessToStrangers,
    PlayfulnessLevel,
    WatchdogProtectiveNature,
    AdaptabilityLevel,
    TrainabilityLevel,
    EnergyLevel,
    BarkingLevel,
    MentalStimulationNeeds,
}

impl Trait {
    pub const ALL: [Trait; 14] = [
        Trait::AffectionateWithFamily,
        Trait::GoodWithYoungChildren,
        Trait::GoodWithOtherDogs,
        Trait::SheddingLevel,
        Trait::CoatGroomingFrequency,
        Trait::DroolingLevel,
        Trait::OpennessToStrangers,
        Trait::PlayfulnessLevel,
        Trait::WatchdogProtectiveNature,
        Trait::AdaptabilityLevel,
        Trait::TrainabilityLevel,
        Trait::EnergyLevel,
        Trait::BarkingLevel,
        Trait::MentalStimulationNeeds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Trait::AffectionateWithFamily => "Affectionate With Family",
            Trait::GoodWithYoungChildren => "Good With Young Children",
            Trait::GoodWithOtherDogs => "Good With Other Dogs",
            Trait::SheddingLevel => "Shedding Level",
            Trait::CoatGroomingFrequency => "Coat Grooming Frequency",
            Trait::DroolingLevel => "Drooling Level",
            Trait::OpennessToStrangers => "Openness To Strangers",
            Trait::PlayfulnessLevel => "Playfulness Level",
            Trait::WatchdogProtectiveNature => "Watchdog/Protective Nature",
            Trait::AdaptabilityLevel => "Adaptability Level",
            Trait::TrainabilityLevel => "Trainability Level",
            Trait::EnergyLevel => "Energy Level",
            Trait::BarkingLevel => "Barking Level",
            Trait::MentalStimulationNeeds => "Mental Stimulation Needs",
        }
    }

    /// Long-form meaning of the trait's scale
    pub fn description(self) -> &'static str {
        match self {
            Trait::AffectionateWithFamily => "How affectionate a breed is likely to be with family members and familiar people",
            Trait::GoodWithYoungChildren => "A breed's level of tolerance and patience with children's behavior",
            Trait::GoodWithOtherDogs => "How generally friendly a breed is towards other dogs",
            Trait::SheddingLevel => "How much fur and hair you can expect the breed to leave behind",
            Trait::CoatGroomingFrequency => "How frequently a breed requires bathing, brushing, trimming, or other coat maintenance",
            Trait::DroolingLevel => "How drool-prone a breed tends to be",
            Trait::OpennessToStrangers => "How welcoming a breed is likely to be towards strangers",
            Trait::PlayfulnessLevel => "How enthusiastic about play a breed is likely to be, even past puppyhood",
            Trait::WatchdogProtectiveNature => "A breed's tendency to alert you that strangers are around",
            Trait::AdaptabilityLevel => "How easily a breed handles change, including living conditions and noise",
            Trait::TrainabilityLevel => "How easy it will be to train your dog and how willing it is to learn new things",
            Trait::EnergyLevel => "The amount of exercise and mental stimulation a breed needs",
            Trait::BarkingLevel => "How often this breed vocalizes, whether it's with barks or howls",
            Trait::MentalStimulationNeeds => "How much mental stimulation a breed needs to stay happy and healthy",
        }
    }

    /// Traits answered with yes/no rather than a level
    pub fn is_yes_no(self) -> bool {
        matches!(self, Trait::GoodWithYoungChildren | Trait::GoodWithOtherDogs)
    }

    /// Follow-up question asked when the conversation wants this trait
    pub fn question(self) -> String {
        match self {
            Trait::EnergyLevel => {
                "How active are you? Would you like a low, medium or high energy dog?".to_string()
            }
            Trait::AdaptabilityLevel => {
                "Where do you live: an apartment, or a house with a yard?".to_string()
            }
            Trait::SheddingLevel => {
                "Does anyone at home have allergies, or do you mind a dog that sheds?".to_string()
            }
            Trait::GoodWithYoungChildren => {
                "Are there young children in your home?".to_string()
            }
            Trait::GoodWithOtherDogs => "Will the dog live or play with other dogs?".to_string(),
            Trait::BarkingLevel => "How much barking can you live with: low, medium or high?".to_string(),
            other => format!("What level of {} would you prefer, from low to high?", other.name().to_lowercase()),
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trait {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Trait::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TraitError::UnknownTrait(wanted.to_string()))
    }
}

impl Serialize for Trait {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Trait {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Desired or observed level on the 1-5 trait scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, TraitError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(TraitError::LevelOutOfRange(value))
        }
    }

    /// Build a level from a value already known to be on the scale, clamping otherwise
    pub(crate) const fn clamped(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for Level {
    type Error = TraitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trait_has_description() {
        for t in Trait::ALL {
            assert!(!t.description().is_empty(), "{} has no description", t);
        }
    }

    #[test]
    fn test_trait_names_round_trip() {
        for t in Trait::ALL {
            assert_eq!(t.name().parse::<Trait>().unwrap(), t);
        }
        assert_eq!("energy level".parse::<Trait>().unwrap(), Trait::EnergyLevel);
    }

    #[test]
    fn test_unknown_trait_rejected() {
        let err = "Tail Length".parse::<Trait>().unwrap_err();
        assert_eq!(err, TraitError::UnknownTrait("Tail Length".to_string()));
    }

    #[test]
    fn test_level_bounds() {
        assert!(Level::new(0).is_err());
        assert!(Level::new(6).is_err());
        assert_eq!(Level::new(3).unwrap().value(), 3);
        assert_eq!(Level::clamped(9).value(), 5);
    }

    #[test]
    fn test_level_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Level>("7").is_err());
        assert_eq!(serde_json::from_str::<Level>("2").unwrap().value(), 2);
        assert_eq!(serde_json::to_string(&Level::clamped(4)).unwrap(), "4");
    }

    #[test]
    fn test_trait_serializes_as_display_name() {
        let json = serde_json::to_string(&Trait::WatchdogProtectiveNature).unwrap();
        assert_eq!(json, "\"Watchdog/Protective Nature\"");
        assert!(serde_json::from_str::<Trait>("\"Coat Color\"").is_err());
    }
}
