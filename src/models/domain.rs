use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::traits::{Level, Trait};

/// One row of the breed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub name: String,
    /// Trait values on the 1-5 scale; missing or malformed cells are absent
    #[serde(default)]
    pub values: BTreeMap<Trait, f64>,
}

impl BreedRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly used by tests and fixtures
    pub fn with(mut self, t: Trait, value: f64) -> Self {
        self.values.insert(t, value);
        self
    }

    pub fn trait_value(&self, t: Trait) -> Option<f64> {
        self.values.get(&t).copied()
    }
}

/// Coerce a raw catalog cell into a trait value
///
/// Accepts plain numbers on the 1-5 scale or mixed strings such as
/// `"5 - High"`, in which case the first digit is used. Anything else is
/// treated as missing.
pub fn parse_trait_cell(raw: &str) -> Option<f64> {
    let cell = raw.trim();
    if cell.is_empty() {
        return None;
    }

    if let Ok(value) = cell.parse::<f64>() {
        return on_scale(value);
    }

    cell.chars()
        .find(|c| c.is_ascii_digit())
        .and_then(|c| c.to_digit(10))
        .and_then(|d| on_scale(d as f64))
}

#[inline]
fn on_scale(value: f64) -> Option<f64> {
    if value.is_finite() && (Level::MIN as f64..=Level::MAX as f64).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Clamp an importance weight into [0, 1], mapping non-finite values to 0
#[inline]
pub fn clamp_weight(weight: f64) -> f64 {
    if weight.is_finite() {
        weight.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn deserialize_weight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_weight)
}

/// Desired level for a trait together with how much it matters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub level: Level,
    #[serde(deserialize_with = "deserialize_weight")]
    pub weight: f64,
}

/// Preferences extracted from a single utterance
///
/// Both maps always carry the same keys. An empty delta means the utterance
/// held no recognizable signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPreferences {
    pub levels: BTreeMap<Trait, Level>,
    pub weights: BTreeMap<Trait, f64>,
}

impl ExtractedPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, t: Trait, level: Level, weight: f64) {
        self.levels.insert(t, level);
        self.weights.insert(t, clamp_weight(weight));
    }

    pub fn contains(&self, t: Trait) -> bool {
        self.levels.contains_key(&t)
    }

    pub fn level(&self, t: Trait) -> Option<Level> {
        self.levels.get(&t).copied()
    }

    pub fn weight(&self, t: Trait) -> Option<f64> {
        self.weights.get(&t).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn traits(&self) -> impl Iterator<Item = Trait> + '_ {
        self.levels.keys().copied()
    }
}

/// Accumulated preferences for one conversation
///
/// Only traits inferred from the user's own words are present; a missing
/// trait means "no preference", not a neutral level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceProfile {
    preferences: BTreeMap<Trait, Preference>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, t: Trait, level: Level, weight: f64) {
        self.preferences.insert(
            t,
            Preference {
                level,
                weight: clamp_weight(weight),
            },
        );
    }

    pub fn get(&self, t: Trait) -> Option<&Preference> {
        self.preferences.get(&t)
    }

    pub fn level(&self, t: Trait) -> Option<Level> {
        self.preferences.get(&t).map(|p| p.level)
    }

    pub fn weight(&self, t: Trait) -> Option<f64> {
        self.preferences.get(&t).map(|p| p.weight)
    }

    pub fn contains(&self, t: Trait) -> bool {
        self.preferences.contains_key(&t)
    }

    pub fn total_weight(&self) -> f64 {
        self.preferences.values().map(|p| p.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, &Preference)> + '_ {
        self.preferences.iter().map(|(t, p)| (*t, p))
    }

    /// Merge a freshly extracted delta into the profile
    ///
    /// The latest level always wins. The weight is the maximum of the stored
    /// and the new weight, so it never decreases within a session.
    pub fn merge(&mut self, delta: &ExtractedPreferences) {
        for (t, level) in &delta.levels {
            let new_weight = delta.weight(*t).unwrap_or(0.0);
            let weight = match self.preferences.get(t) {
                Some(existing) => existing.weight.max(new_weight),
                None => new_weight,
            };
            self.set(*t, *level, weight);
        }
    }

    /// Forget everything, as on a conversation reset
    pub fn clear(&mut self) {
        self.preferences.clear();
    }
}

/// Per-trait comparison between the profile and one breed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitMatch {
    #[serde(rename = "trait")]
    pub trait_: Trait,
    pub desired: Level,
    pub actual: Option<f64>,
    /// Closeness in [0, 1]; 1 means the breed sits exactly on the desired level
    pub match_fraction: f64,
    pub weight: f64,
}

/// Score of one breed against a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub breed: String,
    pub score: f64,
    pub details: Vec<TraitMatch>,
}

/// Scoring constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// Difference charged for a trait the breed has no data for
    pub missing_value_diff: f64,
    /// Largest possible difference on the 1-5 scale
    pub max_diff: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            missing_value_diff: 2.5,
            max_diff: (Level::MAX - Level::MIN) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_parse_trait_cell() {
        assert_eq!(parse_trait_cell("4"), Some(4.0));
        assert_eq!(parse_trait_cell(" 3.5 "), Some(3.5));
        assert_eq!(parse_trait_cell("5 - High"), Some(5.0));
        assert_eq!(parse_trait_cell("n/a"), None);
        assert_eq!(parse_trait_cell(""), None);
        assert_eq!(parse_trait_cell("0"), None);
        assert_eq!(parse_trait_cell("9 - Off the charts"), None);
    }

    #[test]
    fn test_merge_keeps_max_weight_and_latest_level() {
        let mut profile = PreferenceProfile::new();
        profile.set(Trait::EnergyLevel, level(5), 1.0);

        let mut delta = ExtractedPreferences::new();
        delta.insert(Trait::EnergyLevel, level(2), 0.6);
        profile.merge(&delta);

        assert_eq!(profile.level(Trait::EnergyLevel), Some(level(2)));
        assert_eq!(profile.weight(Trait::EnergyLevel), Some(1.0));
    }

    #[test]
    fn test_merge_adds_new_traits() {
        let mut profile = PreferenceProfile::new();
        let mut delta = ExtractedPreferences::new();
        delta.insert(Trait::BarkingLevel, level(2), 0.9);
        profile.merge(&delta);

        assert_eq!(profile.len(), 1);
        assert_eq!(profile.weight(Trait::BarkingLevel), Some(0.9));
        assert!((profile.total_weight() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_weights_are_clamped() {
        let mut profile = PreferenceProfile::new();
        profile.set(Trait::EnergyLevel, level(3), 4.0);
        profile.set(Trait::SheddingLevel, level(3), f64::NAN);
        assert_eq!(profile.weight(Trait::EnergyLevel), Some(1.0));
        assert_eq!(profile.weight(Trait::SheddingLevel), Some(0.0));
    }

    #[test]
    fn test_profile_json_shape() {
        let json = r#"{"Energy Level": {"level": 4, "weight": 1.7}}"#;
        let profile: PreferenceProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.level(Trait::EnergyLevel), Some(level(4)));
        assert_eq!(profile.weight(Trait::EnergyLevel), Some(1.0));

        let bad = r#"{"Energy Level": {"level": 8, "weight": 0.5}}"#;
        assert!(serde_json::from_str::<PreferenceProfile>(bad).is_err());
    }
}
