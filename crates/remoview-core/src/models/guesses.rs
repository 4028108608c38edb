use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Impressions too generic to grade against any location
pub const GENERIC_TERMS: [&str; 6] = ["air", "sky", "sunlight", "ground", "dirt", "rock"];

/// The six answers a participant submits for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGuesses {
    pub seen_object1: String,
    pub seen_object2: String,
    pub seen_object3: String,
    pub continent: String,
    pub language: String,
    pub area_type: String,
}

impl UserGuesses {
    /// Value of a single guess field
    pub fn get(&self, field: GuessField) -> &str {
        match field {
            GuessField::SeenObject1 => &self.seen_object1,
            GuessField::SeenObject2 => &self.seen_object2,
            GuessField::SeenObject3 => &self.seen_object3,
            GuessField::Continent => &self.continent,
            GuessField::Language => &self.language,
            GuessField::AreaType => &self.area_type,
        }
    }

    /// Mutable access to a single guess field
    pub fn get_mut(&mut self, field: GuessField) -> &mut String {
        match field {
            GuessField::SeenObject1 => &mut self.seen_object1,
            GuessField::SeenObject2 => &mut self.seen_object2,
            GuessField::SeenObject3 => &mut self.seen_object3,
            GuessField::Continent => &mut self.continent,
            GuessField::Language => &mut self.language,
            GuessField::AreaType => &mut self.area_type,
        }
    }

    /// Set a single guess field
    pub fn set(&mut self, field: GuessField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        let mut guesses = self.clone();
        for field in GuessField::ALL {
            let value = guesses.get(field).trim().to_string();
            guesses.set(field, value);
        }
        guesses
    }

    /// Check the submission rules before anything leaves the process.
    ///
    /// Every field must be non-blank, no impression may be a generic term
    /// (case-insensitive), and continent/area type must name a known choice.
    pub fn validate(&self) -> Result<(), GuessError> {
        for field in GuessField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(GuessError::MissingField { field });
            }
        }

        for field in GuessField::IMPRESSIONS {
            let value = self.get(field).trim().to_lowercase();
            if let Some(term) = GENERIC_TERMS.iter().find(|term| **term == value) {
                return Err(GuessError::GenericImpression {
                    field,
                    term: (*term).to_string(),
                });
            }
        }

        if self.continent.parse::<Continent>().is_err() {
            return Err(GuessError::UnknownChoice {
                field: GuessField::Continent,
                value: self.continent.clone(),
            });
        }

        if self.area_type.parse::<AreaType>().is_err() {
            return Err(GuessError::UnknownChoice {
                field: GuessField::AreaType,
                value: self.area_type.clone(),
            });
        }

        Ok(())
    }
}

/// Local submission failures; never involve the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("{} is required", .field.label())]
    MissingField { field: GuessField },

    #[error("{} is too generic: '{term}'", .field.label())]
    GenericImpression { field: GuessField, term: String },

    #[error("{} '{value}' is not a known choice", .field.label())]
    UnknownChoice { field: GuessField, value: String },
}

impl GuessError {
    pub fn field(&self) -> GuessField {
        match self {
            GuessError::MissingField { field }
            | GuessError::GenericImpression { field, .. }
            | GuessError::UnknownChoice { field, .. } => *field,
        }
    }
}

/// The six fixed guess keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessField {
    SeenObject1,
    SeenObject2,
    SeenObject3,
    Continent,
    Language,
    AreaType,
}

impl GuessField {
    pub const ALL: [GuessField; 6] = [
        GuessField::SeenObject1,
        GuessField::SeenObject2,
        GuessField::SeenObject3,
        GuessField::Continent,
        GuessField::Language,
        GuessField::AreaType,
    ];

    pub const IMPRESSIONS: [GuessField; 3] =
        [GuessField::SeenObject1, GuessField::SeenObject2, GuessField::SeenObject3];

    /// Wire key, matching the serialized `UserGuesses` field name
    pub fn key(&self) -> &'static str {
        match self {
            GuessField::SeenObject1 => "seenObject1",
            GuessField::SeenObject2 => "seenObject2",
            GuessField::SeenObject3 => "seenObject3",
            GuessField::Continent => "continent",
            GuessField::Language => "language",
            GuessField::AreaType => "areaType",
        }
    }

    /// Human-readable title
    pub fn label(&self) -> &'static str {
        match self {
            GuessField::SeenObject1 => "Impression 1",
            GuessField::SeenObject2 => "Impression 2",
            GuessField::SeenObject3 => "Impression 3",
            GuessField::Continent => "Continent",
            GuessField::Language => "Language",
            GuessField::AreaType => "Area Type",
        }
    }
}

impl fmt::Display for GuessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase and drop separators so "north america", "North-America" and
/// "NorthAmerica" compare equal
fn choice_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Continents offered as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Antarctica,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = choice_key(s);
        Continent::ALL
            .into_iter()
            .find(|c| choice_key(c.as_str()) == key)
            .ok_or_else(|| format!("Unknown continent: {}", s))
    }
}

/// Area types offered as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaType {
    Urban,
    Rural,
    Forest,
    Desert,
    Mountains,
    Coastal,
    Water,
    Grassland,
    Ice,
}

impl AreaType {
    pub const ALL: [AreaType; 9] = [
        AreaType::Urban,
        AreaType::Rural,
        AreaType::Forest,
        AreaType::Desert,
        AreaType::Mountains,
        AreaType::Coastal,
        AreaType::Water,
        AreaType::Grassland,
        AreaType::Ice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Urban => "Urban",
            AreaType::Rural => "Rural",
            AreaType::Forest => "Forest",
            AreaType::Desert => "Desert",
            AreaType::Mountains => "Mountains",
            AreaType::Coastal => "Coastal",
            AreaType::Water => "Water",
            AreaType::Grassland => "Grassland",
            AreaType::Ice => "Ice",
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = choice_key(s);
        AreaType::ALL
            .into_iter()
            .find(|a| choice_key(a.as_str()) == key)
            .ok_or_else(|| format!("Unknown area type: {}", s))
    }
}
