//! Demographic values guessed from a first name.

use serde::{Deserialize, Serialize};

/// Age, gender and nationality inferred for a name.
///
/// These arrive already resolved; the storage layer only normalizes
/// gender and nationality into lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

/// Which demographic value a guess concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemographicField {
    Age,
    Gender,
    Nationality,
}

impl DemographicField {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Nationality => "nationality",
        }
    }
}

impl std::fmt::Display for DemographicField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
