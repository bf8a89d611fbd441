//! Response bodies of the guessing APIs.
//!
//! Unknown names come back with null or empty fields rather than an error
//! status, so every answer is optional here.

use serde::Deserialize;

/// `GET https://api.agify.io?name=...`
#[derive(Debug, Clone, Deserialize)]
pub struct AgeGuess {
    #[serde(default)]
    pub age: Option<i32>,
}

/// `GET https://api.genderize.io?name=...`
#[derive(Debug, Clone, Deserialize)]
pub struct GenderGuess {
    #[serde(default)]
    pub gender: Option<String>,
}

/// `GET https://api.nationalize.io?name=...`
#[derive(Debug, Clone, Deserialize)]
pub struct NationalityGuess {
    #[serde(default)]
    pub country: Vec<CountryProbability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryProbability {
    pub country_id: String,
    #[serde(default)]
    pub probability: f64,
}

impl NationalityGuess {
    /// Country code with the highest probability; the first one wins ties.
    pub fn most_likely(self) -> Option<String> {
        self.country
            .into_iter()
            .reduce(|best, next| {
                if next.probability > best.probability {
                    next
                } else {
                    best
                }
            })
            .map(|c| c.country_id)
    }
}
