//! Person domain types.
//!
//! `Person` is the read model with gender and nationality materialized as
//! names. Writes go through `NewPerson` (full record) and `PersonUpdate`
//! (partial record); reads are narrowed with `PersonFilter`.

use serde::{Deserialize, Serialize};

use super::demographics::Demographics;
use super::patch::Patch;

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronym: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

/// What a caller supplies to register a person; demographics are guessed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonDraft {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronym: Option<String>,
}

impl PersonDraft {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            patronym: None,
        }
    }

    #[must_use]
    pub fn with_patronym(mut self, patronym: impl Into<String>) -> Self {
        self.patronym = Some(patronym.into());
        self
    }

    /// Attach guessed demographics, producing a full record to store.
    pub fn into_new_person(self, demographics: Demographics) -> NewPerson {
        NewPerson {
            name: self.name,
            surname: self.surname,
            patronym: self.patronym,
            age: demographics.age,
            gender: demographics.gender,
            nationality: demographics.nationality,
        }
    }
}

/// Data for creating a new person.
///
/// Gender and nationality are free text; the repository normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub patronym: Option<String>,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

impl NewPerson {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            patronym: None,
            age,
            gender: gender.into(),
            nationality: nationality.into(),
        }
    }

    #[must_use]
    pub fn with_patronym(mut self, patronym: impl Into<String>) -> Self {
        self.patronym = Some(patronym.into());
        self
    }
}

/// Partial update of a stored person.
///
/// Every field defaults to `Patch::Absent`. `patronym: Provided(None)`
/// clears the patronym.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonUpdate {
    pub name: Patch<String>,
    pub surname: Patch<String>,
    pub patronym: Patch<Option<String>>,
    pub age: Patch<i32>,
    pub gender: Patch<String>,
    pub nationality: Patch<String>,
}

impl PersonUpdate {
    /// Returns `true` when no field is provided.
    pub const fn is_empty(&self) -> bool {
        !(self.name.is_provided()
            || self.surname.is_provided()
            || self.patronym.is_provided()
            || self.age.is_provided()
            || self.gender.is_provided()
            || self.nationality.is_provided())
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Provided(name.into());
        self
    }

    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Patch::Provided(surname.into());
        self
    }

    #[must_use]
    pub fn with_patronym(mut self, patronym: Option<String>) -> Self {
        self.patronym = Patch::Provided(patronym);
        self
    }

    #[must_use]
    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = Patch::Provided(age);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Patch::Provided(gender.into());
        self
    }

    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Patch::Provided(nationality.into());
        self
    }
}

/// Exact-match search criteria, combined by conjunction.
///
/// `None` means "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronym: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

impl PersonFilter {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    #[must_use]
    pub fn with_patronym(mut self, patronym: impl Into<String>) -> Self {
        self.patronym = Some(patronym.into());
        self
    }

    #[must_use]
    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}
