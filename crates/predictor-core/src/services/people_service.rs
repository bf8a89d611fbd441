//! People service - orchestrates registration and CRUD for people.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Page, PageRequest, Person, PersonDraft, PersonFilter, PersonUpdate};
use crate::ports::{CoreError, DemographicsPort, PersonRepository, Repos};

/// Service for person operations.
///
/// Registration asks the demographics port for age, gender and nationality
/// before storing the record. Everything else is a thin facade over the
/// injected `PersonRepository`, plus input validation.
pub struct PeopleService {
    repo: Arc<dyn PersonRepository>,
    demographics: Arc<dyn DemographicsPort>,
}

impl PeopleService {
    /// Create a new people service.
    pub fn new(repo: Arc<dyn PersonRepository>, demographics: Arc<dyn DemographicsPort>) -> Self {
        Self { repo, demographics }
    }

    /// Create the service from a repository container.
    pub fn from_repos(repos: &Repos, demographics: Arc<dyn DemographicsPort>) -> Self {
        Self::new(Arc::clone(&repos.people), demographics)
    }

    /// Register a person, guessing demographics from the first name.
    pub async fn create(&self, draft: PersonDraft) -> Result<Person, CoreError> {
        require_non_blank("name", &draft.name)?;
        require_non_blank("surname", &draft.surname)?;

        let demographics = self.demographics.guess(&draft.name).await?;
        debug!(
            name = %draft.name,
            age = demographics.age,
            gender = %demographics.gender,
            nationality = %demographics.nationality,
            "Guessed demographics"
        );

        let id = self
            .repo
            .create(draft.into_new_person(demographics))
            .await?;
        Ok(self.repo.get(id).await?)
    }

    /// Get a person by id.
    pub async fn get(&self, id: i64) -> Result<Person, CoreError> {
        self.repo.get(id).await.map_err(CoreError::from)
    }

    /// List people matching `filter`.
    pub async fn list(
        &self,
        filter: PersonFilter,
        page: PageRequest,
    ) -> Result<Page<Person>, CoreError> {
        if let Some(age) = filter.age {
            require_non_negative_age(age)?;
        }
        self.repo.list(filter, page).await.map_err(CoreError::from)
    }

    /// Apply a partial update and return the stored record.
    pub async fn update(&self, id: i64, update: PersonUpdate) -> Result<Person, CoreError> {
        if let crate::Patch::Provided(age) = update.age {
            require_non_negative_age(age)?;
        }
        self.repo.update(id, update).await?;
        Ok(self.repo.get(id).await?)
    }

    /// Delete a person.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await.map_err(CoreError::from)
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_non_negative_age(age: i32) -> Result<(), CoreError> {
    if age < 0 {
        return Err(CoreError::Validation(format!(
            "age must not be negative, got {age}"
        )));
    }
    Ok(())
}
