//! Person repository port definition.
//!
//! This port defines the interface for persisting and querying people.
//! Implementations own gender/nationality normalization; callers only ever
//! see attribute names.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPerson, Page, PageRequest, Person, PersonFilter, PersonUpdate};

/// Port for person persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a person, creating lookup rows as needed. Returns the new id.
    async fn create(&self, person: NewPerson) -> Result<i64, RepositoryError>;

    /// Get a single person by id.
    async fn get(&self, id: i64) -> Result<Person, RepositoryError>;

    /// Apply a partial update. An empty update succeeds without touching storage.
    async fn update(&self, id: i64, update: PersonUpdate) -> Result<(), RepositoryError>;

    /// Delete a person.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// List people matching `filter`, ordered by ascending id.
    ///
    /// An unknown gender or nationality name yields an empty page, not an error.
    async fn list(
        &self,
        filter: PersonFilter,
        page: PageRequest,
    ) -> Result<Page<Person>, RepositoryError>;
}
