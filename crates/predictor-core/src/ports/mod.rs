//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No HTTP client details in the demographics port
//! - Traits are minimal and CRUD-focused for repositories

pub mod demographics;
pub mod person_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::PageRequestError;

pub use demographics::{DemographicsError, DemographicsPort};
pub use person_repository::PersonRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `predictor-core` so services can accept it without depending on
/// `predictor-db`.
#[derive(Clone)]
pub struct Repos {
    /// Person repository for CRUD operations on people.
    pub people: Arc<dyn PersonRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(people: Arc<dyn PersonRepository>) -> Self {
        Self { people }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
/// Uniqueness collisions on lookup tables are resolved inside the storage
/// adapter and never show up here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No person with the given id exists.
    #[error("Person not found: {0}")]
    NotFound(i64),

    /// Storage backend failure, tagged with the operation that hit it.
    #[error("Storage error during {op}: {message}")]
    Storage { op: &'static str, message: String },
}

impl RepositoryError {
    /// Returns `true` for [`RepositoryError::NotFound`].
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Demographic guessing failed.
    #[error(transparent)]
    Demographics(#[from] DemographicsError),

    /// Pagination parameters were invalid.
    #[error(transparent)]
    Page(#[from] PageRequestError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
