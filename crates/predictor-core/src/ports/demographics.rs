//! Demographics port definition.
//!
//! Infers age, gender and nationality from a first name. The core never
//! performs outbound calls itself; adapters implement this trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DemographicField, Demographics};

/// Errors from demographic guessing.
#[derive(Debug, Error)]
pub enum DemographicsError {
    /// The upstream service had no answer for this name.
    #[error("No {field} guess available for name '{name}'")]
    NotFound {
        name: String,
        field: DemographicField,
    },

    /// Network failure or unexpected response from the upstream service.
    #[error("Demographics service error: {0}")]
    Upstream(String),
}

/// Port for guessing demographics from a name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemographicsPort: Send + Sync {
    async fn guess(&self, name: &str) -> Result<Demographics, DemographicsError>;
}
