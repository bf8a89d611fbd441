//! Core domain types and port definitions for predictor.
//!
//! This crate knows nothing about `SQLite`, HTTP or the demographic guessing
//! services. Adapters implement the traits in [`ports`] and the composition
//! root wires them into [`services::PeopleService`].

#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DemographicField, Demographics, NewPerson, Page, PageRequest, PageRequestError, Patch,
    Person, PersonDraft, PersonFilter, PersonUpdate,
};
pub use ports::{
    CoreError, DemographicsError, DemographicsPort, PersonRepository, Repos, RepositoryError,
};
pub use services::PeopleService;
