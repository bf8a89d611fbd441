//! `SQLite` storage for predictor.
//!
//! Implements the `PersonRepository` port from `predictor-core`. All SQL
//! lives here: lookup-table normalization for gender and nationality,
//! predicate and assignment lists rendered into parameterized statements,
//! and paginated listing with a separate total count.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{
    FilterBuilder, FilterPlan, LookupTable, NormalizedAttributeStore, PaginatedQueryExecutor,
    SqlitePersonRepository, UpdateBuilder,
};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked for its bundled SQLite build only
use libsqlite3_sys as _;
