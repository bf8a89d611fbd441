//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod attribute_store;
mod filter_builder;
mod paginated_query;
mod query_parts;
mod row_mappers;
mod sqlite_person_repository;
mod update_builder;

pub use attribute_store::{LookupTable, NormalizedAttributeStore};
pub use filter_builder::{FilterBuilder, FilterPlan};
pub use paginated_query::PaginatedQueryExecutor;
pub use query_parts::{AssignmentList, Column, PredicateList, SqlValue};
pub use sqlite_person_repository::SqlitePersonRepository;
pub use update_builder::UpdateBuilder;
