//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `person` - Person read model and write inputs (`Person`, `NewPerson`, `PersonUpdate`, `PersonFilter`)
//! - `patch` - Per-field presence wrapper for partial updates
//! - `page` - Pagination request and result types
//! - `demographics` - Guessed age/gender/nationality values

mod demographics;
mod page;
mod patch;
mod person;

pub use demographics::{DemographicField, Demographics};
pub use page::{Page, PageRequest, PageRequestError};
pub use patch::Patch;
pub use person::{NewPerson, Person, PersonDraft, PersonFilter, PersonUpdate};
