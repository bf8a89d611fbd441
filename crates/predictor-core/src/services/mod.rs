//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports; they don't know
//! about concrete implementations.

mod people_service;

pub use people_service::PeopleService;
