//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types decouple the domain types from their wire representation.

pub mod people;

pub use people::{
    CreatePersonRequest, ListParams, ListPeopleQuery, ListPeopleResponse, PersonResponse,
    UpdatePersonRequest,
};
