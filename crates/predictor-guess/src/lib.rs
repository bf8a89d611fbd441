//! Demographic guessing over the public agify, genderize and nationalize APIs.
//!
//! The client implements `DemographicsPort` from `predictor-core`; adapters
//! hold it as `Arc<dyn DemographicsPort>` and never see HTTP details.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultDemographicsClient, DemographicsClient};

// Configuration
pub use config::GuessClientConfig;

// Errors
pub use error::{GuessError, GuessResult};

// HTTP seam
pub use http::{HttpBackend, ReqwestBackend};
