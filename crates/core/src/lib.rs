//! SmartPlan Core - Domain entities, services, and traits.
//!
//! This crate contains the client-side business logic for SmartPlan.
//! It is transport-agnostic and defines gateway traits that are
//! implemented by the `smartplan-gateway` crate.

pub mod assistant;
pub mod billing;
pub mod errors;
pub mod goals;
pub mod habits;
pub mod profile;
pub mod stats;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
