//! SmartPlan Gateway - the sole component issuing network calls.
//!
//! Implements the repository and gateway traits from `smartplan-core`
//! against the hosted backend: row-level CRUD over the `goals`,
//! `habits`, and `profiles` tables, and single-shot invocations of the
//! serverless AI and payment functions. Every call maps to exactly one
//! remote round trip; there is no batching, no caching, and no retry.

pub mod client;
pub mod config;
pub mod context;
mod filters;
pub mod functions;
pub mod goals;
pub mod habits;
pub mod profile;

pub use client::BaasClient;
pub use config::GatewayConfig;
pub use context::PlannerContext;
