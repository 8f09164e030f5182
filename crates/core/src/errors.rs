//! Core error types for the SmartPlan client.
//!
//! This module defines transport-agnostic error types. Gateway-specific
//! failures (HTTP status codes, response bodies, etc.) are converted to
//! these types by the gateway layer.

use thiserror::Error;

use crate::assistant::AssistantError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planner client.
///
/// Every failure is terminal at the point of occurrence: the triggering
/// operation is abandoned, local state is left untouched, and the message
/// is surfaced to the caller. There is no retry and no partial application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote operation failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("AI assistant error: {0}")]
    Assistant(#[from] AssistantError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error type for remote data operations.
///
/// This enum uses `String` for all error details, allowing the gateway
/// layer to convert HTTP-specific errors into this format.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never completed (DNS, connection, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The caller is not allowed to touch the addressed rows.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// The addressed record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A conditional write was rejected because the row changed since it
    /// was last read.
    #[error("Stale write rejected: {0}")]
    StaleWrite(String),

    /// The server answered but the body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ResponseParse(String),

    /// The server reported a failure of its own.
    #[error("API error: {0}")]
    Api(String),
}

/// Validation errors caught client-side before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Startup configuration errors, detected before attempting a call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Configuration value for '{0}' is a placeholder")]
    Placeholder(String),
}
