//! AI assistant error types.
//!
//! The remote function reports failures through a small fixed set of
//! string codes. This enum closes that set: every recognized code gets
//! its own variant and user-facing category, and anything else falls
//! through to `Unknown` carrying the raw message.

use thiserror::Error;

/// AI assistant errors, one variant per recognized remote error code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// The site owner has not configured an OpenAI API key.
    #[error("The OpenAI API key has not been configured by the site owner")]
    MissingApiKey,

    /// The configured API key is incorrect or has been revoked.
    #[error("The API key is incorrect or revoked. Please notify the administrator")]
    InvalidApiKey,

    /// The site's OpenAI account has exhausted its quota.
    #[error("The site's OpenAI account has run out of credits. Please notify the administrator")]
    InsufficientQuota,

    /// The user has spent all of their AI credits.
    #[error("You have used all your free credits. Please upgrade to a premium plan")]
    NoCreditsRemaining,

    /// Unrecognized failure; carries the raw message from the function.
    #[error("{0}")]
    Unknown(String),
}

impl AssistantError {
    /// Maps a remote error code to its variant. Unrecognized codes keep
    /// the details (or the code itself) as the message.
    pub fn from_code(code: &str, details: Option<String>) -> Self {
        match code {
            "missing_api_key" => AssistantError::MissingApiKey,
            "invalid_api_key" => AssistantError::InvalidApiKey,
            "insufficient_quota" => AssistantError::InsufficientQuota,
            "no_credits_remaining" => AssistantError::NoCreditsRemaining,
            other => AssistantError::Unknown(details.unwrap_or_else(|| other.to_string())),
        }
    }

    /// Wire-level code for this variant.
    pub fn code(&self) -> &'static str {
        match self {
            AssistantError::MissingApiKey => "missing_api_key",
            AssistantError::InvalidApiKey => "invalid_api_key",
            AssistantError::InsufficientQuota => "insufficient_quota",
            AssistantError::NoCreditsRemaining => "no_credits_remaining",
            AssistantError::Unknown(_) => "unknown",
        }
    }

    /// User-facing category title.
    pub fn title(&self) -> &'static str {
        match self {
            AssistantError::MissingApiKey => "OpenAI API Key Missing",
            AssistantError::InvalidApiKey => "Invalid OpenAI API Key",
            AssistantError::InsufficientQuota => "OpenAI Quota Exceeded",
            AssistantError::NoCreditsRemaining => "Out of AI Credits",
            AssistantError::Unknown(_) => "AI Assistant Error",
        }
    }

    /// Whether the feature stays unusable until the site owner fixes the
    /// key, as opposed to being usable again later (quota, credits).
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            AssistantError::MissingApiKey | AssistantError::InvalidApiKey
        )
    }
}
