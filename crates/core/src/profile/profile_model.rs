//! Profile domain models.

use crate::billing::PlanTier;
use serde::{Deserialize, Serialize};

/// The signed-in user's profile record.
///
/// `email` mirrors the auth identity and is never written through this
/// client. `ai_credits_remaining` is decremented server-side by the AI
/// function; `plan` is assigned by the payment webhook. Both are
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub ai_credits_remaining: Option<i64>,
    pub plan: PlanTier,
}

/// Client-editable profile fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}
