//! Wire models for the `profiles` table.

use serde::{Deserialize, Serialize};
use smartplan_core::billing::PlanTier;
use smartplan_core::profile::{Profile, ProfileUpdate};

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub ai_credits_remaining: Option<i64>,
    #[serde(default)]
    pub plan_id: Option<PlanTier>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            timezone: row.timezone,
            language: row.language,
            ai_credits_remaining: row.ai_credits_remaining,
            plan: row.plan_id.unwrap_or_default(),
        }
    }
}

/// Update payload. Email, credits, and plan are never written from the
/// client.
#[derive(Debug, Serialize)]
pub(crate) struct ProfileUpdateRow {
    pub full_name: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

impl From<ProfileUpdate> for ProfileUpdateRow {
    fn from(update: ProfileUpdate) -> Self {
        ProfileUpdateRow {
            full_name: update.full_name,
            timezone: update.timezone,
            language: update.language,
        }
    }
}

/// Single-column read of the credit counter.
#[derive(Debug, Deserialize)]
pub(crate) struct CreditsRow {
    #[serde(default)]
    pub ai_credits_remaining: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_with_plan_default() {
        let json = r#"{"id": "user-1", "email": "a@b.co", "ai_credits_remaining": 7}"#;
        let row: ProfileRow = serde_json::from_str(json).unwrap();
        let profile = Profile::from(row);

        assert_eq!(profile.plan, PlanTier::Free);
        assert_eq!(profile.ai_credits_remaining, Some(7));
    }

    #[test]
    fn plan_tier_decodes_from_column_value() {
        let json = r#"{"id": "user-1", "plan_id": "pro"}"#;
        let row: ProfileRow = serde_json::from_str(json).unwrap();
        assert_eq!(Profile::from(row).plan, PlanTier::Pro);
    }

    #[test]
    fn update_payload_excludes_protected_columns() {
        let payload = ProfileUpdateRow::from(ProfileUpdate {
            full_name: Some("Ada".to_string()),
            timezone: Some("Europe/Paris".to_string()),
            language: None,
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("ai_credits_remaining").is_none());
        assert!(json.get("plan_id").is_none());
    }
}
