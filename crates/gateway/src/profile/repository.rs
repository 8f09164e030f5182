use async_trait::async_trait;
use std::sync::Arc;

use smartplan_core::errors::{GatewayError, Result};
use smartplan_core::profile::{Profile, ProfileRepositoryTrait, ProfileUpdate};

use super::model::{CreditsRow, ProfileRow, ProfileUpdateRow};
use crate::client::BaasClient;
use crate::filters;

const PROFILES_TABLE: &str = "profiles";

/// Remote repository for the `profiles` table. One row per user.
pub struct ProfileRepository {
    client: Arc<BaasClient>,
}

impl ProfileRepository {
    pub fn new(client: Arc<BaasClient>) -> Self {
        ProfileRepository { client }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn get_profile(&self, owner_id: &str) -> Result<Profile> {
        let mut rows: Vec<ProfileRow> = self
            .client
            .select_rows(PROFILES_TABLE, &filters::profile_column(owner_id, "*"))
            .await?;
        rows.pop()
            .map(Profile::from)
            .ok_or_else(|| GatewayError::NotFound(format!("profile {}", owner_id)).into())
    }

    async fn update_profile(&self, owner_id: &str, update: ProfileUpdate) -> Result<Profile> {
        let query = filters::row_match(owner_id, None);
        let mut rows: Vec<ProfileRow> = self
            .client
            .patch_rows(PROFILES_TABLE, &query, &ProfileUpdateRow::from(update))
            .await?;
        rows.pop()
            .map(Profile::from)
            .ok_or_else(|| GatewayError::NotFound(format!("profile {}", owner_id)).into())
    }

    async fn get_ai_credits(&self, owner_id: &str) -> Result<Option<i64>> {
        let mut rows: Vec<CreditsRow> = self
            .client
            .select_rows(
                PROFILES_TABLE,
                &filters::profile_column(owner_id, "ai_credits_remaining"),
            )
            .await?;
        match rows.pop() {
            Some(row) => Ok(row.ai_credits_remaining),
            None => Err(GatewayError::NotFound(format!("profile {}", owner_id)).into()),
        }
    }
}
