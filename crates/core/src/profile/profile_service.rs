use crate::errors::Result;
use crate::profile::profile_model::{Profile, ProfileUpdate};
use crate::profile::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

/// Stateless delegation to the profile repository, scoped to one owner.
pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    owner_id: String,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryTrait>, owner_id: impl Into<String>) -> Self {
        ProfileService {
            profile_repo,
            owner_id: owner_id.into(),
        }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn get_profile(&self) -> Result<Profile> {
        self.profile_repo.get_profile(&self.owner_id).await
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile> {
        self.profile_repo
            .update_profile(&self.owner_id, update)
            .await
    }

    async fn get_ai_credits(&self) -> Result<Option<i64>> {
        self.profile_repo.get_ai_credits(&self.owner_id).await
    }
}
