use crate::errors::Result;
use crate::profile::profile_model::{Profile, ProfileUpdate};
use async_trait::async_trait;

/// Trait for profile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    async fn get_profile(&self, owner_id: &str) -> Result<Profile>;
    async fn update_profile(&self, owner_id: &str, update: ProfileUpdate) -> Result<Profile>;
    /// Reads only the remaining AI-credit counter. `None` means the
    /// column is unset for this profile.
    async fn get_ai_credits(&self, owner_id: &str) -> Result<Option<i64>>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn get_profile(&self) -> Result<Profile>;
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile>;
    async fn get_ai_credits(&self) -> Result<Option<i64>>;
}
