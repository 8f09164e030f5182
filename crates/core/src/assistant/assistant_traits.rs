use crate::assistant::assistant_model::{AssistantReply, AssistantTask};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the remote AI function.
///
/// A single request/response call; coded failures surface as
/// `Error::Assistant(AssistantError::…)`.
#[async_trait]
pub trait AssistantGatewayTrait: Send + Sync {
    async fn invoke(&self, task: AssistantTask, input: &str) -> Result<AssistantReply>;
    /// Verifies and stores the site's provider API key server-side.
    async fn store_api_key(&self, api_key: &str) -> Result<()>;
}

/// Trait for assistant service operations (the credit gate).
#[async_trait]
pub trait AssistantServiceTrait: Send + Sync {
    /// Cached remaining credits; `None` means not fetched yet.
    fn remaining_credits(&self) -> Option<i64>;
    /// Re-reads the counter from the profile record.
    async fn refresh_credits(&self) -> Result<Option<i64>>;
    async fn suggest(&self, context: &str) -> Result<Vec<String>>;
    async fn plan(&self, goal: &str) -> Result<Vec<String>>;
    /// Site-owner operation; not credit gated.
    async fn store_api_key(&self, api_key: &str) -> Result<()>;
}
