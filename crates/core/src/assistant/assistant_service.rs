use crate::assistant::assistant_errors::AssistantError;
use crate::assistant::assistant_model::{AssistantReply, AssistantTask};
use crate::assistant::assistant_traits::{AssistantGatewayTrait, AssistantServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::profile::ProfileRepositoryTrait;
use async_trait::async_trait;
use log::warn;
use std::sync::{Arc, RwLock};

/// The AI credit gate.
///
/// Caches the profile's remaining-credit counter and refuses assistant
/// calls locally when it is exhausted, without touching the network.
/// The decrement itself happens server-side inside the AI function; the
/// cached value is only ever replaced by a fresh profile read.
pub struct AssistantService {
    assistant_gateway: Arc<dyn AssistantGatewayTrait>,
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    owner_id: String,
    credits: RwLock<Option<i64>>,
}

impl AssistantService {
    pub fn new(
        assistant_gateway: Arc<dyn AssistantGatewayTrait>,
        profile_repo: Arc<dyn ProfileRepositoryTrait>,
        owner_id: impl Into<String>,
    ) -> Self {
        AssistantService {
            assistant_gateway,
            profile_repo,
            owner_id: owner_id.into(),
            credits: RwLock::new(None),
        }
    }

    async fn run(&self, task: AssistantTask, input: &str, field: &str) -> Result<Vec<String>> {
        // Unknown credit count (not fetched yet) is allowed through; the
        // server enforces the real limit either way.
        if let Some(credits) = self.remaining_credits() {
            if credits <= 0 {
                return Err(AssistantError::NoCreditsRemaining.into());
            }
        }

        if input.trim().is_empty() {
            return Err(ValidationError::MissingField(field.to_string()).into());
        }

        let reply = self.assistant_gateway.invoke(task, input).await?;

        // The server already decremented; re-read the authoritative count.
        // A failed re-read is not worth failing a successful generation.
        if let Err(e) = self.refresh_credits().await {
            warn!("Could not refresh AI credits after call: {}", e);
        }

        Ok(reply.into_lines())
    }
}

#[async_trait]
impl AssistantServiceTrait for AssistantService {
    fn remaining_credits(&self) -> Option<i64> {
        *self.credits.read().expect("credits lock poisoned")
    }

    async fn refresh_credits(&self) -> Result<Option<i64>> {
        let credits = self.profile_repo.get_ai_credits(&self.owner_id).await?;
        *self.credits.write().expect("credits lock poisoned") = credits;
        Ok(credits)
    }

    async fn suggest(&self, context: &str) -> Result<Vec<String>> {
        self.run(AssistantTask::Suggestions, context, "context").await
    }

    async fn plan(&self, goal: &str) -> Result<Vec<String>> {
        self.run(AssistantTask::Plan, goal, "goal").await
    }

    async fn store_api_key(&self, api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(ValidationError::MissingField("apiKey".to_string()).into());
        }
        self.assistant_gateway.store_api_key(api_key).await
    }
}
