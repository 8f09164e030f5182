use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for goal repository operations.
///
/// Implemented by the gateway crate against the hosted backend. Each call
/// maps to exactly one remote round trip. `expected_updated_at` is an
/// optional concurrency token: when supplied, the write only applies if
/// the row's `updated_at` still matches, and a mismatch surfaces as
/// `GatewayError::StaleWrite`.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn list_goals(&self, owner_id: &str, limit: Option<i64>) -> Result<Vec<Goal>>;
    async fn insert_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(
        &self,
        goal_id: &str,
        update: GoalUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Goal>;
    async fn delete_goal(
        &self,
        goal_id: &str,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<()>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Current in-memory collection, newest first.
    fn goals(&self) -> Vec<Goal>;
    /// Whether a wholesale refresh is in flight.
    fn is_loading(&self) -> bool;
    async fn refresh(&self) -> Result<()>;
    async fn fetch_recent(&self, limit: i64) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
    async fn toggle_completion(&self, goal_id: &str) -> Result<Goal>;
}
