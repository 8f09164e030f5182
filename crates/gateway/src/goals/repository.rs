use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use smartplan_core::errors::{GatewayError, Result};
use smartplan_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};

use super::model::{GoalRow, GoalUpdateRow, NewGoalRow};
use crate::client::BaasClient;
use crate::filters;

const GOALS_TABLE: &str = "goals";

/// Remote repository for the `goals` table.
pub struct GoalRepository {
    client: Arc<BaasClient>,
}

impl GoalRepository {
    pub fn new(client: Arc<BaasClient>) -> Self {
        GoalRepository { client }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn list_goals(&self, owner_id: &str, limit: Option<i64>) -> Result<Vec<Goal>> {
        let rows: Vec<GoalRow> = self
            .client
            .select_rows(GOALS_TABLE, &filters::owner_list(owner_id, limit))
            .await?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    async fn insert_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let row: GoalRow = self
            .client
            .insert_row(GOALS_TABLE, &NewGoalRow::new(owner_id, new_goal))
            .await?;
        Ok(Goal::from(row))
    }

    async fn update_goal(
        &self,
        goal_id: &str,
        update: GoalUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Goal> {
        let query = filters::row_match(goal_id, expected_updated_at);
        let mut rows: Vec<GoalRow> = self
            .client
            .patch_rows(GOALS_TABLE, &query, &GoalUpdateRow::from(update))
            .await?;

        match rows.pop() {
            Some(row) => Ok(Goal::from(row)),
            None if expected_updated_at.is_some() => Err(GatewayError::StaleWrite(format!(
                "goal {} changed since it was read",
                goal_id
            ))
            .into()),
            None => Err(GatewayError::NotFound(format!("goal {}", goal_id)).into()),
        }
    }

    async fn delete_goal(
        &self,
        goal_id: &str,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let query = filters::row_match(goal_id, expected_updated_at);
        let rows: Vec<GoalRow> = self.client.delete_rows(GOALS_TABLE, &query).await?;

        if rows.is_empty() && expected_updated_at.is_some() {
            return Err(GatewayError::StaleWrite(format!(
                "goal {} changed since it was read",
                goal_id
            ))
            .into());
        }
        Ok(())
    }
}
