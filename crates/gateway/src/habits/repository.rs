use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use smartplan_core::errors::{GatewayError, Result};
use smartplan_core::habits::{Habit, HabitProgress, HabitRepositoryTrait, HabitUpdate, NewHabit};

use super::model::{HabitProgressRow, HabitRow, HabitUpdateRow, NewHabitRow};
use crate::client::BaasClient;
use crate::filters;

const HABITS_TABLE: &str = "habits";

/// Remote repository for the `habits` table.
pub struct HabitRepository {
    client: Arc<BaasClient>,
}

impl HabitRepository {
    pub fn new(client: Arc<BaasClient>) -> Self {
        HabitRepository { client }
    }

    async fn patch_one(
        &self,
        habit_id: &str,
        query: &str,
        body: &impl serde::Serialize,
        guarded: bool,
    ) -> Result<Habit> {
        let mut rows: Vec<HabitRow> = self.client.patch_rows(HABITS_TABLE, query, body).await?;
        match rows.pop() {
            Some(row) => Ok(Habit::from(row)),
            None if guarded => Err(GatewayError::StaleWrite(format!(
                "habit {} changed since it was read",
                habit_id
            ))
            .into()),
            None => Err(GatewayError::NotFound(format!("habit {}", habit_id)).into()),
        }
    }
}

#[async_trait]
impl HabitRepositoryTrait for HabitRepository {
    async fn list_habits(&self, owner_id: &str, limit: Option<i64>) -> Result<Vec<Habit>> {
        let rows: Vec<HabitRow> = self
            .client
            .select_rows(HABITS_TABLE, &filters::owner_list(owner_id, limit))
            .await?;
        Ok(rows.into_iter().map(Habit::from).collect())
    }

    async fn insert_habit(&self, owner_id: &str, new_habit: NewHabit) -> Result<Habit> {
        let row: HabitRow = self
            .client
            .insert_row(HABITS_TABLE, &NewHabitRow::new(owner_id, new_habit))
            .await?;
        Ok(Habit::from(row))
    }

    async fn update_habit(
        &self,
        habit_id: &str,
        update: HabitUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Habit> {
        let query = filters::row_match(habit_id, expected_updated_at);
        self.patch_one(
            habit_id,
            &query,
            &HabitUpdateRow::from(update),
            expected_updated_at.is_some(),
        )
        .await
    }

    async fn update_habit_progress(
        &self,
        habit_id: &str,
        progress: HabitProgress,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Habit> {
        let query = filters::row_match(habit_id, expected_updated_at);
        self.patch_one(
            habit_id,
            &query,
            &HabitProgressRow::from(progress),
            expected_updated_at.is_some(),
        )
        .await
    }

    async fn delete_habit(
        &self,
        habit_id: &str,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let query = filters::row_match(habit_id, expected_updated_at);
        let rows: Vec<HabitRow> = self.client.delete_rows(HABITS_TABLE, &query).await?;

        if rows.is_empty() && expected_updated_at.is_some() {
            return Err(GatewayError::StaleWrite(format!(
                "habit {} changed since it was read",
                habit_id
            ))
            .into());
        }
        Ok(())
    }
}
