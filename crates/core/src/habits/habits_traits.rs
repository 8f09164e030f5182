use crate::errors::Result;
use crate::habits::habits_model::{Habit, HabitProgress, HabitUpdate, NewHabit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for habit repository operations.
///
/// Semantics mirror `GoalRepositoryTrait`: one remote round trip per
/// call, optional `updated_at` concurrency token on writes.
#[async_trait]
pub trait HabitRepositoryTrait: Send + Sync {
    async fn list_habits(&self, owner_id: &str, limit: Option<i64>) -> Result<Vec<Habit>>;
    async fn insert_habit(&self, owner_id: &str, new_habit: NewHabit) -> Result<Habit>;
    async fn update_habit(
        &self,
        habit_id: &str,
        update: HabitUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Habit>;
    /// Persists a streak/date-set pair in a single call.
    async fn update_habit_progress(
        &self,
        habit_id: &str,
        progress: HabitProgress,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Habit>;
    async fn delete_habit(
        &self,
        habit_id: &str,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<()>;
}

/// Trait for habit service operations.
#[async_trait]
pub trait HabitServiceTrait: Send + Sync {
    /// Current in-memory collection, newest first.
    fn habits(&self) -> Vec<Habit>;
    /// Whether a wholesale refresh is in flight.
    fn is_loading(&self) -> bool;
    async fn refresh(&self) -> Result<()>;
    async fn fetch_recent(&self, limit: i64) -> Result<Vec<Habit>>;
    async fn create_habit(&self, new_habit: NewHabit) -> Result<Habit>;
    async fn update_habit(&self, habit_id: &str, update: HabitUpdate) -> Result<Habit>;
    async fn delete_habit(&self, habit_id: &str) -> Result<()>;
    async fn toggle_today(&self, habit_id: &str) -> Result<Habit>;
}
