//! Wire models for the `goals` table.
//!
//! Rows use the backend's snake_case column names; conversions to the
//! camelCase domain models live here so the repository stays thin.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use smartplan_core::goals::{Goal, GoalUpdate, NewGoal, Priority};

#[derive(Debug, Deserialize)]
pub(crate) struct GoalRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Goal {
            id: row.id,
            owner_id: row.user_id,
            title: row.title,
            description: row.description,
            category: row.category,
            target_date: row.target_date,
            priority: row.priority,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload. The server assigns id, timestamps, and the
/// `completed` default.
#[derive(Debug, Serialize)]
pub(crate) struct NewGoalRow {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl NewGoalRow {
    pub fn new(owner_id: &str, new_goal: NewGoal) -> Self {
        NewGoalRow {
            user_id: owner_id.to_string(),
            title: new_goal.title,
            description: new_goal.description,
            category: new_goal.category,
            target_date: new_goal.target_date,
            priority: new_goal.priority,
        }
    }
}

/// Update payload; `updated_at` is refreshed server-side.
#[derive(Debug, Serialize)]
pub(crate) struct GoalUpdateRow {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

impl From<GoalUpdate> for GoalUpdateRow {
    fn from(update: GoalUpdate) -> Self {
        GoalUpdateRow {
            title: update.title,
            description: update.description,
            category: update.category,
            target_date: update.target_date,
            priority: update.priority,
            completed: update.completed,
        }
    }
}
