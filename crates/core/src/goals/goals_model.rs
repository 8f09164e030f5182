//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Goal priority. Defaults to medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Domain model representing a goal.
///
/// `id`, `owner_id`, `created_at`, and `updated_at` are server-assigned;
/// the client never invents or rewrites them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Input model for updating an existing goal.
///
/// Carries every client-editable field; the remote update replaces them
/// all in one round trip, the way the edit form submits them.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

impl From<&Goal> for GoalUpdate {
    fn from(goal: &Goal) -> Self {
        GoalUpdate {
            title: goal.title.clone(),
            description: goal.description.clone(),
            category: goal.category.clone(),
            target_date: goal.target_date,
            priority: goal.priority,
            completed: goal.completed,
        }
    }
}
