//! Habits domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How often a habit is meant to be performed. Defaults to daily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

/// Domain model representing a habit.
///
/// `completed_dates` is a set of canonical day-stamps (see
/// `utils::time_utils`), so a given calendar day appears at most once.
/// `streak` is a persisted counter mutated alongside the set; it is not
/// recomputed from the set on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
    pub streak: u32,
    pub completed_dates: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Whether the habit was completed on the given day-stamp.
    pub fn is_completed_on(&self, stamp: &str) -> bool {
        self.completed_dates.contains(stamp)
    }
}

/// Input model for creating a new habit.
///
/// The server initialises `streak` to 0 and `completed_dates` to empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
}

/// Input model for editing a habit's descriptive fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HabitUpdate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
}

impl From<&Habit> for HabitUpdate {
    fn from(habit: &Habit) -> Self {
        HabitUpdate {
            name: habit.name.clone(),
            description: habit.description.clone(),
            category: habit.category.clone(),
            frequency: habit.frequency,
        }
    }
}

/// Combined streak and date-set mutation, sent as one remote update.
///
/// There is no server-side transaction behind this write: two sessions
/// toggling the same habit concurrently can still drift the counter
/// relative to the set. The controller supplies a concurrency token to
/// reject the second writer instead of silently losing the first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgress {
    pub streak: u32,
    pub completed_dates: BTreeSet<String>,
}
