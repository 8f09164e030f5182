//! Wire models for the `habits` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartplan_core::habits::{Frequency, Habit, HabitProgress, HabitUpdate, NewHabit};
use std::collections::BTreeSet;

#[derive(Debug, Deserialize)]
pub(crate) struct HabitRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub streak: u32,
    /// Stored as a JSON array; duplicate stamps collapse on decode.
    #[serde(default)]
    pub completed_dates: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HabitRow> for Habit {
    fn from(row: HabitRow) -> Self {
        Habit {
            id: row.id,
            owner_id: row.user_id,
            name: row.name,
            description: row.description,
            category: row.category,
            frequency: row.frequency,
            streak: row.streak,
            completed_dates: row.completed_dates,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert payload. New habits start with a zero streak and no
/// completions, matching the table defaults.
#[derive(Debug, Serialize)]
pub(crate) struct NewHabitRow {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
    pub streak: u32,
    pub completed_dates: BTreeSet<String>,
}

impl NewHabitRow {
    pub fn new(owner_id: &str, new_habit: NewHabit) -> Self {
        NewHabitRow {
            user_id: owner_id.to_string(),
            name: new_habit.name,
            description: new_habit.description,
            category: new_habit.category,
            frequency: new_habit.frequency,
            streak: 0,
            completed_dates: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct HabitUpdateRow {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Frequency,
}

impl From<HabitUpdate> for HabitUpdateRow {
    fn from(update: HabitUpdate) -> Self {
        HabitUpdateRow {
            name: update.name,
            description: update.description,
            category: update.category,
            frequency: update.frequency,
        }
    }
}

/// The combined streak/date-set write, one round trip.
#[derive(Debug, Serialize)]
pub(crate) struct HabitProgressRow {
    pub streak: u32,
    pub completed_dates: BTreeSet<String>,
}

impl From<HabitProgress> for HabitProgressRow {
    fn from(progress: HabitProgress) -> Self {
        HabitProgressRow {
            streak: progress.streak,
            completed_dates: progress.completed_dates,
        }
    }
}
