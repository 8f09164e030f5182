//! Derived stats - pure computations over the in-memory collections.
//!
//! Nothing here holds state; callers pass the current collections at
//! render time and get aggregate counts back.

use crate::goals::Goal;
use crate::habits::Habit;
use serde::Serialize;

/// Aggregate view of a goal collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub total: usize,
    pub completed: usize,
    /// Percentage in [0, 100]; 0 for an empty collection.
    pub completion_rate: f64,
}

/// Aggregate view of a habit collection for a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    pub active: usize,
    pub completed_today: usize,
    /// Percentage in [0, 100]; 0 for an empty collection.
    pub today_completion_rate: f64,
    /// Sum of the persisted streak counters, not recomputed from dates.
    pub total_streak_days: u64,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn goal_summary(goals: &[Goal]) -> GoalSummary {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.completed).count();
    GoalSummary {
        total,
        completed,
        completion_rate: percentage(completed, total),
    }
}

/// `today` is the canonical day-stamp for the local device date
/// (`utils::time_utils::today_stamp`); it is a parameter so callers and
/// tests control the clock.
pub fn habit_summary(habits: &[Habit], today: &str) -> HabitSummary {
    let active = habits.len();
    let completed_today = habits.iter().filter(|h| h.is_completed_on(today)).count();
    let total_streak_days = habits.iter().map(|h| u64::from(h.streak)).sum();
    HabitSummary {
        active,
        completed_today,
        today_completion_rate: percentage(completed_today, active),
        total_streak_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::Priority;
    use crate::habits::Frequency;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn goal(id: &str, completed: bool) -> Goal {
        let ts = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Goal {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            title: format!("Goal {}", id),
            description: None,
            category: None,
            target_date: None,
            priority: Priority::Medium,
            completed,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn habit(id: &str, streak: u32, dates: &[&str]) -> Habit {
        let ts = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Habit {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            name: format!("Habit {}", id),
            description: None,
            category: None,
            frequency: Frequency::Daily,
            streak,
            completed_dates: dates.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn empty_collections_have_zero_rates() {
        assert_eq!(goal_summary(&[]).completion_rate, 0.0);
        assert_eq!(habit_summary(&[], "Sat Aug 29 2026").today_completion_rate, 0.0);
    }

    #[test]
    fn all_completed_is_one_hundred_percent() {
        let goals = vec![goal("1", true), goal("2", true)];
        let summary = goal_summary(&goals);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.completion_rate, 100.0);
    }

    #[test]
    fn partial_completion_rate() {
        let goals = vec![goal("1", true), goal("2", false), goal("3", false), goal("4", false)];
        assert_eq!(goal_summary(&goals).completion_rate, 25.0);
    }

    #[test]
    fn habit_summary_counts_today_membership() {
        let today = "Sat Aug 29 2026";
        let habits = vec![
            habit("1", 3, &[today]),
            habit("2", 0, &[]),
            habit("3", 7, &["Fri Aug 28 2026"]),
        ];
        let summary = habit_summary(&habits, today);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.completed_today, 1);
        assert_eq!(summary.total_streak_days, 10);
    }

    #[test]
    fn total_streak_uses_persisted_counters_not_dates() {
        // Streak 5 with a single recorded date: the sum trusts the counter.
        let habits = vec![habit("1", 5, &["Sat Aug 29 2026"])];
        assert_eq!(habit_summary(&habits, "Sat Aug 29 2026").total_streak_days, 5);
    }

    proptest! {
        #[test]
        fn completion_rate_stays_in_bounds(flags in proptest::collection::vec(any::<bool>(), 0..64)) {
            let goals: Vec<Goal> = flags
                .iter()
                .enumerate()
                .map(|(i, &c)| goal(&i.to_string(), c))
                .collect();
            let rate = goal_summary(&goals).completion_rate;
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }
}
