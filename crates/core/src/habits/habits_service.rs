use crate::errors::{Error, Result, ValidationError};
use crate::habits::habits_model::{Habit, HabitProgress, HabitUpdate, NewHabit};
use crate::habits::habits_traits::{HabitRepositoryTrait, HabitServiceTrait};
use crate::utils::time_utils::today_stamp;
use async_trait::async_trait;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory owner of the signed-in user's habit collection.
///
/// Mutation semantics match `GoalService`: the collection only changes
/// once the authoritative remote response returns.
pub struct HabitService<T: HabitRepositoryTrait> {
    habit_repo: Arc<T>,
    owner_id: String,
    items: RwLock<Vec<Habit>>,
    loading: AtomicBool,
}

impl<T: HabitRepositoryTrait> HabitService<T> {
    pub fn new(habit_repo: Arc<T>, owner_id: impl Into<String>) -> Self {
        HabitService {
            habit_repo,
            owner_id: owner_id.into(),
            items: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    fn read_items(&self) -> Vec<Habit> {
        self.items
            .read()
            .expect("habit state lock poisoned")
            .clone()
    }

    fn find_habit(&self, habit_id: &str) -> Result<Habit> {
        self.read_items()
            .into_iter()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "No habit with id '{}' in the current collection",
                    habit_id
                )))
            })
    }

    fn replace_in_place(&self, updated: Habit) {
        let mut items = self.items.write().expect("habit state lock poisoned");
        if let Some(slot) = items.iter_mut().find(|h| h.id == updated.id) {
            *slot = updated;
        }
    }
}

#[async_trait]
impl<T: HabitRepositoryTrait> HabitServiceTrait for HabitService<T> {
    fn habits(&self) -> Vec<Habit> {
        self.read_items()
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    async fn refresh(&self) -> Result<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.habit_repo.list_habits(&self.owner_id, None).await;
        self.loading.store(false, Ordering::SeqCst);

        let habits = result?;
        debug!(
            "Refreshed {} habits for owner {}",
            habits.len(),
            self.owner_id
        );
        *self.items.write().expect("habit state lock poisoned") = habits;
        Ok(())
    }

    async fn fetch_recent(&self, limit: i64) -> Result<Vec<Habit>> {
        self.habit_repo
            .list_habits(&self.owner_id, Some(limit))
            .await
    }

    async fn create_habit(&self, new_habit: NewHabit) -> Result<Habit> {
        if new_habit.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let created = self
            .habit_repo
            .insert_habit(&self.owner_id, new_habit)
            .await?;
        self.items
            .write()
            .expect("habit state lock poisoned")
            .insert(0, created.clone());
        Ok(created)
    }

    async fn update_habit(&self, habit_id: &str, update: HabitUpdate) -> Result<Habit> {
        if update.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let current = self.find_habit(habit_id)?;
        let updated = self
            .habit_repo
            .update_habit(habit_id, update, Some(current.updated_at))
            .await?;
        self.replace_in_place(updated.clone());
        Ok(updated)
    }

    async fn delete_habit(&self, habit_id: &str) -> Result<()> {
        let current = self.find_habit(habit_id)?;
        self.habit_repo
            .delete_habit(habit_id, Some(current.updated_at))
            .await?;
        self.items
            .write()
            .expect("habit state lock poisoned")
            .retain(|h| h.id != habit_id);
        Ok(())
    }

    /// Toggles today's completion for a habit.
    ///
    /// If today's day-stamp is present it is removed and the streak drops
    /// by one, floored at zero; otherwise it is added and the streak rises
    /// by one. Both fields go to the backend in a single update, so
    /// toggling twice in sequence restores the original state.
    async fn toggle_today(&self, habit_id: &str) -> Result<Habit> {
        let current = self.find_habit(habit_id)?;
        let today = today_stamp();

        let mut completed_dates = current.completed_dates.clone();
        let streak = if completed_dates.remove(&today) {
            current.streak.saturating_sub(1)
        } else {
            completed_dates.insert(today);
            current.streak + 1
        };

        let progress = HabitProgress {
            streak,
            completed_dates,
        };
        let updated = self
            .habit_repo
            .update_habit_progress(habit_id, progress, Some(current.updated_at))
            .await?;
        self.replace_in_place(updated.clone());
        Ok(updated)
    }
}
