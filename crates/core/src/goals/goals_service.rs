use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory owner of the signed-in user's goal collection.
///
/// Holds the current list (newest first) and mediates every mutation
/// against the injected repository. Nothing appears, disappears, or
/// changes locally until the authoritative remote response returns; a
/// failed call leaves the collection exactly as it was.
pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
    owner_id: String,
    items: RwLock<Vec<Goal>>,
    loading: AtomicBool,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>, owner_id: impl Into<String>) -> Self {
        GoalService {
            goal_repo,
            owner_id: owner_id.into(),
            items: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    fn read_items(&self) -> Vec<Goal> {
        self.items.read().expect("goal state lock poisoned").clone()
    }

    fn find_goal(&self, goal_id: &str) -> Result<Goal> {
        self.read_items()
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "No goal with id '{}' in the current collection",
                    goal_id
                )))
            })
    }

    fn replace_in_place(&self, updated: Goal) {
        let mut items = self.items.write().expect("goal state lock poisoned");
        if let Some(slot) = items.iter_mut().find(|g| g.id == updated.id) {
            *slot = updated;
        }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn goals(&self) -> Vec<Goal> {
        self.read_items()
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Fetches the full list for the owner and replaces the collection
    /// wholesale. Never applies a partial update: on failure the previous
    /// collection stays in place.
    async fn refresh(&self) -> Result<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.goal_repo.list_goals(&self.owner_id, None).await;
        self.loading.store(false, Ordering::SeqCst);

        let goals = result?;
        debug!("Refreshed {} goals for owner {}", goals.len(), self.owner_id);
        *self.items.write().expect("goal state lock poisoned") = goals;
        Ok(())
    }

    /// Fetches the newest `limit` goals without touching controller state.
    /// Used by the dashboard overview.
    async fn fetch_recent(&self, limit: i64) -> Result<Vec<Goal>> {
        self.goal_repo.list_goals(&self.owner_id, Some(limit)).await
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }

        let created = self.goal_repo.insert_goal(&self.owner_id, new_goal).await?;
        self.items
            .write()
            .expect("goal state lock poisoned")
            .insert(0, created.clone());
        Ok(created)
    }

    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        if update.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }

        let current = self.find_goal(goal_id)?;
        let updated = self
            .goal_repo
            .update_goal(goal_id, update, Some(current.updated_at))
            .await?;
        self.replace_in_place(updated.clone());
        Ok(updated)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let current = self.find_goal(goal_id)?;
        self.goal_repo
            .delete_goal(goal_id, Some(current.updated_at))
            .await?;
        self.items
            .write()
            .expect("goal state lock poisoned")
            .retain(|g| g.id != goal_id);
        Ok(())
    }

    async fn toggle_completion(&self, goal_id: &str) -> Result<Goal> {
        let current = self.find_goal(goal_id)?;
        let mut update = GoalUpdate::from(&current);
        update.completed = !current.completed;

        let updated = self
            .goal_repo
            .update_goal(goal_id, update, Some(current.updated_at))
            .await?;
        self.replace_in_place(updated.clone());
        Ok(updated)
    }
}
