//! Tests for the goal controller contract.
//!
//! The mock repository counts calls so the tests can assert that
//! validation failures never reach the network, and that a failed
//! remote call leaves the local collection untouched.

use super::*;
use crate::errors::{Error, GatewayError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

struct MockGoalRepository {
    rows: Mutex<Vec<Goal>>,
    calls: AtomicU32,
    fail_writes: Mutex<bool>,
}

impl MockGoalRepository {
    fn new(rows: Vec<Goal>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: AtomicU32::new(0),
            fail_writes: Mutex::new(false),
        }
    }

    fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn row(id: &str, title: &str, created_offset_secs: i64) -> Goal {
        let created = Self::base_time() + Duration::seconds(created_offset_secs);
        Goal {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            title: title.to_string(),
            description: None,
            category: None,
            target_date: None,
            priority: Priority::Medium,
            completed: false,
            created_at: created,
            updated_at: created,
        }
    }
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    async fn list_goals(&self, owner_id: &str, limit: Option<i64>) -> Result<Vec<Goal>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<Goal> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(n) = limit {
            rows.truncate(n as usize);
        }
        Ok(rows)
    }

    async fn insert_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<Goal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_writes.lock().unwrap() {
            return Err(GatewayError::Api("insert rejected".to_string()).into());
        }
        let mut rows = self.rows.lock().unwrap();
        let now = Self::base_time() + Duration::seconds(1000 + rows.len() as i64);
        let created = Goal {
            id: format!("goal-{}", rows.len() + 1),
            owner_id: owner_id.to_string(),
            title: new_goal.title,
            description: new_goal.description,
            category: new_goal.category,
            target_date: new_goal.target_date,
            priority: new_goal.priority,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_goal(
        &self,
        goal_id: &str,
        update: GoalUpdate,
        expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<Goal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_writes.lock().unwrap() {
            return Err(GatewayError::Api("update rejected".to_string()).into());
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GatewayError::NotFound(goal_id.to_string()))?;
        if let Some(token) = expected_updated_at {
            if row.updated_at != token {
                return Err(GatewayError::StaleWrite(goal_id.to_string()).into());
            }
        }
        row.title = update.title;
        row.description = update.description;
        row.category = update.category;
        row.target_date = update.target_date;
        row.priority = update.priority;
        row.completed = update.completed;
        row.updated_at = row.updated_at + Duration::seconds(1);
        Ok(row.clone())
    }

    async fn delete_goal(
        &self,
        goal_id: &str,
        _expected_updated_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_writes.lock().unwrap() {
            return Err(GatewayError::Api("delete rejected".to_string()).into());
        }
        self.rows.lock().unwrap().retain(|g| g.id != goal_id);
        Ok(())
    }
}

fn service_with(rows: Vec<Goal>) -> (GoalService<MockGoalRepository>, Arc<MockGoalRepository>) {
    let repo = Arc::new(MockGoalRepository::new(rows));
    (GoalService::new(repo.clone(), "user-1"), repo)
}

#[tokio::test]
async fn refresh_replaces_collection_newest_first() {
    let (service, _repo) = service_with(vec![
        MockGoalRepository::row("goal-1", "Older", 0),
        MockGoalRepository::row("goal-2", "Newer", 60),
    ]);

    service.refresh().await.unwrap();

    let goals = service.goals();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, "goal-2");
    assert_eq!(goals[1].id, "goal-1");
    assert!(!service.is_loading());
}

#[tokio::test]
async fn create_validates_title_without_remote_call() {
    let (service, repo) = service_with(vec![]);

    let result = service
        .create_goal(NewGoal {
            title: "   ".to_string(),
            ..NewGoal::default()
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(repo.calls(), 0);
    assert!(service.goals().is_empty());
}

#[tokio::test]
async fn create_prepends_new_goal_exactly_once() {
    let (service, _repo) = service_with(vec![MockGoalRepository::row("goal-1", "Existing", 0)]);
    service.refresh().await.unwrap();

    let created = service
        .create_goal(NewGoal {
            title: "Run 5k".to_string(),
            priority: Priority::High,
            ..NewGoal::default()
        })
        .await
        .unwrap();

    let goals = service.goals();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, created.id);
    assert!(!created.completed);
    assert_eq!(goals.iter().filter(|g| g.id == created.id).count(), 1);
}

#[tokio::test]
async fn update_replaces_entry_in_place() {
    let (service, _repo) = service_with(vec![
        MockGoalRepository::row("goal-1", "First", 120),
        MockGoalRepository::row("goal-2", "Second", 60),
        MockGoalRepository::row("goal-3", "Third", 0),
    ]);
    service.refresh().await.unwrap();

    let mut update = GoalUpdate::from(&service.goals()[1]);
    update.title = "Second, revised".to_string();
    service.update_goal("goal-2", update).await.unwrap();

    let goals = service.goals();
    // Position is stable: no re-sort by the fresher updated_at.
    assert_eq!(goals[1].id, "goal-2");
    assert_eq!(goals[1].title, "Second, revised");
}

#[tokio::test]
async fn failed_update_leaves_collection_untouched() {
    let (service, repo) = service_with(vec![MockGoalRepository::row("goal-1", "Original", 0)]);
    service.refresh().await.unwrap();
    repo.set_fail_writes(true);

    let mut update = GoalUpdate::from(&service.goals()[0]);
    update.title = "Changed".to_string();
    let result = service.update_goal("goal-1", update).await;

    assert!(result.is_err());
    assert_eq!(service.goals()[0].title, "Original");
}

#[tokio::test]
async fn stale_update_is_rejected_distinctly() {
    let (service, repo) = service_with(vec![MockGoalRepository::row("goal-1", "Original", 0)]);
    service.refresh().await.unwrap();

    // Another session wins the race.
    let mut foreign = GoalUpdate::from(&service.goals()[0]);
    foreign.title = "From another tab".to_string();
    repo.update_goal("goal-1", foreign, None).await.unwrap();

    let mut update = GoalUpdate::from(&service.goals()[0]);
    update.title = "Mine".to_string();
    let result = service.update_goal("goal-1", update).await;

    assert!(matches!(
        result,
        Err(Error::Gateway(GatewayError::StaleWrite(_)))
    ));
    assert_eq!(service.goals()[0].title, "Original");
}

#[tokio::test]
async fn delete_removes_entry() {
    let (service, _repo) = service_with(vec![
        MockGoalRepository::row("goal-1", "Keep", 60),
        MockGoalRepository::row("goal-2", "Drop", 0),
    ]);
    service.refresh().await.unwrap();

    service.delete_goal("goal-2").await.unwrap();

    let goals = service.goals();
    assert_eq!(goals.len(), 1);
    assert!(goals.iter().all(|g| g.id != "goal-2"));
}

#[tokio::test]
async fn create_toggle_delete_scenario() {
    let (service, _repo) = service_with(vec![]);
    service.refresh().await.unwrap();

    let created = service
        .create_goal(NewGoal {
            title: "Run 5k".to_string(),
            priority: Priority::High,
            ..NewGoal::default()
        })
        .await
        .unwrap();
    assert_eq!(service.goals().len(), 1);
    assert!(!service.goals()[0].completed);

    let toggled = service.toggle_completion(&created.id).await.unwrap();
    assert!(toggled.completed);
    assert!(service.goals()[0].completed);

    service.delete_goal(&created.id).await.unwrap();
    assert!(service.goals().is_empty());
}

#[tokio::test]
async fn fetch_recent_does_not_touch_state() {
    let (service, _repo) = service_with(vec![
        MockGoalRepository::row("goal-1", "A", 0),
        MockGoalRepository::row("goal-2", "B", 60),
        MockGoalRepository::row("goal-3", "C", 120),
    ]);

    let recent = service.fetch_recent(2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, "goal-3");
    assert!(service.goals().is_empty());
}
