//! Wires every service in `smartplan-core` to its remote-backed
//! implementation. One context per signed-in session.

use std::sync::Arc;

use futures::try_join;
use log::debug;

use smartplan_core::assistant::AssistantService;
use smartplan_core::billing::BillingService;
use smartplan_core::errors::Result;
use smartplan_core::goals::{GoalService, GoalServiceTrait};
use smartplan_core::habits::{HabitService, HabitServiceTrait};
use smartplan_core::profile::ProfileService;

use crate::client::BaasClient;
use crate::config::GatewayConfig;
use crate::functions::{AssistantGateway, BillingGateway};
use crate::goals::GoalRepository;
use crate::habits::HabitRepository;
use crate::profile::ProfileRepository;

/// How many entries the dashboard shows per list.
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

/// All services for one signed-in owner, sharing a single HTTP client.
pub struct PlannerContext {
    pub goals: Arc<GoalService<GoalRepository>>,
    pub habits: Arc<HabitService<HabitRepository>>,
    pub profile: Arc<ProfileService>,
    pub assistant: Arc<AssistantService>,
    pub billing: Arc<BillingService>,
}

impl PlannerContext {
    /// Builds the full service graph for `owner_id` using the session's
    /// access token. Fails only on invalid configuration; no network
    /// call happens here.
    pub fn new(config: &GatewayConfig, access_token: &str, owner_id: &str) -> Result<Self> {
        let client = Arc::new(BaasClient::new(
            &config.api_url,
            &config.anon_key,
            access_token,
        )?);
        debug!("planner context ready for owner {}", owner_id);

        let goal_repo = Arc::new(GoalRepository::new(client.clone()));
        let habit_repo = Arc::new(HabitRepository::new(client.clone()));
        let profile_repo = Arc::new(ProfileRepository::new(client.clone()));
        let assistant_gateway = Arc::new(AssistantGateway::new(client.clone()));
        let billing_gateway = Arc::new(BillingGateway::new(client));

        Ok(PlannerContext {
            goals: Arc::new(GoalService::new(goal_repo, owner_id)),
            habits: Arc::new(HabitService::new(habit_repo, owner_id)),
            profile: Arc::new(ProfileService::new(profile_repo.clone(), owner_id)),
            assistant: Arc::new(AssistantService::new(
                assistant_gateway,
                profile_repo,
                owner_id,
            )),
            billing: Arc::new(BillingService::new(
                billing_gateway,
                config.stripe_publishable_key.clone(),
            )),
        })
    }

    /// Loads the dashboard's two recent lists concurrently. The full
    /// collections are left untouched; callers read the returned pairs.
    pub async fn recent_overview(
        &self,
    ) -> Result<(
        Vec<smartplan_core::goals::Goal>,
        Vec<smartplan_core::habits::Habit>,
    )> {
        try_join!(
            self.goals.fetch_recent(DEFAULT_RECENT_LIMIT),
            self.habits.fetch_recent(DEFAULT_RECENT_LIMIT)
        )
    }

    /// Refreshes both full collections concurrently.
    pub async fn refresh_all(&self) -> Result<()> {
        try_join!(self.goals.refresh(), self.habits.refresh())?;
        Ok(())
    }
}
