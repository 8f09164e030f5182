//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod service_tests;

pub use goals_model::{Goal, GoalUpdate, NewGoal, Priority};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
