//! Habits module - domain models, services, and traits.

mod habits_model;
mod habits_service;
mod habits_traits;


pub use habits_model::{Frequency, Habit, HabitProgress, HabitUpdate, NewHabit};
pub use habits_service::HabitService;
pub use habits_traits::{HabitRepositoryTrait, HabitServiceTrait};
