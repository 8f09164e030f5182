//! Habit rows and their remote repository.

mod model;
mod repository;

pub use repository::HabitRepository;
